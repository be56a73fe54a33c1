use super::model::Record;

// ---------------------------------------------------------------------------
// Predicates: conjunction of per-field filter conditions
// ---------------------------------------------------------------------------

/// Sentinel selection meaning "no constraint" in exact-match filters.
pub const ALL: &str = "All";

/// A single filter condition. A query passes a record only when every
/// predicate matches (conjunction).
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Field equals the given value exactly. The [`ALL`] sentinel matches
    /// every record.
    Exact { field: String, value: String },
    /// Case-insensitive substring search over one or more fields; the
    /// record passes when any listed field contains the term. An empty
    /// term matches everything.
    Search { fields: Vec<String>, term: String },
}

impl Predicate {
    pub fn exact(field: &str, value: impl Into<String>) -> Self {
        Predicate::Exact {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn search(fields: &[&str], term: impl Into<String>) -> Self {
        Predicate::Search {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            term: term.into(),
        }
    }

    /// Whether the record satisfies this predicate. Fields the record does
    /// not carry never match.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        match self {
            Predicate::Exact { field, value } => {
                if value == ALL {
                    return true;
                }
                record
                    .field(field)
                    .is_some_and(|v| v.to_string() == *value)
            }
            Predicate::Search { fields, term } => {
                if term.is_empty() {
                    return true;
                }
                let needle = term.to_lowercase();
                fields.iter().any(|f| {
                    record
                        .field(f)
                        .is_some_and(|v| v.to_string().to_lowercase().contains(&needle))
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

// ---------------------------------------------------------------------------
// The query entry-point
// ---------------------------------------------------------------------------

/// Filter `records` by the conjunction of `filters`, then order by
/// `sort_key` in `direction`. Returns a fresh sequence of references; the
/// input is never mutated. The sort is stable, so rows with equal keys keep
/// their dataset order.
pub fn query<'a, R: Record>(
    records: &'a [R],
    filters: &[Predicate],
    sort_key: &str,
    direction: SortDirection,
) -> Vec<&'a R> {
    let mut rows: Vec<&R> = records
        .iter()
        .filter(|r| filters.iter().all(|p| p.matches(r)))
        .collect();

    rows.sort_by(|a, b| {
        let ord = match (a.field(sort_key), b.field(sort_key)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Greater,
            (None, Some(_)) => std::cmp::Ordering::Less,
            (None, None) => std::cmp::Ordering::Equal,
        };
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    rows
}

// ---------------------------------------------------------------------------
// Aggregates over a (possibly filtered) record set
// ---------------------------------------------------------------------------

/// Sum of a numeric field. Non-numeric or absent fields contribute nothing.
pub fn sum<R: Record>(rows: &[R], field: &str) -> f64 {
    rows.iter()
        .filter_map(|r| r.field(field).and_then(|v| v.as_f64()))
        .sum()
}

/// Arithmetic mean of a numeric field. The empty set has mean 0, never NaN.
pub fn mean<R: Record>(rows: &[R], field: &str) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    sum(rows, field) / rows.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::Dataset;
    use crate::data::model::field;

    #[test]
    fn unconstrained_query_preserves_size() {
        let ds = Dataset::builtin();
        let rows = query(&ds.faculty, &[], field::NAME, SortDirection::Ascending);
        assert_eq!(rows.len(), ds.faculty.len());
    }

    #[test]
    fn result_is_subset_satisfying_every_predicate() {
        let ds = Dataset::builtin();
        let filters = vec![
            Predicate::exact(field::CAMPUS, "UC Berkeley"),
            Predicate::search(&[field::NAME, field::TITLE], "professor"),
        ];
        let rows = query(&ds.faculty, &filters, field::SALARY, SortDirection::Descending);
        assert!(rows.len() <= ds.faculty.len());
        for row in &rows {
            assert!(filters.iter().all(|p| p.matches(row)));
        }
    }

    #[test]
    fn all_sentinel_is_a_wildcard() {
        let ds = Dataset::builtin();
        let filters = vec![Predicate::exact(field::CAMPUS, ALL)];
        let rows = query(&ds.faculty, &filters, field::NAME, SortDirection::Ascending);
        assert_eq!(rows.len(), ds.faculty.len());
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let ds = Dataset::builtin();
        // "associate" appears only in titles, never in names.
        let filters = vec![Predicate::search(&[field::NAME, field::TITLE], "ASSOCIATE")];
        let rows = query(&ds.faculty, &filters, field::NAME, SortDirection::Ascending);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.title == "Associate Professor"));
    }

    #[test]
    fn sort_is_monotonic_in_both_directions() {
        let ds = Dataset::builtin();
        let asc = query(&ds.faculty, &[], field::SALARY, SortDirection::Ascending);
        assert!(asc.windows(2).all(|w| w[0].salary <= w[1].salary));
        let desc = query(&ds.faculty, &[], field::SALARY, SortDirection::Descending);
        assert!(desc.windows(2).all(|w| w[0].salary >= w[1].salary));
    }

    #[test]
    fn equal_keys_keep_dataset_order() {
        let ds = Dataset::builtin();
        // All builtin rows share year 2024, so a year sort is a no-op.
        let rows = query(&ds.faculty, &[], field::YEAR, SortDirection::Ascending);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn physics_salary_descending_leads_with_johnson() {
        let ds = Dataset::builtin();
        let filters = vec![Predicate::exact(field::DEPARTMENT, "Physics")];
        let rows = query(&ds.faculty, &filters, field::SALARY, SortDirection::Descending);
        assert_eq!(rows[0].name, "Dr. Sarah Johnson");
        assert_eq!(rows[0].salary, 165_000.0);
    }

    #[test]
    fn departments_order_strictly_by_average_salary() {
        let ds = Dataset::builtin();
        let filters = vec![Predicate::exact(field::CAMPUS, ALL)];
        let rows = query(
            &ds.departments,
            &filters,
            field::AVERAGE_SALARY,
            SortDirection::Descending,
        );
        let salaries: Vec<f64> = rows.iter().map(|r| r.average_salary).collect();
        assert_eq!(
            salaries,
            [158_000.0, 152_000.0, 148_000.0, 145_000.0, 140_000.0]
        );
    }

    #[test]
    fn query_does_not_mutate_input() {
        let ds = Dataset::builtin();
        let before = ds.faculty.clone();
        let _ = query(&ds.faculty, &[], field::SALARY, SortDirection::Descending);
        assert_eq!(ds.faculty, before);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let none: Vec<crate::data::model::FacultyRecord> = Vec::new();
        let rows = query(&none, &[], field::SALARY, SortDirection::Ascending);
        assert!(rows.is_empty());
    }

    #[test]
    fn mean_of_empty_set_is_zero() {
        let none: Vec<crate::data::model::DepartmentRecord> = Vec::new();
        let m = mean(&none, field::AVERAGE_SALARY);
        assert_eq!(m, 0.0);
        assert!(!m.is_nan());
    }

    #[test]
    fn sum_and_mean_over_builtin_departments() {
        let ds = Dataset::builtin();
        assert_eq!(sum(&ds.departments, field::TOTAL_FACULTY), 208.0);
        assert_eq!(mean(&ds.departments, field::AVERAGE_SALARY), 148_600.0);
    }

    #[test]
    fn aggregates_work_over_query_results() {
        let ds = Dataset::builtin();
        let rows = query(
            &ds.departments,
            &[Predicate::exact(field::CAMPUS, "UCLA")],
            field::AVERAGE_SALARY,
            SortDirection::Descending,
        );
        assert_eq!(sum(&rows, field::TOTAL_FACULTY), 38.0);
    }

    #[test]
    fn predicate_on_missing_field_never_matches() {
        let ds = Dataset::builtin();
        let p = Predicate::exact("nonexistent", "x");
        assert!(!p.matches(&ds.faculty[0]));
    }
}

//! End-to-end checks of the query pipeline over the builtin dataset, driven
//! through the public API the views use.

use faculty_scope::data::dataset::Dataset;
use faculty_scope::data::history::FixedRandom;
use faculty_scope::data::metrics::salary_per_student;
use faculty_scope::data::model::field;
use faculty_scope::data::query::{mean, query, Predicate, SortDirection, ALL};
use faculty_scope::route::Route;
use faculty_scope::state::{AppState, DepartmentsViewState, FacultyViewState};

#[test]
fn every_filter_combination_yields_a_satisfying_subset() {
    let ds = Dataset::builtin();
    let campuses: Vec<String> = std::iter::once(ALL.to_string())
        .chain(ds.campuses.iter().cloned())
        .collect();
    let terms = ["", "dr", "professor", "zzz"];

    for campus in &campuses {
        for term in terms {
            let filters = vec![
                Predicate::exact(field::CAMPUS, campus.clone()),
                Predicate::search(&[field::NAME, field::TITLE], term),
            ];
            let rows = query(&ds.faculty, &filters, field::SALARY, SortDirection::Descending);

            assert!(rows.len() <= ds.faculty.len());
            for row in &rows {
                assert!(filters.iter().all(|p| p.matches(row)));
                assert!(ds.faculty.iter().any(|f| f == *row));
            }
            assert!(rows
                .windows(2)
                .all(|w| w[0].salary >= w[1].salary));
        }
    }
}

#[test]
fn sorting_preserves_the_filtered_set() {
    let ds = Dataset::builtin();
    let filters = vec![Predicate::search(&[field::NAME, field::TITLE], "associate")];
    let asc = query(&ds.faculty, &filters, field::STUDENTS, SortDirection::Ascending);
    let desc = query(&ds.faculty, &filters, field::STUDENTS, SortDirection::Descending);

    assert_eq!(asc.len(), desc.len());
    let mut asc_ids: Vec<&str> = asc.iter().map(|r| r.id.as_str()).collect();
    let mut desc_ids: Vec<&str> = desc.iter().map(|r| r.id.as_str()).collect();
    asc_ids.sort_unstable();
    desc_ids.sort_unstable();
    assert_eq!(asc_ids, desc_ids);
}

#[test]
fn physics_by_salary_descending_returns_johnson_first() {
    let ds = Dataset::builtin();
    let view = FacultyViewState {
        department: "Physics".to_string(),
        ..FacultyViewState::default()
    };
    let rows = query(
        &ds.faculty,
        &view.predicates(),
        &view.sort_key,
        view.sort_direction,
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Dr. Sarah Johnson");
    assert_eq!(rows[0].salary, 165_000.0);
}

#[test]
fn all_campuses_by_average_salary_descending() {
    let ds = Dataset::builtin();
    let view = DepartmentsViewState::default();
    let rows = query(
        &ds.departments,
        &view.predicates(),
        &view.sort_key,
        view.sort_direction,
    );
    let ordered: Vec<(&str, f64)> = rows
        .iter()
        .map(|r| (r.department.as_str(), r.average_salary))
        .collect();
    assert_eq!(
        ordered,
        [
            ("Computer Science", 158_000.0),
            ("Physics", 152_000.0),
            ("Chemistry", 148_000.0),
            ("Mathematics", 145_000.0),
            ("Biology", 140_000.0),
        ]
    );
}

#[test]
fn mean_over_no_matches_is_zero() {
    let ds = Dataset::builtin();
    let rows = query(
        &ds.departments,
        &[Predicate::exact(field::CAMPUS, "UC Merced")],
        field::AVERAGE_SALARY,
        SortDirection::Descending,
    );
    assert!(rows.is_empty());
    assert_eq!(mean(&rows, field::AVERAGE_SALARY), 0.0);
}

#[test]
fn absent_detail_id_reaches_the_not_found_state() {
    let mut state = AppState::default();
    state.navigate_with(Route::parse("/faculty/999"), &mut FixedRandom(0.5));

    assert_eq!(state.route, Route::FacultyDetail("999".to_string()));
    assert!(state.dataset.find_faculty("999").is_none());
    assert!(state.detail.is_none());
}

#[test]
fn johnson_salary_per_student_is_673() {
    let ds = Dataset::builtin();
    let johnson = ds.find_faculty("1").unwrap();
    assert_eq!(
        salary_per_student(johnson.salary, johnson.students_count),
        673.0
    );
}

use super::model::{field, DepartmentRecord, FacultyRecord};
use super::query;

// ---------------------------------------------------------------------------
// Builtin dataset
// ---------------------------------------------------------------------------
// Mock data, loaded once at startup and never mutated. The department rows
// are independently authored summaries and do not reconcile with the five
// faculty rows (placeholder-data inconsistency carried over as-is).

/// The complete in-memory dataset plus the enumerations that back the
/// selection controls.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub faculty: Vec<FacultyRecord>,
    pub departments: Vec<DepartmentRecord>,
    pub campuses: Vec<String>,
    pub department_names: Vec<String>,
    pub years: Vec<u16>,
}

/// System-wide totals for the landing view, derived from the department
/// rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total_faculty: f64,
    pub average_salary: f64,
    pub total_students: f64,
    pub total_courses: f64,
}

impl Dataset {
    /// Build the hardcoded dataset.
    pub fn builtin() -> Self {
        let faculty = vec![
            faculty_row("1", "Dr. Sarah Johnson", "Professor", "Physics", "UC Berkeley", 165_000.0, 3, 245, 9),
            faculty_row("2", "Dr. Michael Chen", "Associate Professor", "Computer Science", "UC San Diego", 142_000.0, 4, 180, 12),
            faculty_row("3", "Dr. Emily Rodriguez", "Assistant Professor", "Mathematics", "UCLA", 118_000.0, 5, 320, 15),
            faculty_row("4", "Dr. David Williams", "Professor", "Chemistry", "UC Davis", 158_000.0, 2, 140, 6),
            faculty_row("5", "Dr. Lisa Kim", "Associate Professor", "Biology", "UC Irvine", 135_000.0, 4, 200, 12),
        ];

        let departments = vec![
            department_row("Computer Science", "UC Berkeley", 158_000.0, 45, 180, 2_400, 65.8),
            department_row("Physics", "UCLA", 152_000.0, 38, 152, 1_900, 80.0),
            department_row("Mathematics", "UC San Diego", 145_000.0, 52, 260, 3_200, 45.3),
            department_row("Chemistry", "UC Davis", 148_000.0, 32, 128, 1_600, 92.5),
            department_row("Biology", "UC Irvine", 140_000.0, 41, 164, 2_050, 68.3),
        ];

        let campuses = [
            "UC Berkeley",
            "UCLA",
            "UC San Diego",
            "UC Davis",
            "UC Irvine",
            "UC Santa Barbara",
            "UC Santa Cruz",
            "UC Riverside",
            "UC Merced",
        ]
        .map(String::from)
        .to_vec();

        let department_names = [
            "Computer Science",
            "Physics",
            "Mathematics",
            "Chemistry",
            "Biology",
            "Engineering",
            "Economics",
            "Psychology",
            "History",
            "English",
        ]
        .map(String::from)
        .to_vec();

        let years = (2014..=2024).rev().collect();

        Dataset {
            faculty,
            departments,
            campuses,
            department_names,
            years,
        }
    }

    /// Look up a faculty member by id. Absent ids yield `None`; the caller
    /// renders a not-found view.
    pub fn find_faculty(&self, id: &str) -> Option<&FacultyRecord> {
        self.faculty.iter().find(|f| f.id == id)
    }

    /// System totals over the department rows.
    pub fn summary(&self) -> Summary {
        Summary {
            total_faculty: query::sum(&self.departments, field::TOTAL_FACULTY),
            average_salary: query::mean(&self.departments, field::AVERAGE_SALARY).round(),
            total_students: query::sum(&self.departments, field::TOTAL_STUDENTS),
            total_courses: query::sum(&self.departments, field::TOTAL_COURSES),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn faculty_row(
    id: &str,
    name: &str,
    title: &str,
    department: &str,
    campus: &str,
    salary: f64,
    courses_count: u32,
    students_count: u32,
    credit_hours: u32,
) -> FacultyRecord {
    FacultyRecord {
        id: id.into(),
        name: name.into(),
        title: title.into(),
        department: department.into(),
        campus: campus.into(),
        salary,
        year: 2024,
        courses_count,
        students_count,
        credit_hours,
    }
}

fn department_row(
    department: &str,
    campus: &str,
    average_salary: f64,
    total_faculty: u32,
    total_courses: u32,
    total_students: u32,
    salary_per_student: f64,
) -> DepartmentRecord {
    DepartmentRecord {
        department: department.into(),
        campus: campus.into(),
        average_salary,
        total_faculty,
        total_courses,
        total_students,
        salary_per_student,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_five_rows_of_each() {
        let ds = Dataset::builtin();
        assert_eq!(ds.faculty.len(), 5);
        assert_eq!(ds.departments.len(), 5);
    }

    #[test]
    fn faculty_ids_are_unique() {
        let ds = Dataset::builtin();
        let mut ids: Vec<&str> = ds.faculty.iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ds.faculty.len());
    }

    #[test]
    fn find_faculty_by_id() {
        let ds = Dataset::builtin();
        let rec = ds.find_faculty("1").unwrap();
        assert_eq!(rec.name, "Dr. Sarah Johnson");
    }

    #[test]
    fn absent_id_is_none_not_a_panic() {
        let ds = Dataset::builtin();
        assert!(ds.find_faculty("999").is_none());
        assert!(ds.find_faculty("").is_none());
    }

    #[test]
    fn summary_totals_over_department_rows() {
        let s = Dataset::builtin().summary();
        assert_eq!(s.total_faculty, 208.0);
        assert_eq!(s.average_salary, 148_600.0);
        assert_eq!(s.total_students, 11_150.0);
        assert_eq!(s.total_courses, 884.0);
    }

    #[test]
    fn enumerations_cover_every_record() {
        let ds = Dataset::builtin();
        for f in &ds.faculty {
            assert!(ds.campuses.contains(&f.campus));
            assert!(ds.department_names.contains(&f.department));
        }
        for d in &ds.departments {
            assert!(ds.campuses.contains(&d.campus));
            assert!(ds.department_names.contains(&d.department));
        }
    }
}

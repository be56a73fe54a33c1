use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// FieldValue – a single record field, dynamically typed
// ---------------------------------------------------------------------------

/// A dynamically-typed field value, so the query engine can sort and compare
/// fields it only knows by name. Numbers compare numerically (integer and
/// float values unify through `as_f64`), text compares lexicographically.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Num(f64),
    Text(String),
}

impl Eq for FieldValue {}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use FieldValue::*;
        match (self, other) {
            (Text(a), Text(b)) => a.cmp(b),
            // Numbers sort before text when a column mixes both.
            (Text(_), _) => std::cmp::Ordering::Greater,
            (_, Text(_)) => std::cmp::Ordering::Less,
            (a, b) => a
                .as_f64()
                .unwrap_or(0.0)
                .total_cmp(&b.as_f64().unwrap_or(0.0)),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Num(v) => write!(f, "{v}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl FieldValue {
    /// Interpret the value as an `f64` for aggregation.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Num(v) => Some(*v),
            FieldValue::Int(i) => Some(*i as f64),
            FieldValue::Text(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Record – string-keyed field access for the query engine
// ---------------------------------------------------------------------------

/// Field names as they appear in sort selectors and exported files.
pub mod field {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const TITLE: &str = "title";
    pub const DEPARTMENT: &str = "department";
    pub const CAMPUS: &str = "campus";
    pub const SALARY: &str = "salary";
    pub const YEAR: &str = "year";
    pub const COURSES: &str = "coursesCount";
    pub const STUDENTS: &str = "studentsCount";
    pub const CREDIT_HOURS: &str = "creditHours";
    pub const AVERAGE_SALARY: &str = "averageSalary";
    pub const TOTAL_FACULTY: &str = "totalFaculty";
    pub const TOTAL_COURSES: &str = "totalCourses";
    pub const TOTAL_STUDENTS: &str = "totalStudents";
    pub const SALARY_PER_STUDENT: &str = "salaryPerStudent";
}

/// Uniform field access by name. Returns `None` for fields the record type
/// does not carry; predicates fail on such fields and sorts treat the rows
/// as equal.
pub trait Record {
    fn field(&self, key: &str) -> Option<FieldValue>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, key: &str) -> Option<FieldValue> {
        (**self).field(key)
    }
}

// ---------------------------------------------------------------------------
// FacultyRecord – one faculty member
// ---------------------------------------------------------------------------

/// A single faculty member (one row of the roster dataset). Immutable after
/// load; identified by `id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyRecord {
    pub id: String,
    pub name: String,
    pub title: String,
    pub department: String,
    pub campus: String,
    pub salary: f64,
    pub year: u16,
    pub courses_count: u32,
    pub students_count: u32,
    pub credit_hours: u32,
}

impl Record for FacultyRecord {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            field::ID => Some(FieldValue::Text(self.id.clone())),
            field::NAME => Some(FieldValue::Text(self.name.clone())),
            field::TITLE => Some(FieldValue::Text(self.title.clone())),
            field::DEPARTMENT => Some(FieldValue::Text(self.department.clone())),
            field::CAMPUS => Some(FieldValue::Text(self.campus.clone())),
            field::SALARY => Some(FieldValue::Num(self.salary)),
            field::YEAR => Some(FieldValue::Int(self.year.into())),
            field::COURSES => Some(FieldValue::Int(self.courses_count.into())),
            field::STUDENTS => Some(FieldValue::Int(self.students_count.into())),
            field::CREDIT_HOURS => Some(FieldValue::Int(self.credit_hours.into())),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// DepartmentRecord – one department aggregate row
// ---------------------------------------------------------------------------

/// A department-level aggregate row, keyed by (department, campus). These
/// rows are hand-authored summaries, not derived from the faculty rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRecord {
    pub department: String,
    pub campus: String,
    pub average_salary: f64,
    pub total_faculty: u32,
    pub total_courses: u32,
    pub total_students: u32,
    pub salary_per_student: f64,
}

impl Record for DepartmentRecord {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            field::DEPARTMENT => Some(FieldValue::Text(self.department.clone())),
            field::CAMPUS => Some(FieldValue::Text(self.campus.clone())),
            field::AVERAGE_SALARY => Some(FieldValue::Num(self.average_salary)),
            field::TOTAL_FACULTY => Some(FieldValue::Int(self.total_faculty.into())),
            field::TOTAL_COURSES => Some(FieldValue::Int(self.total_courses.into())),
            field::TOTAL_STUDENTS => Some(FieldValue::Int(self.total_students.into())),
            field::SALARY_PER_STUDENT => Some(FieldValue::Num(self.salary_per_student)),
            _ => None,
        }
    }
}

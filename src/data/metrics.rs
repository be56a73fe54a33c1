//! Per-record derived metrics shown in the detail view. Divide-by-zero is
//! substituted with 0 rather than surfaced: these figures are presentational
//! rounding, not correctness-critical arithmetic.

/// Salary divided by students taught, rounded to whole dollars.
pub fn salary_per_student(salary: f64, students: u32) -> f64 {
    if students == 0 {
        return 0.0;
    }
    (salary / students as f64).round()
}

/// Students taught divided by courses taught, rounded.
pub fn students_per_course(students: u32, courses: u32) -> u32 {
    if courses == 0 {
        return 0;
    }
    (students as f64 / courses as f64).round() as u32
}

/// Percentage change from `old` to `new`, rounded to one decimal place.
pub fn percent_change(old: f64, new: f64) -> f64 {
    if old == 0.0 {
        return 0.0;
    }
    ((new - old) / old * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_per_student_rounds_to_whole_dollars() {
        assert_eq!(salary_per_student(165_000.0, 245), 673.0);
        assert_eq!(salary_per_student(142_000.0, 180), 789.0);
    }

    #[test]
    fn salary_per_student_guards_zero_students() {
        assert_eq!(salary_per_student(165_000.0, 0), 0.0);
    }

    #[test]
    fn students_per_course_rounds() {
        assert_eq!(students_per_course(245, 3), 82);
        assert_eq!(students_per_course(0, 0), 0);
    }

    #[test]
    fn percent_change_is_one_decimal() {
        assert_eq!(percent_change(148_170.0, 165_000.0), 11.4);
        assert_eq!(percent_change(100.0, 97.0), -3.0);
        assert_eq!(percent_change(0.0, 50.0), 0.0);
    }
}

use rand::Rng;

use super::model::FacultyRecord;

// ---------------------------------------------------------------------------
// Synthetic salary/teaching history
// ---------------------------------------------------------------------------
// No real historical records exist in the dataset, so the detail view charts
// a synthesized series: salary discounted 3% per year of distance from the
// record's year, course and student counts perturbed by a small bounded
// delta. Placeholder data only; real history rows would replace this.

/// Years covered by the synthesized series, newest first.
pub const HISTORY_YEARS: [u16; 5] = [2024, 2023, 2022, 2021, 2020];

/// One synthesized point of the per-faculty history series.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub year: u16,
    pub salary: f64,
    pub courses: u32,
    pub students: u32,
}

/// Source of uniform randomness for the count jitter. Injectable so tests
/// can supply a deterministic sequence.
pub trait RandomSource {
    /// A uniform sample in `[0, 1)`.
    fn uniform(&mut self) -> f64;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Test source repeating one fixed sample.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn uniform(&mut self) -> f64 {
        self.0
    }
}

/// Synthesize one [`HistoryPoint`] per year of [`HISTORY_YEARS`]. Course
/// deltas land in {-1, 0}, student deltas in [-20, 19]; counts saturate at
/// zero rather than going negative.
pub fn generate_history(record: &FacultyRecord, rng: &mut dyn RandomSource) -> Vec<HistoryPoint> {
    HISTORY_YEARS
        .iter()
        .map(|&year| {
            let age = f64::from(record.year.saturating_sub(year));
            let course_delta = (rng.uniform() * 2.0).floor() as i64 - 1;
            let student_delta = (rng.uniform() * 40.0).floor() as i64 - 20;
            HistoryPoint {
                year,
                salary: record.salary * (1.0 - age * 0.03),
                courses: (i64::from(record.courses_count) + course_delta).max(0) as u32,
                students: (i64::from(record.students_count) + student_delta).max(0) as u32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::metrics::percent_change;

    fn johnson() -> FacultyRecord {
        FacultyRecord {
            id: "1".into(),
            name: "Dr. Sarah Johnson".into(),
            title: "Professor".into(),
            department: "Physics".into(),
            campus: "UC Berkeley".into(),
            salary: 165_000.0,
            year: 2024,
            courses_count: 3,
            students_count: 245,
            credit_hours: 9,
        }
    }

    #[test]
    fn one_point_per_history_year_newest_first() {
        let points = generate_history(&johnson(), &mut FixedRandom(0.5));
        let years: Vec<u16> = points.iter().map(|p| p.year).collect();
        assert_eq!(years, HISTORY_YEARS);
    }

    #[test]
    fn salary_discounts_three_percent_per_year() {
        let points = generate_history(&johnson(), &mut FixedRandom(0.0));
        assert_eq!(points[0].salary, 165_000.0);
        assert_eq!(points[1].salary, 165_000.0 * 0.97);
        assert_eq!(points[4].salary, 165_000.0 * 0.88);
    }

    #[test]
    fn count_deltas_stay_bounded() {
        for sample in [0.0, 0.25, 0.5, 0.75, 0.999] {
            let points = generate_history(&johnson(), &mut FixedRandom(sample));
            for p in &points {
                let course_delta = i64::from(p.courses) - 3;
                let student_delta = i64::from(p.students) - 245;
                assert!((-1..=0).contains(&course_delta), "course delta {course_delta}");
                assert!(
                    (-20..=19).contains(&student_delta),
                    "student delta {student_delta}"
                );
            }
        }
    }

    #[test]
    fn counts_saturate_at_zero() {
        let mut rec = johnson();
        rec.courses_count = 0;
        rec.students_count = 0;
        let points = generate_history(&rec, &mut FixedRandom(0.0));
        assert!(points.iter().all(|p| p.courses == 0 && p.students == 0));
    }

    #[test]
    fn five_year_growth_matches_discount_schedule() {
        let points = generate_history(&johnson(), &mut FixedRandom(0.0));
        let oldest = points.last().unwrap().salary;
        let newest = points.first().unwrap().salary;
        assert_eq!(percent_change(oldest, newest), 13.6);
    }
}

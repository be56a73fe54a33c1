use crate::color::CampusColors;
use crate::data::dataset::Dataset;
use crate::data::history::{generate_history, HistoryPoint, RandomSource, ThreadRandom};
use crate::data::model::field;
use crate::data::query::{Predicate, SortDirection, ALL};
use crate::route::Route;

// ---------------------------------------------------------------------------
// Per-view query state
// ---------------------------------------------------------------------------
// Each view owns its filter/sort selection and converts it into engine
// predicates on demand. Nothing here is shared across views.

/// Filter and sort selection for the faculty roster.
#[derive(Debug, Clone, PartialEq)]
pub struct FacultyViewState {
    pub campus: String,
    pub department: String,
    pub search: String,
    pub sort_key: String,
    pub sort_direction: SortDirection,
}

impl Default for FacultyViewState {
    fn default() -> Self {
        Self {
            campus: ALL.to_string(),
            department: ALL.to_string(),
            search: String::new(),
            sort_key: field::SALARY.to_string(),
            sort_direction: SortDirection::Descending,
        }
    }
}

impl FacultyViewState {
    /// The selection as engine predicates. The search term spans name and
    /// title.
    pub fn predicates(&self) -> Vec<Predicate> {
        vec![
            Predicate::exact(field::CAMPUS, self.campus.clone()),
            Predicate::exact(field::DEPARTMENT, self.department.clone()),
            Predicate::search(&[field::NAME, field::TITLE], self.search.clone()),
        ]
    }
}

/// Filter and sort selection for the department table.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentsViewState {
    pub campus: String,
    pub search: String,
    pub sort_key: String,
    pub sort_direction: SortDirection,
}

impl Default for DepartmentsViewState {
    fn default() -> Self {
        Self {
            campus: ALL.to_string(),
            search: String::new(),
            sort_key: field::AVERAGE_SALARY.to_string(),
            sort_direction: SortDirection::Descending,
        }
    }
}

impl DepartmentsViewState {
    pub fn predicates(&self) -> Vec<Predicate> {
        vec![
            Predicate::exact(field::CAMPUS, self.campus.clone()),
            Predicate::search(&[field::DEPARTMENT], self.search.clone()),
        ]
    }

    /// Column-header click: same column flips direction, a new column sorts
    /// descending.
    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort_key == column {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = column.to_string();
            self.sort_direction = SortDirection::Descending;
        }
    }
}

/// Detail-view state: the requested id plus the history series generated
/// once on navigation, so repaints do not re-roll the jitter.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub id: String,
    pub history: Vec<HistoryPoint>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Builtin dataset, loaded once and never mutated.
    pub dataset: Dataset,

    /// Campus → colour mapping for badges and chart lines.
    pub campus_colors: CampusColors,

    /// The view currently shown.
    pub route: Route,

    /// Academic year shown in the header selector.
    pub selected_year: u16,

    pub faculty_view: FacultyViewState,
    pub departments_view: DepartmentsViewState,
    pub detail: Option<DetailState>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let dataset = Dataset::builtin();
        let campus_colors = CampusColors::new(&dataset.campuses);
        Self {
            dataset,
            campus_colors,
            route: Route::Home,
            selected_year: 2024,
            faculty_view: FacultyViewState::default(),
            departments_view: DepartmentsViewState::default(),
            detail: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Start at the given route (deep-link support).
    pub fn with_route(route: Route) -> Self {
        let mut state = Self::default();
        state.navigate(route);
        state
    }

    /// Switch views. Entering a detail view synthesizes the history series
    /// for that record with the thread RNG.
    pub fn navigate(&mut self, route: Route) {
        self.navigate_with(route, &mut ThreadRandom);
    }

    /// As [`navigate`](Self::navigate), with an injectable random source.
    pub fn navigate_with(&mut self, route: Route, rng: &mut dyn RandomSource) {
        if let Route::FacultyDetail(id) = &route {
            self.detail = self
                .dataset
                .find_faculty(id)
                .map(|record| DetailState {
                    id: id.clone(),
                    history: generate_history(record, rng),
                });
        } else {
            self.detail = None;
        }
        log::debug!("navigate: {route}");
        self.route = route;
    }
}

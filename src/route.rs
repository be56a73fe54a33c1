use std::fmt;

// ---------------------------------------------------------------------------
// Routing surface
// ---------------------------------------------------------------------------

/// One browsable view, addressed by a path. Unknown paths resolve to
/// [`Route::NotFound`] rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Departments,
    Faculty,
    FacultyDetail(String),
    DataSources,
    NotFound(String),
}

impl Route {
    /// Resolve a path to a route. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/" => Route::Home,
            "/departments" => Route::Departments,
            "/faculty" => Route::Faculty,
            "/data-sources" => Route::DataSources,
            _ => match trimmed.strip_prefix("/faculty/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::FacultyDetail(id.to_string())
                }
                _ => Route::NotFound(path.to_string()),
            },
        }
    }

    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Departments => "/departments".to_string(),
            Route::Faculty => "/faculty".to_string(),
            Route::FacultyDetail(id) => format!("/faculty/{id}"),
            Route::DataSources => "/data-sources".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Label shown in the navigation bar. Detail and not-found views hang
    /// off the faculty entry.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Departments => "Departments",
            Route::Faculty | Route::FacultyDetail(_) => "Faculty",
            Route::DataSources => "Data Sources",
            Route::NotFound(_) => "Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/departments"), Route::Departments);
        assert_eq!(Route::parse("/faculty"), Route::Faculty);
        assert_eq!(Route::parse("/data-sources"), Route::DataSources);
    }

    #[test]
    fn detail_path_carries_the_id() {
        assert_eq!(
            Route::parse("/faculty/3"),
            Route::FacultyDetail("3".to_string())
        );
        assert_eq!(
            Route::parse("/faculty/999"),
            Route::FacultyDetail("999".to_string())
        );
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::parse("/faculty/"), Route::Faculty);
        assert_eq!(Route::parse("/departments/"), Route::Departments);
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(
            Route::parse("/salaries"),
            Route::NotFound("/salaries".to_string())
        );
        assert_eq!(
            Route::parse("/faculty/1/edit"),
            Route::NotFound("/faculty/1/edit".to_string())
        );
    }

    #[test]
    fn path_round_trips() {
        for path in ["/", "/departments", "/faculty", "/faculty/2", "/data-sources"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }
}

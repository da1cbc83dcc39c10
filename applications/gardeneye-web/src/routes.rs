//! The route table as plain data.
//!
//! Kept separate from the Leptos `<Router>` so the path-to-view mapping can
//! be inspected and tested without a browser. `app.rs` declares the same
//! paths; this table is the single place to change if the mapping moves.

/// Named views reachable through navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    History,
    SensorSettings,
    Settings,
    NotFound,
}

impl View {
    /// Label shown on the navbar tab for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Dashboard",
            View::History => "History",
            View::SensorSettings => "Sensors",
            View::Settings => "Settings",
            View::NotFound => "Not found",
        }
    }

    /// Route name, matching the original view identifiers.
    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::History => "history",
            View::SensorSettings => "sensor-settings",
            View::Settings => "settings",
            View::NotFound => "not-found",
        }
    }
}

/// Canonical path-to-view table. `/settings` is the *global* settings page,
/// `/sensor-settings` the per-sensor one.
pub const ROUTES: &[(&str, View)] = &[
    ("/", View::Home),
    ("/history", View::History),
    ("/sensor-settings", View::SensorSettings),
    ("/settings", View::Settings),
];

/// Resolve a request path to a view. Pure and synchronous: the same path
/// always yields the same view. Anything not in the table is `NotFound`,
/// which is a normal terminal route state rather than an error.
pub fn resolve(path: &str) -> View {
    // Tolerate a single trailing slash, as the browser router does.
    let normalized = if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };

    ROUTES
        .iter()
        .find(|(p, _)| *p == normalized)
        .map(|(_, view)| *view)
        .unwrap_or(View::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_resolves_to_its_view() {
        for (path, view) in ROUTES {
            assert_eq!(resolve(path), *view, "path {path} resolved wrongly");
        }
    }

    #[test]
    fn root_resolves_to_home() {
        assert_eq!(resolve("/"), View::Home);
    }

    #[test]
    fn global_settings_is_distinct_from_sensor_settings() {
        assert_eq!(resolve("/settings"), View::Settings);
        assert_eq!(resolve("/sensor-settings"), View::SensorSettings);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(resolve("/foo/bar"), View::NotFound);
        assert_eq!(resolve("/history/extra"), View::NotFound);
        assert_eq!(resolve(""), View::NotFound);
        assert_eq!(resolve("/Settings"), View::NotFound);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(resolve("/history/"), View::History);
        assert_eq!(resolve("/settings/"), View::Settings);
    }

    #[test]
    fn view_names_are_stable() {
        assert_eq!(View::Home.name(), "home");
        assert_eq!(View::NotFound.name(), "not-found");
    }
}

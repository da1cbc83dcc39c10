use leptos::*;
use leptos_router::*;

use crate::components::layout::Layout;
use crate::components::{Dashboard, History, NotFound, SensorSettings, Settings};
use crate::state::provide_theme_context;

/// Main application component with routing.
///
/// The paths declared here mirror the table in [`crate::routes`].
#[component]
pub fn App() -> impl IntoView {
    // Provide theme context at the app root
    provide_theme_context();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Layout>
                    <Route path="" view=Dashboard />
                    <Route path="history" view=History />
                    <Route path="sensor-settings" view=SensorSettings />
                    <Route path="settings" view=Settings />
                    <Route path="*any" view=NotFound />
                </Route>
            </Routes>
        </Router>
    }
}

use leptos::*;
use leptos_router::*;

/// Catch-all page for unmatched paths. A normal terminal route state, not
/// an error condition.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <p>"The page you are looking for does not exist."</p>
            <A href="/">"Back to the dashboard"</A>
        </div>
    }
}

use leptos::*;
use leptos_router::*;

use crate::state::{use_theme, Theme};

/// Layout component with navbar and content outlet
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}

/// Navbar with tabs and theme toggle
#[component]
fn Navbar() -> impl IntoView {
    let location = use_location();

    // Dashboard lives at "/", so it needs an exact match; the other tabs
    // match on prefix.
    let is_active = move |path: &str| {
        let current = location.pathname.get();
        if path == "/" {
            current == "/"
        } else {
            current.starts_with(path)
        }
    };

    let tab_class = move |path: &'static str| {
        if is_active(path) {
            "tab active"
        } else {
            "tab"
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"GardenEye"</h1>
                <div class="navbar-tabs">
                    {crate::routes::ROUTES
                        .iter()
                        .map(|(path, view)| {
                            let path = *path;
                            view! {
                                <A href=path class=move || tab_class(path)>
                                    {view.label()}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="navbar-actions">
                    <ThemeToggle />
                </div>
            </div>
        </nav>
    }
}

/// Light/dark theme toggle button
#[component]
fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| ctx.toggle()
        >
            {move || match ctx.theme.get() {
                Theme::Light => "🌙",
                Theme::Dark => "☀️",
            }}
        </button>
    }
}

use leptos::*;

use crate::models::InfoItem;

/// Fleet-status banner shown above the sensor grid
#[component]
pub fn InfoBanner(items: Vec<InfoItem>) -> impl IntoView {
    if items.is_empty() {
        return ().into_view();
    }

    view! {
        <div class="info-banner">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <div class=format!("info-item info-{}", item.level.as_str())>
                            <span class="info-title">{item.title}</span>
                            <span class="info-content">{item.content}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

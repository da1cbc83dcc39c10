use leptos::*;

use crate::api::ApiClient;

use super::info_banner::InfoBanner;
use super::sensor_card::SensorCard;

/// Dashboard page component with data fetching
#[component]
pub fn Dashboard() -> impl IntoView {
    let client = ApiClient::new();
    let client_sensors = client.clone();
    let client_info = client.clone();
    let client_settings = client.clone();

    // Resources for async data fetching (using create_local_resource for CSR)
    let (refresh, set_refresh) = create_signal(0);

    let sensors = create_local_resource(
        move || refresh.get(),
        move |_| {
            let client = client_sensors.clone();
            async move { client.get_sensors().await }
        },
    );

    let info = create_local_resource(
        move || refresh.get(),
        move |_| {
            let client = client_info.clone();
            async move { client.get_info().await }
        },
    );

    // Thresholds change rarely; fetched once per mount.
    let settings = create_local_resource(
        || (),
        move |_| {
            let client = client_settings.clone();
            async move { client.get_settings().await.ok() }
        },
    );

    // Refetch sensors and info every 60 seconds
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let interval = Interval::new(60_000, move || {
            set_refresh.update(|n| *n += 1);
        });

        on_cleanup(move || drop(interval));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_refresh;

    view! {
        <div class="dashboard">
            <Suspense fallback=|| ()>
                {move || {
                    info.get().map(|result| match result {
                        Ok(items) => view! { <InfoBanner items=items /> }.into_view(),
                        Err(e) => {
                            view! { <p class="error-text">{format!("Failed to load status: {e}")}</p> }
                                .into_view()
                        }
                    })
                }}
            </Suspense>

            <Suspense fallback=move || view! { <p class="placeholder-text">"Loading sensors..."</p> }>
                {move || {
                    sensors.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="placeholder-text">"No sensors registered yet."</p> }
                                .into_view()
                        }
                        Ok(list) => {
                            let thresholds = settings.get().flatten();
                            view! {
                                <div class="dashboard-grid">
                                    {list
                                        .into_iter()
                                        .map(|sensor| {
                                            view! {
                                                <SensorCard sensor=sensor settings=thresholds.clone() />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                            .into_view()
                        }
                        Err(e) => {
                            view! { <p class="error-text">{format!("Failed to load sensors: {e}")}</p> }
                                .into_view()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

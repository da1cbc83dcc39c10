use leptos::*;

use crate::api::ApiClient;
use crate::models::{Readings, Sensor};

/// Look-back options for the period selector, in seconds.
const PERIODS: &[(&str, Option<u32>)] = &[
    ("Last 24 hours", Some(86_400)),
    ("Last 7 days", Some(604_800)),
    ("Last 30 days", Some(2_592_000)),
    ("All data", None),
];

/// History page: per-sensor reading series over a selectable period
#[component]
pub fn History() -> impl IntoView {
    let client = ApiClient::new();
    let client_sensors = client.clone();
    let client_readings = client.clone();
    let client_download = client.clone();

    let (mac, set_mac) = create_signal(String::new());
    let (period, set_period) = create_signal::<Option<u32>>(Some(86_400));

    let sensors = create_local_resource(
        || (),
        move |_| {
            let client = client_sensors.clone();
            async move { client.get_sensors().await }
        },
    );

    // Each (sensor, period) pair owns its own fetch; switching selection
    // simply makes the old resource value stale.
    let readings = create_local_resource(
        move || (mac.get(), period.get()),
        move |(mac, period): (String, Option<u32>)| {
            let client = client_readings.clone();
            async move {
                if mac.is_empty() {
                    return Ok(None);
                }
                client.get_readings(&mac, period).await.map(Some)
            }
        },
    );

    // Pick the first sensor once the list arrives. Runs outside the view
    // so no signal is written while rendering.
    create_effect(move |_| {
        if let Some(Ok(list)) = sensors.get() {
            if mac.get_untracked().is_empty() {
                if let Some(first) = list.first() {
                    set_mac.set(first.mac.clone());
                }
            }
        }
    });

    let on_period_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_period.set(value.parse::<u32>().ok());
    };

    view! {
        <div class="history">
            <div class="history-controls">
                <Suspense fallback=|| ()>
                    {move || {
                        sensors.get().map(|result| match result {
                            Ok(list) => view! { <SensorSelect list=list mac=mac set_mac=set_mac /> }.into_view(),
                            Err(e) => {
                                view! { <p class="error-text">{format!("Failed to load sensors: {e}")}</p> }
                                    .into_view()
                            }
                        })
                    }}
                </Suspense>

                <select class="period-select" on:change=on_period_change>
                    {PERIODS
                        .iter()
                        .map(|(label, value)| {
                            let value_attr =
                                value.map(|v| v.to_string()).unwrap_or_else(|| "all".into());
                            view! {
                                <option value=value_attr selected={*value == period.get_untracked()}>
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <a
                    class="download-link"
                    href=move || client_download.readings_download_url(&mac.get(), period.get())
                    download=""
                >
                    "Download CSV"
                </a>
            </div>

            <Suspense fallback=move || view! { <p class="placeholder-text">"Loading readings..."</p> }>
                {move || {
                    readings.get().map(|result| match result {
                        Ok(None) => {
                            view! { <p class="placeholder-text">"Select a sensor to see its history."</p> }
                                .into_view()
                        }
                        Ok(Some(series)) => view! { <ReadingsTable series=series /> }.into_view(),
                        Err(e) => {
                            view! { <p class="error-text">{format!("Failed to load readings: {e}")}</p> }
                                .into_view()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Sensor drop-down
#[component]
fn SensorSelect(
    list: Vec<Sensor>,
    mac: ReadSignal<String>,
    set_mac: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <select
            class="sensor-select"
            on:change=move |ev| set_mac.set(event_target_value(&ev))
        >
            {list
                .into_iter()
                .map(|sensor| {
                    let label = sensor.display_name().to_string();
                    let selected = sensor.mac == mac.get_untracked();
                    view! {
                        <option value=sensor.mac selected=selected>{label}</option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// Table of samples, newest first
#[component]
fn ReadingsTable(series: Readings) -> impl IntoView {
    if series.is_empty() {
        return view! { <p class="placeholder-text">"No readings in this period."</p> }.into_view();
    }

    let now = series.now;
    let rows = (0..series.len())
        .filter_map(|i| series.get(i))
        .map(|reading| {
            view! {
                <tr>
                    <td>{format_age(now - reading.timestamp)}</td>
                    <td>{format!("{:.1} %", reading.humidity)}</td>
                    <td>{format!("{:.1} °C", reading.temperature)}</td>
                    <td>{format!("{:.0} %", reading.battery)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="readings-table">
            <thead>
                <tr>
                    <th>"Sampled"</th>
                    <th>"Humidity"</th>
                    <th>"Temperature"</th>
                    <th>"Battery"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_view()
}

/// Human-readable sample age from seconds-before-now
fn format_age(secs: i64) -> String {
    let secs = secs.max(0);
    if secs < 60 {
        format!("{secs} s ago")
    } else if secs < 3_600 {
        format!("{} min ago", secs / 60)
    } else if secs < 86_400 {
        format!("{} h ago", secs / 3_600)
    } else {
        format!("{} d ago", secs / 86_400)
    }
}

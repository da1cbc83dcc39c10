use leptos::*;

use crate::models::{BatteryLevel, GlobalSettings, Sensor};

/// Card showing one sensor's identity, liveness and latest sample
#[component]
pub fn SensorCard(sensor: Sensor, settings: Option<GlobalSettings>) -> impl IntoView {
    let name = sensor.display_name().to_string();
    let online_class = if sensor.online {
        "status-dot online"
    } else {
        "status-dot offline"
    };
    let online_label = if sensor.online { "online" } else { "offline" };

    let body = match sensor.latest_reading {
        Some(reading) => {
            // Without fetched settings the battery renders unclassified.
            let level = settings
                .map(|s| s.battery_level(reading.battery))
                .unwrap_or(BatteryLevel::Ok);
            view! {
                <dl class="reading-values">
                    <dt>"Humidity"</dt>
                    <dd>{format!("{:.1} %", reading.humidity)}</dd>
                    <dt>"Temperature"</dt>
                    <dd>{format!("{:.1} °C", reading.temperature)}</dd>
                    <dt>"Battery"</dt>
                    <dd class=format!("battery-{}", level.as_str())>
                        {format!("{:.0} %", reading.battery)}
                    </dd>
                </dl>
            }
            .into_view()
        }
        None => view! { <p class="placeholder-text">"No readings yet"</p> }.into_view(),
    };

    view! {
        <div class="card sensor-card">
            <div class="sensor-card-header">
                <h3>{name}</h3>
                <span class=online_class title=online_label></span>
            </div>
            <p class="sensor-mac">{sensor.mac}</p>
            {body}
        </div>
    }
}

use leptos::*;

use crate::api::ApiClient;
use crate::models::{GlobalSettings, SyncTime};

/// Global settings page: sync schedule, battery thresholds, liveness latency
#[component]
pub fn Settings() -> impl IntoView {
    let client = ApiClient::new();
    let client_load = client.clone();
    let client_save = client.clone();

    let current = create_local_resource(
        || (),
        move |_| {
            let client = client_load.clone();
            async move { client.get_settings().await }
        },
    );

    let save = create_action(move |settings: &GlobalSettings| {
        let settings = settings.clone();
        let client = client_save.clone();
        async move { client.update_settings(&settings).await }
    });

    view! {
        <div class="settings">
            <h2>"Global Settings"</h2>
            <Suspense fallback=move || view! { <p class="placeholder-text">"Loading settings..."</p> }>
                {move || {
                    current.get().map(|result| match result {
                        Ok(settings) => view! { <SettingsForm settings=settings save=save /> }.into_view(),
                        Err(e) => {
                            view! { <p class="error-text">{format!("Failed to load settings: {e}")}</p> }
                                .into_view()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Editable settings form with client-side validation before submit
#[component]
fn SettingsForm(
    settings: GlobalSettings,
    save: Action<GlobalSettings, Result<GlobalSettings, crate::api::ApiError>>,
) -> impl IntoView {
    let (hour, set_hour) = create_signal(settings.sync_time.hour().to_string());
    let (minute, set_minute) = create_signal(settings.sync_time.minute().to_string());
    let (warning, set_warning) = create_signal(settings.battery_warning_threshold.to_string());
    let (critical, set_critical) = create_signal(settings.battery_critical_threshold.to_string());
    let (latency, set_latency) = create_signal(settings.max_latency.to_string());
    let (error, set_error) = create_signal::<Option<String>>(None);

    let on_submit = move |_| {
        let parsed = parse_form(
            &hour.get(),
            &minute.get(),
            &warning.get(),
            &critical.get(),
            &latency.get(),
        );
        match parsed {
            Ok(settings) => {
                set_error.set(None);
                save.dispatch(settings);
            }
            Err(msg) => set_error.set(Some(msg)),
        }
    };

    view! {
        <div class="settings-form">
            <fieldset>
                <legend>"Sync time"</legend>
                <label>
                    "Hour"
                    <input
                        type="number"
                        min="0"
                        max="23"
                        prop:value=move || hour.get()
                        on:input=move |ev| set_hour.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Minute"
                    <input
                        type="number"
                        min="0"
                        max="59"
                        prop:value=move || minute.get()
                        on:input=move |ev| set_minute.set(event_target_value(&ev))
                    />
                </label>
            </fieldset>

            <fieldset>
                <legend>"Battery thresholds (%)"</legend>
                <label>
                    "Warning below"
                    <input
                        type="number"
                        prop:value=move || warning.get()
                        on:input=move |ev| set_warning.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Critical below"
                    <input
                        type="number"
                        prop:value=move || critical.get()
                        on:input=move |ev| set_critical.set(event_target_value(&ev))
                    />
                </label>
            </fieldset>

            <fieldset>
                <legend>"Liveness"</legend>
                <label>
                    "Max latency (seconds)"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || latency.get()
                        on:input=move |ev| set_latency.set(event_target_value(&ev))
                    />
                </label>
            </fieldset>

            {move || error.get().map(|msg| view! { <p class="error-text">{msg}</p> })}
            {move || {
                save.value().get().map(|result| match result {
                    Ok(_) => view! { <p class="success-text">"Settings saved."</p> }.into_view(),
                    Err(e) => {
                        view! { <p class="error-text">{format!("Failed to save: {e}")}</p> }
                            .into_view()
                    }
                })
            }}

            <button disabled=move || save.pending().get() on:click=on_submit>
                "Save settings"
            </button>
        </div>
    }
}

/// Parse and validate the form fields into settings, with a user-facing
/// message on failure.
fn parse_form(
    hour: &str,
    minute: &str,
    warning: &str,
    critical: &str,
    latency: &str,
) -> Result<GlobalSettings, String> {
    let hour: u8 = hour.trim().parse().map_err(|_| "Hour must be a number")?;
    let minute: u8 = minute.trim().parse().map_err(|_| "Minute must be a number")?;
    let warning: f64 = warning
        .trim()
        .parse()
        .map_err(|_| "Warning threshold must be a number")?;
    let critical: f64 = critical
        .trim()
        .parse()
        .map_err(|_| "Critical threshold must be a number")?;
    let latency: i64 = latency
        .trim()
        .parse()
        .map_err(|_| "Max latency must be a number")?;

    let settings = GlobalSettings {
        sync_time: SyncTime(hour, minute),
        battery_warning_threshold: warning,
        battery_critical_threshold: critical,
        max_latency: latency,
    };
    settings.validate().map_err(|e| e.to_string())?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_form_parses() {
        let settings = parse_form("6", "30", "20", "10", "300").unwrap();
        assert_eq!(settings.sync_time, SyncTime(6, 30));
        assert_eq!(settings.battery_warning_threshold, 20.0);
        assert_eq!(settings.battery_critical_threshold, 10.0);
        assert_eq!(settings.max_latency, 300);
    }

    #[test]
    fn inverted_thresholds_are_refused() {
        let err = parse_form("6", "30", "20", "25", "300").unwrap_err();
        assert!(err.contains("critical threshold"), "got: {err}");
    }

    #[test]
    fn out_of_range_sync_time_is_refused() {
        assert!(parse_form("24", "0", "20", "10", "300").is_err());
        assert!(parse_form("6", "60", "20", "10", "300").is_err());
    }

    #[test]
    fn non_numeric_input_is_refused() {
        assert!(parse_form("six", "30", "20", "10", "300").is_err());
        assert!(parse_form("6", "30", "20", "10", "").is_err());
    }
}

use leptos::*;

use crate::api::{ApiClient, ApiError};
use crate::models::SensorPatch;

/// Per-sensor settings page: rename sensors, clear their history, or
/// remove them entirely
#[component]
pub fn SensorSettings() -> impl IntoView {
    let client = ApiClient::new();
    let client_sensors = client.clone();
    let client_save = client.clone();
    let client_remove = client.clone();
    let client_clear = client;

    // Bumped after a successful mutation so the list reflects it.
    let (version, set_version) = create_signal(0);

    let sensors = create_local_resource(
        move || version.get(),
        move |_| {
            let client = client_sensors.clone();
            async move { client.get_sensors().await }
        },
    );

    let save = create_action(move |input: &(String, String)| {
        let (mac, name) = input.clone();
        let client = client_save.clone();
        async move {
            let patch = SensorPatch {
                name: if name.is_empty() { None } else { Some(name) },
            };
            client.update_sensor(&mac, &patch).await
        }
    });

    let remove = create_action(move |mac: &String| {
        let mac = mac.clone();
        let client = client_remove.clone();
        async move { client.delete_sensor(&mac).await }
    });

    let clear_history = create_action(move |mac: &String| {
        let mac = mac.clone();
        let client = client_clear.clone();
        async move { client.delete_readings(&mac).await }
    });

    create_effect(move |_| {
        let saved = matches!(save.value().get(), Some(Ok(())));
        let removed = matches!(remove.value().get(), Some(Ok(())));
        if saved || removed {
            set_version.update(|n| *n += 1);
        }
    });

    view! {
        <div class="sensor-settings">
            <h2>"Sensors"</h2>
            <Suspense fallback=move || view! { <p class="placeholder-text">"Loading sensors..."</p> }>
                {move || {
                    sensors.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="placeholder-text">"No sensors registered yet."</p> }
                                .into_view()
                        }
                        Ok(list) => {
                            list.into_iter()
                                .map(|sensor| {
                                    view! {
                                        <SensorRow
                                            mac=sensor.mac.clone()
                                            name=sensor.name.clone().unwrap_or_default()
                                            save=save
                                            remove=remove
                                            clear_history=clear_history
                                        />
                                    }
                                })
                                .collect_view()
                        }
                        Err(e) => {
                            view! { <p class="error-text">{format!("Failed to load sensors: {e}")}</p> }
                                .into_view()
                        }
                    })
                }}
            </Suspense>
            <ActionError action=save label="save"/>
            <ActionError action=remove label="remove sensor"/>
            <ActionError action=clear_history label="clear history"/>
        </div>
    }
}

/// One row: MAC, editable name, save, and the destructive actions
#[component]
fn SensorRow(
    mac: String,
    name: String,
    save: Action<(String, String), Result<(), ApiError>>,
    remove: Action<String, Result<(), ApiError>>,
    clear_history: Action<String, Result<(), ApiError>>,
) -> impl IntoView {
    let (draft, set_draft) = create_signal(name);
    let mac_for_save = mac.clone();
    let mac_for_remove = mac.clone();
    let mac_for_clear = mac.clone();

    let busy =
        move || save.pending().get() || remove.pending().get() || clear_history.pending().get();

    view! {
        <div class="sensor-row">
            <span class="sensor-mac">{mac}</span>
            <input
                type="text"
                placeholder="Unnamed sensor"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button
                disabled=busy
                on:click=move |_| save.dispatch((mac_for_save.clone(), draft.get()))
            >
                "Save"
            </button>
            <button
                class="danger"
                disabled=busy
                on:click=move |_| clear_history.dispatch(mac_for_clear.clone())
            >
                "Clear history"
            </button>
            <button
                class="danger"
                disabled=busy
                on:click=move |_| remove.dispatch(mac_for_remove.clone())
            >
                "Remove"
            </button>
        </div>
    }
}

/// Renders the latest failure of an action, if any
#[component]
fn ActionError<I: 'static>(
    action: Action<I, Result<(), ApiError>>,
    label: &'static str,
) -> impl IntoView {
    move || {
        action.value().get().and_then(|result| match result {
            Ok(()) => None,
            Err(e) => {
                Some(view! { <p class="error-text">{format!("Failed to {label}: {e}")}</p> })
            }
        })
    }
}

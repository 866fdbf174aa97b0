//! Modal alert used for form errors and classified API failures.

#[cfg(test)]
#[path = "alert_modal_test.rs"]
mod alert_modal_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::response_error::ErrorClassification;

/// Button text used when an alert carries no action of its own.
pub const CONFIRM_BUTTON: &str = "확인";

/// Content of an open alert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    /// Action button text; empty renders [`CONFIRM_BUTTON`].
    pub button_text: String,
    /// Route to open when the alert is dismissed; empty stays on the page.
    pub route: String,
}

impl Alert {
    /// Informational alert that only closes.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { title: title.into(), message: message.into(), button_text: String::new(), route: String::new() }
    }

    pub fn from_classification(title: impl Into<String>, classified: ErrorClassification) -> Self {
        Self {
            title: title.into(),
            message: classified.label,
            button_text: classified.button_text,
            route: classified.route,
        }
    }

    pub fn button_label(&self) -> &str {
        if self.button_text.is_empty() { CONFIRM_BUTTON } else { &self.button_text }
    }

    /// Route to navigate to after dismissal, if any.
    pub fn dismiss_route(&self) -> Option<&str> {
        (!self.route.is_empty()).then_some(self.route.as_str())
    }
}

/// Renders `alert` while it is `Some`; dismissing clears it and follows its route.
#[component]
pub fn AlertModal(alert: RwSignal<Option<Alert>>) -> impl IntoView {
    let navigate = use_navigate();

    let dismiss = move || {
        let Some(current) = alert.get_untracked() else {
            return;
        };
        alert.set(None);
        if let Some(route) = current.dismiss_route() {
            navigate(route, NavigateOptions::default());
        }
    };

    let on_backdrop = dismiss.clone();
    let on_button = dismiss.clone();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" || ev.key() == "Enter" {
            ev.prevent_default();
            dismiss();
        }
    };

    view! {
        <Show when=move || alert.get().is_some()>
            <div class="dialog-backdrop" on:click={
                let on_backdrop = on_backdrop.clone();
                move |_| on_backdrop()
            }>
                <div
                    class="dialog dialog--alert"
                    role="alertdialog"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown.clone()
                    tabindex="0"
                >
                    <h2 class="dialog__title">{move || alert.get().map(|a| a.title).unwrap_or_default()}</h2>
                    <p class="dialog__message">{move || alert.get().map(|a| a.message).unwrap_or_default()}</p>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click={
                            let on_button = on_button.clone();
                            move |_| on_button()
                        }>
                            {move || alert.get().map(|a| a.button_label().to_owned()).unwrap_or_default()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

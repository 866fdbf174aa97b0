//! Labelled text input with an inline validation message.

use leptos::prelude::*;

use crate::util::validation::FieldError;

#[component]
pub fn FormField(
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<FieldError>>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                class:form-field__input--error=move || error.get().is_some()
                type=input_type
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            />
            <Show when=move || error.get().is_some()>
                <span class="form-field__error">
                    {move || error.get().map(FieldError::message).unwrap_or_default()}
                </span>
            </Show>
        </label>
    }
}

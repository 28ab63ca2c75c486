use leptos::prelude::*;

/// Native date picker bound to a `YYYY-MM-DD` string.
/// The browser renders the value in the user's locale.
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format, or "" when cleared)
    on_change: impl Fn(String) + 'static,
    #[prop(optional)] id: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <input
            type="date"
            id=id
            class="form-input form-input--date"
            required=required
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Overlay dialog. Closes only through its ✕ button, so a stray click or
/// key press never drops what was typed.
#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal" role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        type="button"
                        class="button button--icon modal__close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

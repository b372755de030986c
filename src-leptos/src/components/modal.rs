//! Modal dialog component

use super::button::{button_class, ButtonSize, ButtonVariant};
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ModalType {
    #[default]
    Confirm,
    Danger,
}

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(default = ModalType::Confirm)] modal_type: ModalType,
    #[prop(default = "Подтвердить".to_string(), into)] confirm_text: String,
    #[prop(default = "Отмена".to_string(), into)] cancel_text: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_class = match modal_type {
        ModalType::Danger => button_class(ButtonVariant::Danger, ButtonSize::Medium, ""),
        ModalType::Confirm => button_class(ButtonVariant::Primary, ButtonSize::Medium, ""),
    };
    let cancel_class = button_class(ButtonVariant::Secondary, ButtonSize::Medium, "");

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
                <div class="modal" on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">{title.clone()}</h3>
                        <button class="modal-close" on:click=move |_| on_cancel.run(())>
                            "×"
                        </button>
                    </div>

                    <div class="modal-body">
                        <p>{move || message.get()}</p>
                    </div>

                    <div class="modal-footer">
                        <button class=cancel_class.clone() on:click=move |_| on_cancel.run(())>
                            {cancel_text.clone()}
                        </button>
                        <button class=confirm_class.clone() on:click=move |_| on_confirm.run(())>
                            {confirm_text.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

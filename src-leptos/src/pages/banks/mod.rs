mod actions;
mod header;

use crate::app::AppState;
use crate::components::{BankTable, Modal, ModalType};
use leptos::prelude::*;
use mortgage_types::Bank;

use actions::BankActions;
use header::{Header, MessageBanner};

/// Bank administration page. Owns the bank list callbacks the table reports to.
#[component]
pub fn Banks() -> impl IntoView {
    let state = expect_context::<AppState>();

    let actions = BankActions::new(state.clone());
    let delete_confirm = actions.delete_confirm;
    let message = actions.message;

    let on_edit = {
        let actions = actions.clone();
        Callback::new(move |bank: Bank| actions.on_edit(&bank))
    };
    let on_delete = {
        let actions = actions.clone();
        Callback::new(move |bank: Bank| actions.on_delete(&bank))
    };
    let on_toggle_status = {
        let actions = actions.clone();
        Callback::new(move |(bank, active): (Bank, bool)| actions.on_toggle_status(&bank, active))
    };
    let on_add_program = {
        let actions = actions.clone();
        Callback::new(move |bank: Bank| actions.on_add_program(&bank))
    };
    let on_confirm_delete = {
        let actions = actions.clone();
        Callback::new(move |_: ()| actions.execute_delete())
    };

    let delete_message = Signal::derive(move || {
        delete_confirm
            .get()
            .map(|bank| format!("Удалить банк «{}» вместе с его программами?", bank.name))
            .unwrap_or_default()
    });

    view! {
        <div class="page banks">
            <Header state=state.clone() />

            <MessageBanner message=message />

            <BankTable
                banks=state.banks
                on_edit=on_edit
                on_delete=on_delete
                on_toggle_status=on_toggle_status
                on_add_program=on_add_program
            />

            <Modal
                is_open=Signal::derive(move || delete_confirm.with(Option::is_some))
                title="Удалить банк"
                message=delete_message
                modal_type=ModalType::Danger
                confirm_text="Удалить"
                on_confirm=on_confirm_delete
                on_cancel=Callback::new(move |_: ()| delete_confirm.set(None))
            />
        </div>
    }
}

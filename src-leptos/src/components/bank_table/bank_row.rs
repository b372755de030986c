//! Summary row of one bank

use super::model::{BankRowModel, Chevron, BANK_AUTO_RATES_TITLE, DELETE_TITLE, EDIT_TITLE};
use super::{AutoRatesBadge, BankTableCallbacks};
use crate::components::icons::{ChevronDownIcon, ChevronUpIcon, EditIcon, TrashIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, Switch};
use leptos::prelude::*;
use mortgage_types::Bank;

/// Row cells update in place: the logo, badge and chevron are only rebuilt
/// when their own value changes.
#[component]
pub(crate) fn BankRow(
    #[prop(into)] bank: Signal<Bank>,
    #[prop(into)] expanded: Signal<bool>,
    on_toggle_expand: Callback<String>,
    callbacks: BankTableCallbacks,
) -> impl IntoView {
    let model = Memo::new(move |_| bank.with(|b| BankRowModel::new(b, expanded.get())));

    let logo = Memo::new(move |_| model.with(|m| m.logo.clone()));
    let description = Memo::new(move |_| model.with(|m| m.description.clone()));
    let show_badge = Memo::new(move |_| model.with(|m| m.show_auto_rates_badge));
    let chevron = Memo::new(move |_| model.with(|m| m.chevron));

    view! {
        <tr class=move || model.with(|m| m.row_class)>
            <td class="col-bank">
                <div class="bank-cell">
                    <button
                        class=move || model.with(|m| m.expand_class)
                        on:click=move |_| on_toggle_expand.run(bank.with_untracked(|b| b.id.clone()))
                    >
                        {move || match chevron.get() {
                            Chevron::Up => view! { <ChevronUpIcon size=16 /> }.into_any(),
                            Chevron::Down => view! { <ChevronDownIcon size=16 /> }.into_any(),
                        }}
                    </button>
                    <div class="bank-identity">
                        <div class="bank-logo">
                            {move || match logo.get() {
                                Some(src) => view! { <img src=src class="bank-logo-img" alt="" /> }.into_any(),
                                None => view! { <div class="bank-logo-placeholder"></div> }.into_any(),
                            }}
                            {move || show_badge.get().then(|| view! {
                                <AutoRatesBadge title=BANK_AUTO_RATES_TITLE />
                            })}
                        </div>
                        <div class="bank-text">
                            <div class="bank-name">{move || model.with(|m| m.name.clone())}</div>
                            {move || description.get().map(|description| view! {
                                <div class="bank-description">{description}</div>
                            })}
                        </div>
                    </div>
                </div>
            </td>
            <td class="col-programs">
                <span class=move || model.with(|m| m.pill_class)>
                    {move || model.with(|m| m.program_label.clone())}
                </span>
            </td>
            <td class="col-status">
                <div class="status-cell">
                    <Switch
                        checked=Signal::derive(move || model.with(|m| m.is_active))
                        on_change=callbacks.status_handler(bank)
                    />
                </div>
            </td>
            <td class="col-actions">
                <div class="row-actions">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Small
                        title=EDIT_TITLE
                        class="row-action row-action--edit"
                        on_click=callbacks.edit_handler(bank)
                    >
                        <EditIcon size=18 />
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Small
                        title=DELETE_TITLE
                        class="row-action row-action--delete"
                        on_click=callbacks.delete_handler(bank)
                    >
                        <TrashIcon size=18 />
                    </Button>
                </div>
            </td>
        </tr>
    }
}

//! Full-width row listing the programs of the expanded bank

use super::model::{
    program_section, ProgramCardModel, ProgramSection, ADD_PROGRAM_LABEL, DOWN_PAYMENT_LABEL,
    NO_PROGRAMS_TEXT, PROGRAMS_HEADING, PROGRAM_AUTO_RATES_TITLE, SPECIAL_CONDITIONS_BADGE,
    TERM_LABEL,
};
use super::BankTableCallbacks;
use crate::components::icons::{AlertCircleIcon, PlusIcon, ZapIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use leptos::prelude::*;
use mortgage_types::Bank;

#[component]
pub(crate) fn ProgramsRow(
    #[prop(into)] bank: Signal<Bank>,
    callbacks: BankTableCallbacks,
) -> impl IntoView {
    let section = Memo::new(move |_| bank.with(program_section));

    view! {
        <tr class="programs-row">
            <td colspan="4" class="programs-cell">
                <div class="programs-panel">
                    <div class="programs-header">
                        <h4 class="programs-heading">{PROGRAMS_HEADING}</h4>
                        <Button
                            size=ButtonSize::Small
                            variant=ButtonVariant::Outline
                            icon=|| view! { <PlusIcon size=14 /> }
                            on_click=callbacks.add_program_handler(bank)
                        >
                            {ADD_PROGRAM_LABEL}
                        </Button>
                    </div>
                    {move || match section.get() {
                        ProgramSection::Cards(cards) => view! {
                            <div class="programs-grid">
                                {cards.into_iter()
                                    .map(|card| view! { <ProgramCard card=card /> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any(),
                        ProgramSection::NoPrograms => view! {
                            <div class="programs-empty">
                                <AlertCircleIcon size=16 />
                                {NO_PROGRAMS_TEXT}
                            </div>
                        }
                        .into_any(),
                    }}
                </div>
            </td>
        </tr>
    }
}

#[component]
fn ProgramCard(card: ProgramCardModel) -> impl IntoView {
    view! {
        <div class="program-card">
            <div class="program-card-header">
                <h5 class="program-name">
                    {card.name}
                    {card.auto_rates.then(|| view! {
                        <span class="program-auto-rates" title=PROGRAM_AUTO_RATES_TITLE>
                            <ZapIcon size=14 />
                        </span>
                    })}
                </h5>
                <div class="program-rate">{card.rate}</div>
            </div>
            <div class="program-terms">
                <div class="program-term-line">
                    <span>{TERM_LABEL}</span>
                    <span class="program-term-value">{card.term}</span>
                </div>
                <div class="program-term-line">
                    <span>{DOWN_PAYMENT_LABEL}</span>
                    <span class="program-term-value">{card.down_payment}</span>
                </div>
            </div>
            {card.special_conditions.then(|| view! {
                <div class="program-special">{SPECIAL_CONDITIONS_BADGE}</div>
            })}
        </div>
    }
}

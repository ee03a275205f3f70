use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::{Confirmation, PersonForm, SuggestionTable, SupplyStep};
use crate::hooks::use_donation_wizard;
use crate::models::WizardStep;

const STEP_TITLES: [(WizardStep, &str); 4] = [
    (WizardStep::Supply, "Insumo"),
    (WizardStep::Person, "Tus datos"),
    (WizardStep::Destination, "Dónde donar"),
    (WizardStep::Done, "Confirmación"),
];

#[function_component(Donate)]
pub fn donate() -> Html {
    let wizard = use_donation_wizard();

    // Al cambiar de paso, volver al inicio de la página
    {
        let step = *wizard.current_step;
        use_effect_with(step, move |_| {
            Timeout::new(50, || {
                if let Some(win) = web_sys::window() {
                    win.scroll_to_with_x_and_y(0.0, 0.0);
                }
            })
            .forget();
            || ()
        });
    }

    let step = *wizard.current_step;
    let steps = *wizard.steps;

    let header = html! {
        <ol class="stepper-header">
            { for STEP_TITLES.iter().map(|(s, title)| {
                let current = *s == step;
                let completed = match s {
                    WizardStep::Supply => steps.supply,
                    WizardStep::Person => steps.person,
                    WizardStep::Destination => steps.destination,
                    WizardStep::Done => steps.created,
                };
                html! {
                    <li
                        class={classes!(
                            "stepper-item",
                            current.then_some("current"),
                            completed.then_some("done"),
                        )}
                    >
                        <span class="stepper-number">{s.number()}</span>
                        <span class="stepper-title">{*title}</span>
                    </li>
                }
            })}
        </ol>
    };

    let body = match step {
        WizardStep::Supply => html! {
            <SupplyStep
                supplies={(*wizard.supplies).clone()}
                selection={(*wizard.form).supply.clone()}
                loading={*wizard.loading_supplies}
                error={(*wizard.supplies_error).clone()}
                on_next={wizard.submit_supply.clone()}
            />
        },
        WizardStep::Person => html! {
            <PersonForm
                person={(*wizard.form).person.clone()}
                on_back={wizard.previous_step.clone()}
                on_next={wizard.submit_person.clone()}
            />
        },
        WizardStep::Destination => html! {
            <SuggestionTable
                rows={(*wizard.suggestions).clone()}
                selected_id={(*wizard.form).order_id.clone()}
                loading={*wizard.loading_suggestions}
                not_found={*wizard.suggestions_not_found}
                error={(*wizard.suggestions_error).clone()}
                create_errors={(*wizard.create_errors).clone()}
                submitting={*wizard.submitting}
                on_select={wizard.select_destination.clone()}
                on_back={wizard.previous_step.clone()}
                on_confirm={wizard.confirm_destination.clone()}
            />
        },
        WizardStep::Done => html! {
            <Confirmation tracking_number={(*wizard.tracking_number).clone()} />
        },
    };

    html! {
        <section class="donate-page">
            { header }
            <div class="stepper-body">{ body }</div>
        </section>
    }
}

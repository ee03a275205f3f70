use yew::prelude::*;

use crate::models::{
    CreateDonation, DonationForm, Person, StepFlags, SuggestionRow, SupplyModel, SupplySelection,
    WizardStep,
};
use crate::services::{create_donation, fetch_suggestions, fetch_supplies};

/// Estado y callbacks del asistente de donación.
pub struct UseDonationWizardHandle {
    // Estados separados, uno por sección
    pub supplies: UseStateHandle<Vec<SupplyModel>>,
    pub form: UseStateHandle<DonationForm>,
    pub steps: UseStateHandle<StepFlags>,
    pub current_step: UseStateHandle<WizardStep>,
    pub loading_supplies: UseStateHandle<bool>,
    pub loading_suggestions: UseStateHandle<bool>,
    pub submitting: UseStateHandle<bool>,
    pub supplies_error: UseStateHandle<String>,
    pub suggestions_error: UseStateHandle<String>,
    pub create_errors: UseStateHandle<Vec<String>>,
    pub suggestions: UseStateHandle<Vec<SuggestionRow>>,
    pub suggestions_not_found: UseStateHandle<bool>,
    pub tracking_number: UseStateHandle<String>,

    // Callbacks
    pub submit_supply: Callback<SupplySelection>,
    pub submit_person: Callback<Person>,
    pub select_destination: Callback<String>,
    pub confirm_destination: Callback<()>,
    pub previous_step: Callback<()>,
}

#[hook]
pub fn use_donation_wizard() -> UseDonationWizardHandle {
    let supplies = use_state(Vec::<SupplyModel>::new);
    let form = use_state(DonationForm::default);
    let steps = use_state(StepFlags::default);
    let current_step = use_state(|| WizardStep::Supply);
    let loading_supplies = use_state(|| false);
    let loading_suggestions = use_state(|| false);
    let submitting = use_state(|| false);
    let supplies_error = use_state(String::new);
    let suggestions_error = use_state(String::new);
    let create_errors = use_state(Vec::<String>::new);
    let suggestions = use_state(Vec::<SuggestionRow>::new);
    let suggestions_not_found = use_state(|| false);
    let tracking_number = use_state(String::new);

    // Cargar el catálogo al montar
    {
        let supplies = supplies.clone();
        let loading_supplies = loading_supplies.clone();
        let supplies_error = supplies_error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                loading_supplies.set(true);
                match fetch_supplies().await {
                    Ok(loaded) => {
                        log::info!("✅ Insumos cargados: {}", loaded.len());
                        supplies.set(loaded);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando insumos: {}", e);
                        supplies_error.set(e);
                    }
                }
                loading_supplies.set(false);
            });
            || ()
        });
    }

    // Paso 1: selección de insumo
    let submit_supply = {
        let form = form.clone();
        let steps = steps.clone();
        let current_step = current_step.clone();

        Callback::from(move |selection: SupplySelection| {
            let mut updated = (*form).clone();
            updated.supply = selection;

            let mut flags = *steps;
            if !updated.supply_complete() {
                flags.supply = false;
                steps.set(flags);
                form.set(updated);
                return;
            }

            flags.supply = true;
            steps.set(flags);
            form.set(updated);
            current_step.set((*current_step).next());
        })
    };

    // Paso 2: datos de la persona. Al validar se refrescan las
    // sugerencias con los valores recién ingresados.
    let submit_person = {
        let form = form.clone();
        let steps = steps.clone();
        let current_step = current_step.clone();
        let suggestions = suggestions.clone();
        let suggestions_error = suggestions_error.clone();
        let create_errors = create_errors.clone();
        let suggestions_not_found = suggestions_not_found.clone();
        let loading_suggestions = loading_suggestions.clone();

        Callback::from(move |person: Person| {
            let mut updated = (*form).clone();
            updated.person = person;

            let mut flags = *steps;
            flags.person = updated.person_complete();
            steps.set(flags);

            if flags.person {
                spawn_refresh_suggestions(
                    flags,
                    updated.clone(),
                    suggestions.clone(),
                    suggestions_error.clone(),
                    create_errors.clone(),
                    suggestions_not_found.clone(),
                    loading_suggestions.clone(),
                );
                current_step.set((*current_step).next());
            }

            form.set(updated);
        })
    };

    // Selección de destino en la tabla
    let select_destination = {
        let form = form.clone();

        Callback::from(move |order_id: String| {
            let mut updated = (*form).clone();
            updated.order_id = order_id;
            form.set(updated);
        })
    };

    // Paso 3: confirma el destino y registra la donación. El paso
    // avanza recién cuando el backend confirma la creación.
    let confirm_destination = {
        let form = form.clone();
        let steps = steps.clone();
        let current_step = current_step.clone();
        let submitting = submitting.clone();
        let create_errors = create_errors.clone();
        let tracking_number = tracking_number.clone();

        Callback::from(move |_| {
            let snapshot = (*form).clone();
            if !snapshot.destination_chosen() {
                return;
            }

            let steps = steps.clone();
            let current_step = current_step.clone();
            let submitting = submitting.clone();
            let create_errors = create_errors.clone();
            let tracking_number = tracking_number.clone();

            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                let model = CreateDonation::from_form(&snapshot);

                match create_donation(&model).await {
                    Ok(created) => {
                        log::info!("✅ Donación registrada: {}", created.tracking.number);
                        tracking_number.set(created.tracking.number);

                        let mut flags = *steps;
                        flags.destination = true;
                        steps.set(flags);
                        current_step.set((*current_step).next());
                    }
                    Err(messages) => {
                        log::error!("❌ Error registrando la donación: {}", messages.join(" / "));
                        create_errors.set(messages);
                    }
                }
                submitting.set(false);
            });
        })
    };

    // Volver atrás no valida ni resetea nada
    let previous_step = {
        let current_step = current_step.clone();

        Callback::from(move |_| {
            current_step.set((*current_step).previous());
        })
    };

    UseDonationWizardHandle {
        supplies,
        form,
        steps,
        current_step,
        loading_supplies,
        loading_suggestions,
        submitting,
        supplies_error,
        suggestions_error,
        create_errors,
        suggestions,
        suggestions_not_found,
        tracking_number,
        submit_supply,
        submit_person,
        select_destination,
        confirm_destination,
        previous_step,
    }
}

/// Refresca la tabla de sugerencias. No hace nada si los pasos de
/// insumo y persona no están completos.
fn spawn_refresh_suggestions(
    flags: StepFlags,
    form: DonationForm,
    suggestions: UseStateHandle<Vec<SuggestionRow>>,
    suggestions_error: UseStateHandle<String>,
    create_errors: UseStateHandle<Vec<String>>,
    suggestions_not_found: UseStateHandle<bool>,
    loading_suggestions: UseStateHandle<bool>,
) {
    if !flags.supply || !flags.person {
        return;
    }

    // Limpiar la tabla y los errores anteriores
    suggestions.set(Vec::new());
    suggestions_error.set(String::new());
    create_errors.set(Vec::new());
    suggestions_not_found.set(false);
    loading_suggestions.set(true);

    wasm_bindgen_futures::spawn_local(async move {
        let address = &form.person.address;
        let result = fetch_suggestions(
            &form.supply.id,
            &address.street,
            address.street_number,
            &address.location,
            &address.province,
        )
        .await;

        match result {
            Ok(places) => {
                suggestions_not_found.set(places.is_empty());
                suggestions.set(SuggestionRow::rank(places));
            }
            Err(e) => {
                log::error!("❌ Error buscando sugerencias: {}", e);
                suggestions_error.set(e);
            }
        }
        // La marca de carga se limpia una única vez, falle o no
        loading_suggestions.set(false);
    });
}

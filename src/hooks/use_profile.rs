use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, FileReader, HtmlInputElement};
use yew::prelude::*;

use crate::models::{Locality, RequestForm, SupplyModel};
use crate::services::{fetch_localities, fetch_supplies};

/// Estado y callbacks de la página de perfil.
pub struct UseProfileHandle {
    pub orders: UseStateHandle<Vec<SupplyModel>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<String>,
    pub request_form: UseStateHandle<RequestForm>,
    pub shown: UseStateHandle<bool>,
    pub selected_locality: UseStateHandle<String>,
    pub all_localities: UseStateHandle<Vec<Locality>>,
    pub locality_id: UseStateHandle<String>,
    pub image_src: UseStateHandle<String>,

    pub on_order_change: Callback<(String, bool)>,
    pub on_quantity_change: Callback<(String, i32)>,
    pub on_file_change: Callback<Event>,
    pub select_locality: Callback<String>,
}

#[hook]
pub fn use_profile() -> UseProfileHandle {
    let orders = use_state(Vec::<SupplyModel>::new);
    let loading = use_state(|| false);
    let error = use_state(String::new);
    let request_form = use_state(RequestForm::default);
    let shown = use_state(|| false);
    let selected_locality = use_state(String::new);
    let all_localities = use_state(Vec::<Locality>::new);
    let locality_id = use_state(String::new);
    let image_src = use_state(String::new);

    // Cargar el catálogo al montar
    {
        let orders = orders.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                match fetch_supplies().await {
                    Ok(loaded) => {
                        log::info!("✅ Insumos cargados en el perfil: {}", loaded.len());
                        orders.set(loaded);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando insumos en el perfil: {}", e);
                        error.set(e);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    // Cargar las localidades al montar. Si falla, el filtro queda
    // vacío y solo se registra el error.
    {
        let all_localities = all_localities.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_localities().await {
                    Ok(list) => all_localities.set(list),
                    Err(e) => log::error!("❌ Error cargando localidades: {}", e),
                }
            });
            || ()
        });
    }

    // Check / uncheck de un insumo. Desmarcar saca la entrada de la
    // lista; marcar solo muestra el campo de cantidad.
    let on_order_change = {
        let request_form = request_form.clone();
        let shown = shown.clone();

        Callback::from(move |(supply_id, checked): (String, bool)| {
            if !checked {
                let mut updated = (*request_form).clone();
                updated.remove_item(&supply_id);
                request_form.set(updated);
            }
            shown.set(checked);
        })
    };

    // Cambio de cantidad: agrega una entrada nueva a la lista
    let on_quantity_change = {
        let request_form = request_form.clone();

        Callback::from(move |(supply_id, quantity): (String, i32)| {
            let mut updated = (*request_form).clone();
            updated.push_item(&supply_id, quantity);
            request_form.set(updated);
        })
    };

    // Vista previa de la imagen elegida: se lee el primer archivo como
    // data URL y se guarda el resultado al completarse la lectura.
    let on_file_change = {
        let image_src = image_src.clone();

        Callback::from(move |event: Event| {
            let input: HtmlInputElement = match event.target_dyn_into() {
                Some(input) => input,
                None => return,
            };
            let file = match input.files().and_then(|files| files.get(0)) {
                Some(file) => file,
                None => return,
            };

            let reader = match FileReader::new() {
                Ok(reader) => reader,
                Err(_) => return,
            };

            let onload = {
                let image_src = image_src.clone();
                let reader = reader.clone();

                Closure::wrap(Box::new(move |_e: web_sys::ProgressEvent| {
                    if let Ok(result) = reader.result() {
                        if let Some(data_url) = result.as_string() {
                            image_src.set(data_url);
                        }
                    }
                }) as Box<dyn FnMut(web_sys::ProgressEvent)>)
            };

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            // El closure tiene que sobrevivir hasta que dispare onload
            onload.forget();

            if reader.read_as_data_url(&file).is_err() {
                log::error!("❌ No se pudo leer el archivo seleccionado");
            }
        })
    };

    // Selección de localidad por nombre exacto
    let select_locality = {
        let selected_locality = selected_locality.clone();
        let all_localities = all_localities.clone();
        let locality_id = locality_id.clone();

        Callback::from(move |name: String| {
            selected_locality.set(name.clone());
            if let Some(found) = all_localities.iter().find(|l| l.localidad == name) {
                locality_id.set(found.id.clone());
            }
        })
    };

    UseProfileHandle {
        orders,
        loading,
        error,
        request_form,
        shown,
        selected_locality,
        all_localities,
        locality_id,
        image_src,
        on_order_change,
        on_quantity_change,
        on_file_change,
        select_locality,
    }
}

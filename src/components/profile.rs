use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_profile::{use_profile, UseProfileHandle};
use crate::models::SupplyModel;

#[function_component(Profile)]
pub fn profile() -> Html {
    let profile = use_profile();

    let on_locality_input = {
        let select_locality = profile.select_locality.clone();

        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                select_locality.emit(input.value());
            }
        })
    };

    let orders_list = if *profile.loading {
        html! { <p class="loading">{"Cargando insumos..."}</p> }
    } else if !profile.error.is_empty() {
        html! { <p class="error">{&*profile.error}</p> }
    } else {
        html! {
            <ul class="orders-list">
                { for profile.orders.iter().map(|order| order_row(order, &profile)) }
            </ul>
        }
    };

    html! {
        <section class="profile-page">
            <h2>{"Pedido de insumos"}</h2>
            { orders_list }
            {
                if !profile.request_form.items.is_empty() {
                    html! {
                        <p class="request-summary">
                            {format!("Ítems en el pedido: {}", profile.request_form.items.len())}
                        </p>
                    }
                } else {
                    html! {}
                }
            }

            <h2>{"Tu localidad"}</h2>
            <div class="form-group">
                <label for="locality">{"Localidad"}</label>
                <input
                    type="text"
                    id="locality"
                    list="localities"
                    value={(*profile.selected_locality).clone()}
                    onchange={on_locality_input}
                />
                <datalist id="localities">
                    { for profile.all_localities.iter().map(|locality| html! {
                        <option value={locality.localidad.clone()} />
                    })}
                </datalist>
                {
                    if !profile.locality_id.is_empty() {
                        html! {
                            <p class="locality-hint">
                                {format!("Localidad registrada ({})", *profile.locality_id)}
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <h2>{"Foto de tu credencial"}</h2>
            <div class="form-group">
                <input type="file" accept="image/*" onchange={profile.on_file_change.clone()} />
                {
                    if !profile.image_src.is_empty() {
                        html! {
                            <img
                                class="image-preview"
                                src={(*profile.image_src).clone()}
                                alt="Vista previa"
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </section>
    }
}

fn order_row(order: &SupplyModel, profile: &UseProfileHandle) -> Html {
    let id = order.id.clone();
    let on_order_change = profile.on_order_change.clone();
    let on_check = Callback::from(move |e: Event| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            on_order_change.emit((id.clone(), input.checked()));
        }
    });

    let id_for_quantity = order.id.clone();
    let on_quantity_change = profile.on_quantity_change.clone();
    let on_quantity = Callback::from(move |e: Event| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            let quantity = input.value().parse::<i32>().unwrap_or(0);
            on_quantity_change.emit((id_for_quantity.clone(), quantity));
        }
    });

    html! {
        <li class="order-row">
            <label>
                <input type="checkbox" onchange={on_check} />
                {&order.name}
            </label>
            {
                if *profile.shown {
                    html! {
                        <input
                            type="number"
                            min="1"
                            placeholder="Cantidad"
                            onchange={on_quantity}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </li>
    }
}

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{SupplyModel, SupplySelection};

#[derive(Properties, PartialEq)]
pub struct SupplyStepProps {
    pub supplies: Vec<SupplyModel>,
    pub selection: SupplySelection,
    pub loading: bool,
    pub error: String,
    pub on_next: Callback<SupplySelection>,
}

#[function_component(SupplyStep)]
pub fn supply_step(props: &SupplyStepProps) -> Html {
    let supply_ref = use_node_ref();
    let quantity_ref = use_node_ref();

    let on_submit = {
        let supply_ref = supply_ref.clone();
        let quantity_ref = quantity_ref.clone();
        let on_next = props.on_next.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(select), Some(quantity_input)) = (
                supply_ref.cast::<HtmlSelectElement>(),
                quantity_ref.cast::<HtmlInputElement>(),
            ) {
                let quantity = quantity_input.value().parse::<i32>().unwrap_or(0);
                on_next.emit(SupplySelection {
                    id: select.value(),
                    quantity,
                });
            }
        })
    };

    if props.loading {
        return html! { <p class="loading">{"Cargando insumos..."}</p> };
    }

    if !props.error.is_empty() {
        return html! { <p class="error">{&props.error}</p> };
    }

    html! {
        <form class="supply-step" onsubmit={on_submit}>
            <div class="form-group">
                <label for="supply">{"¿Qué querés donar?"}</label>
                <select id="supply" ref={supply_ref}>
                    <option value="" selected={props.selection.id.is_empty()}>
                        {"Elegí un insumo"}
                    </option>
                    { for props.supplies.iter().map(|supply| html! {
                        <option
                            value={supply.id.clone()}
                            selected={props.selection.id == supply.id}
                        >
                            {&supply.name}
                        </option>
                    })}
                </select>
            </div>
            <div class="form-group">
                <label for="quantity">{"Cantidad"}</label>
                <input
                    type="number"
                    id="quantity"
                    min="1"
                    ref={quantity_ref}
                    value={props.selection.quantity.to_string()}
                />
            </div>
            <div class="step-actions">
                <button type="submit" class="btn-next">{"Siguiente"}</button>
            </div>
        </form>
    }
}

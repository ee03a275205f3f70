use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{Person, PersonAddress};

#[derive(Properties, PartialEq)]
pub struct PersonFormProps {
    pub person: Person,
    pub on_back: Callback<()>,
    pub on_next: Callback<Person>,
}

#[function_component(PersonForm)]
pub fn person_form(props: &PersonFormProps) -> Html {
    let name_ref = use_node_ref();
    let lastname_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_prefix_ref = use_node_ref();
    let phone_number_ref = use_node_ref();
    let street_ref = use_node_ref();
    let street_number_ref = use_node_ref();
    let location_ref = use_node_ref();
    let postal_code_ref = use_node_ref();
    let province_ref = use_node_ref();
    let department_ref = use_node_ref();

    let on_submit = {
        let name_ref = name_ref.clone();
        let lastname_ref = lastname_ref.clone();
        let email_ref = email_ref.clone();
        let phone_prefix_ref = phone_prefix_ref.clone();
        let phone_number_ref = phone_number_ref.clone();
        let street_ref = street_ref.clone();
        let street_number_ref = street_number_ref.clone();
        let location_ref = location_ref.clone();
        let postal_code_ref = postal_code_ref.clone();
        let province_ref = province_ref.clone();
        let department_ref = department_ref.clone();
        let on_next = props.on_next.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let person = Person {
                name: input_value(&name_ref),
                lastname: input_value(&lastname_ref),
                email: input_value(&email_ref),
                phone_prefix: input_number(&phone_prefix_ref),
                phone_number: input_number(&phone_number_ref),
                address: PersonAddress {
                    street: input_value(&street_ref),
                    street_number: input_number(&street_number_ref),
                    location: input_value(&location_ref),
                    postal_code: input_number(&postal_code_ref),
                    province: input_value(&province_ref),
                    department: input_value(&department_ref),
                },
            };

            on_next.emit(person);
        })
    };

    let person = &props.person;
    let address = &person.address;

    html! {
        <form class="person-form" onsubmit={on_submit}>
            <fieldset>
                <legend>{"Tus datos"}</legend>
                <div class="form-group">
                    <label for="name">{"Nombre"}</label>
                    <input type="text" id="name" ref={name_ref} value={person.name.clone()} />
                </div>
                <div class="form-group">
                    <label for="lastname">{"Apellido"}</label>
                    <input type="text" id="lastname" ref={lastname_ref} value={person.lastname.clone()} />
                </div>
                <div class="form-group">
                    <label for="email">{"Correo electrónico"}</label>
                    <input type="email" id="email" ref={email_ref} value={person.email.clone()} />
                </div>
                <div class="form-group">
                    <label for="phone-prefix">{"Prefijo"}</label>
                    <input type="number" id="phone-prefix" ref={phone_prefix_ref} value={number_value(person.phone_prefix)} />
                </div>
                <div class="form-group">
                    <label for="phone-number">{"Teléfono"}</label>
                    <input type="number" id="phone-number" ref={phone_number_ref} value={number_value(person.phone_number)} />
                </div>
            </fieldset>
            <fieldset>
                <legend>{"Tu dirección"}</legend>
                <div class="form-group">
                    <label for="street">{"Calle"}</label>
                    <input type="text" id="street" ref={street_ref} value={address.street.clone()} />
                </div>
                <div class="form-group">
                    <label for="street-number">{"Número"}</label>
                    <input type="number" id="street-number" ref={street_number_ref} value={number_value(address.street_number)} />
                </div>
                <div class="form-group">
                    <label for="location">{"Localidad"}</label>
                    <input type="text" id="location" ref={location_ref} value={address.location.clone()} />
                </div>
                <div class="form-group">
                    <label for="postal-code">{"Código postal"}</label>
                    <input type="number" id="postal-code" ref={postal_code_ref} value={number_value(address.postal_code)} />
                </div>
                <div class="form-group">
                    <label for="province">{"Provincia"}</label>
                    <input type="text" id="province" ref={province_ref} value={address.province.clone()} />
                </div>
                <div class="form-group">
                    <label for="department">{"Departamento (opcional)"}</label>
                    <input type="text" id="department" ref={department_ref} value={address.department.clone()} />
                </div>
            </fieldset>
            <div class="step-actions">
                <button type="button" class="btn-back" onclick={props.on_back.reform(|_| ())}>
                    {"Atrás"}
                </button>
                <button type="submit" class="btn-next">{"Siguiente"}</button>
            </div>
        </form>
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn input_number(node: &NodeRef) -> Option<i64> {
    input_value(node).trim().parse::<i64>().ok()
}

fn number_value(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmationProps {
    pub tracking_number: String,
}

#[function_component(Confirmation)]
pub fn confirmation(props: &ConfirmationProps) -> Html {
    html! {
        <div class="confirmation">
            <h2>{"¡Gracias por tu donación!"}</h2>
            <p>{"Guardá este número para seguir el estado de tu donación:"}</p>
            <p class="tracking-number">{&props.tracking_number}</p>
        </div>
    }
}

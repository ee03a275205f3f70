use yew::prelude::*;

use super::{Donate, Profile};

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Donate,
    Profile,
}

#[function_component(App)]
pub fn app() -> Html {
    let page = use_state(|| Page::Donate);

    let go_donate = {
        let page = page.clone();
        Callback::from(move |_| page.set(Page::Donate))
    };
    let go_profile = {
        let page = page.clone();
        Callback::from(move |_| page.set(Page::Profile))
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"Donación de Insumos"}</h1>
                <nav class="app-nav">
                    <button
                        class={classes!("nav-link", (*page == Page::Donate).then_some("active"))}
                        onclick={go_donate}
                    >
                        {"Donar"}
                    </button>
                    <button
                        class={classes!("nav-link", (*page == Page::Profile).then_some("active"))}
                        onclick={go_profile}
                    >
                        {"Perfil"}
                    </button>
                </nav>
            </header>
            <main class="app-main">
                {
                    match *page {
                        Page::Donate => html! { <Donate /> },
                        Page::Profile => html! { <Profile /> },
                    }
                }
            </main>
        </div>
    }
}

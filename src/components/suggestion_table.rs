use std::cmp::Ordering;

use yew::prelude::*;

use crate::models::SuggestionRow;

/// Columnas ordenables de la tabla.
#[derive(Clone, Copy, PartialEq)]
enum SortColumn {
    Position,
    Name,
    Distance,
}

#[derive(Properties, PartialEq)]
pub struct SuggestionTableProps {
    pub rows: Vec<SuggestionRow>,
    pub selected_id: String,
    pub loading: bool,
    pub not_found: bool,
    pub error: String,
    pub create_errors: Vec<String>,
    pub submitting: bool,
    pub on_select: Callback<String>,
    pub on_back: Callback<()>,
    pub on_confirm: Callback<()>,
}

#[function_component(SuggestionTable)]
pub fn suggestion_table(props: &SuggestionTableProps) -> Html {
    let sort_column = use_state(|| SortColumn::Position);
    let sort_ascending = use_state(|| true);

    // Click en un encabezado: misma columna invierte el sentido,
    // columna nueva arranca ascendente
    let sort_by = {
        let sort_column = sort_column.clone();
        let sort_ascending = sort_ascending.clone();

        Callback::from(move |column: SortColumn| {
            if *sort_column == column {
                sort_ascending.set(!*sort_ascending);
            } else {
                sort_column.set(column);
                sort_ascending.set(true);
            }
        })
    };

    let mut rows = props.rows.clone();
    match *sort_column {
        SortColumn::Position => rows.sort_by_key(|row| row.position),
        SortColumn::Name => rows.sort_by(|a, b| a.name.cmp(&b.name)),
        SortColumn::Distance => rows.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        }),
    }
    if !*sort_ascending {
        rows.reverse();
    }

    let header_cell = |label: &str, column: SortColumn| {
        let sort_by = sort_by.clone();
        let marker = if *sort_column == column {
            if *sort_ascending {
                " ▲"
            } else {
                " ▼"
            }
        } else {
            ""
        };

        html! {
            <th class="sortable" onclick={Callback::from(move |_| sort_by.emit(column))}>
                {format!("{}{}", label, marker)}
            </th>
        }
    };

    let table = if props.loading {
        html! { <p class="loading">{"Buscando lugares cercanos..."}</p> }
    } else if !props.error.is_empty() {
        html! { <p class="error">{&props.error}</p> }
    } else if props.not_found {
        html! { <p class="empty">{"No encontramos lugares cercanos para donar este insumo."}</p> }
    } else {
        html! {
            <table class="suggestions-table">
                <thead>
                    <tr>
                        <th></th>
                        { header_cell("#", SortColumn::Position) }
                        { header_cell("Lugar", SortColumn::Name) }
                        <th>{"Dirección"}</th>
                        { header_cell("Distancia", SortColumn::Distance) }
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|row| {
                        let id = row.id.clone();
                        let on_select = props.on_select.clone();
                        let selected = props.selected_id == row.id;

                        html! {
                            <tr
                                class={classes!(selected.then_some("selected"))}
                                onclick={Callback::from(move |_| on_select.emit(id.clone()))}
                            >
                                <td><input type="radio" name="destination" checked={selected} /></td>
                                <td>{row.position}</td>
                                <td>{&row.name}</td>
                                <td>{&row.address}</td>
                                <td>{format!("{} km", row.distance)}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        }
    };

    html! {
        <div class="destination-step">
            { table }
            {
                if !props.create_errors.is_empty() {
                    html! {
                        <ul class="error-list">
                            { for props.create_errors.iter().map(|message| html! {
                                <li class="error">{message}</li>
                            })}
                        </ul>
                    }
                } else {
                    html! {}
                }
            }
            <div class="step-actions">
                <button
                    type="button"
                    class="btn-back"
                    onclick={props.on_back.reform(|_| ())}
                    disabled={props.submitting}
                >
                    {"Atrás"}
                </button>
                <button
                    type="button"
                    class="btn-next"
                    onclick={props.on_confirm.reform(|_| ())}
                    disabled={props.submitting}
                >
                    { if props.submitting { "Enviando..." } else { "Donar" } }
                </button>
            </div>
        </div>
    }
}

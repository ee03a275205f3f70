use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::person::Person;

/// Selección de insumo del paso 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplySelection {
    pub id: String,
    pub quantity: i32,
}

impl Default for SupplySelection {
    fn default() -> Self {
        Self {
            id: String::new(),
            quantity: 1,
        }
    }
}

/// Formulario completo del asistente de donación.
/// La validez se deriva de los datos, nunca se guarda acá.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonationForm {
    pub order_id: String,
    pub supply: SupplySelection,
    pub person: Person,
}

impl DonationForm {
    /// Paso 1 completo: insumo elegido y cantidad positiva.
    pub fn supply_complete(&self) -> bool {
        !self.supply.id.is_empty() && self.supply.quantity > 0
    }

    /// Paso 2 completo: todos los campos obligatorios con contenido.
    pub fn person_complete(&self) -> bool {
        let person = &self.person;
        let address = &person.address;

        !address.street.trim().is_empty()
            && !address.location.trim().is_empty()
            && !person.email.trim().is_empty()
            && !person.lastname.trim().is_empty()
            && !person.name.trim().is_empty()
            && person.phone_prefix.unwrap_or(0) > 0
            && person.phone_number.unwrap_or(0) > 0
            && address.postal_code.unwrap_or(0) > 0
            && !address.province.trim().is_empty()
    }

    /// Paso 3: hay un destino elegido.
    pub fn destination_chosen(&self) -> bool {
        !self.order_id.is_empty()
    }
}

/// Estado de cada paso del asistente (true = completado).
/// Solo una re-validación vuelve un flag a false.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepFlags {
    pub supply: bool,
    pub person: bool,
    pub destination: bool,
    pub created: bool,
}

/// Pasos del asistente, en orden. Hacia adelante se avanza con
/// validación; hacia atrás siempre se puede volver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Supply,
    Person,
    Destination,
    Done,
}

impl WizardStep {
    pub fn next(self) -> Self {
        match self {
            Self::Supply => Self::Person,
            Self::Person => Self::Destination,
            Self::Destination => Self::Done,
            Self::Done => Self::Done,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Supply => Self::Supply,
            Self::Person => Self::Supply,
            Self::Destination => Self::Person,
            Self::Done => Self::Destination,
        }
    }

    /// Número de paso visible (1 a 4).
    pub fn number(self) -> usize {
        match self {
            Self::Supply => 1,
            Self::Person => 2,
            Self::Destination => 3,
            Self::Done => 4,
        }
    }
}

/// Lugar sugerido por el backend, ya ordenado por distancia.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedPlaceToDonate {
    pub id: String,
    pub health_center_name: String,
    pub address: String,
    pub calculated_distance: f64,
}

/// Fila de la tabla de sugerencias, con ranking 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRow {
    pub position: usize,
    pub name: String,
    pub address: String,
    pub distance: f64,
    pub id: String,
}

impl SuggestionRow {
    /// Reconstruye la tabla completa respetando el orden de la respuesta.
    pub fn rank(places: Vec<SuggestedPlaceToDonate>) -> Vec<SuggestionRow> {
        places
            .into_iter()
            .enumerate()
            .map(|(index, place)| SuggestionRow {
                position: index + 1,
                name: place.health_center_name,
                address: place.address,
                distance: place.calculated_distance,
                id: place.id,
            })
            .collect()
    }
}

/// Ítem de la donación a crear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationItem {
    pub supply_id: String,
    pub quantity: i32,
}

/// Request de creación de donación: destino, donante y un único ítem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonation {
    pub order_id: String,
    pub person: Person,
    pub items: Vec<DonationItem>,
}

impl CreateDonation {
    pub fn from_form(form: &DonationForm) -> Self {
        Self {
            order_id: form.order_id.clone(),
            person: form.person.clone(),
            items: vec![DonationItem {
                supply_id: form.supply.id.clone(),
                quantity: form.supply.quantity,
            }],
        }
    }
}

/// Respuesta de creación con el número de seguimiento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationCreated {
    pub tracking: Tracking,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracking {
    pub number: String,
}

/// Payload de error de creación: lista de mapas campo → mensaje.
#[derive(Debug, Clone, Deserialize)]
pub struct DonationErrorResponse {
    pub errors: Vec<BTreeMap<String, String>>,
}

impl DonationErrorResponse {
    /// Todos los mensajes, en el orden en que llegaron.
    pub fn all_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flat_map(|entry| entry.values().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonAddress;

    fn persona_completa() -> Person {
        Person {
            name: "Ana".to_string(),
            lastname: "García".to_string(),
            email: "ana@example.com".to_string(),
            phone_prefix: Some(11),
            phone_number: Some(43215678),
            address: PersonAddress {
                street: "Córdoba".to_string(),
                street_number: Some(1234),
                location: "Rosario".to_string(),
                postal_code: Some(2000),
                province: "Santa Fe".to_string(),
                department: "3B".to_string(),
            },
        }
    }

    fn form_valido() -> DonationForm {
        DonationForm {
            order_id: "lugar-1".to_string(),
            supply: SupplySelection {
                id: "s1".to_string(),
                quantity: 2,
            },
            person: persona_completa(),
        }
    }

    #[test]
    fn insumo_sin_id_no_completa_el_paso() {
        let mut form = form_valido();
        form.supply.id = String::new();
        assert!(!form.supply_complete());
    }

    #[test]
    fn cantidad_cero_o_negativa_no_completa_el_paso() {
        let mut form = form_valido();
        form.supply.quantity = 0;
        assert!(!form.supply_complete());
        form.supply.quantity = -3;
        assert!(!form.supply_complete());
    }

    #[test]
    fn insumo_valido_completa_el_paso() {
        assert!(form_valido().supply_complete());
    }

    #[test]
    fn persona_completa_pasa_la_validacion() {
        assert!(form_valido().person_complete());
    }

    #[test]
    fn campos_en_blanco_invalidan_a_la_persona() {
        let mut form = form_valido();
        form.person.name = "   ".to_string();
        assert!(!form.person_complete());

        let mut form = form_valido();
        form.person.address.street = String::new();
        assert!(!form.person_complete());

        let mut form = form_valido();
        form.person.address.province = " ".to_string();
        assert!(!form.person_complete());
    }

    #[test]
    fn numeros_vacios_o_en_cero_invalidan_a_la_persona() {
        let mut form = form_valido();
        form.person.phone_prefix = None;
        assert!(!form.person_complete());

        let mut form = form_valido();
        form.person.phone_number = Some(0);
        assert!(!form.person_complete());

        let mut form = form_valido();
        form.person.address.postal_code = Some(-1);
        assert!(!form.person_complete());
    }

    #[test]
    fn sin_order_id_no_hay_destino() {
        let mut form = form_valido();
        form.order_id = String::new();
        assert!(!form.destination_chosen());
        assert!(form_valido().destination_chosen());
    }

    #[test]
    fn ranking_asigna_posiciones_desde_uno_en_orden() {
        let places = vec![
            SuggestedPlaceToDonate {
                id: "a".to_string(),
                health_center_name: "Hospital Central".to_string(),
                address: "Mitre 100".to_string(),
                calculated_distance: 1.2,
            },
            SuggestedPlaceToDonate {
                id: "b".to_string(),
                health_center_name: "Clínica Norte".to_string(),
                address: "Alberdi 742".to_string(),
                calculated_distance: 3.8,
            },
            SuggestedPlaceToDonate {
                id: "c".to_string(),
                health_center_name: "Sala 4".to_string(),
                address: "Urquiza 55".to_string(),
                calculated_distance: 7.0,
            },
        ];

        let rows = SuggestionRow::rank(places);

        let positions: Vec<usize> = rows.iter().map(|row| row.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(rows[0].id, "a");
        assert_eq!(rows[1].name, "Clínica Norte");
        assert_eq!(rows[2].distance, 7.0);
    }

    #[test]
    fn ranking_de_lista_vacia_queda_vacio() {
        assert!(SuggestionRow::rank(Vec::new()).is_empty());
    }

    #[test]
    fn el_request_de_creacion_lleva_un_unico_item() {
        let form = form_valido();
        let model = CreateDonation::from_form(&form);

        assert_eq!(model.order_id, "lugar-1");
        assert_eq!(model.items.len(), 1);
        assert_eq!(model.items[0].supply_id, "s1");
        assert_eq!(model.items[0].quantity, 2);
    }

    #[test]
    fn los_pasos_avanzan_y_retroceden_en_orden() {
        assert_eq!(WizardStep::Supply.next(), WizardStep::Person);
        assert_eq!(WizardStep::Person.next(), WizardStep::Destination);
        assert_eq!(WizardStep::Destination.next(), WizardStep::Done);
        assert_eq!(WizardStep::Done.next(), WizardStep::Done);

        assert_eq!(WizardStep::Done.previous(), WizardStep::Destination);
        assert_eq!(WizardStep::Supply.previous(), WizardStep::Supply);
    }

    #[test]
    fn all_messages_aplana_todos_los_errores() {
        let payload: DonationErrorResponse = serde_json::from_str(
            r#"{"errors":[{"name":"Nombre requerido"},{"email":"Email inválido"}]}"#,
        )
        .unwrap();

        assert_eq!(
            payload.all_messages(),
            vec!["Nombre requerido".to_string(), "Email inválido".to_string()]
        );
    }
}

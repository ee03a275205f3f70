use serde::{Deserialize, Serialize};

/// Ítem pedido desde el perfil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestItem {
    pub supply_id: String,
    pub quantity: i32,
}

/// Formulario de pedido de insumos del perfil.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequestForm {
    pub items: Vec<RequestItem>,
}

impl RequestForm {
    /// Agrega una entrada nueva. Ediciones repetidas del mismo insumo
    /// acumulan entradas, no reemplazan la anterior.
    pub fn push_item(&mut self, supply_id: &str, quantity: i32) {
        self.items.push(RequestItem {
            supply_id: supply_id.to_string(),
            quantity,
        });
    }

    /// Quita la primera entrada del insumo, si existe.
    pub fn remove_item(&mut self, supply_id: &str) {
        if let Some(index) = self
            .items
            .iter()
            .position(|item| item.supply_id == supply_id)
        {
            self.items.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ediciones_repetidas_acumulan_entradas() {
        let mut form = RequestForm::default();
        form.push_item("s1", 2);
        form.push_item("s1", 5);

        assert_eq!(form.items.len(), 2);
        assert_eq!(form.items[0].quantity, 2);
        assert_eq!(form.items[1].quantity, 5);
    }

    #[test]
    fn remove_saca_solo_la_primera_entrada() {
        let mut form = RequestForm::default();
        form.push_item("s1", 2);
        form.push_item("s2", 1);
        form.push_item("s1", 5);

        form.remove_item("s1");

        assert_eq!(form.items.len(), 2);
        assert_eq!(form.items[0].supply_id, "s2");
        assert_eq!(form.items[1].supply_id, "s1");
        assert_eq!(form.items[1].quantity, 5);
    }

    #[test]
    fn remove_de_un_insumo_ausente_no_toca_la_lista() {
        let mut form = RequestForm::default();
        form.push_item("s1", 2);

        form.remove_item("s9");

        assert_eq!(form.items.len(), 1);
    }
}

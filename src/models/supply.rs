use serde::{Deserialize, Serialize};

/// Insumo disponible en el catálogo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyModel {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stock: Option<u32>,
}

/// Payload de error del catálogo: `{ errors: [ { general } ] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogErrorResponse {
    pub errors: Vec<CatalogErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogErrorDetail {
    pub general: String,
}

impl CatalogErrorResponse {
    /// Primer mensaje general, apto para mostrar al usuario.
    pub fn first_message(&self) -> Option<String> {
        self.errors.first().map(|detail| detail.general.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_expone_el_primer_mensaje() {
        let payload: CatalogErrorResponse =
            serde_json::from_str(r#"{"errors":[{"general":"down"},{"general":"otro"}]}"#).unwrap();
        assert_eq!(payload.first_message().as_deref(), Some("down"));
    }

    #[test]
    fn catalog_error_sin_errores_no_tiene_mensaje() {
        let payload: CatalogErrorResponse = serde_json::from_str(r#"{"errors":[]}"#).unwrap();
        assert_eq!(payload.first_message(), None);
    }
}

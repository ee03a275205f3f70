use serde::{Deserialize, Serialize};

/// Localidad para el filtro del perfil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locality {
    #[serde(rename = "_id")]
    pub id: String,
    pub localidad: String,
}

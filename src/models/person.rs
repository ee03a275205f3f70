use serde::{Deserialize, Serialize};

/// Datos de la persona que dona.
/// Los teléfonos y el código postal arrancan en `null` hasta que el
/// usuario los completa.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub phone_prefix: Option<i64>,
    pub phone_number: Option<i64>,
    pub address: PersonAddress,
}

/// Dirección de la persona que dona.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonAddress {
    pub street: String,
    pub street_number: Option<i64>,
    pub location: String,
    pub postal_code: Option<i64>,
    pub province: String,
    pub department: String,
}

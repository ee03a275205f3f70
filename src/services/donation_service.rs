use gloo_net::http::Request;

use crate::models::{CreateDonation, DonationCreated, DonationErrorResponse, SuggestedPlaceToDonate};
use crate::utils::BACKEND_URL;

/// Registra la donación en el backend.
pub async fn create_donation(model: &CreateDonation) -> Result<DonationCreated, Vec<String>> {
    log::info!("📤 Registrando donación para el destino {}", model.order_id);
    let url = format!("{}/donations", BACKEND_URL);

    let response = Request::post(&url)
        .json(model)
        .map_err(|e| vec![format!("Request build error: {}", e)])?
        .send()
        .await
        .map_err(|e| vec![format!("Request error: {}", e)])?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(creation_error_messages(status, &body));
    }

    response
        .json::<DonationCreated>()
        .await
        .map_err(|e| vec![format!("Parse error: {}", e)])
}

/// Todos los mensajes del payload de error, o un único mensaje HTTP.
fn creation_error_messages(status: u16, body: &str) -> Vec<String> {
    match serde_json::from_str::<DonationErrorResponse>(body) {
        Ok(payload) if !payload.errors.is_empty() => payload.all_messages(),
        _ => vec![format!("HTTP error: {}", status)],
    }
}

/// Busca lugares cercanos donde donar el insumo elegido.
pub async fn fetch_suggestions(
    supply_id: &str,
    street: &str,
    street_number: Option<i64>,
    location: &str,
    province: &str,
) -> Result<Vec<SuggestedPlaceToDonate>, String> {
    log::info!("🔍 Buscando destinos para el insumo {}...", supply_id);
    let url = format!("{}/donations/suggestions", BACKEND_URL);
    let street_number = street_number.map(|n| n.to_string()).unwrap_or_default();

    let response = Request::get(&url)
        .query([
            ("supplyId", supply_id),
            ("street", street),
            ("streetNumber", street_number.as_str()),
            ("location", location),
            ("province", province),
        ])
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let places = response
        .json::<Vec<SuggestedPlaceToDonate>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    log::info!("📍 Sugerencias recibidas: {}", places.len());
    Ok(places)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn los_errores_de_creacion_se_aplanan_en_orden() {
        let messages = creation_error_messages(
            422,
            r#"{"errors":[{"name":"Nombre requerido"},{"email":"Email inválido"}]}"#,
        );
        assert_eq!(messages, vec!["Nombre requerido", "Email inválido"]);
    }

    #[test]
    fn sin_payload_queda_un_unico_mensaje_http() {
        assert_eq!(creation_error_messages(500, ""), vec!["HTTP error: 500"]);
        assert_eq!(
            creation_error_messages(422, r#"{"errors":[]}"#),
            vec!["HTTP error: 422"]
        );
    }
}

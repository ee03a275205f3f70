use gloo_net::http::Request;

use crate::models::{CatalogErrorResponse, SupplyModel};
use crate::utils::BACKEND_URL;

/// Carga el catálogo de insumos disponibles.
pub async fn fetch_supplies() -> Result<Vec<SupplyModel>, String> {
    log::info!("📋 Obteniendo catálogo de insumos...");
    let url = format!("{}/supplies", BACKEND_URL);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(catalog_error_message(status, &body));
    }

    let supplies = response
        .json::<Vec<SupplyModel>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    log::info!("✅ Catálogo cargado: {} insumos", supplies.len());
    Ok(supplies)
}

/// Extrae el mensaje `general` del cuerpo de error, si el backend mandó uno.
fn catalog_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<CatalogErrorResponse>(body)
        .ok()
        .and_then(|payload| payload.first_message())
        .unwrap_or_else(|| format!("HTTP error: {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_mensaje_general_del_backend_tiene_prioridad() {
        let message = catalog_error_message(500, r#"{"errors":[{"general":"down"}]}"#);
        assert_eq!(message, "down");
    }

    #[test]
    fn cuerpo_ilegible_cae_al_mensaje_http() {
        assert_eq!(catalog_error_message(502, "<html>"), "HTTP error: 502");
        assert_eq!(catalog_error_message(500, r#"{"errors":[]}"#), "HTTP error: 500");
    }
}

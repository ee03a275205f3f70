use gloo_net::http::Request;

use crate::models::Locality;
use crate::utils::BACKEND_URL;

/// Carga la lista de localidades para el filtro del perfil.
pub async fn fetch_localities() -> Result<Vec<Locality>, String> {
    let url = format!("{}/localities", BACKEND_URL);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<Locality>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

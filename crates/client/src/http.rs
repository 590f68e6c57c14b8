//! [`ReservationGateway`] over the backend's HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use deportivos_core::types::Code;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::gateway::ReservationGateway;
use crate::model::{
    CreatedEnvelope, Court, Discipline, Facility, FacilitySummary, LookupEnvelope, Payload,
    ReferenceData, ReservationRecord,
};

/// HTTP client for the reservation backend.
#[derive(Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    api_url: String,
}

impl HttpGateway {
    /// Build a client with the configured base URL and request timeout.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let response = self.client.get(self.url(path)).send().await;
        Self::parse_response(path, response).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Payload,
    ) -> Result<T, GatewayError> {
        let response = self.client.post(self.url(path)).json(body).send().await;
        Self::parse_response(path, response).await
    }

    /// Classify the outcome of a request and decode a successful body.
    ///
    /// Transport failures are logged here; not-found outcomes only at debug.
    async fn parse_response<T: DeserializeOwned>(
        path: &str,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<T, GatewayError> {
        let result = match response {
            Ok(response) => match Self::ensure_success(response).await {
                Ok(response) => response.json::<T>().await.map_err(GatewayError::from),
                Err(e) => Err(e),
            },
            Err(e) => Err(GatewayError::from(e)),
        };

        match &result {
            Err(GatewayError::NotFound) => tracing::debug!(path, "Backend returned not found"),
            Err(GatewayError::Validation(detail)) => {
                tracing::warn!(path, detail = %detail, "Backend rejected request")
            }
            Err(GatewayError::Transport(error)) => {
                tracing::error!(path, error = %error, "Backend request failed")
            }
            Ok(_) => {}
        }
        result
    }

    /// Map a non-2xx status to the matching [`GatewayError`] variant.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());

        match status {
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(GatewayError::Validation(
                    server_detail(&body).unwrap_or(body),
                ))
            }
            _ => Err(GatewayError::Transport(format!(
                "Backend responded {}: {}",
                status.as_u16(),
                server_detail(&body).unwrap_or(body)
            ))),
        }
    }
}

/// The human-readable message of an error body: `detalle`, else `error`.
fn server_detail(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detalle", "error"]
        .iter()
        .find_map(|key| json.get(key).and_then(|v| v.as_str()))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl ReservationGateway for HttpGateway {
    async fn fetch_facility(&self, code: &Code) -> Result<FacilitySummary, GatewayError> {
        self.get_json(&format!("/deportivos/espacios/{code}")).await
    }

    async fn fetch_form_reference_data(&self) -> Result<ReferenceData, GatewayError> {
        self.get_json("/deportivos/datos-formulario").await
    }

    async fn fetch_disciplines_for_court(
        &self,
        court: &Code,
    ) -> Result<Vec<Discipline>, GatewayError> {
        self.get_json(&format!("/deportivos/disciplinas/{court}")).await
    }

    async fn fetch_reservation_by_code(
        &self,
        code: &Code,
    ) -> Result<Option<ReservationRecord>, GatewayError> {
        match self
            .get_json::<LookupEnvelope>(&format!("/deportivos/reservas/{code}"))
            .await
        {
            Ok(envelope) if envelope.encontrada => Ok(envelope.reserva),
            Ok(_) | Err(GatewayError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create_reservation(
        &self,
        payload: &Payload,
    ) -> Result<ReservationRecord, GatewayError> {
        let created: CreatedEnvelope = self.post_json("/deportivos/reservas", payload).await?;
        Ok(created.reserva)
    }

    async fn list_reservations(&self) -> Result<Vec<ReservationRecord>, GatewayError> {
        self.get_json("/deportivos/reservas").await
    }

    async fn list_facilities(&self) -> Result<Vec<Facility>, GatewayError> {
        self.get_json("/deportivos/espacios").await
    }

    async fn create_facility(&self, payload: &Payload) -> Result<Facility, GatewayError> {
        self.post_json("/deportivos/espacios", payload).await
    }

    async fn fetch_courts_for_facility(&self, facility: &Code) -> Vec<Court> {
        self.get_json(&format!("/deportivos/canchas/{facility}"))
            .await
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_prefers_detalle_over_error() {
        let body = r#"{"error":"generic","detalle":"Court 2 is closed"}"#;
        assert_eq!(server_detail(body).as_deref(), Some("Court 2 is closed"));
    }

    #[test]
    fn detail_falls_back_to_error() {
        assert_eq!(server_detail(r#"{"error":"boom"}"#).as_deref(), Some("boom"));
    }

    #[test]
    fn detail_absent_for_non_json() {
        assert_eq!(server_detail("<html>502</html>"), None);
        assert_eq!(server_detail(r#"{"detalle":""}"#), None);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let gateway = HttpGateway::with_client(reqwest::Client::new(), "http://host:4000/");
        assert_eq!(gateway.api_url(), "http://host:4000");
        assert_eq!(gateway.url("/deportivos/reservas"), "http://host:4000/deportivos/reservas");
    }
}

//! HTTP client for network calls to the PMS

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, ErrorBody};
use crate::inventory::{CheckInTransport, RoomInventory};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::ApiResponse;
use shared::models::{CheckInData, CheckInPayload, Room};

/// HTTP client for making network requests to the PMS
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.get(&url);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Non-2xx bodies are decoded as the structured PMS error shape first;
    /// plain-text rejections fall back to a body carrying the raw text.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                return Err(ClientError::Unauthorized);
            }
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str::<ErrorBody>(&text)
                .unwrap_or_else(|_| ErrorBody::from_text(text));
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    // ========== Room Inventory API ==========

    /// List rooms, optionally filtered by exact room number
    pub async fn list_rooms(&self, numero: Option<&str>) -> ClientResult<Vec<Room>> {
        match numero {
            Some(n) => self.get("habitaciones", &[("numero", n)]).await,
            None => self.get("habitaciones", &[]).await,
        }
    }

    // ========== Check-in API ==========

    /// Submit a check-in payload for the given reservation reference
    pub async fn post_check_in(
        &self,
        reservation_ref: &str,
        payload: &CheckInPayload,
    ) -> ClientResult<ApiResponse<CheckInData>> {
        let path = format!("frontdesk/reserva/{}/checkin", reservation_ref);
        tracing::debug!(path = %path, id_hab = payload.id_hab, "POST check-in");
        self.post(&path, payload).await
    }
}

#[async_trait]
impl RoomInventory for HttpClient {
    async fn find_by_number(&self, numero: &str) -> ClientResult<Vec<Room>> {
        self.list_rooms(Some(numero)).await
    }

    async fn list_all(&self) -> ClientResult<Vec<Room>> {
        self.list_rooms(None).await
    }
}

#[async_trait]
impl CheckInTransport for HttpClient {
    async fn submit_check_in(
        &self,
        reservation_ref: &str,
        payload: &CheckInPayload,
    ) -> ClientResult<ApiResponse<CheckInData>> {
        self.post_check_in(reservation_ref, payload).await
    }
}

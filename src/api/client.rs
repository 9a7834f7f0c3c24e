use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use super::config::ApiConfig;
use super::error::ApiError;
use super::messages::{ApiAction, NETWORK_MESSAGE, friendly_message};
use super::types::*;
use crate::core::InvoiceSubmission;

const USER_TOKEN_HEADER: &str = "user_token";

/// Client for the document endpoints of the e-invoicing backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Submit an assembled invoice (`POST {base}/documentos`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` when the backend is unreachable,
    /// `ApiError::Status` with a user-facing message when it rejects the
    /// document, `ApiError::Parse` on an unexpected response body.
    pub async fn submit_document(
        &self,
        submission: &InvoiceSubmission,
    ) -> Result<CreateDocumentResponse, ApiError> {
        tracing::info!(
            numero = submission.numero,
            establecimiento = %submission.establecimiento,
            punto = %submission.punto,
            "submitting invoice"
        );

        let request = self
            .http
            .post(self.config.endpoint("documentos"))
            .json(submission);
        let response: CreateDocumentResponse =
            self.send(request, ApiAction::SubmitDocument).await?;

        match &response.document {
            Some(doc) => tracing::info!(cdc = %doc.cdc, estado = %doc.status, "invoice accepted"),
            None => tracing::warn!(message = %response.message, "submission returned no document"),
        }
        Ok(response)
    }

    /// List issued documents (`GET {base}/documentos/listar`).
    pub async fn list_documents(
        &self,
        params: &ListDocumentsParams,
    ) -> Result<ListDocumentsResponse, ApiError> {
        let request = self
            .http
            .get(self.config.endpoint("documentos/listar"))
            .query(&params.query_pairs());
        self.send(request, ApiAction::ListDocuments).await
    }

    /// Request the cancellation event for the document with control code
    /// `cdc` (`POST {base}/documentos/generar-documento-cancelacion/{cdc}`).
    pub async fn cancel_document(&self, cdc: &str) -> Result<CancelDocumentResponse, ApiError> {
        let cdc = cdc.trim();
        if cdc.is_empty() || !cdc.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ApiError::Config(format!("invalid CDC {cdc:?}")));
        }

        tracing::info!(cdc, "requesting cancellation");
        let request = self.http.post(
            self.config
                .endpoint(&format!("documentos/generar-documento-cancelacion/{cdc}")),
        );
        self.send(request, ApiAction::CancelDocument).await
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(USER_TOKEN_HEADER, &self.config.user_token);
        match &self.config.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        action: ApiAction,
    ) -> Result<T, ApiError> {
        let response = self.authorize(request).send().await.map_err(|e| {
            tracing::warn!(error = %e, ?action, "backend unreachable");
            ApiError::Network(format!("{NETWORK_MESSAGE} ({e})"))
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            let message = friendly_message(status.as_u16(), action, detail.as_deref());
            tracing::warn!(
                status = status.as_u16(),
                ?action,
                detail = detail.as_deref().unwrap_or(""),
                "backend rejected request"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e: serde_json::Error| ApiError::Parse(e.to_string()))
    }
}

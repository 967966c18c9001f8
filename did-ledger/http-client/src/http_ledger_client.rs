use crate::{WireLayout, REQWEST_CLIENT};
use did_ledger_client::{Error, LedgerClient, Result};
use did_ledger_core::{did_of, ClientOptions, OperationKind, RegistrationInfo, RegistrationStatus};

/// Ledger client that speaks a ledger node's HTTP API, in either wire layout.  Handles are
/// constructed per call from the caller's options; the expensive part (the reqwest client) is
/// shared process-wide.
pub struct HttpLedgerClient {
    ledger_base_url: url::Url,
    wire_layout: WireLayout,
    user_agent_o: Option<String>,
}

impl HttpLedgerClient {
    pub fn from_options(options: &ClientOptions, wire_layout: WireLayout) -> Self {
        Self {
            ledger_base_url: options.ledger_base_url.clone(),
            wire_layout,
            user_agent_o: options.user_agent_o.clone(),
        }
    }
    pub fn wire_layout(&self) -> WireLayout {
        self.wire_layout
    }
    /// URL the modern operations envelope is POSTed to.
    pub fn operations_url(&self) -> Result<url::Url> {
        self.url_with_path_segments(&["operations"])
    }
    /// URL of a DID resource in the legacy layout.
    pub fn did_url(&self, did: &str) -> Result<url::Url> {
        self.url_with_path_segments(&["dids", did])
    }
    /// URL the registration status of a DID is read from, in this client's wire layout.
    pub fn info_url(&self, did: &str) -> Result<url::Url> {
        match self.wire_layout {
            WireLayout::Modern => self.url_with_path_segments(&["operations", "status", did]),
            WireLayout::Legacy => self.did_url(did),
        }
    }
    fn url_with_path_segments(&self, path_segment_v: &[&str]) -> Result<url::Url> {
        let mut url = self.ledger_base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::InvalidLedgerEndpointURL(
                    format!(
                        "ledger base URL {:?} cannot be extended with path segments",
                        self.ledger_base_url.as_str()
                    )
                    .into(),
                )
            })?
            .pop_if_empty()
            .extend(path_segment_v);
        Ok(url)
    }
    fn with_user_agent(&self, request_builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(user_agent) = self.user_agent_o.as_deref() {
            request_builder.header(reqwest::header::USER_AGENT, user_agent)
        } else {
            request_builder
        }
    }
    async fn post_operation_envelope(
        &self,
        operation_kind: OperationKind,
        did_document: &serde_json::Value,
    ) -> Result<()> {
        let url = self.operations_url()?;
        tracing::debug!(
            "HttpLedgerClient; POST {} operation envelope to {}",
            operation_kind,
            url
        );
        let response = self
            .with_user_agent(REQWEST_CLIENT.clone().post(url))
            .json(&serde_json::json!({
                "type": operation_kind.as_str(),
                "didDocument": did_document,
            }))
            .send()
            .await
            .map_err(|e| Error::HTTPRequestError(e.to_string().into()))?;
        Self::check_operation_response(response)
    }
    fn check_operation_response(response: reqwest::Response) -> Result<()> {
        match response.status() {
            reqwest::StatusCode::CONFLICT => {
                Err(Error::AlreadyExists("DID already exists on ledger".into()))
            }
            reqwest::StatusCode::NOT_FOUND => {
                Err(Error::NotFound("DID not found on ledger".into()))
            }
            _ => {
                response
                    .error_for_status()
                    .map_err(|e| Error::HTTPOperationStatus(e.to_string().into()))?;
                Ok(())
            }
        }
    }
}

#[async_trait::async_trait]
impl LedgerClient for HttpLedgerClient {
    async fn register(&self, did_document: &serde_json::Value) -> Result<()> {
        match self.wire_layout {
            WireLayout::Modern => {
                self.post_operation_envelope(OperationKind::Create, did_document)
                    .await
            }
            WireLayout::Legacy => {
                // Legacy HTTP POST is for the DID create operation.
                let url = self.url_with_path_segments(&["dids"])?;
                tracing::debug!("HttpLedgerClient; POST DID document to {}", url);
                let response = self
                    .with_user_agent(REQWEST_CLIENT.clone().post(url))
                    .json(did_document)
                    .send()
                    .await
                    .map_err(|e| Error::HTTPRequestError(e.to_string().into()))?;
                Self::check_operation_response(response)
            }
        }
    }
    async fn update(&self, did_document: &serde_json::Value) -> Result<()> {
        match self.wire_layout {
            WireLayout::Modern => {
                self.post_operation_envelope(OperationKind::Update, did_document)
                    .await
            }
            WireLayout::Legacy => {
                // Legacy HTTP PUT is for the DID update operation, addressed by the DID itself.
                let did = did_of(did_document)
                    .map_err(|_| Error::Malformed("DID document has no \"id\" member".into()))?;
                let url = self.did_url(did)?;
                tracing::debug!("HttpLedgerClient; PUT DID document to {}", url);
                let response = self
                    .with_user_agent(REQWEST_CLIENT.clone().put(url))
                    .json(did_document)
                    .send()
                    .await
                    .map_err(|e| Error::HTTPRequestError(e.to_string().into()))?;
                Self::check_operation_response(response)
            }
        }
    }
    async fn registration_info(&self, did: &str) -> Result<RegistrationInfo> {
        let url = self.info_url(did)?;
        tracing::debug!("HttpLedgerClient; GET registration info from {}", url);
        let response = self
            .with_user_agent(REQWEST_CLIENT.clone().get(url))
            .send()
            .await
            .map_err(|e| Error::HTTPRequestError(e.to_string().into()))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(RegistrationInfo {
                did: did.to_string(),
                status: RegistrationStatus::NotFound,
                did_document_o: None,
            });
        }
        let response = response
            .error_for_status()
            .map_err(|e| Error::HTTPOperationStatus(e.to_string().into()))?;
        response
            .json::<RegistrationInfo>()
            .await
            .map_err(|e| Error::Malformed(format!("registration info response: {}", e).into()))
    }
}

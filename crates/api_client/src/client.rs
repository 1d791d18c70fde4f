use super::{ApiError, BillogramApi};
use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use billogram_core::methods::{CreditMethod, CreditMode, ReminderMethod, ResendMethod, SendMethod};
use billogram_core::models::{Invoice, Report, ReportList};
use billogram_core::query::ReportQuery;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// HTTP basic-auth credentials: the API user and its key.
#[derive(Clone)]
pub struct Credentials {
    pub api_user: String,
    pub api_key: String,
}

/// HTTP implementation of [`BillogramApi`]. One reusable connection pool,
/// read-only configuration after construction, no retries.
#[derive(Clone)]
pub struct BillogramClient {
    pub base_url: String,
    credentials: Credentials,
    http_client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct EmptyPayload {}

#[derive(Debug, Serialize)]
struct MethodPayload<M> {
    method: M,
}

#[derive(Debug, Serialize)]
struct RemindPayload {
    method: ReminderMethod,
    message: String,
}

#[derive(Debug, Serialize)]
struct PaymentPayload {
    amount: f64,
}

#[derive(Debug, Serialize)]
struct CreditPayload {
    amount: f64,
    mode: CreditMode,
    method: CreditMethod,
}

#[derive(Debug, Serialize)]
struct RespitePayload {
    date: String,
}

#[derive(Debug, Serialize)]
struct MessagePayload {
    message: String,
}

#[derive(Debug, Serialize)]
struct AttachPayload {
    filename: String,
    content: String,
}

impl BillogramClient {
    pub fn new(base_url: String, credentials: Credentials) -> Arc<Self> {
        Arc::new(Self {
            base_url,
            credentials,
            http_client: reqwest::Client::new(),
        })
    }

    /// Assemble a client from the stored configuration, pulling the API key
    /// from the OS keychain.
    pub fn from_config(cfg: &config::AppConfig) -> Result<Arc<Self>> {
        let api_user = cfg
            .api
            .api_user
            .clone()
            .context("No API user configured")?;
        let api_key =
            config::get_api_key(&api_user).context("API key not found in the keychain")?;
        Ok(Self::new(
            cfg.api.base_url.clone(),
            Credentials { api_user, api_key },
        ))
    }

    fn command_url(&self, id: &str, action: &str) -> String {
        format!("{}/billogram/{}/command/{}", self.base_url, id, action)
    }

    /// Dispatch one invoice command: POST the payload as JSON to
    /// `{base}/billogram/{id}/command/{action}` and decode the response.
    async fn command<P, R>(&self, id: &str, action: &str, payload: &P) -> Result<R, ApiError>
    where
        P: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.command_url(id, action);
        tracing::info!(invoice_id = %id, action = %action, "dispatching invoice command");

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.credentials.api_user, Some(&self.credentials.api_key))
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    async fn get<R>(&self, url: String, query: &[(&'static str, String)]) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        tracing::info!(url = %url, "fetching resource");

        let mut request = self
            .http_client
            .get(&url)
            .basic_auth(&self.credentials.api_user, Some(&self.credentials.api_key));
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        decode(response).await
    }
}

async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(ApiError::Decode)
}

#[async_trait]
impl BillogramApi for BillogramClient {
    async fn fetch_invoice(&self, id: &str) -> Result<Invoice, ApiError> {
        self.get(format!("{}/billogram/{}", self.base_url, id), &[])
            .await
    }

    async fn send_invoice(&self, id: &str, method: SendMethod) -> Result<Invoice, ApiError> {
        self.command(id, "send", &MethodPayload { method }).await
    }

    async fn sell_invoice(&self, id: &str) -> Result<Invoice, ApiError> {
        self.command(id, "sell", &EmptyPayload {}).await
    }

    async fn resend_invoice(&self, id: &str, method: ResendMethod) -> Result<Invoice, ApiError> {
        self.command(id, "resend", &MethodPayload { method }).await
    }

    async fn remind_invoice(
        &self,
        id: &str,
        method: ReminderMethod,
        message: &str,
    ) -> Result<Invoice, ApiError> {
        let payload = RemindPayload {
            method,
            message: message.to_string(),
        };
        self.command(id, "remind", &payload).await
    }

    async fn collect_invoice(&self, id: &str) -> Result<Invoice, ApiError> {
        self.command(id, "collect", &EmptyPayload {}).await
    }

    async fn register_payment(&self, id: &str, amount: f64) -> Result<Invoice, ApiError> {
        self.command(id, "payment", &PaymentPayload { amount })
            .await
    }

    async fn credit_invoice(
        &self,
        id: &str,
        amount: f64,
        mode: CreditMode,
        method: CreditMethod,
    ) -> Result<Invoice, ApiError> {
        let payload = CreditPayload {
            amount,
            mode,
            method,
        };
        self.command(id, "credit", &payload).await
    }

    async fn writeoff_invoice(&self, id: &str) -> Result<Invoice, ApiError> {
        self.command(id, "writeoff", &EmptyPayload {}).await
    }

    async fn writedown_invoice(&self, id: &str) -> Result<Invoice, ApiError> {
        self.command(id, "writedown", &EmptyPayload {}).await
    }

    async fn revert_writedown(&self, id: &str) -> Result<Invoice, ApiError> {
        self.command(id, "revert-writedown", &EmptyPayload {}).await
    }

    async fn set_respite(&self, id: &str, date: NaiveDate) -> Result<Invoice, ApiError> {
        let payload = RespitePayload {
            date: date.format("%Y-%m-%d").to_string(),
        };
        self.command(id, "respite", &payload).await
    }

    async fn remove_respite(&self, id: &str) -> Result<Invoice, ApiError> {
        self.command(id, "remove-respite", &EmptyPayload {}).await
    }

    async fn add_message(&self, id: &str, message: &str) -> Result<Invoice, ApiError> {
        let payload = MessagePayload {
            message: message.to_string(),
        };
        self.command(id, "message", &payload).await
    }

    async fn attach_pdf(
        &self,
        id: &str,
        filename: &str,
        content: &[u8],
    ) -> Result<Invoice, ApiError> {
        let payload = AttachPayload {
            filename: filename.to_string(),
            content: BASE64.encode(content),
        };
        self.command(id, "attach", &payload).await
    }

    async fn list_reports(&self, query: &ReportQuery) -> Result<ReportList, ApiError> {
        self.get(format!("{}/report", self.base_url), &query.params())
            .await
    }

    async fn fetch_report(&self, filename: &str) -> Result<Report, ApiError> {
        self.get(format!("{}/report/{}", self.base_url, filename), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> Arc<BillogramClient> {
        BillogramClient::new(
            "https://api.example.com".to_string(),
            Credentials {
                api_user: "user".to_string(),
                api_key: "key".to_string(),
            },
        )
    }

    #[test]
    fn command_url_joins_base_id_and_action() {
        let client = test_client();
        assert_eq!(
            client.command_url("abc123", "send"),
            "https://api.example.com/billogram/abc123/command/send"
        );
    }

    #[test]
    fn payment_payload_carries_only_the_amount() {
        let json = serde_json::to_string(&PaymentPayload { amount: 42.5 }).unwrap();
        assert_eq!(json, r#"{"amount":42.5}"#);
    }

    #[test]
    fn empty_payload_is_an_empty_object() {
        assert_eq!(serde_json::to_string(&EmptyPayload {}).unwrap(), "{}");
    }

    #[test]
    fn send_payload_uses_the_wire_token() {
        let json = serde_json::to_string(&MethodPayload {
            method: SendMethod::EmailLetter,
        })
        .unwrap();
        assert_eq!(json, r#"{"method":"Email+Letter"}"#);
    }

    #[test]
    fn credit_payload_has_amount_mode_and_method() {
        let json = serde_json::to_string(&CreditPayload {
            amount: 99.0,
            mode: CreditMode::Remaining,
            method: CreditMethod::DoNotNotify,
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"amount":99.0,"mode":"remaining","method":"DoNotNotify"}"#
        );
    }

    #[test]
    fn respite_payload_formats_the_date() {
        let payload = RespitePayload {
            date: NaiveDate::from_ymd_opt(2026, 9, 1)
                .unwrap()
                .format("%Y-%m-%d")
                .to_string(),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"date":"2026-09-01"}"#
        );
    }

    #[test]
    fn attach_payload_encodes_content_as_base64() {
        let payload = AttachPayload {
            filename: "invoice.pdf".to_string(),
            content: BASE64.encode(b"%PDF-1.4"),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"filename":"invoice.pdf","content":"JVBERi0xLjQ="}"#
        );
    }
}

use async_trait::async_trait;
use billogram_core::methods::{CreditMethod, CreditMode, ReminderMethod, ResendMethod, SendMethod};
use billogram_core::models::{Invoice, Report, ReportList};
use billogram_core::query::ReportQuery;
use chrono::NaiveDate;

/// What went wrong with an API call: transport failure, a request the
/// server rejected (status code and raw body attached), or a success
/// response whose body did not decode.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Operations on remote invoice resources. `client::BillogramClient` is the
/// HTTP implementation; `mock::MockClient` answers with canned data for
/// tests.
///
/// Every call is an independent request/response round trip. Conflicting
/// commands against the same invoice are serialized by the remote service,
/// not here.
#[async_trait]
pub trait BillogramApi: Send + Sync {
    async fn fetch_invoice(&self, id: &str) -> Result<Invoice, ApiError>;

    async fn send_invoice(&self, id: &str, method: SendMethod) -> Result<Invoice, ApiError>;

    async fn sell_invoice(&self, id: &str) -> Result<Invoice, ApiError>;

    async fn resend_invoice(&self, id: &str, method: ResendMethod) -> Result<Invoice, ApiError>;

    /// Send a payment reminder with a free-text message attached.
    async fn remind_invoice(
        &self,
        id: &str,
        method: ReminderMethod,
        message: &str,
    ) -> Result<Invoice, ApiError>;

    async fn collect_invoice(&self, id: &str) -> Result<Invoice, ApiError>;

    async fn register_payment(&self, id: &str, amount: f64) -> Result<Invoice, ApiError>;

    async fn credit_invoice(
        &self,
        id: &str,
        amount: f64,
        mode: CreditMode,
        method: CreditMethod,
    ) -> Result<Invoice, ApiError>;

    async fn writeoff_invoice(&self, id: &str) -> Result<Invoice, ApiError>;

    async fn writedown_invoice(&self, id: &str) -> Result<Invoice, ApiError>;

    async fn revert_writedown(&self, id: &str) -> Result<Invoice, ApiError>;

    /// Defer the due date. The date must lie in the future and after the
    /// invoice due date; the remote service enforces this, not the client.
    async fn set_respite(&self, id: &str, date: NaiveDate) -> Result<Invoice, ApiError>;

    async fn remove_respite(&self, id: &str) -> Result<Invoice, ApiError>;

    async fn add_message(&self, id: &str, message: &str) -> Result<Invoice, ApiError>;

    /// Attach a PDF. `content` is the raw file; it is base64-encoded on the
    /// wire.
    async fn attach_pdf(
        &self,
        id: &str,
        filename: &str,
        content: &[u8],
    ) -> Result<Invoice, ApiError>;

    async fn list_reports(&self, query: &ReportQuery) -> Result<ReportList, ApiError>;

    async fn fetch_report(&self, filename: &str) -> Result<Report, ApiError>;
}

pub mod client;
pub mod mock;

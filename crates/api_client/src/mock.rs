use super::{ApiError, BillogramApi};
use async_trait::async_trait;
use billogram_core::methods::{CreditMethod, CreditMode, ReminderMethod, ResendMethod, SendMethod};
use billogram_core::models::{Invoice, InvoiceData, Report, ReportData, ReportList};
use billogram_core::query::ReportQuery;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::time::{sleep, Duration};

/// Offline stand-in for the remote service: echoes the invoice id back in a
/// canned envelope with a plausible state per operation.
#[derive(Clone, Default)]
pub struct MockClient;

impl MockClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    async fn invoice(id: &str, state: &str) -> Result<Invoice, ApiError> {
        // simulate network latency
        sleep(Duration::from_millis(20)).await;
        Ok(Invoice {
            status: "OK".to_string(),
            data: InvoiceData {
                id: id.to_string(),
                state: state.to_string(),
                ..Default::default()
            },
        })
    }
}

#[async_trait]
impl BillogramApi for MockClient {
    async fn fetch_invoice(&self, id: &str) -> Result<Invoice, ApiError> {
        Self::invoice(id, "Unattested").await
    }

    async fn send_invoice(&self, id: &str, _method: SendMethod) -> Result<Invoice, ApiError> {
        Self::invoice(id, "Sent").await
    }

    async fn sell_invoice(&self, id: &str) -> Result<Invoice, ApiError> {
        Self::invoice(id, "Sold").await
    }

    async fn resend_invoice(&self, id: &str, _method: ResendMethod) -> Result<Invoice, ApiError> {
        Self::invoice(id, "Sent").await
    }

    async fn remind_invoice(
        &self,
        id: &str,
        _method: ReminderMethod,
        _message: &str,
    ) -> Result<Invoice, ApiError> {
        Self::invoice(id, "Reminded").await
    }

    async fn collect_invoice(&self, id: &str) -> Result<Invoice, ApiError> {
        Self::invoice(id, "Collection").await
    }

    async fn register_payment(&self, id: &str, _amount: f64) -> Result<Invoice, ApiError> {
        Self::invoice(id, "Paid").await
    }

    async fn credit_invoice(
        &self,
        id: &str,
        _amount: f64,
        _mode: CreditMode,
        _method: CreditMethod,
    ) -> Result<Invoice, ApiError> {
        Self::invoice(id, "Credited").await
    }

    async fn writeoff_invoice(&self, id: &str) -> Result<Invoice, ApiError> {
        Self::invoice(id, "WrittenOff").await
    }

    async fn writedown_invoice(&self, id: &str) -> Result<Invoice, ApiError> {
        Self::invoice(id, "WrittenDown").await
    }

    async fn revert_writedown(&self, id: &str) -> Result<Invoice, ApiError> {
        Self::invoice(id, "Sent").await
    }

    async fn set_respite(&self, id: &str, _date: NaiveDate) -> Result<Invoice, ApiError> {
        Self::invoice(id, "Respite").await
    }

    async fn remove_respite(&self, id: &str) -> Result<Invoice, ApiError> {
        Self::invoice(id, "Sent").await
    }

    async fn add_message(&self, id: &str, _message: &str) -> Result<Invoice, ApiError> {
        Self::invoice(id, "Sent").await
    }

    async fn attach_pdf(
        &self,
        id: &str,
        _filename: &str,
        _content: &[u8],
    ) -> Result<Invoice, ApiError> {
        Self::invoice(id, "Sent").await
    }

    async fn list_reports(&self, _query: &ReportQuery) -> Result<ReportList, ApiError> {
        Ok(ReportList {
            status: "OK".to_string(),
            data: vec![ReportData {
                filename: "mock-report.csv".to_string(),
                kind: "billogram".to_string(),
                file_type: "csv".to_string(),
                ..Default::default()
            }],
        })
    }

    async fn fetch_report(&self, filename: &str) -> Result<Report, ApiError> {
        Ok(Report {
            status: "OK".to_string(),
            data: ReportData {
                filename: filename.to_string(),
                kind: "billogram".to_string(),
                file_type: "csv".to_string(),
                content: Some(String::new()),
                ..Default::default()
            },
        })
    }
}

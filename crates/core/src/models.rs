use serde::{Deserialize, Serialize};

/// Envelope returned for a single invoice resource. Every response body is
/// wrapped as `{ "status": ..., "data": ... }` by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub status: String,
    pub data: InvoiceData,
}

/// Partial projection of the remote invoice. The full schema lives on the
/// server side; fields it may omit are optional and unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceData {
    pub id: String,
    pub invoice_no: Option<i64>,
    pub state: String,
    pub currency: Option<String>,
    pub total_sum: Option<f64>,
    pub remaining_sum: Option<f64>,
    pub created_at: Option<String>,
    pub attested_at: Option<String>,
    pub due_date: Option<String>,
    pub ocr_number: Option<String>,
    pub url: Option<String>,
}

/// Envelope returned for a single report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub status: String,
    pub data: ReportData,
}

/// Envelope returned by the report listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportList {
    pub status: String,
    pub data: Vec<ReportData>,
}

/// A generated report. `content` (base64) is only present when fetching a
/// single report, never in listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportData {
    pub filename: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub file_type: String,
    pub info: Option<String>,
    pub created_at: Option<String>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_envelope_parses_from_sparse_body() {
        let body = r#"{
            "status": "OK",
            "data": {
                "id": "abc123",
                "state": "Sent",
                "total_sum": 250.0,
                "flags": []
            }
        }"#;
        let invoice: Invoice = serde_json::from_str(body).unwrap();
        assert_eq!(invoice.status, "OK");
        assert_eq!(invoice.data.id, "abc123");
        assert_eq!(invoice.data.state, "Sent");
        assert_eq!(invoice.data.total_sum, Some(250.0));
        assert_eq!(invoice.data.invoice_no, None);
    }

    #[test]
    fn report_listing_omits_content() {
        let body = r#"{
            "status": "OK",
            "data": [
                {"filename": "2026-06.csv", "type": "billogram", "file_type": "csv", "created_at": "2026-07-01 03:00:00"}
            ]
        }"#;
        let list: ReportList = serde_json::from_str(body).unwrap();
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].filename, "2026-06.csv");
        assert_eq!(list.data[0].kind, "billogram");
        assert!(list.data[0].content.is_none());
    }
}

use crate::domain::models::{Receipt, ReceiptDetails, ReceiptId, ResidentId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for both create and update. Update replaces the whole receipt.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptBody {
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: bool,
    pub resident_id: ResidentId,
    #[serde(default)]
    pub payment_id: Option<i64>,
    pub payment_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_paid: Decimal,
    pub payment_method: i64,
    #[serde(rename = "type")]
    pub receipt_type: String,
}

impl From<ReceiptBody> for ReceiptDetails {
    fn from(body: ReceiptBody) -> Self {
        ReceiptDetails {
            issue_date: body.issue_date,
            due_date: body.due_date,
            total_amount: body.total_amount,
            status: body.status,
            resident_id: body.resident_id,
            payment_id: body.payment_id,
            payment_date: body.payment_date,
            amount_paid: body.amount_paid,
            payment_method: body.payment_method,
            receipt_type: body.receipt_type,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    pub id: ReceiptId,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: bool,
    pub resident_id: ResidentId,
    pub payment_id: Option<i64>,
    pub payment_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_paid: Decimal,
    pub payment_method: i64,
    #[serde(rename = "type")]
    pub receipt_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        let details = receipt.details;
        ReceiptResponse {
            id: receipt.id,
            issue_date: details.issue_date,
            due_date: details.due_date,
            total_amount: details.total_amount,
            status: details.status,
            resident_id: details.resident_id,
            payment_id: details.payment_id,
            payment_date: details.payment_date,
            amount_paid: details.amount_paid,
            payment_method: details.payment_method,
            receipt_type: details.receipt_type,
            created_at: receipt.created_at,
            updated_at: receipt.updated_at,
        }
    }
}

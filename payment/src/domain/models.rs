use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type ReceiptId = i64;

/// Largest amount a `NUMERIC(12, 2)` column holds.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);
pub const AMOUNT_SCALE: u32 = 2;

/// Reference to the billed resident. Residents live in another service, only the id is kept here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ResidentId(pub i64);

impl fmt::Display for ResidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidReceipt {
    #[error("resident id must be positive, got {0}")]
    ResidentId(ResidentId),
    #[error("{field} must not be negative")]
    NegativeAmount { field: &'static str },
    #[error("{field} must not exceed 9999999999.99")]
    AmountTooLarge { field: &'static str },
    #[error("{field} must have at most 2 decimal places")]
    AmountTooPrecise { field: &'static str },
    #[error("type must not be blank")]
    BlankType,
    #[error("due date {due} precedes issue date {issued}")]
    DueBeforeIssue { issued: NaiveDate, due: NaiveDate },
}

/// Everything a caller supplies for a receipt. Create and update both carry a full set.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ReceiptDetails {
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub total_amount: Decimal,
    pub status: bool, // paid
    pub resident_id: ResidentId,
    pub payment_id: Option<i64>,
    pub payment_date: NaiveDate,
    pub amount_paid: Decimal,
    pub payment_method: i64,
    pub receipt_type: String,
}

impl ReceiptDetails {
    pub fn validate(&self) -> Result<(), InvalidReceipt> {
        if self.resident_id.0 <= 0 {
            return Err(InvalidReceipt::ResidentId(self.resident_id));
        }
        check_amount("totalAmount", self.total_amount)?;
        check_amount("amountPaid", self.amount_paid)?;
        if self.receipt_type.trim().is_empty() {
            return Err(InvalidReceipt::BlankType);
        }
        if self.due_date < self.issue_date {
            return Err(InvalidReceipt::DueBeforeIssue {
                issued: self.issue_date,
                due: self.due_date,
            });
        }
        Ok(())
    }
}

fn check_amount(field: &'static str, amount: Decimal) -> Result<(), InvalidReceipt> {
    if amount < Decimal::ZERO {
        return Err(InvalidReceipt::NegativeAmount { field });
    }
    if amount > MAX_AMOUNT {
        return Err(InvalidReceipt::AmountTooLarge { field });
    }
    // trailing zeros are fine, 100.500 is stored as 100.50
    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(InvalidReceipt::AmountTooPrecise { field });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Receipt {
    pub id: ReceiptId,
    #[sqlx(flatten)]
    pub details: ReceiptDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Receipt {
    /// Replaces every caller-owned field. The id and audit timestamps stay with the store.
    pub fn update_information(&mut self, details: ReceiptDetails) {
        self.details = details;
    }

    pub fn resident_id(&self) -> ResidentId {
        self.details.resident_id
    }
}

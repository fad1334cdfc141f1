use crate::domain::models::{InvalidReceipt, ReceiptId, ResidentId};
use crate::domain::repository::DuplicateResident;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("invalid receipt: {0}")]
    Validation(#[from] InvalidReceipt),
    #[error("receipt with resident id {0} already exists")]
    Conflict(ResidentId),
    #[error("receipt {0} does not exist")]
    NotFound(ReceiptId),
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl ReceiptError {
    /// Storage failures caused by the resident uniqueness constraint become conflicts.
    pub(crate) fn from_write(err: anyhow::Error) -> ReceiptError {
        match err.downcast_ref::<DuplicateResident>() {
            Some(DuplicateResident(resident_id)) => ReceiptError::Conflict(*resident_id),
            None => ReceiptError::Storage(err),
        }
    }
}

use crate::domain::models::{ReceiptDetails, ReceiptId};

#[derive(Debug, Clone)]
pub struct CreateReceiptCommand {
    pub details: ReceiptDetails,
}

#[derive(Debug, Clone)]
pub struct UpdateReceiptCommand {
    pub receipt_id: ReceiptId,
    pub details: ReceiptDetails,
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteReceiptCommand {
    pub receipt_id: ReceiptId,
}

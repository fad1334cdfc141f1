use crate::domain::models::{Receipt, ReceiptId, ResidentId};
use crate::domain::repository::ReceiptRepository;
use crate::service::error::ReceiptError;
use std::sync::Arc;

pub struct ReceiptQueryService {
    receipt_repo: Arc<dyn ReceiptRepository>,
}

impl ReceiptQueryService {
    pub fn new(receipt_repo: Arc<dyn ReceiptRepository>) -> ReceiptQueryService {
        ReceiptQueryService { receipt_repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Receipt>, ReceiptError> {
        Ok(self.receipt_repo.find_all().await?)
    }

    pub async fn get_by_id(&self, receipt_id: ReceiptId) -> Result<Option<Receipt>, ReceiptError> {
        Ok(self.receipt_repo.find_by_id(receipt_id).await?)
    }

    pub async fn get_by_resident_id(
        &self,
        resident_id: ResidentId,
    ) -> Result<Vec<Receipt>, ReceiptError> {
        Ok(self.receipt_repo.find_by_resident_id(resident_id).await?)
    }
}

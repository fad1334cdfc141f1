use crate::domain::commands::{CreateReceiptCommand, DeleteReceiptCommand, UpdateReceiptCommand};
use crate::domain::models::{Receipt, ReceiptId};
use crate::domain::repository::ReceiptRepository;
use crate::domain::service::NotificationService;
use crate::service::error::ReceiptError;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub struct ReceiptCommandService {
    receipt_repo: Arc<dyn ReceiptRepository>,
    notifications: Arc<dyn NotificationService>,
}

impl ReceiptCommandService {
    pub fn new(
        receipt_repo: Arc<dyn ReceiptRepository>,
        notifications: Arc<dyn NotificationService>,
    ) -> ReceiptCommandService {
        ReceiptCommandService {
            receipt_repo,
            notifications,
        }
    }

    /// Persists a new receipt and returns its id.
    ///
    /// A resident holds at most one receipt. Once the receipt is stored the resident is
    /// notified in the background; that call is best-effort and its failure never undoes
    /// the create.
    pub async fn create(&self, command: CreateReceiptCommand) -> Result<ReceiptId, ReceiptError> {
        let details = command.details;
        details.validate()?;

        let resident_id = details.resident_id;
        if self.receipt_repo.exists_by_resident_id(resident_id).await? {
            return Err(ReceiptError::Conflict(resident_id));
        }

        let receipt = self
            .receipt_repo
            .insert(&details)
            .await
            .map_err(ReceiptError::from_write)?;
        log::info!(receipt_id = receipt.id, resident_id:% = resident_id; "Receipt created");

        // not awaited, a slow notifier must not hold up the response
        let _ = self.notify_resident(&receipt);
        Ok(receipt.id)
    }

    /// Overwrites every field of an existing receipt. There is no partial patch.
    pub async fn update(&self, command: UpdateReceiptCommand) -> Result<Receipt, ReceiptError> {
        let UpdateReceiptCommand {
            receipt_id,
            details,
        } = command;
        details.validate()?;

        let mut receipt = self
            .receipt_repo
            .find_by_id(receipt_id)
            .await?
            .ok_or(ReceiptError::NotFound(receipt_id))?;

        if receipt.resident_id() != details.resident_id
            && self
                .receipt_repo
                .exists_by_resident_id(details.resident_id)
                .await?
        {
            return Err(ReceiptError::Conflict(details.resident_id));
        }

        receipt.update_information(details);
        let updated = self
            .receipt_repo
            .update(&receipt)
            .await
            .map_err(ReceiptError::from_write)?;
        log::info!(receipt_id = updated.id; "Receipt updated");

        Ok(updated)
    }

    pub async fn delete(&self, command: DeleteReceiptCommand) -> Result<(), ReceiptError> {
        let receipt_id = command.receipt_id;
        if !self.receipt_repo.exists_by_id(receipt_id).await? {
            return Err(ReceiptError::NotFound(receipt_id));
        }

        self.receipt_repo.delete_by_id(receipt_id).await?;
        log::info!(receipt_id = receipt_id; "Receipt deleted");

        Ok(())
    }

    pub(crate) fn notify_resident(&self, receipt: &Receipt) -> JoinHandle<()> {
        let notifications = Arc::clone(&self.notifications);
        let receipt_id = receipt.id;
        let resident_id = receipt.resident_id();
        let message = format!(
            "A new receipt of {} has been issued to you, due on {}",
            receipt.details.total_amount, receipt.details.due_date
        );

        tokio::spawn(async move {
            if let Err(err) = notifications.send_notification(resident_id, message).await {
                log::warn!(
                    receipt_id = receipt_id,
                    resident_id:% = resident_id,
                    error:% = err;
                    "Failed to notify resident about new receipt"
                );
            }
        })
    }
}

use crate::domain::models::ResidentId;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn send_notification(&self, resident_id: ResidentId, message: String) -> anyhow::Result<()>;
}

use crate::domain::models::*;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Returned by `insert`/`update` when another receipt already holds the resident.
#[derive(Debug, Error, PartialEq)]
#[error("resident {0} already has a receipt")]
pub struct DuplicateResident(pub ResidentId);

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    async fn exists_by_id(&self, id: ReceiptId) -> anyhow::Result<bool>;
    async fn exists_by_resident_id(&self, resident_id: ResidentId) -> anyhow::Result<bool>;
    async fn find_by_id(&self, id: ReceiptId) -> anyhow::Result<Option<Receipt>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Receipt>>;
    async fn find_by_resident_id(&self, resident_id: ResidentId) -> anyhow::Result<Vec<Receipt>>;

    // the store assigns id, created_at and updated_at
    async fn insert(&self, details: &ReceiptDetails) -> anyhow::Result<Receipt>;
    async fn update(&self, receipt: &Receipt) -> anyhow::Result<Receipt>;
    async fn delete_by_id(&self, id: ReceiptId) -> anyhow::Result<()>;
}

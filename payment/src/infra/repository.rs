use crate::domain::models::{Receipt, ReceiptDetails, ReceiptId, ResidentId};
use crate::domain::repository;
use crate::domain::repository::DuplicateResident;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};

const RECEIPT_COLUMNS: &str = "id, issue_date, due_date, total_amount, status, resident_id, \
    payment_id, payment_date, amount_paid, payment_method, receipt_type, created_at, updated_at";

fn map_unique_violation(err: sqlx::Error, resident_id: ResidentId) -> anyhow::Error {
    match err.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => DuplicateResident(resident_id).into(),
        _ => err.into(),
    }
}

#[derive(Clone)]
pub struct PgReceiptRepository {
    pub pool: Pool<Postgres>,
}

impl PgReceiptRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PgReceiptRepository { pool }
    }
}

#[async_trait]
impl repository::ReceiptRepository for PgReceiptRepository {
    async fn exists_by_id(&self, id: ReceiptId) -> anyhow::Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM receipts WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn exists_by_resident_id(&self, resident_id: ResidentId) -> anyhow::Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM receipts WHERE resident_id = $1)")
                .bind(resident_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn find_by_id(&self, id: ReceiptId) -> anyhow::Result<Option<Receipt>> {
        let receipt = sqlx::query_as::<_, Receipt>(&format!(
            "SELECT {RECEIPT_COLUMNS} FROM receipts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(receipt)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Receipt>> {
        let receipts = sqlx::query_as::<_, Receipt>(&format!(
            "SELECT {RECEIPT_COLUMNS} FROM receipts ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(receipts)
    }

    async fn find_by_resident_id(&self, resident_id: ResidentId) -> anyhow::Result<Vec<Receipt>> {
        let receipts = sqlx::query_as::<_, Receipt>(&format!(
            "SELECT {RECEIPT_COLUMNS} FROM receipts WHERE resident_id = $1 ORDER BY id"
        ))
        .bind(resident_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(receipts)
    }

    async fn insert(&self, details: &ReceiptDetails) -> anyhow::Result<Receipt> {
        let receipt = sqlx::query_as::<_, Receipt>(&format!(
            "INSERT INTO receipts(issue_date, due_date, total_amount, status, resident_id, \
             payment_id, payment_date, amount_paid, payment_method, receipt_type) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING {RECEIPT_COLUMNS}"
        ))
        .bind(details.issue_date)
        .bind(details.due_date)
        .bind(details.total_amount)
        .bind(details.status)
        .bind(details.resident_id)
        .bind(details.payment_id)
        .bind(details.payment_date)
        .bind(details.amount_paid)
        .bind(details.payment_method)
        .bind(&details.receipt_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_unique_violation(err, details.resident_id))?;
        Ok(receipt)
    }

    async fn update(&self, receipt: &Receipt) -> anyhow::Result<Receipt> {
        let details = &receipt.details;
        let updated = sqlx::query_as::<_, Receipt>(&format!(
            "UPDATE receipts SET issue_date = $1, due_date = $2, total_amount = $3, status = $4, \
             resident_id = $5, payment_id = $6, payment_date = $7, amount_paid = $8, \
             payment_method = $9, receipt_type = $10, updated_at = now() \
             WHERE id = $11 RETURNING {RECEIPT_COLUMNS}"
        ))
        .bind(details.issue_date)
        .bind(details.due_date)
        .bind(details.total_amount)
        .bind(details.status)
        .bind(details.resident_id)
        .bind(details.payment_id)
        .bind(details.payment_date)
        .bind(details.amount_paid)
        .bind(details.payment_method)
        .bind(&details.receipt_type)
        .bind(receipt.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_unique_violation(err, details.resident_id))?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: ReceiptId) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM receipts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

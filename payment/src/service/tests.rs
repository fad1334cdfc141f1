#[cfg(test)]
mod tests {
    use crate::domain::commands::{
        CreateReceiptCommand, DeleteReceiptCommand, UpdateReceiptCommand,
    };
    use crate::domain::models::{InvalidReceipt, ResidentId};
    use crate::domain::repository::{DuplicateResident, MockReceiptRepository};
    use crate::domain::service::{MockNotificationService, NotificationService};
    use crate::service::{ReceiptCommandService, ReceiptError, ReceiptQueryService};
    use crate::test::fixtures;
    use anyhow::{anyhow, Result};
    use mockall::predicate::eq;
    use std::sync::Arc;
    use std::time::Duration;

    struct SlowNotificationService;

    #[async_trait::async_trait]
    impl NotificationService for SlowNotificationService {
        async fn send_notification(&self, _: ResidentId, _: String) -> Result<()> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(())
        }
    }

    fn command_service(
        repo: MockReceiptRepository,
        notifications: MockNotificationService,
    ) -> ReceiptCommandService {
        ReceiptCommandService::new(Arc::new(repo), Arc::new(notifications))
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_resident() {
        let mut repo = MockReceiptRepository::new();
        repo.expect_exists_by_resident_id()
            .with(eq(ResidentId(42)))
            .return_once(|_| Ok(true))
            .times(1);
        repo.expect_insert().never();
        let mut notifications = MockNotificationService::new();
        notifications.expect_send_notification().never();

        let result = command_service(repo, notifications)
            .create(CreateReceiptCommand {
                details: fixtures::details(42),
            })
            .await;

        assert!(matches!(result, Err(ReceiptError::Conflict(ResidentId(42)))));
    }

    #[tokio::test]
    async fn test_create_persists_receipt() -> Result<()> {
        let mut repo = MockReceiptRepository::new();
        repo.expect_exists_by_resident_id()
            .return_once(|_| Ok(false));
        repo.expect_insert()
            .withf(|details| details == &fixtures::details(42))
            .return_once(|details| Ok(fixtures::receipt(1, details.clone())))
            .times(1);
        let mut notifications = MockNotificationService::new();
        notifications
            .expect_send_notification()
            .returning(|_, _| Ok(()));

        let id = command_service(repo, notifications)
            .create(CreateReceiptCommand {
                details: fixtures::details(42),
            })
            .await?;

        assert_eq!(id, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_does_not_wait_for_notification() -> Result<()> {
        let mut repo = MockReceiptRepository::new();
        repo.expect_exists_by_resident_id()
            .return_once(|_| Ok(false));
        repo.expect_insert()
            .return_once(|details| Ok(fixtures::receipt(5, details.clone())));
        let notifications = Arc::new(SlowNotificationService);
        let service = ReceiptCommandService::new(Arc::new(repo), notifications);

        let id = tokio::time::timeout(
            Duration::from_secs(1),
            service.create(CreateReceiptCommand {
                details: fixtures::details(42),
            }),
        )
        .await??;

        assert_eq!(id, 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_notify_resident_sends_message() {
        let mut notifications = MockNotificationService::new();
        notifications
            .expect_send_notification()
            .withf(|resident_id, message| {
                *resident_id == ResidentId(42) && message.contains("2024-05-31")
            })
            .return_once(|_, _| Ok(()))
            .times(1);
        let service = command_service(MockReceiptRepository::new(), notifications);

        service
            .notify_resident(&fixtures::receipt(1, fixtures::details(42)))
            .await
            .expect("notification task panicked");
    }

    #[tokio::test]
    async fn test_notification_failure_is_swallowed() {
        let mut notifications = MockNotificationService::new();
        notifications
            .expect_send_notification()
            .return_once(|_, _| Err(anyhow!("connection refused")))
            .times(1);
        let service = command_service(MockReceiptRepository::new(), notifications);

        let handle = service.notify_resident(&fixtures::receipt(5, fixtures::details(42)));
        assert!(handle.await.is_ok());
    }

    #[tokio::test]
    async fn test_create_reports_lost_uniqueness_race_as_conflict() {
        let mut repo = MockReceiptRepository::new();
        repo.expect_exists_by_resident_id()
            .return_once(|_| Ok(false));
        repo.expect_insert()
            .return_once(|_| Err(DuplicateResident(ResidentId(42)).into()));
        let mut notifications = MockNotificationService::new();
        notifications.expect_send_notification().never();

        let result = command_service(repo, notifications)
            .create(CreateReceiptCommand {
                details: fixtures::details(42),
            })
            .await;

        assert!(matches!(result, Err(ReceiptError::Conflict(ResidentId(42)))));
    }

    #[tokio::test]
    async fn test_create_wraps_storage_failure() {
        let mut repo = MockReceiptRepository::new();
        repo.expect_exists_by_resident_id()
            .return_once(|_| Ok(false));
        repo.expect_insert()
            .return_once(|_| Err(anyhow!("null value in column \"due_date\"")));
        let mut notifications = MockNotificationService::new();
        notifications.expect_send_notification().never();

        let result = command_service(repo, notifications)
            .create(CreateReceiptCommand {
                details: fixtures::details(42),
            })
            .await;

        assert!(matches!(result, Err(ReceiptError::Storage(_))));
    }

    #[tokio::test]
    async fn test_create_validates_before_touching_store() {
        let mut repo = MockReceiptRepository::new();
        repo.expect_exists_by_resident_id().never();
        repo.expect_insert().never();

        let mut details = fixtures::details(42);
        details.receipt_type = String::new();
        let result = command_service(repo, MockNotificationService::new())
            .create(CreateReceiptCommand { details })
            .await;

        assert!(matches!(
            result,
            Err(ReceiptError::Validation(InvalidReceipt::BlankType))
        ));
    }

    #[tokio::test]
    async fn test_update_unknown_receipt() {
        let mut repo = MockReceiptRepository::new();
        repo.expect_find_by_id()
            .with(eq(99))
            .return_once(|_| Ok(None));
        repo.expect_update().never();

        let result = command_service(repo, MockNotificationService::new())
            .update(UpdateReceiptCommand {
                receipt_id: 99,
                details: fixtures::details(42),
            })
            .await;

        assert!(matches!(result, Err(ReceiptError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_update_replaces_every_field() -> Result<()> {
        let mut replacement = fixtures::details(42);
        replacement.status = true;
        replacement.payment_id = None;
        replacement.amount_paid = replacement.total_amount;
        replacement.payment_method = 3;
        replacement.receipt_type = "final".to_string();

        let expected = replacement.clone();
        let mut repo = MockReceiptRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .return_once(|_| Ok(Some(fixtures::receipt(1, fixtures::details(42)))));
        repo.expect_exists_by_resident_id().never();
        repo.expect_update()
            .withf(move |receipt| receipt.id == 1 && receipt.details == expected)
            .return_once(|receipt| Ok(receipt.clone()))
            .times(1);

        let updated = command_service(repo, MockNotificationService::new())
            .update(UpdateReceiptCommand {
                receipt_id: 1,
                details: replacement.clone(),
            })
            .await?;

        assert_eq!(updated.id, 1);
        assert_eq!(updated.details, replacement);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_to_resident_with_receipt_conflicts() {
        let mut repo = MockReceiptRepository::new();
        repo.expect_find_by_id()
            .return_once(|_| Ok(Some(fixtures::receipt(1, fixtures::details(42)))));
        repo.expect_exists_by_resident_id()
            .with(eq(ResidentId(7)))
            .return_once(|_| Ok(true));
        repo.expect_update().never();

        let result = command_service(repo, MockNotificationService::new())
            .update(UpdateReceiptCommand {
                receipt_id: 1,
                details: fixtures::details(7),
            })
            .await;

        assert!(matches!(result, Err(ReceiptError::Conflict(ResidentId(7)))));
    }

    #[tokio::test]
    async fn test_update_reports_unique_violation_as_conflict() {
        let mut repo = MockReceiptRepository::new();
        repo.expect_find_by_id()
            .return_once(|_| Ok(Some(fixtures::receipt(1, fixtures::details(42)))));
        repo.expect_exists_by_resident_id()
            .return_once(|_| Ok(false));
        repo.expect_update()
            .return_once(|_| Err(DuplicateResident(ResidentId(7)).into()));

        let result = command_service(repo, MockNotificationService::new())
            .update(UpdateReceiptCommand {
                receipt_id: 1,
                details: fixtures::details(7),
            })
            .await;

        assert!(matches!(result, Err(ReceiptError::Conflict(ResidentId(7)))));
    }

    #[tokio::test]
    async fn test_delete_unknown_receipt() {
        let mut repo = MockReceiptRepository::new();
        repo.expect_exists_by_id()
            .with(eq(3))
            .return_once(|_| Ok(false));
        repo.expect_delete_by_id().never();

        let result = command_service(repo, MockNotificationService::new())
            .delete(DeleteReceiptCommand { receipt_id: 3 })
            .await;

        assert!(matches!(result, Err(ReceiptError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_delete_existing_receipt() -> Result<()> {
        let mut repo = MockReceiptRepository::new();
        repo.expect_exists_by_id()
            .with(eq(3))
            .return_once(|_| Ok(true));
        repo.expect_delete_by_id()
            .with(eq(3))
            .return_once(|_| Ok(()))
            .times(1);

        command_service(repo, MockNotificationService::new())
            .delete(DeleteReceiptCommand { receipt_id: 3 })
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_query_by_resident() -> Result<()> {
        let mut repo = MockReceiptRepository::new();
        repo.expect_find_by_resident_id()
            .with(eq(ResidentId(42)))
            .return_once(|_| Ok(vec![fixtures::receipt(1, fixtures::details(42))]));
        repo.expect_find_by_id()
            .with(eq(2))
            .return_once(|_| Ok(None));

        let queries = ReceiptQueryService::new(Arc::new(repo));
        let receipts = queries.get_by_resident_id(ResidentId(42)).await?;
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].id, 1);
        assert_eq!(receipts[0].resident_id(), ResidentId(42));

        assert!(queries.get_by_id(2).await?.is_none());
        Ok(())
    }
}

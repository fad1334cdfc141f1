use crate::domain::models::ResidentId;
use crate::domain::service::NotificationService;
use anyhow::{bail, Context};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NotificationRequest {
    resident_id: ResidentId,
    message: String,
}

/// Delivers notifications through the platform's notification service.
#[derive(Clone)]
pub struct HttpNotificationService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpNotificationService {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<HttpNotificationService> {
        let client = reqwest::ClientBuilder::new()
            .timeout(timeout)
            .build()
            .context("fail to create request client")?;

        Ok(HttpNotificationService {
            client,
            endpoint: format!("{}/api/v1/notifications", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl NotificationService for HttpNotificationService {
    async fn send_notification(&self, resident_id: ResidentId, message: String) -> anyhow::Result<()> {
        let status = self
            .client
            .post(&self.endpoint)
            .json(&NotificationRequest {
                resident_id,
                message,
            })
            .send()
            .await?
            .status();

        if !status.is_success() {
            bail!("notification service responded with {}", status);
        }
        Ok(())
    }
}

/// Used when no notification service is configured.
#[derive(Clone, Default)]
pub struct LogNotificationService;

#[async_trait]
impl NotificationService for LogNotificationService {
    async fn send_notification(&self, resident_id: ResidentId, message: String) -> anyhow::Result<()> {
        log::info!(resident_id:% = resident_id, message:% = message; "Notification not delivered, no notification service configured");
        Ok(())
    }
}

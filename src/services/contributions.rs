use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;

use crate::models::Contribution;

/// Errors that can occur with the contribution store
#[derive(Debug, Error)]
pub enum ContributionError {
    #[error("failed to access contribution store: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode contributions: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed intake for community setup submissions, with best-effort
/// webhook and email notification.
///
/// The JSON file is the source of truth; notifications are fire-and-forget
/// and their failures are logged, never surfaced to the submitter.
pub struct ContributionStore {
    path: PathBuf,
    discord_webhook: Option<String>,
    resend_api_key: Option<String>,
    notify_email: Option<String>,
    client: Client,
}

impl ContributionStore {
    pub fn new(
        path: PathBuf,
        discord_webhook: Option<String>,
        resend_api_key: Option<String>,
        notify_email: Option<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            path,
            discord_webhook,
            resend_api_key,
            notify_email,
            client,
        }
    }

    /// Append one record to the store, then fire configured notifications.
    pub async fn record(&self, contribution: &Contribution) -> Result<(), ContributionError> {
        let mut all = self.read_all().await?;
        all.push(contribution.clone());

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, serde_json::to_vec_pretty(&all)?).await?;

        tracing::info!("Saved contribution {}", contribution.id);

        self.notify_discord(contribution).await;
        self.notify_email(contribution).await;

        Ok(())
    }

    /// All stored records; an absent file reads as an empty list.
    pub async fn list(&self) -> Vec<Contribution> {
        self.read_all().await.unwrap_or_else(|e| {
            tracing::error!("Failed to read contribution store: {}", e);
            Vec::new()
        })
    }

    async fn read_all(&self) -> Result<Vec<Contribution>, ContributionError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn notify_discord(&self, contribution: &Contribution) {
        let Some(webhook) = &self.discord_webhook else {
            return;
        };

        let payload = json!({
            "embeds": [{
                "title": "New setup contribution",
                "color": 0x0D9488,
                "fields": [
                    embed_field(
                        "Rider",
                        &format!(
                            "{} ({}kg)",
                            contribution.name.as_deref().unwrap_or("Anonymous"),
                            contribution.weight_kg
                        ),
                        true,
                    ),
                    embed_field("Disciplines", &contribution.disciplines.join(", "), true),
                    embed_field("Front wing", &contribution.front_wing, true),
                    embed_field(
                        "Rear wing",
                        contribution.rear_wing.as_deref().unwrap_or("Not specified"),
                        true,
                    ),
                    embed_field(
                        "Fuselage",
                        contribution.fuselage.as_deref().unwrap_or("Not specified"),
                        true,
                    ),
                    embed_field(
                        "Mast",
                        contribution.mast.as_deref().unwrap_or("Not specified"),
                        true,
                    ),
                    embed_field(
                        "Conditions",
                        contribution.conditions.as_deref().unwrap_or("Not specified"),
                        false,
                    ),
                    embed_field(
                        "Upgraded from",
                        contribution
                            .upgraded_from
                            .as_deref()
                            .unwrap_or("Not specified"),
                        false,
                    ),
                    embed_field(
                        "Verdict",
                        contribution.verdict.as_deref().unwrap_or("No review provided"),
                        false,
                    ),
                ],
                "footer": { "text": format!("Submitted {}", contribution.submitted_at) }
            }]
        });

        match self.client.post(webhook).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!("Sent contribution {} to Discord", contribution.id);
            }
            Ok(response) => {
                tracing::warn!("Discord webhook returned {}", response.status());
            }
            Err(e) => tracing::warn!("Discord webhook failed: {}", e),
        }
    }

    async fn notify_email(&self, contribution: &Contribution) {
        let (Some(api_key), Some(to)) = (&self.resend_api_key, &self.notify_email) else {
            return;
        };

        let subject = format!(
            "New contribution: {} from {}",
            contribution.front_wing,
            contribution.name.as_deref().unwrap_or("Anonymous")
        );
        let html = format!(
            "<h2>New setup submitted</h2>\
             <p><strong>Rider:</strong> {} ({}kg)</p>\
             <p><strong>Front wing:</strong> {}</p>\
             <p><strong>Rear wing:</strong> {}</p>\
             <p><strong>Disciplines:</strong> {}</p>\
             <p><strong>Conditions:</strong> {}</p>\
             <p><strong>Verdict:</strong> {}</p>\
             <hr><p><small>Submitted at {}</small></p>",
            contribution.name.as_deref().unwrap_or("Anonymous"),
            contribution.weight_kg,
            contribution.front_wing,
            contribution.rear_wing.as_deref().unwrap_or("N/A"),
            contribution.disciplines.join(", "),
            contribution.conditions.as_deref().unwrap_or("N/A"),
            contribution.verdict.as_deref().unwrap_or("N/A"),
            contribution.submitted_at,
        );

        let payload = json!({
            "from": "Foil Advisor <notifications@foil-advisor.local>",
            "to": to,
            "subject": subject,
            "html": html,
        });

        let result = self
            .client
            .post("https://api.resend.com/emails")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&payload)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::debug!("Sent email notification for {}", contribution.id);
            }
            Ok(response) => tracing::warn!("Email notification returned {}", response.status()),
            Err(e) => tracing::warn!("Email notification failed: {}", e),
        }
    }
}

fn embed_field(name: &str, value: &str, inline: bool) -> Value {
    json!({ "name": name, "value": value, "inline": inline })
}

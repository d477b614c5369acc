use crate::application::ProcessArticle;
use crate::config::Config;
use crate::infrastructure::webhook::WebhookClient;
use article_errors::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub process_article: Arc<ProcessArticle>,
    pub config: Arc<Config>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let webhook = WebhookClient::new(config.webhook_url.clone(), config.webhook_timeout)?;

        match &config.webhook_url {
            Some(url) => tracing::info!("Forwarding submissions to n8n webhook: {}", url),
            None => tracing::warn!("N8N_WEBHOOK_URL is not set; submissions will be rejected"),
        }

        Ok(Self {
            process_article: Arc::new(ProcessArticle::new(webhook)),
            config: Arc::new(config),
        })
    }
}

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::ClassifierConfig;
use crate::engine::Classifier;
use crate::types::{ClassifierRequest, ClassifierResponse};

/// Sends text to the remote profanity classifier over HTTP.
pub struct HttpClassifier {
    client: Client,
    api_key: String,
    api_url: Url,
}

impl HttpClassifier {
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key,
            api_url: config.api_url,
        })
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    #[tracing::instrument(skip(self, text), fields(url = %self.api_url))]
    async fn classify(&self, text: &str) -> Result<ClassifierResponse> {
        let request = ClassifierRequest {
            key: &self.api_key,
            text,
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .json(&request)
            .send()
            .await
            .context("Failed to call classifier")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Classifier returned {}", status);
        }

        let result: ClassifierResponse = response
            .json()
            .await
            .context("Failed to parse classifier response")?;

        tracing::debug!(
            tokens = result.tokens.len(),
            labels = result.labels.len(),
            "Classifier responded"
        );
        Ok(result)
    }
}

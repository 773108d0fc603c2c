use crate::types::ClassifierResponse;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Classifier {
    async fn classify(&self, text: &str) -> Result<ClassifierResponse>;
}

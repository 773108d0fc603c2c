use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct TextInput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterResult {
    pub is_profane: bool,
    pub profane_words: Vec<String>,
    pub censored_text: String,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Payload posted to the upstream classifier.
#[derive(Serialize)]
pub struct ClassifierRequest<'a> {
    pub key: &'a str,
    pub text: &'a str,
}

/// Per-token labels returned by the upstream classifier. A label of 1 marks the
/// token as profane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClassifierResponse {
    #[serde(rename = "toks", default)]
    pub tokens: Vec<String>,
    #[serde(default)]
    pub labels: Vec<i64>,
}

impl ClassifierResponse {
    /// Whether every token has exactly one label.
    pub fn is_aligned(&self) -> bool {
        self.tokens.len() == self.labels.len()
    }
}

use crate::types::{ClassifierResponse, FilterResult};

const PROFANE_LABEL: i64 = 1;

/// Rebuild the text from the classifier's tokens, masking every profane token
/// with one `*` per character.
///
/// If the classifier returns a different number of tokens and labels, the
/// extra entries on the longer side are dropped.
pub fn censor(response: &ClassifierResponse) -> FilterResult {
    let (tokens, labels) = (&response.tokens, &response.labels);
    if !response.is_aligned() {
        tracing::warn!(
            tokens = tokens.len(),
            labels = labels.len(),
            "Classifier returned mismatched tokens and labels, truncating"
        );
    }

    let mut profane_words = Vec::new();
    let mut censored = Vec::with_capacity(tokens.len().min(labels.len()));

    for (token, &label) in tokens.iter().zip(labels.iter()) {
        if label == PROFANE_LABEL {
            profane_words.push(token.clone());
            censored.push("*".repeat(token.chars().count()));
        } else {
            censored.push(token.clone());
        }
    }

    FilterResult {
        is_profane: !profane_words.is_empty(),
        profane_words,
        censored_text: censored.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(tokens: &[&str], labels: &[i64]) -> ClassifierResponse {
        ClassifierResponse {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            labels: labels.to_vec(),
        }
    }

    #[test]
    fn clean_text_passes_through() {
        let result = censor(&response(&["hello", "world"], &[0, 0]));
        assert_eq!(
            result,
            FilterResult {
                is_profane: false,
                profane_words: vec![],
                censored_text: "hello world".to_string(),
            }
        );
    }

    #[test]
    fn masks_profane_tokens() {
        let result = censor(&response(&["damn", "it"], &[1, 0]));
        assert_eq!(
            result,
            FilterResult {
                is_profane: true,
                profane_words: vec!["damn".to_string()],
                censored_text: "**** it".to_string(),
            }
        );
    }

    #[test]
    fn keeps_original_case_and_order() {
        let result = censor(&response(&["Damn", "this", "CRAP"], &[1, 0, 1]));
        assert_eq!(result.profane_words, vec!["Damn", "CRAP"]);
        assert_eq!(result.censored_text, "**** this ****");
    }

    #[test]
    fn mask_length_counts_characters() {
        let result = censor(&response(&["schei\u{df}e"], &[1]));
        assert_eq!(result.censored_text, "*******");
    }

    #[test]
    fn only_label_one_is_profane() {
        let result = censor(&response(&["a", "b", "c"], &[2, -1, 0]));
        assert!(!result.is_profane);
        assert_eq!(result.censored_text, "a b c");
    }

    #[test]
    fn alignment_check() {
        assert!(response(&["damn", "it"], &[1, 0]).is_aligned());
        assert!(ClassifierResponse::default().is_aligned());
        assert!(!response(&["damn"], &[1, 1, 1]).is_aligned());
        assert!(!response(&["oh", "damn", "it"], &[0, 1]).is_aligned());
    }

    #[test]
    fn extra_labels_are_ignored() {
        let result = censor(&response(&["damn"], &[1, 1, 1]));
        assert_eq!(result.profane_words, vec!["damn"]);
        assert_eq!(result.censored_text, "****");
    }

    #[test]
    fn extra_tokens_are_dropped() {
        let result = censor(&response(&["oh", "damn", "it"], &[0, 1]));
        assert_eq!(result.censored_text, "oh ****");
        assert_eq!(result.censored_text.split(' ').count(), 2);
    }

    #[test]
    fn empty_response() {
        let result = censor(&ClassifierResponse::default());
        assert!(!result.is_profane);
        assert!(result.profane_words.is_empty());
        assert_eq!(result.censored_text, "");
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let parsed: ClassifierResponse = serde_json::from_str(r#"{"labels": [1]}"#).unwrap();
        assert!(parsed.tokens.is_empty());
        assert_eq!(censor(&parsed).censored_text, "");

        let parsed: ClassifierResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, ClassifierResponse::default());
    }

    #[test]
    fn labels_must_be_integers() {
        let parsed =
            serde_json::from_str::<ClassifierResponse>(r#"{"toks": ["damn"], "labels": [1.0]}"#);
        assert!(parsed.is_err());
    }
}

// Pluggable text-completion seam
//
// The original product sketched an integration with a hosted
// completion API but never wired it into the step logic. The seam is
// kept as a trait so a binary can plug a real client in; this crate
// ships no network code and no credentials.

use crate::config::Config;
use crate::error::{LadleError, Result};

/// A source of text completions (e.g. a hosted LLM API).
pub trait CompletionProvider {
    /// Return a completion for the given prompt.
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Placeholder provider used when no API key is configured.
pub struct DisabledAssist;

impl CompletionProvider for DisabledAssist {
    fn complete(&self, _prompt: &str) -> Result<String> {
        Err(LadleError::Assist(
            "no completion provider configured".to_string(),
        ))
    }
}

/// Pick a provider based on configuration.
///
/// Without a key this is always [`DisabledAssist`]; callers supply
/// their own implementation when they have one.
pub fn provider_from_config(config: &Config) -> Box<dyn CompletionProvider> {
    // A configured key alone doesn't conjure a client; the hosting
    // binary is expected to swap in a real provider.
    let _ = &config.completion_api_key;
    Box::new(DisabledAssist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_assist_errors() {
        let provider = DisabledAssist;
        let result = provider.complete("suggest a garnish");
        match result {
            Err(LadleError::Assist(_)) => {}
            other => panic!("Expected Assist error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_provider_is_disabled() {
        let provider = provider_from_config(&Config::default());
        assert!(provider.complete("anything").is_err());
    }
}

//! Injected "is a model credential available?" capability.
//!
//! The model-backed classifier asks once per call and never looks at where
//! the credential lives.

use crate::ModelConfig;

pub trait CredentialCheck: Send + Sync {
    fn is_configured(&self) -> bool;
}

impl<F> CredentialCheck for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_configured(&self) -> bool {
        self()
    }
}

impl CredentialCheck for ModelConfig {
    fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_checks() {
        assert!((|| true).is_configured());
        assert!(!(|| false).is_configured());
    }

    #[test]
    fn config_needs_non_blank_key() {
        assert!(!ModelConfig::default().is_configured());
        assert!(!ModelConfig::default().with_api_key("").is_configured());
        assert!(ModelConfig::default().with_api_key("sk-test").is_configured());
    }
}

use tracing::debug;
use crate::domain::error::TriggerError;

pub const KNOWLEDGE_BASE_ID_VAR: &str = "KNOWLEDGE_BASE_ID";
pub const ENDPOINT_URL_VAR: &str = "AWS_ENDPOINT_URL";
pub const REGION: &str = "us-east-1";

/// Process-wide settings, read once at cold start.
///
/// The knowledge base id is kept raw and checked on every invocation, so a
/// misconfigured function still starts and reports the problem per event.
#[derive(Debug, Clone)]
pub struct TriggerConfig {
    knowledge_base_id: Option<String>,
    pub region: &'static str,
    pub endpoint_url: Option<String>,
}

impl TriggerConfig {
    pub fn new(knowledge_base_id: Option<String>, endpoint_url: Option<String>) -> Self {
        Self {
            knowledge_base_id,
            region: REGION,
            endpoint_url,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let knowledge_base_id = lookup(KNOWLEDGE_BASE_ID_VAR);
        let endpoint_url = lookup(ENDPOINT_URL_VAR).filter(|url| !url.is_empty());
        debug!(
            "Loaded configuration: {}={}, {}={}",
            KNOWLEDGE_BASE_ID_VAR,
            knowledge_base_id.as_deref().unwrap_or("not set"),
            ENDPOINT_URL_VAR,
            endpoint_url.as_deref().unwrap_or("not set")
        );

        Self::new(knowledge_base_id, endpoint_url)
    }

    pub fn knowledge_base_id(&self) -> Result<&str, TriggerError> {
        match self.knowledge_base_id.as_deref() {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(TriggerError::missing_knowledge_base_id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_knowledge_base_id() {
        let config = TriggerConfig::from_lookup(lookup_from(&[("KNOWLEDGE_BASE_ID", "kb-123")]));
        assert_eq!(config.knowledge_base_id().unwrap(), "kb-123");
        assert_eq!(config.region, "us-east-1");
        assert!(config.endpoint_url.is_none());
    }

    #[test]
    fn missing_knowledge_base_id_is_configuration_error() {
        let config = TriggerConfig::from_lookup(lookup_from(&[]));
        let err = config.knowledge_base_id().unwrap_err();
        assert!(matches!(err, TriggerError::Configuration(_)));
        assert_eq!(err.to_string(), "Missing KNOWLEDGE_BASE_ID environment variable");
    }

    #[test]
    fn empty_knowledge_base_id_is_configuration_error() {
        let config = TriggerConfig::from_lookup(lookup_from(&[("KNOWLEDGE_BASE_ID", "")]));
        assert!(matches!(
            config.knowledge_base_id(),
            Err(TriggerError::Configuration(_))
        ));
    }

    #[test]
    fn endpoint_override_ignores_empty_value() {
        let config = TriggerConfig::from_lookup(lookup_from(&[("AWS_ENDPOINT_URL", "")]));
        assert!(config.endpoint_url.is_none());

        let config = TriggerConfig::from_lookup(lookup_from(&[(
            "AWS_ENDPOINT_URL",
            "http://localhost:4566",
        )]));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }
}

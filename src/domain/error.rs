use thiserror::Error;

pub const MISSING_KNOWLEDGE_BASE_ID: &str = "Missing KNOWLEDGE_BASE_ID environment variable";

#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("{0}")]
    Configuration(String),

    /// Failure reported by the ingestion service, carried through untouched.
    /// `code` is the service's error code, e.g. `ThrottlingException`.
    #[error("{source}")]
    RemoteCall {
        code: Option<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to serialize response body: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TriggerError {
    pub fn missing_knowledge_base_id() -> Self {
        TriggerError::Configuration(MISSING_KNOWLEDGE_BASE_ID.to_string())
    }

    pub fn remote<E>(err: E, code: Option<String>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        TriggerError::RemoteCall {
            code,
            source: Box::new(err),
        }
    }

    /// Returns the original remote error if it is of type `E`.
    pub fn remote_source<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            TriggerError::RemoteCall { source, .. } => source.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Name reported to the platform as the failed invocation's error type.
    pub fn error_type(&self) -> &str {
        match self {
            TriggerError::Configuration(_) => "ConfigurationError",
            TriggerError::RemoteCall { code: Some(code), .. } => code.as_str(),
            TriggerError::RemoteCall { code: None, .. } => "RemoteCallError",
            TriggerError::Serialization(_) => "SerializationError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("connection reset")]
    struct ConnectionReset;

    #[test]
    fn remote_error_keeps_message_and_source() {
        let err = TriggerError::remote(ConnectionReset, None);

        assert_eq!(err.to_string(), "connection reset");
        assert!(err.remote_source::<ConnectionReset>().is_some());
        assert_eq!(err.error_type(), "RemoteCallError");
    }

    #[test]
    fn error_type_uses_service_code() {
        let err = TriggerError::remote(ConnectionReset, Some("ThrottlingException".to_string()));
        assert_eq!(err.error_type(), "ThrottlingException");
        assert_eq!(TriggerError::missing_knowledge_base_id().error_type(), "ConfigurationError");
    }
}

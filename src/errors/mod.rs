use strum_macros::EnumIter;
use thiserror::Error;

/// Reasons why no container probe can be derived from a collector configuration.
///
/// Every variant points at a structural problem in the top levels of the document. Problems inside
/// the resolved health check extension body are never reported, they fall back to defaults.
#[derive(Clone, Copy, Error, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum ProbeExtractionError {
    #[error("No service available as part of the configuration.")]
    NoService,
    #[error("Service property in the configuration doesn't contain valid services.")]
    ServiceNotAMap,
    #[error("Service property in the configuration doesn't contain extensions.")]
    NoServiceExtensions,
    #[error("Service extensions property in the configuration does not contain valid extensions.")]
    ServiceExtensionsNotSequence,
    #[error("No healthcheck extension available in service extension configuration.")]
    NoServiceExtensionHealthCheck,
    #[error("No extensions available as part of the configuration.")]
    NoExtensions,
    #[error("Extensions property in the configuration doesn't contain valid extensions.")]
    ExtensionsNotAMap,
    #[error("Extensions property in the configuration does not contain the expected health_check extension.")]
    NoExtensionHealthCheck,
}

impl ProbeExtractionError {
    /// Whether the error only means the configuration doesn't ask for a health check, as opposed to a
    /// configuration the author most likely got wrong.
    pub fn is_health_check_not_requested(&self) -> bool {
        matches!(
            self,
            ProbeExtractionError::NoServiceExtensions | ProbeExtractionError::NoServiceExtensionHealthCheck
        )
    }
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Cannot parse collector configuration: `{raw_error}`.")]
    CannotParse { raw_error: serde_yaml::Error },
    #[error("Collector configuration is empty.")]
    Empty,
}

impl From<serde_yaml::Error> for DocumentError {
    fn from(raw_error: serde_yaml::Error) -> Self {
        DocumentError::CannotParse { raw_error }
    }
}

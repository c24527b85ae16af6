use crate::adapters::config_to_probe::config_to_container_probe;
use crate::document::ConfigDocument;
use crate::models::probe::ProbeSettings;
use k8s_openapi::api::core::v1::Probe;
use tracing::{debug, error};

/// Liveness probe of the collector container, if its configuration enables a health check extension.
///
/// Extraction errors are not returned: a missing health check only means no probe is wired, while
/// any other error is logged as a misconfiguration.
pub fn liveness_probe(config: &ConfigDocument, settings: Option<&ProbeSettings>) -> Option<Probe> {
    match config_to_container_probe(config) {
        Ok(mut probe) => {
            if let Some(settings) = settings {
                settings.apply(&mut probe);
            }
            Some(probe)
        }
        Err(err) if err.is_health_check_not_requested() => {
            debug!(error = %err, "no health check extension enabled, skipping liveness probe");
            None
        }
        Err(err) => {
            error!(error = %err, "cannot create liveness probe");
            None
        }
    }
}

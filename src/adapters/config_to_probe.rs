use crate::adapters::health_check::{HealthCheckExtension, ProbeConfiguration};
use crate::document::ConfigDocument;
use crate::errors::ProbeExtractionError;
use k8s_openapi::api::core::v1::{HTTPGetAction, Probe};

/// Converts a collector configuration into a container probe targeting its health check extension.
///
/// The health check extension has to be both enabled in `service.extensions` and defined in the
/// top-level `extensions`. When several are enabled, the first one declared which is also defined
/// wins, its body is then never validated: missing or malformed settings fall back to the
/// extension defaults.
pub fn config_to_container_probe(config: &ConfigDocument) -> Result<Probe, ProbeExtractionError> {
    let service_extensions = service_extensions(config)?;
    let candidates = health_check_candidates(service_extensions)?;
    let (extension_name, extension_config) = resolve_health_check_extension(config, &candidates)?;

    Ok(probe_from_extension(extension_name, extension_config))
}

fn service_extensions(config: &ConfigDocument) -> Result<&[ConfigDocument], ProbeExtractionError> {
    let service = config
        .get("service")
        .ok_or(ProbeExtractionError::NoService)?
        .as_mapping()
        .ok_or(ProbeExtractionError::ServiceNotAMap)?;

    let extensions = service
        .get("extensions")
        .ok_or(ProbeExtractionError::NoServiceExtensions)?
        .as_sequence()
        .ok_or(ProbeExtractionError::ServiceExtensionsNotSequence)?;

    Ok(extensions.as_slice())
}

fn health_check_candidates(service_extensions: &[ConfigDocument]) -> Result<Vec<&str>, ProbeExtractionError> {
    let candidates: Vec<&str> = service_extensions
        .iter()
        .filter_map(|extension| extension.as_str())
        .filter(|name| HealthCheckExtension::is_health_check(name))
        .collect();

    match candidates.is_empty() {
        true => Err(ProbeExtractionError::NoServiceExtensionHealthCheck),
        false => Ok(candidates),
    }
}

fn resolve_health_check_extension<'a>(
    config: &'a ConfigDocument,
    candidates: &[&'a str],
) -> Result<(&'a str, &'a ConfigDocument), ProbeExtractionError> {
    let extensions = config
        .get("extensions")
        .ok_or(ProbeExtractionError::NoExtensions)?
        .as_mapping()
        .ok_or(ProbeExtractionError::ExtensionsNotAMap)?;

    // several health checks may be enabled, the first one declared and defined is taken
    candidates
        .iter()
        .find_map(|name| extensions.get(*name).map(|extension_config| (*name, extension_config)))
        .ok_or(ProbeExtractionError::NoExtensionHealthCheck)
}

fn probe_from_extension(extension_name: &str, extension_config: &ConfigDocument) -> Probe {
    let ProbeConfiguration { path, port } =
        HealthCheckExtension::from_name(extension_name).probe_configuration(extension_config);

    Probe {
        http_get: Some(HTTPGetAction {
            path: Some(path),
            port,
            ..Default::default()
        }),
        ..Default::default()
    }
}

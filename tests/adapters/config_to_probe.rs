use crate::helpers::{http_probe, load_config};
use collector_probe::io_models::probe::ProbeSettings;
use collector_probe::{ProbeExtractionError, config_to_container_probe, liveness_probe};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

#[test]
fn test_probe_from_collector_configs() {
    let test_cases = btreemap! {
        "legacy_health_check.yaml" => http_probe("/live", IntOrString::Int(8080)),
        "healthcheckv2.yaml" => http_probe("/healthz", IntOrString::Int(9090)),
        "multiple_health_checks.yaml" => http_probe("/b", IntOrString::Int(8081)),
        "named_port.yaml" => http_probe("/", IntOrString::String("health".to_string())),
        "empty_health_check.yaml" => http_probe("/", IntOrString::Int(13133)),
    };

    for (file_name, expected) in test_cases {
        let config = load_config(file_name);

        assert_eq!(config_to_container_probe(&config), Ok(expected), "config: {file_name}");
    }
}

#[test]
fn test_no_probe_from_collector_configs() {
    let test_cases = btreemap! {
        "no_health_check.yaml" => ProbeExtractionError::NoServiceExtensionHealthCheck,
        "no_service_extensions.yaml" => ProbeExtractionError::NoServiceExtensions,
    };

    for (file_name, expected) in test_cases {
        let config = load_config(file_name);

        assert_eq!(config_to_container_probe(&config), Err(expected), "config: {file_name}");
        assert_eq!(liveness_probe(&config, None), None, "config: {file_name}");
    }
}

#[test]
fn test_extraction_is_idempotent() {
    let config = load_config("multiple_health_checks.yaml");
    let before = config.clone();

    let first = config_to_container_probe(&config);
    let second = config_to_container_probe(&config);

    assert_eq!(first, second);
    assert_eq!(config, before);
}

#[test]
fn test_probe_serialization() {
    let config = load_config("legacy_health_check.yaml");
    let probe = config_to_container_probe(&config).expect("a probe should be created");

    assert_eq!(
        serde_json::to_value(&probe).expect("cannot serialize probe"),
        serde_json::json!({"httpGet": {"path": "/live", "port": 8080}})
    );

    let config = load_config("named_port.yaml");
    let probe = config_to_container_probe(&config).expect("a probe should be created");

    assert_eq!(
        serde_json::to_value(&probe).expect("cannot serialize probe"),
        serde_json::json!({"httpGet": {"path": "/", "port": "health"}})
    );
}

#[test]
fn test_liveness_probe_with_user_settings() {
    let settings: ProbeSettings = serde_json::from_str(
        r#"{"initialDelaySeconds": 15, "periodSeconds": 20, "timeoutSeconds": 2, "successThreshold": 1, "failureThreshold": 6}"#,
    )
    .expect("cannot deserialize probe settings");
    let config = load_config("healthcheckv2.yaml");

    let probe = liveness_probe(&config, Some(&settings.to_domain())).expect("a probe should be created");

    assert_eq!(
        serde_json::to_value(&probe).expect("cannot serialize probe"),
        serde_json::json!({
            "httpGet": {"path": "/healthz", "port": 9090},
            "initialDelaySeconds": 15,
            "periodSeconds": 20,
            "timeoutSeconds": 2,
            "successThreshold": 1,
            "failureThreshold": 6
        })
    );
}

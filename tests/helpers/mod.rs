use collector_probe::document::{ConfigDocument, from_yaml_str};
use k8s_openapi::api::core::v1::{HTTPGetAction, Probe};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

pub fn load_config(file_name: &str) -> ConfigDocument {
    let path = format!("{}/tests/testdata/{}", env!("CARGO_MANIFEST_DIR"), file_name);
    let raw_config = std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("cannot read test config `{path}`"));

    from_yaml_str(&raw_config).unwrap_or_else(|e| panic!("cannot parse test config `{path}`: {e}"))
}

pub fn http_probe(path: &str, port: IntOrString) -> Probe {
    Probe {
        http_get: Some(HTTPGetAction {
            path: Some(path.to_string()),
            port,
            ..Default::default()
        }),
        ..Default::default()
    }
}

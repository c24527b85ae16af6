use crate::document::{lookup_str, ConfigDocument};
use crate::port::parse_port;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use strum_macros::Display;

pub const HEALTH_CHECK_PREFIX: &str = "health_check";
pub const HEALTH_CHECK_V2_PREFIX: &str = "healthcheckv2";

pub const DEFAULT_HEALTH_CHECK_PATH: &str = "/";
pub const DEFAULT_HEALTH_CHECK_V2_PATH: &str = "/health/status";
pub const DEFAULT_HEALTH_CHECK_PORT: i32 = 13133;

/// Schema of a health check extension body, decided by the extension name prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum HealthCheckExtension {
    /// `health_check`: `path` and `endpoint` at the root of the body.
    #[strum(serialize = "health_check")]
    Legacy,
    /// `healthcheckv2`: `http.endpoint` and `http.status.path`.
    #[strum(serialize = "healthcheckv2")]
    V2,
}

impl HealthCheckExtension {
    /// Extension names are `type[/name]`, so both `health_check` and `health_check/custom` are matched.
    pub fn is_health_check(extension_name: &str) -> bool {
        extension_name.starts_with(HEALTH_CHECK_PREFIX) || extension_name.starts_with(HEALTH_CHECK_V2_PREFIX)
    }

    pub fn from_name(extension_name: &str) -> HealthCheckExtension {
        match extension_name.starts_with(HEALTH_CHECK_V2_PREFIX) {
            true => HealthCheckExtension::V2,
            false => HealthCheckExtension::Legacy,
        }
    }

    fn path_keys(&self) -> &'static [&'static str] {
        match self {
            HealthCheckExtension::Legacy => &["path"],
            HealthCheckExtension::V2 => &["http", "status", "path"],
        }
    }

    fn endpoint_keys(&self) -> &'static [&'static str] {
        match self {
            HealthCheckExtension::Legacy => &["endpoint"],
            HealthCheckExtension::V2 => &["http", "endpoint"],
        }
    }

    pub fn default_path(&self) -> &'static str {
        match self {
            HealthCheckExtension::Legacy => DEFAULT_HEALTH_CHECK_PATH,
            HealthCheckExtension::V2 => DEFAULT_HEALTH_CHECK_V2_PATH,
        }
    }

    pub fn default_probe_configuration(&self) -> ProbeConfiguration {
        ProbeConfiguration {
            path: self.default_path().to_string(),
            port: IntOrString::Int(DEFAULT_HEALTH_CHECK_PORT),
        }
    }

    /// Never fails: anything missing or of the wrong type in the extension body falls back to the
    /// defaults of the extension itself.
    pub fn probe_configuration(&self, extension_config: &ConfigDocument) -> ProbeConfiguration {
        if !extension_config.is_mapping() {
            return self.default_probe_configuration();
        }

        ProbeConfiguration {
            path: self.path(extension_config),
            port: self.port(extension_config),
        }
    }

    fn path(&self, extension_config: &ConfigDocument) -> String {
        lookup_str(extension_config, self.path_keys())
            .unwrap_or(self.default_path())
            .to_string()
    }

    fn port(&self, extension_config: &ConfigDocument) -> IntOrString {
        let endpoint = match lookup_str(extension_config, self.endpoint_keys()) {
            Some(endpoint) => endpoint,
            None => return IntOrString::Int(DEFAULT_HEALTH_CHECK_PORT),
        };

        // host:port, anything else (ipv6 included) is not understood
        match endpoint.split(':').collect::<Vec<&str>>()[..] {
            [_host, port] => parse_port(port),
            _ => IntOrString::Int(DEFAULT_HEALTH_CHECK_PORT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeConfiguration {
    pub path: String,
    pub port: IntOrString,
}

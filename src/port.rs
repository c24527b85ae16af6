use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

/// Parse a port token the way kubernetes int-or-string ports are parsed:
/// 8080 = Int(8080)
/// +8080 = Int(8080)
/// http = String("http")
/// Numbers that don't fit an i32 are kept as a named port.
pub fn parse_port(port: &str) -> IntOrString {
    match port.parse::<i32>() {
        Ok(v) => IntOrString::Int(v),
        Err(_) => IntOrString::String(port.to_string()),
    }
}

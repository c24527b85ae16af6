use k8s_openapi::api::core::v1::Probe;

/// Timing and threshold overrides for a generated probe, unset fields keep the probe value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProbeSettings {
    pub initial_delay_seconds: Option<i32>,
    pub timeout_seconds: Option<i32>,
    pub period_seconds: Option<i32>,
    pub success_threshold: Option<i32>,
    pub failure_threshold: Option<i32>,
    pub termination_grace_period_seconds: Option<i64>,
}

impl ProbeSettings {
    /// The probe handler is left untouched.
    pub fn apply(&self, probe: &mut Probe) {
        if let Some(v) = self.initial_delay_seconds {
            probe.initial_delay_seconds = Some(v);
        }
        if let Some(v) = self.timeout_seconds {
            probe.timeout_seconds = Some(v);
        }
        if let Some(v) = self.period_seconds {
            probe.period_seconds = Some(v);
        }
        if let Some(v) = self.success_threshold {
            probe.success_threshold = Some(v);
        }
        if let Some(v) = self.failure_threshold {
            probe.failure_threshold = Some(v);
        }
        if let Some(v) = self.termination_grace_period_seconds {
            probe.termination_grace_period_seconds = Some(v);
        }
    }
}

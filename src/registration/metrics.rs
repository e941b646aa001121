use crate::identification::IdentificationKind;
use crate::observability::labels::{Labels, NO_LABEL};
use crate::registration::RegistrationError;
use metrics::counter;

const IDENTIFICATION: &str = "identification";
const REASON: &str = "reason";

pub struct Metrics {
    labels: Labels,
}

impl Metrics {
    pub fn new(labels: Labels) -> Self {
        Metrics { labels }
    }

    pub fn record_accepted(&self, kind: IdentificationKind) {
        counter!(
            "registration.accepted",
            self.labels.with(IDENTIFICATION, kind.as_ref().to_string())
        )
        .increment(1);
    }

    pub fn record_rejected(&self, error: &RegistrationError) {
        counter!(
            "registration.rejected",
            self.labels.with(REASON, error.reason())
        )
        .increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::new(NO_LABEL)
    }
}

use crate::identification::IdentificationKind;
use lazy_static::lazy_static;
use metrics::{counter, Counter};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    // Identification checks that got past the required check, by the kind they were classified as
    pub national_id_checks: Counter,
    pub foreign_document_checks: Counter,
    pub rejected_identifications: Counter,

    pub registrations_accepted: Counter,
    pub registrations_rejected: Counter,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            national_id_checks: counter!(
                "identification.checks",
                "kind" => IdentificationKind::NationalId.as_ref().to_string()
            ),
            foreign_document_checks: counter!(
                "identification.checks",
                "kind" => IdentificationKind::ForeignDocument.as_ref().to_string()
            ),
            rejected_identifications: counter!("identification.rejected"),
            registrations_accepted: counter!("registration.validations", "outcome" => "accepted"),
            registrations_rejected: counter!("registration.validations", "outcome" => "rejected"),
        }
    }

    pub fn record_identification_check(&self, kind: IdentificationKind) {
        match kind {
            IdentificationKind::NationalId => self.national_id_checks.increment(1),
            IdentificationKind::ForeignDocument => self.foreign_document_checks.increment(1),
        }
    }

    pub fn record_registration(&self, accepted: bool) {
        if accepted {
            self.registrations_accepted.increment(1);
        } else {
            self.registrations_rejected.increment(1);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::{CompositeKey, MetricKind::Counter};

    #[test]
    fn registration_outcomes_are_counted_separately() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let stats = Stats::new();
            stats.record_registration(true);
            stats.record_registration(false);
            stats.record_registration(false);
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        for (outcome, expected) in [("accepted", 1), ("rejected", 2)] {
            let key = Key::from_parts(
                "registration.validations",
                vec![Label::new("outcome", outcome)],
            );
            let metric_value = snapshot
                .get(&CompositeKey::new(Counter, key))
                .expect("metric not found");
            assert_eq!(metric_value, &(None, None, DebugValue::Counter(expected)));
        }
    }
}

use crate::catalog::Event;
use crate::profile::UserProfile;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// The profile columns shown next to an event.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ResponsableSummary {
    pub id: String,
    pub cedula: String,
    pub nombre1: String,
    pub apellido1: String,
}

impl ResponsableSummary {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.nombre1, self.apellido1)
    }
}

impl From<&UserProfile> for ResponsableSummary {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.clone(),
            cedula: profile.cedula.clone(),
            nombre1: profile.nombre1.clone(),
            apellido1: profile.apellido1.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventWithResponsable {
    #[serde(flatten)]
    pub event: Event,
    pub responsable: Option<ResponsableSummary>,
}

/// The distinct responsible ids referenced by `events`, in first-seen order.
///
/// This is the id list for the profiles query; the backend has no relation to join through.
pub fn responsable_ids(events: &[Event]) -> Vec<&str> {
    let mut seen = AHashSet::new();
    events
        .iter()
        .filter_map(|event| event.responsable_id.as_deref())
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Pairs each event with the profile of its responsible person.
///
/// Events without a responsible, or whose responsible is not in `profiles`, get `None`.
pub fn attach_responsables(
    events: Vec<Event>,
    profiles: &[ResponsableSummary],
) -> Vec<EventWithResponsable> {
    let by_id: AHashMap<&str, &ResponsableSummary> = profiles
        .iter()
        .map(|profile| (profile.id.as_str(), profile))
        .collect();

    events
        .into_iter()
        .map(|event| {
            let responsable = event
                .responsable_id
                .as_deref()
                .and_then(|id| by_id.get(id))
                .map(|profile| (*profile).clone());
            EventWithResponsable { event, responsable }
        })
        .collect()
}

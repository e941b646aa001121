use crate::catalog::{Audience, Event, EventState, EventType};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFilter {
    #[default]
    All,
    PaidOnly,
}

/// Filters picked in the public catalog. `None` means "any".
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogFilter {
    pub tipo: Option<EventType>,
    pub career_id: Option<i64>,
    pub payment: PaymentFilter,
}

impl CatalogFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_type(event) && self.matches_career(event) && self.matches_payment(event)
    }

    fn matches_type(&self, event: &Event) -> bool {
        self.tipo.is_none() || self.tipo == event.tipo
    }

    // The career filter only restricts events aimed at the students of specific careers.
    fn matches_career(&self, event: &Event) -> bool {
        match self.career_id {
            None => true,
            Some(career_id) => {
                event.audiencia != Audience::EstudiantesCarrera
                    || event.carreras.iter().any(|career| career.id == career_id)
            }
        }
    }

    fn matches_payment(&self, event: &Event) -> bool {
        match self.payment {
            PaymentFilter::All => true,
            PaymentFilter::PaidOnly => event.es_pagado,
        }
    }
}

pub fn filter_events<'a>(events: &'a [Event], filter: &CatalogFilter) -> Vec<&'a Event> {
    events.iter().filter(|event| filter.matches(event)).collect()
}

/// Only published events are shown in the catalog.
pub fn published(events: &[Event]) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| event.estado == EventState::Publicado)
        .collect()
}

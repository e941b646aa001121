use crate::str_utils::non_blank;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use strum::{AsRefStr, EnumIter, EnumString};
use thiserror::Error;

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventType {
    Curso,
    Conferencia,
    Congreso,
    Webinar,
    Socializacion,
    Otro,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventState {
    Borrador,
    Publicado,
    Finalizado,
    Cancelado,
    /// States added on the backend that this crate does not know about yet.
    #[serde(untagged)]
    Other(String),
}

impl EventState {
    pub fn as_str(&self) -> &str {
        match self {
            EventState::Borrador => "borrador",
            EventState::Publicado => "publicado",
            EventState::Finalizado => "finalizado",
            EventState::Cancelado => "cancelado",
            EventState::Other(state) => state,
        }
    }
}

impl Display for EventState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Publico,
    Estudiantes,
    /// Only students of the careers linked to the event.
    EstudiantesCarrera,
    #[serde(untagged)]
    Other(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Career {
    pub id: i64,
    pub nombre: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub estado: EventState,
    #[serde(default)]
    pub tipo: Option<EventType>,
    pub audiencia: Audience,
    #[serde(default)]
    pub carreras: Vec<Career>,
    #[serde(default)]
    pub es_pagado: bool,
    #[serde(default)]
    pub costo: Option<f64>,
    #[serde(default)]
    pub responsable_id: Option<String>,
}

impl Event {
    pub fn price_label(&self) -> String {
        match (self.es_pagado, self.costo) {
            (false, _) => "Gratis".to_string(),
            (true, Some(costo)) => format!("${costo}"),
            (true, None) => "$".to_string(),
        }
    }

    pub fn type_label(&self) -> String {
        match self.tipo {
            Some(tipo) => capitalize(tipo.as_ref()),
            None => "Evento".to_string(),
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum NewEventError {
    #[error("You must be signed in to create an event")]
    NotSignedIn,

    #[error("The event name is required")]
    NameRequired,
}

/// Values of the event creation form.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NewEvent {
    pub nombre: String,
    pub responsable_id: String,
}

/// The row to insert for a new event.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidatedNewEvent {
    pub nombre: String,
    pub responsable_id: Option<String>,
}

impl NewEvent {
    pub fn validate(&self, signed_in: bool) -> Result<ValidatedNewEvent, NewEventError> {
        if !signed_in {
            return Err(NewEventError::NotSignedIn);
        }
        let nombre = self.nombre.trim();
        if nombre.is_empty() {
            return Err(NewEventError::NameRequired);
        }
        Ok(ValidatedNewEvent {
            nombre: nombre.to_string(),
            responsable_id: non_blank(&self.responsable_id),
        })
    }
}

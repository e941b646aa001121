mod new_user;
mod update;

pub use new_user::{NewUser, NewUserError, ValidatedNewUser};
pub use update::{ProfileChanges, ProfileUpdate, ProfileUpdateError};

use crate::Role;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimum number of characters before a responsible-person search runs.
pub const MIN_SEARCH_LENGTH: usize = 3;

/// A row of the user profiles table.
///
/// `rol` only accepts the known [`Role`] names, a row with any other role fails to deserialize.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub nombre1: String,
    pub nombre2: Option<String>,
    pub apellido1: String,
    pub apellido2: Option<String>,
    pub cedula: String,
    pub telefono: String,
    pub email: String,
    pub fecha_nacimiento: NaiveDate,
    #[serde(alias = "rol_usuario")]
    pub rol: Role,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl UserProfile {
    fn name_parts(&self) -> [Option<&str>; 4] {
        [
            Some(self.nombre1.as_str()),
            self.nombre2.as_deref(),
            Some(self.apellido1.as_str()),
            self.apellido2.as_deref(),
        ]
    }

    /// All non-empty name parts, separated by single spaces.
    pub fn full_name(&self) -> String {
        self.name_parts()
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Case-insensitive substring match on any of the name parts.
    pub fn name_contains(&self, needle_lowercase: &str) -> bool {
        self.name_parts()
            .into_iter()
            .flatten()
            .any(|part| part.to_lowercase().contains(needle_lowercase))
    }

    /// Accounts are never deleted by their owner, only marked inactive.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Activo"
        } else {
            "Inactivo"
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ResponsableCandidate {
    pub id: String,
    pub cedula: String,
    pub full_name: String,
}

impl From<&UserProfile> for ResponsableCandidate {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.clone(),
            cedula: profile.cedula.clone(),
            full_name: profile.full_name(),
        }
    }
}

/// Finds profiles that can be picked as the person responsible for an event.
///
/// Queries shorter than [`MIN_SEARCH_LENGTH`] (after trimming) return nothing.
pub fn search_responsables(profiles: &[UserProfile], query: &str) -> Vec<ResponsableCandidate> {
    let query = query.trim();
    if query.chars().count() < MIN_SEARCH_LENGTH {
        return vec![];
    }
    let needle = query.to_lowercase();
    profiles
        .iter()
        .filter(|profile| profile.name_contains(&needle))
        .map(ResponsableCandidate::from)
        .collect()
}

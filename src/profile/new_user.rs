use crate::profile::UserProfile;
use crate::str_utils::{non_blank, parse_date};
use crate::Role;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Values of the user creation form used by administrators.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct NewUser {
    pub nombre1: String,
    pub nombre2: String,
    pub apellido1: String,
    pub apellido2: String,
    pub cedula: String,
    pub telefono: String,
    pub email: String,
    pub fecha_nacimiento: String,
    pub password: String,
    #[serde(alias = "rol_usuario")]
    pub rol: Role,
    pub is_active: bool,
}

impl Default for NewUser {
    fn default() -> Self {
        Self {
            nombre1: String::new(),
            nombre2: String::new(),
            apellido1: String::new(),
            apellido2: String::new(),
            cedula: String::new(),
            telefono: String::new(),
            email: String::new(),
            fecha_nacimiento: String::new(),
            password: String::new(),
            rol: Role::General,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewUserError {
    #[error("The field {0} is required")]
    Required(&'static str),

    #[error("The birth date is not valid")]
    InvalidBirthDate,
}

/// The account credentials and profile values of a user created by an administrator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedNewUser {
    pub email: String,
    pub password: String,
    pub nombre1: String,
    pub nombre2: Option<String>,
    pub apellido1: String,
    pub apellido2: Option<String>,
    pub cedula: String,
    pub telefono: String,
    pub fecha_nacimiento: NaiveDate,
    pub rol: Role,
    pub is_active: bool,
}

fn required(value: &str, field: &'static str) -> Result<String, NewUserError> {
    non_blank(value).ok_or(NewUserError::Required(field))
}

impl NewUser {
    /// Checks the required fields in form order.
    pub fn validate(&self) -> Result<ValidatedNewUser, NewUserError> {
        let nombre1 = required(&self.nombre1, "nombre1")?;
        let apellido1 = required(&self.apellido1, "apellido1")?;
        let cedula = required(&self.cedula, "cedula")?;
        let telefono = required(&self.telefono, "telefono")?;
        let email = required(&self.email, "email")?.to_lowercase();
        required(&self.fecha_nacimiento, "fecha_nacimiento")?;
        let fecha_nacimiento =
            parse_date(&self.fecha_nacimiento).ok_or(NewUserError::InvalidBirthDate)?;
        if self.password.is_empty() {
            return Err(NewUserError::Required("password"));
        }

        Ok(ValidatedNewUser {
            email,
            password: self.password.clone(),
            nombre1,
            nombre2: non_blank(&self.nombre2),
            apellido1,
            apellido2: non_blank(&self.apellido2),
            cedula,
            telefono,
            fecha_nacimiento,
            rol: self.rol,
            is_active: self.is_active,
        })
    }
}

impl ValidatedNewUser {
    /// The profile row, keyed by the id of the account created for it.
    pub fn into_profile(self, id: impl Into<String>) -> UserProfile {
        UserProfile {
            id: id.into(),
            nombre1: self.nombre1,
            nombre2: self.nombre2,
            apellido1: self.apellido1,
            apellido2: self.apellido2,
            cedula: self.cedula,
            telefono: self.telefono,
            email: self.email,
            fecha_nacimiento: self.fecha_nacimiento,
            rol: self.rol,
            is_active: self.is_active,
        }
    }
}

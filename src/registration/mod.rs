mod metrics;
mod policy;

pub use policy::{RegistrationPolicy, RegistrationPolicyBuilder, RegistrationPolicyError};

use crate::identification::{
    validate_identification_with_min_length, IdentificationError, IdentificationKind,
};
use crate::observability::labels::Labels;
use crate::registration::metrics::Metrics;
use crate::stats::GLOBAL_STATS;
use crate::str_utils::{non_blank, parse_date};
use chrono::{Months, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

lazy_static! {
    static ref NAME_PATTERN: Regex =
        Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").expect("name pattern is valid");
}

/// Raw values of the sign-up form, as typed by the user.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub nombre1: String,
    pub nombre2: String,
    pub apellido1: String,
    pub apellido2: String,
    pub cedula: String,
    pub telefono: String,
    pub fecha_nacimiento: String,
}

/// The normalized profile row produced by a successful validation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidatedRegistration {
    pub email: String,
    pub nombre1: String,
    pub nombre2: Option<String>,
    pub apellido1: String,
    pub apellido2: Option<String>,
    pub cedula: String,
    pub identification_kind: IdentificationKind,
    pub telefono: String,
    pub fecha_nacimiento: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RegistrationError {
    #[error("The first name is required and may only contain letters")]
    InvalidFirstName,

    #[error("The first last name is required and may only contain letters")]
    InvalidLastName,

    #[error(transparent)]
    Identification(#[from] IdentificationError),

    #[error("The phone number must have {length} digits")]
    InvalidPhone { length: usize },

    #[error("The password must have at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("The passwords do not match")]
    PasswordMismatch,

    #[error("The birth date is not valid or is in the future")]
    InvalidBirthDate,

    #[error("You must be at least {min_age} years old to register")]
    TooYoung { min_age: u32 },

    #[error("The maximum allowed age is {max_age} years")]
    TooOld { max_age: u32 },
}

impl RegistrationError {
    /// A stable, low-cardinality name for the failed rule.
    pub fn reason(&self) -> &'static str {
        self.into()
    }
}

/// Phone inputs only take digits. An empty value is accepted so the field can be cleared.
pub fn accepts_phone_keystroke(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_registration(
    form: &RegistrationForm,
    policy: &RegistrationPolicy,
    today: NaiveDate,
) -> Result<ValidatedRegistration, RegistrationError> {
    RegistrationValidator::new(policy.clone()).validate(form, today)
}

pub struct RegistrationValidator {
    policy: RegistrationPolicy,
    metrics: Metrics,
}

impl RegistrationValidator {
    pub fn new(policy: RegistrationPolicy) -> Self {
        Self {
            policy,
            metrics: Metrics::default(),
        }
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.metrics = Metrics::new(labels);
        self
    }

    pub fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }

    /// Checks the form rule by rule and reports the first one that fails.
    pub fn validate(
        &self,
        form: &RegistrationForm,
        today: NaiveDate,
    ) -> Result<ValidatedRegistration, RegistrationError> {
        let result = self.check(form, today);
        GLOBAL_STATS.record_registration(result.is_ok());
        match &result {
            Ok(registration) => self
                .metrics
                .record_accepted(registration.identification_kind),
            Err(error) => self.metrics.record_rejected(error),
        }
        result
    }

    fn check(
        &self,
        form: &RegistrationForm,
        today: NaiveDate,
    ) -> Result<ValidatedRegistration, RegistrationError> {
        let nombre1 = form.nombre1.trim();
        if !is_valid_name(nombre1) {
            return Err(RegistrationError::InvalidFirstName);
        }
        let apellido1 = form.apellido1.trim();
        if !is_valid_name(apellido1) {
            return Err(RegistrationError::InvalidLastName);
        }

        let cedula = form.cedula.trim();
        let identification_kind = validate_identification_with_min_length(
            cedula,
            self.policy.foreign_document_min_length,
        )?;

        let telefono = form.telefono.trim();
        if telefono.len() != self.policy.phone_length || !accepts_phone_keystroke(telefono) {
            return Err(RegistrationError::InvalidPhone {
                length: self.policy.phone_length,
            });
        }

        if form.password.chars().count() < self.policy.min_password_length {
            return Err(RegistrationError::PasswordTooShort {
                min: self.policy.min_password_length,
            });
        }
        if form.password != form.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }

        let fecha_nacimiento = self.check_birth_date(&form.fecha_nacimiento, today)?;

        Ok(ValidatedRegistration {
            email: form.email.trim().to_lowercase(),
            nombre1: nombre1.to_string(),
            nombre2: non_blank(&form.nombre2),
            apellido1: apellido1.to_string(),
            apellido2: non_blank(&form.apellido2),
            cedula: cedula.to_string(),
            identification_kind,
            telefono: telefono.to_string(),
            fecha_nacimiento,
        })
    }

    fn check_birth_date(
        &self,
        raw: &str,
        today: NaiveDate,
    ) -> Result<NaiveDate, RegistrationError> {
        let birth_date = parse_date(raw).ok_or(RegistrationError::InvalidBirthDate)?;
        if birth_date > today {
            return Err(RegistrationError::InvalidBirthDate);
        }

        // Born after this date means younger than the minimum age.
        let latest_allowed = years_before(today, self.policy.min_age_years);
        if birth_date > latest_allowed {
            return Err(RegistrationError::TooYoung {
                min_age: self.policy.min_age_years,
            });
        }
        let earliest_allowed = years_before(today, self.policy.max_age_years);
        if birth_date < earliest_allowed {
            return Err(RegistrationError::TooOld {
                max_age: self.policy.max_age_years,
            });
        }
        Ok(birth_date)
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && NAME_PATTERN.is_match(name)
}

/// Same day and month, `years` earlier. February 29 falls back to February 28.
fn years_before(today: NaiveDate, years: u32) -> NaiveDate {
    years
        .checked_mul(12)
        .and_then(|months| today.checked_sub_months(Months::new(months)))
        .unwrap_or(NaiveDate::MIN)
}

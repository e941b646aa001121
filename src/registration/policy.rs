use crate::identification::FOREIGN_DOCUMENT_MIN_LENGTH;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MIN_AGE_YEARS: u32 = 10;
pub const DEFAULT_MAX_AGE_YEARS: u32 = 75;
pub const DEFAULT_PHONE_LENGTH: usize = 10;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum RegistrationPolicyError {
    #[error("The minimum age ({min}) must not be greater than the maximum age ({max})")]
    AgeRangeInverted { min: u32, max: u32 },

    #[error("The phone length must be non-zero")]
    PhoneLengthZero,
}

/// Limits applied when a new user registers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RegistrationPolicy {
    pub min_age_years: u32,
    pub max_age_years: u32,
    pub phone_length: usize,
    pub min_password_length: usize,
    pub foreign_document_min_length: usize,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            min_age_years: DEFAULT_MIN_AGE_YEARS,
            max_age_years: DEFAULT_MAX_AGE_YEARS,
            phone_length: DEFAULT_PHONE_LENGTH,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            foreign_document_min_length: FOREIGN_DOCUMENT_MIN_LENGTH,
        }
    }
}

impl RegistrationPolicy {
    pub fn builder() -> RegistrationPolicyBuilder {
        RegistrationPolicyBuilder {
            policy: RegistrationPolicy::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), RegistrationPolicyError> {
        if self.min_age_years > self.max_age_years {
            return Err(RegistrationPolicyError::AgeRangeInverted {
                min: self.min_age_years,
                max: self.max_age_years,
            });
        }
        if self.phone_length == 0 {
            return Err(RegistrationPolicyError::PhoneLengthZero);
        }
        Ok(())
    }
}

pub struct RegistrationPolicyBuilder {
    policy: RegistrationPolicy,
}

impl RegistrationPolicyBuilder {
    pub fn age_range(mut self, min_age_years: u32, max_age_years: u32) -> Self {
        self.policy.min_age_years = min_age_years;
        self.policy.max_age_years = max_age_years;
        self
    }

    pub fn phone_length(mut self, phone_length: usize) -> Self {
        self.policy.phone_length = phone_length;
        self
    }

    pub fn min_password_length(mut self, min_password_length: usize) -> Self {
        self.policy.min_password_length = min_password_length;
        self
    }

    pub fn foreign_document_min_length(mut self, min_length: usize) -> Self {
        self.policy.foreign_document_min_length = min_length;
        self
    }

    pub fn build(self) -> Result<RegistrationPolicy, RegistrationPolicyError> {
        self.policy.validate()?;
        Ok(self.policy)
    }
}

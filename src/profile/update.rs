use crate::profile::UserProfile;
use crate::str_utils::{non_blank, parse_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Values of the profile edit form. Identity fields (cedula, email, role) are not editable.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProfileUpdate {
    pub nombre1: String,
    pub nombre2: String,
    pub apellido1: String,
    pub apellido2: String,
    pub telefono: String,
    pub fecha_nacimiento: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileUpdateError {
    #[error("The first name is required")]
    FirstNameRequired,

    #[error("The first last name is required")]
    LastNameRequired,

    #[error("The phone number is required")]
    PhoneRequired,

    #[error("The birth date is not valid")]
    InvalidBirthDate,
}

/// The columns written back to the profile row.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProfileChanges {
    pub nombre1: String,
    pub nombre2: Option<String>,
    pub apellido1: String,
    pub apellido2: Option<String>,
    pub telefono: String,
    pub fecha_nacimiento: NaiveDate,
}

impl ProfileUpdate {
    /// Prefills the form, missing optional names become empty inputs.
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            nombre1: profile.nombre1.clone(),
            nombre2: profile.nombre2.clone().unwrap_or_default(),
            apellido1: profile.apellido1.clone(),
            apellido2: profile.apellido2.clone().unwrap_or_default(),
            telefono: profile.telefono.clone(),
            fecha_nacimiento: profile.fecha_nacimiento.to_string(),
        }
    }

    pub fn normalize(&self) -> Result<ProfileChanges, ProfileUpdateError> {
        let nombre1 = non_blank(&self.nombre1).ok_or(ProfileUpdateError::FirstNameRequired)?;
        let apellido1 = non_blank(&self.apellido1).ok_or(ProfileUpdateError::LastNameRequired)?;
        let telefono = non_blank(&self.telefono).ok_or(ProfileUpdateError::PhoneRequired)?;
        let fecha_nacimiento =
            parse_date(&self.fecha_nacimiento).ok_or(ProfileUpdateError::InvalidBirthDate)?;

        Ok(ProfileChanges {
            nombre1,
            nombre2: non_blank(&self.nombre2),
            apellido1,
            apellido2: non_blank(&self.apellido2),
            telefono,
            fecha_nacimiento,
        })
    }
}

impl ProfileChanges {
    pub fn apply_to(self, profile: &mut UserProfile) {
        profile.nombre1 = self.nombre1;
        profile.nombre2 = self.nombre2;
        profile.apellido1 = self.apellido1;
        profile.apellido2 = self.apellido2;
        profile.telefono = self.telefono;
        profile.fecha_nacimiento = self.fecha_nacimiento;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::profile::test::profile;

    #[test]
    fn update_is_trimmed_and_blank_names_are_cleared() {
        let update = ProfileUpdate {
            nombre1: "  Ana ".to_string(),
            nombre2: "   ".to_string(),
            apellido1: " Pérez".to_string(),
            apellido2: " Núñez ".to_string(),
            telefono: " 0991234567 ".to_string(),
            fecha_nacimiento: "1990-05-01".to_string(),
        };
        assert_eq!(
            update.normalize(),
            Ok(ProfileChanges {
                nombre1: "Ana".to_string(),
                nombre2: None,
                apellido1: "Pérez".to_string(),
                apellido2: Some("Núñez".to_string()),
                telefono: "0991234567".to_string(),
                fecha_nacimiento: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            })
        );
    }

    #[test]
    fn required_fields() {
        let valid = ProfileUpdate::from_profile(&profile("1", "Ana", "Pérez"));
        let cases = vec![
            (
                ProfileUpdate {
                    nombre1: " ".to_string(),
                    ..valid.clone()
                },
                ProfileUpdateError::FirstNameRequired,
            ),
            (
                ProfileUpdate {
                    apellido1: String::new(),
                    ..valid.clone()
                },
                ProfileUpdateError::LastNameRequired,
            ),
            (
                ProfileUpdate {
                    telefono: String::new(),
                    ..valid.clone()
                },
                ProfileUpdateError::PhoneRequired,
            ),
            (
                ProfileUpdate {
                    fecha_nacimiento: "01/05/1990".to_string(),
                    ..valid.clone()
                },
                ProfileUpdateError::InvalidBirthDate,
            ),
        ];
        for (update, expected) in cases {
            assert_eq!(update.normalize(), Err(expected));
        }
    }

    #[test]
    fn prefilled_form_applies_back_unchanged() {
        let mut stored = profile("1", "Ana", "Pérez");
        stored.apellido2 = Some("Núñez".to_string());

        let form = ProfileUpdate::from_profile(&stored);
        assert_eq!(form.nombre2, "");
        assert_eq!(form.fecha_nacimiento, "1990-05-01");

        let mut updated = stored.clone();
        form.normalize().unwrap().apply_to(&mut updated);
        assert_eq!(updated, stored);

        let form = ProfileUpdate {
            nombre2: "María".to_string(),
            apellido2: " ".to_string(),
            ..form
        };
        form.normalize().unwrap().apply_to(&mut updated);
        assert_eq!(updated.full_name(), "Ana María Pérez");
        assert_eq!(updated.cedula, stored.cedula);
        assert_eq!(updated.rol, stored.rol);
    }
}

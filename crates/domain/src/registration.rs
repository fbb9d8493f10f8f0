use crate::{Email, Field, FieldErrors, Name, Password};

/// Raw input of the coach sign-up form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachRegistration {
    pub name: Name,
    pub email: Email,
    pub password: Password,
}

impl CoachRegistration {
    pub fn validate(form: &RegistrationForm) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = errors.check(Field::Name, Name::new(&form.name));
        let email = errors.check(Field::Email, Email::new(&form.email));
        let password = errors.check_all(Field::Password, Password::new(&form.password));

        match (name, email, password) {
            (Some(name), Some(email), Some(password)) if errors.is_empty() => Ok(Self {
                name,
                email,
                password,
            }),
            _ => Err(errors),
        }
    }
}

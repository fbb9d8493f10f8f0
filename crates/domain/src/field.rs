use std::{collections::BTreeMap, fmt};

use chrono::NaiveDate;
use derive_more::{AsRef, Display, Into};
use validator::ValidateEmail;

/// Form fields that validation messages are attached to.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("password")]
    Password,
    #[display("birthdate")]
    Birthdate,
    #[display("gender")]
    Gender,
    #[display("height")]
    Height,
    #[display("weight")]
    Weight,
}

/// Validation messages per field, ready to be shown next to the input.
///
/// A field can carry more than one message, e.g. a password that is both too short and lacks a
/// digit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, Vec<String>>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: Field, message: impl ToString) {
        self.0.entry(field).or_default().push(message.to_string());
    }

    /// Records the error of `result`, if any, and returns the valid value.
    pub fn check<T, E: fmt::Display>(&mut self, field: Field, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.add(field, err);
                None
            }
        }
    }

    /// Like [`FieldErrors::check`], for validators that report every violated rule.
    pub fn check_all<T, E: fmt::Display>(
        &mut self,
        field: Field,
        result: Result<T, Vec<E>>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(errs) => {
                for err in errs {
                    self.add(field, err);
                }
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &[String] {
        self.0.get(&field).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> {
        self.0.iter().map(|(field, messages)| (*field, messages.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(email: &str) -> Result<Self, EmailError> {
        let trimmed_email = email.trim();

        if trimmed_email.is_empty() {
            return Err(EmailError::Empty);
        }

        if !trimmed_email.validate_email() {
            return Err(EmailError::Invalid);
        }

        Ok(Self(trimmed_email.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EmailError {
    #[error("L'email è obbligatoria")]
    Empty,
    #[error("Email non valida")]
    Invalid,
}

#[derive(AsRef, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Checks every password rule and reports all violations at once.
    pub fn new(password: &str) -> Result<Self, Vec<PasswordError>> {
        let mut errors = vec![];

        if password.chars().count() < 6 {
            errors.push(PasswordError::TooShort);
        }

        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            errors.push(PasswordError::MissingUppercase);
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            errors.push(PasswordError::MissingDigit);
        }

        if errors.is_empty() {
            Ok(Self(password.to_string()))
        } else {
            Err(errors)
        }
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Password(***)")
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    #[error("La password deve contenere almeno 6 caratteri")]
    TooShort,
    #[error("La password deve contenere almeno una lettera maiuscola")]
    MissingUppercase,
    #[error("La password deve contenere almeno un numero")]
    MissingDigit,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Accepts dates in the form `YYYY-MM-DD` that exist in the calendar.
    pub fn new(value: &str) -> Result<Self, BirthDateError> {
        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });

        if !well_formed {
            return Err(BirthDateError::InvalidFormat);
        }

        let (Ok(year), Ok(month), Ok(day)) = (
            value[0..4].parse::<i32>(),
            value[5..7].parse::<u32>(),
            value[8..10].parse::<u32>(),
        ) else {
            return Err(BirthDateError::InvalidFormat);
        };

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(BirthDateError::InvalidDate)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BirthDateError {
    #[error("La data deve essere nel formato AAAA-MM-GG")]
    InvalidFormat,
    #[error("Data non valida")]
    InvalidDate,
}

#[derive(Debug, strum::Display, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    M,
    F,
    Altro,
}

impl TryFrom<&str> for Gender {
    type Error = GenderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "M" => Ok(Gender::M),
            "F" => Ok(Gender::F),
            "Altro" => Ok(Gender::Altro),
            _ => Err(GenderError::Invalid),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GenderError {
    #[error("Il genere deve essere M, F o Altro")]
    Invalid,
}

/// A numeric form value, either typed in as text or already a number.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    Text(String),
    Number(f64),
}

impl NumberInput {
    /// Converts the input to a number, `None` for blank text.
    pub fn to_number(&self) -> Result<Option<f64>, MeasurementError> {
        match self {
            NumberInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| MeasurementError::ParseError)
            }
            NumberInput::Number(number) => Ok(Some(*number)),
        }
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Number(value)
    }
}

impl From<u32> for NumberInput {
    fn from(value: u32) -> Self {
        NumberInput::Number(f64::from(value))
    }
}

/// Checks `0 < value <= max` before the value is narrowed to `f32`.
#[allow(clippy::cast_possible_truncation)]
fn in_range(value: f64, max: f32) -> Result<f32, MeasurementError> {
    // NaN fails both comparisons.
    if value > 0.0 && value <= f64::from(max) {
        Ok(value as f32)
    } else {
        Err(MeasurementError::OutOfRange(max))
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Height(f32);

impl Height {
    pub const MAX: f32 = 300.0;

    pub fn new(value: f32) -> Result<Self, MeasurementError> {
        in_range(f64::from(value), Self::MAX).map(Self)
    }

    pub fn parse(input: &NumberInput) -> Result<Option<Self>, MeasurementError> {
        input
            .to_number()?
            .map(|value| in_range(value, Self::MAX).map(Self))
            .transpose()
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct BodyWeight(f32);

impl BodyWeight {
    pub const MAX: f32 = 500.0;

    pub fn new(value: f32) -> Result<Self, MeasurementError> {
        in_range(f64::from(value), Self::MAX).map(Self)
    }

    pub fn parse(input: &NumberInput) -> Result<Option<Self>, MeasurementError> {
        input
            .to_number()?
            .map(|value| in_range(value, Self::MAX).map(Self))
            .transpose()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MeasurementError {
    #[error("Il valore deve essere un numero")]
    ParseError,
    #[error("Il valore deve essere maggiore di 0 e al massimo {0}")]
    OutOfRange(f32),
}

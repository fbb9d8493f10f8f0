use derive_more::{AsRef, Display, Into};

use crate::{CreateError, ExerciseID, ReadError};

#[allow(async_fn_in_trait)]
pub trait TemplateService {
    async fn get_template(&self, id: &TemplateID) -> Result<Template, ReadError>;
    async fn create_template(&self, template: NewTemplate) -> Result<Template, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait TemplateRepository {
    async fn read_template(&self, id: &TemplateID) -> Result<Template, ReadError>;
    async fn create_template(&self, template: NewTemplate) -> Result<Template, CreateError>;
}

/// Workout definition without a client, which a coach can assign later.
///
/// Values are kept as stored by the backend. They are only validated when a new template is built
/// from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: TemplateID,
    pub title: String,
    pub description: String,
    pub assignments: Vec<StoredAssignment>,
}

/// Content of a template that does not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTemplate {
    pub title: Title,
    pub description: String,
    pub assignments: Vec<ExerciseAssignment>,
}

#[derive(AsRef, Debug, Display, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TemplateID(String);

impl From<String> for TemplateID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TemplateID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(title: &str) -> Result<Self, TitleError> {
        let trimmed_title = title.trim();

        if trimmed_title.is_empty() {
            return Err(TitleError::Empty);
        }

        if trimmed_title.chars().count() < 3 {
            return Err(TitleError::TooShort);
        }

        Ok(Self(trimmed_title.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TitleError {
    #[error("Il titolo è obbligatorio")]
    Empty,
    #[error("Il titolo deve contenere almeno 3 caratteri")]
    TooShort,
}

/// Assignment of an existing template, as stored. A load of zero means no load.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredAssignment {
    pub exercise_id: ExerciseID,
    pub sets: u32,
    pub reps: u32,
    pub load: Option<f32>,
}

impl StoredAssignment {
    /// The stored load, unless it is missing or zero.
    #[must_use]
    pub fn given_load(&self) -> Option<f32> {
        self.load.filter(|load| *load != 0.0)
    }
}

impl From<ExerciseAssignment> for StoredAssignment {
    fn from(value: ExerciseAssignment) -> Self {
        Self {
            exercise_id: value.exercise_id,
            sets: value.sets.into(),
            reps: value.reps.into(),
            load: value.load.map(f32::from),
        }
    }
}

/// Sets, reps and optional load prescribed for one exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseAssignment {
    pub exercise_id: ExerciseID,
    pub sets: Sets,
    pub reps: Reps,
    pub load: Option<Load>,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub fn new(value: u32) -> Result<Self, SetsError> {
        if !(1..1000).contains(&value) {
            return Err(SetsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Sets {
    type Error = SetsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Sets::new(parsed_value),
            Err(_) => Err(SetsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Le serie devono essere comprese tra 1 e 999")]
    OutOfRange,
    #[error("Le serie devono essere un numero intero")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Le ripetizioni devono essere comprese tra 1 e 999")]
    OutOfRange,
    #[error("Le ripetizioni devono essere un numero intero")]
    ParseError,
}

/// Weight in kg.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Load(f32);

impl Load {
    pub fn new(value: f32) -> Result<Self, LoadError> {
        if !(value > 0.0 && value < 1000.0) {
            return Err(LoadError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Parses a load input where blank and zero mean "no load".
    pub fn parse(value: &str) -> Result<Option<Self>, LoadError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Ok(None);
        }

        match trimmed.parse::<f32>() {
            Ok(parsed_value) if parsed_value == 0.0 => Ok(None),
            Ok(parsed_value) => Load::new(parsed_value).map(Some),
            Err(_) => Err(LoadError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LoadError {
    #[error("Il peso deve essere compreso tra 0 e 999.9 kg")]
    OutOfRange,
    #[error("Il peso deve essere un numero")]
    ParseError,
}

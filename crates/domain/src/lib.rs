#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod coach;
mod error;
mod exercise;
mod field;
mod name;
mod profile;
mod registration;
pub mod selection;
mod service;
mod template;

pub use coach::{Coach, CoachID, CoachRepository, CoachService, CustomerSession};
pub use error::{CreateError, ReadError, StorageError, UploadError};
pub use exercise::{
    Exercise, ExerciseID, ExerciseRepository, ExerciseService, ImageError, ImageFile,
    MAX_IMAGE_SIZE,
};
pub use field::{
    BirthDate, BirthDateError, BodyWeight, Email, EmailError, Field, FieldErrors, Gender,
    GenderError, Height, MeasurementError, NumberInput, Password, PasswordError,
};
pub use name::{Name, NameError};
pub use profile::{CustomerProfile, ProfileForm};
pub use registration::{CoachRegistration, RegistrationForm};
pub use selection::{AssignmentField, ExerciseSelection, Prescription, SelectionError};
pub use service::Service;
pub use template::{
    ExerciseAssignment, Load, LoadError, NewTemplate, Reps, RepsError, Sets, SetsError,
    StoredAssignment, Template, TemplateID, TemplateRepository, TemplateService, Title,
    TitleError,
};

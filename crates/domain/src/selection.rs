use crate::{ExerciseAssignment, ExerciseID, Load, Reps, Sets, StoredAssignment};

/// Sets, reps and load as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prescription {
    pub sets: String,
    pub reps: String,
    pub load: String,
}

impl Default for Prescription {
    fn default() -> Self {
        Self {
            sets: "3".to_string(),
            reps: "10".to_string(),
            load: String::new(),
        }
    }
}

impl From<&StoredAssignment> for Prescription {
    fn from(value: &StoredAssignment) -> Self {
        Self {
            sets: value.sets.to_string(),
            reps: value.reps.to_string(),
            load: value
                .given_load()
                .map(|l| l.to_string())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Add(ExerciseID),
    Remove(ExerciseID),
    SetsChanged(ExerciseID, String),
    RepsChanged(ExerciseID, String),
    LoadChanged(ExerciseID, String),
}

/// Exercises chosen for a template, in the order they were added.
///
/// Each exercise appears at most once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseSelection {
    entries: Vec<(ExerciseID, Prescription)>,
}

impl ExerciseSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the selection from stored assignments. A repeated exercise keeps its first position
    /// and its last prescription. Stored values are taken over unchecked.
    #[must_use]
    pub fn from_assignments(assignments: &[StoredAssignment]) -> Self {
        let mut selection = Self::new();
        for assignment in assignments {
            let prescription = Prescription::from(assignment);
            match selection.get_mut(&assignment.exercise_id) {
                Some(existing) => *existing = prescription,
                None => selection
                    .entries
                    .push((assignment.exercise_id.clone(), prescription)),
            }
        }
        selection
    }

    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::Add(id) => self.add(id),
            Msg::Remove(id) => self.remove(&id),
            Msg::SetsChanged(id, input) => self.set_sets(&id, input),
            Msg::RepsChanged(id, input) => self.set_reps(&id, input),
            Msg::LoadChanged(id, input) => self.set_load(&id, input),
        }
    }

    pub fn add(&mut self, id: ExerciseID) {
        if !self.contains(&id) {
            self.entries.push((id, Prescription::default()));
        }
    }

    pub fn remove(&mut self, id: &ExerciseID) {
        self.entries.retain(|(exercise_id, _)| exercise_id != id);
    }

    pub fn set_sets(&mut self, id: &ExerciseID, input: String) {
        if let Some(prescription) = self.get_mut(id) {
            prescription.sets = input;
        }
    }

    pub fn set_reps(&mut self, id: &ExerciseID, input: String) {
        if let Some(prescription) = self.get_mut(id) {
            prescription.reps = input;
        }
    }

    pub fn set_load(&mut self, id: &ExerciseID, input: String) {
        if let Some(prescription) = self.get_mut(id) {
            prescription.load = input;
        }
    }

    #[must_use]
    pub fn get(&self, id: &ExerciseID) -> Option<&Prescription> {
        self.entries
            .iter()
            .find(|(exercise_id, _)| exercise_id == id)
            .map(|(_, prescription)| prescription)
    }

    fn get_mut(&mut self, id: &ExerciseID) -> Option<&mut Prescription> {
        self.entries
            .iter_mut()
            .find(|(exercise_id, _)| exercise_id == id)
            .map(|(_, prescription)| prescription)
    }

    #[must_use]
    pub fn contains(&self, id: &ExerciseID) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ExerciseID, &Prescription)> {
        self.entries.iter().map(|(id, prescription)| (id, prescription))
    }

    /// Converts the inputs into assignments, failing on the first invalid entry.
    pub fn to_assignments(&self) -> Result<Vec<ExerciseAssignment>, SelectionError> {
        if self.is_empty() {
            return Err(SelectionError::Empty);
        }

        self.entries
            .iter()
            .map(|(exercise_id, prescription)| -> Result<ExerciseAssignment, SelectionError> {
                let invalid = |field: AssignmentField, message: String| SelectionError::Invalid {
                    exercise_id: exercise_id.clone(),
                    field,
                    message,
                };
                Ok(ExerciseAssignment {
                    exercise_id: exercise_id.clone(),
                    sets: Sets::try_from(prescription.sets.as_str())
                        .map_err(|err| invalid(AssignmentField::Sets, err.to_string()))?,
                    reps: Reps::try_from(prescription.reps.as_str())
                        .map_err(|err| invalid(AssignmentField::Reps, err.to_string()))?,
                    load: Load::parse(&prescription.load)
                        .map_err(|err| invalid(AssignmentField::Load, err.to_string()))?,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentField {
    Sets,
    Reps,
    Load,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Seleziona almeno un esercizio")]
    Empty,
    #[error("{message}")]
    Invalid {
        exercise_id: ExerciseID,
        field: AssignmentField,
        message: String,
    },
}

//! Duplication of a workout template.
//!
//! The page fetches an existing template together with the exercise catalog, lets the coach edit
//! a copy and submits it as a new template. [`update`] only changes the model and returns
//! [`Command`]s, which are run by [`execute`] or handled by the caller.

use std::collections::VecDeque;

use fitcoach_domain::{
    self as domain, ExerciseSelection, ExerciseService, SelectionError, TemplateService, selection,
};
use futures_util::future::try_join;
use log::debug;

use crate::notification::{Notification, Notifications};

pub const LOAD_FAILED: &str = "Errore nel caricamento del template";
pub const DUPLICATED: &str = "Template duplicato con successo";
pub const DUPLICATION_FAILED: &str = "Errore nella duplicazione del template";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Templates,
}

// ------ ------
//     Init
// ------ ------

#[must_use]
pub fn init(template_id: domain::TemplateID) -> (Model, Vec<Command>) {
    debug!("loading template {template_id}");
    (
        Model {
            template_id: template_id.clone(),
            state: State::Loading,
            title: String::new(),
            description: String::new(),
            selection: ExerciseSelection::new(),
            exercises: vec![],
            error: None,
        },
        vec![Command::Load(template_id)],
    )
}

// ------ ------
//     Model
// ------ ------

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub template_id: domain::TemplateID,
    pub state: State,
    pub title: String,
    pub description: String,
    pub selection: ExerciseSelection,
    pub exercises: Vec<domain::Exercise>,
    pub error: Option<String>,
}

impl Model {
    /// Catalog entries that are not part of the selection yet.
    pub fn available_exercises(&self) -> impl Iterator<Item = &domain::Exercise> {
        self.exercises
            .iter()
            .filter(|e| !self.selection.contains(&e.id))
    }

    #[must_use]
    pub fn exercise(&self, id: &domain::ExerciseID) -> Option<&domain::Exercise> {
        self.exercises.iter().find(|e| e.id == *id)
    }

    #[must_use]
    pub fn editable(&self) -> bool {
        self.state == State::Ready
    }

    fn new_template(&self) -> Result<domain::NewTemplate, String> {
        if self.selection.is_empty() {
            return Err(SelectionError::Empty.to_string());
        }
        let title = domain::Title::new(&self.title).map_err(|err| err.to_string())?;
        let assignments = self
            .selection
            .to_assignments()
            .map_err(|err| err.to_string())?;
        Ok(domain::NewTemplate {
            title,
            description: self.description.trim().to_string(),
            assignments,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Loading,
    LoadFailed(String),
    Ready,
    Submitting,
    Done,
}

// ------ ------
//    Update
// ------ ------

#[derive(Debug)]
pub enum Msg {
    Loaded(Result<(domain::Template, Vec<domain::Exercise>), domain::ReadError>),
    TitleChanged(String),
    DescriptionChanged(String),
    Selection(selection::Msg),
    Submit,
    Submitted(Result<domain::Template, domain::CreateError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Load(domain::TemplateID),
    Create(domain::NewTemplate),
    Notify(Notification),
    Navigate(Route),
}

pub fn update(msg: Msg, model: &mut Model) -> Vec<Command> {
    match msg {
        Msg::Loaded(result) => {
            if model.state != State::Loading {
                return vec![];
            }
            match result {
                Ok((template, exercises)) => {
                    debug!(
                        "loaded template {} with {} exercises",
                        template.id,
                        template.assignments.len()
                    );
                    model.title = template.title;
                    model.description = template.description;
                    model.selection = ExerciseSelection::from_assignments(&template.assignments);
                    model.exercises = exercises;
                    model.state = State::Ready;
                    vec![]
                }
                Err(err) => {
                    debug!("failed to load template {}: {err}", model.template_id);
                    model.state = State::LoadFailed(LOAD_FAILED.to_string());
                    vec![Command::Notify(Notification::error(LOAD_FAILED))]
                }
            }
        }
        Msg::TitleChanged(title) => {
            if model.editable() {
                model.title = title;
            }
            vec![]
        }
        Msg::DescriptionChanged(description) => {
            if model.editable() {
                model.description = description;
            }
            vec![]
        }
        Msg::Selection(msg) => {
            if model.editable() {
                model.selection.update(msg);
            }
            vec![]
        }
        Msg::Submit => {
            if !model.editable() {
                return vec![];
            }
            match model.new_template() {
                Ok(template) => {
                    debug!("submitting copy of template {}", model.template_id);
                    model.error = None;
                    model.state = State::Submitting;
                    vec![Command::Create(template)]
                }
                Err(message) => {
                    model.error = Some(message.clone());
                    vec![Command::Notify(Notification::error(message))]
                }
            }
        }
        Msg::Submitted(result) => {
            if model.state != State::Submitting {
                return vec![];
            }
            match result {
                Ok(template) => {
                    debug!(
                        "template {} duplicated as {}",
                        model.template_id, template.id
                    );
                    model.state = State::Done;
                    vec![
                        Command::Notify(Notification::success(DUPLICATED)),
                        Command::Navigate(Route::Templates),
                    ]
                }
                Err(err) => {
                    debug!("failed to duplicate template {}: {err}", model.template_id);
                    model.state = State::Ready;
                    vec![Command::Notify(Notification::error(DUPLICATION_FAILED))]
                }
            }
        }
    }
}

// ------ ------
//    Execute
// ------ ------

/// Runs a remote command. Notifications and navigation are left to the caller.
pub async fn execute<S: TemplateService + ExerciseService>(
    service: &S,
    command: Command,
) -> Option<Msg> {
    match command {
        Command::Load(id) => Some(Msg::Loaded(
            try_join(service.get_template(&id), service.get_exercises()).await,
        )),
        Command::Create(template) => Some(Msg::Submitted(service.create_template(template).await)),
        Command::Notify(_) | Command::Navigate(_) => None,
    }
}

/// Updates the model with a message and with every message produced by the resulting commands.
///
/// Notifications are queued and the last requested route is returned.
pub async fn process<S: TemplateService + ExerciseService>(
    service: &S,
    model: &mut Model,
    msg: Msg,
    notifications: &mut Notifications,
) -> Option<Route> {
    let mut route = None;
    let mut messages = VecDeque::from([msg]);

    while let Some(msg) = messages.pop_front() {
        for command in update(msg, model) {
            match command {
                Command::Notify(notification) => notifications.push(notification),
                Command::Navigate(r) => route = Some(r),
                command => {
                    if let Some(msg) = execute(service, command).await {
                        messages.push_back(msg);
                    }
                }
            }
        }
    }

    route
}

/// Starts the page and runs the initial load.
pub async fn start<S: TemplateService + ExerciseService>(
    service: &S,
    template_id: domain::TemplateID,
    notifications: &mut Notifications,
) -> Model {
    let (mut model, commands) = init(template_id);
    for command in commands {
        if let Some(msg) = execute(service, command).await {
            process(service, &mut model, msg, notifications).await;
        }
    }
    model
}

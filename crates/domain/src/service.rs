use log::{debug, error};

use crate::{
    Coach, CoachRepository, CoachService, CreateError, Exercise, ExerciseRepository,
    ExerciseService, ImageFile, NewTemplate, ReadError, Template, TemplateID, TemplateRepository,
    TemplateService, UploadError,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: TemplateRepository> TemplateService for Service<R> {
    async fn get_template(&self, id: &TemplateID) -> Result<Template, ReadError> {
        log_on_error!(
            self.repository.read_template(id),
            ReadError,
            "get",
            "template"
        )
    }

    async fn create_template(&self, template: NewTemplate) -> Result<Template, CreateError> {
        log_on_error!(
            self.repository.create_template(template),
            CreateError,
            "create",
            "template"
        )
    }
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }

    async fn upload_exercise_image(&self, image: ImageFile) -> Result<String, UploadError> {
        let image = ImageFile::new(&image.name, &image.mime_type, image.bytes)?;
        log_on_error!(
            self.repository.upload_exercise_image(image),
            UploadError,
            "upload",
            "exercise image"
        )
    }
}

impl<R: CoachRepository> CoachService for Service<R> {
    async fn get_coach(&self) -> Result<Option<Coach>, ReadError> {
        log_on_error!(self.repository.read_coach(), ReadError, "get", "coach")
    }
}

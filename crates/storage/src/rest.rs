//! REST
//!
//! Client side of the backend's HTTP API. Requests go through a [`SendRequest`] implementation,
//! so tests can replace the network with canned responses.

use fitcoach_domain as domain;
use gloo_net::http::{Request, Response};
use log::debug;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use wasm_bindgen::JsValue;

pub const DEFAULT_BASE_URL: &str = "api";

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone, Copy, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub sender: S,
    pub base_url: String,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            sender: GlooNetSendRequest,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for REST<GlooNetSendRequest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SendRequest> REST<S> {
    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn send(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<Response, domain::StorageError> {
        let request = request.map_err(|err| domain::StorageError::Other(err.into()))?;
        self.sender.send_request(request).await.map_err(|err| {
            debug!("failed to send request: {err}");
            domain::StorageError::NoConnection
        })
    }
}

impl<S: SendRequest> domain::TemplateRepository for REST<S> {
    async fn read_template(
        &self,
        id: &domain::TemplateID,
    ) -> Result<domain::Template, domain::ReadError> {
        let response = self
            .send(Request::get(&self.url(&format!("workouts/templates/{id}"))).build())
            .await?;
        let template = read::<Template>(response).await?;
        domain::Template::try_from(template).map_err(|err| domain::ReadError::Other(err.into()))
    }

    async fn create_template(
        &self,
        template: domain::NewTemplate,
    ) -> Result<domain::Template, domain::CreateError> {
        let response = self
            .send(
                Request::post(&self.url("workouts/templates"))
                    .json(&NewTemplate::from(&template)),
            )
            .await?;
        let template = match response.status() {
            200..=299 => decode::<Template>(response)
                .await
                .map_err(domain::CreateError::Other)?,
            401 => return Err(domain::StorageError::NoSession.into()),
            409 => return Err(domain::CreateError::Conflict),
            _ => return Err(domain::CreateError::Other(unexpected_status(&response))),
        };
        domain::Template::try_from(template).map_err(|err| domain::CreateError::Other(err.into()))
    }
}

impl<S: SendRequest> domain::ExerciseRepository for REST<S> {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let response = self
            .send(Request::get(&self.url("exercises")).build())
            .await?;
        Ok(read::<Vec<Exercise>>(response)
            .await?
            .into_iter()
            .map(domain::Exercise::from)
            .collect())
    }

    async fn upload_exercise_image(
        &self,
        image: domain::ImageFile,
    ) -> Result<String, domain::UploadError> {
        let form_data = image_form_data(&image).map_err(|err| {
            domain::UploadError::Other(format!("failed to prepare image upload: {err:?}").into())
        })?;
        let response = self
            .send(Request::post(&self.url("exercises/upload-image")).body(form_data))
            .await?;
        match response.status() {
            200..=299 => Ok(decode::<UploadedImage>(response)
                .await
                .map_err(domain::UploadError::Other)?
                .image_url),
            401 => Err(domain::StorageError::NoSession.into()),
            _ => Err(domain::UploadError::Other(unexpected_status(&response))),
        }
    }
}

impl<S: SendRequest> domain::CoachRepository for REST<S> {
    async fn read_coach(&self) -> Result<Option<domain::Coach>, domain::ReadError> {
        let response = self.send(Request::get(&self.url("me/coach")).build()).await?;
        if response.status() == 204 {
            return Ok(None);
        }
        match read::<Option<Coach>>(response).await {
            Ok(coach) => Ok(coach.map(domain::Coach::from)),
            Err(domain::ReadError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

async fn read<T: DeserializeOwned>(response: Response) -> Result<T, domain::ReadError> {
    match response.status() {
        200..=299 => decode(response).await.map_err(domain::ReadError::Other),
        401 => Err(domain::StorageError::NoSession.into()),
        404 => Err(domain::ReadError::NotFound),
        _ => Err(domain::ReadError::Other(unexpected_status(&response))),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Box<dyn std::error::Error>> {
    response
        .json::<T>()
        .await
        .map_err(|err| format!("deserialization failed: {err}").into())
}

fn unexpected_status(response: &Response) -> Box<dyn std::error::Error> {
    format!("{} {}", response.status(), response.status_text()).into()
}

fn image_form_data(image: &domain::ImageFile) -> Result<web_sys::FormData, JsValue> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(image.bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&image.mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let form_data = web_sys::FormData::new()?;
    form_data.append_with_blob_and_filename("exerciseImage", &blob, &image.name)?;
    Ok(form_data)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Template {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "titolo")]
    pub title: String,
    #[serde(rename = "descrizione", default)]
    pub description: Option<String>,
    #[serde(rename = "esercizi", default)]
    pub assignments: Vec<Assignment>,
}

impl TryFrom<Template> for domain::Template {
    type Error = String;

    fn try_from(value: Template) -> Result<Self, Self::Error> {
        Ok(domain::Template {
            id: value.id.into(),
            title: value.title,
            description: value.description.unwrap_or_default(),
            assignments: value
                .assignments
                .into_iter()
                .map(domain::StoredAssignment::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

impl From<domain::Template> for Template {
    fn from(value: domain::Template) -> Self {
        Template {
            id: value.id.to_string(),
            title: value.title,
            description: Some(value.description),
            assignments: value.assignments.iter().map(Assignment::from).collect(),
        }
    }
}

/// Body of a template creation request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewTemplate {
    #[serde(rename = "titolo")]
    pub title: String,
    #[serde(rename = "descrizione")]
    pub description: String,
    #[serde(rename = "esercizi")]
    pub assignments: Vec<Assignment>,
}

impl From<&domain::NewTemplate> for NewTemplate {
    fn from(value: &domain::NewTemplate) -> Self {
        NewTemplate {
            title: value.title.to_string(),
            description: value.description.trim().to_string(),
            assignments: value.assignments.iter().map(Assignment::from).collect(),
        }
    }
}

/// An exercise within a template.
///
/// Templates read from the backend reference the exercise either by `esercizioId` or by a
/// populated `esercizio` object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Assignment {
    #[serde(rename = "esercizioId", default, skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
    #[serde(rename = "esercizio", default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<ExerciseReference>,
    #[serde(rename = "serie")]
    pub sets: u32,
    #[serde(rename = "ripetizioni")]
    pub reps: u32,
    #[serde(rename = "peso", default, skip_serializing_if = "Option::is_none")]
    pub load: Option<f32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseReference {
    #[serde(alias = "_id")]
    pub id: String,
}

impl TryFrom<Assignment> for domain::StoredAssignment {
    type Error = String;

    fn try_from(value: Assignment) -> Result<Self, Self::Error> {
        let exercise_id = value
            .exercise_id
            .filter(|id| !id.is_empty())
            .or(value.exercise.map(|e| e.id))
            .filter(|id| !id.is_empty())
            .ok_or("assignment without exercise reference")?;
        Ok(domain::StoredAssignment {
            exercise_id: exercise_id.into(),
            sets: value.sets,
            reps: value.reps,
            load: value.load,
        })
    }
}

impl From<&domain::StoredAssignment> for Assignment {
    fn from(value: &domain::StoredAssignment) -> Self {
        Assignment {
            exercise_id: Some(value.exercise_id.to_string()),
            exercise: None,
            sets: value.sets,
            reps: value.reps,
            load: value.load,
        }
    }
}

impl From<&domain::ExerciseAssignment> for Assignment {
    fn from(value: &domain::ExerciseAssignment) -> Self {
        Assignment {
            exercise_id: Some(value.exercise_id.to_string()),
            exercise: None,
            sets: value.sets.into(),
            reps: value.reps.into(),
            load: value.load.map(f32::from),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descrizione", default)]
    pub description: String,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "immagineUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "muscoli", default)]
    pub muscles: Vec<String>,
    #[serde(rename = "difficolta", default)]
    pub difficulty: String,
    #[serde(rename = "attrezzatura", default)]
    pub equipment: String,
}

impl From<Exercise> for domain::Exercise {
    fn from(value: Exercise) -> Self {
        domain::Exercise {
            id: value.id.into(),
            name: value.name,
            description: value.description,
            category: value.category,
            image_url: value.image_url.filter(|url| !url.is_empty()),
            muscles: value.muscles,
            difficulty: value.difficulty,
            equipment: value.equipment,
        }
    }
}

impl From<domain::Exercise> for Exercise {
    fn from(value: domain::Exercise) -> Self {
        Exercise {
            id: value.id.to_string(),
            name: value.name,
            description: value.description,
            category: value.category,
            image_url: value.image_url,
            muscles: value.muscles,
            difficulty: value.difficulty,
            equipment: value.equipment,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Coach {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}

impl From<Coach> for domain::Coach {
    fn from(value: Coach) -> Self {
        domain::Coach {
            id: value.id.into(),
            name: value.name,
        }
    }
}

impl From<domain::Coach> for Coach {
    fn from(value: domain::Coach) -> Self {
        Coach {
            id: value.id.to_string(),
            name: value.name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UploadedImage {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

use derive_more::{AsRef, Display};

use crate::{ReadError, UploadError};

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn upload_exercise_image(&self, image: ImageFile) -> Result<String, UploadError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn upload_exercise_image(&self, image: ImageFile) -> Result<String, UploadError>;
}

/// Catalog entry, maintained by the backend.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_url: Option<String>,
    pub muscles: Vec<String>,
    pub difficulty: String,
    pub equipment: String,
}

#[derive(AsRef, Debug, Display, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// An image that passed the checks done before uploading.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: &str, mime_type: &str, bytes: Vec<u8>) -> Result<Self, ImageError> {
        if !mime_type.starts_with("image/") {
            return Err(ImageError::NotAnImage);
        }

        if bytes.len() > MAX_IMAGE_SIZE {
            return Err(ImageError::TooLarge(bytes.len()));
        }

        Ok(Self {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            bytes,
        })
    }
}

impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Il file deve essere un'immagine")]
    NotAnImage,
    #[error("L'immagine non può superare i 5 MB")]
    TooLarge(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("image/png", 1024, Ok(()))]
    #[case("image/jpeg", MAX_IMAGE_SIZE, Ok(()))]
    #[case("image/webp", 0, Ok(()))]
    #[case("image/jpeg", MAX_IMAGE_SIZE + 1, Err(ImageError::TooLarge(MAX_IMAGE_SIZE + 1)))]
    #[case("application/pdf", 1024, Err(ImageError::NotAnImage))]
    #[case("text/plain", MAX_IMAGE_SIZE + 1, Err(ImageError::NotAnImage))]
    #[case("", 10, Err(ImageError::NotAnImage))]
    fn test_image_file_new(
        #[case] mime_type: &str,
        #[case] size: usize,
        #[case] expected: Result<(), ImageError>,
    ) {
        assert_eq!(
            ImageFile::new("squat.png", mime_type, vec![0; size]).map(|_| ()),
            expected
        );
    }

    #[test]
    fn test_image_file_debug_omits_bytes() {
        let image = ImageFile::new("squat.png", "image/png", vec![1, 2, 3]).unwrap();
        assert_eq!(
            format!("{image:?}"),
            r#"ImageFile { name: "squat.png", mime_type: "image/png", size: 3 }"#
        );
    }

    #[test]
    fn test_exercise_id() {
        assert!(ExerciseID::default().is_empty());
        assert_eq!(ExerciseID::from("ex1").to_string(), "ex1");
        assert_eq!(ExerciseID::from("ex1"), ExerciseID::from("ex1".to_string()));
    }
}

use derive_more::{AsRef, Display};

use crate::ReadError;

#[allow(async_fn_in_trait)]
pub trait CoachService {
    async fn get_coach(&self) -> Result<Option<Coach>, ReadError>;

    async fn get_customer_session(&self) -> Result<CustomerSession, ReadError> {
        Ok(CustomerSession {
            coach: self.get_coach().await?,
        })
    }
}

#[allow(async_fn_in_trait)]
pub trait CoachRepository {
    async fn read_coach(&self) -> Result<Option<Coach>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coach {
    pub id: CoachID,
    pub name: String,
}

#[derive(AsRef, Debug, Display, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CoachID(String);

impl CoachID {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for CoachID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CoachID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// What is known about the logged-in customer, handed to the views that need it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CustomerSession {
    pub coach: Option<Coach>,
}

impl CustomerSession {
    /// The coach to offer a contact option for.
    #[must_use]
    pub fn contact(&self) -> Option<&Coach> {
        self.coach.as_ref().filter(|c| !c.id.is_empty())
    }
}

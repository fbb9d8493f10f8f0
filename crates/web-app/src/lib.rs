#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod duplicate_template;
pub mod log;
pub mod notification;
pub mod page_title;
mod service;

pub use notification::{Kind, Notification, Notifications};
pub use page_title::{PageTitle, page_title};
pub use service::Service;

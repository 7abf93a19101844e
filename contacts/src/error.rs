//! FILENAME: contacts/src/error.rs

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("no contact record with id {0}")]
    NotFound(Uuid),

    #[error("contact name cannot be empty")]
    EmptyName,
}

//! FILENAME: contacts/src/record.rs
//! PURPOSE: Reusable contact records and their freeform field lists.
//! CONTEXT: A record is a named bundle of label/value/placeholder lines,
//! the same shape the host renders in its From/To/Payment sections. Records
//! cross the host bridge as camelCase JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which section of the invoice a record feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactKind {
    BusinessProfile,
    Client,
    BankingDetails,
}

/// One labelled line inside a contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldEntry {
    pub id: u32,
    pub label: String,
    pub value: String,
    pub placeholder: String,
}

/// A saved, reusable contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: Uuid,
    pub kind: ContactKind,
    pub name: String,
    pub fields: Vec<FieldEntry>,
    /// Preselected when the host opens a new invoice.
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    pub fields: Vec<FieldEntry>,
}

/// Partial update. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldEntry>>,
}

//! FILENAME: contacts/src/store.rs
//! PURPOSE: The read/write contract for persisted contacts, plus an
//! in-memory reference implementation.
//! CONTEXT: Hosts back this trait with their hosted record store; the
//! invoice calculation core never touches it. Contact persistence runs
//! outside the edit loop and must never block table recomputation.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::error::ContactsError;
use crate::record::{ContactKind, ContactPatch, ContactRecord, NewContact};

/// Per-user store of reusable contact records.
pub trait ContactStore: Send + Sync {
    /// All records of `kind`, default first, then oldest first.
    fn list(&self, kind: ContactKind) -> Result<Vec<ContactRecord>, ContactsError>;

    fn create(&self, kind: ContactKind, contact: NewContact)
        -> Result<ContactRecord, ContactsError>;

    fn update(&self, id: Uuid, patch: ContactPatch) -> Result<ContactRecord, ContactsError>;

    fn delete(&self, id: Uuid) -> Result<(), ContactsError>;

    /// Marks `id` as its kind's default, clearing the flag on every other
    /// record of that kind.
    fn set_default(&self, id: Uuid) -> Result<(), ContactsError>;
}

/// In-memory `ContactStore` used by tests and hosts running without a
/// backend.
pub struct MemoryContactStore {
    records: Mutex<HashMap<Uuid, ContactRecord>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        MemoryContactStore {
            records: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemoryContactStore {
    fn list(&self, kind: ContactKind) -> Result<Vec<ContactRecord>, ContactsError> {
        let records = self.records.lock().unwrap();
        let mut matching: Vec<ContactRecord> =
            records.values().filter(|r| r.kind == kind).cloned().collect();
        matching.sort_by(|a, b| {
            b.is_default
                .cmp(&a.is_default)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(matching)
    }

    fn create(
        &self,
        kind: ContactKind,
        contact: NewContact,
    ) -> Result<ContactRecord, ContactsError> {
        if contact.name.trim().is_empty() {
            return Err(ContactsError::EmptyName);
        }
        let now = Utc::now();
        let record = ContactRecord {
            id: Uuid::new_v4(),
            kind,
            name: contact.name,
            fields: contact.fields,
            is_default: false,
            created_at: now,
            updated_at: now,
        };
        log::debug!("created {:?} contact {}", kind, record.id);
        self.records.lock().unwrap().insert(record.id, record.clone());
        Ok(record)
    }

    fn update(&self, id: Uuid, patch: ContactPatch) -> Result<ContactRecord, ContactsError> {
        let mut records = self.records.lock().unwrap();
        let record = records.get_mut(&id).ok_or(ContactsError::NotFound(id))?;
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(ContactsError::EmptyName);
            }
            record.name = name;
        }
        if let Some(fields) = patch.fields {
            record.fields = fields;
        }
        record.updated_at = Utc::now();
        log::debug!("updated contact {}", id);
        Ok(record.clone())
    }

    fn delete(&self, id: Uuid) -> Result<(), ContactsError> {
        let mut records = self.records.lock().unwrap();
        if records.remove(&id).is_none() {
            return Err(ContactsError::NotFound(id));
        }
        log::debug!("deleted contact {}", id);
        Ok(())
    }

    fn set_default(&self, id: Uuid) -> Result<(), ContactsError> {
        let mut records = self.records.lock().unwrap();
        let kind = records.get(&id).ok_or(ContactsError::NotFound(id))?.kind;
        for record in records.values_mut() {
            if record.kind == kind {
                record.is_default = record.id == id;
            }
        }
        Ok(())
    }
}

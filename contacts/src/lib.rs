//! FILENAME: contacts/src/lib.rs
//! Reusable contact persistence for the invoice editor.
//!
//! Business profiles, clients and banking details are saved once and loaded
//! into the From/To/Payment sections of later invoices. This crate defines
//! the record shapes and the store contract; hosts plug in their real
//! backend behind `ContactStore` and get `MemoryContactStore` for tests and
//! offline use. Converting between contact field lists and the line-item
//! table stays on the host side.

pub mod error;
pub mod record;
pub mod store;

pub use error::ContactsError;
pub use record::{ContactKind, ContactPatch, ContactRecord, FieldEntry, NewContact};
pub use store::{ContactStore, MemoryContactStore};

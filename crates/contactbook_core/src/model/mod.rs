//! Contact book domain model.
//!
//! # Responsibility
//! - Define the contact record and its field-level change log.
//! - Provide the canonical text rendering used by listings and history views.
//!
//! # Invariants
//! - Every contact is identified by a numeric `ContactId` assigned by the store.
//! - Change records are append-only and never edited after creation.

pub mod change;
pub mod contact;

// Rust guideline compliant 2026-10-14

//! Helium Core Library
//!
//! This crate provides the building blocks of the Helium command-line client:
//! - API records with slash-path field access and JSON:API documents
//! - Identifier resolution (full UUID, short id, name prefix, MAC suffix)
//! - Relationship update construction from add/remove references
//! - Record sources, including the snapshot directory reader
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod identity;
pub mod record;
pub mod relationship;
pub mod resolve;
pub mod resource;
pub mod source;

pub use config::{Config, OutputFormat};
pub use error::{Error, ErrorCode, Result};
pub use identity::{display_id, is_uuid, shorten_id};
pub use record::{Document, Record};
pub use relationship::{build_diff, RelationshipUpdate};
pub use resolve::{resolve, resolve_with, ResolveOptions, Resolver};
pub use resource::ResourceKind;
pub use source::{RecordSource, SnapshotSource};

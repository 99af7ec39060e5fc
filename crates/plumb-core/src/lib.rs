//! Plumb Core - Foundational types for the Plumb linter
//!
//! This crate provides the types that all other Plumb crates depend on:
//! - `NodeId` - Host-assigned node identifiers
//! - `NodeRecord` and friends - Read-only design node records
//! - `NodeDocument` - Loading and saving exported node files
//! - Error types and Result alias

mod document;
mod error;
mod id;
mod node;

pub use document::NodeDocument;
pub use error::{PlumbError, Result};
pub use id::NodeId;
pub use node::{
    AutoLayout, BoundProperty, Corner, CornerRadius, Effect, NodeKind, NodeRecord, Paint,
    StrokeWeight,
};

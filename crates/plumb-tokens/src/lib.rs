//! Plumb Tokens - Design-token scales and nearest-token matching
//!
//! This crate provides the canonical token scales a design is linted
//! against, and the matcher that proposes the closest valid token for an
//! off-scale value.

mod category;
mod fluent;
mod matcher;
mod registry;
mod scale;

pub use category::TokenCategory;
pub use matcher::{find_closest, TokenMatch};
pub use registry::{TokenFile, TokenRegistry};
pub use scale::{Token, TokenScale};

//! cellml-text-util - Shared position and diagnostic types.
//!
//! This crate is the foundation layer of the workspace: every other crate
//! reports positions and messages using the types defined here, so that a
//! scanner error, a parser error and a CLI-level I/O error all speak the same
//! line/column vocabulary.

pub mod diagnostic;
pub mod position;

pub use diagnostic::{Level, Message};
pub use position::Position;

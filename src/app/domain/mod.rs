//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document and its on-disk format
//! - Theme (colors and font)
//! - Startup settings
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod settings;
pub mod theme;

pub use document::{Document, DocumentFormat};
pub use messages::Message;
pub use settings::EditorSettings;
pub use theme::{FontSpec, Theme, ThemeColor};

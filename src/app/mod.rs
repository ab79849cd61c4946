//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Theme, Settings, Messages)
//! - `controllers/` - Orchestration (EditorSession)
//! - `services/` - File transforms (text/docx load and save, PDF export)
//! - `infrastructure/` - Errors and logging
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod file_filters;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::{DisplaySurface, EditorSession, Outcome, Prompts};
pub use domain::{Document, DocumentFormat, EditorSettings, FontSpec, Message, Theme, ThemeColor};
pub use infrastructure::error::{EditorError, FileOpError};

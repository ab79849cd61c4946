//! Controllers layer - orchestration and coordination.
//!
//! This module contains the controller that coordinates between
//! domain models, services, and the UI:
//! - Editor session (document, theme, file operations)

pub mod session;

pub use session::{DisplaySurface, EditorSession, FileKind, Outcome, Prompts, ThemeChoice};

//! Services layer - business operations and utilities.
//!
//! This module contains the file transforms behind the editor:
//! - Plain text and Word document load/save
//! - PDF export
//! - Path and filename helpers

pub mod document_io;
pub mod export;
pub mod text_ops;

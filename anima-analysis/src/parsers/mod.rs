//! Tree-sitter parser subsystem.

pub mod error_tolerant;
pub mod python;

pub use python::{ParsedModule, PythonParser};

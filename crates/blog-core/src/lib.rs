//! # Blog Core
//!
//! The domain layer of the blog application.
//! This crate contains the blog post lifecycle rules with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod sanitize;

pub use error::DomainError;

//! # Blog Shared
//!
//! Wire types shared between the HTML forms and the server.

pub mod dto;

pub use dto::{BlogEnvelope, BlogFormFields, BlogInput, Notice};

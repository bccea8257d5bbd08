//! Domain entities - the core business objects.

mod blog;

pub use blog::{Blog, BlogDraft, CleanDraft, parse_blog_id};

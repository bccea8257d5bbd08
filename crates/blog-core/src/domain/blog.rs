use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, RepoError};
use crate::sanitize::sanitize_html;

/// Blog entity - a persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub body: String,
    pub created: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog post with a generated ID and creation timestamp.
    pub fn new(draft: CleanDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            image: draft.image,
            body: draft.body,
            created: Utc::now(),
        }
    }

    /// Overwrite the author-editable fields. `id` and `created` are kept.
    pub fn apply(&mut self, draft: CleanDraft) {
        self.title = draft.title;
        self.image = draft.image;
        self.body = draft.body;
    }
}

/// Author-supplied blog fields as they arrive from a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: String,
    pub image: String,
    pub body: String,
}

impl BlogDraft {
    pub fn new(title: impl Into<String>, image: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
            body: body.into(),
        }
    }

    /// Check field constraints. A post needs a title that is not just whitespace.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("Title must not be blank".to_string()));
        }
        Ok(())
    }

    /// Run the body through the HTML sanitizer, producing the only form the store accepts.
    pub fn sanitize(self) -> CleanDraft {
        CleanDraft {
            title: self.title,
            image: self.image,
            body: sanitize_html(&self.body),
        }
    }
}

/// Blog fields whose body has been sanitized.
///
/// Only [`BlogDraft::sanitize`] builds one, so any value a repository writes has
/// gone through the sanitizer exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanDraft {
    title: String,
    image: String,
    body: String,
}

impl CleanDraft {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Parse a path segment into a blog ID.
pub fn parse_blog_id(raw: &str) -> Result<Uuid, RepoError> {
    Uuid::parse_str(raw).map_err(|_| RepoError::InvalidId(raw.to_string()))
}

//! Data Transfer Objects - request payloads for the blog routes.

use serde::{Deserialize, Serialize};

/// Blog fields nested under the `blog` key of a request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub body: String,
}

/// JSON request body: `{"blog": {"title": .., "image": .., "body": ..}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogEnvelope {
    pub blog: BlogInput,
}

/// URL-encoded form body as posted by the HTML forms (`blog[title]=..&blog[body]=..`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogFormFields {
    #[serde(rename = "blog[title]", default)]
    pub title: String,
    #[serde(rename = "blog[image]", default)]
    pub image: String,
    #[serde(rename = "blog[body]", default)]
    pub body: String,
}

impl From<BlogFormFields> for BlogInput {
    fn from(form: BlogFormFields) -> Self {
        Self {
            title: form.title,
            image: form.image,
            body: form.body,
        }
    }
}

impl From<BlogEnvelope> for BlogInput {
    fn from(envelope: BlogEnvelope) -> Self {
        envelope.blog
    }
}

/// Query string carrying a message back to a form after a rejected submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Notice {
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_missing_fields_default_to_empty() {
        let envelope: BlogEnvelope = serde_json::from_str(r#"{"blog": {"title": "T"}}"#).unwrap();
        let input = BlogInput::from(envelope);
        assert_eq!(input.title, "T");
        assert_eq!(input.image, "");
        assert_eq!(input.body, "");
    }

    #[test]
    fn test_envelope_requires_blog_key() {
        assert!(serde_json::from_str::<BlogEnvelope>(r#"{"title": "T"}"#).is_err());
    }
}

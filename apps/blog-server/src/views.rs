//! HTML views rendered with Tera.
//!
//! Each view is a pure function from a data object to markup: `index`, `new`,
//! `show` and `edit`.

use std::collections::HashMap;
use std::path::Path;

use blog_core::domain::Blog;
use blog_core::sanitize::excerpt;
use tera::{Context, Tera, Value};

const DEFAULT_EXCERPT_LENGTH: usize = 100;

/// `{{ body | excerpt(length=100) }}` - tag-free preview of sanitized markup.
///
/// The output is already entity-encoded and must be followed by `| safe`.
fn excerpt_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let html = tera::try_get_value!("excerpt", "value", String, value);
    let length = match args.get("length") {
        Some(length) => tera::try_get_value!("excerpt", "length", usize, length),
        None => DEFAULT_EXCERPT_LENGTH,
    };
    Ok(Value::String(excerpt(&html, length)))
}

/// Loaded view templates.
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Load every `*.html` template below `template_dir`.
    pub fn load(template_dir: &Path) -> tera::Result<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern.to_string_lossy();

        let mut tera = Tera::new(&pattern_str)?;
        tera.register_filter("excerpt", excerpt_filter);

        let count = tera.get_template_names().count();
        tracing::debug!(count, dir = %template_dir.display(), "loaded templates");

        Ok(Self { tera })
    }

    /// List of all blogs. `notice` is shown above the list when the store could not be read.
    pub fn index(&self, blogs: &[Blog], notice: Option<&str>) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert("blogs", blogs);
        context.insert("notice", &notice);
        self.tera.render("index.html", &context)
    }

    /// Blank creation form.
    pub fn new_form(&self, error: Option<&str>) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert("error", &error);
        self.tera.render("new.html", &context)
    }

    /// A single blog.
    pub fn show(&self, blog: &Blog) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert("blog", blog);
        self.tera.render("show.html", &context)
    }

    /// Edit form pre-populated with `blog`.
    pub fn edit_form(&self, blog: &Blog, error: Option<&str>) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert("blog", blog);
        context.insert("error", &error);
        self.tera.render("edit.html", &context)
    }
}

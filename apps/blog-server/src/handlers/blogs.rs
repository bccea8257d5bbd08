//! Blog resource handlers: index, new, create, show, edit, update, destroy.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{Either, HttpResponse, web};
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::{Blog, BlogDraft, parse_blog_id};
use blog_shared::{BlogEnvelope, BlogFormFields, BlogInput, Notice};

use crate::middleware::error::{AppResult, OrRedirect, see_other};
use crate::state::AppState;

/// Collection route, also the fallback target of every failed operation.
pub const BLOGS_PATH: &str = "/blogs";
/// Creation form route.
pub const NEW_BLOG_PATH: &str = "/blogs/new";

const LIST_UNAVAILABLE: &str = "Blogs could not be loaded right now. Please try again later.";
const BODY_TOO_LARGE: &str = "The post is too long to be saved.";
const BODY_UNREADABLE: &str = "The submitted post could not be read.";

/// Request body of create and update: an HTML form or a JSON envelope.
pub type BlogPayload = Either<web::Form<BlogFormFields>, web::Json<BlogEnvelope>>;

fn blog_path(id: Uuid) -> String {
    format!("{}/{}", BLOGS_PATH, id)
}

fn edit_path(id: Uuid) -> String {
    format!("{}/{}/edit", BLOGS_PATH, id)
}

/// Turn the extracted body into a draft.
///
/// A body that is neither a form nor a `{"blog": {..}}` envelope, or that exceeds the
/// configured limits, is a validation failure so the caller lands back on the form.
fn draft_from(payload: Result<BlogPayload, actix_web::Error>) -> Result<BlogDraft, DomainError> {
    let input: BlogInput = match payload {
        Ok(Either::Left(form)) => form.into_inner().into(),
        Ok(Either::Right(json)) => json.into_inner().into(),
        Err(e) => {
            let status = e.as_response_error().status_code();
            tracing::warn!(error = %e, %status, "Rejected blog body");
            let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
                BODY_TOO_LARGE
            } else {
                BODY_UNREADABLE
            };
            return Err(DomainError::Validation(message.to_owned()));
        }
    };
    Ok(BlogDraft::new(input.title, input.image, input.body))
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

/// Fetch a blog by its raw path segment, treating "no such blog" as an error.
async fn load(state: &AppState, raw_id: &str) -> Result<Blog, DomainError> {
    let id = parse_blog_id(raw_id)?;
    state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "blog",
            id,
        })
}

/// GET /blogs
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    match state.blogs.find_all().await {
        Ok(blogs) => Ok(html(state.views.index(&blogs, None)?)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load blogs");
            let body = state.views.index(&[], Some(LIST_UNAVAILABLE))?;
            Ok(HttpResponse::ServiceUnavailable()
                .content_type(ContentType::html())
                .body(body))
        }
    }
}

/// GET /blogs/new
pub async fn new_form(
    state: web::Data<AppState>,
    notice: web::Query<Notice>,
) -> AppResult<HttpResponse> {
    Ok(html(state.views.new_form(notice.error.as_deref())?))
}

/// POST /blogs
pub async fn create(
    state: web::Data<AppState>,
    payload: Result<BlogPayload, actix_web::Error>,
) -> AppResult<HttpResponse> {
    let draft = draft_from(payload).or_redirect(NEW_BLOG_PATH)?;
    draft.validate().or_redirect(NEW_BLOG_PATH)?;

    let blog = state
        .blogs
        .insert(Blog::new(draft.sanitize()))
        .await
        .or_redirect(NEW_BLOG_PATH)?;

    tracing::info!(blog_id = %blog.id, title = %blog.title, "Blog added");
    Ok(see_other(BLOGS_PATH))
}

/// GET /blogs/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let blog = load(&state, &path).await.or_redirect(BLOGS_PATH)?;
    Ok(html(state.views.show(&blog)?))
}

/// GET /blogs/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
    notice: web::Query<Notice>,
) -> AppResult<HttpResponse> {
    let blog = load(&state, &path).await.or_redirect(BLOGS_PATH)?;
    Ok(html(state.views.edit_form(&blog, notice.error.as_deref())?))
}

/// PUT /blogs/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: Result<BlogPayload, actix_web::Error>,
) -> AppResult<HttpResponse> {
    let id = parse_blog_id(&path).or_redirect(BLOGS_PATH)?;

    let draft = draft_from(payload).or_redirect(edit_path(id))?;
    draft.validate().or_redirect(edit_path(id))?;

    let blog = state
        .blogs
        .update(id, draft.sanitize())
        .await
        .or_redirect(BLOGS_PATH)?;

    tracing::info!(blog_id = %blog.id, "Blog updated");
    Ok(see_other(&blog_path(blog.id)))
}

/// DELETE /blogs/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_blog_id(&path).or_redirect(BLOGS_PATH)?;

    state.blogs.delete(id).await.or_redirect(BLOGS_PATH)?;

    tracing::info!(blog_id = %id, "Blog deleted");
    Ok(see_other(BLOGS_PATH))
}

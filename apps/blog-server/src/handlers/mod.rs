//! HTTP handlers and route configuration.

mod blogs;
mod health;


use actix_web::{HttpResponse, http::header, web};

use blogs::{BLOGS_PATH, NEW_BLOG_PATH};

/// Largest create/update body accepted, for both form and JSON submissions.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// GET / - the blog list is the home page.
pub async fn root() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, BLOGS_PATH))
        .finish()
}

/// Configure all application routes.
///
/// `/blogs/new` is registered before `/blogs/{id}`; resources match in
/// registration order and `new` would otherwise be taken as an id.
///
/// The body extractors share one limit. `Either` buffers through `PayloadConfig`
/// before handing the bytes to `Form` or `Json`, so all three are raised together.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .app_data(web::FormConfig::default().limit(MAX_BODY_BYTES))
        .app_data(web::JsonConfig::default().limit(MAX_BODY_BYTES));

    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::resource(BLOGS_PATH)
                .route(web::get().to(blogs::index))
                .route(web::post().to(blogs::create)),
        )
        .service(web::resource(NEW_BLOG_PATH).route(web::get().to(blogs::new_form)))
        .service(
            web::resource("/blogs/{id}")
                .route(web::get().to(blogs::show))
                .route(web::put().to(blogs::update))
                .route(web::patch().to(blogs::update))
                .route(web::delete().to(blogs::destroy)),
        )
        .service(web::resource("/blogs/{id}/edit").route(web::get().to(blogs::edit_form)));
}

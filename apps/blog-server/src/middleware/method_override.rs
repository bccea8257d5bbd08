//! HTTP verb tunneling for HTML forms.
//!
//! Browsers can only submit `GET` and `POST`. A form that wants to update or delete
//! posts to `/blogs/{id}?_method=PUT` (or `DELETE`), and this middleware rewrites the
//! request method before routing sees it.

use actix_web::{
    Error, web,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::Method,
};
use std::collections::HashMap;
use std::future::{Ready, ready};

/// Query parameter that carries the tunneled verb.
pub const METHOD_OVERRIDE_PARAM: &str = "_method";

/// Decide which method a request should be routed as.
///
/// Only `POST` requests are remapped, and only to `PUT`, `PATCH` or `DELETE`.
/// Returns `None` when the request keeps its original method.
pub fn overridden_method(method: &Method, query: &str) -> Option<Method> {
    if *method != Method::POST {
        return None;
    }

    let params = web::Query::<HashMap<String, String>>::from_query(query).ok()?;
    let requested = params.get(METHOD_OVERRIDE_PARAM)?;

    match requested.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

/// Middleware that applies [`overridden_method`] to every request.
pub struct MethodOverride;

impl<S, B> Transform<S, ServiceRequest> for MethodOverride
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = MethodOverrideService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MethodOverrideService { service }))
    }
}

pub struct MethodOverrideService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MethodOverrideService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if let Some(method) = overridden_method(req.method(), req.query_string()) {
            tracing::debug!(
                from = %req.method(),
                to = %method,
                path = %req.path(),
                "Applying {} override",
                METHOD_OVERRIDE_PARAM
            );
            req.head_mut().method = method;
        }

        self.service.call(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_with_override_is_remapped() {
        assert_eq!(overridden_method(&Method::POST, "_method=PUT"), Some(Method::PUT));
        assert_eq!(overridden_method(&Method::POST, "_method=delete"), Some(Method::DELETE));
        assert_eq!(
            overridden_method(&Method::POST, "x=1&_method=PATCH"),
            Some(Method::PATCH)
        );
    }

    #[test]
    fn test_only_post_is_remapped() {
        assert_eq!(overridden_method(&Method::GET, "_method=DELETE"), None);
        assert_eq!(overridden_method(&Method::PUT, "_method=DELETE"), None);
    }

    #[test]
    fn test_missing_or_unsupported_override_is_ignored() {
        assert_eq!(overridden_method(&Method::POST, ""), None);
        assert_eq!(overridden_method(&Method::POST, "title=x"), None);
        assert_eq!(overridden_method(&Method::POST, "_method=GET"), None);
        assert_eq!(overridden_method(&Method::POST, "_method=CONNECT"), None);
    }

    #[test]
    fn test_override_is_read_from_the_named_param() {
        let query = format!("{}=DELETE", METHOD_OVERRIDE_PARAM);
        assert_eq!(overridden_method(&Method::POST, &query), Some(Method::DELETE));
        assert_eq!(overridden_method(&Method::POST, "method=DELETE"), None);
        assert_eq!(overridden_method(&Method::POST, "_METHOD=DELETE"), None);
    }
}

//! Application assembly shared by the binary and the integration tests.

use actix_cors::Cors;
use actix_web::{http::header, web};

use crate::handlers;
use crate::middleware::error::{json_error_handler, path_error_handler};
use crate::observability::REQUEST_ID_HEADER;
use crate::state::AppState;

/// Register state, extractor configuration, API routes and the upload mount.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let uploads = state.uploads.clone();

        // Blog bodies are streamed by `forms` with their own limits
        cfg.app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .configure(handlers::configure_routes)
            .service(actix_files::Files::new(&uploads.public_path, &uploads.dir));
    }
}

/// CORS policy for the configured frontend origins. `*` allows any origin.
pub fn cors(allowed_origins: &[String]) -> Cors {
    let base = if allowed_origins.iter().any(|origin| origin == "*") {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .supports_credentials()
    };

    base.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![header::HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(3600)
}

//! HTTP handlers and route configuration.

mod auth;
mod blog;
mod comments;
mod health;
mod likes;
mod pages;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/pages")
                    .route("/about", web::get().to(pages::about))
                    .route("/contact", web::get().to(pages::contact)),
            )
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/signup", web::post().to(auth::signup))
                    .route("/signin", web::post().to(auth::signin))
                    .route("/me", web::get().to(auth::me)),
            )
            // Blogs; writes require a bearer token
            .service(
                web::scope("/blog")
                    .route("", web::get().to(blog::list))
                    .route("", web::post().to(blog::create))
                    .route("/{id}", web::get().to(blog::get))
                    .route("/{id}", web::put().to(blog::update))
                    .route("/{id}", web::delete().to(blog::delete)),
            )
            .service(
                web::scope("/likes")
                    .route("/{id}/toggle", web::put().to(likes::toggle))
                    .route("/{id}/count", web::get().to(likes::count)),
            )
            .service(
                web::scope("/comments")
                    .route("/{blog_id}", web::get().to(comments::list))
                    .route("/{blog_id}", web::post().to(comments::add))
                    .route("/{blog_id}/{comment_id}", web::delete().to(comments::delete)),
            ),
    );
}

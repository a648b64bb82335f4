//! HTTP handlers and route configuration.

mod fallback;
mod posts;
mod streams;
mod users;

#[cfg(test)]
mod tests;

use actix_web::{Resource, web};

use crate::middleware::error::{json_error_handler, path_error_handler};

/// Configure all application routes.
///
/// Anything that matches no route, including a known path with an unknown
/// method, falls through to the plain-text 404.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Users (read-only)
        .service(resource("/users").route(web::get().to(users::list_users)))
        .service(resource("/users/{id}").route(web::get().to(users::get_user)))
        // Posts
        .service(resource("/posts").route(web::post().to(posts::create_post)))
        .service(
            resource("/posts/{id}")
                .route(web::get().to(posts::get_post))
                .route(web::delete().to(posts::delete_post)),
        )
        .service(resource("/posts/{id}/publish").route(web::patch().to(posts::publish_post)))
        .service(resource("/posts/{id}/unpublish").route(web::patch().to(posts::unpublish_post)))
        // Stream redirects
        .service(resource("/streams/posts").route(web::get().to(streams::posts_stream)))
        .service(resource("/streams/posts/{uid}").route(web::get().to(streams::post_stream)))
        .default_service(web::to(fallback::not_found));
}

fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::to(fallback::not_found))
}

//! Catch-all for requests no route claims.

use actix_web::{HttpResponse, http::header::ContentType};

pub const NOT_FOUND_BODY: &str = "
=== 404 Not Found ===
The thing you asked for isn't here.
¯\\_(ツ)_/¯

";

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body(NOT_FOUND_BODY)
}

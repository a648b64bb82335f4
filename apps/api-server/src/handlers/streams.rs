//! Stream redirects - hand clients over to the stream read service.

use actix_web::{HttpResponse, http::header, web};

use crate::middleware::error::AppResult;
use crate::state::AppState;

const POSTS_TOPIC: &str = "posts";
const STREAMS_PATH: &str = "/v1/streams/";

/// GET /streams/posts
pub async fn posts_stream(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    redirect_to_stream(&state, POSTS_TOPIC, None).await
}

/// GET /streams/posts/{uid}
pub async fn post_stream(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    redirect_to_stream(&state, POSTS_TOPIC, Some(path.into_inner())).await
}

async fn redirect_to_stream(
    state: &AppState,
    topic: &str,
    id: Option<i64>,
) -> AppResult<HttpResponse> {
    let stream_id = state.broker.resolve_stream_id(topic, id).await?;
    let location = stream_location(&state.stream_read_url, &stream_id);

    Ok(HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, location))
        .finish())
}

/// `{base}/v1/streams/{stream_id}`; the stream id is used as returned.
pub fn stream_location(base_url: &str, stream_id: &str) -> String {
    format!("{base_url}{STREAMS_PATH}{stream_id}")
}

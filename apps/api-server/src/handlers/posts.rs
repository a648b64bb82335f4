//! Post handlers.

use actix_web::{HttpResponse, web};

use postline_core::domain::NewPost;
use postline_core::error::RepoError;
use postline_shared::dto::CreatePostRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| RepoError::not_found("Post", id))?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create(NewPost {
            title: req.title,
            content: req.content,
            author_id: req.author_id,
            status: req.status.into(),
        })
        .await?;

    tracing::info!(post_id = post.id, author_id = post.author_id, "Post created");
    Ok(HttpResponse::Ok().json(post))
}

/// PATCH /posts/{id}/publish
pub async fn publish_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let post = state.posts.publish(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PATCH /posts/{id}/unpublish
pub async fn unpublish_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let post = state.posts.unpublish(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

//! User handlers.

use actix_web::{HttpResponse, web};

use postline_core::error::RepoError;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /users/{id}
pub async fn get_user(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| RepoError::not_found("User", id))?;

    Ok(HttpResponse::Ok().json(user))
}

//! Comment handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogsite_core::domain::BlogMutation;
use blogsite_core::ports::BlogRepository;
use blogsite_shared::dto::CommentRequest;

use super::blog::load_blog;
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::presenter::Authors;
use crate::state::AppState;

/// POST /api/comments/{blog_id}
///
/// Responds with the blog's full comment list, oldest first.
pub async fn add(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let blog_id = path.into_inner();
    let (blog, _) = state
        .blogs
        .apply(
            blog_id,
            BlogMutation::AddComment {
                author_id: identity.user_id,
                text: body.into_inner().text,
            },
        )
        .await?;

    tracing::debug!(blog_id = %blog_id, "Comment added");

    let authors = Authors::load(state.users.as_ref(), &[&blog]).await?;
    Ok(HttpResponse::Created().json(authors.comments(&blog)))
}

/// GET /api/comments/{blog_id}
pub async fn list(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let blog = load_blog(&state, path.into_inner()).await?;
    let authors = Authors::load(state.users.as_ref(), &[&blog]).await?;
    Ok(HttpResponse::Ok().json(authors.comments(&blog)))
}

/// DELETE /api/comments/{blog_id}/{comment_id}
///
/// Only the comment's author may delete it. Responds with the remaining comments.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (blog_id, comment_id) = path.into_inner();
    let (blog, _) = state
        .blogs
        .apply(
            blog_id,
            BlogMutation::RemoveComment {
                user_id: identity.user_id,
                comment_id,
            },
        )
        .await?;

    tracing::debug!(blog_id = %blog_id, comment_id = %comment_id, "Comment deleted");

    let authors = Authors::load(state.users.as_ref(), &[&blog]).await?;
    Ok(HttpResponse::Ok().json(authors.comments(&blog)))
}

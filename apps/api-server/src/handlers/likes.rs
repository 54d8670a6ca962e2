//! Like toggling and counting.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogsite_core::domain::{BlogMutation, MutationOutcome};
use blogsite_core::ports::BlogRepository;
use blogsite_shared::dto::{LikeCountResponse, LikeToggleResponse};

use super::blog::load_blog;
use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// PUT /api/likes/{id}/toggle
pub async fn toggle(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let (_, outcome) = state
        .blogs
        .apply(
            id,
            BlogMutation::ToggleLike {
                user_id: identity.user_id,
            },
        )
        .await?;

    let toggle = match outcome {
        MutationOutcome::Like(toggle) => toggle,
        other => {
            return Err(AppError::Internal(format!(
                "unexpected outcome for like toggle: {other:?}"
            )));
        }
    };

    tracing::debug!(blog_id = %id, liked = toggle.liked, "Like toggled");

    Ok(HttpResponse::Ok().json(LikeToggleResponse {
        liked: toggle.liked,
        likes_count: toggle.likes_count,
    }))
}

/// GET /api/likes/{id}/count
pub async fn count(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let blog = load_blog(&state, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(LikeCountResponse {
        likes_count: blog.likes_count(),
        liked: identity.0.map(|identity| blog.is_liked_by(identity.user_id)),
    }))
}

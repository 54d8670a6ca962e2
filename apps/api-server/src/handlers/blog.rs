//! Blog CRUD handlers.

use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

use blogsite_core::DomainError;
use blogsite_core::domain::{Blog, BlogChanges, BlogDraft, BlogMutation};
use blogsite_core::ports::{BaseRepository, BlogRepository};
use blogsite_shared::dto::MessageResponse;

use crate::forms::{BlogForm, discard_banner, read_blog_form};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::presenter::Authors;
use crate::state::AppState;

/// Load a blog or fail with 404.
pub(super) async fn load_blog(state: &AppState, id: Uuid) -> AppResult<Blog> {
    state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::blog_not_found(id).into())
}

/// Uploaded files can only be attached through an upload, so removing a
/// blog's banner never touches another blog's file.
fn check_banner_url(state: &AppState, url: Option<&str>, current: Option<&str>) -> AppResult<()> {
    let prefix = format!("{}/", state.uploads.public_path.trim_end_matches('/'));
    match url.map(str::trim) {
        Some(url) if url.starts_with(&prefix) && Some(url) != current => Err(
            AppError::BadRequest("Banner must be an uploaded file or an external URL".to_string()),
        ),
        _ => Ok(()),
    }
}

async fn render(state: &AppState, blog: &Blog) -> AppResult<HttpResponse> {
    let authors = Authors::load(state.users.as_ref(), &[blog]).await?;
    Ok(HttpResponse::Ok().json(authors.blog(blog)))
}

/// GET /api/blog
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.find_all().await?;
    let refs: Vec<&Blog> = blogs.iter().collect();
    let authors = Authors::load(state.users.as_ref(), &refs).await?;

    let body: Vec<_> = blogs.iter().map(|blog| authors.blog(blog)).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/blog/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let blog = load_blog(&state, path.into_inner()).await?;
    render(&state, &blog).await
}

/// POST /api/blog
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    req: HttpRequest,
    payload: web::Payload,
) -> AppResult<HttpResponse> {
    let BlogForm { fields, banner } =
        read_blog_form(&req, payload, state.uploads.max_bytes).await?;

    // Validate before the banner touches the disk
    check_banner_url(&state, fields.banner_image.as_deref(), None)?;
    let mut blog = Blog::create(
        identity.user_id,
        BlogDraft {
            title: fields.title.unwrap_or_default(),
            content: fields.content.unwrap_or_default(),
            category: fields.category,
            banner_image: fields.banner_image,
        },
    )?;

    let stored_banner = match banner {
        Some(upload) => Some(upload.store(state.banners.as_ref()).await?),
        None => None,
    };
    if let Some(url) = &stored_banner {
        blog.banner_image = url.clone();
    }

    let blog = match state.blogs.create(blog).await {
        Ok(blog) => blog,
        Err(err) => {
            discard_banner(state.banners.as_ref(), stored_banner.as_deref()).await;
            return Err(err.into());
        }
    };

    tracing::info!(blog_id = %blog.id, author_id = %blog.author_id, "Blog created");

    let authors = Authors::load(state.users.as_ref(), &[&blog]).await?;
    Ok(HttpResponse::Created().json(authors.blog(&blog)))
}

/// PUT /api/blog/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    req: HttpRequest,
    payload: web::Payload,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    // Ownership is settled before the body is read
    let current = load_blog(&state, id).await?;
    current.ensure_author(identity.user_id)?;

    let BlogForm { fields, banner } =
        read_blog_form(&req, payload, state.uploads.max_bytes).await?;
    let mut changes = BlogChanges {
        title: fields.title,
        content: fields.content,
        category: fields.category,
        banner_image: fields.banner_image,
    };
    changes.parsed_category()?;
    check_banner_url(
        &state,
        changes.banner_image.as_deref(),
        Some(&current.banner_image),
    )?;

    let stored_banner = match banner {
        Some(upload) => Some(upload.store(state.banners.as_ref()).await?),
        None => None,
    };
    if let Some(url) = &stored_banner {
        changes.banner_image = Some(url.clone());
    }

    let mutation = BlogMutation::Edit {
        user_id: identity.user_id,
        changes,
    };
    let blog = match state.blogs.apply(id, mutation).await {
        Ok((blog, _)) => blog,
        Err(err) => {
            discard_banner(state.banners.as_ref(), stored_banner.as_deref()).await;
            return Err(err.into());
        }
    };

    if current.banner_image != blog.banner_image {
        discard_banner(state.banners.as_ref(), Some(&current.banner_image)).await;
    }

    tracing::info!(blog_id = %blog.id, "Blog updated");
    render(&state, &blog).await
}

/// DELETE /api/blog/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let blog = load_blog(&state, id).await?;
    blog.ensure_author(identity.user_id)?;

    state.blogs.delete(id).await.map_err(|err| match err {
        blogsite_core::error::RepoError::NotFound => {
            AppError::from(DomainError::blog_not_found(id))
        }
        other => other.into(),
    })?;

    discard_banner(state.banners.as_ref(), Some(&blog.banner_image)).await;

    tracing::info!(blog_id = %id, "Blog deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Blog deleted")))
}

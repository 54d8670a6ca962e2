//! Authentication handlers.

use actix_web::{HttpResponse, web};

use blogsite_core::domain::{User, normalize_email};
use blogsite_core::error::RepoError;
use blogsite_core::ports::{BaseRepository, UserRepository};
use blogsite_infra::mask_email;
use blogsite_shared::dto::{AuthResponse, MessageResponse, SignInRequest, SignUpRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::presenter;
use crate::state::AppState;

const USER_EXISTS: &str = "User already exists";
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// POST /api/auth/signup
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<SignUpRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Password policy is enforced by the password service when hashing
    if [&req.firstname, &req.lastname, &req.email]
        .iter()
        .any(|value| value.trim().is_empty())
    {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    let email = normalize_email(&req.email);
    if state.users.find_by_email(&email).await?.is_some() {
        return Err(AppError::BadRequest(USER_EXISTS.to_string()));
    }

    // Argon2 is CPU bound
    let passwords = state.passwords.clone();
    let password = req.password;
    let password_hash = web::block(move || passwords.hash(&password))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let user = User::new(
        req.firstname.trim().to_string(),
        req.lastname.trim().to_string(),
        &email,
        password_hash,
    );

    // A concurrent signup can still win the unique index
    let user = state.users.create(user).await.map_err(|err| match err {
        RepoError::Constraint(_) => AppError::BadRequest(USER_EXISTS.to_string()),
        other => other.into(),
    })?;

    tracing::info!(user_id = %user.id, email = %mask_email(&user.email), "User signed up");

    Ok(HttpResponse::Created().json(MessageResponse::new("User created successfully")))
}

/// POST /api/auth/signin
pub async fn signin(
    state: web::Data<AppState>,
    body: web::Json<SignInRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let user = state
        .users
        .find_by_email(&normalize_email(&req.email))
        .await?
        .ok_or_else(|| AppError::BadRequest(INVALID_CREDENTIALS.to_string()))?;

    let passwords = state.passwords.clone();
    let password = req.password;
    let password_hash = user.password_hash.clone();
    let valid = web::block(move || passwords.verify(&password, &password_hash))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    if !valid {
        tracing::debug!(email = %mask_email(&user.email), "Rejected sign-in");
        return Err(AppError::BadRequest(INVALID_CREDENTIALS.to_string()));
    }

    let token = state.tokens.generate_token(user.id, &user.email)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.expiration_seconds().max(0) as u64,
        user: presenter::user(&user),
    }))
}

/// GET /api/auth/me - Protected route
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(presenter::user(&user)))
}

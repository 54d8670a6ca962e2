//! End-to-end API tests against the in-memory store.

use actix_web::http::{StatusCode, header};
use actix_web::{App, test};
use serde_json::{Value, json};

use std::path::{Path, PathBuf};

use api_server::observability::RequestIdMiddleware;
use api_server::{AppState, configure_app};
use blogsite_core::ports::TokenService;
use blogsite_infra::{JwtConfig, JwtTokenService, UploadConfig};

const TEST_SECRET: &str = "integration-test-secret";

fn test_state() -> AppState {
    upload_state(UploadConfig::default().max_bytes).0
}

/// In-memory state writing uploads to a fresh directory, returned alongside.
fn upload_state(max_bytes: usize) -> (AppState, PathBuf) {
    let dir = std::env::temp_dir().join(format!("blogsite-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();

    let state = AppState::in_memory(
        JwtConfig {
            secret: TEST_SECRET.to_string(),
            ..Default::default()
        },
        UploadConfig {
            dir: dir.clone(),
            max_bytes,
            ..Default::default()
        },
    );
    (state, dir)
}

fn stored_files(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

const BOUNDARY: &str = "----blogsite-boundary";

/// Encode text fields and an optional `banner` file as `multipart/form-data`.
fn multipart_body(fields: &[(&str, &str)], banner: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = banner {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"banner\"; \
                 filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_content_type() -> (header::HeaderName, String) {
    (
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={BOUNDARY}"),
    )
}

/// Send a request and decode the JSON body.
macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

/// Sign up and sign in, yielding `(token, user_id)`.
macro_rules! register {
    ($app:expr, $firstname:expr, $email:expr) => {{
        let (status, _) = call!(
            $app,
            test::TestRequest::post()
                .uri("/api/auth/signup")
                .set_json(json!({
                    "firstname": $firstname,
                    "lastname": "Tester",
                    "email": $email,
                    "password": "secret-password",
                }))
        );
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = call!(
            $app,
            test::TestRequest::post()
                .uri("/api/auth/signin")
                .set_json(json!({ "email": $email, "password": "secret-password" }))
        );
        assert_eq!(status, StatusCode::OK);
        (
            body["token"].as_str().unwrap().to_string(),
            body["user"]["id"].as_str().unwrap().to_string(),
        )
    }};
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

macro_rules! create_blog {
    ($app:expr, $token:expr) => {{
        let (status, body) = call!(
            $app,
            test::TestRequest::post()
                .uri("/api/blog")
                .insert_header(bearer(&$token))
                .set_json(json!({ "title": "Hello", "content": "World", "category": "food" }))
        );
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }};
}

#[actix_web::test]
async fn test_health_reports_ok_with_request_id() {
    let app = test::init_service(
        App::new()
            .wrap(RequestIdMiddleware)
            .configure(configure_app(test_state())),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/health")
            .insert_header(("x-request-id", "abc-123"))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "abc-123");
}

#[actix_web::test]
async fn test_signup_signin_and_me() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;

    let (token, user_id) = register!(app, "Ada", "Ada@Example.com");

    let (status, body) = call!(
        app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer(&token))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user_id);
    assert_eq!(body["email"], "ada@example.com");
    assert!(body.get("passwordHash").is_none());
}

#[actix_web::test]
async fn test_signup_rejects_duplicates_and_missing_fields() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;
    register!(app, "Ada", "ada@example.com");

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({
                "firstname": "Other",
                "lastname": "Person",
                "email": "ADA@example.com",
                "password": "x",
            }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User already exists");

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({ "email": "new@example.com", "password": "x" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required");
}

#[actix_web::test]
async fn test_signin_with_wrong_password_is_rejected() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;
    register!(app, "Ada", "ada@example.com");

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/signin")
            .set_json(json!({ "email": "ada@example.com", "password": "wrong" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid email or password");
}

#[actix_web::test]
async fn test_protected_routes_require_bearer_token() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/blog")
            .set_json(json!({ "title": "Hello", "content": "World" }))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call!(
        app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header((header::AUTHORIZATION, "Token abc"))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call!(
        app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer("not-a-jwt"))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_blog_ownership_is_enforced() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;
    let (token_a, user_a) = register!(app, "Ada", "ada@example.com");
    let (token_b, _) = register!(app, "Bob", "bob@example.com");

    let blog_id = create_blog!(app, token_a);

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/blog/{blog_id}"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "food");
    assert_eq!(body["authorId"], user_a);
    assert_eq!(body["author"]["name"], "Ada Tester");
    assert_eq!(
        body["bannerImage"],
        "https://your-default-banner-url.com/default.jpg"
    );

    let (status, _) = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/blog/{blog_id}"))
            .insert_header(bearer(&token_b))
            .set_json(json!({ "title": "Hijacked" }))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call!(
        app,
        test::TestRequest::delete()
            .uri(&format!("/api/blog/{blog_id}"))
            .insert_header(bearer(&token_b))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/blog/{blog_id}"))
            .insert_header(bearer(&token_a))
            .set_json(json!({ "title": "Hello again", "content": "" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Hello again");
    assert_eq!(body["content"], "World");

    let (status, _) = call!(
        app,
        test::TestRequest::delete()
            .uri(&format!("/api/blog/{blog_id}"))
            .insert_header(bearer(&token_a))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/blog/{blog_id}"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_with_unknown_category_is_rejected() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;
    let (token, _) = register!(app, "Ada", "ada@example.com");
    let blog_id = create_blog!(app, token);

    let (status, _) = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/blog/{blog_id}"))
            .insert_header(bearer(&token))
            .set_json(json!({ "category": "gardening" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_missing_and_malformed_blog_ids_are_not_found() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;

    let (status, _) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/blog/{}", uuid::Uuid::new_v4()))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call!(app, test::TestRequest::get().uri("/api/blog/not-a-uuid"));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_list_is_newest_first() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;
    let (token, _) = register!(app, "Ada", "ada@example.com");

    let first = create_blog!(app, token);
    let second = create_blog!(app, token);

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/blog"));
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|blog| blog["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![second.as_str(), first.as_str()]);
}

#[actix_web::test]
async fn test_like_toggle_round_trip() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;
    let (token_a, _) = register!(app, "Ada", "ada@example.com");
    let (token_b, _) = register!(app, "Bob", "bob@example.com");
    let blog_id = create_blog!(app, token_a);

    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/likes/{blog_id}/toggle"))
            .insert_header(bearer(&token_b))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "liked": true, "likesCount": 1 }));

    let (_, body) = call!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/likes/{blog_id}/count"))
            .insert_header(bearer(&token_b))
    );
    assert_eq!(body, json!({ "likesCount": 1, "liked": true }));

    let (_, body) = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/likes/{blog_id}/toggle"))
            .insert_header(bearer(&token_b))
    );
    assert_eq!(body, json!({ "liked": false, "likesCount": 0 }));

    let (_, body) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/likes/{blog_id}/count"))
    );
    assert_eq!(body, json!({ "likesCount": 0 }));
}

#[actix_web::test]
async fn test_comment_lifecycle() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;
    let (token_a, _) = register!(app, "Ada", "ada@example.com");
    let (token_b, user_b) = register!(app, "Bob", "bob@example.com");
    let blog_id = create_blog!(app, token_a);
    let comments_uri = format!("/api/comments/{blog_id}");

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri(&comments_uri)
            .insert_header(bearer(&token_b))
            .set_json(json!({ "text": "   " }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri(&comments_uri)
            .insert_header(bearer(&token_b))
            .set_json(json!({ "text": "First!" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let comments = body.as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["authorId"], user_b);
    assert_eq!(comments[0]["author"]["firstname"], "Bob");
    let first_id = comments[0]["id"].as_str().unwrap().to_string();

    let (_, body) = call!(
        app,
        test::TestRequest::post()
            .uri(&comments_uri)
            .insert_header(bearer(&token_b))
            .set_json(json!({ "text": "Second" }))
    );
    assert_eq!(body.as_array().unwrap().len(), 2);

    // The blog's author does not own Bob's comment
    let (status, _) = call!(
        app,
        test::TestRequest::delete()
            .uri(&format!("{comments_uri}/{first_id}"))
            .insert_header(bearer(&token_a))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = call!(
        app,
        test::TestRequest::delete()
            .uri(&format!("{comments_uri}/{first_id}"))
            .insert_header(bearer(&token_b))
    );
    assert_eq!(status, StatusCode::OK);
    let remaining = body.as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["text"], "Second");

    let (status, _) = call!(
        app,
        test::TestRequest::delete()
            .uri(&format!("{comments_uri}/{first_id}"))
            .insert_header(bearer(&token_b))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = call!(app, test::TestRequest::get().uri(&comments_uri));
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_multipart_create_stores_banner() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;
    let (token, _) = register!(app, "Ada", "ada@example.com");

    let png: &[u8] = &[0x89, b'P', b'N', b'G', 1, 2, 3, 4];
    let payload = multipart_body(
        &[
            ("title", "Pictures"),
            ("content", "Look at this"),
            ("category", "travel"),
        ],
        Some(("beach photo.png", png)),
    );

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/blog")
            .insert_header(bearer(&token))
            .insert_header(multipart_content_type())
            .set_payload(payload)
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Pictures");
    assert_eq!(body["category"], "travel");

    let banner = body["bannerImage"].as_str().unwrap();
    assert!(banner.starts_with("/uploads/"), "{banner}");
    assert!(banner.ends_with("-beach_photo.png"), "{banner}");

    let resp = test::call_service(&app, test::TestRequest::get().uri(banner).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await.as_ref(), png);
}

#[actix_web::test]
async fn test_oversized_banner_is_a_bad_request() {
    let (state, dir) = upload_state(1024);
    let app = test::init_service(App::new().configure(configure_app(state))).await;
    let (token, _) = register!(app, "Ada", "ada@example.com");

    // Just over the limit and far over it get the same answer
    for size in [2_000, 200_000] {
        let payload = multipart_body(
            &[("title", "Big"), ("content", "Picture")],
            Some(("big.png", &vec![7u8; size])),
        );

        let (status, body) = call!(
            app,
            test::TestRequest::post()
                .uri("/api/blog")
                .insert_header(bearer(&token))
                .insert_header(multipart_content_type())
                .set_payload(payload)
        );
        assert_eq!(status, StatusCode::BAD_REQUEST, "size {size}");
        assert_eq!(body["status"], 400);
        assert!(body["detail"].as_str().unwrap().contains("1024 byte limit"));
    }

    assert!(stored_files(&dir).is_empty());

    let (_, body) = call!(app, test::TestRequest::get().uri("/api/blog"));
    assert!(body.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_rejected_create_leaves_no_upload_behind() {
    let (state, dir) = upload_state(UploadConfig::default().max_bytes);
    let app = test::init_service(App::new().configure(configure_app(state))).await;
    let (token, _) = register!(app, "Ada", "ada@example.com");

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/blog")
            .insert_header(bearer(&token))
            .insert_header(multipart_content_type())
            .set_payload(multipart_body(&[], Some(("x.png", b"png"))))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/blog")
            .insert_header(bearer(&token))
            .insert_header(multipart_content_type())
            .set_payload(multipart_body(
                &[("title", "Hello")],
                Some(("x.png", b"png"))
            ))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(stored_files(&dir).is_empty());
}

#[actix_web::test]
async fn test_multipart_update_replaces_banner_and_merges_fields() {
    let (state, dir) = upload_state(UploadConfig::default().max_bytes);
    let app = test::init_service(App::new().configure(configure_app(state))).await;
    let (token, _) = register!(app, "Ada", "ada@example.com");
    let blog_id = create_blog!(app, token);
    let blog_uri = format!("/api/blog/{blog_id}");

    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri(&blog_uri)
            .insert_header(bearer(&token))
            .insert_header(multipart_content_type())
            .set_payload(multipart_body(
                &[("title", "New title"), ("content", "")],
                Some(("first.png", b"first"))
            ))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "New title");
    assert_eq!(body["content"], "World");
    assert_eq!(body["category"], "food");
    let first_banner = body["bannerImage"].as_str().unwrap().to_string();
    assert!(first_banner.ends_with("-first.png"), "{first_banner}");
    assert_eq!(stored_files(&dir).len(), 1);

    // A second upload replaces the first file
    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri(&blog_uri)
            .insert_header(bearer(&token))
            .insert_header(multipart_content_type())
            .set_payload(multipart_body(&[], Some(("second.png", b"second"))))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "New title");
    let files = stored_files(&dir);
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("-second.png"), "{files:?}");

    // Sending the current banner back as text keeps it
    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri(&blog_uri)
            .insert_header(bearer(&token))
            .set_json(json!({ "bannerImage": body["bannerImage"] }))
    );
    assert_eq!(status, StatusCode::OK);
    assert!(body["bannerImage"].as_str().unwrap().ends_with("-second.png"));

    let (status, _) = call!(
        app,
        test::TestRequest::delete()
            .uri(&blog_uri)
            .insert_header(bearer(&token))
    );
    assert_eq!(status, StatusCode::OK);
    assert!(stored_files(&dir).is_empty());
}

#[actix_web::test]
async fn test_rejected_updates_write_no_banner() {
    let (state, dir) = upload_state(UploadConfig::default().max_bytes);
    let app = test::init_service(App::new().configure(configure_app(state))).await;
    let (token_a, _) = register!(app, "Ada", "ada@example.com");
    let (token_b, _) = register!(app, "Bob", "bob@example.com");
    let blog_id = create_blog!(app, token_a);
    let blog_uri = format!("/api/blog/{blog_id}");

    let (status, _) = call!(
        app,
        test::TestRequest::put()
            .uri(&blog_uri)
            .insert_header(bearer(&token_b))
            .insert_header(multipart_content_type())
            .set_payload(multipart_body(
                &[("title", "Hijacked")],
                Some(("evil.png", b"evil"))
            ))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call!(
        app,
        test::TestRequest::put()
            .uri(&blog_uri)
            .insert_header(bearer(&token_a))
            .insert_header(multipart_content_type())
            .set_payload(multipart_body(
                &[("category", "gardening")],
                Some(("garden.png", b"garden"))
            ))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(stored_files(&dir).is_empty());

    let (_, body) = call!(app, test::TestRequest::get().uri(&blog_uri));
    assert_eq!(body["title"], "Hello");
    assert_eq!(body["category"], "food");
}

#[actix_web::test]
async fn test_banner_url_cannot_claim_an_upload() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;
    let (token, _) = register!(app, "Ada", "ada@example.com");

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/blog")
            .insert_header(bearer(&token))
            .set_json(json!({
                "title": "Hello",
                "content": "World",
                "bannerImage": "/uploads/1700000000000-deadbeef-someone-else.png",
            }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/blog")
            .insert_header(bearer(&token))
            .set_json(json!({
                "title": "Hello",
                "content": "World",
                "bannerImage": "https://cdn.example.com/cover.jpg",
            }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["bannerImage"], "https://cdn.example.com/cover.jpg");
}

#[actix_web::test]
async fn test_expired_token_is_unauthorized() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;
    let (_, user_id) = register!(app, "Ada", "ada@example.com");

    let expired = JwtTokenService::new(JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiration_hours: -1,
        ..Default::default()
    })
    .generate_token(user_id.parse().unwrap(), "ada@example.com")
    .unwrap();

    let (status, body) = call!(
        app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer(&expired))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["title"], "Token Expired");

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/blog")
            .insert_header(bearer(&expired))
            .set_json(json!({ "title": "Hello", "content": "World" }))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_signup_with_blank_password_is_rejected() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({
                "firstname": "Ada",
                "lastname": "Lovelace",
                "email": "ada@example.com",
                "password": "   ",
            }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Password is required");
}

#[actix_web::test]
async fn test_static_pages() {
    let app = test::init_service(App::new().configure(configure_app(test_state()))).await;

    let (_, body) = call!(app, test::TestRequest::get().uri("/api/pages/about"));
    assert_eq!(body["title"], "About Us");

    let (_, body) = call!(app, test::TestRequest::get().uri("/api/pages/contact"));
    assert_eq!(body["email"], "support@blogapp.com");
}

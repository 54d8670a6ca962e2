//! Static informational pages.

use actix_web::HttpResponse;

use blogsite_shared::dto::{AboutPage, ContactPage};

/// GET /api/pages/about
pub async fn about() -> HttpResponse {
    HttpResponse::Ok().json(AboutPage {
        title: "About Us".to_string(),
        content: "This is a blogging platform for everyone.".to_string(),
    })
}

/// GET /api/pages/contact
pub async fn contact() -> HttpResponse {
    HttpResponse::Ok().json(ContactPage {
        email: "support@blogapp.com".to_string(),
        phone: "+91-1234567890".to_string(),
    })
}

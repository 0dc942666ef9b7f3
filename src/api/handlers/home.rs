//! Root greeting page.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the greeting page (`templates/home.html`).
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    title: &'static str,
}

/// Renders the static greeting.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {
        title: "KMA L2: Python Saas.",
    }
}

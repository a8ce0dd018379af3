//! Landing page and favicon
//!
//! Small static HTML page listing the available endpoints, for people
//! poking at the service with a browser.

use axum::http::StatusCode;
use axum::response::Html;
use axum::{routing::get, Router};

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>userbase</title>
    <style>
        body { font-family: sans-serif; line-height: 1.6; margin: 40px; }
        code { background: #f5f5f5; padding: 2px 6px; border-radius: 3px; }
        li { margin: 8px 0; }
    </style>
</head>
<body>
    <h1>userbase</h1>
    <p>User directory API. Endpoints:</p>
    <ul>
        <li><code>GET /health</code> - service health</li>
        <li><code>GET /users/</code> - list users (<code>?skip=&amp;limit=</code>)</li>
        <li><code>POST /users/</code> - create a user</li>
        <li><code>GET /users/{id}</code> - get a user by id</li>
        <li><code>PATCH /users/{id}</code> - rename a user</li>
        <li><code>DELETE /users/{id}</code> - delete a user</li>
    </ul>
</body>
</html>
"#;

/// GET /
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /favicon.ico - nothing to serve, but keep browsers quiet
async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Landing page routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/favicon.ico", get(favicon))
}

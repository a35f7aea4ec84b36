use axum::http::StatusCode;

pub async fn greet() -> &'static str {
    "Hello from reflect-cors-rs"
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "no such route")
}

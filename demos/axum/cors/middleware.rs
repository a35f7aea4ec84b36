use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use reflect_cors_rs::constants::header;
use reflect_cors_rs::{CorsDecision, HeaderNameView, Headers, RequestContext};

use super::{AppState, SharedCors};

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let cors: SharedCors = state.cors.clone();

    let decision = {
        let headers = request.headers();
        let names: Vec<&str> = headers.keys().map(HeaderName::as_str).collect();
        let ctx = RequestContext {
            method: request.method().as_str(),
            origin: header_str(headers, header::ORIGIN),
            access_control_request_method: header_str(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_str(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
            header_names: HeaderNameView::Listed(&names),
        };
        cors.check(&ctx).await
    };

    match decision {
        CorsDecision::Preflight(result) => {
            let status =
                StatusCode::from_u16(result.status).unwrap_or(StatusCode::NO_CONTENT);
            let mut response = Response::builder()
                .status(status)
                .body(Body::empty())
                .unwrap();
            apply_headers(response.headers_mut(), &result.headers);
            response
        }
        CorsDecision::Simple(result) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &result.headers);
            response
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

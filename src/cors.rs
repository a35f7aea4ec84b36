use crate::constants::method;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::result::{CorsDecision, PreflightResult, SimpleResult};

const PREFLIGHT_SUCCESS_STATUS: u16 = 204;

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// Options are frozen at construction; the engine is `Send + Sync` and safe
/// to share across concurrent evaluations without synchronization.
pub struct Cors {
    options: CorsOptions,
    wildcard_origin: bool,
}

impl Cors {
    /// Construction cannot fail: every option combination has defined
    /// evaluation semantics.
    pub fn new(options: CorsOptions) -> Self {
        let wildcard_origin = options.origin.has_wildcard_literal();
        Self {
            options,
            wildcard_origin,
        }
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Evaluates one request. Suspends only while an asynchronous origin
    /// predicate resolves.
    pub async fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let is_preflight =
            self.options.preflight && request.method.eq_ignore_ascii_case(method::OPTIONS);

        let verdict = self
            .options
            .origin
            .resolve(self.wildcard_origin, request)
            .await;
        tracing::trace!(
            method = request.method,
            origin = request.origin.unwrap_or_default(),
            preflight = is_preflight,
            verdict = ?verdict,
            "evaluated request origin"
        );

        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_origin_headers(&verdict, request));

        if is_preflight {
            headers.extend(builder.build_methods_header(request.access_control_request_method));
            headers.extend(builder.build_allowed_headers(request, true));
            headers.extend(builder.build_exposed_headers(request));
            headers.extend(builder.build_credentials_header());
            headers.extend(builder.build_max_age_header());

            CorsDecision::Preflight(PreflightResult {
                headers: headers.into_headers(),
                status: PREFLIGHT_SUCCESS_STATUS,
            })
        } else {
            headers.extend(builder.build_methods_header(Some(request.method)));
            headers.extend(builder.build_allowed_headers(request, false));
            headers.extend(builder.build_exposed_headers(request));
            headers.extend(builder.build_credentials_header());

            CorsDecision::Simple(SimpleResult {
                headers: headers.into_headers(),
            })
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;

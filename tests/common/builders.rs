#![allow(dead_code)]

use reflect_cors_rs::constants::method;
use reflect_cors_rs::{
    AllowedHeaders, AllowedMethods, Cors, CorsDecision, CorsOptions, ExposedHeaders,
    HeaderNameView, Origin, RequestContext,
};

#[derive(Default)]
pub struct CorsBuilder {
    origin: Option<Origin>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
    exposed_headers: Option<ExposedHeaders>,
    credentials: Option<bool>,
    max_age: Option<u64>,
    preflight: Option<bool>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn methods(mut self, methods: AllowedMethods) -> Self {
        self.methods = Some(methods);
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allowed_headers = Some(headers);
        self
    }

    pub fn exposed_headers(mut self, headers: ExposedHeaders) -> Self {
        self.exposed_headers = Some(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn preflight(mut self, enabled: bool) -> Self {
        self.preflight = Some(enabled);
        self
    }

    pub fn build(self) -> Cors {
        let defaults = CorsOptions::default();

        Cors::new(CorsOptions {
            origin: self.origin.unwrap_or(defaults.origin),
            methods: self.methods.unwrap_or(defaults.methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(defaults.exposed_headers),
            credentials: self.credentials.unwrap_or(defaults.credentials),
            max_age: self.max_age.unwrap_or(defaults.max_age),
            preflight: self.preflight.unwrap_or(defaults.preflight),
        })
    }
}

#[derive(Default)]
pub struct SimpleRequestBuilder {
    method: Option<String>,
    origin: Option<String>,
    header_names: Vec<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn header_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub async fn check(self, cors: &Cors) -> CorsDecision {
        let SimpleRequestBuilder {
            method: request_method,
            origin,
            header_names,
        } = self;
        let request_method = request_method.unwrap_or_else(|| method::GET.to_string());
        let name_refs: Vec<&str> = header_names.iter().map(String::as_str).collect();

        let ctx = RequestContext {
            method: &request_method,
            origin: origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
            header_names: if name_refs.is_empty() {
                HeaderNameView::Empty
            } else {
                HeaderNameView::Listed(&name_refs)
            },
        };
        cors.check(&ctx).await
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
    header_names: Vec<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn header_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub async fn check(self, cors: &Cors) -> CorsDecision {
        let PreflightRequestBuilder {
            origin,
            request_method,
            request_headers,
            header_names,
        } = self;
        let name_refs: Vec<&str> = header_names.iter().map(String::as_str).collect();

        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: origin.as_deref(),
            access_control_request_method: request_method.as_deref(),
            access_control_request_headers: request_headers.as_deref(),
            header_names: if name_refs.is_empty() {
                HeaderNameView::Empty
            } else {
                HeaderNameView::Listed(&name_refs)
            },
        };
        cors.check(&ctx).await
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}

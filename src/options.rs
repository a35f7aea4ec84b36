use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;

#[derive(Clone)]
pub struct CorsOptions {
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    /// Preflight cache lifetime in seconds; `0` omits the header.
    pub max_age: u64,
    /// When disabled, `OPTIONS` requests are evaluated on the simple path and
    /// fall through to host routing.
    pub preflight: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::Any,
            methods: AllowedMethods::Mirror,
            allowed_headers: AllowedHeaders::Mirror,
            exposed_headers: ExposedHeaders::Mirror,
            credentials: true,
            max_age: 5,
            preflight: true,
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

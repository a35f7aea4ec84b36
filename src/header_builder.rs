use crate::allowed_headers::AllowedHeaders;
use crate::constants::header;
use crate::context::RequestContext;
use crate::exposed_headers::ExposedHeaders;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginVerdict;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build_origin_headers(
        &self,
        verdict: &OriginVerdict,
        request: &RequestContext<'_>,
    ) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        let declared = request.origin.unwrap_or("");
        let mirrored = if declared.is_empty() { "*" } else { declared };

        match verdict {
            OriginVerdict::Any => {
                headers.add_vary("*");
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, mirrored);
            }
            OriginVerdict::Wildcard => {
                headers.add_vary("*");
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
            }
            OriginVerdict::Mirror => {
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, mirrored);
            }
            OriginVerdict::Collected(joined) => {
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, joined.clone());
            }
            OriginVerdict::Disallow => {
                headers.add_vary(header::ORIGIN);
            }
        }

        headers
    }

    /// `requested` is the method under test: the request method on the simple
    /// path, the `Access-Control-Request-Method` value on the preflight path.
    pub(crate) fn build_methods_header(&self, requested: Option<&str>) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.options.methods.header_value(requested) {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers
    }

    pub(crate) fn build_allowed_headers(
        &self,
        request: &RequestContext<'_>,
        preflight: bool,
    ) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        match &self.options.allowed_headers {
            AllowedHeaders::Mirror => {
                let value = if preflight {
                    request
                        .access_control_request_headers
                        .map(str::trim)
                        .filter(|value| !value.is_empty())
                        .map(str::to_string)
                } else {
                    request.header_names.joined()
                };
                if let Some(value) = value {
                    headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
                }
            }
            other => {
                if let Some(value) = other.fixed_value() {
                    headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
                }
            }
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        match &self.options.exposed_headers {
            ExposedHeaders::Mirror => {
                if let Some(value) = request.header_names.joined() {
                    headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
                }
            }
            other => {
                if let Some(value) = other.fixed_value() {
                    headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
                }
            }
        }
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.options.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.options.max_age > 0 {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, self.options.max_age.to_string());
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;

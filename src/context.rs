/// Borrowed view of the parts of an incoming request the engine reads.
///
/// The host extracts these once per request; the engine never touches the
/// request object itself.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
    pub header_names: HeaderNameView<'a>,
}

/// How the host exposes the request's header names for mirror mode.
///
/// Hosts that already hold a serialized name list hand it over verbatim;
/// everyone else lists the names and the engine joins them. Both strategies
/// produce the same comma-space separated value.
#[derive(Debug, Clone, Copy, Default)]
pub enum HeaderNameView<'a> {
    #[default]
    Empty,
    /// A pre-joined, comma-space separated name list.
    Serialized(&'a str),
    /// Individual names in the host's iteration order.
    Listed(&'a [&'a str]),
}

impl HeaderNameView<'_> {
    pub(crate) fn joined(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Serialized(value) => {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Self::Listed(names) => {
                let mut joined = String::new();
                for name in names.iter().map(|name| name.trim()) {
                    if name.is_empty() {
                        continue;
                    }
                    if !joined.is_empty() {
                        joined.push_str(", ");
                    }
                    joined.push_str(name);
                }
                (!joined.is_empty()).then_some(joined)
            }
        }
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

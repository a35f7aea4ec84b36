/// Configuration for the `Access-Control-Allow-Headers` response header.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AllowedHeaders {
    /// Echo the request's header names on the simple path and the literal
    /// `Access-Control-Request-Headers` value on the preflight path.
    #[default]
    Mirror,
    /// Emit a pre-joined header list verbatim.
    Exact(String),
    /// Emit nothing.
    Disabled,
}

impl AllowedHeaders {
    pub fn mirror() -> Self {
        Self::Mirror
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    /// Joins the list once, at configuration time.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exact(
            values
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    pub fn disabled() -> Self {
        Self::Disabled
    }

    pub(crate) fn fixed_value(&self) -> Option<&str> {
        match self {
            Self::Exact(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AllowedMethods {
    /// Echo the method under test: the request's own method on the simple
    /// path, the requested preflight method on the preflight path.
    #[default]
    Mirror,
    /// Emit the wildcard `*`.
    Any,
    /// Emit a pre-joined method list verbatim.
    Exact(String),
    /// Emit nothing.
    Disabled,
}

impl AllowedMethods {
    pub fn mirror() -> Self {
        Self::Mirror
    }

    pub fn any() -> Self {
        Self::Any
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

    /// No method under test means no header, whatever the configuration.
    pub(crate) fn header_value(&self, requested: Option<&str>) -> Option<String> {
        let requested = requested.map(str::trim).filter(|value| !value.is_empty())?;

        match self {
            Self::Mirror => Some(requested.to_string()),
            Self::Any => Some("*".to_string()),
            Self::Exact(value) if value.is_empty() => None,
            Self::Exact(value) => Some(value.clone()),
            Self::Disabled => None,
        }
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;

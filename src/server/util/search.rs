//! Case-insensitive substring search used by the admin list endpoints.

/// Normalized search term; blank input means "match everything".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchTerm(Option<String>);

impl SearchTerm {
    /// Build a term from an optional query parameter, trimming and lowercasing it.
    pub fn new(raw: Option<&str>) -> Self {
        Self(
            raw.map(|term| term.trim().to_lowercase())
                .filter(|term| !term.is_empty()),
        )
    }

    /// True when the term is blank or contained in any of `fields`.
    pub fn matches<'a>(&self, fields: impl IntoIterator<Item = Option<&'a str>>) -> bool {
        let Some(term) = &self.0 else {
            return true;
        };

        fields
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(term.as_str()))
    }
}

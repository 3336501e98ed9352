//! Query string construction

use std::fmt::Display;

/// An ordered list of query parameters.
///
/// Keys may repeat (`ingredients=a&ingredients=b`); absent optional values
/// are simply never pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty query parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a parameter.
    pub fn push(&mut self, key: &str, value: impl Display) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Appends a parameter if a value is present.
    pub fn push_opt<V: Display>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Appends one parameter per value under the same key.
    pub fn push_all<V: Display>(&mut self, key: &str, values: impl IntoIterator<Item = V>) {
        for value in values {
            self.push(key, value);
        }
    }

    /// Returns true if no parameters were pushed.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the URL-encoded query string, without a leading `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        // Encoding a list of string pairs cannot fail.
        serde_urlencoded::to_string(&self.pairs).unwrap_or_default()
    }

    /// Appends the encoded query string to `path`, adding `?` only when needed.
    #[must_use]
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", self.encode())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_query_leaves_path_untouched() {
        let params = QueryParams::new();
        assert_eq!(params.append_to("/api/v1/recipes"), "/api/v1/recipes");
    }

    #[test]
    fn test_repeated_keys_and_optional_values() {
        let mut params = QueryParams::new();
        params.push_opt("max_calories", Some(500));
        params.push_opt::<u32>("max_prep_time", None);
        params.push_all("ingredients", ["milk", "egg yolk"]);

        assert_eq!(
            params.append_to("/api/v1/recipes"),
            "/api/v1/recipes?max_calories=500&ingredients=milk&ingredients=egg+yolk"
        );
    }

    #[test]
    fn test_values_are_escaped() {
        let mut params = QueryParams::new();
        params.push("name", "mac & cheese");
        assert_eq!(params.encode(), "name=mac+%26+cheese");
    }
}

//! Navigable locations
//!
//! A location is the in-process equivalent of a browser URL: a path plus an ordered
//! list of query pairs. Locations are values; navigation replaces them wholesale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::{form_urlencoded, Url};

/// Base used to resolve relative locations with the `url` crate.
const LOCATION_BASE: &str = "storefront://app";

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("invalid location '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    path: String,
    params: Vec<(String, String)>,
}

impl Location {
    /// The bare root path without any query pairs.
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            params: vec![],
        }
    }

    pub fn new(path: impl Into<String>, params: Vec<(String, String)>) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn has_query(&self) -> bool {
        !self.params.is_empty()
    }

    /// First value for `key`, if present.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns a new location with `key` set to `value`.
    ///
    /// An existing pair keeps its position; every other pair is preserved as is.
    pub fn with_param(&self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut params = self.params.clone();
        match params.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => params.push((key.to_string(), value)),
        }
        Self {
            path: self.path.clone(),
            params,
        }
    }

    /// Encoded query string without the leading `?`.
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query_string())
        }
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |source| LocationError::Parse {
            input: s.to_string(),
            source,
        };
        let base = Url::parse(LOCATION_BASE).map_err(parse_err)?;
        let url = base.join(s.trim()).map_err(parse_err)?;
        let params = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let path = match url.path() {
            "" => "/".to_string(),
            path => path.to_string(),
        };
        Ok(Self { path, params })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_root_has_no_query() {
        let root = Location::root();
        assert_eq!(root.to_string(), "/");
        assert!(!root.has_query());
    }

    #[test]
    fn test_parse_relative_location() -> Result<(), LocationError> {
        let location: Location = "/?page=2&category=shoes".parse()?;
        assert_eq!(location.path(), "/");
        assert_eq!(location.param("page"), Some("2"));
        assert_eq!(location.param("category"), Some("shoes"));
        assert_eq!(location.param("search"), None);
        Ok(())
    }

    #[test]
    fn test_parse_decodes_values() -> Result<(), LocationError> {
        let location: Location = "/?search=red+running%20shoes".parse()?;
        assert_eq!(location.param("search"), Some("red running shoes"));
        Ok(())
    }

    #[test]
    fn test_with_param_replaces_in_place() -> Result<(), LocationError> {
        let location: Location = "/?page=1&category=shoes&extra=x".parse()?;
        let next = location.with_param("page", "5");
        assert_eq!(next.to_string(), "/?page=5&category=shoes&extra=x");
        // The source location is untouched
        assert_eq!(location.param("page"), Some("1"));
        Ok(())
    }

    #[test]
    fn test_with_param_appends_missing_key() -> Result<(), LocationError> {
        let location: Location = "/?category=shoes".parse()?;
        let next = location.with_param("page", "5");
        assert_eq!(next.param("page"), Some("5"));
        assert_eq!(next.param("category"), Some("shoes"));
        Ok(())
    }

    #[test]
    fn test_display_round_trips_through_parse() -> Result<(), LocationError> {
        let location = Location::new(
            "/",
            vec![("search".to_string(), "a&b c".to_string())],
        );
        let reparsed: Location = location.to_string().parse()?;
        assert_eq!(reparsed, location);
        Ok(())
    }
}

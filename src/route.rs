//! Navigation intents.
//!
//! Parses URL-style intents such as `results?q=microgravity` into typed routes.

use crate::error::RouteError;

/// A destination the application can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing view
    Home,
    /// Search prompt view
    Search,
    /// About view
    About,
    /// Mock results view
    Results {
        /// Free-text query, shown but never used to filter
        query: String,
        /// Raw sort key name, if the intent carried one
        sort: Option<String>,
    },
}

impl Route {
    /// Build a results route for a query with the default ordering.
    pub fn results(query: impl Into<String>) -> Self {
        Route::Results {
            query: query.into(),
            sort: None,
        }
    }

    /// Parse a navigation intent.
    ///
    /// # Arguments
    /// * `intent` - e.g. `"home"`, `"/about"`, `"results?q=bone+loss&sort=year"`
    ///
    /// # Returns
    /// * `Result<Route, RouteError>` - Parsed route or error
    ///
    /// # Details
    /// The leading `/` is optional and the empty intent means home.
    /// Parameters other than `q` and `sort` are ignored.
    pub fn parse(intent: &str) -> Result<Self, RouteError> {
        let intent = intent.trim();
        let (path, params) = match intent.split_once('?') {
            Some((path, params)) => (path, params),
            None => (intent, ""),
        };

        match path.trim_matches('/').to_ascii_lowercase().as_str() {
            "" | "home" => Ok(Route::Home),
            "search" => Ok(Route::Search),
            "about" => Ok(Route::About),
            "results" => {
                let mut query = String::new();
                let mut sort = None;
                for pair in params.split('&').filter(|p| !p.is_empty()) {
                    let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                    match key {
                        "q" => query = decode_param(key, value)?,
                        "sort" => sort = Some(decode_param(key, value)?),
                        _ => {}
                    }
                }
                Ok(Route::Results { query, sort })
            }
            _ => Err(RouteError::UnknownIntent(path.to_string())),
        }
    }

    /// Render the canonical intent string for this route.
    pub fn to_intent(&self) -> String {
        match self {
            Route::Home => "home".to_string(),
            Route::Search => "search".to_string(),
            Route::About => "about".to_string(),
            Route::Results { query, sort } => {
                let mut intent = format!("results?q={}", urlencoding::encode(query));
                if let Some(sort) = sort {
                    intent.push_str("&sort=");
                    intent.push_str(&urlencoding::encode(sort));
                }
                intent
            }
        }
    }
}

/// Decode a form-style parameter value (`+` is a space).
fn decode_param(key: &str, value: &str) -> Result<String, RouteError> {
    urlencoding::decode(&value.replace('+', " "))
        .map(|decoded| decoded.into_owned())
        .map_err(|_| RouteError::InvalidEncoding {
            param: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_intents() {
        assert_eq!(Route::parse("").unwrap(), Route::Home);
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(Route::parse("home").unwrap(), Route::Home);
        assert_eq!(Route::parse("/search").unwrap(), Route::Search);
        assert_eq!(Route::parse("About").unwrap(), Route::About);
    }

    #[test]
    fn test_parse_results_query() {
        assert_eq!(
            Route::parse("/results?q=bone%20loss").unwrap(),
            Route::results("bone loss")
        );
        assert_eq!(
            Route::parse("results?q=mars+gravity&page=2").unwrap(),
            Route::results("mars gravity")
        );
        assert_eq!(Route::parse("results").unwrap(), Route::results(""));
    }

    #[test]
    fn test_parse_results_sort() {
        assert_eq!(
            Route::parse("results?sort=year&q=plants").unwrap(),
            Route::Results {
                query: "plants".to_string(),
                sort: Some("year".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Route::parse("/missions"),
            Err(RouteError::UnknownIntent("/missions".to_string()))
        );
        assert_eq!(
            Route::parse("results?q=%FF"),
            Err(RouteError::InvalidEncoding {
                param: "q".to_string()
            })
        );
    }

    #[test]
    fn test_intent_round_trip() {
        let routes = [
            Route::Home,
            Route::About,
            Route::results("radiation & stem cells? 100%"),
            Route::Results {
                query: "ISS".to_string(),
                sort: Some("citations".to_string()),
            },
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.to_intent()).unwrap(), route);
        }
    }
}

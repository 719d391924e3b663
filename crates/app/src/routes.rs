//! Client-side route table
//!
//! Maps a path (with optional query string) to one of the six pages.
//! Unknown paths resolve to `None`; there is no not-found page.

use std::fmt;

use ammaar_catalog::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    /// Projects listing, seeded with the `?filter=` category
    Projects { filter: Category },
    Gallery,
    Contact,
    Login,
}

impl Route {
    /// Resolve a path such as `/projects?filter=Farmland`
    pub fn parse(path_and_query: &str) -> Option<Self> {
        let without_fragment = path_and_query.split('#').next().unwrap_or_default();
        let (path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (without_fragment, None),
        };

        let trimmed = path.trim_end_matches('/');
        let route = match trimmed {
            "" => Route::Home,
            "/about" => Route::About,
            "/projects" => Route::Projects {
                filter: Category::from_query(query_param(query, "filter").as_deref()),
            },
            "/gallery" => Route::Gallery,
            "/contact" => Route::Contact,
            "/login" => Route::Login,
            _ => {
                tracing::debug!(path = %path_and_query, "No route matched");
                return None;
            }
        };
        Some(route)
    }

    /// Canonical link for this route
    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Projects {
                filter: Category::All,
            } => "/projects".to_string(),
            Route::Projects { filter } => {
                format!("/projects?filter={}", urlencoding::encode(filter.label()))
            }
            Route::Gallery => "/gallery".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Login => "/login".to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects { .. } => "Projects",
            Route::Gallery => "Gallery",
            Route::Contact => "Contact",
            Route::Login => "Login",
        }
    }

    /// Navbar and footer are rendered on every page except login
    pub fn shows_chrome(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Navbar entries in display order
    pub fn nav_items() -> [Route; 5] {
        [
            Route::Home,
            Route::About,
            Route::Projects {
                filter: Category::All,
            },
            Route::Gallery,
            Route::Contact,
        ]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// First value of `key` in a raw query string, percent-decoded
fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| {
            let v = v.replace('+', " ");
            urlencoding::decode(&v).ok().map(|decoded| decoded.into_owned())
        })
}

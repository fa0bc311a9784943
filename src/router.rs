// Path router.
// Maps the two path patterns to views: `/` and `/product/:id`.

use std::fmt;

/// A resolved route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Product grid at `/`.
    Listing,
    /// Single product at `/product/<id>`.
    Product { id: u64 },
}

impl Route {
    /// Canonical path for this route. Navigation always produces this form.
    pub fn path(&self) -> String {
        match self {
            Route::Listing => "/".to_string(),
            Route::Product { id } => format!("/product/{}", id),
        }
    }

    /// Short label for the navigation trail.
    pub fn label(&self) -> String {
        match self {
            Route::Listing => "Products".to_string(),
            Route::Product { id } => format!("#{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Resolve a path to a route. Returns None for unmatched paths.
///
/// The `product` segment matches case-insensitively; the id must be a
/// decimal integer. A single trailing slash is ignored.
pub fn resolve(path: &str) -> Option<Route> {
    let path = path.trim();
    if !path.starts_with('/') {
        return None;
    }
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return Some(Route::Listing);
    }

    let mut segments = trimmed[1..].split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(literal), Some(id), None) if literal.eq_ignore_ascii_case("product") => {
            if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            id.parse().ok().map(|id| Route::Product { id })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root() {
        assert_eq!(resolve("/"), Some(Route::Listing));
        assert_eq!(resolve(" / "), Some(Route::Listing));
    }

    #[test]
    fn test_resolve_product() {
        assert_eq!(resolve("/product/42"), Some(Route::Product { id: 42 }));
        assert_eq!(resolve("/product/42/"), Some(Route::Product { id: 42 }));
        assert_eq!(resolve("/Product/42"), Some(Route::Product { id: 42 }));
    }

    #[test]
    fn test_resolve_unmatched() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("product/1"), None);
        assert_eq!(resolve("/product"), None);
        assert_eq!(resolve("/product/"), None);
        assert_eq!(resolve("/product/abc"), None);
        assert_eq!(resolve("/product/-1"), None);
        assert_eq!(resolve("/product/+1"), None);
        assert_eq!(resolve("/product/1/reviews"), None);
        assert_eq!(resolve("/cart"), None);
        assert_eq!(resolve("//"), None);
    }

    #[test]
    fn test_path_round_trips_through_resolve() {
        for route in [Route::Listing, Route::Product { id: 42 }] {
            assert_eq!(resolve(&route.path()), Some(route));
        }
        assert_eq!(Route::Product { id: 42 }.path(), "/product/42");
    }
}

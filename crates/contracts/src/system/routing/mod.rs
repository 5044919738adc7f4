pub mod guard;

use serde::{Deserialize, Serialize};

use crate::system::access::PageKey;

pub use guard::{resolve, resolve_path, GuardOutcome};

pub const LOGIN_PATH: &str = "/login";

/// Every client-side route except the not-found catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppRoute {
    Login,
    Root,
    Page(PageKey),
}

impl AppRoute {
    pub fn from_path(path: &str) -> Option<AppRoute> {
        let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(AppRoute::Root),
            LOGIN_PATH => Some(AppRoute::Login),
            _ => PageKey::ALL
                .into_iter()
                .find(|page| page.path() == trimmed)
                .map(AppRoute::Page),
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Login => LOGIN_PATH,
            AppRoute::Root => "/",
            AppRoute::Page(page) => page.path(),
        }
    }

    pub fn page(self) -> Option<PageKey> {
        match self {
            AppRoute::Page(page) => Some(page),
            AppRoute::Login | AppRoute::Root => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_parses_back() {
        assert_eq!(AppRoute::from_path("/login"), Some(AppRoute::Login));
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Root));
        for page in PageKey::ALL {
            assert_eq!(AppRoute::from_path(page.path()), Some(AppRoute::Page(page)));
        }
    }

    #[test]
    fn test_trailing_slash_and_query_are_ignored() {
        assert_eq!(
            AppRoute::from_path("/resident/health/"),
            Some(AppRoute::Page(PageKey::ResidentHealth))
        );
        assert_eq!(
            AppRoute::from_path("/users?tab=roles"),
            Some(AppRoute::Page(PageKey::Users))
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(AppRoute::from_path("/reports"), None);
        assert_eq!(AppRoute::from_path("/resident/unknown"), None);
        assert_eq!(AppRoute::from_path("/Dashboard"), None);
    }
}

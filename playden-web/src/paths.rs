//! Helpers for constructing shop API and router URLs that respect the
//! deployment base path.
///
/// When `PLAYDEN_API_URL` is set at compile time (e.g., `https://lounge.example`
/// or `/lounge` when the API is served under a subdirectory), generated URLs
/// are prefixed accordingly. Local builds without it fall back to
/// root-anchored paths.
#[must_use]
pub fn api_path(relative: &str) -> String {
    api_path_with_base(relative, option_env!("PLAYDEN_API_URL").unwrap_or(""))
}

/// Base path for the router (e.g., `/play` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn api_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{api_path, router_base};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(api_path("shop/games.php?id=7"), "/shop/games.php?id=7");
        assert_eq!(api_path("/shop/games.php?id=7"), "/shop/games.php?id=7");
    }

    #[test]
    fn builds_paths_with_api_base() {
        assert_eq!(
            super::api_path_with_base("shop/payment_methods.php", "https://lounge.example"),
            "https://lounge.example/shop/payment_methods.php"
        );
        assert_eq!(
            super::api_path_with_base("/shop/payment_methods.php", "/lounge/"),
            "/lounge/shop/payment_methods.php"
        );
    }

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            super::router_base_with_base("/play/"),
            Some(String::from("/play"))
        );
    }
}

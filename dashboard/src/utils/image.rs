//! # Profile Image URLs
//!
//! Deterministic URL construction for profile images.
//!
//! The image host serves uploads under a single `/uploads/` prefix; this is
//! the agreed contract with the hosting service. Server-stored paths may
//! still carry the legacy `/upload/` prefix, which is rewritten here rather
//! than probed for at request time.

/// Resolve a server-stored image path against the image host.
///
/// Absolute URLs pass through untouched. Everything else is normalized to
/// `<base>/uploads/<path>`.
pub fn profile_image_url(image_base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let base = image_base_url.trim_end_matches('/');
    let relative = path.trim_start_matches('/');

    let normalized = if let Some(rest) = relative.strip_prefix("uploads/") {
        rest
    } else if let Some(rest) = relative.strip_prefix("upload/") {
        rest
    } else {
        relative
    };

    format!("{}/uploads/{}", base, normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://img.cashlink.example";

    #[test]
    fn test_plain_filename() {
        assert_eq!(
            profile_image_url(BASE, "avatars/a1.png"),
            "https://img.cashlink.example/uploads/avatars/a1.png"
        );
    }

    #[test]
    fn test_legacy_upload_prefix_rewritten() {
        assert_eq!(
            profile_image_url(BASE, "/upload/avatars/a1.png"),
            "https://img.cashlink.example/uploads/avatars/a1.png"
        );
    }

    #[test]
    fn test_canonical_prefix_kept() {
        assert_eq!(
            profile_image_url(BASE, "/uploads/avatars/a1.png"),
            "https://img.cashlink.example/uploads/avatars/a1.png"
        );
    }

    #[test]
    fn test_absolute_url_passthrough() {
        assert_eq!(
            profile_image_url(BASE, "https://cdn.example.com/x.png"),
            "https://cdn.example.com/x.png"
        );
    }
}

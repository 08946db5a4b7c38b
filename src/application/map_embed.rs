use once_cell::sync::Lazy;
use regex::Regex;

static SRC_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"src=["']([^"']+)["']"#).expect("src pattern"));

const EMBED_MARKER: &str = "google.com/maps/embed";

/// Pulls a maps embed URL out of sheet content.
///
/// Authors sometimes paste the whole iframe snippet instead of the bare
/// URL; in that case the `src` attribute is extracted. Anything that is
/// not an embed URL yields `None`.
pub fn extract_maps_embed_url(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let candidate = match SRC_ATTR.captures(input) {
        Some(caps) => caps.get(1).map(|m| m.as_str())?,
        None => input,
    };

    if is_valid_maps_embed_url(candidate) {
        Some(candidate.to_string())
    } else {
        None
    }
}

pub fn is_valid_maps_embed_url(url: &str) -> bool {
    url.contains(EMBED_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_url_passes_through() {
        let url = "https://www.google.com/maps/embed?pb=!1m18";
        assert_eq!(extract_maps_embed_url(url).as_deref(), Some(url));
    }

    #[test]
    fn test_iframe_html_yields_src_url() {
        let html = r#"<iframe src="https://www.google.com/maps/embed?pb=!1m18" width="600"></iframe>"#;
        assert_eq!(
            extract_maps_embed_url(html).as_deref(),
            Some("https://www.google.com/maps/embed?pb=!1m18")
        );
    }

    #[test]
    fn test_single_quoted_src_attribute() {
        let html = "<iframe src='https://www.google.com/maps/embed?pb=!2m3'></iframe>";
        assert_eq!(
            extract_maps_embed_url(html).as_deref(),
            Some("https://www.google.com/maps/embed?pb=!2m3")
        );
    }

    #[test]
    fn test_non_maps_url_is_rejected() {
        assert!(extract_maps_embed_url("https://example.com/map").is_none());
        assert!(extract_maps_embed_url(r#"<iframe src="https://example.com/x"></iframe>"#).is_none());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(extract_maps_embed_url("").is_none());
        assert!(extract_maps_embed_url("   ").is_none());
    }
}

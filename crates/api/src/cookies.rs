//! Minimal request cookie parsing.
//!
//! The server only ever reads two cookies (`sid` and `flash`), so a
//! small parser over the `Cookie` header is all that is needed.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Extract the value of the named cookie from the request headers.
///
/// Handles multiple `Cookie` headers and `; `-separated pairs. Returns
/// the first match.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(raw: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static(raw));
        headers
    }

    #[test]
    fn finds_single_cookie() {
        let headers = headers_with_cookie("sid=abc123");
        assert_eq!(cookie_value(&headers, "sid"), Some("abc123"));
    }

    #[test]
    fn finds_cookie_among_many() {
        let headers = headers_with_cookie("theme=dark; sid=abc123; flash=tok");
        assert_eq!(cookie_value(&headers, "sid"), Some("abc123"));
        assert_eq!(cookie_value(&headers, "flash"), Some("tok"));
    }

    #[test]
    fn missing_cookie_is_none() {
        let headers = headers_with_cookie("theme=dark");
        assert_eq!(cookie_value(&headers, "sid"), None);
    }

    #[test]
    fn no_cookie_header_is_none() {
        let headers = HeaderMap::new();
        assert_eq!(cookie_value(&headers, "sid"), None);
    }

    #[test]
    fn name_must_match_exactly() {
        let headers = headers_with_cookie("sid2=nope");
        assert_eq!(cookie_value(&headers, "sid"), None);
    }

    #[test]
    fn reads_across_multiple_cookie_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("sid=abc123"));
        assert_eq!(cookie_value(&headers, "sid"), Some("abc123"));
    }
}

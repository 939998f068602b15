//! URI component encoding and fragment handling.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped by `encodeURIComponent`: everything except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use as a query value or path segment.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// `url` without its fragment (everything from the first `#`).
pub fn strip_fragment(url: &str) -> &str {
    url.split_once('#').map_or(url, |(base, _)| base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_pass_through() {
        assert_eq!(encode_uri_component("aZ09-_.!~*'()"), "aZ09-_.!~*'()");
    }

    #[test]
    fn test_reserved_are_encoded() {
        assert_eq!(
            encode_uri_component("a b&c=d/e?f#g"),
            "a%20b%26c%3Dd%2Fe%3Ff%23g"
        );
        assert_eq!(encode_uri_component("> x\n"), "%3E%20x%0A");
    }

    #[test]
    fn test_multibyte_utf8() {
        assert_eq!(encode_uri_component("é"), "%C3%A9");
        assert_eq!(encode_uri_component("\u{200b}"), "%E2%80%8B");
    }

    #[test]
    fn test_strip_fragment() {
        assert_eq!(strip_fragment("https://a.test/p#x"), "https://a.test/p");
        assert_eq!(strip_fragment("https://a.test/p#x#y"), "https://a.test/p");
        assert_eq!(strip_fragment("https://a.test/p"), "https://a.test/p");
        assert_eq!(strip_fragment(""), "");
    }
}

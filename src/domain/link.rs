use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;
use url::Url;

use super::field::{impl_conversions, Field, ValidationError};

const SCHEME: &str = "https";
const HOST: &str = "nusmods.com";

static PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/timetable/(sem-1|sem-2|st-i|st-ii)/share$")
        .expect("PATH_PATTERN must be a valid regex")
});

/// An NUSMods timetable sharing link.
///
/// A link has the form
/// `https://nusmods.com/timetable/{semester}/share?{module}[={slots}][&...]`,
/// where `semester` is one of `sem-1`, `sem-2`, `st-i` or `st-ii`. Each query
/// key is a module code; the (optional) value lists lesson slots and is not
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Link(String);

impl Link {
    /// Creates a new `Link`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the text is not a valid NUSMods
    /// timetable link (see [`Link::is_valid`](Field::is_valid)).
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::of::<Self>())
        }
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the module codes encoded in this link.
    #[must_use]
    pub fn codes(&self) -> HashSet<String> {
        Self::extract_codes(&self.0)
    }

    /// Extracts module codes from the query string of a link.
    ///
    /// Each `&`-separated query segment contributes the text before its first
    /// `=`, or the whole segment if it has no `=`. Codes are case-sensitive and
    /// deduplicated. Trailing empty segments are dropped, so `?CS1010&` yields
    /// just `CS1010`. A link with no `?`, or with `?` as its last character,
    /// yields no codes.
    ///
    /// This does not validate its input: malformed segments are taken as they
    /// are. Use it on text that has already passed [`Link::is_valid`](Field::is_valid).
    ///
    /// # Examples
    ///
    /// ```
    /// use contacts::Link;
    ///
    /// let codes = Link::extract_codes(
    ///     "https://nusmods.com/timetable/sem-2/share?CP4101=&CS2101=&CS2103T=LEC:G12",
    /// );
    /// assert_eq!(codes.len(), 3);
    /// assert!(codes.contains("CS2103T"));
    /// ```
    #[must_use]
    pub fn extract_codes(link: &str) -> HashSet<String> {
        let Some((_, query)) = link.split_once('?') else {
            return HashSet::new();
        };
        if query.is_empty() {
            return HashSet::new();
        }

        segments(query)
            .map(|segment| segment.split_once('=').map_or(segment, |(key, _)| key))
            .map(str::to_string)
            .collect()
    }
}

/// Splits a query on `&`, dropping any trailing empty segments.
fn segments(query: &str) -> impl Iterator<Item = &str> {
    let query = query.trim_end_matches('&');
    (!query.is_empty())
        .then(|| query.split('&'))
        .into_iter()
        .flatten()
}

/// Checks that every `&`-separated segment of a query has a non-blank key.
fn is_valid_query(query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    segments(query).all(|segment| {
        let key = segment.split_once('=').map_or(segment, |(key, _)| key);
        !key.trim().is_empty()
    })
}

/// Characters allowed anywhere in a URI by RFC 3986, plus non-ASCII text.
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.' | '_' | '~' | ':' | '/' | '?' | '#' | '[' | ']' | '@' | '!' | '$' | '&'
                | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=' | '%'
        )
        || (!c.is_ascii() && !c.is_control() && !c.is_whitespace())
}

/// Every `%` must start a two digit hex escape.
fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|(_, byte)| **byte == b'%')
        .all(|(i, _)| {
            bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
        })
}

/// The parts of an `https` link as written, before any normalisation.
struct RawParts<'a> {
    host: &'a str,
    path: &'a str,
    query: Option<&'a str>,
}

impl<'a> RawParts<'a> {
    fn split(raw: &'a str) -> Option<Self> {
        let rest = raw.strip_prefix("https://")?;
        let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
        if fragment.contains('#') {
            return None;
        }
        let (rest, query) = rest
            .split_once('?')
            .map_or((rest, None), |(rest, query)| (rest, Some(query)));
        let (authority, path) = rest.find('/').map_or((rest, ""), |i| rest.split_at(i));
        let host_and_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
        let host = host_and_port
            .rsplit_once(':')
            .map_or(host_and_port, |(host, _)| host);
        Some(Self { host, path, query })
    }
}

impl Field for Link {
    const NAME: &'static str = "Link";
    const MESSAGE_CONSTRAINTS: &'static str = "Link needs to be a valid NUSMods timetable link, \
        e.g., https://nusmods.com/timetable/sem-1/share?CS1010=TUT:06,LAB:E07";

    fn is_valid(raw: &str) -> bool {
        // `Url::parse` repairs what it can, so the raw text is checked first
        // and host and path are compared as written.
        if !raw.chars().all(is_uri_char) || !has_valid_escapes(raw) {
            return false;
        }
        let Some(parts) = RawParts::split(raw) else {
            return false;
        };

        Url::parse(raw).is_ok_and(|url| url.scheme() == SCHEME)
            && parts.host == HOST
            && PATH_PATTERN.is_match(parts.path)
            && parts.query.is_none_or(is_valid_query)
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw.to_string())
    }
}

impl_conversions!(Link, as_str);

//! Context-aware escaping for generated markup.

use std::borrow::Cow;

use html_escape::{encode_double_quoted_attribute, encode_quoted_attribute};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// URL schemes allowed in `href` attributes.
const ALLOWED_PROTOCOLS: &[&str] = &[
  "http", "https", "ftp", "ftps", "mailto", "news", "irc", "irc6", "ircs",
  "gopher", "nntp", "feed", "telnet", "mms", "rtsp", "sms", "svn", "tel",
  "fax", "xmpp", "webcal", "urn",
];

/// Bytes that are percent-encoded in URLs: controls, whitespace and anything
/// that could end the attribute or the tag.
const URL_UNSAFE: &AsciiSet = &CONTROLS
  .add(b' ')
  .add(b'"')
  .add(b'<')
  .add(b'>')
  .add(b'\\')
  .add(b'^')
  .add(b'`')
  .add(b'{')
  .add(b'|')
  .add(b'}');

/// Escape text placed between tags. Encodes `&`, `<`, `>`, `"` and `'`.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
  encode_quoted_attribute(text)
}

/// Escape a value placed inside a double-quoted attribute.
#[must_use]
pub fn escape_attribute(text: &str) -> Cow<'_, str> {
  encode_double_quoted_attribute(text)
}

/// Clean a URL for use in an `href` attribute.
///
/// The URL is trimmed and unsafe bytes are percent-encoded. URLs with a
/// scheme outside [`ALLOWED_PROTOCOLS`] are dropped entirely, so the result is
/// empty. Scheme-less URLs that look like a host name get an `http://`
/// prefix; paths, fragments, queries and `./` style relative URLs are kept
/// as they are. Finally `&` and `'` are encoded as entities.
#[must_use]
pub fn escape_url(url: &str) -> String {
  let url = url.trim();
  if url.is_empty() {
    return String::new();
  }

  let mut cleaned: String = utf8_percent_encode(url, URL_UNSAFE).collect();

  if let Some(scheme) = scheme_of(&cleaned) {
    if !ALLOWED_PROTOCOLS.contains(&scheme.to_ascii_lowercase().as_str()) {
      log::debug!("Dropping URL with disallowed scheme '{scheme}'");
      return String::new();
    }
  } else if needs_http_prefix(&cleaned) {
    cleaned.insert_str(0, "http://");
  }

  cleaned
    .replace("&amp;", "&")
    .replace('&', "&#038;")
    .replace('\'', "&#039;")
}

/// The scheme of `url`, if it has one before any path, query or fragment.
fn scheme_of(url: &str) -> Option<&str> {
  let end = url.find([':', '/', '?', '#'])?;
  if url.as_bytes().get(end) != Some(&b':') {
    return None;
  }

  let scheme = &url[..end];
  let mut chars = scheme.chars();
  let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
  let rest_valid =
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

  (starts_with_letter && rest_valid).then_some(scheme)
}

fn needs_http_prefix(url: &str) -> bool {
  !url.contains(':')
    && !url.starts_with(['/', '#', '?', '.'])
    && !is_php_script(url)
}

/// Whether `url` starts with a bare script name such as `index.php`.
fn is_php_script(url: &str) -> bool {
  let name_len = url
    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
    .unwrap_or(url.len());
  name_len > 0
    && url[name_len..]
      .get(..4)
      .is_some_and(|ext| ext.eq_ignore_ascii_case(".php"))
}

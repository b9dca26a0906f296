//! Cookie Slot
//!
//! Encodes a value as a `Set-Cookie`-style line the way page scripts write
//! `document.cookie`, and finds it again in the `; `-joined cookie string.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::{COOKIE_MAX_AGE_SECS, COOKIE_PATH, COOKIE_SAME_SITE, COOKIE_SIZE_LIMIT};
use crate::error::{StorageError, StorageResult};
use crate::storage::SlotStorage;

/// Characters `encodeURIComponent` leaves alone
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

/// Attributes written alongside the cookie value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieAttributes {
    pub path: String,
    pub max_age_secs: u64,
    /// Upper bound for the encoded `name=value` pair
    pub size_limit: usize,
}

impl Default for CookieAttributes {
    fn default() -> Self {
        Self {
            path: COOKIE_PATH.to_string(),
            max_age_secs: COOKIE_MAX_AGE_SECS,
            size_limit: COOKIE_SIZE_LIMIT,
        }
    }
}

/// Build the line assigned to `document.cookie`
///
/// Fails with [`StorageError::TooLarge`] when the encoded pair would not fit;
/// browsers drop such cookies without telling the page.
pub fn encode_cookie(name: &str, value: &str, attributes: &CookieAttributes) -> StorageResult<String> {
    let pair = format!("{}={}", name, utf8_percent_encode(value, URI_COMPONENT));
    if pair.len() > attributes.size_limit {
        return Err(StorageError::TooLarge {
            size: pair.len(),
            limit: attributes.size_limit,
        });
    }
    Ok(format!(
        "{}; path={}; max-age={}; SameSite={}",
        pair,
        attributes.path,
        attributes.max_age_secs,
        COOKIE_SAME_SITE
    ))
}

/// Find and decode `name` in a `document.cookie` string
pub fn lookup_cookie(cookies: &str, name: &str) -> StorageResult<Option<String>> {
    let prefix = format!("{}=", name);
    let raw = match cookies.split("; ").find_map(|row| row.strip_prefix(prefix.as_str())) {
        Some(raw) => raw,
        None => return Ok(None),
    };
    if raw.is_empty() {
        return Ok(None);
    }
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| Some(decoded.into_owned()))
        .map_err(|e| StorageError::Parse(e.to_string()))
}

/// Access to the page's cookie string
pub trait CookieJar {
    /// Current `document.cookie`
    fn cookies(&self) -> StorageResult<String>;

    /// Assign one line to `document.cookie`
    fn set_cookie(&self, line: &str) -> StorageResult<()>;
}

impl<J: CookieJar + ?Sized> CookieJar for &J {
    fn cookies(&self) -> StorageResult<String> {
        (**self).cookies()
    }

    fn set_cookie(&self, line: &str) -> StorageResult<()> {
        (**self).set_cookie(line)
    }
}

/// [`SlotStorage`] over a cookie jar, one cookie per key
#[derive(Debug, Clone)]
pub struct CookieStorage<J> {
    jar: J,
    attributes: CookieAttributes,
}

impl<J: CookieJar> CookieStorage<J> {
    pub fn new(jar: J) -> Self {
        Self::with_attributes(jar, CookieAttributes::default())
    }

    pub fn with_attributes(jar: J, attributes: CookieAttributes) -> Self {
        Self { jar, attributes }
    }
}

impl<J: CookieJar> SlotStorage for CookieStorage<J> {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        lookup_cookie(&self.jar.cookies()?, key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let line = encode_cookie(key, value, &self.attributes)?;
        self.jar.set_cookie(&line)
    }
}

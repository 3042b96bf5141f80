//! Relative-URL resolution against a response's final URL.

use url::Url;

/// Joins a possibly-relative reference against `base`.
///
/// An already-absolute reference is returned unchanged. Relative
/// references resolve with standard RFC 3986 join semantics: scheme and
/// host inherited from the base, paths combined. When the base itself is
/// unparseable the raw reference is returned rather than an error —
/// extraction never fails on bad input.
#[must_use]
pub fn absolutize(base: &str, reference: &str) -> String {
    if Url::parse(reference).is_ok() {
        return reference.to_string();
    }
    match Url::parse(base).and_then(|base| base.join(reference)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => reference.to_string(),
    }
}

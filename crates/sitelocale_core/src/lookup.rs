//! RFC 4647 §3.4 "Lookup": truncate the candidate from the right until it
//! names a supported locale, else fall back to the catalog default.

use serde::Serialize;
use tracing::{debug, trace};

use crate::catalog::SupportedLocaleCatalog;
use crate::tag::LanguageTag;

/// Result of a traced lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LookupOutcome<'c> {
    /// A catalog member: the longest matching truncation or the default.
    pub selected: &'c str,
    /// `false` when no truncation matched and the default was returned.
    pub matched: bool,
    /// Every string compared against the catalog, most specific first.
    pub attempts: Vec<String>,
}

/// Select the most specific supported locale for `candidate`.
///
/// Never fails: a candidate with no supported prefix (including an empty
/// or malformed one) yields [`SupportedLocaleCatalog::default_locale`].
pub fn lookup<'c>(candidate: &LanguageTag, catalog: &'c SupportedLocaleCatalog) -> &'c str {
    lookup_internal(candidate, catalog, None).0
}

/// [`lookup`] on an unparsed tag; subtags are compared case-insensitively.
pub fn lookup_str<'c>(candidate: &str, catalog: &'c SupportedLocaleCatalog) -> &'c str {
    lookup(&LanguageTag::parse(candidate), catalog)
}

/// [`lookup`], also reporting which truncations were tried.
pub fn lookup_with_trace<'c>(
    candidate: &LanguageTag,
    catalog: &'c SupportedLocaleCatalog,
) -> LookupOutcome<'c> {
    let mut attempts = Vec::with_capacity(candidate.len());
    let (selected, matched) = lookup_internal(candidate, catalog, Some(&mut attempts));
    LookupOutcome {
        selected,
        matched,
        attempts,
    }
}

fn lookup_internal<'c>(
    candidate: &LanguageTag,
    catalog: &'c SupportedLocaleCatalog,
    mut attempts: Option<&mut Vec<String>>,
) -> (&'c str, bool) {
    let mut working = candidate.clone();

    while !working.is_empty() {
        let key = working.to_string();
        trace!(attempt = %key, "lookup attempt");

        if let Some(found) = catalog.get(&key) {
            if let Some(attempts) = attempts.as_deref_mut() {
                attempts.push(key);
            }
            debug!(candidate = %candidate, selected = found, "lookup matched");
            return (found, true);
        }
        if let Some(attempts) = attempts.as_deref_mut() {
            attempts.push(key);
        }

        if !working.can_truncate() {
            break;
        }
        working.truncate();
    }

    let default = catalog.default_locale();
    debug!(candidate = %candidate, selected = default, "lookup fell back to default");
    (default, false)
}

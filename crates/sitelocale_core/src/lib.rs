//! Site locale resolution
//!
//! Turns a historical, possibly non-conforming site code into a locale the
//! platform actually ships, in two stages:
//! - anomaly substitution: known non-conformant or superseded codes are
//!   rewritten to standards-track tags ([`AnomalyTable`])
//! - best match: the candidate is truncated from the right (BCP 47 "Lookup",
//!   RFC 4647 §3.4) until it names a [`SupportedLocaleCatalog`] entry, or the
//!   catalog default is returned
//!
//! Both stages are total. The builtin tables live in [`data`] and can be
//! replaced by YAML data files at runtime.

mod anomaly;
mod catalog;
pub mod data;
mod error;
mod lookup;
mod resolver;
mod tag;
mod yaml;

#[cfg(feature = "langid")]
mod langid;

pub use anomaly::{Anomaly, AnomalyKind, AnomalyRecord, AnomalyTable};
pub use catalog::SupportedLocaleCatalog;
pub use error::{DataError, LocaleError};
pub use lookup::{lookup, lookup_str, lookup_with_trace, LookupOutcome};
pub use resolver::{LocaleResolver, Resolution};
pub use tag::{LanguageTag, PRIVATE_USE};

/// Resolve a site code against the builtin tables.
///
/// Always returns a member of [`SupportedLocaleCatalog::builtin`], falling
/// back to `und`.
pub fn resolve_locale(raw: &str) -> &'static str {
    LocaleResolver::builtin().resolve_locale(raw)
}

/// Map a locale to a platform project code.
///
/// Not implemented: always returns [`LocaleError::NotImplemented`].
pub fn project_code(locale: &str) -> Result<String, LocaleError> {
    LocaleResolver::builtin().project_code(locale)
}

use unic_langid::LanguageIdentifier;

use crate::tag::{is_singleton, LanguageTag};

impl LanguageTag {
    /// View this tag as a `unic_langid` identifier (language, script,
    /// region, variants), e.g. to hand it to a Fluent bundle.
    ///
    /// Returns `None` for tags `LanguageIdentifier` cannot express: anything
    /// with an extension or private-use sequence, and ill-formed subtags.
    pub fn to_langid(&self) -> Option<LanguageIdentifier> {
        if self.is_empty() || self.subtags().iter().any(|st| is_singleton(st)) {
            return None;
        }
        self.to_string().parse().ok()
    }
}

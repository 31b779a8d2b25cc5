use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use smallvec::SmallVec;

use crate::error::DataError;

/// Singleton introducing a private-use sequence (`en-x-simple`).
pub const PRIVATE_USE: &str = "x";

/// Longest subtag accepted in curated data.
const MAX_SUBTAG_LEN: usize = 8;

/// A language tag as an ordered list of lowercase subtags.
///
/// Parsing is total: no well-formedness check is made, so a malformed
/// input simply produces subtags that will never match a catalog entry.
/// The position of the first private-use singleton is remembered since
/// lookup stops once only private-use content remains.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LanguageTag {
    subtags: SmallVec<[String; 4]>,
    private_use: Option<usize>,
}

impl LanguageTag {
    /// Parse a dash-separated tag, lowercasing every subtag.
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return Self::default();
        }

        let subtags: SmallVec<[String; 4]> =
            s.split('-').map(|st| st.to_ascii_lowercase()).collect();
        let private_use = subtags.iter().position(|st| st == PRIVATE_USE);

        Self {
            subtags,
            private_use,
        }
    }

    pub fn subtags(&self) -> &[String] {
        &self.subtags
    }

    pub fn len(&self) -> usize {
        self.subtags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subtags.is_empty()
    }

    /// Index of the `x` singleton, if the tag carries a private-use sequence.
    pub fn private_use_index(&self) -> Option<usize> {
        self.private_use
    }

    /// `true` when the tag has no content before its private-use sequence
    /// (`x-enochian`).
    pub fn is_private_use_only(&self) -> bool {
        self.private_use == Some(0)
    }

    /// Whether lookup may shorten this tag any further.
    pub fn can_truncate(&self) -> bool {
        self.subtags.len() > 1 && !self.is_private_use_only()
    }

    /// Drop the last subtag, then any singleton left dangling at the end.
    ///
    /// `zh-hant-x-old` becomes `zh-hant` (not `zh-hant-x`).
    pub fn truncate(&mut self) {
        self.subtags.pop();
        while self.subtags.last().is_some_and(|st| is_singleton(st)) {
            self.subtags.pop();
        }
        if self.private_use.is_some_and(|i| i >= self.subtags.len()) {
            self.private_use = None;
        }
    }

    /// Whether every subtag is ASCII alphanumeric and the tag is lowercase.
    pub fn is_canonical(&self) -> bool {
        !self.subtags.is_empty() && self.subtags.iter().all(|st| is_valid_subtag(st))
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.subtags.iter();
        if let Some(first) = it.next() {
            f.write_str(first)?;
        }
        for st in it {
            f.write_str("-")?;
            f.write_str(st)?;
        }
        Ok(())
    }
}

impl FromStr for LanguageTag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for LanguageTag {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Extension and private-use introducers are single characters.
pub(crate) fn is_singleton(subtag: &str) -> bool {
    subtag.len() == 1
}

fn is_valid_subtag(subtag: &str) -> bool {
    !subtag.is_empty()
        && subtag.len() <= MAX_SUBTAG_LEN
        && subtag
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
}

/// Check that curated data stores a tag in its canonical lowercase form.
pub(crate) fn check_canonical(tag: &str) -> Result<(), DataError> {
    if tag.is_empty() {
        return Err(DataError::InvalidTag {
            tag: tag.to_string(),
            msg: "empty tag".to_string(),
        });
    }
    if let Some(bad) = tag.split('-').find(|st| !is_valid_subtag(st)) {
        return Err(DataError::InvalidTag {
            tag: tag.to_string(),
            msg: format!(
                "subtag `{bad}` must be 1-{MAX_SUBTAG_LEN} lowercase ASCII letters or digits"
            ),
        });
    }
    Ok(())
}

use std::borrow::Cow;
use std::sync::OnceLock;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data;
use crate::error::DataError;
use crate::tag::check_canonical;

/// Why a code is listed as an anomaly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnomalyKind {
    /// Platform pseudocode such as `default`.
    Pseudocode,
    /// Site code that violates BCP 47 where a standard tag exists.
    #[default]
    SiteViolation,
    /// Site code mapped onto a private-use extension.
    PrivateUseFix,
    /// Conforming private-use code superseded by a registered one.
    ObsoletePrivateUse,
    /// Conforming but ambiguous code, narrowed to what the sites mean.
    AmbiguousNarrowed,
    /// Deprecated "inherited" tag with a preferred value.
    Inherited,
    /// Deprecated "redundant" tag with a preferred value.
    Redundant,
    /// Deleted inherited tag with no preferred value; the replacement is a guess.
    InheritedNoReplacement,
}

impl AnomalyKind {
    pub const ALL: [AnomalyKind; 8] = [
        AnomalyKind::Pseudocode,
        AnomalyKind::SiteViolation,
        AnomalyKind::PrivateUseFix,
        AnomalyKind::ObsoletePrivateUse,
        AnomalyKind::AmbiguousNarrowed,
        AnomalyKind::Inherited,
        AnomalyKind::Redundant,
        AnomalyKind::InheritedNoReplacement,
    ];

    pub fn id(self) -> &'static str {
        match self {
            AnomalyKind::Pseudocode => "pseudocode",
            AnomalyKind::SiteViolation => "site-violation",
            AnomalyKind::PrivateUseFix => "private-use-fix",
            AnomalyKind::ObsoletePrivateUse => "obsolete-private-use",
            AnomalyKind::AmbiguousNarrowed => "ambiguous-narrowed",
            AnomalyKind::Inherited => "inherited",
            AnomalyKind::Redundant => "redundant",
            AnomalyKind::InheritedNoReplacement => "inherited-no-replacement",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }
}

/// A compiled-in anomaly row (see [`crate::data::ANOMALIES`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnomalyRecord {
    pub code: &'static str,
    pub replacement: &'static str,
    pub kind: AnomalyKind,
    pub uncertain: bool,
    pub note: Option<&'static str>,
}

/// One curated substitution.
///
/// `uncertain` and `note` are curation metadata; they never leak into the
/// replacement handed to callers of [`AnomalyTable::resolve`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Anomaly {
    pub code: Cow<'static, str>,
    pub replacement: Cow<'static, str>,
    pub kind: AnomalyKind,
    pub uncertain: bool,
    pub note: Option<Cow<'static, str>>,
}

impl From<AnomalyRecord> for Anomaly {
    fn from(r: AnomalyRecord) -> Self {
        Self {
            code: Cow::Borrowed(r.code),
            replacement: Cow::Borrowed(r.replacement),
            kind: r.kind,
            uncertain: r.uncertain,
            note: r.note.map(Cow::Borrowed),
        }
    }
}

static BUILTIN: OnceLock<AnomalyTable> = OnceLock::new();

/// Ordered map from a non-conformant lowercase code to its substitution.
///
/// Iteration follows curation order; lookups never depend on it.
#[derive(Clone, Debug, Default)]
pub struct AnomalyTable {
    entries: IndexMap<Cow<'static, str>, Anomaly, FxBuildHasher>,
}

impl AnomalyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The platform's compiled-in table.
    pub fn builtin() -> &'static AnomalyTable {
        BUILTIN.get_or_init(|| Self::from_records(data::ANOMALIES))
    }

    /// Build a table from trusted compiled-in rows.
    pub fn from_records(records: &'static [AnomalyRecord]) -> Self {
        let mut entries = IndexMap::with_capacity_and_hasher(records.len(), FxBuildHasher);
        for r in records {
            entries.insert(Cow::Borrowed(r.code), Anomaly::from(*r));
        }
        Self { entries }
    }

    /// Parse a YAML data file (a sequence of `{code, replacement, ...}` rows).
    pub fn from_yaml_str(src: &str) -> Result<Self, DataError> {
        crate::yaml::parse_anomalies(src)
    }

    /// Add a curated entry, rejecting non-canonical or duplicate codes.
    pub fn try_insert(&mut self, anomaly: Anomaly) -> Result<(), DataError> {
        check_canonical(&anomaly.code)?;
        check_canonical(&anomaly.replacement)?;
        if self.entries.contains_key(&*anomaly.code) {
            return Err(DataError::Duplicate(anomaly.code.into_owned()));
        }
        self.entries.insert(anomaly.code.clone(), anomaly);
        Ok(())
    }

    /// Substitute a known anomaly, or hand `raw` back untouched.
    ///
    /// Matching is exact after ASCII lowercasing; no other normalization
    /// is applied.
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        match self.get(raw) {
            Some(anomaly) => {
                debug!(
                    raw = %raw,
                    replacement = %anomaly.replacement,
                    kind = anomaly.kind.id(),
                    "anomaly substituted"
                );
                anomaly.replacement.as_ref()
            }
            None => raw,
        }
    }

    /// Entry for `code`, compared case-insensitively.
    pub fn get(&self, code: &str) -> Option<&Anomaly> {
        let key: Cow<'_, str> = if code.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(code.to_ascii_lowercase())
        } else {
            Cow::Borrowed(code)
        };
        self.entries.get(&*key)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Anomaly> {
        self.entries.values()
    }

    pub fn iter_kind(&self, kind: AnomalyKind) -> impl Iterator<Item = &Anomaly> {
        self.entries.values().filter(move |a| a.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_codes_and_replacements_are_canonical() {
        for a in AnomalyTable::builtin().iter() {
            check_canonical(&a.code).unwrap();
            check_canonical(&a.replacement).unwrap();
        }
    }

    #[test]
    fn builtin_has_every_curated_row() {
        let table = AnomalyTable::builtin();
        assert_eq!(table.len(), data::ANOMALIES.len());
        assert_eq!(table.len(), 72);
    }

    #[test]
    fn builtin_replacements_are_not_chained() {
        let table = AnomalyTable::builtin();
        for a in table.iter() {
            assert!(
                !table.contains(&a.replacement),
                "replacement `{}` of `{}` is itself an anomaly",
                a.replacement,
                a.code
            );
        }
    }

    #[test]
    fn resolve_is_case_insensitive_on_keys() {
        let table = AnomalyTable::builtin();
        assert_eq!(table.resolve("zh-cmn-Hans"), "cmn-hans");
        assert_eq!(table.resolve("ZH-MIN-NAN"), "nan");
    }

    #[test]
    fn resolve_passes_through_unknown_codes_verbatim() {
        let table = AnomalyTable::builtin();
        assert_eq!(table.resolve("en-GB"), "en-GB");
        assert_eq!(table.resolve(""), "");
        assert_eq!(table.resolve(" als"), " als");
    }

    #[test]
    fn uncertain_markers_are_metadata() {
        let table = AnomalyTable::builtin();
        assert_eq!(table.resolve("cel-gaulish"), "cel-x-gaulish");
        let a = table.get("cel-gaulish").unwrap();
        assert!(a.uncertain);
        assert_eq!(a.kind, AnomalyKind::InheritedNoReplacement);

        let simple = table.get("simple").unwrap();
        assert_eq!(simple.replacement, "en");
        assert!(!simple.uncertain);
        assert!(simple.note.is_some());
    }

    #[test]
    fn iter_kind_filters_and_keeps_order() {
        let table = AnomalyTable::builtin();
        let narrowed: Vec<&str> = table
            .iter_kind(AnomalyKind::AmbiguousNarrowed)
            .map(|a| &*a.code)
            .collect();
        assert_eq!(narrowed, vec!["no", "bh", "tgl"]);

        let total: usize = AnomalyKind::ALL
            .into_iter()
            .map(|k| table.iter_kind(k).count())
            .sum();
        assert_eq!(total, table.len());
    }

    #[test]
    fn kind_ids_round_trip() {
        for kind in AnomalyKind::ALL {
            assert_eq!(AnomalyKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(AnomalyKind::from_id("nope"), None);
    }

    #[test]
    fn try_insert_rejects_duplicates_and_bad_tags() {
        let mut table = AnomalyTable::new();
        let entry = Anomaly {
            code: "als".into(),
            replacement: "gsw".into(),
            kind: AnomalyKind::SiteViolation,
            uncertain: false,
            note: None,
        };
        table.try_insert(entry.clone()).unwrap();
        assert_eq!(
            table.try_insert(entry.clone()),
            Err(DataError::Duplicate("als".to_string()))
        );

        let bad = Anomaly {
            code: "Als".into(),
            ..entry
        };
        assert!(matches!(
            table.try_insert(bad),
            Err(DataError::InvalidTag { .. })
        ));
    }
}

//! YAML data files for anomaly tables and locale catalogs.
//!
//! Anomalies are a sequence of rows:
//!
//! ```yaml
//! - code: als
//!   replacement: gsw
//! - code: cel-gaulish
//!   replacement: cel-x-gaulish
//!   kind: inherited-no-replacement
//!   uncertain: true
//!   note: deleted tag, replacement is a candidate
//! ```
//!
//! A catalog names its default and lists servable locales:
//!
//! ```yaml
//! default: und
//! locales: [en, en-gb, gsw]
//! ```

use std::borrow::Cow;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::anomaly::{Anomaly, AnomalyKind, AnomalyTable};
use crate::catalog::SupportedLocaleCatalog;
use crate::error::DataError;

const MAX_TABLE_ENTRIES: usize = 10_000;
const MAX_NOTE_BYTES: usize = 1024;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AnomalyRow {
    code: String,
    replacement: String,
    #[serde(default)]
    kind: AnomalyKind,
    #[serde(default)]
    uncertain: bool,
    #[serde(default)]
    note: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDoc {
    default: String,
    #[serde(default)]
    locales: Vec<String>,
}

pub(crate) fn parse_anomalies(src: &str) -> Result<AnomalyTable, DataError> {
    let rows: Vec<AnomalyRow> = serde_yaml::from_str(src)
        .map_err(|e| DataError::Yaml(format!("anomaly table: {e}")))?;
    if rows.len() > MAX_TABLE_ENTRIES {
        return Err(DataError::TooLarge {
            max: MAX_TABLE_ENTRIES,
        });
    }

    let mut table = AnomalyTable::new();
    for row in rows {
        if row.note.as_ref().is_some_and(|n| n.len() > MAX_NOTE_BYTES) {
            return Err(DataError::NoteTooLong {
                code: row.code,
                max: MAX_NOTE_BYTES,
            });
        }
        table.try_insert(Anomaly {
            code: Cow::Owned(row.code),
            replacement: Cow::Owned(row.replacement),
            kind: row.kind,
            uncertain: row.uncertain,
            note: row.note.map(Cow::Owned),
        })?;
    }

    // Substitution is applied once; a replacement that is itself a key is
    // never rewritten again.
    for a in table.iter() {
        if table.contains(&a.replacement) {
            warn!(
                code = %a.code,
                replacement = %a.replacement,
                "anomaly replacement is itself an anomaly code"
            );
        }
    }

    debug!(entries = table.len(), "loaded anomaly table");
    Ok(table)
}

pub(crate) fn parse_catalog(src: &str) -> Result<SupportedLocaleCatalog, DataError> {
    let doc: CatalogDoc =
        serde_yaml::from_str(src).map_err(|e| DataError::Yaml(format!("locale catalog: {e}")))?;
    if doc.locales.len() > MAX_TABLE_ENTRIES {
        return Err(DataError::TooLarge {
            max: MAX_TABLE_ENTRIES,
        });
    }

    let catalog = SupportedLocaleCatalog::new(doc.locales, doc.default)?;
    debug!(
        locales = catalog.len(),
        default = catalog.default_locale(),
        "loaded locale catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_anomaly_rows() {
        let src = r#"
- code: als
  replacement: gsw
- code: cel-gaulish
  replacement: cel-x-gaulish
  kind: inherited-no-replacement
  uncertain: true
  note: deleted tag
"#;
        let table = AnomalyTable::from_yaml_str(src).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("als"), "gsw");

        let gaulish = table.get("cel-gaulish").unwrap();
        assert_eq!(gaulish.kind, AnomalyKind::InheritedNoReplacement);
        assert!(gaulish.uncertain);
        assert_eq!(gaulish.note.as_deref(), Some("deleted tag"));

        let als = table.get("als").unwrap();
        assert_eq!(als.kind, AnomalyKind::SiteViolation);
        assert!(!als.uncertain);
    }

    #[test]
    fn anomaly_keys_must_be_lowercase() {
        let src = r#"
- code: zh-cmn-Hans
  replacement: cmn-hans
"#;
        let err = AnomalyTable::from_yaml_str(src).unwrap_err();
        assert!(matches!(err, DataError::InvalidTag { .. }));
    }

    #[test]
    fn embedded_markers_are_rejected() {
        let src = r#"
- code: cel-gaulish
  replacement: "cel-x-gaulish?"
"#;
        let err = AnomalyTable::from_yaml_str(src).unwrap_err();
        assert!(matches!(err, DataError::InvalidTag { .. }));
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let src = r#"
- code: no
  replacement: nb
- code: no
  replacement: nn
"#;
        // `no` must stay a string, not a YAML 1.1 boolean.
        let err = AnomalyTable::from_yaml_str(src).unwrap_err();
        assert_eq!(err, DataError::Duplicate("no".to_string()));
    }

    #[test]
    fn unknown_fields_and_kinds_are_yaml_errors() {
        let src = r#"
- code: als
  replacement: gsw
  replacment: typo
"#;
        assert!(matches!(
            AnomalyTable::from_yaml_str(src),
            Err(DataError::Yaml(_))
        ));

        let src = r#"
- code: als
  replacement: gsw
  kind: mystery
"#;
        assert!(matches!(
            AnomalyTable::from_yaml_str(src),
            Err(DataError::Yaml(_))
        ));
    }

    #[test]
    fn oversized_notes_name_their_code() {
        let src = format!(
            "- code: als\n  replacement: gsw\n  note: {}\n",
            "a".repeat(MAX_NOTE_BYTES + 1)
        );
        let err = AnomalyTable::from_yaml_str(&src).unwrap_err();
        assert_eq!(
            err,
            DataError::NoteTooLong {
                code: "als".to_string(),
                max: MAX_NOTE_BYTES,
            }
        );

        let src = format!(
            "- code: als\n  replacement: gsw\n  note: {}\n",
            "a".repeat(MAX_NOTE_BYTES)
        );
        assert!(AnomalyTable::from_yaml_str(&src).is_ok());
    }

    #[test]
    fn parse_catalog_doc() {
        let src = r#"
default: und
locales:
  - en
  - en-gb
  - gsw
"#;
        let catalog = SupportedLocaleCatalog::from_yaml_str(src).unwrap();
        assert_eq!(catalog.default_locale(), "und");
        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec!["en", "en-gb", "gsw"]);
    }

    #[test]
    fn catalog_requires_default() {
        let err = SupportedLocaleCatalog::from_yaml_str("locales: [en]").unwrap_err();
        assert!(matches!(err, DataError::Yaml(_)));
    }

    #[test]
    fn catalog_rejects_uppercase_tags() {
        let err = SupportedLocaleCatalog::from_yaml_str("default: und\nlocales: [pt-BR]").unwrap_err();
        assert!(matches!(err, DataError::InvalidTag { .. }));
    }
}

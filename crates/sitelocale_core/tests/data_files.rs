use sitelocale_core::{AnomalyKind, AnomalyTable, DataError, LocaleResolver, SupportedLocaleCatalog};

const ANOMALIES: &str = r#"
- code: als
  replacement: gsw
- code: sr-sc
  replacement: sr-cyrl
- code: i-default
  replacement: und-x-default
  kind: inherited-no-replacement
  uncertain: true
"#;

const CATALOG: &str = r#"
default: en
locales: [gsw, sr, de]
"#;

#[test]
fn loaded_tables_drive_the_pipeline() {
    let anomalies = AnomalyTable::from_yaml_str(ANOMALIES).unwrap();
    let catalog = SupportedLocaleCatalog::from_yaml_str(CATALOG).unwrap();
    let resolver = LocaleResolver::new(&anomalies, &catalog);

    assert_eq!(resolver.resolve_locale("als"), "gsw");
    assert_eq!(resolver.resolve_locale("SR-SC"), "sr");
    assert_eq!(resolver.resolve_locale("de-AT"), "de");
    assert_eq!(resolver.resolve_locale("i-default"), "en");
    assert_eq!(resolver.resolve_locale("no"), "en");
}

#[test]
fn loaded_table_keeps_curation_order_and_metadata() {
    let anomalies = AnomalyTable::from_yaml_str(ANOMALIES).unwrap();
    let codes: Vec<&str> = anomalies.iter().map(|a| &*a.code).collect();
    assert_eq!(codes, vec!["als", "sr-sc", "i-default"]);

    let uncertain: Vec<&str> = anomalies
        .iter_kind(AnomalyKind::InheritedNoReplacement)
        .filter(|a| a.uncertain)
        .map(|a| &*a.replacement)
        .collect();
    assert_eq!(uncertain, vec!["und-x-default"]);
}

#[test]
fn malformed_files_are_rejected_at_load_time() {
    assert!(matches!(
        AnomalyTable::from_yaml_str("code: als"),
        Err(DataError::Yaml(_))
    ));
    assert!(matches!(
        SupportedLocaleCatalog::from_yaml_str("default: und\nlocales: [en, en]"),
        Err(DataError::Duplicate(_))
    ));
}

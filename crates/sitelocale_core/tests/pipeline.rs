use sitelocale_core::{
    lookup_str, project_code, resolve_locale, AnomalyTable, LocaleError, LocaleResolver,
    SupportedLocaleCatalog,
};

#[test]
fn site_codes_resolve_through_both_stages() {
    let cases = [
        ("als", "gsw"),
        ("zh-min-nan", "nan"),
        ("no", "nb"),
        ("be-x-old", "be-tarask"),
        ("zh-yue", "yue"),
        ("simple", "en"),
        ("default", "und"),
        ("eml", "it"),
        ("tgl", "tl"),
        ("mo", "ro"),
        ("sr-sc", "sr"),
        ("sr-sl", "sr"),
        ("en-gb-oed", "en-gb"),
    ];
    for (raw, expected) in cases {
        assert_eq!(resolve_locale(raw), expected, "resolving `{raw}`");
    }
}

#[test]
fn unsupported_replacement_falls_back_to_default() {
    assert_eq!(AnomalyTable::builtin().resolve("i-klingon"), "tlh");
    assert_eq!(resolve_locale("i-klingon"), "und");
}

#[test]
fn script_candidate_truncates_to_base_language() {
    let anomalies = AnomalyTable::builtin();
    let catalog = SupportedLocaleCatalog::new(["sr", "en"], "und").unwrap();
    let resolver = LocaleResolver::new(anomalies, &catalog);
    assert_eq!(resolver.substitute("sr-sc"), "sr-cyrl");
    assert_eq!(resolver.resolve_locale("sr-sc"), "sr");
}

#[test]
fn every_anomaly_resolves_to_its_curated_value() {
    let table = AnomalyTable::builtin();
    for a in table.iter() {
        assert_eq!(table.resolve(&a.code), &*a.replacement);
    }
}

#[test]
fn non_anomalous_codes_pass_through() {
    let table = AnomalyTable::builtin();
    for a in table.iter() {
        assert_eq!(table.resolve(&a.replacement), &*a.replacement);
    }
    for tag in SupportedLocaleCatalog::builtin().iter() {
        if !table.contains(tag) {
            assert_eq!(table.resolve(tag), tag);
        }
    }
}

#[test]
fn every_input_resolves_to_a_catalog_member() {
    let catalog = SupportedLocaleCatalog::builtin();
    let inputs = [
        "",
        "-",
        "x",
        "x-",
        "-x",
        "i",
        "en-",
        "EN",
        "en_US",
        "xx-totally-unknown",
        "x-enochian",
        "und-x-default",
        "zh-Hant-TW-u-nu-hanidec-x-a-b",
        "a-b-c-d-e-f-g-h-i-j",
        "😀",
        "   ",
        "de--ch",
    ];
    let resolver = LocaleResolver::builtin();
    for raw in inputs {
        let got = resolver.resolve_locale(raw);
        assert!(catalog.contains(got), "`{raw}` resolved to non-member `{got}`");
    }
    for a in resolver.anomalies().iter() {
        assert!(catalog.contains(resolver.resolve_locale(&a.code)));
    }
}

#[test]
fn longest_match_priority() {
    let catalog = SupportedLocaleCatalog::new(["en", "en-gb"], "und").unwrap();
    assert_eq!(lookup_str("en-gb-oed", &catalog), "en-gb");
}

#[test]
fn fallback_returns_designated_default() {
    let catalog = SupportedLocaleCatalog::new(["en", "fr"], "und").unwrap();
    assert_eq!(lookup_str("xx-totally-unknown", &catalog), "und");

    let catalog = SupportedLocaleCatalog::new(["fr"], "en").unwrap();
    assert_eq!(lookup_str("xx-totally-unknown", &catalog), "en");
}

#[test]
fn resolution_is_deterministic() {
    let resolver = LocaleResolver::builtin();
    let codes = ["zh-classical", "kk-Cyrl-KZ", "gan-hant-tw", "nonsense", "sgn-us"];
    let first: Vec<&str> = codes.iter().map(|c| resolver.resolve_locale(c)).collect();
    for _ in 0..8 {
        let again: Vec<&str> = codes.iter().map(|c| resolver.resolve_locale(c)).collect();
        assert_eq!(first, again);
    }
    assert_eq!(first, vec!["lzh", "kk-cyrl", "gan-hant", "und", "und"]);
}

#[test]
fn project_code_signals_not_implemented() {
    let err = project_code("en").unwrap_err();
    assert_eq!(
        err,
        LocaleError::NotImplemented {
            operation: "project_code"
        }
    );
    assert_eq!(err.to_string(), "project_code is not implemented");
}

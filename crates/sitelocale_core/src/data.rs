//! Builtin data tables.
//!
//! These are content, not behavior: the resolver only sees them through
//! [`AnomalyTable`](crate::AnomalyTable) and
//! [`SupportedLocaleCatalog`](crate::SupportedLocaleCatalog), and either can
//! be swapped for a YAML data file at runtime.

use crate::anomaly::{AnomalyKind, AnomalyRecord};

use AnomalyKind::*;

/// Designated fallback locale ("undetermined").
pub const DEFAULT_LOCALE: &str = "und";

const fn fixed(kind: AnomalyKind, code: &'static str, replacement: &'static str) -> AnomalyRecord {
    AnomalyRecord {
        code,
        replacement,
        kind,
        uncertain: false,
        note: None,
    }
}

const fn noted(
    kind: AnomalyKind,
    code: &'static str,
    replacement: &'static str,
    note: &'static str,
) -> AnomalyRecord {
    AnomalyRecord {
        code,
        replacement,
        kind,
        uncertain: false,
        note: Some(note),
    }
}

const fn candidate(
    code: &'static str,
    replacement: &'static str,
    note: Option<&'static str>,
) -> AnomalyRecord {
    AnomalyRecord {
        code,
        replacement,
        kind: InheritedNoReplacement,
        uncertain: true,
        note,
    }
}

/// Known non-conformant site codes, in curation order.
pub const ANOMALIES: &[AnomalyRecord] = &[
    fixed(Pseudocode, "default", "und"),
    // Site codes with a standard replacement.
    fixed(SiteViolation, "als", "gsw"),
    fixed(SiteViolation, "bat-smg", "sgs"),
    fixed(SiteViolation, "fiu-vro", "vro"),
    fixed(SiteViolation, "roa-rup", "rup"),
    noted(SiteViolation, "simple", "en", "subset of standard en; en-x-simple would also fit"),
    fixed(SiteViolation, "sr-sc", "sr-cyrl"),
    fixed(SiteViolation, "sr-sl", "sr-latn"),
    fixed(SiteViolation, "zh-classical", "lzh"),
    // Site codes fixed with a private-use extension (labels up to 8 chars).
    fixed(PrivateUseFix, "cbk-zam", "cbk-x-zam"),
    noted(PrivateUseFix, "de-formal", "de", "subset of standard de; de-x-formal would also fit"),
    noted(PrivateUseFix, "eml", "it-x-eml", "retired code with two competing standard successors"),
    fixed(PrivateUseFix, "map-bms", "map-x-bms"),
    noted(
        PrivateUseFix,
        "mo",
        "ro-cyrl",
        "retired; closest fit for the locked site, no longer used in interwikis",
    ),
    noted(
        PrivateUseFix,
        "nl-informal",
        "nl",
        "subset of standard nl; nl-x-informal would also fit",
    ),
    noted(
        PrivateUseFix,
        "nrm",
        "fr-x-nrm",
        "private use under fr gives better fallbacks than roa-x-nrm",
    ),
    fixed(PrivateUseFix, "roa-tara", "it-x-tara"),
    // Private-use codes superseded by standard ones.
    fixed(ObsoletePrivateUse, "be-x-old", "be-tarask"),
    // Standard but ambiguous codes narrowed by site usage.
    noted(AmbiguousNarrowed, "no", "nb", "sites use no for Bokmal and never nb"),
    noted(AmbiguousNarrowed, "bh", "bho", "family code bih read as the single language bho"),
    noted(AmbiguousNarrowed, "tgl", "tl-tglg", "historic Tagalog written in Baybayin"),
    // Inherited tags with a preferred value.
    noted(Inherited, "art-lojban", "jbo", "still used in old templates"),
    noted(Inherited, "en-gb-oed", "en-gb", "no preferred value; subset of standard en-gb"),
    fixed(Inherited, "i-ami", "ami"),
    fixed(Inherited, "i-bnn", "bnn"),
    fixed(Inherited, "i-hak", "hak"),
    fixed(Inherited, "i-klingon", "tlh"),
    fixed(Inherited, "i-lux", "lb"),
    fixed(Inherited, "i-navajo", "nv"),
    fixed(Inherited, "i-pwn", "pwn"),
    fixed(Inherited, "i-tao", "tao"),
    fixed(Inherited, "i-tay", "tay"),
    fixed(Inherited, "i-tsu", "tsu"),
    noted(Inherited, "no-bok", "nb", "still used in old templates"),
    noted(Inherited, "no-nyn", "nn", "still used in old templates"),
    fixed(Inherited, "sgn-be-fr", "sfb"),
    fixed(Inherited, "sgn-be-nl", "vgt"),
    fixed(Inherited, "sgn-ch-de", "sgg"),
    noted(Inherited, "zh-guoyu", "cmn", "sites treat zh as Mandarin and never use cmn"),
    fixed(Inherited, "zh-hakka", "hak"),
    noted(Inherited, "zh-min", "zh-tw", "no preferred value; not necessarily nan"),
    noted(Inherited, "zh-min-nan", "nan", "still used in old templates and interwikis"),
    fixed(Inherited, "zh-xiang", "hsn"),
    // Redundant tags with a preferred value.
    fixed(Redundant, "sgn-br", "bzs"),
    fixed(Redundant, "sgn-co", "csn"),
    fixed(Redundant, "sgn-de", "gsg"),
    fixed(Redundant, "sgn-dk", "dsl"),
    fixed(Redundant, "sgn-es", "ssp"),
    noted(Redundant, "sgn-fr", "fsl", "still used in old templates"),
    fixed(Redundant, "sgn-gb", "bfi"),
    fixed(Redundant, "sgn-gr", "gss"),
    fixed(Redundant, "sgn-ie", "isg"),
    fixed(Redundant, "sgn-it", "ise"),
    fixed(Redundant, "sgn-jp", "jsl"),
    fixed(Redundant, "sgn-mx", "mfs"),
    fixed(Redundant, "sgn-ni", "ncs"),
    fixed(Redundant, "sgn-nl", "dse"),
    fixed(Redundant, "sgn-no", "nsl"),
    fixed(Redundant, "sgn-pt", "psr"),
    fixed(Redundant, "sgn-se", "swl"),
    noted(Redundant, "sgn-us", "ase", "still used in old templates"),
    fixed(Redundant, "sgn-za", "sfs"),
    noted(Redundant, "zh-cmn", "cmn", "could alias zh, which sites assume is Mandarin"),
    noted(
        Redundant,
        "zh-cmn-hans",
        "cmn-hans",
        "could alias zh-hans, which sites assume is Mandarin",
    ),
    noted(
        Redundant,
        "zh-cmn-hant",
        "cmn-hant",
        "could alias zh-hant, which sites assume is Mandarin",
    ),
    noted(Redundant, "zh-gan", "gan", "still used in old templates"),
    noted(Redundant, "zh-wuu", "wuu", "still used in old templates"),
    noted(Redundant, "zh-yue", "yue", "still used in old templates and interwikis"),
    // Deleted inherited tags without a defined replacement.
    candidate("cel-gaulish", "cel-x-gaulish", None),
    candidate("i-default", "und-x-default", Some("still used in old templates and interwikis")),
    candidate("i-enochian", "x-enochian", None),
    candidate("i-mingo", "x-mingo", None),
];

/// Locales the platform can render, in curation order.
pub const SUPPORTED_LOCALES: &[&str] = &[
    "ab", "ace", "aeb", "af", "ak", "aln", "am", "ang",
    "an", "anp", "arc", "arn", "ar", "ary", "arz", "as",
    "ast", "avk", "av", "ay", "azb", "az", "ba", "bar",
    "bbc-latn", "bbc", "bcc", "bcl", "be", "be-tarask", "bg", "bho",
    "bh", "bi", "bjn", "bm", "bn", "bo", "bpy", "bqi",
    "brh", "br", "bs", "bug", "bxr", "ca", "cbk-zam", "cdo",
    "ceb", "ce", "ch", "chr", "ckb", "co", "cps", "crh-cyrl",
    "crh-latn", "crh", "csb", "cs", "cu", "cv", "cy", "da",
    "de-at", "de-ch", "de-formal", "de", "diq", "dsb", "dtp", "dv",
    "dz", "ee", "egl", "el", "eml", "en-ca", "en-gb", "en",
    "en-rtl", "eo", "es", "et", "eu", "ext", "fa", "ff",
    "fi", "fit", "fj", "fo", "frc", "fr", "frp", "frr",
    "fur", "fy", "gag", "gan-hans", "gan-hant", "gan", "ga", "gd",
    "glk", "gl", "gn", "gom-latn", "got", "grc", "gsw", "gu",
    "gv", "hak", "ha", "haw", "he", "hif-latn", "hif", "hil",
    "hi", "hr", "hsb", "ht", "hu", "hy", "ia", "id",
    "ie", "ig", "ii", "ike-cans", "ike-latn", "ik", "ilo", "inh",
    "io", "is", "it", "iu", "jam", "ja", "jbo", "jut",
    "jv", "kaa", "kab", "ka", "kbd-cyrl", "kbd", "kg", "khw",
    "kiu", "kk-arab", "kk-cn", "kk-cyrl", "kk-kz", "kk-latn", "kk", "kk-tr",
    "kl", "km", "kn", "koi", "ko-kp", "ko", "krc", "kri",
    "krj", "ks-arab", "ks-deva", "ksh", "ks", "ku-arab", "ku-latn", "ku",
    "kv", "kw", "ky", "lad", "la", "lbe", "lb", "lez",
    "lfn", "lg", "lij", "li", "liv", "lmo", "ln", "lo",
    "loz", "lrc", "ltg", "lt", "lus", "lv", "lzh", "lzz",
    "mai", "map-bms", "mdf", "mg", "mhr", "min", "mi", "mk",
    "ml", "mn", "mo", "mrj", "mr", "ms", "mt", "mwl",
    "my", "myv", "mzn", "nah", "nan", "na", "nap", "nb",
    "nds-nl", "nds", "ne", "new", "niu", "nl-informal", "nl", "nn",
    "nov", "nso", "nv", "ny", "oc", "om", "or", "os",
    "pag", "pam", "pa", "pap", "pcd", "pdc", "pdt", "pfl",
    "pih", "pi", "pl", "pms", "pnb", "pnt", "prg", "ps",
    "pt-br", "pt", "qqq", "qug", "qu", "rgn", "rif", "rm",
    "rmy", "roa-tara", "ro", "rue", "ru", "rup", "ruq-cyrl", "ruq-latn",
    "ruq", "sah", "sa", "sat", "scn", "sco", "sc", "sdc",
    "sd", "sei", "se", "sg", "sgs", "shi", "sh", "si",
    "sk", "sli", "sl", "sma", "sm", "sn", "so", "sq",
    "sr-ec", "sr-el", "srn", "sr", "ss", "st", "stq", "su",
    "sv", "sw", "szl", "ta", "tcy", "te", "tet", "tg-cyrl",
    "tg-latn", "tg", "th", "ti", "tk", "tl", "tly", "tn",
    "tokipona", "to", "tpi", "tr", "tru", "ts", "tt-cyrl", "tt-latn",
    "tt", "ty", "tyv", "udm", "ug-arab", "ug-latn", "ug", "uk",
    "ur", "uz", "vec", "ve", "vep", "vi", "vls", "vmf",
    "vo", "vot", "vro", "wa", "war", "wo", "wuu", "xal",
    "xh", "xmf", "yi", "yo", "yue", "za", "zea", "zh-cn",
    "zh-hans", "zh-hant", "zh-hk", "zh-mo", "zh-my", "zh", "zh-sg", "zh-tw",
    "zu",
];

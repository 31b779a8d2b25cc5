use std::borrow::Cow;
use std::sync::OnceLock;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::data;
use crate::error::DataError;
use crate::tag::check_canonical;

static BUILTIN: OnceLock<SupportedLocaleCatalog> = OnceLock::new();

/// The fixed set of locales the platform can serve, plus the designated
/// default returned when nothing else matches.
///
/// The default is always considered a member, whether or not it is listed.
#[derive(Clone, Debug)]
pub struct SupportedLocaleCatalog {
    locales: IndexSet<Cow<'static, str>, FxBuildHasher>,
    default: Cow<'static, str>,
}

impl SupportedLocaleCatalog {
    /// The platform's compiled-in catalog, defaulting to `und`.
    pub fn builtin() -> &'static SupportedLocaleCatalog {
        BUILTIN.get_or_init(|| Self::from_static(data::SUPPORTED_LOCALES, data::DEFAULT_LOCALE))
    }

    /// Build a catalog from trusted compiled-in tags.
    pub fn from_static(locales: &'static [&'static str], default: &'static str) -> Self {
        let mut set: IndexSet<Cow<'static, str>, FxBuildHasher> =
            IndexSet::with_capacity_and_hasher(locales.len(), FxBuildHasher);
        set.extend(locales.iter().copied().map(Cow::Borrowed));
        Self {
            locales: set,
            default: Cow::Borrowed(default),
        }
    }

    /// Build a catalog, checking that every tag is canonical and unique.
    pub fn new<I, S>(locales: I, default: impl Into<Cow<'static, str>>) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        let default = default.into();
        check_canonical(&default)?;

        let mut set: IndexSet<Cow<'static, str>, FxBuildHasher> = IndexSet::with_hasher(FxBuildHasher);
        for locale in locales {
            let locale = locale.into();
            check_canonical(&locale)?;
            if set.contains(&*locale) {
                return Err(DataError::Duplicate(locale.into_owned()));
            }
            set.insert(locale);
        }

        Ok(Self {
            locales: set,
            default,
        })
    }

    /// Parse a YAML data file (`{default: und, locales: [...]}`).
    pub fn from_yaml_str(src: &str) -> Result<Self, DataError> {
        crate::yaml::parse_catalog(src)
    }

    /// The stored form of `tag` if it is servable. Comparison is exact, so
    /// callers pass lowercase tags.
    pub fn get(&self, tag: &str) -> Option<&str> {
        if tag == self.default {
            return Some(&*self.default);
        }
        self.locales.get(tag).map(|s| &**s)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    pub fn default_locale(&self) -> &str {
        &self.default
    }

    /// Listed locales in curation order (the default only if listed).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|s| &**s)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

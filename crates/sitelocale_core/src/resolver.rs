use serde::Serialize;

use crate::anomaly::{Anomaly, AnomalyTable};
use crate::catalog::SupportedLocaleCatalog;
use crate::error::LocaleError;
use crate::lookup::{lookup, lookup_with_trace, LookupOutcome};
use crate::tag::LanguageTag;

/// The two-stage pipeline: anomaly substitution, then catalog lookup.
///
/// Borrows its tables, so it is `Copy` and can be shared freely across
/// threads.
#[derive(Clone, Copy, Debug)]
pub struct LocaleResolver<'d> {
    anomalies: &'d AnomalyTable,
    catalog: &'d SupportedLocaleCatalog,
}

/// Everything the pipeline did for one input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution<'d> {
    pub raw: String,
    /// Output of anomaly substitution.
    pub candidate: String,
    /// The table entry that fired, if any.
    pub anomaly: Option<&'d Anomaly>,
    #[serde(flatten)]
    pub lookup: LookupOutcome<'d>,
}

impl Resolution<'_> {
    pub fn selected(&self) -> &str {
        self.lookup.selected
    }
}

impl<'d> LocaleResolver<'d> {
    pub fn new(anomalies: &'d AnomalyTable, catalog: &'d SupportedLocaleCatalog) -> Self {
        Self { anomalies, catalog }
    }

    pub fn anomalies(&self) -> &'d AnomalyTable {
        self.anomalies
    }

    pub fn catalog(&self) -> &'d SupportedLocaleCatalog {
        self.catalog
    }

    /// Stage 1 only: the standards-track candidate for `raw`.
    pub fn substitute<'a>(&self, raw: &'a str) -> &'a str
    where
        'd: 'a,
    {
        self.anomalies.resolve(raw)
    }

    /// Resolve `raw` to a member of the catalog (possibly its default).
    pub fn resolve_locale(&self, raw: &str) -> &'d str {
        let candidate = LanguageTag::parse(self.anomalies.resolve(raw));
        lookup(&candidate, self.catalog)
    }

    /// [`resolve_locale`](Self::resolve_locale), keeping the intermediate steps.
    pub fn explain(&self, raw: &str) -> Resolution<'d> {
        let anomaly = self.anomalies.get(raw);
        let candidate = self.anomalies.resolve(raw).to_string();
        let lookup = lookup_with_trace(&LanguageTag::parse(&candidate), self.catalog);
        Resolution {
            raw: raw.to_string(),
            candidate,
            anomaly,
            lookup,
        }
    }

    /// Map a resolved locale to a platform project code.
    ///
    /// No mapping exists yet; this always returns
    /// [`LocaleError::NotImplemented`].
    pub fn project_code(&self, _locale: &str) -> Result<String, LocaleError> {
        Err(LocaleError::NotImplemented {
            operation: "project_code",
        })
    }
}

impl LocaleResolver<'static> {
    /// Resolver over the compiled-in tables.
    pub fn builtin() -> Self {
        Self::new(AnomalyTable::builtin(), SupportedLocaleCatalog::builtin())
    }
}

impl Default for LocaleResolver<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

//! Command output, as plain text or JSON

use anyhow::Result;
use serde_json::{json, Value};
use sitelocale_core::{Anomaly, AnomalyKind, LanguageTag, LocaleResolver, Resolution};
use std::io::{self, Write};

use crate::config::OutputFormat;

pub fn resolve(
    resolver: &LocaleResolver<'_>,
    codes: &[String],
    explain: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json if explain => {
            let rows: Vec<Resolution<'_>> = codes.iter().map(|c| resolver.explain(c)).collect();
            serde_json::to_writer_pretty(&mut out, &rows)?;
            writeln!(out)?;
        }
        OutputFormat::Json => {
            let rows: Vec<_> = codes
                .iter()
                .map(|c| json!({ "raw": c, "locale": resolver.resolve_locale(c) }))
                .collect();
            serde_json::to_writer_pretty(&mut out, &rows)?;
            writeln!(out)?;
        }
        OutputFormat::Text if explain => {
            for code in codes {
                write_explained(&mut out, &resolver.explain(code))?;
            }
        }
        OutputFormat::Text => {
            for code in codes {
                writeln!(out, "{code}\t{}", resolver.resolve_locale(code))?;
            }
        }
    }
    Ok(())
}

fn write_explained(out: &mut impl Write, res: &Resolution<'_>) -> io::Result<()> {
    writeln!(out, "{}", res.raw)?;
    match res.anomaly {
        Some(a) => writeln!(out, "  anomaly:   {}", describe(a))?,
        None => writeln!(out, "  anomaly:   -")?,
    }
    writeln!(out, "  candidate: {}", res.candidate)?;
    writeln!(out, "  attempts:  {}", res.lookup.attempts.join(", "))?;
    let how = if res.lookup.matched { "match" } else { "default" };
    writeln!(out, "  locale:    {} ({how})", res.selected())
}

pub fn anomaly(resolver: &LocaleResolver<'_>, code: &str, format: OutputFormat) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &anomaly_json(resolver, code))?;
            writeln!(out)?;
        }
        OutputFormat::Text => match resolver.anomalies().get(code) {
            Some(a) => writeln!(out, "{code}\t{}", describe(a))?,
            None => writeln!(out, "{code}\t{}\t(not an anomaly)", resolver.substitute(code))?,
        },
    }
    Ok(())
}

fn anomaly_json(resolver: &LocaleResolver<'_>, code: &str) -> Value {
    json!({
        "raw": code,
        "candidate": resolver.substitute(code),
        "anomaly": resolver.anomalies().get(code),
    })
}

pub fn anomalies(
    resolver: &LocaleResolver<'_>,
    kind: Option<AnomalyKind>,
    format: OutputFormat,
) -> Result<()> {
    let table = resolver.anomalies();
    let rows: Vec<&Anomaly> = match kind {
        Some(kind) => table.iter_kind(kind).collect(),
        None => table.iter().collect(),
    };
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &rows)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for a in rows {
                writeln!(out, "{}\t{}", a.code, describe(a))?;
            }
        }
    }
    Ok(())
}

pub fn inspect(tag: &LanguageTag, format: OutputFormat) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &inspect_json(tag))?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "tag:         {tag}")?;
            writeln!(out, "subtags:     {}", tag.subtags().join(", "))?;
            match tag.private_use_index() {
                Some(i) => writeln!(out, "private use: from subtag {i}")?,
                None => writeln!(out, "private use: -")?,
            }
            writeln!(out, "canonical:   {}", if tag.is_canonical() { "yes" } else { "no" })?;
            match tag.to_langid() {
                Some(id) => writeln!(out, "langid:      {id}")?,
                None => writeln!(out, "langid:      -")?,
            }
        }
    }
    Ok(())
}

fn inspect_json(tag: &LanguageTag) -> Value {
    json!({
        "tag": tag.to_string(),
        "subtags": tag.subtags(),
        "private_use": tag.private_use_index(),
        "canonical": tag.is_canonical(),
        "langid": tag.to_langid().map(|id| json!({
            "language": id.language.as_str(),
            "script": id.script.map(|s| s.as_str().to_string()),
            "region": id.region.map(|r| r.as_str().to_string()),
        })),
    })
}

fn describe(a: &Anomaly) -> String {
    let mut s = format!("{} [{}", a.replacement, a.kind.id());
    if a.uncertain {
        s.push_str(", uncertain");
    }
    s.push(']');
    if let Some(note) = &a.note {
        s.push(' ');
        s.push_str(note);
    }
    s
}

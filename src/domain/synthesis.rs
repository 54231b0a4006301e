//! Env synthesis: merge an override set into a template document.

use crate::domain::OverrideSet;
use crate::domain::env_document::{EnvDocument, Line, QuoteStyle};

/// Merge `overrides` into `template`.
///
/// - A non-empty override for a template key rewrites that line in place.
/// - A template key without an override, or with an empty one, keeps its line verbatim.
/// - Non-empty overrides for keys absent from the template are appended in insertion order.
///
/// Written lines use the template's quote convention. Each key is written at most once.
pub fn synthesize(template: EnvDocument, overrides: OverrideSet) -> EnvDocument {
    let style = template.quote_style();
    apply_overrides(template, overrides, style)
}

/// Layer prior persisted lines over the template, then the fresh overrides on top.
///
/// Persisted assignments replace the template line for the same key byte-for-byte, so
/// quoting the operator chose survives a re-run. Persisted keys unknown to the template
/// are appended verbatim. Fresh overrides are written in the template's quote style.
pub fn synthesize_layered(
    template: EnvDocument,
    persisted: Option<&EnvDocument>,
    overrides: OverrideSet,
) -> EnvDocument {
    let style = template.quote_style();
    let baseline = match persisted {
        Some(previous) => layer_persisted(template, previous),
        None => template,
    };
    apply_overrides(baseline, overrides, style)
}

fn apply_overrides(base: EnvDocument, overrides: OverrideSet, style: QuoteStyle) -> EnvDocument {
    let mut pending: Vec<(String, String)> =
        overrides.into_iter().filter(|(_, value)| !value.is_empty()).collect();

    let mut lines: Vec<Line> = base
        .into_lines()
        .into_iter()
        .map(|line| match line {
            Line::Assignment { key, value, raw } => {
                match pending.iter().position(|(k, _)| *k == key) {
                    Some(index) => {
                        let (_, replacement) = pending.remove(index);
                        let raw = style.format(&key, &replacement);
                        Line::Assignment { key, value: replacement, raw }
                    }
                    None => Line::Assignment { key, value, raw },
                }
            }
            other => other,
        })
        .collect();

    if !pending.is_empty() {
        trim_trailing_blanks(&mut lines);
    }

    for (key, value) in pending {
        let raw = style.format(&key, &value);
        lines.push(Line::Assignment { key, value, raw });
    }

    EnvDocument::from_lines(lines)
}

fn layer_persisted(template: EnvDocument, persisted: &EnvDocument) -> EnvDocument {
    let mut prior: Vec<&Line> = Vec::new();
    for line in persisted.lines() {
        let Some(key) = line.key() else { continue };
        if !prior.iter().any(|seen| seen.key() == Some(key)) {
            prior.push(line);
        }
    }

    let mut lines: Vec<Line> = template
        .into_lines()
        .into_iter()
        .map(|line| {
            let found = line.key().and_then(|key| prior.iter().position(|p| p.key() == Some(key)));
            match found {
                Some(index) => prior.remove(index).clone(),
                None => line,
            }
        })
        .collect();

    if !prior.is_empty() {
        trim_trailing_blanks(&mut lines);
    }
    lines.extend(prior.into_iter().cloned());

    EnvDocument::from_lines(lines)
}

/// Trailing blank lines would be dropped on render; keep appended keys adjacent
/// to the last content line instead.
fn trim_trailing_blanks(lines: &mut Vec<Line>) {
    while matches!(lines.last(), Some(Line::Blank(_))) {
        lines.pop();
    }
}

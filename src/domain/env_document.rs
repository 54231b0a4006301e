//! Line-oriented model of `KEY=value` environment files.
//!
//! Both the shipped template and the persisted `.env` are read through
//! [`classify_line`], so reading and rewriting never disagree about what a
//! line means.

/// One classified line of an environment file.
///
/// Every variant keeps the line exactly as it was read so untouched lines are
/// re-emitted byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Comment(String),
    Blank(String),
    Assignment { key: String, value: String, raw: String },
    /// Non-empty line without a usable `KEY=` prefix, carried through as-is.
    Opaque(String),
}

impl Line {
    pub fn raw(&self) -> &str {
        match self {
            Line::Comment(raw) | Line::Blank(raw) | Line::Opaque(raw) => raw,
            Line::Assignment { raw, .. } => raw,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Line::Assignment { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Classify a single line.
pub fn classify_line(raw: &str) -> Line {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Line::Blank(raw.to_string());
    }
    if trimmed.starts_with('#') {
        return Line::Comment(raw.to_string());
    }

    match trimmed.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Line::Assignment {
            key: key.trim().to_string(),
            value: value.trim().to_string(),
            raw: raw.to_string(),
        },
        _ => Line::Opaque(raw.to_string()),
    }
}

/// How written assignment values are quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    #[default]
    Bare,
    Double,
}

impl QuoteStyle {
    /// Format a `KEY=value` line in this style.
    pub fn format(self, key: &str, value: &str) -> String {
        match self {
            QuoteStyle::Bare => format!("{}={}", key, value),
            QuoteStyle::Double => {
                let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
                format!("{}=\"{}\"", key, escaped)
            }
        }
    }
}

/// Ordered environment document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnvDocument {
    lines: Vec<Line>,
}

impl EnvDocument {
    pub fn parse(content: &str) -> Self {
        Self { lines: content.lines().map(classify_line).collect() }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub(crate) fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    pub(crate) fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Raw value of the first assignment for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Assignment { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// `(key, unquoted value)` pairs in document order, first occurrence only.
    pub fn assignments(&self) -> Vec<(String, String)> {
        let mut seen: Vec<&str> = Vec::new();
        let mut pairs = Vec::new();
        for line in &self.lines {
            if let Line::Assignment { key, value, .. } = line {
                if seen.contains(&key.as_str()) {
                    continue;
                }
                seen.push(key);
                pairs.push((key.clone(), unquote(value)));
            }
        }
        pairs
    }

    /// Quote convention used by this document.
    ///
    /// Double quotes win only when most non-empty values are double-quoted.
    pub fn quote_style(&self) -> QuoteStyle {
        let (mut quoted, mut bare) = (0usize, 0usize);
        for line in &self.lines {
            if let Line::Assignment { value, .. } = line {
                if value.is_empty() {
                    continue;
                }
                if is_double_quoted(value) {
                    quoted += 1;
                } else {
                    bare += 1;
                }
            }
        }
        if quoted > bare { QuoteStyle::Double } else { QuoteStyle::Bare }
    }

    /// Render with exactly one trailing newline (empty documents render empty).
    pub fn render(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut out = self.lines.iter().map(Line::raw).collect::<Vec<_>>().join("\n");
        let trimmed_len = out.trim_end_matches('\n').len();
        out.truncate(trimmed_len);
        out.push('\n');
        out
    }
}

fn is_double_quoted(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('"') && value.ends_with('"')
}

/// Strip one pair of matching surrounding quotes.
pub fn unquote(value: &str) -> String {
    if is_double_quoted(value) {
        let inner = &value[1..value.len() - 1];
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some(next @ ('"' | '\\')) => out.push(next),
                    Some(other) => {
                        out.push('\\');
                        out.push(other);
                    }
                    None => out.push('\\'),
                }
            } else {
                out.push(c);
            }
        }
        return out;
    }
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        return value[1..value.len() - 1].to_string();
    }
    value.to_string()
}

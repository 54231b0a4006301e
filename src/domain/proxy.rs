//! Reverse-proxy template rewriting.

/// Literal tokens replaced in the proxy template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub domain: String,
    pub email: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self { domain: "__DOMAIN__".to_string(), email: "__SSL_EMAIL__".to_string() }
    }
}

/// Replace every placeholder occurrence verbatim.
///
/// The longer placeholder is substituted first so one that contains the other
/// (`me@example.com` vs `example.com`) is not split.
pub fn rewrite(template: &str, domain: &str, email: &str, placeholders: &Placeholders) -> String {
    let mut substitutions =
        [(placeholders.domain.as_str(), domain), (placeholders.email.as_str(), email)];
    substitutions.sort_by_key(|(token, _)| std::cmp::Reverse(token.len()));

    substitutions
        .iter()
        .filter(|(token, _)| !token.is_empty())
        .fold(template.to_string(), |text, (token, value)| text.replace(token, value))
}

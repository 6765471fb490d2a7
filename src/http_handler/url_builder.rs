use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Delimiter wrapping placeholder names in endpoint templates (`/post/:id:`).
pub const PLACEHOLDER_MARKER: char = ':';

static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([A-Za-z_][A-Za-z0-9_]*):").expect("valid placeholder regex"));

/// Replaces every `:key:` token in `endpoint` with the matching value of `url_params`.
///
/// Single pass over the template: placeholders without a value are left
/// untouched and inserted values are never substituted again.
pub fn fill_template(endpoint: &str, url_params: Option<&BTreeMap<String, String>>) -> String {
    let Some(params) = url_params else {
        return endpoint.to_string();
    };
    PLACEHOLDER_PATTERN
        .replace_all(endpoint, |c: &Captures<'_>| {
            params.get(&c[1]).cloned().unwrap_or_else(|| c[0].to_string())
        })
        .into_owned()
}

/// Builds the final request URL: fills the template and, unless the request is
/// external, prefixes it with `base_url`.
pub fn generate_url(
    base_url: &str,
    endpoint: &str,
    url_params: Option<&BTreeMap<String, String>>,
    is_external: bool,
) -> String {
    let path = fill_template(endpoint, url_params);
    if is_external { path } else { format!("{base_url}{path}") }
}

/// Names of placeholders still present in `url`.
pub fn unresolved_placeholders(url: &str) -> Vec<String> {
    PLACEHOLDER_PATTERN.captures_iter(url).map(|c| c[1].to_string()).collect()
}

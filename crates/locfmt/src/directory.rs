//! Lookup of built-in locales by identifier.
//!
//! Every descriptor in [`data::ALL`] is compiled the first time the directory
//! is used and kept for the life of the process. Identifiers are accepted in
//! underscore (`bg_BG`) or BCP 47 (`bg-bg`) form and normalized before lookup.

use std::sync::LazyLock;

use icu_locale_core::LanguageIdentifier;
use tracing::trace;

use crate::data;
use crate::interpreter::{Locale, LocaleError};
use crate::suggest::compute_suggestions;

static LOCALES: LazyLock<Vec<Locale>> = LazyLock::new(|| {
    data::ALL
        .iter()
        .map(|data| Locale::new(data).expect("built-in locale data should compile"))
        .collect()
});

static IDS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| data::ALL.iter().map(|data| data.id).collect());

/// Identifiers of every built-in locale, sorted.
pub fn available() -> &'static [&'static str] {
    IDS.as_slice()
}

/// Find the built-in locale for `id`.
///
/// The identifier is normalized first. If there is no exact match, less
/// specific forms are tried: `az_Latn_AZ`, then `az_AZ`, `az_Latn` and `az`.
/// The error for an unknown locale lists up to three close identifiers.
///
/// # Example
///
/// ```
/// let locale = locfmt::directory::get("bg-bg").unwrap();
/// assert_eq!(locale.id(), "bg_BG");
///
/// let bosnian = locfmt::directory::get("bs_BA").unwrap();
/// assert_eq!(bosnian.id(), "bs");
/// ```
pub fn get(id: &str) -> Result<&'static Locale, LocaleError> {
    let tag = parse(id)?;
    for candidate in candidates(&tag) {
        if let Some(locale) = LOCALES.iter().find(|locale| locale.id() == candidate) {
            trace!(requested = id, resolved = locale.id(), "locale directory hit");
            return Ok(locale);
        }
    }

    trace!(requested = id, "locale directory miss");
    Err(LocaleError::UnknownLocale {
        id: id.to_string(),
        suggestions: suggestions(&tag),
    })
}

/// Normalize `id` to the underscore form used by locale identifiers.
///
/// Case is canonicalized (`AZ-latn-az` becomes `az_Latn_AZ`) and variant
/// subtags are dropped.
pub fn normalize(id: &str) -> Result<String, LocaleError> {
    Ok(parse(id)?.canonical())
}

/// Language, script and region subtags of a parsed identifier.
struct Tag {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl Tag {
    fn canonical(&self) -> String {
        join(&[
            Some(self.language.as_str()),
            self.script.as_deref(),
            self.region.as_deref(),
        ])
    }
}

fn parse(id: &str) -> Result<Tag, LocaleError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(LocaleError::InvalidId {
            id: id.to_string(),
            message: "empty identifier".to_string(),
        });
    }

    let parsed = LanguageIdentifier::try_from_str(&trimmed.replace('_', "-")).map_err(|e| {
        LocaleError::InvalidId {
            id: id.to_string(),
            message: e.to_string(),
        }
    })?;

    Ok(Tag {
        language: parsed.language.as_str().to_string(),
        script: parsed.script.map(|script| script.as_str().to_string()),
        region: parsed.region.map(|region| region.as_str().to_string()),
    })
}

/// Identifiers to try for `tag`, most specific first.
fn candidates(tag: &Tag) -> Vec<String> {
    let language = Some(tag.language.as_str());
    let script = tag.script.as_deref();
    let region = tag.region.as_deref();

    let mut result: Vec<String> = Vec::new();
    for parts in [
        [language, script, region],
        [language, None, region],
        [language, script, None],
        [language, None, None],
    ] {
        let candidate = join(&parts);
        if !result.contains(&candidate) {
            result.push(candidate);
        }
    }
    result
}

fn join(parts: &[Option<&str>]) -> String {
    parts.iter().flatten().copied().collect::<Vec<_>>().join("_")
}

/// Locales sharing the language subtag, then near misses by edit distance.
fn suggestions(tag: &Tag) -> Vec<String> {
    let prefix = format!("{}_", tag.language);
    let mut result: Vec<String> = available()
        .iter()
        .filter(|id| **id == tag.language || id.starts_with(&prefix))
        .map(|id| (*id).to_string())
        .collect();

    for near in compute_suggestions(&tag.canonical(), available()) {
        if !result.contains(&near) {
            result.push(near);
        }
    }

    result.truncate(3);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_canonicalizes_case_and_separators() {
        assert_eq!(normalize("AZ-latn-az").unwrap(), "az_Latn_AZ");
        assert_eq!(normalize("bg_bg").unwrap(), "bg_BG");
        assert_eq!(normalize(" kw ").unwrap(), "kw");
    }

    #[test]
    fn normalize_rejects_malformed_identifiers() {
        assert!(matches!(normalize(""), Err(LocaleError::InvalidId { .. })));
        assert!(matches!(
            normalize("not a locale"),
            Err(LocaleError::InvalidId { .. })
        ));
    }

    #[test]
    fn parse_splits_subtags() {
        let tag = parse("bs_latn_ba").unwrap();
        assert_eq!(tag.language, "bs");
        assert_eq!(tag.script.as_deref(), Some("Latn"));
        assert_eq!(tag.region.as_deref(), Some("BA"));
        let tag = parse("ksf-CM").unwrap();
        assert_eq!((tag.script, tag.region.as_deref()), (None, Some("CM")));
    }

    #[test]
    fn candidates_drop_script_then_region() {
        let tag = parse("az_Latn_AZ").unwrap();
        assert_eq!(
            candidates(&tag),
            vec!["az_Latn_AZ", "az_AZ", "az_Latn", "az"]
        );
        let tag = parse("kw").unwrap();
        assert_eq!(candidates(&tag), vec!["kw"]);
    }

    #[test]
    fn suggestions_prefer_same_language() {
        let tag = parse("es").unwrap();
        assert_eq!(suggestions(&tag)[0], "es_US");
        let tag = parse("az_AZ").unwrap();
        assert_eq!(suggestions(&tag)[0], "az_Latn_AZ");
    }
}

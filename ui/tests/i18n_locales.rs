use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Locale completeness: every non-fallback locale must define every key of
/// the fallback (en-US) `mindpulse-ui.ftl`, and every `t!("...")` used in
/// `src/` must exist in the fallback.
///
/// To add a locale, create `ui/i18n/<locale>/mindpulse-ui.ftl` and register
/// it in `LOCALES` below.
const EN_US: &str = include_str!("../i18n/en-US/mindpulse-ui.ftl");
const LOCALES: &[(&str, &str)] = &[("es-ES", include_str!("../i18n/es-ES/mindpulse-ui.ftl"))];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);
    assert!(!fallback_keys.is_empty(), "Fallback (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}",
            failures.join("\n\n")
        );
    }
}

#[test]
fn every_referenced_key_exists_in_fallback() {
    let fallback_keys = extract_keys(EN_US);
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = referenced_keys(&src_root);
    assert!(!referenced.is_empty(), "no t!(..) call sites found under src/");

    let mut missing: Vec<_> = referenced
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .cloned()
        .collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "Referenced keys missing in en-US:\n{}",
        missing.join("\n")
    );
}

/// Message ids: lines of the form `key =` outside comments, attributes and
/// multi-line variant bodies.
fn extract_keys(src: &str) -> HashSet<String> {
    src.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(message_id)
        .collect()
}

fn message_id(line: &str) -> Option<String> {
    let line = line.trim_end();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') || line.starts_with('-') {
        return None;
    }
    let (left, _) = line.split_once('=')?;
    let key = left.trim();
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'));
    valid.then(|| key.to_string())
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();
    for line in src.lines().filter(|l| !l.starts_with(char::is_whitespace)) {
        if let Some(key) = message_id(line) {
            if !seen.insert(key.clone()) {
                dups.insert(key);
            }
        }
    }
    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}: {dups:?}"
    );
}

/// Literal first arguments of `t!("...")` in Rust sources.
fn referenced_keys(root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for chunk in content.split("t!(\"").skip(1) {
            if let Some((key, _)) = chunk.split_once('"') {
                if key.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

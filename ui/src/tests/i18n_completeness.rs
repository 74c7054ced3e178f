use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "void_ui.ftl";
const I18N_DIR: &str = "i18n";

/// Message ids defined in a Fluent file (`id = ...` lines; comments,
/// attributes and terms skipped).
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(['#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of every `t!("...")` call under `root`.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    let needle = "t!(\"";
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {fallback_file:?}"
    );

    let referenced = referenced_keys(&crate_root.join("src"));
    let missing_in_fallback: Vec<_> = referenced.difference(&fallback_keys).cloned().collect();
    assert!(
        missing_in_fallback.is_empty(),
        "Referenced translation keys missing in fallback:\n{}",
        missing_in_fallback.join("\n")
    );

    let mut per_locale_missing: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Locale {locale} missing expected file {path:?}"));
        let missing: Vec<_> = fallback_keys
            .difference(&parse_ftl_keys(&content))
            .cloned()
            .collect();
        if !missing.is_empty() {
            per_locale_missing.insert(locale, missing);
        }
    }

    if !per_locale_missing.is_empty() {
        let mut report = String::from("Locales with missing translations relative to fallback:\n");
        for (loc, miss) in &per_locale_missing {
            report.push_str(&format!("  {loc} ({} missing)\n", miss.len()));
            for k in miss {
                report.push_str(&format!("    {k}\n"));
            }
        }
        panic!("{report}");
    }
}

#[test]
fn parser_skips_comments_and_attributes() {
    let keys = parse_ftl_keys("# comment\n## group\nnav-home = Home\n    .title = Hover\n-brand = Void\n");
    assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["nav-home"]);
}

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the FTL file in every locale folder.
const FTL_FILENAME: &str = "medcare-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Locale every other one is compared against.
const REFERENCE_LOCALE: &str = "en";

/// Lookup calls whose first argument is a literal message id.
const CALL_NEEDLES: [&str; 2] = [".t(\"", ".t_with(\""];

/// Extract message IDs from a Fluent file: any `<identifier> =` line that is
/// not a comment or a term.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let id = line[..eq_pos].trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-')
}

/// Literal ids passed to `.t("...")` / `.t_with("...", ..)` anywhere under `src/`.
///
/// Ids that are built at runtime or come from content tables are not seen
/// here; `content.rs` checks its own keys.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for needle in CALL_NEEDLES {
            for (pos, _) in content.match_indices(needle) {
                let rest = &content[pos + needle.len()..];
                if let Some(end) = rest.find('"') {
                    let key = &rest[..end];
                    if !key.is_empty() && key.chars().all(valid_key_char) {
                        found.insert(key.to_string());
                    }
                }
            }
        }
    }

    found
}

fn collect_locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|read_dir| {
            read_dir
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
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

    // 1. Reference locale must exist.
    let reference_file = i18n_root.join(REFERENCE_LOCALE).join(FTL_FILENAME);
    let reference_content =
        fs::read_to_string(&reference_file).expect("Failed to read reference FTL file");
    let reference_keys = parse_ftl_keys(&reference_content);
    assert!(
        !reference_keys.is_empty(),
        "No message keys parsed from reference FTL: {:?}",
        reference_file
    );

    // 2. Every id used in the sources is defined.
    let referenced_keys = extract_translation_keys_from_source(&crate_root.join("src"));
    assert!(!referenced_keys.is_empty(), "no translation calls found under src/");

    let mut missing_in_reference: Vec<_> = referenced_keys
        .iter()
        .filter(|k| !reference_keys.contains(*k))
        .cloned()
        .collect();
    missing_in_reference.sort();
    assert!(
        missing_in_reference.is_empty(),
        "Referenced translation keys missing in {REFERENCE_LOCALE} ({}):\n{}",
        missing_in_reference.len(),
        missing_in_reference.join("\n")
    );

    // 3. No locale lags behind the reference.
    let locales = collect_locale_dirs(&i18n_root);
    assert_eq!(locales, ["en", "ru", "uk"]);

    let mut per_locale_missing: HashMap<String, Vec<String>> = HashMap::new();
    for locale in locales {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Locale folder {locale:?} missing {path:?}"));
        let keys = parse_ftl_keys(&content);

        let missing: Vec<_> = reference_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .cloned()
            .collect();
        if !missing.is_empty() {
            per_locale_missing.insert(locale, missing);
        }
    }

    if !per_locale_missing.is_empty() {
        let mut report = String::from("Locales with missing translations:\n");
        for (loc, miss) in &per_locale_missing {
            report.push_str(&format!("  {loc} ({} missing)\n", miss.len()));
            for k in miss {
                report.push_str(&format!("    {k}\n"));
            }
        }
        panic!("{report}");
    }
}

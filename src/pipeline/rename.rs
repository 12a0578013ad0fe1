use super::{control::RunControl, record::FileRecord, Stage};
use crate::error::{Error, Result};
use regex::Regex;

/// One compiled rename rule: a pattern tested against the full relative path
/// and a replacement with capture-group references.
#[derive(Debug)]
pub struct RenameRule {
    pattern: Regex,
    replacement: String,
}

impl RenameRule {
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: normalize_replacement(replacement),
        })
    }

    /// Applies the rule to a relative path; non-matching paths pass through.
    fn apply(&self, relative: &str) -> Option<String> {
        if !self.pattern.is_match(relative) {
            return None;
        }
        Some(self.pattern.replace(relative, self.replacement.as_str()).into_owned())
    }
}

/// Applies the rules in list order to every record. Rule N+1 sees the output
/// of rule N, so rules compose left to right.
pub fn rename_files(
    mut records: Vec<FileRecord>,
    rules: &[RenameRule],
    control: &RunControl,
) -> Result<Vec<FileRecord>> {
    for record in &mut records {
        control.checkpoint(Stage::Rename)?;
        for rule in rules {
            let Some(renamed) = rule.apply(&record.relative) else {
                continue;
            };
            if !is_safe_relative(&renamed) {
                return Err(Error::InvalidPathError {
                    file: record.relative.clone(),
                    rendered: renamed,
                });
            }
            log::debug!("Renaming '{}' to '{renamed}'", record.relative);
            record.relative = renamed;
        }
    }
    Ok(records)
}

/// Rewrites JavaScript-style `$1` capture references into the `${1}` form,
/// so a replacement like `$1Button$2` substitutes group 1 followed by the
/// literal `Button` instead of looking up a group named `1Button`.
fn normalize_replacement(replacement: &str) -> String {
    let mut normalized = String::with_capacity(replacement.len());
    let mut chars = replacement.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '$' {
            normalized.push(ch);
            continue;
        }
        match chars.peek() {
            Some('$') => {
                chars.next();
                normalized.push_str("$$");
            }
            Some(c) if c.is_ascii_digit() => {
                let mut group = String::new();
                while let Some(c) = chars.peek() {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    group.push(*c);
                    chars.next();
                }
                normalized.push_str("${");
                normalized.push_str(&group);
                normalized.push('}');
            }
            _ => normalized.push('$'),
        }
    }
    normalized
}

/// A renamed path must stay a non-empty relative path inside the
/// destination root.
fn is_safe_relative(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && path.split('/').all(|part| !part.is_empty() && part != "..")
}

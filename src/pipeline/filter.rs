use super::record::FileRecord;
use regex::Regex;

/// Drops every record whose relative path matches at least one remove
/// pattern. Pure function over the record set; order-independent.
pub fn remove_files(records: Vec<FileRecord>, patterns: &[Regex]) -> Vec<FileRecord> {
    if patterns.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| {
            let removed = patterns.iter().any(|pattern| pattern.is_match(&record.relative));
            if removed {
                log::debug!("Removing '{}' (matches remove pattern)", record.relative);
            }
            !removed
        })
        .collect()
}

/// Duplicate detection by base name.
///
/// Every occurrence of a name after the first is reported as a pair with the
/// *first* record seen for that name. Pairs are never chained to the
/// previous occurrence, so `["a", "b", "a", "a"]` yields `(rec0, rec2)` and
/// `(rec0, rec3)`.
use crate::model::MediaRecord;
use std::collections::HashMap;

/// One name collision.
#[derive(Debug, Clone, Copy)]
pub struct DuplicateEntry<'a> {
    pub name: &'a str,
    /// First record discovered with this name.
    pub first: &'a MediaRecord,
    /// A later record with the same name.
    pub duplicate: &'a MediaRecord,
}

/// Find every name collision in discovery order.
///
/// Matching is exact and case-sensitive on `MediaRecord::name`.
pub fn find_duplicates(records: &[MediaRecord]) -> Vec<DuplicateEntry<'_>> {
    let mut first_seen: HashMap<&str, &MediaRecord> = HashMap::with_capacity(records.len());
    let mut duplicates = Vec::new();

    for record in records {
        match first_seen.get(record.name.as_str()) {
            Some(&first) => duplicates.push(DuplicateEntry {
                name: record.name.as_str(),
                first,
                duplicate: record,
            }),
            None => {
                first_seen.insert(record.name.as_str(), record);
            }
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MediaType;
    use compact_str::CompactString;
    use std::path::PathBuf;

    fn record(dir: &str, name: &str) -> MediaRecord {
        MediaRecord {
            location: PathBuf::from(format!("/nas/Media1/{dir}/{name}.mkv")),
            name: CompactString::new(name),
            media_dir: CompactString::new("Media1"),
            size_bytes: 10,
            media_type: MediaType::Movie,
        }
    }

    #[test]
    fn pairs_always_reference_first_record() {
        let records = vec![
            record("a0", "a"),
            record("b1", "b"),
            record("a2", "a"),
            record("a3", "a"),
        ];
        let dups = find_duplicates(&records);

        assert_eq!(dups.len(), 2);
        assert_eq!(dups[0].name, "a");
        assert_eq!(dups[0].first.location, records[0].location);
        assert_eq!(dups[0].duplicate.location, records[2].location);
        assert_eq!(dups[1].first.location, records[0].location);
        assert_eq!(dups[1].duplicate.location, records[3].location);
    }

    #[test]
    fn names_are_case_sensitive() {
        let records = vec![record("x", "Alien"), record("y", "alien")];
        assert!(find_duplicates(&records).is_empty());
    }

    #[test]
    fn unique_names_yield_nothing() {
        let records = vec![record("x", "one"), record("y", "two")];
        assert!(find_duplicates(&records).is_empty());
        assert!(find_duplicates(&[]).is_empty());
    }

    #[test]
    fn interleaved_names_keep_discovery_order() {
        let records = vec![
            record("1", "a"),
            record("2", "b"),
            record("3", "b"),
            record("4", "a"),
        ];
        let dups = find_duplicates(&records);
        let names: Vec<&str> = dups.iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(dups[0].first.location, records[1].location);
        assert_eq!(dups[1].first.location, records[0].location);
    }
}

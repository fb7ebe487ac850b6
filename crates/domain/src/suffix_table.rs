use crate::parsed_host::{split_labels, suffix_candidates};
use crate::{DomainError, ParsedHost};
use rustc_hash::FxHashSet;

/// Flat set of public suffixes.
///
/// Entries are lower-case with the list's exception (`!`) and wildcard
/// (`*.`) markers removed. A table is immutable once built; refreshes
/// build a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixTable {
    entries: FxHashSet<String>,
}

impl SuffixTable {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .filter_map(|entry| normalize_entry(entry.as_ref()))
                .collect(),
        }
    }

    /// Parses the text format published by the public suffix authority.
    pub fn from_list_text(text: &str) -> Self {
        Self::from_entries(text.lines().filter(|line| !is_comment(line)))
    }

    /// Reads the cached form (a JSON array of strings).
    pub fn from_json(bytes: &[u8]) -> Result<Self, DomainError> {
        let entries: Vec<String> = serde_json::from_slice(bytes)
            .map_err(|e| DomainError::CacheError(format!("corrupt suffix cache: {}", e)))?;
        Ok(Self::from_entries(entries))
    }

    pub fn to_json(&self) -> Vec<u8> {
        let mut entries: Vec<&str> = self.entries.iter().map(String::as_str).collect();
        entries.sort_unstable();
        serde_json::to_vec(&entries).unwrap_or_else(|_| b"[]".to_vec())
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.contains(&candidate.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn parse(&self, hostname: &str) -> ParsedHost {
        first_match(hostname, |candidate| self.contains(candidate))
    }
}

/// Splits `source` on the first suffix, narrowest first, accepted by
/// `contains`. Wider candidates are not consulted after a hit.
pub fn first_match<F>(source: &str, mut contains: F) -> ParsedHost
where
    F: FnMut(&str) -> bool,
{
    let labels = split_labels(source);
    if labels.len() < 2 {
        return ParsedHost::unresolved(source);
    }

    let matched = suffix_candidates(&labels)
        .into_iter()
        .find(|(_, candidate)| contains(candidate))
        .map_or(0, |(suffix_len, _)| suffix_len);

    ParsedHost::matched(source, &labels, matched)
}

fn is_comment(line: &str) -> bool {
    let line = line.trim();
    line.starts_with("//") || line.starts_with('#')
}

fn normalize_entry(raw: &str) -> Option<String> {
    let token = raw.split_whitespace().next()?;
    let stripped = token.replace('!', "").replace("*.", "").replace('*', "");
    let entry = stripped.trim_matches('.').to_lowercase();
    if entry.is_empty() {
        None
    } else {
        Some(entry)
    }
}

use serde::Serialize;

/// Outcome of splitting one hostname against the suffix table.
///
/// A fresh value is produced for every call; nothing is shared between
/// resolutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedHost {
    pub source: String,
    pub port: u16,
    pub tld: Option<String>,
    pub domain: Option<String>,
    pub host: Option<String>,
}

impl ParsedHost {
    /// Host-only result for input that has no resolvable suffix.
    pub fn unresolved(source: &str) -> Self {
        Self {
            source: source.to_string(),
            port: parse_port(source),
            tld: None,
            domain: None,
            host: Some(source.to_string()),
        }
    }

    /// Builds the result once the suffix made of the last `suffix_len`
    /// labels has been matched.
    pub fn matched(source: &str, labels: &[String], suffix_len: usize) -> Self {
        if suffix_len == 0 || suffix_len >= labels.len() {
            return Self::unresolved(source);
        }

        let domain_index = labels.len() - suffix_len - 1;
        let tld = labels[domain_index + 1..].join(".").to_lowercase();
        let domain = format!("{}.{}", labels[domain_index].to_lowercase(), tld);
        let host = if domain_index == 0 {
            None
        } else {
            Some(labels[..domain_index].join(".").to_lowercase())
        };

        Self {
            source: source.to_string(),
            port: parse_port(source),
            tld: Some(tld),
            domain: Some(domain),
            host,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.domain.is_some()
    }

    pub fn is_apex(&self) -> bool {
        self.domain.is_some() && self.host.is_none()
    }
}

/// Trailing `:digits` of the source, or 0.
pub fn parse_port(source: &str) -> u16 {
    let trimmed = source.trim();
    match trimmed.rsplit_once(':') {
        Some((_, digits)) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            digits.parse().unwrap_or(0)
        }
        _ => 0,
    }
}

/// Non-empty labels of the source with any trailing `:port` removed.
pub fn split_labels(source: &str) -> Vec<String> {
    let trimmed = source.trim();
    let without_port = match trimmed.rsplit_once(':') {
        Some((name, digits)) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            name
        }
        _ => trimmed,
    };

    without_port
        .split('.')
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Suffix candidates from narrowest to widest, each paired with its label
/// count. The leftmost label is never part of a candidate since a
/// registrable domain needs one label in front of its suffix.
pub fn suffix_candidates(labels: &[String]) -> Vec<(usize, String)> {
    let mut candidates = Vec::with_capacity(labels.len().saturating_sub(1));
    let mut candidate = String::new();

    for (taken, label) in labels.iter().rev().enumerate() {
        if taken + 1 >= labels.len() {
            break;
        }
        candidate = if candidate.is_empty() {
            label.to_lowercase()
        } else {
            format!("{}.{}", label.to_lowercase(), candidate)
        };
        candidates.push((taken + 1, candidate.clone()));
    }

    candidates
}

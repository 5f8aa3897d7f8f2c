//! Tag handle resolution.
//!
//! Each document scopes a `handle -> prefix` table seeded with the YAML
//! defaults. Full tag URIs compact to `handle + suffix` shorthand when a
//! prefix matches and the remainder fits the shorthand character grammar;
//! otherwise the emitter falls back to the verbatim `!<uri>` form.

use std::sync::OnceLock;

use regex::Regex;

/// Characters legal in a tag shorthand suffix: percent-escaped byte
/// triplets plus a fixed set of URI characters.
fn suffix_regex() -> &'static Regex {
    static SUFFIX_REGEX: OnceLock<Regex> = OnceLock::new();
    SUFFIX_REGEX.get_or_init(|| {
        Regex::new(r"\A(?:%[0-9a-fA-F]{2}|[-0-9a-z#;/?:@&=+$_.~*'()])*\z")
            .expect("Invalid tag suffix regex")
    })
}

/// Insertion-ordered handle table; defaults first unless a document
/// directive overrides them.
#[derive(Debug, Clone)]
pub(crate) struct TagMap {
    entries: Vec<(String, String)>,
}

impl TagMap {
    pub(crate) fn with_defaults() -> Self {
        Self {
            entries: vec![
                ("!".to_string(), "!".to_string()),
                ("!!".to_string(), "tag:yaml.org,2002:".to_string()),
            ],
        }
    }

    /// The table for a document's subtree: defaults overlaid with the
    /// document's own directives. An overriding handle keeps its original
    /// position; new handles append in directive order.
    pub(crate) fn scoped(directives: &[(String, String)]) -> Self {
        let mut map = Self::with_defaults();
        for (handle, prefix) in directives {
            if let Some(entry) = map.entries.iter_mut().find(|(h, _)| h == handle) {
                entry.1 = prefix.clone();
            } else {
                map.entries.push((handle.clone(), prefix.clone()));
            }
        }
        map
    }

    /// Compact a full tag URI into `(handle, suffix)` shorthand.
    /// First matching prefix wins. `None` means no legal shorthand exists
    /// and the tag must be emitted verbatim.
    pub(crate) fn compact<'a>(&'a self, tag: &'a str) -> Option<(&'a str, &'a str)> {
        for (handle, prefix) in &self.entries {
            if let Some(suffix) = tag.strip_prefix(prefix.as_str())
                && suffix_regex().is_match(suffix)
            {
                return Some((handle, suffix));
            }
        }
        None
    }
}

// src/table.rs

use std::collections::HashMap;

use crate::host::{CHANNEL, DiagnosticSink};
use crate::lookup;

/// Immutable source-code → replacement-code table for one site group.
///
/// Built once per group and shared across render passes; construction is the
/// only writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideTable {
    overrides: HashMap<String, String>,
}

impl OverrideTable {
    /// Build a table from language-code pairs. Each pair added is reported
    /// to the diagnostic sink.
    pub fn from_pairs<I, K, V>(pairs: I, sink: &dyn DiagnosticSink) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut overrides = HashMap::new();
        for (source, target) in pairs {
            let (source, target) = (source.into(), target.into());
            sink.log(CHANNEL, &format!("setting up pair ({source} – {target})"));
            overrides.insert(source, target);
        }
        Self { overrides }
    }

    /// Replacement code for `source`, or `None` when no override is
    /// configured. An empty source code never matches.
    pub fn resolve(&self, source: &str) -> Option<&str> {
        let needle = (!source.is_empty()).then_some(source);
        lookup::find(needle, Some(&self.overrides)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

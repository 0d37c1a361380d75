// src/group.rs

use std::sync::Arc;

use crate::host::{CHANNEL, DiagnosticSink, SiteRegistry};
use crate::link::TargetReference;

/// Resolves the site group a link's target belongs to.
///
/// Resolution never fails: every branch that cannot classify the site ends
/// at the configured default group, so downstream lookups at worst miss.
pub struct GroupResolver {
    registry: Arc<dyn SiteRegistry>,
    default_group: String,
    sink: Arc<dyn DiagnosticSink>,
}

impl GroupResolver {
    pub fn new(
        registry: Arc<dyn SiteRegistry>,
        default_group: impl Into<String>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            registry,
            default_group: default_group.into(),
            sink,
        }
    }

    pub fn default_group(&self) -> &str {
        &self.default_group
    }

    /// Group for the target's originating site, or the default group when
    /// the site cannot be identified or classified.
    pub fn resolve_group(&self, target: &TargetReference) -> String {
        let identifier = target.interwiki.as_str();
        if identifier.is_empty() {
            self.sink.log(
                CHANNEL,
                "target carries no site identifier, using default group",
            );
            return self.default_group.clone();
        }

        let Some(site) = self.registry.lookup(identifier) else {
            self.sink.log(
                CHANNEL,
                &format!("no site record for '{identifier}', using default group"),
            );
            return self.default_group.clone();
        };

        match site.group() {
            Some(group) => group.to_owned(),
            None => {
                self.sink.log(
                    CHANNEL,
                    &format!("site '{identifier}' has no group, using default group"),
                );
                self.default_group.clone()
            }
        }
    }
}

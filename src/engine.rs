//! Composition root: group resolution, table lookup and field derivation
//! wired into one "rewrite this link or leave it alone" operation.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::bcp47::Bcp47;
use crate::config::OverrideSpec;
use crate::derive::LinkFieldDeriver;
use crate::group::GroupResolver;
use crate::host::{
    CHANNEL, DiagnosticSink, EmptyRegistry, LanguageCodeNormalizer, LanguageNameProvider, LogSink,
    MessageProvider, RenderContext, SiteRegistry,
};
use crate::link::{LanguageLink, TargetReference};
use crate::message::MessageStore;
use crate::names::StaticNames;
use crate::table::OverrideTable;

/// The override engine. Constructed once at process start and shared across
/// requests; per-group tables are built on first use and cached for the
/// process lifetime.
pub struct OverrideEngine {
    spec: OverrideSpec,
    groups: GroupResolver,
    deriver: LinkFieldDeriver,
    sink: Arc<dyn DiagnosticSink>,
    tables: RwLock<HashMap<String, Arc<OverrideTable>>>,
}

impl OverrideEngine {
    pub fn builder() -> OverrideEngineBuilder {
        OverrideEngineBuilder::default()
    }

    /// Rewrite `link` in place when an override applies.
    ///
    /// Returns `true` when the link was rewritten. On `false` the link is
    /// untouched, field for field. `href` and the link class are never
    /// written either way.
    pub fn apply(
        &self,
        link: &mut LanguageLink,
        target: &TargetReference,
        viewer: &RenderContext,
    ) -> bool {
        let source = link.lang_code.clone();
        if source.is_empty() {
            self.sink
                .log(CHANNEL, "language link carries no language code");
            return false;
        }

        let group = self.groups.resolve_group(target);
        let Some(table) = self.table_for(&group) else {
            self.sink
                .log(CHANNEL, &format!("no override table for group '{group}'"));
            return false;
        };

        let Some(replacement) = table.resolve(&source).map(str::to_owned) else {
            self.sink.log(
                CHANNEL,
                &format!("no override for '{source}' in group '{group}'"),
            );
            return false;
        };
        if replacement.is_empty() {
            return false;
        }

        let fields = self.deriver.derive(&replacement, target, viewer);
        link.text = fields.text;
        link.title = fields.title;
        link.css_class = fields.css_class;
        link.lang_code = fields.lang_tag;

        self.sink.log(
            CHANNEL,
            &format!("rewrote link for ({source} – {replacement}) pair"),
        );
        true
    }

    /// Host-facing hook, invoked once per discovered language link.
    /// Always asks the renderer to continue.
    pub fn on_resolve_language_link(
        &self,
        link: &mut LanguageLink,
        target: &TargetReference,
        _page_title: &str,
        viewer: &RenderContext,
    ) -> bool {
        self.apply(link, target, viewer);
        true
    }

    /// Cached table for `group`, building it from the spec on first use.
    /// `None` when the spec has no entry for the group.
    fn table_for(&self, group: &str) -> Option<Arc<OverrideTable>> {
        {
            let cache = self.tables.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(table) = cache.get(group) {
                return Some(Arc::clone(table));
            }
        }

        let pairs = self.spec.group(group)?;
        let mut cache = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let table = cache.entry(group.to_owned()).or_insert_with(|| {
            Arc::new(OverrideTable::from_pairs(
                pairs.iter().map(|(s, t)| (s.clone(), t.clone())),
                self.sink.as_ref(),
            ))
        });
        Some(Arc::clone(table))
    }
}

/// Builder wiring the engine's collaborators. Only the spec and, for any
/// host with real sites, the registry need to be supplied; every other seam
/// has a built-in default.
pub struct OverrideEngineBuilder {
    spec: OverrideSpec,
    registry: Arc<dyn SiteRegistry>,
    names: Arc<dyn LanguageNameProvider>,
    normalizer: Arc<dyn LanguageCodeNormalizer>,
    messages: Arc<dyn MessageProvider>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for OverrideEngineBuilder {
    fn default() -> Self {
        Self {
            spec: OverrideSpec::default(),
            registry: Arc::new(EmptyRegistry),
            names: Arc::new(StaticNames::new()),
            normalizer: Arc::new(Bcp47),
            messages: Arc::new(MessageStore::with_defaults()),
            sink: Arc::new(LogSink),
        }
    }
}

impl OverrideEngineBuilder {
    pub fn spec(mut self, spec: OverrideSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn site_registry<R: SiteRegistry + 'static>(mut self, registry: R) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    pub fn language_names<N: LanguageNameProvider + 'static>(mut self, names: N) -> Self {
        self.names = Arc::new(names);
        self
    }

    pub fn code_normalizer<C: LanguageCodeNormalizer + 'static>(mut self, normalizer: C) -> Self {
        self.normalizer = Arc::new(normalizer);
        self
    }

    pub fn messages<M: MessageProvider + 'static>(mut self, messages: M) -> Self {
        self.messages = Arc::new(messages);
        self
    }

    pub fn diagnostics<S: DiagnosticSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    pub fn build(self) -> OverrideEngine {
        let groups = GroupResolver::new(
            self.registry,
            self.spec.default_group.clone(),
            Arc::clone(&self.sink),
        );
        let deriver = LinkFieldDeriver::new(
            self.names,
            self.normalizer,
            self.messages,
            Arc::clone(&self.sink),
        );
        OverrideEngine {
            spec: self.spec,
            groups,
            deriver,
            sink: self.sink,
            tables: RwLock::new(HashMap::new()),
        }
    }
}

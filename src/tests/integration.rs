#[cfg(test)]
mod integration_tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use super::support::{MapRegistry, NullSink, RecordingSink};
    use crate::config::OverrideSpec;
    use crate::engine::OverrideEngine;
    use crate::group::GroupResolver;
    use crate::host::{EmptyRegistry, RenderContext};
    use crate::link::{INTERLANGUAGE_LINK_TARGET, LanguageLink, TargetReference};

    fn spec(default_group: &str, groups: &[(&str, &[(&str, &str)])]) -> OverrideSpec {
        let groups = groups
            .iter()
            .map(|(name, pairs)| {
                (
                    (*name).to_owned(),
                    pairs
                        .iter()
                        .map(|(s, t)| ((*s).to_owned(), (*t).to_owned()))
                        .collect::<HashMap<_, _>>(),
                )
            })
            .collect();
        OverrideSpec::new(groups, default_group).unwrap()
    }

    fn nb_link() -> LanguageLink {
        LanguageLink::new(
            "https://no.wikipedia.org/wiki/Foo",
            "none",
            "none",
            "interlanguage-link interwiki-nb",
            "nb",
        )
    }

    #[test]
    fn rewrites_link_end_to_end() {
        let engine = OverrideEngine::builder()
            .spec(spec("wikipedia", &[("wikipedia", &[("nb", "no")])]))
            .build();

        let mut link = nb_link();
        let target = TargetReference::new("no", "Foo");

        assert!(engine.apply(&mut link, &target, &RenderContext::default()));

        assert_eq!(link.lang_code, "no");
        assert_eq!(link.hreflang(), "no");
        assert_eq!(link.css_class, "interlanguage-link interwiki-no");
        assert_eq!(link.text, "norsk bokmål");
        assert_eq!(link.title, "Foo – norsk bokmål");
        assert_eq!(link.href, "https://no.wikipedia.org/wiki/Foo");
        assert_eq!(link.link_class(), INTERLANGUAGE_LINK_TARGET);
    }

    #[test]
    fn unconfigured_source_code_is_a_strict_noop() {
        let engine = OverrideEngine::builder()
            .spec(spec("wikipedia", &[("wikipedia", &[("nb", "no")])]))
            .build();

        let mut link = nb_link();
        link.lang_code = "sv".to_owned();
        let before = link.clone();

        let target = TargetReference::new("sv", "Foo");
        assert!(!engine.apply(&mut link, &target, &RenderContext::default()));
        assert_eq!(link, before);
    }

    #[test]
    fn missing_group_table_is_a_noop() {
        let engine = OverrideEngine::builder()
            .spec(spec("wikivoyage", &[("wikipedia", &[("nb", "no")])]))
            .build();

        // Default group is "wikivoyage", which has no table.
        let mut link = nb_link();
        let before = link.clone();
        let target = TargetReference::new("no", "Foo");
        assert!(!engine.apply(&mut link, &target, &RenderContext::default()));
        assert_eq!(link, before);
    }

    #[test]
    fn empty_lang_code_is_a_noop() {
        let engine = OverrideEngine::builder()
            .spec(spec("wikipedia", &[("wikipedia", &[("nb", "no")])]))
            .build();

        let mut link = nb_link();
        link.lang_code = String::new();
        let before = link.clone();
        let target = TargetReference::new("no", "Foo");
        assert!(!engine.apply(&mut link, &target, &RenderContext::default()));
        assert_eq!(link, before);
    }

    #[test]
    fn group_resolution_falls_back_to_default() {
        let resolver = GroupResolver::new(
            Arc::new(EmptyRegistry),
            "wikipedia",
            Arc::new(NullSink),
        );
        assert_eq!(resolver.default_group(), "wikipedia");
        assert_eq!(
            resolver.resolve_group(&TargetReference::new("no", "Foo")),
            "wikipedia"
        );
        assert_eq!(
            resolver.resolve_group(&TargetReference::new("", "Foo")),
            "wikipedia"
        );
    }

    #[test]
    fn unclassified_site_falls_back_to_default() {
        let registry = MapRegistry::default()
            .with_site("no", None)
            .with_site("sv", Some("wikiquote"));
        let resolver = GroupResolver::new(Arc::new(registry), "wikipedia", Arc::new(NullSink));

        assert_eq!(
            resolver.resolve_group(&TargetReference::new("no", "Foo")),
            "wikipedia"
        );
        assert_eq!(
            resolver.resolve_group(&TargetReference::new("sv", "Foo")),
            "wikiquote"
        );
    }

    #[test]
    fn registry_group_selects_its_own_table() {
        let registry = MapRegistry::default().with_site("no", Some("wikiquote"));
        let engine = OverrideEngine::builder()
            .spec(spec(
                "wikipedia",
                &[
                    ("wikipedia", &[("nb", "no")]),
                    ("wikiquote", &[("nb", "nn")]),
                ],
            ))
            .site_registry(registry)
            .build();

        let mut link = nb_link();
        let target = TargetReference::new("no", "Foo");
        assert!(engine.apply(&mut link, &target, &RenderContext::default()));
        assert_eq!(link.lang_code, "nn");
        assert_eq!(link.text, "norsk nynorsk");
    }

    #[test]
    fn second_apply_is_a_noop() {
        let engine = OverrideEngine::builder()
            .spec(spec("wikipedia", &[("wikipedia", &[("nb", "no")])]))
            .build();

        let mut link = nb_link();
        let target = TargetReference::new("no", "Foo");
        assert!(engine.apply(&mut link, &target, &RenderContext::default()));

        // The rewritten code is not a configured source code any more.
        let rewritten = link.clone();
        assert!(!engine.apply(&mut link, &target, &RenderContext::default()));
        assert_eq!(link, rewritten);
    }

    #[test]
    fn group_table_is_built_once() {
        let sink = RecordingSink::default();
        let engine = OverrideEngine::builder()
            .spec(spec("wikipedia", &[("wikipedia", &[("nb", "no")])]))
            .diagnostics(sink.clone())
            .build();

        let target = TargetReference::new("no", "Foo");
        for _ in 0..3 {
            let mut link = nb_link();
            engine.apply(&mut link, &target, &RenderContext::default());
        }

        let setup_lines = sink
            .lines()
            .iter()
            .filter(|line| line.contains("setting up pair"))
            .count();
        assert_eq!(setup_lines, 1);
    }

    #[test]
    fn hook_always_continues_rendering() {
        let engine = OverrideEngine::builder()
            .spec(spec("wikipedia", &[("wikipedia", &[("nb", "no")])]))
            .build();

        let viewer = RenderContext::default();
        let target = TargetReference::new("no", "Foo");

        let mut hit = nb_link();
        assert!(engine.on_resolve_language_link(&mut hit, &target, "Lang code override", &viewer));
        assert_eq!(hit.lang_code, "no");

        let mut miss = nb_link();
        miss.lang_code = "sv".to_owned();
        assert!(engine.on_resolve_language_link(&mut miss, &target, "Lang code override", &viewer));
        assert_eq!(miss.lang_code, "sv");
    }

    #[test]
    fn spec_loads_from_toml() {
        let spec: OverrideSpec = toml::from_str(
            r#"
            default_group = "wikipedia"

            [groups.wikipedia]
            nb = "no"
            nn = "no"

            [groups.wikiquote]
            nb = "nn"
            "#,
        )
        .unwrap();
        spec.validate().unwrap();
        assert_eq!(spec.default_group, "wikipedia");

        let engine = OverrideEngine::builder().spec(spec).build();
        let mut link = nb_link();
        let target = TargetReference::new("no", "Foo");
        assert!(engine.apply(&mut link, &target, &RenderContext::default()));
        assert_eq!(link.lang_code, "no");
    }

    #[test]
    fn default_group_defaults_when_omitted() {
        let spec: OverrideSpec = toml::from_str(
            r#"
            [groups.wikipedia]
            nb = "no"
            "#,
        )
        .unwrap();
        assert_eq!(spec.default_group, "wikipedia");
    }
}

//! Sidebar builders for the Project X documentation.
//!
//! Every locale shows the same navigation shape. Only group labels and the
//! locale path prefix differ, so the page lists below are shared constants.

use crate::node::{LocaleSidebar, NavEntry, NavNode, SidebarSpec};

const FEATURE_PAGES: [&str; 5] = [
    "features/vless",
    "features/xtls",
    "features/fallback",
    "features/env",
    "features/multiple",
];

const CONFIG_PAGES: [&str; 10] = [
    "api",
    "dns",
    "fakedns",
    "inbound",
    "outbound",
    "policy",
    "reverse",
    "routing",
    "stats",
    "transport",
];

const INBOUND_PAGES: [&str; 7] = [
    "inbounds/dokodemo",
    "inbounds/http",
    "inbounds/shadowsocks",
    "inbounds/socks",
    "inbounds/trojan",
    "inbounds/vless",
    "inbounds/vmess",
];

const OUTBOUND_PAGES: [&str; 9] = [
    "outbounds/blackhole",
    "outbounds/dns",
    "outbounds/freedom",
    "outbounds/http",
    "outbounds/shadowsocks",
    "outbounds/socks",
    "outbounds/trojan",
    "outbounds/vless",
    "outbounds/vmess",
];

const TRANSPORT_PAGES: [&str; 6] = [
    "transports/grpc",
    "transports/h2",
    "transports/mkcp",
    "transports/quic",
    "transports/tcp",
    "transports/websocket",
];

const LEVEL0_CHAPTERS: [&str; 9] = [
    "ch01-preface",
    "ch02-preparation",
    "ch03-ssh",
    "ch04-security",
    "ch05-webpage",
    "ch06-certificates",
    "ch07-xray-server",
    "ch08-xray-clients",
    "ch09-appendix",
];

const LEVEL1_CHAPTERS: [&str; 5] = [
    "fallbacks-lv1",
    "routing-lv1-part1",
    "routing-lv1-part2",
    "work",
    "fallbacks-with-sni",
];

const LEVEL2_CHAPTERS: [&str; 4] = [
    "transparent_proxy/transparent_proxy",
    "tproxy",
    "iptables_gid",
    "redirect",
];

/// Build the configuration-reference sidebar of one locale.
///
/// Returns five groups in fixed order: feature details, basic config,
/// inbounds, outbounds, transports. All groups except the first are pinned
/// open and carry a base path under `{locale_prefix}config/`.
///
/// `locale_prefix` is expected to start and end with `/` but is not checked:
/// a prefix without its trailing slash yields a base path such as
/// `/enconfig/`.
#[must_use]
pub fn build_config_sidebar(
    feature: &str,
    config: &str,
    inbound: &str,
    outbound: &str,
    transport: &str,
    locale_prefix: &str,
) -> Vec<NavEntry> {
    let config_path = format!("{locale_prefix}config/");

    vec![
        NavNode::group(feature, FEATURE_PAGES).into(),
        NavNode::group(config, CONFIG_PAGES)
            .expanded()
            .with_base_path(config_path.clone())
            .into(),
        NavNode::group(inbound, INBOUND_PAGES)
            .expanded()
            .with_base_path(format!("{config_path}inbounds/"))
            .into(),
        NavNode::group(outbound, OUTBOUND_PAGES)
            .expanded()
            .with_base_path(format!("{config_path}outbounds/"))
            .into(),
        NavNode::group(transport, TRANSPORT_PAGES)
            .expanded()
            .with_base_path(format!("{config_path}transports/"))
            .into(),
    ]
}

/// Chapters of the level-0 beginner guide.
#[must_use]
pub fn build_level0_sidebar() -> Vec<NavEntry> {
    LEVEL0_CHAPTERS.into_iter().map(NavEntry::leaf).collect()
}

/// Chapters of the level-1 guide.
#[must_use]
pub fn build_level1_sidebar() -> Vec<NavEntry> {
    LEVEL1_CHAPTERS.into_iter().map(NavEntry::leaf).collect()
}

/// Chapters of the level-2 guide.
#[must_use]
pub fn build_level2_sidebar() -> Vec<NavEntry> {
    LEVEL2_CHAPTERS.into_iter().map(NavEntry::leaf).collect()
}

/// Group labels of the configuration-reference sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarLabels {
    /// Title of the collapsable feature-details group.
    pub feature: String,
    /// Title of the basic-configuration group.
    pub config: String,
    /// Title of the inbound-protocols group.
    pub inbound: String,
    /// Title of the outbound-protocols group.
    pub outbound: String,
    /// Title of the transports group.
    pub transport: String,
}

impl SidebarLabels {
    /// Build the configuration-reference sidebar with these labels.
    #[must_use]
    pub fn build(&self, locale_prefix: &str) -> Vec<NavEntry> {
        build_config_sidebar(
            &self.feature,
            &self.config,
            &self.inbound,
            &self.outbound,
            &self.transport,
            locale_prefix,
        )
    }
}

/// Build every sidebar of one locale keyed by URL prefix.
///
/// Specific prefixes come first and the locale root falls back to
/// [`SidebarSpec::Auto`].
#[must_use]
pub fn build_locale_sidebar(locale_prefix: &str, labels: &SidebarLabels) -> LocaleSidebar {
    let mut sidebar = LocaleSidebar::new();
    sidebar.push(format!("{locale_prefix}config/"), labels.build(locale_prefix));
    sidebar.push(
        format!("{locale_prefix}document/level-0/"),
        build_level0_sidebar(),
    );
    sidebar.push(
        format!("{locale_prefix}document/level-1/"),
        build_level1_sidebar(),
    );
    sidebar.push(
        format!("{locale_prefix}document/level-2/"),
        build_level2_sidebar(),
    );
    sidebar.push(locale_prefix, SidebarSpec::Auto);
    sidebar
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn zh_sidebar(prefix: &str) -> Vec<NavEntry> {
        build_config_sidebar("特性详解", "基础配置", "入站代理", "出站代理", "底层传输", prefix)
    }

    fn group(entries: &[NavEntry], index: usize) -> &NavNode {
        entries[index].as_group().expect("top-level entry is a group")
    }

    fn leaves(node: &NavNode) -> Vec<&str> {
        node.children
            .iter()
            .map(|entry| entry.as_leaf().expect("child is a leaf"))
            .collect()
    }

    fn en_labels() -> SidebarLabels {
        SidebarLabels {
            feature: "Feature Details".to_owned(),
            config: "Basic Config".to_owned(),
            inbound: "Inbounds".to_owned(),
            outbound: "Outbounds".to_owned(),
            transport: "Transport".to_owned(),
        }
    }

    #[test]
    fn test_config_sidebar_has_five_groups_in_order() {
        let sidebar = zh_sidebar("/");

        let titles: Vec<_> = (0..sidebar.len())
            .map(|i| group(&sidebar, i).title.as_deref().unwrap())
            .collect();

        assert_eq!(
            titles,
            ["特性详解", "基础配置", "入站代理", "出站代理", "底层传输"]
        );
    }

    #[test]
    fn test_feature_group_is_collapsable_without_base_path() {
        let sidebar = zh_sidebar("/");
        let feature = group(&sidebar, 0);

        assert!(feature.collapsable);
        assert!(feature.base_path.is_none());
        assert_eq!(leaves(feature), FEATURE_PAGES);
    }

    #[test]
    fn test_config_groups_are_pinned_with_base_paths() {
        let sidebar = zh_sidebar("/");

        let paths: Vec<_> = (1..5)
            .map(|i| {
                let node = group(&sidebar, i);
                assert!(!node.collapsable);
                node.base_path.as_deref().unwrap()
            })
            .collect();

        assert_eq!(
            paths,
            [
                "/config/",
                "/config/inbounds/",
                "/config/outbounds/",
                "/config/transports/"
            ]
        );
    }

    #[test]
    fn test_inbound_group_for_default_locale() {
        let sidebar = zh_sidebar("/");
        let inbound = group(&sidebar, 2);

        assert_eq!(inbound.title.as_deref(), Some("入站代理"));
        assert_eq!(inbound.base_path.as_deref(), Some("/config/inbounds/"));
        assert_eq!(
            leaves(inbound),
            [
                "inbounds/dokodemo",
                "inbounds/http",
                "inbounds/shadowsocks",
                "inbounds/socks",
                "inbounds/trojan",
                "inbounds/vless",
                "inbounds/vmess"
            ]
        );
    }

    #[test]
    fn test_alternate_locale_swaps_only_base_path() {
        let zh = zh_sidebar("/");
        let en = zh_sidebar("/en/");

        let inbound = group(&en, 2);
        assert_eq!(inbound.base_path.as_deref(), Some("/en/config/inbounds/"));

        for i in 0..5 {
            assert_eq!(group(&zh, i).children, group(&en, i).children);
        }
    }

    #[test]
    fn test_children_lists_do_not_depend_on_labels() {
        let zh = zh_sidebar("/en/");
        let en = en_labels().build("/en/");

        for i in 0..5 {
            assert_eq!(group(&zh, i).children, group(&en, i).children);
            assert_eq!(group(&zh, i).base_path, group(&en, i).base_path);
        }
        assert_eq!(group(&en, 0).title.as_deref(), Some("Feature Details"));
    }

    #[test]
    fn test_prefix_without_trailing_slash_is_concatenated_as_is() {
        let sidebar = zh_sidebar("/en");

        assert_eq!(group(&sidebar, 1).base_path.as_deref(), Some("/enconfig/"));
        assert_eq!(
            group(&sidebar, 4).base_path.as_deref(),
            Some("/enconfig/transports/")
        );
    }

    #[test]
    fn test_config_sidebar_shape_for_any_prefix_and_labels() {
        let label_sets = [
            ["特性详解", "基础配置", "入站代理", "出站代理", "底层传输"],
            ["Feature Details", "Basic Config", "Inbounds", "Outbounds", "Transport"],
            ["a", "b b", "c/", "\"quoted\"", "🚀"],
            ["", "", "", "", ""],
        ];
        let prefixes = ["/", "/en/", "/zh-tw/", "/a/b/"];
        let pages: [&[&str]; 5] = [
            &FEATURE_PAGES,
            &CONFIG_PAGES,
            &INBOUND_PAGES,
            &OUTBOUND_PAGES,
            &TRANSPORT_PAGES,
        ];

        for prefix in prefixes {
            for labels in &label_sets {
                let [feature, config, inbound, outbound, transport] = *labels;
                let sidebar =
                    build_config_sidebar(feature, config, inbound, outbound, transport, prefix);
                let case = format!("prefix {prefix:?}, labels {labels:?}");

                assert_eq!(sidebar.len(), 5, "{case}");

                let titles: Vec<_> = (0..5)
                    .map(|i| group(&sidebar, i).title.as_deref())
                    .collect();
                let expected: Vec<_> = labels.iter().copied().map(Some).collect();
                assert_eq!(titles, expected, "{case}");

                let base_paths: Vec<_> = (0..5)
                    .map(|i| group(&sidebar, i).base_path.clone())
                    .collect();
                assert_eq!(
                    base_paths,
                    [
                        None,
                        Some(format!("{prefix}config/")),
                        Some(format!("{prefix}config/inbounds/")),
                        Some(format!("{prefix}config/outbounds/")),
                        Some(format!("{prefix}config/transports/")),
                    ],
                    "{case}"
                );

                let collapsable: Vec<_> = (0..5).map(|i| group(&sidebar, i).collapsable).collect();
                assert_eq!(collapsable, [true, false, false, false, false], "{case}");

                for (i, expected) in pages.iter().enumerate() {
                    assert_eq!(leaves(group(&sidebar, i)), *expected, "{case}, group {i}");
                }
            }
        }
    }

    #[test]
    fn test_builders_are_idempotent() {
        assert_eq!(zh_sidebar("/en/"), zh_sidebar("/en/"));
        assert_eq!(build_level0_sidebar(), build_level0_sidebar());
        assert_eq!(build_level1_sidebar(), build_level1_sidebar());
        assert_eq!(build_level2_sidebar(), build_level2_sidebar());
        assert_eq!(
            build_locale_sidebar("/", &en_labels()),
            build_locale_sidebar("/", &en_labels())
        );
    }

    #[test]
    fn test_level_sidebars_are_fixed_lists() {
        let level0 = build_level0_sidebar();
        let level1 = build_level1_sidebar();
        let level2 = build_level2_sidebar();

        assert_eq!(level0.len(), 9);
        assert_eq!(level1.len(), 5);
        assert_eq!(level2.len(), 4);
        assert_eq!(level0[0].as_leaf(), Some("ch01-preface"));
        assert_eq!(level0[8].as_leaf(), Some("ch09-appendix"));
        assert_eq!(
            level1.iter().filter_map(NavEntry::as_leaf).collect::<Vec<_>>(),
            LEVEL1_CHAPTERS
        );
        assert_eq!(
            level2.iter().filter_map(NavEntry::as_leaf).collect::<Vec<_>>(),
            [
                "transparent_proxy/transparent_proxy",
                "tproxy",
                "iptables_gid",
                "redirect"
            ]
        );
    }

    #[test]
    fn test_locale_sidebar_routes() {
        let sidebar = build_locale_sidebar("/en/", &en_labels());

        assert_eq!(
            sidebar.prefixes().collect::<Vec<_>>(),
            [
                "/en/config/",
                "/en/document/level-0/",
                "/en/document/level-1/",
                "/en/document/level-2/",
                "/en/"
            ]
        );
        assert_eq!(sidebar.get("/en/"), Some(&SidebarSpec::Auto));
        assert_eq!(
            sidebar.get("/en/document/level-2/"),
            Some(&SidebarSpec::Entries(build_level2_sidebar()))
        );
        assert_eq!(
            sidebar.get("/en/config/"),
            Some(&SidebarSpec::Entries(en_labels().build("/en/")))
        );
    }
}

//! Navigation tab and class toggle decisions
//!
//! Pure functions; the DOM side lives in `dom`.

use serde::{Deserialize, Serialize};

/// Where the dashboard lives and how its nav bar is marked up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavConfig {
    pub root_path: String,
    pub plugin_marker: String,
    pub active_class: String,
    pub nav_selector: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            root_path: "/telemetryui/".to_string(),
            plugin_marker: "/plugins/".to_string(),
            active_class: "active".to_string(),
            nav_selector: "ul.nav.nav-tabs li a".to_string(),
        }
    }
}

/// Path prefix that identifies the current tab.
///
/// `None` on the dashboard root, where no tab is highlighted. Plugin pages
/// keep one extra segment so each plugin gets its own tab.
pub fn leading_path(pathname: &str, config: &NavConfig) -> Option<String> {
    if pathname == config.root_path {
        return None;
    }

    let segments = match pathname.find(config.plugin_marker.as_str()) {
        Some(pos) if pos > 0 => 4,
        _ => 3,
    };

    Some(pathname.split('/').take(segments).collect::<Vec<_>>().join("/"))
}

/// Indexes of every nav href under the current tab's path
pub fn matching_tabs<S: AsRef<str>>(
    current_path: &str,
    hrefs: &[S],
    config: &NavConfig,
) -> Vec<usize> {
    let Some(prefix) = leading_path(current_path, config) else {
        return Vec::new();
    };
    // An empty prefix selects nothing
    if prefix.is_empty() {
        return Vec::new();
    }

    hrefs
        .iter()
        .enumerate()
        .filter(|(_, href)| href.as_ref().starts_with(&prefix))
        .map(|(i, _)| i)
        .collect()
}

/// First nav href under the current tab's path
pub fn highlight_active_tab<S: AsRef<str>>(
    current_path: &str,
    hrefs: &[S],
    config: &NavConfig,
) -> Option<usize> {
    matching_tabs(current_path, hrefs, config).first().copied()
}

/// Class change to apply to an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToggle {
    pub remove: Option<String>,
    pub add: String,
}

/// Advance an element through a cycle of classes.
///
/// The first class of `sequence` the element has is swapped for the next
/// one, wrapping at the end. An element with none of them gets the first.
pub fn next_color_class<F, S>(has_class: F, sequence: &[S]) -> Option<ClassToggle>
where
    F: Fn(&str) -> bool,
    S: AsRef<str>,
{
    let first = sequence.first()?.as_ref();

    let toggle = match sequence.iter().position(|c| has_class(c.as_ref())) {
        Some(i) => ClassToggle {
            remove: Some(sequence[i].as_ref().to_string()),
            add: sequence[(i + 1) % sequence.len()].as_ref().to_string(),
        },
        None => ClassToggle {
            remove: None,
            add: first.to_string(),
        },
    };

    Some(toggle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HREFS: [&str; 4] = [
        "/telemetryui/records",
        "/telemetryui/builds",
        "/telemetryui/plugins/demo",
        "/telemetryui/plugins/other",
    ];

    #[test]
    fn test_leading_path() {
        let config = NavConfig::default();
        assert_eq!(leading_path("/telemetryui/", &config), None);
        assert_eq!(
            leading_path("/telemetryui/builds", &config).as_deref(),
            Some("/telemetryui/builds")
        );
        assert_eq!(
            leading_path("/telemetryui/records/2", &config).as_deref(),
            Some("/telemetryui/records")
        );
        assert_eq!(
            leading_path("/telemetryui/plugins/demo/settings", &config).as_deref(),
            Some("/telemetryui/plugins/demo")
        );
    }

    #[test]
    fn test_highlight_active_tab() {
        let config = NavConfig::default();
        assert_eq!(
            highlight_active_tab("/telemetryui/builds", &HREFS, &config),
            Some(1)
        );
        assert_eq!(
            highlight_active_tab("/telemetryui/plugins/other/x", &HREFS, &config),
            Some(3)
        );
        assert_eq!(highlight_active_tab("/telemetryui/", &HREFS, &config), None);
        assert_eq!(
            highlight_active_tab("/telemetryui/thermal", &HREFS, &config),
            None
        );
    }

    #[test]
    fn test_matching_tabs_returns_all_prefix_matches() {
        let config = NavConfig::default();
        let hrefs = ["/telemetryui/crashes", "/telemetryui/crashes/filter", "/x"];
        assert_eq!(
            matching_tabs("/telemetryui/crashes", &hrefs, &config),
            vec![0, 1]
        );
    }

    #[test]
    fn test_empty_path_matches_nothing() {
        let config = NavConfig::default();
        assert!(matching_tabs("", &HREFS, &config).is_empty());
    }

    #[test]
    fn test_next_color_class_cycles() {
        let classes = ["red", "blue"];

        let toggle = next_color_class(|_| false, &classes).unwrap();
        assert_eq!(toggle.remove, None);
        assert_eq!(toggle.add, "red");

        let toggle = next_color_class(|c| c == "red", &classes).unwrap();
        assert_eq!(toggle.remove.as_deref(), Some("red"));
        assert_eq!(toggle.add, "blue");

        let toggle = next_color_class(|c| c == "blue", &classes).unwrap();
        assert_eq!(toggle.remove.as_deref(), Some("blue"));
        assert_eq!(toggle.add, "red");
    }

    #[test]
    fn test_next_color_class_empty_sequence() {
        let classes: [&str; 0] = [];
        assert_eq!(next_color_class(|_| true, &classes), None);
    }
}

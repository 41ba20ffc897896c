//! Base left-navigation menu and its labels

use dashboard::MenuEntry;

/// English labels for the `menu.*` translation keys
pub fn translate(key: &str) -> String {
    let label = match key {
        "menu.home" => "Home",
        "menu.search" => "Logs",
        "menu.metrics" => "Metrics",
        "menu.traces" => "Traces",
        "menu.dashboard" => "Dashboards",
        "menu.index" => "Streams",
        "menu.alerts" => "Alerts",
        "menu.ingestion" => "Ingestion",
        "menu.iam" => "IAM",
        "menu.slack" => "Slack",
        "menu.about" => "About",
        "menu.function" => "Functions",
        "menu.organizations" => "Organizations",
        // Unknown keys show through so missing labels are visible
        other => other,
    };
    label.to_string()
}

/// Menu shipped by the base layout, before augmentation
pub fn base_links() -> Vec<MenuEntry> {
    [
        ("menu.home", "home", "/"),
        ("menu.search", "manage_search", "/logs"),
        ("menu.metrics", "query_stats", "/metrics"),
        ("menu.traces", "account_tree", "/traces"),
        ("menu.dashboard", "dashboard", "/dashboards"),
        ("menu.index", "window", "/streams"),
        ("menu.alerts", "notifications", "/alerts"),
        ("menu.ingestion", "filter_alt", "/ingestion"),
        ("menu.iam", "group", "/iam"),
        ("menu.slack", "slack", "https://short.zinc.dev/slack"),
        ("menu.about", "info", "/about"),
    ]
    .into_iter()
    .map(|(key, icon, link)| MenuEntry::new(translate(key), icon, link))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_links_translated() {
        let links = base_links();
        assert_eq!(links.len(), 11);
        assert_eq!(links[0].title, "Home");
        assert!(links.iter().all(|l| !l.title.starts_with("menu.")));
    }

    #[test]
    fn test_unknown_key_passes_through() {
        assert_eq!(translate("menu.unknown"), "menu.unknown");
    }
}

//! Left-navigation augmentation
//!
//! Pure helpers, testable without any collaborators.

use url::Url;

use crate::models::MenuEntry;

/// Position of the Functions entry after augmentation
pub const FUNCTIONS_INDEX: usize = 5;
/// Position of the Organizations entry after augmentation
pub const ORGANIZATIONS_INDEX: usize = 7;

const ORGANIZATION_ICON: &str = "images/left_nav/organization_icon.svg";

/// Resolve an image asset path against the asset base URL
pub fn image_url(asset_base: &str, path: &str) -> String {
    // Url::join drops the last path segment unless the base ends in '/'
    let normalized = format!("{}/", asset_base.trim_end_matches('/'));
    match Url::parse(&normalized).and_then(|base| base.join(path.trim_start_matches('/'))) {
        Ok(url) => url.to_string(),
        Err(_) => format!(
            "{}/{}",
            asset_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
    }
}

/// Insert at `index`, appending when the list is shorter
fn splice_in(links: &mut Vec<MenuEntry>, index: usize, entry: MenuEntry) {
    let index = index.min(links.len());
    links.insert(index, entry);
}

/// Add the Functions and Organizations entries to the left navigation
///
/// # Arguments
/// * `links` - Caller-owned menu, mutated in place
/// * `t` - Label translation, called with `menu.*` keys
/// * `asset_base` - Base URL for image icons
pub fn left_navigation_links<'a, T>(
    links: &'a mut Vec<MenuEntry>,
    t: T,
    asset_base: &str,
) -> &'a [MenuEntry]
where
    T: Fn(&str) -> String,
{
    splice_in(
        links,
        FUNCTIONS_INDEX,
        MenuEntry::new(t("menu.function"), "transform", "/functions"),
    );
    splice_in(
        links,
        ORGANIZATIONS_INDEX,
        MenuEntry::new(
            t("menu.organizations"),
            MenuEntry::image_icon(&image_url(asset_base, ORGANIZATION_ICON)),
            "/organizations",
        ),
    );

    links
}

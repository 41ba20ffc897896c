//! Zinc - headless driver for the console's main layout
//!
//! Boots the layout against the configured API, prints the navigation,
//! organizations and quota banner, then keeps the session token fresh.
//!
//! Usage: `zinc [ROUTE_URL]` or `zinc logout`

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use dashboard::{
    ApiClient, DashboardConfig, FileTokenStore, InMemoryStateStore, LayoutServices, LogErrorSink,
    LogTracker, MainLayout, QuotaCheck, RefreshStop, StateStore, TokenStore,
};
use log::{error, info, warn};
use url::Url;

mod menu;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Bootstrap config directory
    if let Err(e) = config::init() {
        error!("Failed to initialize config directory: {}", e);
    }

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = DashboardConfig::load().unwrap_or_else(|e| {
        warn!("Dashboard settings not loaded: {:#}", e);
        if let Some(path) = DashboardConfig::default_settings_path() {
            warn!(
                "To configure the console, either:\n\
                 1. Place settings at: {}\n\
                 2. Or set ZINC_API_BASE_URL and related environment variables",
                path.display()
            );
        }
        DashboardConfig::default()
    });

    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::default_location()?);

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("logout") {
        tokens.clear()?;
        println!("Signed out");
        return Ok(());
    }

    let route = arg
        .map(|raw| Url::parse(&raw).with_context(|| format!("Invalid route URL: {}", raw)))
        .transpose()?;

    if let Some(token) = tokens.load()? {
        match token.expires_at_utc() {
            Some(at) if token.is_expired(Utc::now().timestamp()) => warn!(
                "Stored session token expired at {}; requests will be rejected until it refreshes",
                at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
            ),
            Some(at) => info!(
                "Stored session token expires at {}",
                at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
            ),
            None => info!("Stored session token has no expiry"),
        }
    }

    let api = Arc::new(ApiClient::new(&config.api_base_url, tokens.clone())?);
    info!("Using console API at {}", api.base_url());
    let state = Arc::new(InMemoryStateStore::new());

    let services = LayoutServices {
        organizations: api.clone(),
        billing: api.clone(),
        users: api,
        tokens,
        state: state.clone(),
        errors: Arc::new(LogErrorSink),
        tracker: Some(Arc::new(LogTracker)),
    };
    let layout = MainLayout::setup(&config, services, route.as_ref());

    if let Some(org) = layout.custom_organization() {
        info!("Route requests organization {}", org);
    }

    let report = layout.on_mounted();

    // Without a prior selection, fall back to the route's or the first organization
    if state.selected_organization().is_none() {
        let organizations = state.organizations();
        let selected = layout
            .custom_organization()
            .and_then(|id| organizations.iter().find(|o| o.identifier == id))
            .or_else(|| organizations.first())
            .cloned();
        if let Some(org) = selected {
            info!("Selected organization {}", org.identifier);
            state.set_selected_organization(Some(org));
            layout.check_quota();
        }
    }

    let mut links = menu::base_links();
    println!("Navigation:");
    for entry in layout.left_navigation_links(&mut links, menu::translate) {
        println!("  {:<16} {:<24} {}", entry.title, entry.link, entry.icon);
    }

    println!("Organizations:");
    println!("{}", serde_json::to_string_pretty(&state.organizations())?);

    match report.quota {
        QuotaCheck::Failed => warn!("Quota usage unavailable"),
        _ => {
            let message = state.quota_threshold_msg();
            if !message.is_empty() {
                println!("{}", message);
            }
        }
    }

    let handle = layout.start_session_refresh()?;
    match handle.join() {
        RefreshStop::Failed => anyhow::bail!("Session refresh stopped; sign in again"),
        RefreshStop::Cancelled => Ok(()),
    }
}

//! Config validation command.

use docsite::config::SiteConfig;
use docsite::{debug, log};

/// One-line summary of a validated descriptor.
pub fn summary(config: &SiteConfig) -> String {
    let groups = config.sidebar_groups();
    format!(
        "{}: {} head tag{}, {} nav entr{}, {} sidebar group{} ({} items), {} social link{}",
        config.title(),
        config.head_tags().len(),
        plural_s(config.head_tags().len()),
        config.navigation().len(),
        if config.navigation().len() == 1 { "y" } else { "ies" },
        groups.len(),
        plural_s(groups.len()),
        groups.iter().map(|g| g.items.len()).sum::<usize>(),
        config.social_links().len(),
        plural_s(config.social_links().len()),
    )
}

/// Report a config that already passed validation.
pub fn check_config(config: &SiteConfig) {
    match config.config_path() {
        Some(path) => log!("check"; "{} ok", path.display()),
        None => log!("check"; "built-in descriptor ok"),
    }
    log!("check"; "{}", summary(config));
    debug!("check"; "{} links validated", config.link_count());
}

fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

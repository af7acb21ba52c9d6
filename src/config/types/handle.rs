//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads: the descriptor is published once
//! after loading and every reader gets a shared `Arc` to it. Until then the
//! handle is empty, never a default descriptor.

use crate::config::SiteConfig;
use arc_swap::ArcSwapOption;
use std::sync::{Arc, LazyLock};

/// Slot holding the published descriptor, if any.
pub struct ConfigHandle {
    slot: ArcSwapOption<SiteConfig>,
}

impl ConfigHandle {
    pub fn new() -> Self {
        Self {
            slot: ArcSwapOption::empty(),
        }
    }

    /// Current descriptor, `None` before [`ConfigHandle::publish`].
    #[inline]
    pub fn get(&self) -> Option<Arc<SiteConfig>> {
        self.slot.load_full()
    }

    pub fn publish(&self, config: SiteConfig) -> Arc<SiteConfig> {
        let arc = Arc::new(config);
        self.slot.store(Some(Arc::clone(&arc)));
        arc
    }
}

impl Default for ConfigHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Global config storage.
pub static CONFIG: LazyLock<ConfigHandle> = LazyLock::new(ConfigHandle::new);

/// The published descriptor, `None` until [`init_config`] ran.
#[inline]
pub fn cfg() -> Option<Arc<SiteConfig>> {
    CONFIG.get()
}

/// Publish a loaded config and return the shared handle to it.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    CONFIG.publish(config)
}

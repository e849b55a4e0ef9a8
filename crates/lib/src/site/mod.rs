//! Pinned-site identity resolution.
//!
//! Given a tab, a frame, or tab-creation properties, derive a canonical
//! [`SiteDetail`] and the [`SiteKey`] used to match it against the caller's
//! collection of known sites.
//!
//! # Modules
//!
//! - [`key`] - Canonical `location|partition` keys
//! - [`lookup`] - Substring matching and tab resolution
//! - [`extract`] - Frame and create-properties extraction, props projection
//! - [`types`] - Records, descriptors, and host input state

pub mod extract;
pub mod key;
pub mod lookup;
mod types;

pub use extract::{detail_from_frame, detail_from_properties, pinned_site_props};
pub use key::{KeyError, SiteKey, site_key};
pub use lookup::{details_from_tab, sites_by_subkey};
pub use types::*;

//! sitepin-lib: Pinned-site identity for browser UI state
//!
//! This crate resolves which known site a tab, frame, or tab-creation
//! request refers to:
//! - `SiteKey`: the canonical `location|partition` lookup key
//! - `SiteDetail`: descriptor derived from a tab, frame, or create properties
//! - `sites_by_subkey`: substring scan over a caller-owned site collection
//! - `details_from_tab`: tab resolution with provisional-location fallback
//!
//! All operations are pure and synchronous; the site collection is owned by
//! the caller and only ever read here.

pub mod consts;
pub mod site;
pub mod util;

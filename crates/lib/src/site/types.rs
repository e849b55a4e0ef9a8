//! Site state types.
//!
//! The types here fall into three groups:
//! - [`PinnedSite`] - the stored record held in the caller's [`SiteCollection`]
//! - [`SiteDetail`] / [`PinnedSiteProps`] - values produced by this crate
//! - [`TabState`], [`FrameState`], [`CreateProperties`] - host UI state the
//!   descriptors are derived from
//!
//! # Serialization
//!
//! Everything serializes with camelCase field names to match the UI state it
//! is embedded in. Optional fields are omitted entirely when unset rather
//! than written as null; callers compare serialized descriptors for
//! equality, so field presence is part of the contract.
//!
//! # Ordering
//!
//! [`SiteCollection`] uses [`BTreeMap`] so iteration (and therefore match
//! order during lookups) is deterministic key order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::site::key::{SiteKey, site_key};

/// Ordered collection of known sites, keyed by site key.
///
/// Owned and supplied by the caller (bookmarks, pinned tiles); this crate
/// only ever reads it.
pub type SiteCollection = BTreeMap<SiteKey, PinnedSite>;

/// A site record stored in a [`SiteCollection`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedSite {
  /// Canonical stored URL of the site.
  pub location: String,

  /// Position of the tile among the pinned sites.
  pub order: u32,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub partition_number: Option<u32>,

  /// Bookmark folder containing the site. Folder id 0 is the root folder
  /// and is treated as "no folder".
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parent_folder_id: Option<u64>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub favicon: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub theme_color: Option<String>,
}

impl PinnedSite {
  /// Create a record with only the required fields set.
  pub fn new(location: impl Into<String>, order: u32) -> Self {
    Self {
      location: location.into(),
      order,
      title: None,
      partition_number: None,
      parent_folder_id: None,
      favicon: None,
      theme_color: None,
    }
  }
}

/// Canonical descriptor for a site, derived from a tab, frame, or tab
/// creation properties.
///
/// Transient value computed per call; the caller persists or compares it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDetail {
  pub location: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub partition_number: Option<u32>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub parent_folder_id: Option<u64>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub favicon: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub theme_color: Option<String>,
}

impl SiteDetail {
  /// Create a descriptor with only the location set.
  pub fn new(location: impl Into<String>) -> Self {
    Self {
      location: location.into(),
      title: None,
      partition_number: None,
      parent_folder_id: None,
      favicon: None,
      theme_color: None,
    }
  }

  /// Canonical lookup key for this descriptor.
  ///
  /// `None` when the location is empty.
  pub fn key(&self) -> Option<SiteKey> {
    site_key(&self.location, self.partition_number)
  }
}

/// Minimal persisted shape of a pinned site.
///
/// Produced by [`pinned_site_props`](crate::site::pinned_site_props);
/// everything not needed to restore the tile (title, favicon, theme color,
/// folder) is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedSiteProps {
  pub location: String,
  pub order: u32,
  pub partition_number: u32,
}

/// Tab state as supplied by the host UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabState {
  /// Committed URL of the tab.
  pub url: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub partition_number: Option<u32>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub frame: Option<FrameState>,
}

impl TabState {
  /// Create a tab with only the URL set.
  pub fn new(url: impl Into<String>) -> Self {
    Self {
      url: url.into(),
      title: None,
      partition_number: None,
      frame: None,
    }
  }
}

/// Frame state, nested inside a tab or supplied directly when pinning an
/// open frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameState {
  /// Current committed location of the frame.
  pub location: String,

  /// Location the frame was pinned at, when it belongs to a pinned tab.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pinned_location: Option<String>,

  /// In-flight navigation target before it commits. May differ from
  /// `location` when the current navigation was redirected.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub provisional_location: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub partition_number: Option<u32>,

  /// Favicon URL.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub icon: Option<String>,

  /// Theme color declared by the page.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub theme_color: Option<String>,

  /// Theme color computed from page content when none is declared.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub computed_theme_color: Option<String>,
}

impl FrameState {
  /// Create a frame with only the committed location set.
  pub fn new(location: impl Into<String>) -> Self {
    Self {
      location: location.into(),
      pinned_location: None,
      provisional_location: None,
      title: None,
      partition_number: None,
      icon: None,
      theme_color: None,
      computed_theme_color: None,
    }
  }
}

/// Properties of a tab being created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProperties {
  pub url: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub partition_number: Option<u32>,
}

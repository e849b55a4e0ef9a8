//! Canonical site keys.
//!
//! A pinned site is identified by its location plus the partition it lives
//! in. The canonical key is the string `<location>|<partition>` after
//! location normalization, and is the equality basis for matching a tab
//! against the collection of known sites.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::KEY_SEPARATOR;
use crate::util::url::location_if_pdf;

/// A key identifying a site within a
/// [`SiteCollection`](crate::site::SiteCollection).
///
/// Keys built by [`site_key`] are canonical two-segment
/// `location|partition` strings, but the collection may carry longer
/// caller-defined keys, e.g. with a folder id appended as a third segment.
/// Lookups tolerate both (see
/// [`sites_by_subkey`](crate::site::sites_by_subkey)).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SiteKey(String);

impl SiteKey {
  /// Wrap a caller-defined key string.
  pub fn new(key: impl Into<String>) -> Self {
    Self(key.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Split a canonical key back into location and partition.
  ///
  /// Splits on the first separator, so caller keys with extra segments
  /// fail the partition parse rather than silently misreading.
  pub fn split(&self) -> Result<(&str, u32), KeyError> {
    let (location, partition) = self
      .0
      .split_once(KEY_SEPARATOR)
      .ok_or_else(|| KeyError::MissingSeparator { key: self.0.clone() })?;

    let partition = partition.parse().map_err(|_| KeyError::InvalidPartition {
      key: self.0.clone(),
      value: partition.to_string(),
    })?;

    Ok((location, partition))
  }
}

impl fmt::Display for SiteKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Error splitting a site key into its segments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
  #[error("site key has no separator: {key}")]
  MissingSeparator { key: String },

  #[error("invalid partition number '{value}' in site key: {key}")]
  InvalidPartition { key: String, value: String },
}

/// Build the canonical key for a location and partition.
///
/// The location is normalized first (PDF-viewer locations are unwrapped to
/// the document they display) and a missing partition defaults to 0, so two
/// descriptors for the same site produce identical keys. Returns `None`
/// when the location is empty: such an entry cannot be matched against
/// anything.
pub fn site_key(location: &str, partition_number: Option<u32>) -> Option<SiteKey> {
  if location.is_empty() {
    return None;
  }

  let location = location_if_pdf(location);
  let partition = partition_number.unwrap_or(0);
  Some(SiteKey(format!("{location}{KEY_SEPARATOR}{partition}")))
}

//! Site lookup and tab resolution.
//!
//! Matching is a substring scan over the collection keys rather than an
//! exact lookup. Callers store keys in `location|partition` form, sometimes
//! with extra segments appended, and a canonical two-segment key must still
//! find those entries. The scan runs in key order and the first match wins
//! when a tab is being resolved.

use tracing::debug;

use crate::consts::{KEY_SEGMENTS, KEY_SEPARATOR};
use crate::site::key::site_key;
use crate::site::types::{PinnedSite, SiteCollection, SiteDetail, TabState};

/// Find every site whose key contains `site_key` as a substring.
///
/// The query is truncated to its first two `|`-separated segments before
/// matching, so a longer caller key degrades to its location and partition.
/// Matching is substring containment, not prefix or equality: querying
/// `"a.com|0"` also returns an entry keyed `"http://sub.a.com|0"`. Callers
/// depend on that looseness; do not tighten it.
///
/// Matches are returned in collection key order. An empty query matches
/// nothing.
pub fn sites_by_subkey<'a>(sites: &'a SiteCollection, site_key: &str) -> Vec<&'a PinnedSite> {
  if site_key.is_empty() {
    return Vec::new();
  }

  // Keep at most the location and partition segments; anything after a
  // second separator is caller-specific and ignored for matching.
  let partial: String = site_key
    .split(KEY_SEPARATOR)
    .take(KEY_SEGMENTS)
    .collect::<Vec<_>>()
    .join(KEY_SEPARATOR);

  sites
    .iter()
    .filter(|(key, _)| key.as_str().contains(&partial))
    .map(|(_, site)| site)
    .collect()
}

/// Resolve the descriptor for a tab, enriched from `sites` when available.
///
/// The tab's URL and partition form the lookup key. When nothing matches
/// and the tab's frame still carries an in-flight navigation target, that
/// provisional location is tried as a fallback: the committed URL may be
/// the result of a redirect away from the URL the site was stored under.
///
/// When a match exists, the first match's stored location and parent folder
/// replace the tab's own, so the descriptor compares equal to the entry the
/// user pinned. Later matches are discarded; the output location is always
/// either the tab's URL or a single match's stored URL.
pub fn details_from_tab(sites: Option<&SiteCollection>, tab: &TabState) -> SiteDetail {
  let mut location = tab.url.clone();
  let partition_number = tab.partition_number.unwrap_or(0);
  let mut parent_folder_id = None;

  if let Some(sites) = sites {
    let mut results = match site_key(&location, Some(partition_number)) {
      Some(key) => sites_by_subkey(sites, key.as_str()),
      None => Vec::new(),
    };

    // Only consult the provisional location when the committed URL found
    // nothing.
    if results.is_empty() {
      let provisional = tab
        .frame
        .as_ref()
        .and_then(|frame| frame.provisional_location.as_deref())
        .filter(|provisional| *provisional != location);

      if let Some(provisional) = provisional {
        debug!(location = provisional, "no match for committed url, trying provisional location");
        if let Some(key) = site_key(provisional, Some(partition_number)) {
          results = sites_by_subkey(sites, key.as_str());
        }
      }
    }

    if let Some(first) = results.first() {
      debug!(
        location = %first.location,
        matches = results.len(),
        "tab resolved to stored site"
      );
      location = first.location.clone();
      parent_folder_id = first.parent_folder_id;
    }
  }

  SiteDetail {
    location,
    title: tab.title.clone(),
    partition_number: Some(partition_number),
    parent_folder_id: parent_folder_id.filter(|&id| id != 0),
    favicon: None,
    theme_color: None,
  }
}

//! Descriptor extraction from frames and tab-creation properties.
//!
//! Unlike [`details_from_tab`](crate::site::details_from_tab), nothing here
//! consults the site collection: a tab being created does not exist yet,
//! and a frame being pinned is itself the source of truth.

use crate::consts::ABOUT_BLANK;
use crate::site::types::{CreateProperties, FrameState, PinnedSite, PinnedSiteProps, SiteDetail};

/// Descriptor for a tab being created.
///
/// The partition is carried over only when the caller supplied one,
/// including an explicit partition 0; an absent partition stays absent.
pub fn detail_from_properties(props: &CreateProperties) -> SiteDetail {
  SiteDetail {
    location: props.url.clone(),
    title: None,
    partition_number: props.partition_number,
    parent_folder_id: None,
    favicon: None,
    theme_color: None,
  }
}

/// Descriptor for an open frame.
///
/// The pinned location wins over the frame's current location unless it is
/// the `about:blank` placeholder a freshly restored pinned tab starts at.
pub fn detail_from_frame(frame: &FrameState) -> SiteDetail {
  let location = match frame.pinned_location.as_deref() {
    Some(ABOUT_BLANK) | None => frame.location.clone(),
    Some(pinned) => pinned.to_string(),
  };

  SiteDetail {
    location,
    title: frame.title.clone(),
    partition_number: frame.partition_number,
    parent_folder_id: None,
    favicon: frame.icon.clone(),
    theme_color: frame
      .theme_color
      .clone()
      .or_else(|| frame.computed_theme_color.clone()),
  }
}

/// Project a site record down to the fields persisted for a pinned tile.
pub fn pinned_site_props(site: &PinnedSite) -> PinnedSiteProps {
  PinnedSiteProps {
    location: site.location.clone(),
    order: site.order,
    partition_number: site.partition_number.unwrap_or(0),
  }
}

//! Location normalization.
//!
//! The location shown for a tab is not always the document URL: pages
//! rendered through the bundled PDF viewer carry the viewer's extension
//! prefix with the real URL embedded behind it. Site keys are derived from
//! the document URL, so a pinned PDF matches no matter how it is currently
//! displayed.

use url::Url;

use crate::consts::PDF_VIEWER_ID;

/// Unwrap a PDF-viewer location to the document URL it displays.
///
/// Returns the embedded URL when `location` is served through the bundled
/// viewer and the remainder parses as an absolute URL. Every other location
/// is returned unchanged.
pub fn location_if_pdf(location: &str) -> &str {
  match strip_viewer_prefix(location) {
    Some(document) if Url::parse(document).is_ok() => document,
    _ => location,
  }
}

fn strip_viewer_prefix(location: &str) -> Option<&str> {
  location
    .strip_prefix("chrome-extension://")?
    .strip_prefix(PDF_VIEWER_ID)?
    .strip_prefix('/')
}

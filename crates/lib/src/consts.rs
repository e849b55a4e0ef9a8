//! Shared constants.

/// Placeholder location of a frame that has not committed a real page yet.
pub const ABOUT_BLANK: &str = "about:blank";

/// Separator between the location and partition segments of a site key.
pub const KEY_SEPARATOR: &str = "|";

/// Number of segments in a canonical site key (location, partition).
pub const KEY_SEGMENTS: usize = 2;

/// Extension id of the bundled PDF viewer.
///
/// Documents rendered through the viewer carry a
/// `chrome-extension://<id>/` prefix with the real document URL behind it.
pub const PDF_VIEWER_ID: &str = "jdbefljfgobbmcidnmpjamcbhnbphjnb";

//! The presentation seam notified when a submission settles.

/// Presentation surface that shows the submission banner.
pub trait Viewport: Send + Sync {
    /// Brings the top of the form (where banners live) into view.
    fn scroll_to_top(&self);
}

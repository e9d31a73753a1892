//! Rendering options and configuration.

/// Options for rendering document content.
///
/// The defaults produce the standard conversion: headings at their native
/// level, every tab in the tree, tabs rendered in parallel.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Levels added to every heading before capping at 6
    pub heading_offset: u8,

    /// Emit nested tabs after their parent
    pub include_child_tabs: bool,

    /// Render independent tabs on the rayon thread pool
    pub parallel: bool,

    /// Collect extraction statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading offset.
    pub fn with_heading_offset(mut self, offset: u8) -> Self {
        self.heading_offset = offset;
        self
    }

    /// Include or skip nested tabs.
    pub fn with_child_tabs(mut self, include: bool) -> Self {
        self.include_child_tabs = include;
        self
    }

    /// Render tabs one after another on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading_offset: 0,
            include_child_tabs: true,
            parallel: true,
            collect_stats: false,
        }
    }
}

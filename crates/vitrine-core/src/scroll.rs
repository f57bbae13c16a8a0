//! Scroll-position helpers: the back-to-top affordance and lazy image reveal.

use std::collections::HashSet;
use std::ops::Range;

/// Shows a "back to top" control once the view has scrolled far enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackToTop {
    pub threshold: usize,
}

impl BackToTop {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn visible(&self, offset: usize) -> bool {
        offset >= self.threshold
    }
}

/// Tracks which record images have been revealed.
///
/// An image is revealed the first time its row enters the viewport and is
/// never observed again, so the revealed set only grows.
#[derive(Debug, Default)]
pub struct LazyImages {
    revealed: HashSet<String>,
}

impl LazyImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every id in `viewport` of `ids` as revealed. Returns how many
    /// were newly revealed.
    pub fn observe<'a, I>(&mut self, ids: I, viewport: Range<usize>) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut newly = 0;
        for id in ids
            .into_iter()
            .skip(viewport.start)
            .take(viewport.end.saturating_sub(viewport.start))
        {
            if !self.revealed.contains(id) {
                self.revealed.insert(id.to_string());
                newly += 1;
            }
        }
        if newly > 0 {
            tracing::trace!(newly, total = self.revealed.len(), "lazy images: revealed");
        }
        newly
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

//! Keeps the highlighted navigation link in step with what the reader is looking at.
//!
//! On every scroll notification the tracker probes a point slightly below the top of the
//! viewport (scroll offset plus a fixed lookahead) and walks the sections in declaration order,
//! asking the layout for each one's extent. The first section containing the probe becomes the
//! active one. When nothing matches, for example past the last section or before layout has
//! happened, the previous value is kept.

use crate::section::{Extent, SectionId};
use tracing::debug;

/// Default distance in display units between the scroll offset and the probe position.
pub const LOOKAHEAD: u32 = 100;

/// Host capability answering where a section currently sits on the page.
pub trait LayoutQuery {
    /// Current extent of `section`, or `None` if it is not laid out yet.
    fn extent(&self, section: SectionId) -> Option<Extent>;
}

impl<F> LayoutQuery for F
where
    F: Fn(SectionId) -> Option<Extent>,
{
    fn extent(&self, section: SectionId) -> Option<Extent> {
        self(section)
    }
}

#[must_use]
/// Finds the first section in `order` whose extent contains `probe`.
///
/// Sections the layout cannot report are skipped.
pub fn locate<L: LayoutQuery + ?Sized>(
    order: &[SectionId],
    probe: u32,
    layout: &L,
) -> Option<SectionId> {
    order.iter().copied().find(|&section| {
        layout
            .extent(section)
            .is_some_and(|extent| extent.contains(probe))
    })
}

#[derive(Clone, Debug)]
/// Owns the active section and updates it from scroll offsets.
pub struct Tracker {
    order: Vec<SectionId>,
    lookahead: u32,
    active: SectionId,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(SectionId::ALL.to_vec(), LOOKAHEAD)
    }
}

impl Tracker {
    #[must_use]
    /// Creates a tracker over `order`, starting on its first section.
    ///
    /// An empty order falls back to the full page order so that there is always an active
    /// section.
    pub fn new(order: Vec<SectionId>, lookahead: u32) -> Self {
        let order = if order.is_empty() {
            SectionId::ALL.to_vec()
        } else {
            order
        };
        let active = order[0];
        Self {
            order,
            lookahead,
            active,
        }
    }

    #[must_use]
    /// The currently highlighted section.
    pub const fn active(&self) -> SectionId {
        self.active
    }

    #[must_use]
    /// Sections in the order they are scanned.
    pub fn order(&self) -> &[SectionId] {
        &self.order
    }

    #[must_use]
    /// Distance between the scroll offset and the probe position.
    pub const fn lookahead(&self) -> u32 {
        self.lookahead
    }

    #[must_use]
    /// Position tested against section extents for a given scroll offset.
    pub const fn probe(&self, scroll_offset: u32) -> u32 {
        scroll_offset.saturating_add(self.lookahead)
    }

    /// Re-evaluates the active section for `scroll_offset`.
    ///
    /// Returns `true` if the active section changed.
    pub fn scan<L: LayoutQuery + ?Sized>(&mut self, scroll_offset: u32, layout: &L) -> bool {
        let probe = self.probe(scroll_offset);
        match locate(&self.order, probe, layout) {
            Some(section) if section != self.active => {
                debug!(from = %self.active, to = %section, probe, "active section changed");
                self.active = section;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;

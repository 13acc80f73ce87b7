//! The scrollable window onto the page, and the source of scroll notifications.
//!
//! Offsets are measured in display units; one terminal row is `line_height` units. Listeners are
//! plain callbacks registered with [`Viewport::subscribe`] and held alive by the returned
//! [`Subscription`]. Dropping the subscription deregisters the callback, so a page that owns its
//! subscription cannot leave a registration behind when it goes away.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};
use tracing::trace;

type Listener = Box<dyn FnMut(u32)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    // Ids dropped while their listener was out of the registry being dispatched.
    cancelled: HashSet<u64>,
}

/// Keeps a scroll listener registered for as long as it is alive.
#[must_use = "dropping a subscription immediately deregisters the listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Deregisters the listener now.
    pub fn cancel(self) {}

    #[must_use]
    /// Whether the viewport this subscription belongs to still exists.
    pub fn is_attached(&self) -> bool {
        self.registry.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // The listener may own subscriptions of its own, so it is dropped after the borrow ends.
        let removed = {
            let Ok(mut registry) = registry.try_borrow_mut() else {
                return;
            };
            let pos = registry.listeners.iter().position(|(id, _)| *id == self.id);
            if let Some(pos) = pos {
                Some(registry.listeners.remove(pos))
            } else {
                registry.cancelled.insert(self.id);
                None
            }
        };
        trace!(id = self.id, "scroll listener removed");
        drop(removed);
    }
}

/// Scroll position over a page of known height.
pub struct Viewport {
    offset: u32,
    visible_rows: u32,
    content_rows: u32,
    line_height: u32,
    registry: Rc<RefCell<Registry>>,
}

impl Viewport {
    #[must_use]
    /// Creates a viewport at the top of an empty page.
    pub fn new(line_height: u32) -> Self {
        Self {
            offset: 0,
            visible_rows: 0,
            content_rows: 0,
            line_height: line_height.max(1),
            registry: Rc::default(),
        }
    }

    #[must_use]
    /// Current scroll offset in display units.
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    #[must_use]
    /// Display units per terminal row.
    pub const fn line_height(&self) -> u32 {
        self.line_height
    }

    #[must_use]
    /// First page row shown at the top of the viewport.
    pub const fn top_row(&self) -> u32 {
        self.offset / self.line_height
    }

    #[must_use]
    /// Number of rows the viewport shows.
    pub const fn visible_rows(&self) -> u32 {
        self.visible_rows
    }

    #[must_use]
    /// Largest offset that still fills the viewport with content.
    pub const fn max_offset(&self) -> u32 {
        self.content_rows
            .saturating_sub(self.visible_rows)
            .saturating_mul(self.line_height)
    }

    #[must_use]
    /// Converts a row count into display units.
    pub const fn rows_to_units(&self, rows: u32) -> u32 {
        rows.saturating_mul(self.line_height)
    }

    /// Updates the visible and total row counts after a resize or relayout.
    ///
    /// The offset is clamped to the new range; listeners hear about it if it moved.
    pub fn set_dimensions(&mut self, visible_rows: u32, content_rows: u32) {
        self.visible_rows = visible_rows;
        self.content_rows = content_rows;
        let clamped = self.offset.min(self.max_offset());
        self.scroll_to(clamped);
    }

    /// Moves to `offset` (clamped). Listeners are notified if the position changed.
    ///
    /// Returns `true` if the position changed.
    pub fn scroll_to(&mut self, offset: u32) -> bool {
        let offset = offset.min(self.max_offset());
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        self.notify();
        true
    }

    /// Scrolls by a signed number of rows.
    pub fn scroll_by_rows(&mut self, rows: i32) -> bool {
        let delta = self.rows_to_units(rows.unsigned_abs());
        let target = if rows < 0 {
            self.offset.saturating_sub(delta)
        } else {
            self.offset.saturating_add(delta)
        };
        self.scroll_to(target)
    }

    /// Scrolls down by one screen, keeping a row of overlap.
    pub fn page_down(&mut self) -> bool {
        let rows = self.visible_rows.saturating_sub(1).max(1);
        self.scroll_by_rows(i32::try_from(rows).unwrap_or(i32::MAX))
    }

    /// Scrolls up by one screen, keeping a row of overlap.
    pub fn page_up(&mut self) -> bool {
        let rows = self.visible_rows.saturating_sub(1).max(1);
        self.scroll_by_rows(-i32::try_from(rows).unwrap_or(i32::MAX))
    }

    /// Jumps to the start of the page.
    pub fn scroll_to_top(&mut self) -> bool {
        self.scroll_to(0)
    }

    /// Jumps to the end of the page.
    pub fn scroll_to_bottom(&mut self) -> bool {
        self.scroll_to(self.max_offset())
    }

    /// Registers `listener` to be called with the new offset on every scroll.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(u32) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Box::new(listener)));
        trace!(id, "scroll listener registered");
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    #[must_use]
    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Delivers the current offset to every listener.
    ///
    /// Listeners may subscribe or drop subscriptions while being notified; those changes apply
    /// from the next notification.
    pub fn notify(&self) {
        let offset = self.offset;
        let mut dispatching = std::mem::take(&mut self.registry.borrow_mut().listeners);
        for (_, listener) in &mut dispatching {
            listener(offset);
        }
        let cancelled_listeners = {
            let mut registry = self.registry.borrow_mut();
            let added = std::mem::take(&mut registry.listeners);
            let cancelled = std::mem::take(&mut registry.cancelled);
            let (kept, gone): (Vec<_>, Vec<_>) = dispatching
                .into_iter()
                .partition(|(id, _)| !cancelled.contains(id));
            registry.listeners = kept;
            registry.listeners.extend(added);
            gone
        };
        drop(cancelled_listeners);
    }
}

#[cfg(test)]
#[path = "tests/viewport.rs"]
mod tests;

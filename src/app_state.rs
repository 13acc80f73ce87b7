//! The page instance: one source of truth the event loop mutates and the UI reads.
//!
//! Mounting the page wires the active-section tracker to the viewport as a scroll listener. The
//! tracker and the current layout are shared with that listener, so every scroll rescans the
//! sections synchronously before the next frame is drawn. Tearing the page down drops the
//! subscription, after which scrolling no longer touches the tracker.

use crate::config::Config;
use crate::content::Content;
use crate::page::PageLayout;
use crate::reveal::{Phase, Reveal};
use crate::section::SectionId;
use crate::tracker::Tracker;
use crate::viewport::{Subscription, Viewport};
use std::cell::{Ref, RefCell};
use std::ops::Range;
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A scroll request from the keyboard or mouse.
pub enum Scroll {
    /// Move by a signed number of rows.
    Rows(i32),
    /// One screen up.
    PageUp,
    /// One screen down.
    PageDown,
    /// Start of the page.
    Top,
    /// End of the page.
    Bottom,
}

/// Page state shared between the event loop and the renderer.
pub struct AppState {
    content: &'static Content,
    config: Config,
    year: i32,
    viewport: Viewport,
    layout: Rc<RefCell<PageLayout>>,
    tracker: Rc<RefCell<Tracker>>,
    subscription: Option<Subscription>,
    reveal: Reveal,
    // Body area (columns, rows) the layout was built for.
    size: Option<(u16, u16)>,
    /// Whether the collapsed navigation menu is expanded.
    pub menu_open: bool,
    /// Navigation link under the keyboard cursor, as an index into [`SectionId::ALL`].
    pub focused_link: usize,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
}

impl AppState {
    #[must_use]
    /// Creates the page and registers the active-section tracker for scroll notifications.
    ///
    /// Nothing is laid out until the first [`AppState::relayout`], so until then no section can
    /// match and the first section stays active.
    pub fn mount(content: &'static Content, config: Config, year: i32) -> Self {
        let viewport = Viewport::new(config.line_height);
        let layout = Rc::new(RefCell::new(PageLayout::empty(config.line_height)));
        let tracker = Rc::new(RefCell::new(Tracker::new(
            SectionId::ALL.to_vec(),
            config.lookahead,
        )));

        let subscription = {
            let layout = Rc::clone(&layout);
            let tracker = Rc::clone(&tracker);
            viewport.subscribe(move |offset| {
                tracker.borrow_mut().scan(offset, &*layout.borrow());
            })
        };
        info!(lookahead = config.lookahead, "page mounted");

        Self {
            content,
            reveal: Reveal::new(config.animations),
            config,
            year,
            viewport,
            layout,
            tracker,
            subscription: Some(subscription),
            size: None,
            menu_open: false,
            focused_link: 0,
            message: None,
        }
    }

    /// Deregisters the scroll listener. Later scrolls leave the active section alone.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
            info!("page torn down");
        }
    }

    #[must_use]
    /// Whether the tracker is still listening to scrolls.
    pub const fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    #[must_use]
    /// Section whose navigation link is highlighted.
    pub fn active_section(&self) -> SectionId {
        self.tracker.borrow().active()
    }

    #[must_use]
    /// Literal content the page renders.
    pub const fn content(&self) -> &'static Content {
        self.content
    }

    #[must_use]
    /// Current page layout.
    pub fn layout(&self) -> Ref<'_, PageLayout> {
        self.layout.borrow()
    }

    #[must_use]
    /// Scroll position and dimensions.
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    /// Active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    /// Whether the terminal is too narrow for inline navigation links.
    pub fn is_compact(&self) -> bool {
        self.size
            .is_some_and(|(width, _)| width < self.config.compact_width)
    }

    /// Lays the page out for a body area `width` columns wide and `body_rows` tall.
    ///
    /// The page is only re-rendered when the area changes. Listeners are re-notified so the
    /// active section reflects the new layout. A rebuilt page keeps on screen what was already
    /// revealed; blocks further away reveal again on first sight.
    pub fn relayout(&mut self, width: u16, body_rows: u16) {
        let previous = self.size.replace((width, body_rows));
        let rebuilt = previous != self.size;
        if rebuilt {
            let layout = PageLayout::build(
                self.content,
                width,
                u32::from(body_rows),
                self.config.line_height,
                self.year,
            );
            debug!(width, body_rows, rows = layout.row_count(), "page laid out");
            *self.layout.borrow_mut() = layout;
            if !self.is_compact() {
                self.menu_open = false;
            }
        }
        let content_rows = self.layout.borrow().row_count();
        self.viewport
            .set_dimensions(u32::from(body_rows), content_rows);
        self.viewport.notify();

        if rebuilt && previous.is_some() {
            let visible = self.visible_rows();
            self.reveal.rebase(self.layout.borrow().blocks(), &visible);
        }
    }

    /// Applies a scroll request. Returns `true` if the position changed.
    pub fn scroll(&mut self, request: Scroll) -> bool {
        match request {
            Scroll::Rows(rows) => self.viewport.scroll_by_rows(rows),
            Scroll::PageUp => self.viewport.page_up(),
            Scroll::PageDown => self.viewport.page_down(),
            Scroll::Top => self.viewport.scroll_to_top(),
            Scroll::Bottom => self.viewport.scroll_to_bottom(),
        }
    }

    /// Follows an in-page anchor: scrolls so `section` starts at the top of the viewport.
    ///
    /// Near the end of the page the offset is clamped, as a browser would.
    pub fn jump_to(&mut self, section: SectionId) -> bool {
        let rows = self.layout.borrow().section_rows(section);
        let Some(rows) = rows else {
            self.message = Some(format!("#{section} is not on screen yet"));
            return false;
        };
        info!(%section, "anchor navigation");
        let offset = self.viewport.rows_to_units(rows.start);
        self.focused_link = section.index();
        self.menu_open = false;
        self.viewport.scroll_to(offset)
    }

    /// Moves the navigation cursor to the next link, wrapping around.
    pub fn next_link(&mut self) {
        self.focused_link = (self.focused_link + 1) % SectionId::ALL.len();
    }

    /// Moves the navigation cursor to the previous link, wrapping around.
    pub fn prev_link(&mut self) {
        self.focused_link = self
            .focused_link
            .checked_sub(1)
            .unwrap_or(SectionId::ALL.len() - 1);
    }

    /// Navigates to the link under the cursor.
    pub fn follow_link(&mut self) -> bool {
        let section = SectionId::ALL[self.focused_link % SectionId::ALL.len()];
        self.jump_to(section)
    }

    /// Opens or closes the collapsed navigation menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.focused_link = self.active_section().index();
        }
    }

    /// Starts entrance animations for everything currently in view.
    pub fn observe(&mut self, now: Instant) {
        let visible = self.visible_rows();
        let layout = self.layout.borrow();
        self.reveal.observe(layout.blocks(), &visible, now);
    }

    fn visible_rows(&self) -> Range<u32> {
        let top = self.viewport.top_row();
        top..top.saturating_add(self.viewport.visible_rows())
    }

    #[must_use]
    /// How page row `row` should be drawn at `now`.
    pub fn row_phase(&self, row: usize, now: Instant) -> Phase {
        let layout = self.layout.borrow();
        match layout.block_at(row) {
            Some(index) => {
                let animation = layout.blocks()[index].animation;
                self.reveal.phase(index, animation, now)
            }
            None => Phase::Shown,
        }
    }

    #[must_use]
    /// Whether a redraw is needed to advance animations.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.reveal.is_animating(self.layout.borrow().blocks(), now)
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;

//! Entrance animations for page blocks.
//!
//! A block starts animating the first time any of its rows scrolls into view and never hides
//! again afterwards. Lists stagger their items so they appear one after another.

use std::collections::{HashMap, HashSet};
use std::ops::Range;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Timing of one block's entrance.
pub struct Animation {
    /// Wait between first sight and the start of the transition.
    pub delay: Duration,
    /// Length of the transition.
    pub duration: Duration,
}

impl Animation {
    /// Section headings and large panels.
    pub const TITLE: Self = Self {
        delay: Duration::ZERO,
        duration: Duration::from_millis(800),
    };

    #[must_use]
    /// Small list item, staggered 100ms per position.
    pub fn item(index: usize) -> Self {
        Self {
            delay: stagger(index, 100),
            duration: Duration::from_millis(500),
        }
    }

    #[must_use]
    /// Large card, staggered 200ms per position.
    pub fn card(index: usize) -> Self {
        Self {
            delay: stagger(index, 200),
            duration: Duration::from_millis(800),
        }
    }
}

fn stagger(index: usize, step_ms: u64) -> Duration {
    Duration::from_millis(u64::try_from(index).unwrap_or(u64::MAX).saturating_mul(step_ms))
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A run of page rows that animates as a unit.
pub struct Block {
    /// Page rows covered by the block.
    pub rows: Range<u32>,
    /// Entrance timing.
    pub animation: Animation,
}

impl Block {
    fn intersects(&self, visible: &Range<u32>) -> bool {
        self.rows.start < visible.end && visible.start < self.rows.end
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// How a block should be drawn at a given instant.
pub enum Phase {
    /// Not yet seen, or still waiting out its delay.
    Hidden,
    /// Mid-transition, with progress in `(0, 1)`.
    Entering(f32),
    /// Fully visible.
    Shown,
}

#[derive(Debug, Default)]
/// Records when each block was first seen.
pub struct Reveal {
    disabled: bool,
    seen: HashMap<usize, Instant>,
    // Shown without an animation, after a relayout.
    settled: HashSet<usize>,
}

impl Reveal {
    #[must_use]
    /// Creates a tracker; with `enabled == false` every block is always shown.
    pub fn new(enabled: bool) -> Self {
        Self {
            disabled: !enabled,
            seen: HashMap::new(),
            settled: HashSet::new(),
        }
    }

    /// Starts over for a rebuilt layout, whose block indices no longer match the old ones.
    ///
    /// Blocks intersecting `visible` were already on screen and are shown at once; every other
    /// block reveals on first sight as usual.
    pub fn rebase(&mut self, blocks: &[Block], visible: &Range<u32>) {
        self.seen.clear();
        self.settled = blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| block.intersects(visible))
            .map(|(index, _)| index)
            .collect();
    }

    /// Starts the animation of every block intersecting `visible` that has not been seen yet.
    pub fn observe(&mut self, blocks: &[Block], visible: &Range<u32>, now: Instant) {
        if self.disabled {
            return;
        }
        for (index, block) in blocks.iter().enumerate() {
            if block.intersects(visible) {
                self.seen.entry(index).or_insert(now);
            }
        }
    }

    #[must_use]
    /// Phase of block `index` at `now`.
    pub fn phase(&self, index: usize, animation: Animation, now: Instant) -> Phase {
        if self.disabled || self.settled.contains(&index) {
            return Phase::Shown;
        }
        let Some(seen) = self.seen.get(&index) else {
            return Phase::Hidden;
        };
        let elapsed = now.saturating_duration_since(*seen);
        let Some(running) = elapsed.checked_sub(animation.delay) else {
            return Phase::Hidden;
        };
        if running.is_zero() {
            return Phase::Hidden;
        }
        if running >= animation.duration || animation.duration.is_zero() {
            return Phase::Shown;
        }
        Phase::Entering(running.as_secs_f32() / animation.duration.as_secs_f32())
    }

    #[must_use]
    /// Whether any seen block is still mid-animation, so the screen needs redrawing.
    pub fn is_animating(&self, blocks: &[Block], now: Instant) -> bool {
        self.seen.keys().any(|&index| {
            blocks
                .get(index)
                .is_some_and(|block| self.phase(index, block.animation, now) != Phase::Shown)
        })
    }
}

#[cfg(test)]
#[path = "tests/reveal.rs"]
mod tests;

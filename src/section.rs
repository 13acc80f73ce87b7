//! Section identifiers and their vertical extents on the rendered page.
//!
//! The page is a fixed stack of named sections. Their order here is the declaration order used
//! by navigation and by the active-section scan, so earlier sections win when extents overlap.

use crate::error::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
/// One named, vertically stacked region of the page.
pub enum SectionId {
    /// Hero banner at the top of the page.
    Home,
    /// Biography and focus areas.
    About,
    /// Technology grid.
    Skills,
    /// Featured project cards.
    Projects,
    /// Work history.
    Experience,
    /// Contact details and the (decorative) message form.
    Contact,
}

impl SectionId {
    /// Every section in page order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Experience,
        Self::Contact,
    ];

    #[must_use]
    /// Anchor identifier, as used in `#home`-style links.
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    /// Human-readable navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    /// Position of this section in [`SectionId::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    /// Accepts an anchor id with or without the leading `#`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.anchor().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Vertical span of a section in display units, as reported by layout.
pub struct Extent {
    /// Offset of the first unit of the section from the top of the page.
    pub top: u32,
    /// Number of units the section occupies.
    pub height: u32,
}

impl Extent {
    #[must_use]
    /// Creates an extent starting at `top` and spanning `height` units.
    pub const fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    #[must_use]
    /// First unit past the end of the section.
    pub fn bottom(&self) -> u64 {
        u64::from(self.top) + u64::from(self.height)
    }

    #[must_use]
    /// Whether `position` falls within `[top, top + height)`.
    pub fn contains(&self, position: u32) -> bool {
        position >= self.top && u64::from(position) < self.bottom()
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;

//! Renders the portfolio into styled terminal rows and records where each section landed.
//!
//! The result doubles as the layout the active-section tracker queries: each section's row span
//! is reported in display units (rows times `line_height`). An empty layout reports nothing, which
//! is how the page looks before its first draw.

use crate::content::{Content, Tone};
use crate::reveal::{Animation, Block};
use crate::section::{Extent, SectionId};
use crate::tracker::LayoutQuery;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::collections::HashMap;
use std::ops::Range;

const MARGIN: usize = 2;
const SKILL_CELL: usize = 14;

#[must_use]
/// Terminal colour for an accent.
pub const fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Primary => Color::Cyan,
        Tone::Success => Color::Green,
        Tone::Secondary => Color::Magenta,
        Tone::Yellow => Color::Yellow,
        Tone::Green => Color::LightGreen,
        Tone::Blue => Color::LightBlue,
        Tone::Purple => Color::LightMagenta,
        Tone::Teal => Color::Rgb(45, 212, 191),
        Tone::Orange => Color::Rgb(251, 146, 60),
    }
}

fn muted() -> Style {
    Style::default().fg(Color::Gray)
}

fn strong() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn accent(tone: Tone) -> Style {
    Style::default().fg(tone_color(tone))
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

fn indent(spans: Vec<Span<'static>>, columns: usize) -> Line<'static> {
    let mut all = Vec::with_capacity(spans.len() + 1);
    all.push(Span::raw(" ".repeat(columns)));
    all.extend(spans);
    Line::from(all)
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

struct Builder {
    width: usize,
    rows: Vec<Line<'static>>,
    row_blocks: Vec<Option<usize>>,
    blocks: Vec<Block>,
    open_block: Option<usize>,
}

impl Builder {
    fn new(width: u16) -> Self {
        Self {
            width: usize::from(width).saturating_sub(MARGIN * 2).max(10),
            rows: Vec::new(),
            row_blocks: Vec::new(),
            blocks: Vec::new(),
            open_block: None,
        }
    }

    fn row(&self) -> u32 {
        count(self.rows.len())
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        self.rows.push(indent(spans, MARGIN));
        self.row_blocks.push(self.open_block);
    }

    fn blank(&mut self) {
        self.rows.push(Line::default());
        self.row_blocks.push(None);
    }

    fn text(&mut self, text: &str, style: Style, extra_indent: usize) {
        let pad = " ".repeat(extra_indent);
        for line in wrap(text, self.width.saturating_sub(extra_indent)) {
            self.push(vec![Span::raw(pad.clone()), Span::styled(line, style)]);
        }
    }

    /// Wrapped text after a two-column marker, continuation rows aligned with the text.
    fn bullet(&mut self, marker: Span<'static>, text: &str, style: Style) {
        for (i, line) in wrap(text, self.width.saturating_sub(2)).into_iter().enumerate() {
            let lead = if i == 0 {
                marker.clone()
            } else {
                Span::raw("  ")
            };
            self.push(vec![lead, Span::styled(line, style)]);
        }
    }

    /// Runs `f` with every row it pushes attributed to one animated block.
    fn block(&mut self, animation: Animation, f: impl FnOnce(&mut Self)) {
        let start = self.row();
        let index = self.blocks.len();
        self.blocks.push(Block {
            rows: start..start,
            animation,
        });
        self.open_block = Some(index);
        f(self);
        self.open_block = None;
        self.blocks[index].rows.end = self.row();
    }

    fn heading(&mut self, title: &str) {
        let rule = "─".repeat(8);
        self.block(Animation::TITLE, |b| {
            b.push(vec![Span::styled(
                title.to_string(),
                strong().fg(Color::White),
            )]);
            b.push(vec![Span::styled(rule, accent(Tone::Primary))]);
        });
        self.blank();
    }

    fn pad_to(&mut self, start: u32, min_rows: u32) {
        while self.row() < start.saturating_add(min_rows) {
            self.blank();
        }
    }
}

#[derive(Debug)]
/// Rendered rows of the whole page plus the positions of its sections.
pub struct PageLayout {
    rows: Vec<Line<'static>>,
    row_blocks: Vec<Option<usize>>,
    blocks: Vec<Block>,
    sections: HashMap<SectionId, Range<u32>>,
    line_height: u32,
}

impl PageLayout {
    #[must_use]
    /// A layout in which no section has been mounted yet.
    pub fn empty(line_height: u32) -> Self {
        Self {
            rows: Vec::new(),
            row_blocks: Vec::new(),
            blocks: Vec::new(),
            sections: HashMap::new(),
            line_height: line_height.max(1),
        }
    }

    #[must_use]
    /// Renders `content` for a terminal `width` columns wide.
    ///
    /// The hero is padded to at least `min_hero_rows` so it fills the first screen.
    pub fn build(
        content: &Content,
        width: u16,
        min_hero_rows: u32,
        line_height: u32,
        year: i32,
    ) -> Self {
        let mut b = Builder::new(width);
        let mut sections = HashMap::new();

        for id in SectionId::ALL {
            let start = b.row();
            match id {
                SectionId::Home => {
                    hero(&mut b, content);
                    b.pad_to(start, min_hero_rows);
                }
                SectionId::About => about(&mut b, content),
                SectionId::Skills => skills(&mut b, content),
                SectionId::Projects => projects(&mut b, content),
                SectionId::Experience => experience(&mut b, content),
                SectionId::Contact => contact(&mut b, content),
            }
            sections.insert(id, start..b.row());
        }
        footer(&mut b, content, year);

        Self {
            rows: b.rows,
            row_blocks: b.row_blocks,
            blocks: b.blocks,
            sections,
            line_height: line_height.max(1),
        }
    }

    #[must_use]
    /// All rendered rows, top to bottom.
    pub fn rows(&self) -> &[Line<'static>] {
        &self.rows
    }

    #[must_use]
    /// Total number of rows.
    pub fn row_count(&self) -> u32 {
        count(self.rows.len())
    }

    #[must_use]
    /// Animated blocks in page order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    /// Index of the animated block covering `row`, if any.
    pub fn block_at(&self, row: usize) -> Option<usize> {
        self.row_blocks.get(row).copied().flatten()
    }

    #[must_use]
    /// Rows occupied by `section`.
    pub fn section_rows(&self, section: SectionId) -> Option<Range<u32>> {
        self.sections.get(&section).cloned()
    }

    #[must_use]
    /// The page as plain text, one row per line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let line: String = row.spans.iter().map(|s| s.content.as_ref()).collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl LayoutQuery for PageLayout {
    fn extent(&self, section: SectionId) -> Option<Extent> {
        let rows = self.sections.get(&section)?;
        Some(Extent::new(
            rows.start.saturating_mul(self.line_height),
            (rows.end - rows.start).saturating_mul(self.line_height),
        ))
    }
}

fn hero(b: &mut Builder, content: &Content) {
    b.blank();
    b.block(Animation::TITLE, |b| {
        b.push(vec![
            Span::styled("Hi, I'm ", strong().fg(Color::White)),
            Span::styled(content.short_name, strong().fg(tone_color(Tone::Primary))),
        ]);
        b.push(vec![Span::styled(content.headline, muted())]);
        b.blank();
        b.text(content.intro, muted(), 0);
    });
    b.blank();
    b.block(Animation::card(1), |b| {
        b.push(vec![
            Span::styled(
                "[ ⤓ Download CV ]",
                Style::default()
                    .fg(Color::Black)
                    .bg(tone_color(Tone::Primary)),
            ),
            Span::raw("  "),
            Span::styled("[ Get In Touch ]", strong()),
            Span::styled("  #contact", muted()),
        ]);
        b.blank();
        b.push(vec![
            Span::styled("● ", accent(Tone::Success)),
            Span::styled("Open to work", muted()),
        ]);
    });
}

fn about(b: &mut Builder, content: &Content) {
    b.blank();
    b.heading("About Me");
    b.block(Animation::TITLE, |b| {
        b.push(vec![Span::styled(content.about_title, strong())]);
        b.blank();
        for (i, paragraph) in content.about.iter().enumerate() {
            if i > 0 {
                b.blank();
            }
            b.text(paragraph, muted(), 0);
        }
    });
    b.blank();
    for (i, area) in content.focus_areas.iter().enumerate() {
        b.block(Animation::item(i), |b| {
            b.push(vec![
                Span::styled("▸ ", accent(area.tone)),
                Span::styled(format!("{:<10}", area.title), strong()),
                Span::styled(area.desc, muted()),
            ]);
        });
    }
    b.blank();
    for (i, card) in content.highlights.iter().enumerate() {
        b.block(Animation::item(i), |b| {
            b.push(vec![
                Span::styled("■ ", accent(card.tone)),
                Span::styled(card.title, strong()),
            ]);
            b.text(card.desc, muted(), 2);
        });
    }
    b.blank();
}

fn skills(b: &mut Builder, content: &Content) {
    b.blank();
    b.heading("Skills & Technologies");
    let per_row = (b.width / SKILL_CELL).max(1);
    for (i, row) in content.skills.chunks(per_row).enumerate() {
        b.block(Animation::item(i), |b| {
            let spans = row
                .iter()
                .flat_map(|skill| {
                    [
                        Span::styled("◆ ", accent(skill.tone)),
                        Span::styled(
                            format!("{:<width$}", skill.name, width = SKILL_CELL - 2),
                            muted(),
                        ),
                    ]
                })
                .collect();
            b.push(spans);
        });
    }
    b.blank();
}

fn projects(b: &mut Builder, content: &Content) {
    b.blank();
    b.heading("Featured Projects");
    for (i, project) in content.projects.iter().enumerate() {
        b.block(Animation::card(i), |b| {
            b.push(vec![
                Span::styled(
                    format!(" {} ", project.initials()),
                    strong().fg(Color::Black).bg(tone_color(project.tone)),
                ),
                Span::raw(" "),
                Span::styled(project.title, strong()),
            ]);
            b.text(project.description, muted(), 2);
            let mut tags = vec![Span::raw("  ")];
            for tech in project.tech {
                tags.push(Span::styled(format!("[{tech}]"), muted()));
                tags.push(Span::raw(" "));
            }
            b.push(tags);
            b.push(vec![
                Span::raw("  "),
                Span::styled("↗ Live Demo", accent(Tone::Primary)),
                Span::raw("   "),
                Span::styled("⌥ Code", muted()),
            ]);
        });
        b.blank();
    }
}

fn experience(b: &mut Builder, content: &Content) {
    b.blank();
    b.heading("Experience");
    for (i, role) in content.experience.iter().enumerate() {
        b.block(Animation::card(i), |b| {
            b.push(vec![
                Span::styled(role.title, strong()),
                Span::raw("  "),
                Span::styled(format!("({})", role.period), muted()),
            ]);
            b.push(vec![Span::styled(role.company, accent(Tone::Primary))]);
            b.text(role.description, muted(), 0);
            for achievement in role.achievements {
                b.bullet(Span::styled("• ", accent(Tone::Primary)), achievement, muted());
            }
        });
        b.blank();
    }
}

fn contact(b: &mut Builder, content: &Content) {
    b.blank();
    b.heading("Get In Touch");
    b.block(Animation::TITLE, |b| b.text(content.contact_blurb, muted(), 0));
    b.blank();
    for (i, method) in content.contact_methods.iter().enumerate() {
        b.block(Animation::item(i), |b| {
            b.push(vec![
                Span::styled("● ", accent(method.tone)),
                Span::styled(format!("{:<10}", method.title), strong()),
                Span::styled(method.value, muted()),
            ]);
        });
    }
    b.blank();
    b.block(Animation::TITLE, |b| {
        let mut links = Vec::new();
        for social in content.socials {
            links.push(Span::styled(format!("[ {social} ]"), strong()));
            links.push(Span::raw(" "));
        }
        b.push(links);
    });
    b.blank();
    let field_width = b.width.min(60).saturating_sub(4);
    b.block(Animation::TITLE, |b| {
        for placeholder in ["Your Name", "Your Email", "Subject", "Your Message"] {
            b.push(vec![Span::styled(
                format!("[ {placeholder:<field_width$} ]"),
                Style::default().fg(Color::DarkGray),
            )]);
        }
        b.push(vec![Span::styled(
            format!("[ {:^field_width$} ]", "Send Message"),
            Style::default()
                .fg(Color::Black)
                .bg(tone_color(Tone::Primary)),
        )]);
    });
    b.blank();
}

fn footer(b: &mut Builder, content: &Content, year: i32) {
    let rule = "─".repeat(b.width);
    b.push(vec![Span::styled(rule.clone(), Style::default().fg(Color::DarkGray))]);
    b.push(vec![Span::styled(content.name, strong())]);
    b.text(content.footer_blurb, muted(), 0);
    b.blank();

    let mut links = vec![Span::styled("Quick Links  ", strong())];
    for (i, section) in SectionId::ALL.iter().skip(1).enumerate() {
        if i > 0 {
            links.push(Span::styled(" · ", muted()));
        }
        links.push(Span::styled(section.label(), muted()));
    }
    b.push(links);

    let mut connect = vec![Span::styled("Connect      ", strong())];
    for (i, social) in content.socials.iter().enumerate() {
        if i > 0 {
            connect.push(Span::styled(" · ", muted()));
        }
        connect.push(Span::styled(*social, muted()));
    }
    b.push(connect);
    b.push(vec![Span::styled(rule, Style::default().fg(Color::DarkGray))]);
    b.push(vec![Span::styled(
        format!("© {year} {}. All rights reserved.", content.name),
        muted(),
    )]);
}

#[cfg(test)]
#[path = "tests/page.rs"]
mod tests;

use super::{AppState, Scroll};
use crate::config::Config;
use crate::content::PORTFOLIO;
use crate::section::SectionId;
use crate::tracker::locate;

fn config() -> Config {
    Config {
        animations: false,
        ..Config::default()
    }
}

fn mounted(width: u16, rows: u16) -> AppState {
    let mut app = AppState::mount(&PORTFOLIO, config(), 2026);
    app.relayout(width, rows);
    app
}

#[test]
fn test_first_section_active_before_layout() {
    let mut app = AppState::mount(&PORTFOLIO, config(), 2026);
    assert!(app.is_mounted());
    assert_eq!(app.active_section(), SectionId::Home);

    assert!(!app.jump_to(SectionId::About), "nothing is laid out yet");
    assert!(app.message.is_some());
    assert_eq!(app.active_section(), SectionId::Home);
}

#[test]
fn test_anchor_navigation_highlights_target() {
    let mut app = mounted(100, 30);
    assert_eq!(app.active_section(), SectionId::Home);

    for section in [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
    ] {
        assert!(app.jump_to(section));
        let start = app.layout().section_rows(section).unwrap().start;
        assert_eq!(app.viewport().top_row(), start);
        assert_eq!(app.active_section(), section);
        assert_eq!(app.focused_link, section.index());
    }

    app.jump_to(SectionId::Home);
    assert_eq!(app.active_section(), SectionId::Home);
}

#[test]
fn test_scrolling_tracks_every_offset() {
    let mut app = mounted(100, 30);
    let lookahead = app.config().lookahead;
    let mut expected = SectionId::Home;

    loop {
        let offset = app.viewport().offset();
        if let Some(section) = locate(&SectionId::ALL, offset + lookahead, &*app.layout()) {
            expected = section;
        }
        assert_eq!(app.active_section(), expected, "offset {offset}");
        if !app.scroll(Scroll::Rows(1)) {
            break;
        }
    }
    assert_eq!(app.viewport().offset(), app.viewport().max_offset());
}

#[test]
fn test_scroll_requests() {
    let mut app = mounted(100, 30);
    assert!(app.scroll(Scroll::Bottom));
    assert_eq!(app.viewport().offset(), app.viewport().max_offset());
    assert!(!app.scroll(Scroll::PageDown));
    assert!(app.scroll(Scroll::PageUp));
    assert!(app.scroll(Scroll::Top));
    assert_eq!(app.viewport().offset(), 0);
    assert!(!app.scroll(Scroll::Rows(-1)));
}

#[test]
fn test_teardown_stops_tracking() {
    let mut app = mounted(100, 30);
    app.jump_to(SectionId::About);
    assert_eq!(app.active_section(), SectionId::About);

    app.teardown();
    assert!(!app.is_mounted());
    assert_eq!(app.viewport().listener_count(), 0);

    assert!(app.jump_to(SectionId::Experience), "the viewport still scrolls");
    app.scroll(Scroll::Rows(5));
    app.relayout(100, 30);
    assert_eq!(app.active_section(), SectionId::About);

    app.teardown();
}

#[test]
fn test_relayout_rescans_at_new_width() {
    let mut app = mounted(120, 30);
    app.jump_to(SectionId::Projects);
    assert_eq!(app.active_section(), SectionId::Projects);

    // The same offset lands higher up the taller, narrower page.
    app.relayout(50, 30);
    let probe = app.viewport().offset() + app.config().lookahead;
    let expected =
        locate(&SectionId::ALL, probe, &*app.layout()).unwrap_or(SectionId::Projects);
    assert_eq!(app.active_section(), expected);
}

#[test]
fn test_compact_menu() {
    let mut app = mounted(60, 20);
    assert!(app.is_compact());

    app.jump_to(SectionId::Skills);
    app.toggle_menu();
    assert!(app.menu_open);
    assert_eq!(app.focused_link, SectionId::Skills.index());

    app.next_link();
    assert!(app.follow_link());
    assert!(!app.menu_open, "following a link closes the menu");
    assert_eq!(app.active_section(), SectionId::Projects);

    app.toggle_menu();
    app.relayout(120, 20);
    assert!(!app.is_compact());
    assert!(!app.menu_open, "wide layouts have no menu");
}

#[test]
fn test_link_cursor_wraps() {
    let mut app = mounted(100, 30);
    app.prev_link();
    assert_eq!(app.focused_link, SectionId::Contact.index());
    app.next_link();
    assert_eq!(app.focused_link, SectionId::Home.index());
}

#[test]
fn test_hidden_rows_until_observed() {
    let mut app = AppState::mount(&PORTFOLIO, Config::default(), 2026);
    app.relayout(100, 30);
    let now = std::time::Instant::now();

    let row = app.layout().blocks()[0].rows.start;
    let row = usize::try_from(row).unwrap();
    assert_eq!(app.row_phase(row, now), crate::reveal::Phase::Hidden);

    app.observe(now);
    let later = now + std::time::Duration::from_secs(2);
    assert_eq!(app.row_phase(row, later), crate::reveal::Phase::Shown);
    assert!(!app.is_animating(later));
}

#[test]
fn test_height_change_refits_hero() {
    let mut app = mounted(100, 30);
    let hero = app.layout().section_rows(SectionId::Home).unwrap();
    assert_eq!(hero.end - hero.start, 30);

    app.relayout(100, 45);
    let hero = app.layout().section_rows(SectionId::Home).unwrap();
    assert_eq!(hero.end - hero.start, 45);
    assert_eq!(app.viewport().visible_rows(), 45);
}

#[test]
fn test_rebuilt_layout_only_keeps_visible_blocks_revealed() {
    let mut app = AppState::mount(&PORTFOLIO, Config::default(), 2026);
    app.relayout(100, 30);
    assert!(app.jump_to(SectionId::Skills));
    let now = std::time::Instant::now();
    app.observe(now);

    app.relayout(60, 30);
    let top = app.viewport().top_row();
    let visible = top..top + app.viewport().visible_rows();
    let blocks = app.layout().blocks().to_vec();
    assert!(blocks.iter().any(|b| b.rows.start >= visible.end));

    let row_count = usize::try_from(app.layout().row_count()).unwrap();
    for row in 0..row_count {
        let Some(index) = app.layout().block_at(row) else {
            continue;
        };
        let rows = &blocks[index].rows;
        let on_screen = rows.start < visible.end && visible.start < rows.end;
        let expected = if on_screen {
            crate::reveal::Phase::Shown
        } else {
            crate::reveal::Phase::Hidden
        };
        assert_eq!(app.row_phase(row, now), expected, "row {row}");
    }
}

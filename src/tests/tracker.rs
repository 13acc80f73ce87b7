use super::{locate, LayoutQuery, Tracker, LOOKAHEAD};
use crate::section::{Extent, SectionId};

/// Home[0,800), About[800,700), Skills[1500,600).
fn stacked(section: SectionId) -> Option<Extent> {
    match section {
        SectionId::Home => Some(Extent::new(0, 800)),
        SectionId::About => Some(Extent::new(800, 700)),
        SectionId::Skills => Some(Extent::new(1500, 600)),
        _ => None,
    }
}

#[test]
fn test_starts_on_first_section() {
    let tracker = Tracker::default();
    assert_eq!(tracker.active(), SectionId::Home);
    assert_eq!(tracker.lookahead(), LOOKAHEAD);
}

#[test]
fn test_scroll_scenario() {
    let mut tracker = Tracker::default();

    assert!(tracker.scan(750, &stacked), "probe 850 is inside About");
    assert_eq!(tracker.active(), SectionId::About);

    assert!(tracker.scan(0, &stacked), "probe 100 is inside Home");
    assert_eq!(tracker.active(), SectionId::Home);

    tracker.scan(1450, &stacked);
    assert_eq!(tracker.active(), SectionId::Skills);

    assert!(!tracker.scan(5000, &stacked), "nothing matches past the end");
    assert_eq!(tracker.active(), SectionId::Skills, "last known good is kept");
}

#[test]
fn test_probe_boundaries() {
    let mut tracker = Tracker::default();

    // probe == About.top
    tracker.scan(700, &stacked);
    assert_eq!(tracker.active(), SectionId::About);

    // probe == Home.top + Home.height - 1
    tracker.scan(699, &stacked);
    assert_eq!(tracker.active(), SectionId::Home);

    // probe == About.top + About.height, which belongs to Skills
    tracker.scan(1400, &stacked);
    assert_eq!(tracker.active(), SectionId::Skills);
}

#[test]
fn test_scan_is_idempotent() {
    let mut tracker = Tracker::default();
    assert!(tracker.scan(900, &stacked));
    let first = tracker.active();
    assert!(!tracker.scan(900, &stacked));
    assert_eq!(tracker.active(), first);
}

#[test]
fn test_offsets_before_layout_keep_first_section() {
    let unmounted = |_: SectionId| -> Option<Extent> { None };
    let mut tracker = Tracker::default();
    for offset in [0, 100, 10_000] {
        assert!(!tracker.scan(offset, &unmounted));
        assert_eq!(tracker.active(), SectionId::Home);
    }
}

#[test]
fn test_offsets_above_first_section_keep_first_section() {
    // Page with a banner above the first section: probes below 300 match nothing.
    let shifted = |section: SectionId| match section {
        SectionId::Home => Some(Extent::new(300, 500)),
        SectionId::About => Some(Extent::new(800, 500)),
        _ => None,
    };
    let mut tracker = Tracker::default();
    for offset in 0..200 {
        tracker.scan(offset, &shifted);
        assert_eq!(tracker.active(), SectionId::Home);
    }
}

#[test]
fn test_unmounted_sections_are_skipped() {
    let partial = |section: SectionId| match section {
        SectionId::About => None,
        SectionId::Skills => Some(Extent::new(800, 400)),
        other => stacked(other),
    };
    let mut tracker = Tracker::default();
    tracker.scan(800, &partial);
    assert_eq!(tracker.active(), SectionId::Skills);
}

#[test]
fn test_earliest_declared_wins_on_overlap() {
    let overlapping = |section: SectionId| match section {
        SectionId::About => Some(Extent::new(0, 1000)),
        SectionId::Skills => Some(Extent::new(500, 1000)),
        _ => None,
    };
    assert_eq!(
        locate(&SectionId::ALL, 600, &overlapping),
        Some(SectionId::About)
    );
    assert_eq!(
        locate(&[SectionId::Skills, SectionId::About], 600, &overlapping),
        Some(SectionId::Skills)
    );
}

#[test]
fn test_every_probe_in_a_section_selects_it() {
    let mut tracker = Tracker::default();
    for offset in (0..2000).step_by(50) {
        tracker.scan(offset, &stacked);
        let probe = offset + LOOKAHEAD;
        let expected = SectionId::ALL
            .into_iter()
            .find(|&s| stacked(s).is_some_and(|e| e.contains(probe)))
            .unwrap();
        assert_eq!(tracker.active(), expected, "offset {offset}");
    }
}

#[test]
fn test_custom_order_and_lookahead() {
    let mut tracker = Tracker::new(vec![SectionId::Skills, SectionId::About], 0);
    assert_eq!(tracker.active(), SectionId::Skills);
    assert_eq!(tracker.order(), [SectionId::Skills, SectionId::About]);
    tracker.scan(800, &stacked);
    assert_eq!(tracker.active(), SectionId::About);
    tracker.scan(0, &stacked);
    assert_eq!(tracker.active(), SectionId::About, "Home is not tracked");
}

#[test]
fn test_empty_order_falls_back_to_page_order() {
    let tracker = Tracker::new(Vec::new(), LOOKAHEAD);
    assert_eq!(tracker.order(), SectionId::ALL);
    assert_eq!(tracker.active(), SectionId::Home);
}

#[test]
fn test_probe_saturates() {
    let tracker = Tracker::default();
    assert_eq!(tracker.probe(u32::MAX - 1), u32::MAX);
}

struct Fixed(Extent);

impl LayoutQuery for Fixed {
    fn extent(&self, section: SectionId) -> Option<Extent> {
        (section == SectionId::Contact).then_some(self.0)
    }
}

#[test]
fn test_layout_query_trait_objects() {
    let layout: Box<dyn LayoutQuery> = Box::new(Fixed(Extent::new(0, 10_000)));
    let mut tracker = Tracker::default();
    assert!(tracker.scan(0, layout.as_ref()));
    assert_eq!(tracker.active(), SectionId::Contact);
}

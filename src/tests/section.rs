use super::{Extent, SectionId};

#[test]
fn test_parse_anchor_ids() {
    assert_eq!("about".parse::<SectionId>().unwrap(), SectionId::About);
    assert_eq!("#contact".parse::<SectionId>().unwrap(), SectionId::Contact);
    assert_eq!("Skills".parse::<SectionId>().unwrap(), SectionId::Skills);
    assert!("blog".parse::<SectionId>().is_err());
}

#[test]
fn test_order_and_labels() {
    let anchors: Vec<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
    assert_eq!(
        anchors,
        ["home", "about", "skills", "projects", "experience", "contact"]
    );
    assert_eq!(SectionId::Experience.label(), "Experience");
    assert_eq!(SectionId::Projects.to_string(), "projects");
    assert_eq!(SectionId::Home.index(), 0);
    assert_eq!(SectionId::Contact.index(), 5);
}

#[test]
fn test_extent_bounds_are_half_open() {
    let extent = Extent::new(800, 700);
    assert!(!extent.contains(799));
    assert!(extent.contains(800), "top is inside");
    assert!(extent.contains(1499));
    assert!(!extent.contains(1500), "top + height is outside");
}

#[test]
fn test_extent_near_u32_max_does_not_overflow() {
    let extent = Extent::new(u32::MAX - 10, 100);
    assert!(extent.contains(u32::MAX));
    assert_eq!(extent.bottom(), u64::from(u32::MAX) + 90);
}

#[test]
fn test_empty_extent_contains_nothing() {
    let extent = Extent::new(50, 0);
    assert!(!extent.contains(50));
}

use super::*;

#[test]
fn anchor_id_strips_hash() {
    assert_eq!(anchor_id("#about"), Some("about"));
}

#[test]
fn anchor_id_rejects_non_fragments() {
    assert_eq!(anchor_id("/resume.pdf"), None);
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id("https://example.com/#x"), None);
}

#[test]
fn every_nav_link_is_a_fragment() {
    for link in crate::content::NAV_LINKS {
        assert!(anchor_id(link.href).is_some(), "{}", link.href);
    }
}

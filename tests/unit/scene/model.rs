use super::*;

#[test]
fn effective_opacity_multiplies_ancestors() {
    let mut els = Elements::new();
    els.insert("stage", ElementProps::new(0).opacity(0.5));
    els.insert("group", ElementProps::new(0).child_of("stage").opacity(0.5));
    els.insert("leaf", ElementProps::new(0).child_of("group").opacity(0.8));
    assert_eq!(els.effective_opacity("leaf"), Some(0.2));
    assert_eq!(els.effective_opacity("missing"), None);
}

#[test]
fn adopt_only_touches_roots() {
    let mut els = Elements::new();
    els.insert("a", ElementProps::new(0));
    els.insert("b", ElementProps::new(0).child_of("a"));
    els.adopt("stage");
    assert_eq!(els.get("a").unwrap().parent.as_deref(), Some("stage"));
    assert_eq!(els.get("b").unwrap().parent.as_deref(), Some("a"));
}

#[test]
fn opacity_is_clamped() {
    assert_eq!(ElementProps::new(0).opacity(1.5).opacity, 1.0);
    assert_eq!(ElementProps::new(0).opacity(-0.5).opacity, 0.0);
}

#[test]
fn serialization_skips_absent_fields() {
    let json = serde_json::to_value(ElementProps::new(2).text("hi")).unwrap();
    assert_eq!(json["text"], "hi");
    assert_eq!(json["z"], 2);
    assert!(json.get("cursor").is_none());
    assert!(json.get("parent").is_none());
}

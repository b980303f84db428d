use super::*;

#[test]
fn generated_ids_are_unique_and_assigned() {
    let a = ItemId::generate();
    let b = ItemId::generate();
    assert_ne!(a, b);
    assert!(!a.is_unassigned());
}

#[test]
fn default_id_is_unassigned() {
    assert!(ItemId::default().is_unassigned());
}

#[test]
fn display_name_falls_back_to_producto() {
    let mut item = CartItem::new("  ", Price::ZERO);
    assert_eq!(item.display_name(), DEFAULT_ITEM_NAME);
    item.name = "Camiseta".to_owned();
    assert_eq!(item.display_name(), "Camiseta");
}

#[test]
fn thumbnail_wraps_bare_urls() {
    let item = CartItem::new("Gorra", Price::ZERO)
        .with_image("./imgs/gorra.png");
    assert_eq!(
        item.thumbnail_style().as_deref(),
        Some("background-image: url(./imgs/gorra.png)")
    );
}

#[test]
fn thumbnail_keeps_css_url_values() {
    let item = CartItem::new("Gorra", Price::ZERO)
        .with_image("url(\"./imgs/gorra.png\")");
    assert_eq!(
        item.thumbnail_style().as_deref(),
        Some("background-image: url(\"./imgs/gorra.png\")")
    );
}

#[test]
fn thumbnail_absent_without_image() {
    let item = CartItem::new("Gorra", Price::ZERO);
    assert!(item.thumbnail_style().is_none());
}

#[test]
fn legacy_entry_deserializes_without_id() {
    let raw = r#"{"name":"Buzo","price":"85.000","image":"url(./imgs/buzo.png)","desc":null}"#;
    let item: CartItem = serde_json::from_str(raw).expect("legacy item");
    assert!(item.id.is_unassigned());
    assert_eq!(item.name, "Buzo");
    assert_eq!(item.price, Price::from_pesos(85_000));
    assert_eq!(item.desc, "");
}

#[test]
fn serialized_entry_omits_empty_description() {
    let mut item = CartItem::new("Buzo", Price::from_pesos(1));
    item.id = ItemId::from("fixed");
    let json = serde_json::to_value(&item).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({"id": "fixed", "name": "Buzo", "price": 100, "image": ""})
    );
}

#[test]
fn legacy_id_depends_on_position_and_content() {
    let buzo = CartItem {
        id: ItemId::default(),
        ..CartItem::new("Buzo", Price::from_pesos(85_000))
    };
    let gorra = CartItem {
        id: ItemId::default(),
        ..CartItem::new("Gorra", Price::from_pesos(30_000))
    };

    assert_eq!(ItemId::for_legacy(0, &buzo), ItemId::for_legacy(0, &buzo));
    assert_ne!(ItemId::for_legacy(0, &buzo), ItemId::for_legacy(1, &buzo));
    assert_ne!(ItemId::for_legacy(0, &buzo), ItemId::for_legacy(0, &gorra));
    assert!(!ItemId::for_legacy(0, &buzo).is_unassigned());
}

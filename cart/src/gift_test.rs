use super::*;
use crate::storage::MemoryStore;
use crate::store::CartStore;

#[test]
fn below_minimum_is_rejected() {
    assert_eq!(
        GiftCard::from_input("9999"),
        Err(GiftCardError::BelowMinimum {
            value: 9_999,
            minimum: MINIMUM_PESOS,
        })
    );
    assert!(GiftCard::from_input("0").is_err());
    assert!(GiftCard::from_input("-20000").is_err());
}

#[test]
fn non_numeric_is_rejected() {
    assert_eq!(GiftCard::from_input(""), Err(GiftCardError::NotANumber));
    assert_eq!(
        GiftCard::from_input("diez mil"),
        Err(GiftCardError::NotANumber)
    );
}

#[test]
fn minimum_is_accepted() {
    assert_eq!(
        GiftCard::from_input("10000").map(GiftCard::pesos),
        Ok(10_000)
    );
}

#[test]
fn reads_leading_integer_only() {
    assert_eq!(
        GiftCard::from_input(" 25000.99").map(GiftCard::pesos),
        Ok(25_000)
    );
    assert_eq!(
        GiftCard::from_input("30000 pesos").map(GiftCard::pesos),
        Ok(30_000)
    );
}

#[test]
fn every_rejection_shows_the_same_message() {
    let below = GiftCardError::BelowMinimum {
        value: 1,
        minimum: MINIMUM_PESOS,
    };
    assert_eq!(below.user_message(), INVALID_VALUE_MESSAGE);
    assert_eq!(
        GiftCardError::NotANumber.user_message(),
        INVALID_VALUE_MESSAGE
    );
}

#[test]
fn item_carries_formatted_name_and_exact_price() {
    let item = GiftCard::new(25_000).expect("valid").into_item();
    assert_eq!(item.name, "Tarjeta de Regalo - $25.000 COP");
    assert_eq!(item.price, Price::from_pesos(25_000));
    assert_eq!(item.price.format(), "25.000");
    assert_eq!(item.image, GIFT_CARD_IMAGE);
    assert_eq!(item.desc, GIFT_CARD_DESC);
}

#[test]
fn adding_valid_card_appends_exactly_one_entry() {
    let store = CartStore::new(MemoryStore::new());
    store
        .add_item(CartItem::new("Buzo", Price::from_pesos(85_000)))
        .expect("add");

    let card = GiftCard::from_input("50000").expect("valid");
    store.add_item(card.into_item()).expect("add");

    let items = store.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].price.format(), "50.000");
}

#[test]
fn rejected_card_leaves_cart_unchanged() {
    let store = CartStore::new(MemoryStore::new());
    store
        .add_item(CartItem::new("Buzo", Price::from_pesos(85_000)))
        .expect("add");
    let before = store.items();

    if let Ok(card) = GiftCard::from_input("5000") {
        store.add_item(card.into_item()).expect("add");
    }

    assert_eq!(store.items(), before);
}

#[test]
fn value_beyond_price_range_is_rejected() {
    assert_eq!(
        GiftCard::from_input("100000000000000000"),
        Err(GiftCardError::TooLarge {
            value: "100000000000000000".to_owned(),
        })
    );
    assert!(matches!(
        GiftCard::from_input("99999999999999999999999"),
        Err(GiftCardError::TooLarge { .. })
    ));
    assert!(matches!(
        GiftCard::new(i64::MAX / 100 + 1),
        Err(GiftCardError::TooLarge { .. })
    ));
}

#[test]
fn largest_priceable_value_keeps_exact_price() {
    let pesos = i64::MAX / 100;
    let card = GiftCard::new(pesos).expect("fits in centavos");
    assert_eq!(card.price().minor(), pesos * 100);
    assert_eq!(card.into_item().price, Price::from_pesos(pesos));
}

#[test]
fn huge_negative_value_is_below_minimum() {
    assert!(matches!(
        GiftCard::from_input("-99999999999999999999999"),
        Err(GiftCardError::BelowMinimum { .. })
    ));
}

#[test]
fn too_large_shows_the_same_message() {
    let err = GiftCardError::TooLarge {
        value: "1".to_owned(),
    };
    assert_eq!(err.user_message(), INVALID_VALUE_MESSAGE);
}

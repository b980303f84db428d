use cart::{CartItem, Price};

use super::*;

fn contact() -> Contact {
    Contact {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: "3001234567".to_owned(),
    }
}

#[test]
fn validate_contact_trims_fields() {
    assert_eq!(
        validate_contact("  Ana ", " ana@example.com ", " 3001234567 "),
        Ok(contact())
    );
}

#[test]
fn validate_contact_allows_blank_email() {
    let contact = validate_contact("Ana", "  ", "300").expect("valid contact");
    assert_eq!(contact.email, "");
}

#[test]
fn validate_contact_requires_name_and_phone() {
    assert_eq!(validate_contact("", "a@b.co", "300"), Err(MISSING_CONTACT));
    assert_eq!(
        validate_contact("Ana", "a@b.co", "   "),
        Err(MISSING_CONTACT)
    );
}

#[test]
fn build_notice_refuses_empty_cart() {
    let result = build_notice(&contact(), &[]);
    assert_eq!(result.map(|n| n.items.len()), Err(EMPTY_CART));
}

#[test]
fn build_notice_carries_cart_lines_and_total() {
    let items = [
        CartItem::new("Buzo Cyberduck", Price::from_pesos(85_000)),
        CartItem::new("Gorra Pato", Price::from_pesos(30_000)),
    ];
    let notice = build_notice(&contact(), &items).expect("notice");
    assert_eq!(notice.customer(), "Ana");
    assert_eq!(notice.items.len(), 2);
    assert_eq!(notice.total_price(), Price::from_pesos(115_000));
}

#[test]
fn failure_message_wraps_error() {
    assert_eq!(
        failure_message("notify failed: 500"),
        "No pudimos enviar tu pedido: notify failed: 500"
    );
}

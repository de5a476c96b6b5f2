use super::*;
use crate::config::RosterConfig;
use crate::view::{Card, CardImage, ImageState};

#[test]
fn test_card_starts_on_icon() {
    let card = Card::build(student("101", "Alice", "Trinity"), &RosterConfig::default());

    assert_eq!(card.image.state(), ImageState::Primary);
    assert_eq!(card.image.src(), "images/student/icon/101.webp");
    assert_eq!(card.name, "Alice");
    assert_eq!(card.school, "Trinity");
}

#[test]
fn test_image_falls_back_to_portrait_once() {
    let mut card = Card::build(student("101", "Alice", "Trinity"), &RosterConfig::default());

    assert_eq!(
        card.image.on_load_error(),
        Some("images/student/portrait/101.webp")
    );
    assert_eq!(card.image.state(), ImageState::Fallback);
    assert_eq!(card.image.src(), "images/student/portrait/101.webp");

    // Portrait failing too changes nothing
    assert_eq!(card.image.on_load_error(), None);
    assert_eq!(card.image.on_load_error(), None);
    assert_eq!(card.image.state(), ImageState::Fallback);
    assert_eq!(card.image.src(), "images/student/portrait/101.webp");
}

#[test]
fn test_fallback_is_per_card() {
    let config = RosterConfig::default();
    let mut first = Card::build(student("1", "A", "X"), &config);
    let second = Card::build(student("2", "B", "Y"), &config);

    first.image.on_load_error();

    assert_eq!(first.image.state(), ImageState::Fallback);
    assert_eq!(second.image.state(), ImageState::Primary);
    assert_eq!(second.image.src(), "images/student/icon/2.webp");
}

#[test]
fn test_missing_id_still_builds_a_card() {
    let card = Card::build(student("", "Nameless", ""), &RosterConfig::default());
    assert_eq!(card.image.src(), "images/student/icon/.webp");
    assert_eq!(card.school, "");
}

#[test]
fn test_card_image_new_uses_given_paths() {
    let mut image = CardImage::new("a.webp".into(), "b.webp".into());
    assert_eq!(image.src(), "a.webp");
    assert_eq!(image.on_load_error(), Some("b.webp"));
}

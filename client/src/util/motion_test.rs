use super::*;

#[test]
fn first_item_uses_base_delay() {
    assert_eq!(stagger_ms(300, 0, 100), 300);
}

#[test]
fn later_items_add_one_step_each() {
    assert_eq!(stagger_ms(300, 1, 100), 400);
    assert_eq!(stagger_ms(700, 3, 100), 1000);
}

#[test]
fn stagger_saturates_instead_of_overflowing() {
    assert_eq!(stagger_ms(u32::MAX - 1, 5, 100), u32::MAX);
    assert_eq!(stagger_ms(0, usize::MAX, 2), u32::MAX);
}

#[test]
fn delay_style_is_css_declaration() {
    assert_eq!(delay_style(250), "animation-delay: 250ms");
    assert_eq!(stagger_delay(500, 2, 100), "animation-delay: 700ms");
}

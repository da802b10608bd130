use super::*;

#[test]
fn shown_tooltip_is_visible_and_opaque() {
    assert_eq!(TooltipState::Shown.style(), ("visible", "1"));
    assert_eq!(TooltipState::Shown.trigger(), "mouseenter");
}

#[test]
fn hidden_tooltip_is_invisible_and_transparent() {
    assert_eq!(TooltipState::Hidden.style(), ("hidden", "0"));
    assert_eq!(TooltipState::Hidden.trigger(), "mouseleave");
}

use super::*;

#[test]
fn toggling_twice_returns_to_the_start() {
    for start in [MenuState::Closed, MenuState::Open] {
        assert_eq!(start.toggled().toggled(), start);
        assert_ne!(start.toggled(), start);
    }
}

#[test]
fn aria_expanded_mirrors_state() {
    assert_eq!(MenuState::Open.aria_expanded(), "true");
    assert_eq!(MenuState::Closed.aria_expanded(), "false");
    assert_eq!(
        MenuState::Closed.toggled().aria_expanded(),
        MenuState::Open.aria_expanded()
    );
}

#[test]
fn closes_only_strictly_above_the_breakpoint() {
    assert!(!exceeds_breakpoint(375.0, 768.0));
    assert!(!exceeds_breakpoint(768.0, 768.0));
    assert!(exceeds_breakpoint(769.0, 768.0));
    assert!(exceeds_breakpoint(1440.0, 768.0));
}

use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InOutSine,
];

#[test]
fn every_ease_pins_endpoints() {
    for e in ALL {
        assert!(e.apply(0.0).abs() < 1e-12, "{e:?} at 0");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?} at 1");
    }
}

#[test]
fn inputs_outside_unit_range_are_clamped() {
    for e in ALL {
        assert_eq!(e.apply(-3.0), e.apply(0.0));
        assert_eq!(e.apply(7.0), e.apply(1.0));
    }
}

#[test]
fn in_out_sine_is_symmetric_at_half() {
    assert!((Ease::InOutSine.apply(0.5) - 0.5).abs() < 1e-12);
    assert!((Ease::InOutSine.tween(0.5, 100.0, 300.0) - 200.0).abs() < 1e-9);
}

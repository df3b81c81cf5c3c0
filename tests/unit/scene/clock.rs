use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn one_second_at_thirty_fps() {
    let clock = TransitionClock::new(1.0, fps30()).unwrap();
    assert_eq!(clock.frame_count(), 30);
    assert_eq!(clock.progress_at(FrameIndex(0)), 0.0);
    assert_eq!(clock.progress_at(FrameIndex(29)), 1.0);
    assert_eq!(clock.progress_at(FrameIndex(100)), 1.0);
    assert!((clock.secs_at(FrameIndex(15)) - 0.5).abs() < 1e-12);
}

#[test]
fn progress_is_monotonic() {
    let clock = TransitionClock::new(0.6, fps30()).unwrap();
    let values: Vec<f64> = clock.progress_values().map(|(_, t)| t).collect();
    assert_eq!(values.len(), 18);
    assert!(values.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(values.last().copied(), Some(1.0));
}

#[test]
fn zero_duration_is_one_committed_frame() {
    let clock = TransitionClock::new(0.0, fps30()).unwrap();
    let values: Vec<(FrameIndex, f64)> = clock.progress_values().collect();
    assert_eq!(values, vec![(FrameIndex(0), 1.0)]);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert!(TransitionClock::new(-1.0, fps30()).is_err());
    assert!(TransitionClock::new(f64::NAN, fps30()).is_err());
    let broken = Fps { num: 30, den: 0 };
    assert!(TransitionClock::new(1.0, broken).is_err());
}

use super::*;

#[test]
fn counts_every_integer_once_then_halts() {
    let mut c = PreloaderCounter::new();
    let mut seen = vec![c.count()];
    for _ in 0..100 {
        c.tick();
        seen.push(c.count());
    }
    assert_eq!(seen, (0..=100).collect::<Vec<u8>>());
    assert_eq!(c.state(), PreloaderState::Complete);

    for _ in 0..10 {
        assert_eq!(c.tick(), PreloaderState::Complete);
    }
    assert_eq!(c.count(), 100);
}

#[test]
fn reports_running_state() {
    let mut c = PreloaderCounter::new();
    assert_eq!(c.state(), PreloaderState::Running(0));
    assert_eq!(c.tick(), PreloaderState::Running(1));
    for _ in 0..98 {
        c.tick();
    }
    assert_eq!(c.state(), PreloaderState::Running(99));
    assert_eq!(c.tick(), PreloaderState::Complete);
}

#[test]
fn jitter_stays_in_bounds() {
    let (min, max) = (Duration::from_millis(10), Duration::from_millis(30));
    let mut d = JitterDelay::seeded(min, max, 7).unwrap();
    let delays: Vec<Duration> = (0..500).map(|_| d.next_delay()).collect();
    assert!(delays.iter().all(|v| *v >= min && *v <= max));
    assert!(delays.iter().any(|v| *v != delays[0]));
}

#[test]
fn seeded_jitter_is_reproducible() {
    let (min, max) = (Duration::from_millis(10), Duration::from_millis(30));
    let mut a = JitterDelay::seeded(min, max, 42).unwrap();
    let mut b = JitterDelay::seeded(min, max, 42).unwrap();
    for _ in 0..20 {
        assert_eq!(a.next_delay(), b.next_delay());
    }
}

#[test]
fn jitter_rejects_inverted_range() {
    assert!(JitterDelay::seeded(Duration::from_millis(5), Duration::from_millis(1), 0).is_err());
    let mut flat =
        JitterDelay::seeded(Duration::from_millis(12), Duration::from_millis(12), 0).unwrap();
    assert_eq!(flat.next_delay(), Duration::from_millis(12));
}

#[test]
fn state_serializes_with_tag() {
    assert_eq!(
        serde_json::to_string(&PreloaderState::Running(3)).unwrap(),
        r#"{"state":"running","count":3}"#
    );
    assert_eq!(
        serde_json::to_string(&PreloaderState::Complete).unwrap(),
        r#"{"state":"complete"}"#
    );
}

use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

#[derive(Debug, Default)]
struct Counting {
    created: AtomicUsize,
    disposed: AtomicUsize,
}

impl Morpher for Counting {
    fn create_interpolator(&self, from: &str, to: &str) -> Interpolator {
        self.created.fetch_add(1, Ordering::SeqCst);
        let (a, b) = (from.to_owned(), to.to_owned());
        Interpolator::new(from, to, move |t| format!("{a}->{b}@{t}"))
    }

    fn dispose(&self) {
        self.disposed.fetch_add(1, Ordering::SeqCst);
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

fn tween() -> (PathTween, Arc<Counting>) {
    let morpher = Arc::new(Counting::default());
    (PathTween::new("A", morpher.clone()), morpher)
}

#[test]
fn idle_tween_samples_committed_data() {
    let (tween, _) = tween();
    assert_eq!(tween.sample(0.5), "A");
    assert_eq!(tween.target(), None);
}

#[test]
fn retargeting_the_same_pair_reuses_the_interpolator() {
    let (mut tween, morpher) = tween();
    tween.retarget("B");
    tween.retarget("B");
    assert_eq!(morpher.created.load(Ordering::SeqCst), 1);
    assert_eq!(tween.sample(0.5), "A->B@0.5");

    tween.retarget("C");
    assert_eq!(morpher.created.load(Ordering::SeqCst), 2);
    assert_eq!(tween.target(), Some("C"));
}

#[test]
fn finish_commits_the_target() {
    let (mut tween, _) = tween();
    tween.retarget("B");
    tween.finish();
    assert_eq!(tween.data(), "B");
    assert_eq!(tween.sample(0.5), "B");
}

#[test]
fn dispose_releases_the_morpher() {
    let (mut tween, morpher) = tween();
    tween.retarget("B");
    tween.dispose();
    assert_eq!(morpher.disposed.load(Ordering::SeqCst), 1);

    let it = tween.retarget("C");
    assert_eq!(morpher.created.load(Ordering::SeqCst), 1);
    assert_eq!(it.sample(0.2), "A");
    assert_eq!(it.sample(0.8), "C");
}

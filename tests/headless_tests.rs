//! Tests for the headless batch runner

mod common;

use common::*;
use dicebowl::minigame::{HeadlessRollsPlugin, HeadlessRun};

#[test]
fn test_headless_exits_after_rolls() {
    let (mut app, mut outbox) = test_app(quick_config());
    app.add_plugins(HeadlessRollsPlugin { rolls: 3 });

    let mut frames = 0;
    while app.should_exit().is_none() && frames < 200 {
        app.update();
        frames += 1;
    }

    assert!(app.should_exit().is_some());
    assert_eq!(app.world().resource::<HeadlessRun>().results.len(), 3);

    let results = drain_outbox(&mut outbox)
        .into_iter()
        .filter(|m| m.contains("dice1"))
        .count();
    assert_eq!(results, 3);
}

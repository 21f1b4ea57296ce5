use fireworks_canvas::physic_engine::{PhysicConfig, PhysicEngine, PhysicEngineFireworks, Viewport};
use fireworks_canvas::scheduler::{SpawnScheduler, SpawnSchedulerConfig, SpawnSchedulerConfigBuilder};
use std::time::Duration;

mod helpers;
use helpers::seeded_engine;

#[test]
fn test_active_rockets_never_exceed_cap() {
    let mut scheduler = SpawnScheduler::with_seed(SpawnSchedulerConfig::default(), 10);
    // Sans update() les fusées ne retombent jamais : le plafond est atteint
    let mut engine = seeded_engine(1024.0, 800.0, 10);
    scheduler.start(Duration::ZERO);

    let frame = Duration::from_millis(16);
    let mut now = Duration::ZERO;
    for _ in 0..(60_000 / 16) {
        now += frame;
        scheduler.tick(now, &mut engine);
        assert!(engine.active_rockets() <= 20);
    }
    assert_eq!(engine.active_rockets(), 20);
}

#[test]
fn test_launches_are_staggered() {
    let cfg = SpawnSchedulerConfigBuilder::default()
        .burst_min(3)
        .burst_max(3)
        .build()
        .unwrap();
    let mut scheduler = SpawnScheduler::with_seed(cfg, 11);
    let mut engine = seeded_engine(1024.0, 800.0, 11);
    scheduler.start(Duration::ZERO);

    assert_eq!(scheduler.tick(Duration::from_millis(800), &mut engine), 1);
    assert_eq!(scheduler.tick(Duration::from_millis(949), &mut engine), 0);
    assert_eq!(scheduler.tick(Duration::from_millis(950), &mut engine), 1);
    assert_eq!(scheduler.tick(Duration::from_millis(1100), &mut engine), 1);
    assert_eq!(engine.active_rockets(), 3);
}

#[test]
fn test_stopped_scheduler_launches_nothing() {
    let mut scheduler = SpawnScheduler::with_seed(SpawnSchedulerConfig::default(), 12);
    let mut engine = seeded_engine(1024.0, 800.0, 12);
    scheduler.start(Duration::ZERO);
    scheduler.tick(Duration::from_millis(800), &mut engine);
    scheduler.stop();
    assert!(!scheduler.is_active());

    let launched = scheduler.tick(Duration::from_secs(30), &mut engine);
    assert_eq!(launched, 0);
    assert_eq!(engine.active_rockets(), 1);
}

#[test]
fn test_cap_comes_from_physic_config() {
    let physic_config = PhysicConfig {
        max_active_rockets: 5,
        ..PhysicConfig::default()
    };
    let mut engine = PhysicEngineFireworks::with_seed(&physic_config, Viewport::new(1024.0, 800.0), 13);
    let mut scheduler = SpawnScheduler::with_seed(SpawnSchedulerConfig::default(), 13);
    scheduler.start(Duration::ZERO);

    let mut now = Duration::ZERO;
    while now < Duration::from_secs(48) {
        now += Duration::from_millis(16);
        scheduler.tick(now, &mut engine);
        assert!(engine.active_rockets() <= 5);
    }
    assert_eq!(engine.active_rockets(), 5);
}

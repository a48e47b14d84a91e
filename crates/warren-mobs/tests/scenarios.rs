//! End-to-end mob scenarios against the in-memory grid and the observer
//! registry.
//!
//! Each test starts from the one-room seed map, drives the factory with a
//! seeded RNG and checks what the world and its observers end up with.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]

use rand::SeedableRng;
use rand::rngs::SmallRng;
use warren_mobs::{Behavior, BehaviorContext, MobFactory, MobIndex, NameGenerator, Outcome};
use warren_types::{Coord, Direction};
use warren_world::{CellMap, Presence, WorldGrid, create_starting_world};

fn seeded(seed: u64) -> MobFactory<SmallRng> {
    MobFactory::new(NameGenerator::default(), SmallRng::seed_from_u64(seed))
}

fn drain(rx: &mut tokio::sync::mpsc::UnboundedReceiver<String>) -> Vec<String> {
    let mut lines = Vec::new();
    while let Ok(line) = rx.try_recv() {
        lines.push(line);
    }
    lines
}

#[test]
fn sealed_origin_until_first_dig() {
    let mut map = create_starting_world("The first chamber").unwrap();
    let mut log: Vec<(Coord, String)> = Vec::new();
    let mut mobs = seeded(42);
    let mut ctx = BehaviorContext::new(&mut map, &mut log);
    mobs.spawn(&mut ctx).unwrap();

    let mut dug = None;
    for _ in 0..1_000 {
        let report = mobs.random_action(&mut ctx).unwrap();
        match (report.behavior, report.outcome) {
            (Behavior::Move, outcome) => assert!(!outcome.is_success()),
            (Behavior::Create, Outcome::Created { direction, to, .. }) => {
                dug = Some((direction, to));
                break;
            }
            (Behavior::Create, other) => panic!("dig from a sealed origin failed: {other:?}"),
        }
    }
    drop(ctx);

    let (direction, to) = dug.unwrap();
    assert_eq!(map.room_count(), 2);
    let origin = map.get_at(Coord::ORIGIN).unwrap();
    assert_eq!(origin.exits.open_directions(), vec![direction]);
    assert_eq!(
        map.get_at(to).unwrap().exits.open_directions(),
        vec![direction.opposite()]
    );
    assert_eq!(mobs.mob(MobIndex(0)).unwrap().position(), to);
    assert!(map.unreciprocated_exits().is_empty());
}

#[test]
fn observers_only_hear_their_own_room() {
    let mut map = create_starting_world("Hub").unwrap();
    map.add_at(Coord::new(0, 1), "South nook".to_owned()).unwrap();
    map.open(Coord::ORIGIN, Direction::South).unwrap();
    map.open(Coord::new(0, 1), Direction::North).unwrap();

    let mut presence = Presence::new();
    let (_, mut at_origin) = presence.join(Coord::ORIGIN);
    let (_, mut far_away) = presence.join(Coord::new(40, 40));

    let names = NameGenerator::new(vec!["naz".to_owned()], vec!["guz".to_owned()]).unwrap();
    let mut mobs = MobFactory::new(names, SmallRng::seed_from_u64(9));

    // Spawn until one lands at the origin.
    let mut ctx = BehaviorContext::new(&mut map, &mut presence);
    loop {
        let index = mobs.spawn(&mut ctx).unwrap();
        if mobs.mob(index).unwrap().position() == Coord::ORIGIN {
            break;
        }
    }
    drop(ctx);

    let heard = drain(&mut at_origin);
    assert!(heard.contains(&"Nazguz enters the world\n".to_owned()));
    assert!(drain(&mut far_away).is_empty());
}

#[test]
fn show_names_at_lists_in_spawn_order() {
    let mut map = create_starting_world("Crowded").unwrap();
    let mut log: Vec<(Coord, String)> = Vec::new();
    let mut mobs = seeded(5);
    {
        let mut ctx = BehaviorContext::new(&mut map, &mut log);
        mobs.spawn(&mut ctx).unwrap();
        mobs.spawn(&mut ctx).unwrap();
    }

    let names: Vec<String> = mobs.mobs().map(|(_, m)| m.name().to_owned()).collect();
    let mut screen = String::new();
    assert_eq!(mobs.show_names_at(&mut screen, Coord::ORIGIN, ""), 2);
    assert_eq!(screen, format!("  {}\n  {}\n", names[0], names[1]));
    assert_eq!(mobs.names_at(Coord::ORIGIN).len(), 2);

    let mut empty_room = String::new();
    assert_eq!(mobs.show_names_at(&mut empty_room, Coord::new(1, 0), ""), 0);
    assert!(empty_room.is_empty());
}

#[test]
fn long_run_keeps_world_consistent() {
    let mut map = create_starting_world("Seed").unwrap();
    let mut log: Vec<(Coord, String)> = Vec::new();
    let mut mobs = seeded(1234);
    let mut ctx = BehaviorContext::new(&mut map, &mut log);
    for _ in 0..4 {
        mobs.spawn(&mut ctx).unwrap();
    }

    let mut descriptions = std::collections::BTreeMap::new();
    for _ in 0..5_000 {
        let report = mobs.random_action(&mut ctx).unwrap();
        if let Outcome::Created { to, .. } = report.outcome {
            let text = ctx.grid.get_at(to).unwrap().description.clone();
            assert!(descriptions.insert(to, text).is_none(), "cell {to} dug twice");
        }
    }
    drop(ctx);

    // Dug cells keep the description they were created with.
    for (at, text) in &descriptions {
        assert_eq!(&map.get_at(*at).unwrap().description, text);
    }
    assert_eq!(map.room_count(), descriptions.len().saturating_add(1));
    assert!(map.unreciprocated_exits().is_empty());
    assert!(map.is_connected());
    for (_, mob) in mobs.mobs() {
        assert!(map.contains(mob.position()));
    }
}

#[test]
fn create_announcements_stay_in_the_old_room() {
    let mut map = CellMap::new();
    map.add_at(Coord::ORIGIN, "Start".to_owned()).unwrap();
    let mut log: Vec<(Coord, String)> = Vec::new();
    let mut mobs = seeded(77);
    let mut ctx = BehaviorContext::new(&mut map, &mut log);
    mobs.spawn(&mut ctx).unwrap();

    let mut from_to = None;
    for _ in 0..1_000 {
        if let Outcome::Created { from, to, .. } = mobs.random_action(&mut ctx).unwrap().outcome {
            from_to = Some((from, to));
            break;
        }
    }
    drop(ctx);

    let (from, to) = from_to.unwrap();
    // Spawn line plus the two dig lines, all at the origin.
    assert_eq!(log.len(), 3);
    assert!(log.iter().all(|(at, _)| *at == from));
    assert!(log.iter().all(|(at, _)| *at != to));
    assert!(log[1].1.contains("creates a cell to the"));
    assert!(log[2].1.contains("leaves"));
}

// Host-side tests for the movement integrator.

use bedbug_core::movement::{clamp_to_hub, clamp_to_room, integrate, movement_vector};
use bedbug_core::*;
use glam::Vec3;

fn keys(forward: bool, backward: bool, left: bool, right: bool) -> DirectionKeys {
    DirectionKeys {
        forward,
        backward,
        left,
        right,
    }
}

fn planar_len(v: Vec3) -> f32 {
    (v.x * v.x + v.z * v.z).sqrt()
}

#[test]
fn opposing_or_empty_keys_give_no_displacement() {
    let cfg = WorldConfig::default();
    let cases = [
        keys(false, false, false, false),
        keys(true, true, false, false),
        keys(false, false, true, true),
        keys(true, true, true, true),
    ];
    for k in cases {
        assert_eq!(movement_vector(&k), Vec3::ZERO);
        for page in [Page::Web, Page::Music] {
            let mut pose = PlayerPose::default();
            pose.reset_to(if page == Page::Web {
                Vec3::ZERO
            } else {
                cfg.room_entry_point()
            });
            let before = pose.position;
            let d = integrate(&mut pose, &k, page, &cfg);
            assert_eq!(d, Vec3::ZERO);
            assert_eq!(pose.position, before);
        }
    }
}

#[test]
fn diagonal_movement_keeps_constant_speed() {
    let cfg = WorldConfig::default();
    let mut pose = PlayerPose::default();
    let d = integrate(&mut pose, &keys(true, false, true, false), Page::Web, &cfg);
    assert!((d.length() - cfg.player_speed).abs() < 1e-5);
}

#[test]
fn forward_on_hub_advances_z_until_boundary() {
    let mut app = App::default();
    app.key_down("w");
    let speed = app.config().player_speed;
    let limit = app.config().hub_limit();
    let mut prev_z = app.player().position.z;
    for n in 1..=150 {
        app.frame(1.0 / 60.0);
        let z = app.player().position.z;
        let expected = (n as f32 * speed).min(limit);
        assert!((z - expected).abs() < 1e-3, "frame {n}: z={z} expected {expected}");
        assert!(z >= prev_z);
        assert_eq!(app.player().position.x, 0.0);
        prev_z = z;
    }
    assert!((prev_z - limit).abs() < 1e-3);
}

#[test]
fn hub_distance_never_exceeds_limit() {
    let mut app = App::default();
    let limit = app.config().hub_limit();
    let patterns = [
        keys(true, false, false, false),
        keys(true, false, true, false),
        keys(false, true, false, true),
        keys(false, false, true, false),
    ];
    for step in 0..2000 {
        let k = patterns[(step / 37) % patterns.len()];
        app.release_all();
        for dir in Direction::ALL {
            if k.is_pressed(dir) {
                app.press(dir);
            }
        }
        app.player_mut().yaw += 0.013;
        app.frame(1.0 / 60.0);
        assert!(
            planar_len(app.player().position) <= limit + 1e-3,
            "step {step}: {:?}",
            app.player().position
        );
    }
}

#[test]
fn room_walls_clamp_position() {
    let mut app = App::default();
    app.switch_to(Page::Music);
    let half = app.config().room_half_extent();
    app.press(Direction::Forward);
    app.press(Direction::Left);
    for _ in 0..300 {
        app.frame(1.0 / 60.0);
    }
    let p = app.player().position;
    assert!((p.z - half).abs() < 1e-4);
    assert!((p.x - half).abs() < 1e-4);
    assert_eq!(p.y, app.config().page_player_start_y);
}

#[test]
fn movement_follows_yaw() {
    let cfg = WorldConfig::default();
    let mut pose = PlayerPose::default();
    pose.yaw = std::f32::consts::FRAC_PI_2;
    let d = integrate(&mut pose, &keys(true, false, false, false), Page::Web, &cfg);
    // facing +X after a quarter turn
    assert!((d.x - cfg.player_speed).abs() < 1e-5);
    assert!(d.z.abs() < 1e-5);
}

#[test]
fn no_movement_in_hell() {
    let mut app = App::default();
    app.player_mut().position = Vec3::new(1.0, 0.0, 2.0);
    app.switch_to(Page::Hell);
    app.press(Direction::Forward);
    for _ in 0..10 {
        app.frame(1.0 / 60.0);
    }
    assert_eq!(app.player().position, Vec3::new(1.0, 0.0, 2.0));
}

#[test]
fn clamp_helpers() {
    let p = clamp_to_room(Vec3::new(100.0, 3.0, -100.0), 24.0);
    assert_eq!(p, Vec3::new(24.0, 3.0, -24.0));

    let inside = Vec3::new(3.0, 0.0, 4.0);
    assert_eq!(clamp_to_hub(inside, 10.0), inside);
    let outside = clamp_to_hub(Vec3::new(30.0, 1.0, 40.0), 10.0);
    assert!((planar_len(outside) - 10.0).abs() < 1e-4);
    assert!((outside.x - 6.0).abs() < 1e-4);
    assert!((outside.z - 8.0).abs() < 1e-4);
    assert_eq!(outside.y, 1.0);
}

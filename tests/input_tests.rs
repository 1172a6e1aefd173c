// Host-side tests for key/drag tracking and ray helpers.

use bedbug_core::*;
use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!((t.unwrap() - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    let result = ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(result.is_none());
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    let result = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0);
    assert!(result.is_none());
}

#[test]
fn direction_keys_map_wasd_and_arrows() {
    assert_eq!(Direction::from_key("w"), Some(Direction::Forward));
    assert_eq!(Direction::from_key("W"), Some(Direction::Forward));
    assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Forward));
    assert_eq!(Direction::from_key("s"), Some(Direction::Backward));
    assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Backward));
    assert_eq!(Direction::from_key("a"), Some(Direction::Left));
    assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
    assert_eq!(Direction::from_key("D"), Some(Direction::Right));
    assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
    assert_eq!(Direction::from_key("q"), None);
    assert_eq!(Direction::from_key(" "), None);
}

#[test]
fn key_down_and_up_toggle_flags() {
    let mut input = InputTracker::new();
    assert!(input.key_down("w"));
    assert!(input.key_down("ArrowLeft"));
    assert!(input.keys.forward && input.keys.left);
    assert!(!input.key_down("x"));
    assert!(input.key_up("W"));
    assert!(!input.keys.forward);
    assert!(input.keys.left);
    input.release_all();
    assert!(!input.keys.any());
}

#[test]
fn ray_starting_inside_sphere_hits_exit_point() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::ZERO, 2.0);
    assert!((t.unwrap() - 2.0).abs() < 1e-5);
}

#[derive(Default)]
struct RecordingOpener {
    opened: Vec<String>,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

fn spotify_ndc(app: &App) -> Vec2 {
    let button = app
        .scenes()
        .scene(Page::Music)
        .interactables
        .iter()
        .find(|i| i.label == "Spotify")
        .unwrap()
        .position;
    let clip = app.active_camera().view_proj() * button.extend(1.0);
    Vec2::new(clip.x / clip.w, clip.y / clip.w)
}

#[test]
fn click_ending_a_look_drag_is_not_a_pick() {
    let mut app = App::default();
    app.switch_to(Page::Music);
    assert!(app.pointer_down(Vec2::new(400.0, 300.0)));
    app.pointer_move(Vec2::new(300.0, 300.0));
    assert!(app.pointer_up());
    assert!(app.player().yaw.abs() > 0.0);

    let ndc = spotify_ndc(&app);
    let mut opener = RecordingOpener::default();
    assert_eq!(app.click(ndc, &mut opener), None);
    assert!(opener.opened.is_empty());

    // only the click that ends the drag is swallowed
    assert!(app.click(ndc, &mut opener).is_some());
    assert_eq!(opener.opened.len(), 1);
}

#[test]
fn tap_without_movement_still_picks() {
    let mut app = App::default();
    app.switch_to(Page::Music);
    assert!(app.pointer_down(Vec2::new(400.0, 300.0)));
    // a little jitter stays below the drag threshold
    app.pointer_move(Vec2::new(401.0, 301.0));
    assert!(!app.pointer_up());

    let ndc = spotify_ndc(&app);
    let mut opener = RecordingOpener::default();
    let action = app.click(ndc, &mut opener);
    assert_eq!(
        action,
        Some(Action::External("https://spotify.com/artist/bedbugguru".to_string()))
    );
    assert_eq!(opener.opened, vec!["https://spotify.com/artist/bedbugguru".to_string()]);
}

#[test]
fn new_press_clears_a_pending_drag_suppression() {
    let mut input = InputTracker::new();
    input.pointer_down(Vec2::ZERO, Page::Contact);
    input.pointer_move(Vec2::new(50.0, 0.0));
    assert!(input.pointer_up());
    input.pointer_down(Vec2::ZERO, Page::Contact);
    assert!(!input.take_suppressed_click());
    assert!(!input.pointer_up());
    assert!(!input.take_suppressed_click());
}

#[test]
fn drag_is_not_armed_on_the_hub() {
    let mut input = InputTracker::new();
    assert!(!input.pointer_down(Vec2::new(5.0, 5.0), Page::Web));
    assert_eq!(input.pointer_move(Vec2::new(50.0, 5.0)), None);
}

#[test]
fn drag_reports_deltas_between_samples() {
    let mut input = InputTracker::new();
    for page in [Page::Music, Page::AboutUs, Page::Contact, Page::Hell] {
        assert!(input.pointer_down(Vec2::new(10.0, 20.0), page));
        assert_eq!(input.pointer_move(Vec2::new(15.0, 18.0)), Some(Vec2::new(5.0, -2.0)));
        assert_eq!(input.pointer_move(Vec2::new(15.0, 30.0)), Some(Vec2::new(0.0, 12.0)));
        input.pointer_up();
        assert_eq!(input.pointer_move(Vec2::new(0.0, 0.0)), None);
    }
}

#[test]
fn drag_turns_player_in_rooms() {
    let mut app = App::default();
    app.switch_to(Page::Music);
    app.pointer_down(Vec2::new(0.0, 0.0));
    app.pointer_move(Vec2::new(100.0, -50.0));
    let sens = app.config().mouse_sensitivity;
    assert!((app.player().yaw - (-100.0 * sens)).abs() < 1e-5);
    assert!((app.player().pitch - 50.0 * sens).abs() < 1e-5);
    app.pointer_up();
    app.pointer_move(Vec2::new(500.0, 500.0));
    assert!((app.player().yaw - (-100.0 * sens)).abs() < 1e-5);
}

#[test]
fn drag_on_hub_leaves_pose_alone() {
    let mut app = App::default();
    assert!(!app.pointer_down(Vec2::new(0.0, 0.0)));
    app.pointer_move(Vec2::new(300.0, 300.0));
    assert_eq!(app.player().yaw, 0.0);
    assert_eq!(app.player().pitch, 0.0);
}

#[test]
fn pitch_stays_clamped_after_any_drag_sequence() {
    let mut pose = PlayerPose::default();
    let deltas = [
        Vec2::new(0.0, -5000.0),
        Vec2::new(3.0, 120.0),
        Vec2::new(-40.0, 9000.0),
        Vec2::new(0.0, -1.0),
        Vec2::new(7.0, -20000.0),
    ];
    for _ in 0..50 {
        for d in deltas {
            pose.apply_look(d, MOUSE_SENSITIVITY);
            assert!(pose.pitch >= -FRAC_PI_2 && pose.pitch <= FRAC_PI_2);
        }
    }
    pose.apply_look(Vec2::new(0.0, -1.0e6), MOUSE_SENSITIVITY);
    assert_eq!(pose.pitch, FRAC_PI_2);
    pose.apply_look(Vec2::new(0.0, 1.0e6), MOUSE_SENSITIVITY);
    assert_eq!(pose.pitch, -FRAC_PI_2);
}

#[test]
fn ndc_from_client_maps_rect_corners() {
    let tl = ndc_from_client(Vec2::new(10.0, 20.0), 10.0, 20.0, 200.0, 100.0).unwrap();
    assert_eq!(tl, Vec2::new(-1.0, 1.0));
    let br = ndc_from_client(Vec2::new(210.0, 120.0), 10.0, 20.0, 200.0, 100.0).unwrap();
    assert_eq!(br, Vec2::new(1.0, -1.0));
    let mid = ndc_from_client(Vec2::new(110.0, 70.0), 10.0, 20.0, 200.0, 100.0).unwrap();
    assert_eq!(mid, Vec2::ZERO);
    assert!(ndc_from_client(Vec2::ZERO, 0.0, 0.0, 0.0, 100.0).is_none());
}

#[test]
fn center_ray_points_at_camera_target() {
    let app = App::default();
    let cam = app.active_camera();
    let ray = cam.ray_through(Vec2::ZERO);
    let expected = (cam.target - cam.eye).normalize();
    assert!((ray.dir - expected).length() < 1e-4);
    assert_eq!(ray.origin, cam.eye);
}

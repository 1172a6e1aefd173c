// Host-side tests for click resolution against the active page.

use bedbug_core::*;
use glam::{Vec2, Vec3};

#[derive(Default)]
struct RecordingOpener {
    opened: Vec<String>,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

/// NDC where `world` appears through the app's active camera.
fn ndc_of(app: &App, world: Vec3) -> Vec2 {
    let clip = app.active_camera().view_proj() * world.extend(1.0);
    Vec2::new(clip.x / clip.w, clip.y / clip.w)
}

fn find<'a>(app: &'a App, page: Page, label: &str) -> &'a Interactable {
    app.scenes()
        .scene(page)
        .interactables
        .iter()
        .find(|i| i.label == label)
        .unwrap_or_else(|| panic!("no '{label}' on {page}"))
}

#[test]
fn clicking_music_tab_on_hub_switches_to_music() {
    let mut app = App::default();
    let tab = find(&app, Page::Web, "Music").clone();
    assert_eq!(tab.action, Action::PageLink(Page::Music));
    let ndc = ndc_of(&app, tab.position);
    let mut opener = RecordingOpener::default();
    let action = app.click(ndc, &mut opener);
    assert_eq!(action, Some(Action::PageLink(Page::Music)));
    assert_eq!(app.page(), Page::Music);
    assert!(opener.opened.is_empty());
}

#[test]
fn every_hub_page_tab_reaches_its_page() {
    for (label, page) in [
        ("Music", Page::Music),
        ("About Us", Page::AboutUs),
        ("Contact", Page::Contact),
    ] {
        let mut app = App::default();
        let pos = find(&app, Page::Web, label).position;
        let ndc = ndc_of(&app, pos);
        app.click(ndc, &mut RecordingOpener::default());
        assert_eq!(app.page(), page, "tab {label}");
    }
}

#[test]
fn clicking_external_tab_opens_exactly_once_without_state_change() {
    let mut app = App::default();
    app.press(Direction::Forward);
    app.frame(1.0 / 60.0);
    app.release_all();
    let player_before = *app.player();
    let spider_before = *app.spider();

    let tab = find(&app, Page::Web, "Merch").clone();
    let ndc = ndc_of(&app, tab.position);
    let mut opener = RecordingOpener::default();
    let action = app.click(ndc, &mut opener);

    assert_eq!(
        action,
        Some(Action::External("https://bedbugguru.bandcamp.com/merch/".to_string()))
    );
    assert_eq!(opener.opened, vec!["https://bedbugguru.bandcamp.com/merch/".to_string()]);
    assert_eq!(app.page(), Page::Web);
    assert_eq!(*app.player(), player_before);
    assert_eq!(*app.spider(), spider_before);
}

#[test]
fn music_room_buttons_open_streaming_links() {
    let mut app = App::default();
    app.switch_to(Page::Music);
    let button = find(&app, Page::Music, "Spotify").clone();
    let ndc = ndc_of(&app, button.position);
    assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0, "button off screen: {ndc:?}");
    let mut opener = RecordingOpener::default();
    app.click(ndc, &mut opener);
    assert_eq!(opener.opened, vec!["https://spotify.com/artist/bedbugguru".to_string()]);
    assert_eq!(app.page(), Page::Music);
}

#[test]
fn rooms_without_menu_never_dispatch() {
    for page in [Page::AboutUs, Page::Contact, Page::Hell] {
        let mut app = App::default();
        app.switch_to(page);
        assert!(app.scenes().active_scene().interactables.is_empty());
        let mut opener = RecordingOpener::default();
        for x in [-0.9, -0.5, 0.0, 0.5, 0.9] {
            for y in [-0.9, 0.0, 0.9] {
                assert_eq!(app.click(Vec2::new(x, y), &mut opener), None);
            }
        }
        assert!(opener.opened.is_empty());
        assert_eq!(app.page(), page);
    }
}

#[test]
fn clicking_empty_sky_on_hub_is_a_no_op() {
    let mut app = App::default();
    let mut opener = RecordingOpener::default();
    assert_eq!(app.click(Vec2::new(0.0, 0.95), &mut opener), None);
    assert!(opener.opened.is_empty());
    assert_eq!(app.page(), Page::Web);
}

#[test]
fn hub_tabs_are_not_clickable_from_a_room() {
    let mut app = App::default();
    app.switch_to(Page::Contact);
    let tab_pos = find(&app, Page::Web, "Music").position;
    let ndc = ndc_of(&app, tab_pos);
    let mut opener = RecordingOpener::default();
    assert_eq!(app.click(ndc, &mut opener), None);
    assert_eq!(app.page(), Page::Contact);
}

#[test]
fn hub_tabs_face_the_hub_camera() {
    let app = App::default();
    let eye = app.active_camera().eye;
    for label in ["Merch", "Legacy Site"] {
        let ndc = ndc_of(&app, find(&app, Page::Web, label).position);
        assert!(ndc.x > 0.0, "{label} should be on the right: {ndc:?}");
    }
    for label in ["Concerts", "About Us"] {
        let ndc = ndc_of(&app, find(&app, Page::Web, label).position);
        assert!(ndc.x < 0.0, "{label} should be on the left: {ndc:?}");
    }
    let farthest = app
        .scenes()
        .scene(Page::Web)
        .interactables
        .iter()
        .max_by(|a, b| {
            let da = a.position.distance(eye);
            let db = b.position.distance(eye);
            da.total_cmp(&db)
        })
        .unwrap();
    assert_eq!(farthest.label, "Contact");
}

#[test]
fn pick_takes_the_nearest_hit() {
    let far = Interactable::page_link("far", Vec3::new(0.0, 0.0, 20.0), 2.0, [1.0; 3], Page::Contact);
    let near = Interactable::page_link("near", Vec3::new(0.0, 0.0, 10.0), 2.0, [1.0; 3], Page::Music);
    let items = vec![far, near];
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::Z,
    };
    let (hit, t) = pick(&ray, &items).unwrap();
    assert_eq!(hit.label, "near");
    assert!((t - 8.0).abs() < 1e-5);
    assert!(pick(&ray, &[]).is_none());
}

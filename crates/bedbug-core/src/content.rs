//! Static site content: navigation tabs, streaming links and the
//! decoration each scene is dressed with.

use crate::config::WorldConfig;
use crate::constants::{
    BASEMENT_SIZE, BASEMENT_WALL_HEIGHT, MENU_PICK_RADIUS, PAGE_WALL_HEIGHT, TAB_PICK_RADIUS,
};
use crate::interaction::Interactable;
use crate::page::Page;
use crate::scene::{Billboard, Scene};
use glam::Vec3;
use smallvec::SmallVec;
use std::f32::consts::TAU;

pub enum TabTarget {
    Url(&'static str),
    Page(Page),
}

pub struct TabData {
    pub name: &'static str,
    /// Position on the web as fractions of the web radius, as seen from
    /// the hub camera: (right, toward the camera).
    pub offset: [f32; 2],
    pub target: TabTarget,
}

pub const BAND_TABS: &[TabData] = &[
    TabData {
        name: "Merch",
        offset: [0.5, 0.3],
        target: TabTarget::Url("https://bedbugguru.bandcamp.com/merch/"),
    },
    TabData {
        name: "Concerts",
        offset: [-0.4, 0.6],
        target: TabTarget::Url("https://www.songkick.com/artists/10289853-bed-bug-guru/calendar"),
    },
    TabData {
        name: "Music",
        offset: [0.2, -0.5],
        target: TabTarget::Page(Page::Music),
    },
    TabData {
        name: "About Us",
        offset: [-0.6, -0.2],
        target: TabTarget::Page(Page::AboutUs),
    },
    TabData {
        name: "Legacy Site",
        offset: [0.8, -0.1],
        target: TabTarget::Url("https://www.bedbugguru.org"),
    },
    TabData {
        name: "Contact",
        offset: [0.0, -0.8],
        target: TabTarget::Page(Page::Contact),
    },
];

pub const TAB_HEIGHT: f32 = 1.0;

pub struct MusicLink {
    pub name: &'static str,
    pub url: &'static str,
    /// Position along the content wall, left to right as seen on entry.
    pub offset: f32,
    pub color: [f32; 3],
}

pub const MUSIC_LINKS: &[MusicLink] = &[
    MusicLink {
        name: "Bandcamp",
        url: "https://bedbugguru.bandcamp.com/album/double-scoop",
        offset: -12.0,
        color: [0.678, 0.847, 0.902],
    },
    MusicLink {
        name: "Spotify",
        url: "https://spotify.com/artist/bedbugguru",
        offset: -4.0,
        color: [0.114, 0.725, 0.329],
    },
    MusicLink {
        name: "YouTube",
        url: "https://youtube.com/@bedbugguru",
        offset: 4.0,
        color: [1.0, 0.0, 0.0],
    },
    MusicLink {
        name: "SoundCloud",
        url: "https://soundcloud.com/bedbugguru",
        offset: 12.0,
        color: [1.0, 0.467, 0.0],
    },
];

pub const ALBUM_TITLE: [&str; 2] = ["DOUBLE SCOOP OUT NOW", "BED BUG GURU'S BRAND NEW DEBUT ALBUM"];

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const GOLD: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
const SILK: [f32; 4] = [0.85, 0.85, 0.9, 0.55];

pub fn background_for(page: Page) -> [f32; 3] {
    match page {
        Page::Web => [0.102, 0.125, 0.173],
        Page::Music => [0.4, 0.0, 0.4],
        Page::AboutUs => [0.0, 0.4, 0.0],
        Page::Contact => [0.6, 0.6, 0.0],
        Page::Hell => [0.2, 0.0, 0.0],
    }
}

pub fn wall_text(page: Page) -> &'static str {
    match page {
        Page::Web => "",
        Page::Music => "OUR MUSIC\nAlbum: \"Web of Sound\"\nSingle: \"Silk & Fury\"",
        Page::AboutUs => "ABOUT THE BAND\nFormed in 2023\nGenre: Insect Rock",
        Page::Contact => {
            "CONTACT US\nEmail: contact@bedbugguru.com\nBooking: booking@bedbugguru.com"
        }
        Page::Hell => "GAME OVER\nYOU HAVE BEEN BITTEN",
    }
}

/// Clickable navigation tabs laid out on the web.
pub fn hub_tabs(cfg: &WorldConfig) -> SmallVec<[Interactable; 6]> {
    BAND_TABS
        .iter()
        .map(|tab| {
            // the hub camera looks down +Z, so screen right is -X and near is -Z
            let pos = Vec3::new(
                -cfg.web_radius * tab.offset[0],
                TAB_HEIGHT,
                -cfg.web_radius * tab.offset[1],
            );
            match tab.target {
                TabTarget::Url(url) => {
                    Interactable::external(tab.name, pos, TAB_PICK_RADIUS, WHITE, url)
                }
                TabTarget::Page(page) => {
                    Interactable::page_link(tab.name, pos, TAB_PICK_RADIUS, WHITE, page)
                }
            }
        })
        .collect()
}

/// Streaming buttons hung on the music room's content wall.
pub fn music_menu(cfg: &WorldConfig) -> SmallVec<[Interactable; 6]> {
    let y = cfg.page_player_start_y + 2.0 + (PAGE_WALL_HEIGHT / 2.0 - 2.0);
    let z = cfg.room_size / 2.0 - 1.0;
    MUSIC_LINKS
        .iter()
        .map(|link| {
            // +X is to the player's left when facing +Z
            let pos = Vec3::new(-link.offset, y, z);
            Interactable::external(link.name, pos, MENU_PICK_RADIUS, link.color, link.url)
        })
        .collect()
}

fn web_props(cfg: &WorldConfig) -> Vec<Billboard> {
    let mut props = Vec::new();
    let rings = 5;
    for ring in 1..=rings {
        let r = cfg.web_radius * ring as f32 / rings as f32;
        let dots = ((TAU * r) / 2.5).ceil() as usize;
        for i in 0..dots {
            let a = TAU * i as f32 / dots as f32;
            props.push(Billboard::new(Vec3::new(r * a.cos(), 0.0, r * a.sin()), 0.35, SILK));
        }
    }
    let spokes = 12;
    for s in 0..spokes {
        let a = TAU * s as f32 / spokes as f32;
        let steps = (cfg.web_radius / 2.5) as usize;
        for k in 1..=steps {
            let r = k as f32 * 2.5;
            props.push(Billboard::new(Vec3::new(r * a.cos(), 0.0, r * a.sin()), 0.3, SILK));
        }
    }
    for (i, _line) in ALBUM_TITLE.iter().enumerate() {
        props.push(Billboard::new(Vec3::new(0.0, 50.0 - 10.0 * i as f32, 0.0), 3.0 - i as f32, GOLD));
    }
    props
}

/// Posts along the floor and ceiling edges of a square room.
fn outline_props(size: f32, height: f32, spacing: f32, color: [f32; 4]) -> Vec<Billboard> {
    let half = size / 2.0;
    let per_side = (size / spacing).max(1.0) as usize;
    let mut props = Vec::with_capacity(per_side * 8);
    for y in [0.0, height] {
        for i in 0..per_side {
            let t = -half + size * i as f32 / per_side as f32;
            props.push(Billboard::new(Vec3::new(t, y, -half), 0.4, color));
            props.push(Billboard::new(Vec3::new(half, y, t), 0.4, color));
            props.push(Billboard::new(Vec3::new(-t, y, half), 0.4, color));
            props.push(Billboard::new(Vec3::new(-half, y, -t), 0.4, color));
        }
    }
    props
}

fn lava_props() -> Vec<Billboard> {
    let half = BASEMENT_SIZE / 2.0;
    let spacing = 10.0;
    let n = (BASEMENT_SIZE / spacing) as usize;
    let mut props = Vec::with_capacity(n * n);
    for ix in 0..n {
        for iz in 0..n {
            let x = -half + spacing * (ix as f32 + 0.5);
            let z = -half + spacing * (iz as f32 + 0.5);
            let glow = 0.6 + 0.4 * ((ix + iz) % 2) as f32;
            props.push(Billboard::new(Vec3::new(x, 0.0, z), 1.2, [1.0, 0.3 * glow, 0.0, 0.9]));
        }
    }
    props
}

/// Build the scene shown for `page`.
pub fn build_scene(page: Page, cfg: &WorldConfig) -> Scene {
    let (interactables, props) = match page {
        Page::Web => (hub_tabs(cfg), web_props(cfg)),
        Page::Music => (
            music_menu(cfg),
            outline_props(cfg.room_size, PAGE_WALL_HEIGHT, 5.0, [1.0, 1.0, 1.0, 0.6]),
        ),
        Page::AboutUs | Page::Contact => (
            SmallVec::new(),
            outline_props(cfg.room_size, PAGE_WALL_HEIGHT, 5.0, [1.0, 1.0, 1.0, 0.6]),
        ),
        Page::Hell => {
            let mut props = lava_props();
            let walls = [0.5, 0.1, 0.05, 0.8];
            props.extend(outline_props(BASEMENT_SIZE, BASEMENT_WALL_HEIGHT, 10.0, walls));
            (SmallVec::new(), props)
        }
    };
    Scene {
        page,
        background: background_for(page),
        wall_text: wall_text(page),
        interactables,
        props,
    }
}

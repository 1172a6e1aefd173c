//! Application state and page switching.

use crate::camera::Camera;
use crate::config::WorldConfig;
use crate::constants::*;
use crate::content;
use crate::error::CoreError;
use crate::input::{Direction, InputTracker};
use crate::interaction::{self, Action, LinkOpener};
use crate::movement;
use crate::page::{CameraSlot, Page};
use crate::player::PlayerPose;
use crate::policy::{GamePolicy, NoPolicy, PolicyContext, PolicyEvent};
use crate::scene::{Billboard, SceneRegistry};
use crate::spider::DescentActor;
use glam::{Vec2, Vec3};

/// Record of a page change, mostly for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Page,
    pub to: Page,
}

/// DOM panels outside the canvas whose visibility follows the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiVisibility {
    /// Restart button and mouse-look hint.
    pub page_controls: bool,
    pub game_over: bool,
}

pub fn ui_visibility(page: Page) -> UiVisibility {
    UiVisibility {
        page_controls: page.is_first_person(),
        game_over: page == Page::Hell,
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct RenderView {
    pub page: Page,
    pub background: [f32; 3],
    pub camera: Camera,
    pub billboards: Vec<Billboard>,
}

pub struct App {
    config: WorldConfig,
    scenes: SceneRegistry,
    player: PlayerPose,
    input: InputTracker,
    spider: DescentActor,
    policy: Box<dyn GamePolicy>,
    aspect: f32,
    hub_time_sec: f32,
}

impl App {
    pub fn new(config: WorldConfig) -> Self {
        let scenes = SceneRegistry::build(|page| content::build_scene(page, &config));
        let spider = DescentActor::new(config.spider_initial_y);
        let mut app = Self {
            config,
            scenes,
            player: PlayerPose::default(),
            input: InputTracker::new(),
            spider,
            policy: Box::new(NoPolicy),
            aspect: 16.0 / 9.0,
            hub_time_sec: 0.0,
        };
        app.switch_to(Page::Web);
        app
    }

    pub fn with_policy(mut self, policy: Box<dyn GamePolicy>) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn page(&self) -> Page {
        self.scenes.active()
    }

    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[inline]
    pub fn scenes(&self) -> &SceneRegistry {
        &self.scenes
    }

    #[inline]
    pub fn player(&self) -> &PlayerPose {
        &self.player
    }

    #[inline]
    pub fn player_mut(&mut self) -> &mut PlayerPose {
        &mut self.player
    }

    #[inline]
    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    #[inline]
    pub fn spider(&self) -> &DescentActor {
        &self.spider
    }

    #[inline]
    pub fn spider_mut(&mut self) -> &mut DescentActor {
        &mut self.spider
    }

    #[inline]
    pub fn camera_slot(&self) -> CameraSlot {
        self.scenes.active_camera_slot()
    }

    #[inline]
    pub fn ui(&self) -> UiVisibility {
        ui_visibility(self.page())
    }

    /// The player model is hidden while looking through its own eyes in a room.
    #[inline]
    pub fn player_body_visible(&self) -> bool {
        !self.page().is_first_person()
    }

    pub fn switch_to(&mut self, target: Page) -> Transition {
        let from = self.page();
        self.scenes.show_only(target);
        match target {
            Page::Web => {
                self.player.reset_to(Vec3::ZERO);
                self.spider.reset();
                self.hub_time_sec = 0.0;
                self.policy.reset();
            }
            Page::Hell => {}
            Page::Music | Page::AboutUs | Page::Contact => {
                self.player.reset_to(self.config.room_entry_point());
            }
        }
        // a drag started on the previous page must not turn the new camera
        self.input.pointer_up();
        log::info!("[page] {} -> {} ({:?} camera)", from, target, target.camera_slot());
        Transition { from, to: target }
    }

    /// Switch by page name; unknown names leave the state untouched.
    pub fn switch_to_named(&mut self, name: &str) -> Result<Transition, CoreError> {
        let target: Page = name.parse()?;
        Ok(self.switch_to(target))
    }

    pub fn restart(&mut self) -> Transition {
        self.switch_to(Page::Web)
    }

    /// One animation frame: movement, then the spider and game rules on the web.
    pub fn frame(&mut self, dt_sec: f32) {
        let page = self.page();
        movement::integrate(&mut self.player, &self.input.keys, page, &self.config);
        if page != Page::Web {
            return;
        }
        self.hub_time_sec += dt_sec.max(0.0);
        self.spider.update(&self.config);
        let ctx = PolicyContext {
            player: &self.player,
            spider: &self.spider,
            hub_time_sec: self.hub_time_sec,
        };
        if let Some(event) = self.policy.evaluate(&ctx) {
            self.apply_policy_event(event);
        }
    }

    pub fn apply_policy_event(&mut self, event: PolicyEvent) {
        if self.page() != Page::Web {
            return;
        }
        match event {
            PolicyEvent::BeginDescent => {
                log::info!("[spider] descending");
                self.spider.begin_descent();
            }
            PolicyEvent::Accelerate => {
                log::info!("[spider] accelerating");
                self.spider.accelerate();
            }
            PolicyEvent::Bite => {
                log::info!("[spider] bite at y={:.2}", self.spider.y);
                self.switch_to(Page::Hell);
            }
        }
    }

    // ---------------- Input ----------------

    pub fn key_down(&mut self, key: &str) -> bool {
        self.input.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.key_up(key)
    }

    pub fn press(&mut self, dir: Direction) {
        self.input.press(dir);
    }

    pub fn release(&mut self, dir: Direction) {
        self.input.release(dir);
    }

    pub fn release_all(&mut self) {
        self.input.release_all();
    }

    pub fn pointer_down(&mut self, pos: Vec2) -> bool {
        let page = self.page();
        self.input.pointer_down(pos, page)
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        if let Some(delta) = self.input.pointer_move(pos) {
            self.player.apply_look(delta, self.config.mouse_sensitivity);
        }
    }

    /// Returns true when the gesture was a look-drag rather than a click.
    pub fn pointer_up(&mut self) -> bool {
        self.input.pointer_up()
    }

    /// Resolve a click at `ndc` against the active page's interactables.
    ///
    /// Returns the dispatched action, if any.
    pub fn click(&mut self, ndc: Vec2, opener: &mut dyn LinkOpener) -> Option<Action> {
        if self.input.take_suppressed_click() {
            log::debug!("[click] ignored after look-drag");
            return None;
        }
        let ray = self.active_camera().ray_through(ndc);
        let action = {
            let items = &self.scenes.active_scene().interactables;
            let (item, t) = interaction::pick(&ray, items)?;
            log::info!("[click] '{}' at t={:.2}", item.label, t);
            item.action.clone()
        };
        match &action {
            Action::External(url) => opener.open(url),
            Action::PageLink(page) => {
                self.switch_to(*page);
            }
        }
        Some(action)
    }

    // ---------------- Cameras ----------------

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn camera(&self, slot: CameraSlot) -> Camera {
        match slot {
            CameraSlot::Fixed => Camera {
                eye: hub_camera_eye(),
                target: Vec3::ZERO,
                up: Vec3::Y,
                aspect: self.aspect,
                fovy_radians: HUB_FOV_DEG.to_radians(),
                znear: HUB_ZNEAR,
                zfar: HUB_ZFAR,
            },
            CameraSlot::FirstPerson => self.player.attached_camera(
                self.config.page_player_start_y + CAMERA_EYE_OFFSET,
                self.aspect,
                PAGE_FOV_DEG.to_radians(),
                PAGE_ZNEAR,
                PAGE_ZFAR,
            ),
            CameraSlot::Basement => self.player.attached_camera(
                self.config.basement_player_start_y + CAMERA_EYE_OFFSET,
                self.aspect,
                PAGE_FOV_DEG.to_radians(),
                PAGE_ZNEAR,
                BASEMENT_ZFAR,
            ),
        }
    }

    #[inline]
    pub fn active_camera(&self) -> Camera {
        self.camera(self.camera_slot())
    }

    pub fn render_view(&self) -> RenderView {
        let scene = self.scenes.active_scene();
        let mut billboards = scene.props.clone();
        billboards.extend(scene.interactables.iter().map(|it| {
            let [r, g, b] = it.color;
            Billboard::new(it.position, it.pick_radius, [r, g, b, 1.0])
        }));
        if self.page() == Page::Web {
            let (top, bottom) = self.spider.thread_endpoints();
            let segments = ((top.y - bottom.y).max(0.0) / 1.0).ceil() as usize;
            for i in 0..segments {
                let p = top.lerp(bottom, i as f32 / segments as f32);
                billboards.push(Billboard::new(p, 0.12, [0.533, 0.533, 0.533, 1.0]));
            }
            billboards.push(Billboard::new(
                self.spider.position(),
                3.0 * SPIDER_SCALE,
                [0.1, 0.05, 0.05, 1.0],
            ));
        }
        if self.player_body_visible() {
            billboards.push(Billboard::new(
                self.player.position + Vec3::Y * (PLAYER_BODY_HEIGHT / 2.0),
                1.0,
                [0.9, 0.75, 0.3, 1.0],
            ));
        }
        RenderView {
            page: self.page(),
            background: scene.background,
            camera: self.active_camera(),
            billboards,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

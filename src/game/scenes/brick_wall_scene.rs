//! Brick-wall cannon range.
//!
//! Three brick walls stand on a floor slab. Left click fires a cannonball
//! from the camera along the view direction; balls knock bricks loose and
//! bricks that lose their support fall with them.

use glam::Vec3;

use crate::app::{Scene, SceneControl};
use crate::audio::{AudioSystem, SoundHandle};
use crate::camera::{CameraConfig, FlyCamera};
use crate::game::config::BrickWallConfig;
use crate::game::events::{EventQueue, SceneEvent};
use crate::game::input::{apply_overrides, brick_wall_bindings, scene_event};
use crate::game::shot_counter::ShotCounter;
use crate::game::systems::{BrickSystem, ProjectileSystem};
use crate::game::types::{BRICK_RED, FLOOR_GRAY, IRON, Mesh, WHITE, generate_box, generate_sphere};
use crate::game::ui::{draw_crosshair, draw_top_left};
use crate::input::{ActionEdge, KeyBindings};
use crate::physics::ProjectileState;

const BALL_SEGMENTS: u32 = 16;
const HUD_SCALE: f32 = 2.0;
const CROSSHAIR_SCALE: f32 = 3.0;

pub struct BrickWallScene {
    config: BrickWallConfig,
    bricks: BrickSystem,
    balls: ProjectileSystem,
    shots: ShotCounter,
    events: EventQueue,
    audio: AudioSystem,
    music: Option<SoundHandle>,
    floor_mesh: Mesh,
}

impl BrickWallScene {
    /// Build the scene, opening the audio device when enabled.
    pub fn new(config: BrickWallConfig) -> Self {
        let audio = if config.audio.enabled {
            AudioSystem::new(config.audio.spatial)
        } else {
            AudioSystem::silent()
        };
        Self::with_audio(config, audio)
    }

    pub fn with_audio(config: BrickWallConfig, mut audio: AudioSystem) -> Self {
        let bricks = BrickSystem::new(&config.layout, &config.wall_z, config.floor);
        let balls = ProjectileSystem::new(config.ballistics, config.cannonball);
        let floor_mesh = generate_box(config.floor.center, config.floor.half_extents, FLOOR_GRAY);
        let music = audio.play_positional_loop(&config.audio.music, config.audio.music_position, config.audio.music_volume);

        log::info!(
            "Brick wall scene: {} walls, {} bricks",
            config.wall_z.len(),
            bricks.bricks().len()
        );

        Self {
            config,
            bricks,
            balls,
            shots: ShotCounter::new(),
            events: EventQueue::new(),
            audio,
            music,
            floor_mesh,
        }
    }

    /// Fire one cannonball from `origin` along `direction`.
    pub fn shoot(&mut self, origin: Vec3, direction: Vec3) {
        if self.balls.fire(origin, direction) {
            log::debug!("Cannonball limit reached, dropped the oldest");
        }
        let n = self.shots.record_shot();
        self.audio.play_one_shot(&self.config.audio.gun_sound, self.config.audio.gun_volume);
        log::info!("Shot {} fired from {:?}", n, origin);
    }

    /// Queue a scene event directly, bypassing input.
    pub fn push_event(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    pub fn shots(&self) -> &ShotCounter {
        &self.shots
    }

    pub fn bricks(&self) -> &BrickSystem {
        &self.bricks
    }

    pub fn balls(&self) -> &ProjectileSystem {
        &self.balls
    }

    pub fn music(&self) -> Option<SoundHandle> {
        self.music
    }

    /// Integrate balls, resolve ball/brick contacts, then drop bricks.
    fn step_physics(&mut self, dt: f32) {
        let radius = self.balls.cannonball().radius;
        for update in self.balls.update(dt, self.bricks.floor()) {
            if update.state != ProjectileState::Flying {
                continue;
            }
            let Some(hit) = self.bricks.sweep(update.prev_pos, update.new_pos, radius) else {
                continue;
            };
            let Some(ball) = self.balls.get_mut(update.index) else {
                continue;
            };

            let brick_mass = self.bricks.bricks()[hit.index].mass;
            let transfer = (ball.mass / brick_mass).min(1.0);
            let dropped = self.bricks.knock_loose(hit.index, ball.velocity * transfer);
            ball.position = hit.sweep.position;
            ball.velocity *= 1.0 - transfer;
            log::debug!("Cannonball hit at {:?}, {} bricks falling", hit.sweep.position, dropped);
        }

        self.balls.remove_expired();
        self.bricks.update(dt);
    }
}

impl Scene for BrickWallScene {
    fn title(&self) -> String {
        "Brick Wall".to_string()
    }

    fn camera(&self) -> CameraConfig {
        self.config.camera
    }

    fn bindings(&self) -> KeyBindings {
        let mut bindings = brick_wall_bindings();
        apply_overrides(&mut bindings, &self.config.bindings);
        bindings
    }

    fn handle_action(&mut self, edge: ActionEdge, _camera: &FlyCamera) -> SceneControl {
        match scene_event(edge) {
            Some(SceneEvent::Exit) => SceneControl::Exit,
            Some(event) => {
                self.events.push(event);
                SceneControl::Continue
            }
            None => SceneControl::Continue,
        }
    }

    fn update(&mut self, dt: f32, camera: &FlyCamera) {
        let events: Vec<_> = self.events.drain().collect();
        for event in events {
            if event == SceneEvent::Shoot {
                self.shoot(camera.position, camera.direction());
            }
        }

        self.step_physics(dt);
        self.audio.update();
    }

    fn listener_update(&mut self, camera: &FlyCamera) {
        self.audio.set_listener_position(camera.position);
    }

    fn build_world_mesh(&self) -> Mesh {
        let mut mesh = self.floor_mesh.clone();
        for brick in self.bricks.bricks() {
            mesh.merge(&generate_box(brick.center, brick.half_extents, BRICK_RED));
        }
        for ball in self.balls.iter() {
            mesh.merge(&generate_sphere(ball.position, ball.radius, IRON, BALL_SEGMENTS));
        }
        mesh
    }

    fn build_ui_mesh(&self, width: f32, height: f32) -> Mesh {
        let mut mesh = Mesh::new();
        draw_top_left(&mut mesh, &self.shots.hud_text(), HUD_SCALE, self.config.hud_color, width, height);
        draw_crosshair(&mut mesh, CROSSHAIR_SCALE, WHITE, width, height);
        mesh
    }

    fn clear_color(&self) -> [f32; 4] {
        [0.5, 0.6, 0.8, 1.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputAction;

    fn scene() -> BrickWallScene {
        BrickWallScene::with_audio(BrickWallConfig::default(), AudioSystem::silent())
    }

    #[test]
    fn test_silent_scene_has_no_music() {
        let scene = scene();
        assert!(scene.music().is_none());
        assert_eq!(scene.bricks().bricks().len(), 270);
    }

    #[test]
    fn test_shoot_on_release_only() {
        let mut scene = scene();
        let cam = FlyCamera::from_config(&scene.camera());

        scene.handle_action(ActionEdge::Pressed(InputAction::Shoot), &cam);
        scene.update(0.016, &cam);
        assert_eq!(scene.shots().count(), 0);

        scene.handle_action(ActionEdge::Released(InputAction::Shoot), &cam);
        scene.update(0.016, &cam);
        assert_eq!(scene.shots().count(), 1);
        assert_eq!(scene.balls().active_count(), 1);
    }

    #[test]
    fn test_hud_text_tracks_shots() {
        let mut scene = scene();
        scene.shoot(Vec3::new(0.0, 4.0, 12.0), Vec3::NEG_Z);
        scene.shoot(Vec3::new(0.0, 4.0, 12.0), Vec3::NEG_Z);
        assert_eq!(scene.shots().hud_text(), "SHOTS FIRED: 2\n(left click to fire)");
    }

    #[test]
    fn test_world_mesh_contains_balls() {
        let mut scene = scene();
        let empty = scene.build_world_mesh().vertices.len();
        scene.shoot(Vec3::new(0.0, 20.0, 12.0), Vec3::Y);
        assert!(scene.build_world_mesh().vertices.len() > empty);
    }
}

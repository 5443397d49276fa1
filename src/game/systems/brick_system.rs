//! Brick wall system.
//!
//! Lays out the walls, knocks bricks loose when a cannonball hits them, and
//! drops any brick left without a brick underneath it. This is not a rigid
//! body solver: standing bricks never move, loose bricks only fall straight
//! under gravity (keeping whatever horizontal velocity they were given) and
//! stop on the first surface below them.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::{Aabb, GRAVITY, SweepHit, sweep_sphere_aabb};

/// Half size of one brick (0.96 x 0.24 x 0.48 m)
pub const BRICK_HALF_EXTENTS: Vec3 = Vec3::new(0.48, 0.12, 0.24);
pub const BRICK_MASS: f32 = 2.0;

/// Touching faces count as overlapping only beyond this
const OVERLAP_EPSILON: f32 = 1e-3;

/// Shape of a running-bond wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallLayout {
    pub rows: u32,
    pub bricks_per_row: u32,
    /// Distance between brick centres along a row
    pub spacing: f32,
    /// First brick's x offset; the sign flips every row
    pub row_offset: f32,
    pub brick_half_extents: Vec3,
    pub brick_mass: f32,
}

impl Default for WallLayout {
    fn default() -> Self {
        Self {
            rows: 15,
            bricks_per_row: 6,
            spacing: 0.96,
            row_offset: 0.12,
            brick_half_extents: BRICK_HALF_EXTENTS,
            brick_mass: BRICK_MASS,
        }
    }
}

impl WallLayout {
    pub fn bricks_per_wall(&self) -> usize {
        (self.rows * self.bricks_per_row) as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrickState {
    /// Part of the wall; acts as support and as a target
    Standing,
    Falling { velocity: Vec3 },
    /// Landed; supports falling bricks but is no longer a target
    Resting,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub row: u32,
    pub column: u32,
    pub wall: usize,
    pub state: BrickState,
    pub mass: f32,
}

impl Brick {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, self.half_extents)
    }

    pub fn is_standing(&self) -> bool {
        self.state == BrickState::Standing
    }

    pub fn is_falling(&self) -> bool {
        matches!(self.state, BrickState::Falling { .. })
    }

    fn bottom(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    fn top(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    fn overlaps_x(&self, other: &Brick) -> bool {
        (self.center.x - other.center.x).abs() < self.half_extents.x + other.half_extents.x - OVERLAP_EPSILON
    }

    fn overlaps_xz(&self, other: &Brick) -> bool {
        self.overlaps_x(other)
            && (self.center.z - other.center.z).abs()
                < self.half_extents.z + other.half_extents.z - OVERLAP_EPSILON
    }
}

/// Build one wall whose bricks sit on `base_y` and are centred on `z`.
///
/// Brick `i` of a row is at `x = i * spacing + start`; `start` begins at
/// `row_offset` and flips sign each row so the joints are staggered.
pub fn init_wall(layout: &WallLayout, wall: usize, z: f32, base_y: f32) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(layout.bricks_per_wall());
    let mut start = layout.row_offset;
    let mut height = 0.0;
    let hy = layout.brick_half_extents.y;

    for row in 0..layout.rows {
        for column in 0..layout.bricks_per_row {
            bricks.push(Brick {
                center: Vec3::new(column as f32 * layout.spacing + start, base_y + hy + height, z),
                half_extents: layout.brick_half_extents,
                row,
                column,
                wall,
                state: BrickState::Standing,
                mass: layout.brick_mass,
            });
        }
        start = -start;
        height += 2.0 * hy;
    }
    bricks
}

/// The static slab everything lands on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Floor {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Default for Floor {
    fn default() -> Self {
        Self {
            center: Vec3::new(0.0, -0.1, 0.0),
            half_extents: Vec3::new(10.0, 0.1, 5.0),
        }
    }
}

impl Floor {
    pub fn top(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    /// Whether `point` is above or below the slab's footprint.
    pub fn covers(&self, point: Vec3) -> bool {
        (point.x - self.center.x).abs() <= self.half_extents.x
            && (point.z - self.center.z).abs() <= self.half_extents.z
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, self.half_extents)
    }
}

/// A cannonball hitting a standing brick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickHit {
    pub index: usize,
    pub sweep: SweepHit,
}

pub struct BrickSystem {
    bricks: Vec<Brick>,
    floor: Floor,
    /// Loose bricks below this are discarded
    kill_height: f32,
}

impl BrickSystem {
    /// One wall per entry of `wall_z`, all standing on `floor`.
    pub fn new(layout: &WallLayout, wall_z: &[f32], floor: Floor) -> Self {
        let bricks = wall_z
            .iter()
            .enumerate()
            .flat_map(|(wall, &z)| init_wall(layout, wall, z, floor.top()))
            .collect::<Vec<_>>();
        log::info!("Built {} walls with {} bricks", wall_z.len(), bricks.len());
        Self {
            bricks,
            floor,
            kill_height: -50.0,
        }
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn floor(&self) -> &Floor {
        &self.floor
    }

    pub fn standing_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_standing()).count()
    }

    pub fn falling_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_falling()).count()
    }

    pub fn resting_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.state == BrickState::Resting).count()
    }

    /// Index of the standing brick at (`wall`, `row`, `column`).
    pub fn find(&self, wall: usize, row: u32, column: u32) -> Option<usize> {
        self.bricks
            .iter()
            .position(|b| b.wall == wall && b.row == row && b.column == column)
    }

    /// Earliest standing brick hit by a sphere moving from `start` to `end`.
    pub fn sweep(&self, start: Vec3, end: Vec3, radius: f32) -> Option<BrickHit> {
        self.bricks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_standing())
            .filter_map(|(index, b)| sweep_sphere_aabb(start, end, radius, &b.aabb()).map(|sweep| BrickHit { index, sweep }))
            .min_by(|a, b| a.sweep.fraction.total_cmp(&b.sweep.fraction))
    }

    /// Knock a standing brick loose and drop anything it was holding up.
    ///
    /// Returns how many bricks started falling, including this one.
    pub fn knock_loose(&mut self, index: usize, velocity: Vec3) -> usize {
        let Some(brick) = self.bricks.get_mut(index) else {
            return 0;
        };
        if !brick.is_standing() {
            return 0;
        }
        brick.state = BrickState::Falling { velocity };
        let wall = brick.wall;
        log::debug!("Brick wall={} row={} col={} knocked loose", wall, brick.row, brick.column);

        1 + self.cascade(wall)
    }

    /// A standing brick above the bottom row needs a standing brick in the
    /// row below whose x-range overlaps its own.
    fn is_supported(&self, brick: &Brick) -> bool {
        brick.row == 0
            || self.bricks.iter().any(|other| {
                other.wall == brick.wall
                    && other.row + 1 == brick.row
                    && other.is_standing()
                    && other.overlaps_x(brick)
            })
    }

    /// Drop every unsupported brick in `wall`, bottom row first so the loss
    /// of support propagates upward in one pass.
    pub fn cascade(&mut self, wall: usize) -> usize {
        let mut order: Vec<usize> = (0..self.bricks.len())
            .filter(|&i| self.bricks[i].wall == wall && self.bricks[i].is_standing())
            .collect();
        order.sort_by_key(|&i| self.bricks[i].row);

        let mut dropped = 0;
        for i in order {
            if !self.is_supported(&self.bricks[i]) {
                self.bricks[i].state = BrickState::Falling { velocity: Vec3::ZERO };
                dropped += 1;
            }
        }
        if dropped > 0 {
            log::debug!("{} bricks lost support in wall {}", dropped, wall);
        }
        dropped
    }

    /// Highest surface under `brick` that it can land on this step.
    ///
    /// The floor and resting bricks count when their top is at or below
    /// `prev_bottom`. A standing brick counts only when the falling brick's
    /// bottom crossed its top during the step, so a brick knocked off the
    /// one it sat on does not land on it again.
    fn landing_height(&self, index: usize, brick: &Brick, prev_bottom: f32) -> Option<f32> {
        let floor = self
            .floor
            .covers(brick.center)
            .then(|| self.floor.top())
            .filter(|&top| top <= prev_bottom + OVERLAP_EPSILON);

        self.bricks
            .iter()
            .enumerate()
            .filter(|&(i, other)| i != index && !other.is_falling() && other.overlaps_xz(brick))
            .filter(|(_, other)| {
                let top = other.top();
                if other.is_standing() {
                    prev_bottom > top + OVERLAP_EPSILON && brick.bottom() <= top
                } else {
                    top <= prev_bottom + OVERLAP_EPSILON
                }
            })
            .map(|(_, other)| other.top())
            .chain(floor)
            .max_by(f32::total_cmp)
    }

    /// Integrate falling bricks. Returns how many landed this step.
    pub fn update(&mut self, dt: f32) -> usize {
        let mut landed = 0;
        for i in 0..self.bricks.len() {
            let BrickState::Falling { mut velocity } = self.bricks[i].state else {
                continue;
            };
            let prev_bottom = self.bricks[i].bottom();
            velocity.y -= GRAVITY * dt;

            let mut moved = self.bricks[i];
            moved.center += velocity * dt;

            let surface = self.landing_height(i, &moved, prev_bottom);
            let brick = &mut self.bricks[i];
            brick.center = moved.center;
            match surface {
                Some(top) if brick.bottom() <= top => {
                    brick.center.y = top + brick.half_extents.y;
                    brick.state = BrickState::Resting;
                    landed += 1;
                }
                _ => brick.state = BrickState::Falling { velocity },
            }
        }

        let kill = self.kill_height;
        self.bricks.retain(|b| !(b.is_falling() && b.center.y < kill));
        landed
    }

    pub fn is_settled(&self) -> bool {
        self.falling_count() == 0
    }
}

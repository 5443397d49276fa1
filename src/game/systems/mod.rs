//! Game systems: the brick walls and the cannonballs fired at them.

pub mod brick_system;
pub mod projectile_system;

pub use brick_system::{
    BRICK_HALF_EXTENTS, BRICK_MASS, Brick, BrickHit, BrickState, BrickSystem, Floor, WallLayout, init_wall,
};
pub use projectile_system::{CannonballConfig, ProjectileSystem, ProjectileUpdate};

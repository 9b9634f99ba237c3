//! Projectile lifetime system.

use hecs::World;

use maskfall_core::components::Projectile;

/// Count down projectile lifetimes; expired ones are marked spent with no
/// effect. Returns the number that expired this tick.
pub fn run(world: &mut World, dt: f32) -> usize {
    let mut expired = 0;
    for (_entity, projectile) in world.query_mut::<&mut Projectile>() {
        if projectile.spent {
            continue;
        }
        projectile.lifetime_secs -= dt;
        if projectile.lifetime_secs <= 0.0 {
            projectile.spent = true;
            expired += 1;
        }
    }
    expired
}

//! Read-only state passed to every behavior call.

use hunt_core::BehaviorParams;
use hunt_mobility::MovementEngine;
use hunt_spatial::SpatialIndex;

/// The world and the tuning, bundled.
///
/// Built once per run (or per tick; it is cheap) and shared by every
/// `update_*` and capture call.  Nothing in it changes during a tick.
pub struct BehaviorContext<'a, W: SpatialIndex + ?Sized> {
    pub world:  &'a W,
    pub params: &'a BehaviorParams,
    /// Derived from `params`.
    pub engine: MovementEngine,
}

impl<'a, W: SpatialIndex + ?Sized> BehaviorContext<'a, W> {
    #[inline]
    pub fn new(world: &'a W, params: &'a BehaviorParams) -> Self {
        Self { world, params, engine: MovementEngine::new(params) }
    }
}

//! Fluent builder for constructing a [`Sim`].

use hunt_agent::{Agent, AgentBuilder};
use hunt_core::{AgentId, BehaviorParams, Cell, SimConfig};
use hunt_spatial::SpatialIndex;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<W>`].
///
/// # Required inputs
///
/// - `W: SpatialIndex`: usually a [`GridWorld`](hunt_spatial::GridWorld)
/// - [`SimConfig`]: seed and tick limit
/// - at least one predator start cell
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                      |
/// |----------------|------------------------------|
/// | `.params(p)`   | `BehaviorParams::default()`  |
/// | `.prey(c)`     | no prey (the run ends at once) |
///
/// Predators receive IDs `0..n` in insertion order and prey continue from
/// `n`.  Agent order is tick order.
pub struct SimBuilder<W: SpatialIndex> {
    world:     W,
    config:    SimConfig,
    params:    BehaviorParams,
    predators: Vec<Cell>,
    prey:      Vec<Cell>,
}

impl<W: SpatialIndex> SimBuilder<W> {
    pub fn new(world: W, config: SimConfig) -> Self {
        Self {
            world,
            config,
            params:    BehaviorParams::default(),
            predators: Vec::new(),
            prey:      Vec::new(),
        }
    }

    pub fn params(mut self, params: BehaviorParams) -> Self {
        self.params = params;
        self
    }

    pub fn predator(mut self, at: Cell) -> Self {
        self.predators.push(at);
        self
    }

    pub fn predators<I: IntoIterator<Item = Cell>>(mut self, cells: I) -> Self {
        self.predators.extend(cells);
        self
    }

    pub fn prey(mut self, at: Cell) -> Self {
        self.prey.push(at);
        self
    }

    pub fn prey_group<I: IntoIterator<Item = Cell>>(mut self, cells: I) -> Self {
        self.prey.extend(cells);
        self
    }

    /// Validate the tuning and start cells and construct every agent.
    pub fn build(self) -> SimResult<Sim<W>> {
        self.params.validate()?;
        if self.predators.is_empty() {
            return Err(SimError::NoPredators);
        }

        let mut next = 0usize;
        let mut fresh_id = || -> SimResult<AgentId> {
            let id = AgentId::try_from(next).map_err(|_| hunt_agent::AgentError::InvalidId)?;
            next += 1;
            Ok(id)
        };

        let mut predators: Vec<Agent> = Vec::with_capacity(self.predators.len());
        for &at in &self.predators {
            let id = fresh_id()?;
            check_start(&self.world, id, at)?;
            predators.push(AgentBuilder::predator(id, at).params(&self.params.predator).build()?);
        }

        let mut prey: Vec<Agent> = Vec::with_capacity(self.prey.len());
        for &at in &self.prey {
            let id = fresh_id()?;
            check_start(&self.world, id, at)?;
            prey.push(AgentBuilder::prey(id, at).params(&self.params.prey).build()?);
        }

        Ok(Sim::new(self.config, self.params, self.world, predators, prey))
    }
}

fn check_start<W: SpatialIndex>(world: &W, id: AgentId, cell: Cell) -> SimResult<()> {
    if world.is_walkable(cell) {
        Ok(())
    } else {
        Err(SimError::UnwalkableStart { id, cell })
    }
}

use hunt_agent::AgentError;
use hunt_core::{AgentId, Cell, HuntError};
use hunt_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("a simulation needs at least one predator")]
    NoPredators,

    #[error("{id} would start on unwalkable cell {cell}")]
    UnwalkableStart { id: AgentId, cell: Cell },

    #[error(transparent)]
    Params(#[from] HuntError),

    #[error("world error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),
}

pub type SimResult<T> = Result<T, SimError>;

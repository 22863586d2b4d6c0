use thiserror::Error;

/// Fatal conditions the simulation cannot continue from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GameError {
    /// The snake covers every cell, so no food can be placed.
    #[error("no free cell left for food on the {width}x{height} board")]
    BoardSaturated { width: u16, height: u16 },
}

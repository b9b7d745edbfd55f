use thiserror::Error;

use crate::maze::MazeError;

/// Startup failures. A running simulation never errors; losing is a state.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("bad maze layout: {0}")]
    Maze(#[from] MazeError),
    #[error("sprite {0:?} not found in sheet")]
    MissingSprite(String),
    #[error("bad tuning file {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

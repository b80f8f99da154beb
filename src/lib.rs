//! Random perfect-maze generation over a fixed-size grid, using a
//! randomized variant of Prim's algorithm, plus a text renderer for the
//! finished grid.

pub mod config;
pub mod error;
pub mod generators;
pub mod grids;
pub mod render;
pub mod service;

pub use config::MazeConfig;
pub use error::MazeError;
pub use render::RenderedMaze;
pub use service::MazeService;

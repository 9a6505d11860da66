//! Level entities and the per-frame update.
pub mod camera;
pub mod level;
pub mod player;
pub mod tile;

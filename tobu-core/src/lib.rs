//! tobu-core: a software-rendered 2D tile platformer core.
//!
//! The crate owns level construction from character grids, player physics
//! (gravity, axis-separated collision), coin pickup, and the camera window
//! that crops the scene around the player. The embedding shell owns the OS
//! window and event pump: it feeds key edges into [`InputState`], calls
//! [`Level::run`] once per tick, and presents [`Surface::rgba`] however it
//! likes.

mod font;
mod geom;
mod input;
mod surface;
#[cfg(test)]
mod testutils;
mod world;

pub use font::{FontError, FontHandle, FontSetting};
pub use geom::{
    Float, GridPoint, GridSpace, PixelPoint, PixelRect, PixelSize, PixelSpace, ScenePoint,
    SceneRect, SceneSize, SceneSpace, SceneVector,
};
pub use input::{InputState, Key};
pub use surface::{Color, Dot, Surface};
pub use world::camera::Camera;
pub use world::level::{Layer, Layout, Level, LevelError, LevelSetting};
pub use world::player::Player;
pub use world::tile::{Coin, Tile};

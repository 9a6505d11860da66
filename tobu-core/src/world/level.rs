use euclid::{point2, size2, vec2};
use log::warn;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::font::{FontError, FontHandle, FontSetting};
use crate::geom::{grid_to_scene, Float, ScenePoint};
use crate::input::InputState;
use crate::surface::{Color, Surface};
use crate::world::camera::Camera;
use crate::world::player::Player;
use crate::world::tile::{Coin, Tile};

/// Entity layers a layout can carry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Layer {
    Background,
    Foreground,
    Player,
    Coin,
}

/// Per-layer character grids. A blank cell is empty, anything else is
/// occupied. Rows may be ragged; they are consumed as-is.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    layers: HashMap<Layer, Vec<String>>,
}

impl Layout {
    pub fn new() -> Layout {
        Layout::default()
    }
    pub fn layer<S, I>(&mut self, layer: Layer, rows: I) -> &mut Layout
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        self.layers
            .insert(layer, rows.into_iter().map(Into::into).collect());
        self
    }
    fn rows(&self, layer: Layer) -> &[String] {
        self.layers.get(&layer).map(Vec::as_slice).unwrap_or(&[])
    }
    /// (cols, rows) over all layers.
    fn extent(&self) -> (u32, u32) {
        let mut cols = 0;
        let mut rows = 0;
        for grid in self.layers.values() {
            rows = rows.max(grid.len());
            cols = cols.max(grid.iter().map(|r| r.chars().count()).max().unwrap_or(0));
        }
        (cols as u32, rows as u32)
    }
}

/// Scene positions of the occupied cells of one layer, row-major.
fn cells<'a>(rows: &'a [String], tile_len: u32) -> impl Iterator<Item = ScenePoint> + 'a {
    rows.iter().enumerate().flat_map(move |(r, row)| {
        row.chars().enumerate().filter_map(move |(c, ch)| {
            if ch == ' ' {
                None
            } else {
                Some(grid_to_scene(point2(c as u32, r as u32), tile_len))
            }
        })
    })
}

/// Level construction knobs (builder).
pub struct LevelSetting {
    tile_len: u32,
    camera_distance: (Float, Float),
    camera_size: (i32, i32),
    bg_color: Color,
    fg_color: Color,
    player_color: Color,
    coin_color: Color,
}

impl LevelSetting {
    pub const DEFAULT_TILE_LEN: u32 = 64;
    const DEFAULT_CAMERA_DISTANCE: (Float, Float) = (250.0, 250.0);
    const DEFAULT_CAMERA_SIZE: (i32, i32) = (1920, 1080);
    pub fn new() -> LevelSetting {
        LevelSetting {
            tile_len: Self::DEFAULT_TILE_LEN,
            camera_distance: Self::DEFAULT_CAMERA_DISTANCE,
            camera_size: Self::DEFAULT_CAMERA_SIZE,
            bg_color: Color::green(),
            fg_color: Color::red(),
            player_color: Color::blue(),
            coin_color: Color::yellow(),
        }
    }
    pub fn tile_len(&mut self, len: u32) -> &mut LevelSetting {
        self.tile_len = len;
        self
    }
    pub fn camera_distance(&mut self, x: Float, y: Float) -> &mut LevelSetting {
        self.camera_distance = (x, y);
        self
    }
    pub fn camera_size(&mut self, w: i32, h: i32) -> &mut LevelSetting {
        self.camera_size = (w, h);
        self
    }
    pub fn bg_color(&mut self, c: Color) -> &mut LevelSetting {
        self.bg_color = c;
        self
    }
    pub fn fg_color(&mut self, c: Color) -> &mut LevelSetting {
        self.fg_color = c;
        self
    }
    pub fn player_color(&mut self, c: Color) -> &mut LevelSetting {
        self.player_color = c;
        self
    }
    pub fn coin_color(&mut self, c: Color) -> &mut LevelSetting {
        self.coin_color = c;
        self
    }
}

impl Default for LevelSetting {
    fn default() -> LevelSetting {
        LevelSetting::new()
    }
}

#[derive(Debug)]
pub enum LevelError {
    /// The player layer was absent or all-blank.
    MissingPlayer,
    Font(FontError),
}

impl Error for LevelError {}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            LevelError::MissingPlayer => write!(f, "MissingPlayer"),
            LevelError::Font(e) => write!(f, "Font: {}", e),
        }
    }
}

impl From<FontError> for LevelError {
    fn from(e: FontError) -> LevelError {
        LevelError::Font(e)
    }
}

/// Owns the scene, the entities, and the per-frame update.
pub struct Level {
    scene: Surface,
    background: Vec<Tile>,
    foreground: Vec<Tile>,
    player: Player,
    coins: Vec<Coin>,
    camera: Camera,
    font: Option<(FontHandle, FontSetting)>,
}

impl Level {
    const OVERLAY_SCALE: u32 = 50;
    const OVERLAY_POS: (f32, f32) = (25.0, 25.0);

    /// Build all entities from `layout`. Layers are always constructed in
    /// background, foreground, player, coin order, so the coins can never
    /// precede the player slot they depend on.
    pub fn new(layout: &Layout, setting: &LevelSetting) -> Result<Level, LevelError> {
        let tile_len = setting.tile_len;
        let (cols, rows) = layout.extent();
        let scene = Surface::new(cols * tile_len, rows * tile_len);
        let background = cells(layout.rows(Layer::Background), tile_len)
            .map(|p| Tile::new(p, tile_len, setting.bg_color))
            .collect();
        let foreground = cells(layout.rows(Layer::Foreground), tile_len)
            .map(|p| Tile::new(p, tile_len, setting.fg_color))
            .collect();
        let mut slot = None;
        for p in cells(layout.rows(Layer::Player), tile_len) {
            if slot.is_some() {
                warn!("player slot already filled, replacing with cell at {:?}", p);
            }
            slot = Some(Player::new(p, tile_len, setting.player_color));
        }
        let player = slot.ok_or(LevelError::MissingPlayer)?;
        let coins = cells(layout.rows(Layer::Coin), tile_len)
            .map(|p| Coin::new(p, tile_len, setting.coin_color))
            .collect();
        let (dx, dy) = setting.camera_distance;
        let (w, h) = setting.camera_size;
        Ok(Level {
            scene,
            background,
            foreground,
            player,
            coins,
            camera: Camera::new(vec2(dx, dy), size2(w, h)),
            font: None,
        })
    }

    /// Attach a font for the fps overlay. Without one, `run` skips it.
    pub fn set_font(&mut self, font: FontHandle) {
        let mut overlay = FontSetting::new();
        overlay
            .color(Color::white())
            .scale(Self::OVERLAY_SCALE)
            .start(Self::OVERLAY_POS.0, Self::OVERLAY_POS.1);
        self.font = Some((font, overlay));
    }

    /// One frame. Entities draw at last frame's resolved positions before
    /// input and collision move them; the scene is never cleared in
    /// between. `fps` is display-only and never feeds the simulation.
    pub fn run(
        &mut self,
        frame: &mut Surface,
        input: &InputState,
        fps: f64,
    ) -> Result<(), LevelError> {
        for tile in &self.background {
            tile.draw(&mut self.scene);
        }
        for tile in &self.foreground {
            tile.draw(&mut self.scene);
        }
        self.player.draw(&mut self.scene);
        self.player.read_input(input);
        for coin in &self.coins {
            coin.draw(&mut self.scene);
        }
        let player_rect = self.player.rect();
        self.coins.retain(|c| !c.taken_by(&player_rect));
        self.horizontal_collision();
        self.vertical_collision();
        let shot = self.camera.capture(&self.scene, self.player.rect().origin);
        frame.blit(&shot, point2(0, 0));
        if let Some((font, overlay)) = &self.font {
            font.draw_str(frame, &format!("{}", fps), overlay)?;
        }
        Ok(())
    }

    /// Move on the x-axis only and clamp against every overlapping tile in
    /// insertion order; the last overlapping tile wins.
    fn horizontal_collision(&mut self) {
        let Level {
            player, foreground, ..
        } = self;
        player.rect.origin.x += player.velocity.x * player.speed;
        for tile in foreground.iter() {
            let t = tile.rect();
            if t.intersects(&player.rect) {
                if player.velocity.x < 0.0 {
                    player.rect.origin.x = t.max_x();
                } else if player.velocity.x > 0.0 {
                    player.rect.origin.x = t.min_x() - player.rect.size.width;
                }
            }
        }
    }

    /// Apply gravity, then clamp against overlapping tiles and maintain the
    /// contact flags. The post-loop guard drops a stale `on_ground` once
    /// the player moves upward or falls faster than one unit per frame.
    fn vertical_collision(&mut self) {
        let Level {
            player, foreground, ..
        } = self;
        player.apply_gravity();
        for tile in foreground.iter() {
            let t = tile.rect();
            if t.intersects(&player.rect) {
                if player.velocity.y > 0.0 {
                    player.rect.origin.y = t.min_y() - player.rect.size.height;
                    player.velocity.y = 0.0;
                    player.on_ground = true;
                    player.on_ceiling = false;
                } else if player.velocity.y < 0.0 {
                    player.rect.origin.y = t.max_y();
                    player.velocity.y = 0.0;
                    player.on_ceiling = true;
                    player.on_ground = false;
                }
            }
        }
        if player.on_ground && (player.velocity.y < 0.0 || player.velocity.y > 1.0) {
            player.on_ground = false;
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }
    pub fn coins_left(&self) -> usize {
        self.coins.len()
    }
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
    pub fn scene(&self) -> &Surface {
        &self.scene
    }
}

use euclid::size2;

use crate::geom::{scene_to_pixel, Float, ScenePoint, SceneRect};
use crate::surface::{Color, Surface};

/// Static collidable unit of level geometry: a colored square.
pub struct Tile {
    rect: SceneRect,
    image: Surface,
}

impl Tile {
    pub fn new(origin: ScenePoint, edge: u32, color: Color) -> Tile {
        Tile {
            rect: SceneRect::new(origin, size2(edge as Float, edge as Float)),
            image: Surface::filled(edge, edge, color),
        }
    }
    pub fn rect(&self) -> SceneRect {
        self.rect
    }
    pub fn draw(&self, scene: &mut Surface) {
        scene.blit(&self.image, scene_to_pixel(self.rect.origin));
    }
}

/// A tile that disappears the frame the player's box overlaps it.
pub struct Coin {
    tile: Tile,
}

impl Coin {
    pub fn new(origin: ScenePoint, edge: u32, color: Color) -> Coin {
        Coin {
            tile: Tile::new(origin, edge, color),
        }
    }
    pub fn rect(&self) -> SceneRect {
        self.tile.rect
    }
    pub fn draw(&self, scene: &mut Surface) {
        self.tile.draw(scene);
    }
    pub fn taken_by(&self, player: &SceneRect) -> bool {
        self.tile.rect.intersects(player)
    }
}

#[cfg(test)]
mod tile_test {
    use super::*;
    use euclid::{point2, rect};

    #[test]
    fn tile_rect_is_a_square_at_origin() {
        let t = Tile::new(point2(128.0, 64.0), 64, Color::red());
        assert_eq!(t.rect(), rect(128.0, 64.0, 64.0, 64.0));
    }

    #[test]
    fn tile_draws_at_its_origin() {
        let mut scene = Surface::new(256, 256);
        Tile::new(point2(64.0, 64.0), 64, Color::red()).draw(&mut scene);
        assert_eq!(scene.get(point2(64, 64)), Some(Color::red()));
        assert_eq!(scene.get(point2(127, 127)), Some(Color::red()));
        assert_eq!(scene.get(point2(63, 64)), None);
    }

    #[test]
    fn coin_overlap_is_strict() {
        let c = Coin::new(point2(64.0, 0.0), 64, Color::yellow());
        // shared edge only: not taken
        assert!(!c.taken_by(&rect(0.0, 0.0, 64.0, 64.0)));
        assert!(c.taken_by(&rect(1.0, 0.0, 64.0, 64.0)));
    }
}

//! Coordinate spaces and the conversions between them.
use euclid::{point2, size2, Point2D, Rect, Size2D, Vector2D};

/// Continuous world coordinates entities move in.
pub struct SceneSpace;
/// Integer surface coordinates used for blitting.
pub struct PixelSpace;
/// Row/column cells of a layout grid.
pub struct GridSpace;

pub type Float = f32;
pub type ScenePoint = Point2D<Float, SceneSpace>;
pub type SceneVector = Vector2D<Float, SceneSpace>;
pub type SceneSize = Size2D<Float, SceneSpace>;
pub type SceneRect = Rect<Float, SceneSpace>;

pub type PixelPoint = Point2D<i32, PixelSpace>;
pub type PixelSize = Size2D<i32, PixelSpace>;
pub type PixelRect = Rect<i32, PixelSpace>;

pub type GridPoint = Point2D<u32, GridSpace>;

/// Truncates toward zero, like an integer blit offset.
pub fn scene_to_pixel(p: ScenePoint) -> PixelPoint {
    point2(p.x as i32, p.y as i32)
}

pub fn scene_rect_to_pixel(r: SceneRect) -> PixelRect {
    PixelRect::new(
        scene_to_pixel(r.origin),
        size2(r.size.width as i32, r.size.height as i32),
    )
}

/// Cell (col, row) occupies the square at (col * tile_len, row * tile_len).
pub fn grid_to_scene(cell: GridPoint, tile_len: u32) -> ScenePoint {
    point2((cell.x * tile_len) as Float, (cell.y * tile_len) as Float)
}

#[cfg(test)]
mod geom_test {
    use super::*;
    #[test]
    fn truncation_is_toward_zero() {
        assert_eq!(scene_to_pixel(point2(1.9, -0.5)), point2(1, 0));
        assert_eq!(scene_to_pixel(point2(-122.0, -249.2)), point2(-122, -249));
    }
    #[test]
    fn grid_cell_to_scene_origin() {
        assert_eq!(grid_to_scene(point2(2, 0), 64), point2(128.0, 0.0));
        assert_eq!(grid_to_scene(point2(1, 1), 64), point2(64.0, 64.0));
    }
}

use euclid::point2;

use crate::geom::{scene_rect_to_pixel, Float, PixelSize, ScenePoint, SceneRect, SceneVector};
use crate::surface::Surface;

/// Fixed-offset window over the scene. No smoothing, no clamping to level
/// bounds; the view is recomputed fresh from the player every frame.
pub struct Camera {
    distance: SceneVector,
    size: PixelSize,
}

impl Camera {
    pub fn new(distance: SceneVector, size: PixelSize) -> Camera {
        Camera { distance, size }
    }

    /// Top-left is exactly `player_origin - distance`.
    pub fn window(&self, player_origin: ScenePoint) -> SceneRect {
        SceneRect::new(
            player_origin - self.distance,
            self.size.cast::<Float>().cast_unit(),
        )
    }

    /// Crop the scene through the window onto a fresh transparent surface.
    /// Out-of-scene regions stay transparent.
    pub fn capture(&self, scene: &Surface, player_origin: ScenePoint) -> Surface {
        let mut shot = Surface::new(self.size.width as u32, self.size.height as u32);
        let window = scene_rect_to_pixel(self.window(player_origin));
        shot.blit_area(scene, window, point2(0, 0));
        shot
    }
}

#[cfg(test)]
mod camera_test {
    use super::*;
    use crate::surface::Color;
    use euclid::{size2, vec2};

    fn camera() -> Camera {
        Camera::new(vec2(250.0, 250.0), size2(1920, 1080))
    }

    #[test]
    fn window_tracks_player_exactly() {
        let cam = camera();
        assert_eq!(cam.window(point2(0.0, 0.0)).origin, point2(-250.0, -250.0));
        assert_eq!(
            cam.window(point2(313.7, -42.0)).origin,
            point2(313.7 - 250.0, -42.0 - 250.0)
        );
        assert_eq!(cam.window(point2(0.0, 0.0)).size, size2(1920.0, 1080.0));
    }

    #[test]
    fn capture_keeps_world_alignment_at_scene_edge() {
        let scene = Surface::filled(640, 480, Color::red());
        let cam = camera();
        let shot = cam.capture(&scene, point2(0.0, 0.0));
        // window origin is (-250, -250): scene (0, 0) lands at (250, 250)
        assert_eq!(shot.get(point2(250, 250)), Some(Color::red()));
        assert_eq!(shot.get(point2(249, 250)), None);
        assert_eq!(shot.get(point2(0, 0)), None);
        assert_eq!(shot.size(), size2(1920, 1080));
    }
}

use euclid::{size2, vec2};

use crate::geom::{scene_to_pixel, Float, ScenePoint, SceneRect, SceneVector};
use crate::input::{InputState, Key};
use crate::surface::{Color, Surface};

/// The single moving rectangle. Horizontal motion is re-scaled by `speed`
/// every frame while vertical motion accumulates raw gravity velocity.
pub struct Player {
    pub(crate) rect: SceneRect,
    pub(crate) velocity: SceneVector,
    pub(crate) gravity: Float,
    pub(crate) jump_speed: Float,
    pub(crate) speed: Float,
    pub(crate) on_ground: bool,
    pub(crate) on_ceiling: bool,
    image: Surface,
}

impl Player {
    pub const DEFAULT_GRAVITY: Float = 0.8;
    pub const DEFAULT_JUMP_SPEED: Float = -15.0;
    pub const DEFAULT_SPEED: Float = 5.0;

    pub fn new(origin: ScenePoint, edge: u32, color: Color) -> Player {
        Player {
            rect: SceneRect::new(origin, size2(edge as Float, edge as Float)),
            velocity: vec2(0.0, 0.0),
            gravity: Self::DEFAULT_GRAVITY,
            jump_speed: Self::DEFAULT_JUMP_SPEED,
            speed: Self::DEFAULT_SPEED,
            on_ground: false,
            on_ceiling: false,
            image: Surface::filled(edge, edge, color),
        }
    }

    /// Set the horizontal direction and handle the jump key. Right is
    /// checked first, so it wins a simultaneous left+right press. Ground
    /// contact clears `on_ceiling` before the jump gate reads it, so a
    /// just-landed player holding up jumps the same frame.
    pub fn read_input(&mut self, input: &InputState) {
        if input.is_down(Key::Right) {
            self.velocity.x = 1.0;
        } else if input.is_down(Key::Left) {
            self.velocity.x = -1.0;
        } else {
            self.velocity.x = 0.0;
        }
        if self.on_ground {
            self.on_ceiling = false;
        }
        if input.is_down(Key::Up) && self.on_ground && !self.on_ceiling {
            self.jump();
        }
    }

    fn jump(&mut self) {
        self.velocity.y = self.jump_speed;
    }

    /// Semi-implicit Euler: velocity first, then position, once per frame.
    pub(crate) fn apply_gravity(&mut self) {
        self.velocity.y += self.gravity;
        self.rect.origin.y += self.velocity.y;
    }

    pub fn rect(&self) -> SceneRect {
        self.rect
    }
    pub fn velocity(&self) -> SceneVector {
        self.velocity
    }
    pub fn on_ground(&self) -> bool {
        self.on_ground
    }
    pub fn on_ceiling(&self) -> bool {
        self.on_ceiling
    }
    pub fn draw(&self, scene: &mut Surface) {
        scene.blit(&self.image, scene_to_pixel(self.rect.origin));
    }
}

#[cfg(test)]
mod player_test {
    use super::*;
    use crate::testutils::holding;
    use euclid::point2;

    fn player() -> Player {
        Player::new(point2(0.0, 0.0), 64, Color::blue())
    }

    #[test]
    fn right_wins_simultaneous_press() {
        let mut p = player();
        p.read_input(&holding(&[Key::Left, Key::Right]));
        assert_eq!(p.velocity.x, 1.0);
        p.read_input(&holding(&[Key::Left]));
        assert_eq!(p.velocity.x, -1.0);
        p.read_input(&holding(&[]));
        assert_eq!(p.velocity.x, 0.0);
    }

    #[test]
    fn jump_needs_ground() {
        let mut p = player();
        p.read_input(&holding(&[Key::Up]));
        assert_eq!(p.velocity.y, 0.0);
        p.on_ground = true;
        p.read_input(&holding(&[Key::Up]));
        assert_eq!(p.velocity.y, Player::DEFAULT_JUMP_SPEED);
    }

    #[test]
    fn landing_clears_ceiling_before_jump_gate() {
        let mut p = player();
        p.on_ground = true;
        p.on_ceiling = true;
        p.read_input(&holding(&[Key::Up]));
        assert!(!p.on_ceiling);
        assert_eq!(p.velocity.y, Player::DEFAULT_JUMP_SPEED);
    }

    #[test]
    fn gravity_is_semi_implicit() {
        let mut p = player();
        p.apply_gravity();
        assert_eq!(p.velocity.y, 0.8);
        assert_eq!(p.rect.origin.y, 0.8);
        p.apply_gravity();
        assert_eq!(p.velocity.y, 1.6);
        assert_eq!(p.rect.origin.y, 0.8 + 1.6);
    }
}

//! Subtle pointer-follow drift for decorative layers.

use glam::Vec2;

/// Maps the pointer position to a small translation: the layer leans away
/// from the cursor, scaled down by `strength`.
#[derive(Debug, Clone, Copy)]
pub struct Parallax {
    /// Divisor applied to the raw offset (larger = subtler). Default 100.
    strength: f32,
}

impl Parallax {
    pub fn new(strength: f32) -> Self {
        Self {
            strength: if strength <= 0.0 { 100.0 } else { strength },
        }
    }

    /// Translation for the decorative layer given the pointer and viewport.
    pub fn offset(&self, pointer: Vec2, viewport: Vec2) -> Vec2 {
        (viewport - pointer * 2.0) / self.strength
    }
}

impl Default for Parallax {
    fn default() -> Self {
        Self::new(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_is_neutral() {
        let p = Parallax::default();
        let viewport = Vec2::new(1920.0, 1080.0);
        let offset = p.offset(viewport / 2.0, viewport);
        assert!(offset.abs_diff_eq(Vec2::ZERO, 1e-4));
    }

    #[test]
    fn drift_opposes_pointer_direction() {
        let p = Parallax::default();
        let viewport = Vec2::new(1000.0, 1000.0);
        // Pointer at the far right pushes the layer left
        let offset = p.offset(Vec2::new(1000.0, 500.0), viewport);
        assert!(offset.x < 0.0);
        assert!((offset.x - -10.0).abs() < 1e-4);
    }

    #[test]
    fn non_positive_strength_falls_back_to_default() {
        let p = Parallax::new(0.0);
        let offset = p.offset(Vec2::ZERO, Vec2::new(100.0, 100.0));
        assert!((offset.x - 1.0).abs() < 1e-4);
    }
}

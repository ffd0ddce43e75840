use crate::{Mat4, Vec3, vec3};

/// Per-frame translation step in clip-space units.
pub const TRANSLATE_STEP: f32 = 0.01;
/// Per-frame rotation step about the Y axis, in degrees.
pub const ROTATE_STEP_DEG: f32 = 1.0;
/// Per-frame uniform scale factor.
pub const SCALE_STEP: f32 = 1.01;

/// Semantic transform actions, decoupled from key codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    TranslateUp,
    TranslateDown,
    TranslateLeft,
    TranslateRight,
    RotateCw,
    RotateCcw,
    ScaleUp,
    ScaleDown,
}

impl Action {
    /// Every action in its fixed per-frame evaluation order: translation,
    /// then rotation, then scale. Matrix composition is non-commutative, so
    /// this order is part of the observable behavior.
    pub const ALL: [Action; 8] = [
        Action::TranslateUp,
        Action::TranslateDown,
        Action::TranslateLeft,
        Action::TranslateRight,
        Action::RotateCw,
        Action::RotateCcw,
        Action::ScaleUp,
        Action::ScaleDown,
    ];

    /// The fixed-magnitude operation this action performs.
    pub fn op(self) -> Op {
        match self {
            Action::TranslateUp => Op::Translate(vec3(0.0, TRANSLATE_STEP, 0.0)),
            Action::TranslateDown => Op::Translate(vec3(0.0, -TRANSLATE_STEP, 0.0)),
            Action::TranslateLeft => Op::Translate(vec3(-TRANSLATE_STEP, 0.0, 0.0)),
            Action::TranslateRight => Op::Translate(vec3(TRANSLATE_STEP, 0.0, 0.0)),
            Action::RotateCw => Op::RotateY(ROTATE_STEP_DEG.to_radians()),
            Action::RotateCcw => Op::RotateY(-ROTATE_STEP_DEG.to_radians()),
            Action::ScaleUp => Op::Scale(SCALE_STEP),
            Action::ScaleDown => Op::Scale(1.0 / SCALE_STEP),
        }
    }
}

/// Operation descriptor: axis and magnitude, ready to compose into a matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Op {
    Translate(Vec3),
    RotateY(f32),
    Scale(f32),
}

/// Cumulative model transform. Starts at identity; operations compose on the
/// right, so the most recent one applies closest to the vertex (glm-style
/// model-matrix composition). No undo; state lives for the process lifetime.
#[derive(Clone, Copy, Debug)]
pub struct ModelTransform {
    matrix: Mat4,
}

impl ModelTransform {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
        }
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Apply one action's operation to the accumulated matrix.
    pub fn apply(&mut self, action: Action) {
        let op = match action.op() {
            Op::Translate(delta) => Mat4::from_translation(delta),
            Op::RotateY(radians) => Mat4::from_rotation_y(radians),
            Op::Scale(factor) => Mat4::from_scale(Vec3::splat(factor)),
        };
        self.matrix *= op;
    }

    /// Apply every action reported as held, in [`Action::ALL`] order.
    /// All held actions land within the same frame; magnitudes are per-frame
    /// constants, not delta-time scaled.
    pub fn apply_held(&mut self, held: impl Fn(Action) -> bool) {
        for action in Action::ALL {
            if held(action) {
                self.apply(action);
            }
        }
    }
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops_carry_documented_magnitudes() {
        assert_eq!(
            Action::TranslateUp.op(),
            Op::Translate(vec3(0.0, TRANSLATE_STEP, 0.0))
        );
        assert_eq!(
            Action::TranslateLeft.op(),
            Op::Translate(vec3(-TRANSLATE_STEP, 0.0, 0.0))
        );
        assert_eq!(Action::RotateCw.op(), Op::RotateY(ROTATE_STEP_DEG.to_radians()));
        assert_eq!(Action::RotateCcw.op(), Op::RotateY(-ROTATE_STEP_DEG.to_radians()));
        assert_eq!(Action::ScaleUp.op(), Op::Scale(SCALE_STEP));
        assert_eq!(Action::ScaleDown.op(), Op::Scale(1.0 / SCALE_STEP));
    }

    #[test]
    fn evaluation_order_is_translate_rotate_scale() {
        use Action::*;
        assert_eq!(
            Action::ALL,
            [
                TranslateUp,
                TranslateDown,
                TranslateLeft,
                TranslateRight,
                RotateCw,
                RotateCcw,
                ScaleUp,
                ScaleDown,
            ]
        );
    }
}

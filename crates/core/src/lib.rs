//! Core types: math re-exports, transform state, viewer errors.

pub use glam::{Mat4, Vec3, vec3};

pub mod error;
pub mod transform;

#[cfg(test)]
mod tests {
    use super::*;
    use super::transform::{Action, ModelTransform, TRANSLATE_STEP};

    fn max_abs_diff(a: Mat4, b: Mat4) -> f32 {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array().iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f32::max)
    }

    #[test]
    fn fresh_transform_is_identity() {
        assert_eq!(ModelTransform::identity().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn translation_step_lands_in_last_column() {
        let mut t = ModelTransform::identity();
        t.apply(Action::TranslateRight);
        let m = t.matrix().to_cols_array();
        assert!((m[12] - TRANSLATE_STEP).abs() < 1e-6);
        assert!(m[13].abs() < 1e-6);
        assert!(m[14].abs() < 1e-6);
    }

    #[test]
    fn translate_then_rotate_differs_from_rotate_then_translate() {
        let mut a = ModelTransform::identity();
        a.apply(Action::TranslateRight);
        a.apply(Action::RotateCw);

        let mut b = ModelTransform::identity();
        b.apply(Action::RotateCw);
        b.apply(Action::TranslateRight);

        assert!(max_abs_diff(a.matrix(), b.matrix()) > 1e-6);
    }

    #[test]
    fn scale_round_trip_returns_within_tolerance() {
        let mut t = ModelTransform::identity();
        t.apply(Action::TranslateRight);
        t.apply(Action::RotateCw);
        let before = t.matrix();

        t.apply(Action::ScaleUp);
        t.apply(Action::ScaleDown);

        assert!(max_abs_diff(before, t.matrix()) < 1e-5);
    }

    #[test]
    fn opposite_translations_cancel() {
        let mut t = ModelTransform::identity();
        for _ in 0..10 {
            t.apply(Action::TranslateUp);
        }
        for _ in 0..10 {
            t.apply(Action::TranslateDown);
        }
        assert!(max_abs_diff(t.matrix(), Mat4::IDENTITY) < 1e-5);
    }

    #[test]
    fn held_actions_apply_in_documented_order() {
        let mut held_all = ModelTransform::identity();
        held_all.apply_held(|_| true);

        let mut sequenced = ModelTransform::identity();
        for action in Action::ALL {
            sequenced.apply(action);
        }

        assert_eq!(
            held_all.matrix().to_cols_array(),
            sequenced.matrix().to_cols_array()
        );
    }
}

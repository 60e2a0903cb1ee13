use glam::Vec2;

use crate::api::config::ChainConfig;
use crate::core::element::{ElementKind, FaceElements};

/// Displacement a drag of `dragged` by `magnitude` induces on `other`,
/// or `None` when `other` is outside the influence radius.
pub fn influence(dragged: ElementKind, other: ElementKind, magnitude: f32, cfg: &ChainConfig) -> Option<Vec2> {
    let delta = other.rest_position() - dragged.rest_position();
    let distance = delta.length();
    if distance >= cfg.influence_radius {
        return None;
    }
    // atan2(0, 0) is 0, so coincident parts get pushed along +x
    let angle = delta.y.atan2(delta.x);
    let falloff = 1.0 - distance / cfg.influence_radius;
    Some(Vec2::new(angle.cos(), angle.sin()) * falloff * cfg.influence_strength * magnitude)
}

/// Recompute every non-dragged element's chain offset from the dragged one.
/// Returns the elements that were influenced this tick.
pub fn apply_chain_reaction(elements: &mut FaceElements, dragged: ElementKind, cfg: &ChainConfig) -> Vec<ElementKind> {
    let magnitude = elements.get(dragged).offset.length();
    let mut influenced = Vec::new();

    for kind in ElementKind::ALL {
        if kind == dragged {
            continue;
        }
        let state = elements.get_mut(kind);
        match influence(dragged, kind, magnitude, cfg) {
            Some(displacement) => {
                state.chain_offset = displacement;
                influenced.push(kind);
            }
            None => state.chain_offset = Vec2::ZERO,
        }
    }
    influenced
}

/// Drop every induced displacement (no drag, or chain mode off).
pub fn clear_chain(elements: &mut FaceElements) {
    for state in elements.iter_mut() {
        state.chain_offset = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dragging_face_moves_left_cheek() {
        let cfg = ChainConfig::default();
        let mut elements = FaceElements::new();
        elements.get_mut(ElementKind::Face).offset = Vec2::new(100.0, 0.0);

        let influenced = apply_chain_reaction(&mut elements, ElementKind::Face, &cfg);

        assert!(influenced.contains(&ElementKind::LeftCheek));
        let cheek = elements.get(ElementKind::LeftCheek).chain_offset;
        assert!(cheek.length() > 0.0, "left cheek should be displaced");
        // Pushed away from the face centre: left and down
        assert!(cheek.x < 0.0 && cheek.y > 0.0, "unexpected direction {:?}", cheek);
        assert_eq!(elements.get(ElementKind::Face).chain_offset, Vec2::ZERO);
    }

    #[test]
    fn far_elements_are_untouched() {
        let cfg = ChainConfig::default();
        let mut elements = FaceElements::new();
        elements.get_mut(ElementKind::LeftCheek).offset = Vec2::new(0.0, 100.0);

        let influenced = apply_chain_reaction(&mut elements, ElementKind::LeftCheek, &cfg);

        // Right cheek sits 100 units away from the left cheek
        assert!(!influenced.contains(&ElementKind::RightCheek));
        assert_eq!(elements.get(ElementKind::RightCheek).chain_offset, Vec2::ZERO);
        assert!(influenced.contains(&ElementKind::LeftEye));
    }

    #[test]
    fn magnitude_follows_falloff() {
        let cfg = ChainConfig::default();
        let d = (50.0f32 * 50.0 + 20.0 * 20.0).sqrt();
        let expected = (1.0 - d / 80.0) * 0.3 * 100.0;
        let got = influence(ElementKind::Face, ElementKind::LeftCheek, 100.0, &cfg).unwrap();
        assert!((got.length() - expected).abs() < 1e-3, "{} vs {}", got.length(), expected);
    }

    #[test]
    fn coincident_rest_positions_push_along_x() {
        let cfg = ChainConfig::default();
        let got = influence(ElementKind::Face, ElementKind::Nose, 10.0, &cfg).unwrap();
        assert!((got - Vec2::new(3.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn no_drag_distance_means_no_displacement() {
        let cfg = ChainConfig::default();
        let got = influence(ElementKind::Nose, ElementKind::Mouth, 0.0, &cfg).unwrap();
        assert_eq!(got, Vec2::ZERO);
    }
}

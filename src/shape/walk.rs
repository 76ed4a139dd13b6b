use glam::Vec3;
use rand::Rng;

/// Adjacent cube centers sit this far apart along the active axis, so the
/// 1-unit half-extent faces of neighbouring cubes stay flush.
pub const CUBE_SPACING: f32 = 2.0;

/// The three directions a chain segment can run along. The set is closed:
/// there is no representable "no axis" or "diagonal" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Successor axis at a segment boundary. The walk always turns, so the
    /// result is one of the two *other* axes, picked by the coin.
    pub fn turn(self, coin: bool) -> Axis {
        match (self, coin) {
            (Axis::Z, true) => Axis::Y,
            (Axis::Z, false) => Axis::X,
            (Axis::Y, true) => Axis::Z,
            (Axis::Y, false) => Axis::X,
            (Axis::X, true) => Axis::Z,
            (Axis::X, false) => Axis::Y,
        }
    }
}

/// Runs the constrained random walk and returns one cube center per placed
/// cube, in placement order.
///
/// Each segment places `length` cubes along the current axis, then draws two
/// coins in a fixed order: first the turn (the next axis is never the current
/// one), then an independent flip of the side sign. A zero-length segment
/// draws both coins without placing anything. Fixed seed in, fixed chain out.
pub fn walk<R: Rng>(segments: &[u32], rng: &mut R) -> Vec<Vec3> {
    let mut center = Vec3::ZERO;
    let mut axis = Axis::Z;
    let mut side = 1.0f32;

    let mut blocks = Vec::with_capacity(segments.iter().sum::<u32>() as usize);
    for &length in segments {
        let step = CUBE_SPACING * side * axis.unit();
        for _ in 0..length {
            blocks.push(center);
            center += step;
        }
        axis = axis.turn(rng.random());
        if rng.random() {
            side = -side;
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn turn_never_returns_current_axis() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            for coin in [false, true] {
                assert_ne!(axis.turn(coin), axis, "{axis:?} must always turn");
            }
        }
    }

    #[test]
    fn turn_covers_both_other_axes() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            assert_ne!(axis.turn(false), axis.turn(true));
        }
    }

    #[test]
    fn first_segment_runs_along_positive_z() {
        // The walk starts at the origin on the Z axis with side +1, so the
        // first segment is deterministic regardless of the RNG.
        let mut rng = StdRng::seed_from_u64(7);
        let blocks = walk(&[4], &mut rng);
        let expected: Vec<Vec3> = (0..4).map(|i| Vec3::new(0.0, 0.0, 2.0 * i as f32)).collect();
        assert_eq!(blocks, expected);
    }

    #[test]
    fn zero_length_segment_places_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        let blocks = walk(&[1, 0, 1], &mut rng);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], Vec3::ZERO);
        // The second cube lands where the first segment left the cursor; the
        // empty segment only consumed direction state.
        assert_eq!(blocks[1], Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn consecutive_cubes_in_a_segment_are_spaced_by_two() {
        let mut rng = StdRng::seed_from_u64(42);
        let blocks = walk(&[5, 3, 4], &mut rng);
        assert_eq!(blocks.len(), 12);
        for pair in blocks.windows(2) {
            let d = pair[1] - pair[0];
            // Either a straight step of length 2 along one axis, or a segment
            // boundary which also steps exactly one cube slot.
            assert_eq!(d.abs().max_element(), 2.0);
            let nonzero = [d.x, d.y, d.z].iter().filter(|c| **c != 0.0).count();
            assert_eq!(nonzero, 1, "steps stay axis-aligned: {d:?}");
        }
    }
}

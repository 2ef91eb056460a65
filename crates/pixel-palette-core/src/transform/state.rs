//! Quarter-turn rotation and flip state.

use serde::{Deserialize, Serialize};

/// Clockwise rotation in 90° steps.
///
/// Serialized as its degree value (0, 90, 180 or 270). Any integer angle
/// deserializes to the nearest quarter turn, normalized into [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Build a rotation from any integer angle.
    pub fn from_degrees(degrees: i32) -> Self {
        let quarter = (degrees.rem_euclid(360) + 45) / 90;
        match quarter % 4 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// One quarter turn clockwise.
    pub fn clockwise(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// One quarter turn counter-clockwise.
    pub fn counter_clockwise(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg270,
            Rotation::Deg90 => Rotation::Deg0,
            Rotation::Deg180 => Rotation::Deg90,
            Rotation::Deg270 => Rotation::Deg180,
        }
    }

    /// Returns true if this rotation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

impl From<i32> for Rotation {
    fn from(degrees: i32) -> Self {
        Rotation::from_degrees(degrees)
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Geometric transform applied before color processing.
///
/// Sixteen states: four rotations times two independent flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformState {
    pub rotation: Rotation,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
}

impl TransformState {
    /// Identity transform: no rotation, no flips.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    pub fn rotate_left(&mut self) {
        self.rotation = self.rotation.counter_clockwise();
    }

    pub fn rotate_right(&mut self) {
        self.rotation = self.rotation.clockwise();
    }

    pub fn toggle_flip_horizontal(&mut self) {
        self.flip_horizontal = !self.flip_horizontal;
    }

    pub fn toggle_flip_vertical(&mut self) {
        self.flip_vertical = !self.flip_vertical;
    }

    /// Output dimensions for a source of the given size.
    pub fn output_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        if self.rotation.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy)]
    enum Step {
        Left,
        Right,
        FlipH,
        FlipV,
    }

    fn step_strategy() -> impl Strategy<Value = Step> {
        prop_oneof![
            Just(Step::Left),
            Just(Step::Right),
            Just(Step::FlipH),
            Just(Step::FlipV),
        ]
    }

    fn apply(t: &mut TransformState, step: Step) {
        match step {
            Step::Left => t.rotate_left(),
            Step::Right => t.rotate_right(),
            Step::FlipH => t.toggle_flip_horizontal(),
            Step::FlipV => t.toggle_flip_vertical(),
        }
    }

    fn state_strategy() -> impl Strategy<Value = TransformState> {
        prop::collection::vec(step_strategy(), 0..12).prop_map(|steps| {
            let mut t = TransformState::new();
            for step in steps {
                apply(&mut t, step);
            }
            t
        })
    }

    proptest! {
        /// Property: Four left or four right turns return to the start.
        #[test]
        fn prop_four_turns_identity(start in state_strategy()) {
            let mut left = start;
            let mut right = start;
            for _ in 0..4 {
                left.rotate_left();
                right.rotate_right();
            }
            prop_assert_eq!(left, start);
            prop_assert_eq!(right, start);
        }

        /// Property: Left and right turns are inverses.
        #[test]
        fn prop_left_undoes_right(start in state_strategy()) {
            let mut t = start;
            t.rotate_right();
            t.rotate_left();
            prop_assert_eq!(t, start);
        }

        /// Property: Flips are involutions.
        #[test]
        fn prop_flip_involution(start in state_strategy()) {
            let mut t = start;
            t.toggle_flip_horizontal();
            t.toggle_flip_horizontal();
            prop_assert_eq!(t, start);

            t.toggle_flip_vertical();
            t.toggle_flip_vertical();
            prop_assert_eq!(t, start);
        }

        /// Property: Rotation always stays a non-negative multiple of 90 below 360.
        #[test]
        fn prop_rotation_domain(degrees in any::<i32>()) {
            let d = Rotation::from_degrees(degrees).degrees();
            prop_assert!(d < 360 && d % 90 == 0);
        }
    }
}

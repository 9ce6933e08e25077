use std::fmt;

/// Which single rotation was requested.
///
/// The names follow the child being lifted: [`Direction::Right`] brings a node's right child up
/// into its position, [`Direction::Left`] brings its left child up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Lift the left child. See [`rotate_left`][crate::rotate::rotate_left].
    Left,
    /// Lift the right child. See [`rotate_right`][crate::rotate::rotate_right].
    Right,
}

impl Direction {
    /// The child that has to exist for a rotation in this direction.
    pub(crate) fn pivot(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("rotate_left"),
            Self::Right => f.write_str("rotate_right"),
        }
    }
}

//! Interlocking edge model.
//!
//! Every piece boundary is one of three shapes: flat (the puzzle border),
//! a tab bulging out of the piece, or a blank cut into it. Two adjacent
//! pieces always carry mating shapes on their shared edge: a tab on one
//! side, a blank on the other.

/// The shape of a single piece edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edge {
    /// A straight edge, used on the outer border of the grid.
    #[default]
    Flat,
    /// A protrusion bulging outward from the piece.
    Tab,
    /// An indentation cut into the piece.
    Blank,
}

/// Error returned when a signed edge value is not -1, 0, or +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid edge sign {_0}, expected -1, 0, or +1")]
pub struct InvalidEdgeSign(#[error(not(source))] pub i8);

impl Edge {
    /// The signed value of this edge: +1 for a tab, -1 for a blank, 0 for
    /// flat.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::Flat => 0,
            Self::Tab => 1,
            Self::Blank => -1,
        }
    }

    /// Builds an edge from its signed value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEdgeSign`] for any value outside {-1, 0, +1}.
    pub const fn try_from_sign(sign: i8) -> Result<Self, InvalidEdgeSign> {
        match sign {
            0 => Ok(Self::Flat),
            1 => Ok(Self::Tab),
            -1 => Ok(Self::Blank),
            other => Err(InvalidEdgeSign(other)),
        }
    }

    /// The shape the neighboring piece must carry on the shared edge.
    ///
    /// A tab mates with a blank and vice versa; a flat edge has no
    /// neighbor and mates with itself.
    #[must_use]
    pub const fn mate(self) -> Self {
        match self {
            Self::Flat => Self::Flat,
            Self::Tab => Self::Blank,
            Self::Blank => Self::Tab,
        }
    }

    /// Whether this edge is flat.
    #[must_use]
    pub const fn is_flat(self) -> bool {
        matches!(self, Self::Flat)
    }
}

/// The four edge shapes of one piece, in top/right/bottom/left order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeProfile {
    /// Top edge.
    pub top: Edge,
    /// Right edge.
    pub right: Edge,
    /// Bottom edge.
    pub bottom: Edge,
    /// Left edge.
    pub left: Edge,
}

impl EdgeProfile {
    /// Creates a profile from its four edges.
    #[must_use]
    pub const fn new(top: Edge, right: Edge, bottom: Edge, left: Edge) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_round_trips() {
        for edge in [Edge::Flat, Edge::Tab, Edge::Blank] {
            assert_eq!(Edge::try_from_sign(edge.sign()), Ok(edge));
        }
    }

    #[test]
    fn out_of_range_signs_are_rejected() {
        assert_eq!(Edge::try_from_sign(2), Err(InvalidEdgeSign(2)));
        assert_eq!(Edge::try_from_sign(-3), Err(InvalidEdgeSign(-3)));
    }

    #[test]
    fn mate_negates_sign() {
        for edge in [Edge::Flat, Edge::Tab, Edge::Blank] {
            assert_eq!(edge.mate().sign(), -edge.sign());
        }
    }

    #[test]
    fn mate_is_an_involution() {
        for edge in [Edge::Flat, Edge::Tab, Edge::Blank] {
            assert_eq!(edge.mate().mate(), edge);
        }
    }
}

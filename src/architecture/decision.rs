use crate::pattern::{
    ArchitecturalDecision, Assigning, Combining, Connecting, DecisionPattern, DownSelecting,
    Permuting, Variable,
};
use crate::variable::IntegerVariable;
use rand::Rng;
use std::fmt;

/// One slot of an architecture: a pattern-encoded decision or a plain integer
///
/// Shared capabilities (copy, randomize, equality, rendering) dispatch over the
/// variant. Pattern-specific operations are reached through the `as_*`
/// accessors on the concrete variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// Bipartite assignment
    Assigning(Assigning),
    /// Bounded selectors
    Combining(Combining),
    /// Graph adjacency
    Connecting(Connecting),
    /// Subset selection
    DownSelecting(DownSelecting),
    /// Total ordering
    Permuting(Permuting),
    /// Bounded integer outside the pattern family
    Integer(IntegerVariable),
}

impl Decision {
    /// Pattern of this decision, or `None` for a plain integer
    pub fn pattern(&self) -> Option<DecisionPattern> {
        match self {
            Self::Assigning(inner) => Some(inner.pattern()),
            Self::Combining(inner) => Some(inner.pattern()),
            Self::Connecting(inner) => Some(inner.pattern()),
            Self::DownSelecting(inner) => Some(inner.pattern()),
            Self::Permuting(inner) => Some(inner.pattern()),
            Self::Integer(_) => None,
        }
    }
}

macro_rules! variant_accessors {
    ($($variant:ident, $ty:ty, $as_ref:ident, $as_mut:ident;)*) => {
        impl Decision {
            $(
                #[doc = concat!("Borrow as [`", stringify!($ty), "`] if this is that variant")]
                pub const fn $as_ref(&self) -> Option<&$ty> {
                    match self {
                        Self::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                #[doc = concat!("Mutably borrow as [`", stringify!($ty), "`] if this is that variant")]
                pub const fn $as_mut(&mut self) -> Option<&mut $ty> {
                    match self {
                        Self::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            )*
        }

        $(
            impl From<$ty> for Decision {
                fn from(inner: $ty) -> Self {
                    Self::$variant(inner)
                }
            }
        )*
    };
}

variant_accessors! {
    Assigning, Assigning, as_assigning, as_assigning_mut;
    Combining, Combining, as_combining, as_combining_mut;
    Connecting, Connecting, as_connecting, as_connecting_mut;
    DownSelecting, DownSelecting, as_downselecting, as_downselecting_mut;
    Permuting, Permuting, as_permuting, as_permuting_mut;
    Integer, IntegerVariable, as_integer, as_integer_mut;
}

impl Variable for Decision {
    fn number_of_variables(&self) -> usize {
        match self {
            Self::Assigning(inner) => inner.number_of_variables(),
            Self::Combining(inner) => inner.number_of_variables(),
            Self::Connecting(inner) => inner.number_of_variables(),
            Self::DownSelecting(inner) => inner.number_of_variables(),
            Self::Permuting(inner) => inner.number_of_variables(),
            Self::Integer(inner) => inner.number_of_variables(),
        }
    }

    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self {
            Self::Assigning(inner) => inner.randomize(rng),
            Self::Combining(inner) => inner.randomize(rng),
            Self::Connecting(inner) => inner.randomize(rng),
            Self::DownSelecting(inner) => inner.randomize(rng),
            Self::Permuting(inner) => inner.randomize(rng),
            Self::Integer(inner) => inner.randomize(rng),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assigning(inner) => fmt::Display::fmt(inner, f),
            Self::Combining(inner) => fmt::Display::fmt(inner, f),
            Self::Connecting(inner) => fmt::Display::fmt(inner, f),
            Self::DownSelecting(inner) => fmt::Display::fmt(inner, f),
            Self::Permuting(inner) => fmt::Display::fmt(inner, f),
            Self::Integer(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

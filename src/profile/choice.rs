use crate::model::EstimationError;

/// A closed set of selectable options with stable display labels.
///
/// `ALL` lists the options in the order they are offered to the user, and
/// `ordinal()` is the position of an option in `ALL`.
pub trait Choice: Copy + Eq + Ord + Sized + 'static {
    /// Human-readable name of the option set, used in error messages.
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    /// Position in `ALL`. `impl_choice!` must list variants in declaration order.
    fn ordinal(&self) -> usize;

    /// Parses a display label (case-insensitive, surrounding whitespace ignored).
    fn parse_label(s: &str) -> Result<Self, EstimationError> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EstimationError::unknown_key(Self::KIND, wanted))
    }
}

/// Implements `Choice`, `Display` and `FromStr` for a fieldless enum.
macro_rules! impl_choice {
    ($ty:ident, $kind:literal, [$($variant:ident => $label:literal),+ $(,)?]) => {
        impl $crate::profile::Choice for $ty {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            fn ordinal(&self) -> usize {
                *self as usize
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::profile::Choice::label(self))
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::model::EstimationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::profile::Choice>::parse_label(s)
            }
        }
    };
}

pub(crate) use impl_choice;

//! Closed string-labelled enums shared by the wire format and the views.

use crate::error::DomainError;

/// Implements `as_str`, `ALL`, `Display` and `FromStr` for a fieldless enum
/// whose variants map one-to-one onto snake_case wire labels.
macro_rules! label_enum {
    ($t:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $t {
            pub const ALL: &'static [$t] = &[$($t::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($t::$variant => $label),+
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl core::str::FromStr for $t {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $t::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| $crate::label::unknown_label(stringify!($t), wanted))
            }
        }
    };
}

pub(crate) use label_enum;

pub(crate) fn unknown_label(kind: &str, raw: &str) -> DomainError {
    DomainError::validation(format!("unknown {kind} '{raw}'"))
}

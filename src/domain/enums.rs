//! Closed code enumerations for the dashboard API
//!
//! The remote API represents small closed categories (blood group, priority,
//! request status, ...) as integer codes. This module owns the canonical
//! code-to-label tables. Every enum carries an `Unknown(i64)` variant so a
//! code the crate doesn't know renders as `"<Category> <code>"` instead of
//! failing the cycle — schema drift degrades to a label, never to an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines a code enumeration with its label table and `Unknown` fallback.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $category:literal {
            $($variant:ident = $code:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "i64", into = "i64")]
        pub enum $name {
            $($variant,)+
            /// A code outside the known table, kept verbatim
            Unknown(i64),
        }

        impl $name {
            /// Map a raw integer code to the enumeration
            pub fn from_code(code: i64) -> Self {
                match code {
                    $($code => $name::$variant,)+
                    other => $name::Unknown(other),
                }
            }

            /// The raw integer code
            pub fn code(&self) -> i64 {
                match self {
                    $($name::$variant => $code,)+
                    $name::Unknown(code) => *code,
                }
            }

            /// Human-readable label; unknown codes render as
            /// `"<Category> <code>"`
            pub fn label(&self) -> String {
                match self {
                    $($name::$variant => $label.to_string(),)+
                    $name::Unknown(code) => format!(concat!($category, " {}"), code),
                }
            }
        }

        impl From<i64> for $name {
            fn from(code: i64) -> Self {
                $name::from_code(code)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> i64 {
                value.code()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.label())
            }
        }
    };
}

code_enum! {
    /// ABO/Rh blood group (8 known codes)
    BloodGroup, "Blood Group" {
        AbPositive = 1 => "AB+",
        AbNegative = 2 => "AB-",
        APositive = 3 => "A+",
        ANegative = 4 => "A-",
        BPositive = 5 => "B+",
        BNegative = 6 => "B-",
        OPositive = 7 => "O+",
        ONegative = 8 => "O-",
    }
}

code_enum! {
    /// Kind of donation held in inventory or requested
    DonationType, "Donation Type" {
        WholeBlood = 1 => "Whole Blood",
        Platelet = 2 => "Platelet",
        Plasma = 3 => "Plasma",
    }
}

code_enum! {
    /// Urgency of a blood-donation request
    Priority, "Priority" {
        Low = 1 => "Low",
        Normal = 2 => "Normal",
        Critical = 3 => "Critical",
    }
}

code_enum! {
    /// Lifecycle status of a blood-donation request
    RequestStatus, "Status" {
        Initiated = 0 => "Initiated",
        Waiting = 1 => "Waiting",
        PartiallyResolved = 2 => "Partially Resolved",
        Resolved = 3 => "Resolved",
        Canceled = 4 => "Canceled",
    }
}

code_enum! {
    /// How a donor prefers to be contacted
    ContactMethod, "Contact Method" {
        Call = 1 => "Call",
        Text = 2 => "Text",
        All = 3 => "All",
    }
}

code_enum! {
    /// Time window a donor is available for donation
    Availability, "Availability" {
        Morning = 1 => "Morning",
        Afternoon = 2 => "Afternoon",
        Day = 3 => "Day",
        Night = 4 => "Night",
        AllTime = 5 => "All Time",
    }
}

impl BloodGroup {
    /// All eight known blood groups in canonical code order
    pub fn all() -> [BloodGroup; 8] {
        [
            BloodGroup::AbPositive,
            BloodGroup::AbNegative,
            BloodGroup::APositive,
            BloodGroup::ANegative,
            BloodGroup::BPositive,
            BloodGroup::BNegative,
            BloodGroup::OPositive,
            BloodGroup::ONegative,
        ]
    }

    /// Parse a string map key as emitted by the stats endpoint ("1".."8")
    pub fn from_key(key: &str) -> Self {
        match key.parse::<i64>() {
            Ok(code) => BloodGroup::from_code(code),
            // Some deployments key stock maps by label instead of code
            Err(_) => BloodGroup::all()
                .into_iter()
                .find(|g| g.label() == key)
                .unwrap_or(BloodGroup::Unknown(-1)),
        }
    }
}

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! value_type {
    ($name:ident, $check:ident, $err:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: &str) -> Result<Self, CoreError> {
                let trimmed = raw.trim();
                if !$check(trimmed) {
                    return Err($err);
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

value_type!(Name, is_valid_name, CoreError::InvalidName);
value_type!(ProfileId, is_valid_profile_id, CoreError::InvalidProfileId);
value_type!(Height, is_valid_height, CoreError::InvalidHeight);
value_type!(Weight, is_valid_weight, CoreError::InvalidWeight);
value_type!(Calorie, is_valid_calorie, CoreError::InvalidCalorie);

macro_rules! from_static {
    ($($name:ident),*) => {
        $(
            impl $name {
                /// Wraps a compile-time constant without validating it.
                pub(crate) fn from_static(raw: &'static str) -> Self {
                    Self(raw.to_string())
                }
            }
        )*
    };
}

from_static!(Name, ProfileId, Height, Weight);

impl Height {
    pub fn centimetres(&self) -> u32 {
        digits_value(&self.0)
    }
}

impl Weight {
    pub fn kilograms(&self) -> u32 {
        digits_value(&self.0)
    }
}

impl Calorie {
    pub fn kcal(&self) -> u32 {
        digits_value(&self.0)
    }
}

fn is_valid_name(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == ' ')
}

fn is_valid_profile_id(value: &str) -> bool {
    digits_between(value, 4, 4)
}

fn is_valid_height(value: &str) -> bool {
    digits_between(value, 2, 3)
}

fn is_valid_weight(value: &str) -> bool {
    digits_between(value, 2, 3)
}

fn is_valid_calorie(value: &str) -> bool {
    digits_between(value, 1, 5)
}

fn digits_between(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

// Only called on values that passed `digits_between`, so at most five digits.
fn digits_value(value: &str) -> u32 {
    value
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

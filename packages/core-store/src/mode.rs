//! Store representation modes.

use std::fmt;
use std::str::FromStr;

use crate::Error;

pub const MODE_FLAT: &str = "flat";
pub const MODE_NESTED: &str = "nested";

/// How a store's data is shaped.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Mode {
    /// Every key is a literal string, dots included.
    Flat,
    /// Keys form a tree and dotted keys are traversal paths.
    #[default]
    Nested,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Flat => MODE_FLAT,
            Mode::Nested => MODE_NESTED,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MODE_FLAT => Ok(Mode::Flat),
            MODE_NESTED => Ok(Mode::Nested),
            _ => Err(Error::InvalidMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for Mode {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

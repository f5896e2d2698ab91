//! Combination modes and their resolution
use std::fmt;
use std::str::FromStr;
use crate::error::MultoError;

/// Mode used when neither operand of a two-operand combination sets one
pub const DEFAULT_MODE:Mode = Mode::Flat;

/// Policy for combining two wrappers
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum Mode {
    /// Cross product, the right operand is the outer loop
    Flat,
    /// One group per right element, each group a flat combination against the whole left operand
    Nest,
    /// Pairwise by position, lengths must agree
    Zip
}
impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Flat => "flat",
            Mode::Nest => "nest",
            Mode::Zip => "zip"
        }
    }

    /// Returns the mode two wrappers combine under when the caller gives none
    /// # Arguments
    /// * `left` - mode of the left operand
    /// * `right` - mode of the right operand
    ///
    /// # Errors
    ///
    /// Returns [`MultoError::IncompatibleModes`] when both are set and differ
    pub fn resolve(left:Option<Mode>,right:Option<Mode>) -> Result<Mode,MultoError> {
        match (left,right) {
            (None,None) => Ok(DEFAULT_MODE),
            (None,Some(m)) | (Some(m),None) => Ok(m),
            (Some(l),Some(r)) if l == r => Ok(l),
            (Some(l),Some(r)) => {
                log::debug!("refusing to combine a {} multo with a {} multo",l,r);
                Err(MultoError::IncompatibleModes(l,r))
            }
        }
    }
}
impl Default for Mode {
    fn default() -> Mode {
        DEFAULT_MODE
    }
}
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,"{}",self.as_str())
    }
}
/// Parses a mode short-code.
///
/// Only the first four characters count, and anything starting with `zip`
/// means zip, so `"flatten"`, `"nested"` and `"zipped"` are all accepted.
impl FromStr for Mode {
    type Err = MultoError;

    fn from_str(s: &str) -> Result<Mode, MultoError> {
        let code = s.chars().take(4).collect::<String>();

        if code.starts_with("zip") {
            return Ok(Mode::Zip);
        }

        match &*code {
            "flat" => Ok(Mode::Flat),
            "nest" => Ok(Mode::Nest),
            _ => Err(MultoError::InvalidMode(s.to_string()))
        }
    }
}

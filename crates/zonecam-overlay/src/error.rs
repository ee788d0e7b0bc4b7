use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum ZoneConfigError {
    MissingOrInvalidField(&'static str),
    InvalidZone { name: String },
    InvalidColor { name: String },
}

impl fmt::Display for ZoneConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneConfigError::MissingOrInvalidField(field) => {
                write!(f, "configuration field {field} is missing or invalid")
            }
            ZoneConfigError::InvalidZone { name } => {
                write!(f, "zone {name}: polygon must be a list of [x, y] pairs")
            }
            ZoneConfigError::InvalidColor { name } => {
                write!(f, "zone {name}: color must be an [r, g, b] triple (0-255)")
            }
        }
    }
}

impl std::error::Error for ZoneConfigError {}

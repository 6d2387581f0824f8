//! Framework-level DPP codes.
//!
//! These are the stable values the rest of the wifi stack sees.  Every
//! enumeration that can be produced from an unmapped wire value has an
//! `Invalid` member whose integer form is [`INVALID_CODE`].

use core::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel integer for a wire value with no framework counterpart.
pub const INVALID_CODE: i32 = -1;

/// Kind of a generic DPP success event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum DppEventType {
    ConfigurationSent = 0,
    ConfigurationApplied = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum DppProgressCode {
    AuthenticationSuccess = 0,
    ResponsePending = 1,
    Invalid = INVALID_CODE,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum DppFailureCode {
    InvalidUri = 0,
    Authentication = 1,
    NotCompatible = 2,
    Configuration = 3,
    Busy = 4,
    Timeout = 5,
    Failure = 6,
    NotSupported = 7,
    Invalid = INVALID_CODE,
}

impl DppEventType {
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl DppProgressCode {
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl DppFailureCode {
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for DppProgressCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthenticationSuccess => write!(f, "authentication success"),
            Self::ResponsePending => write!(f, "response pending"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}

impl fmt::Display for DppFailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUri => write!(f, "invalid URI"),
            Self::Authentication => write!(f, "authentication"),
            Self::NotCompatible => write!(f, "not compatible"),
            Self::Configuration => write!(f, "configuration"),
            Self::Busy => write!(f, "busy"),
            Self::Timeout => write!(f, "timeout"),
            Self::Failure => write!(f, "failure"),
            Self::NotSupported => write!(f, "not supported"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}

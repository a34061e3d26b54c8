/*++

Licensed under the Apache-2.0 license.

File Name:

    status.rs

Abstract:

    File contains the OTP status report and hardware cause classification

--*/

use crate::error::{OtpError, OtpResult};
use crate::variant::NUM_ERROR_CAUSES;

pub use crate::variant::StatusCode;

/// Hardware-reported cause of a status condition, as encoded in the
/// per-condition cause registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum OtpCause {
    /// No error occurred.
    None = 0,

    /// An otherwise unspecified macro error.
    MacroUnspecified = 1,

    /// A read failed but was corrected by ECC.
    MacroRecoverableRead = 2,

    /// A read failed and was beyond ECC correction.
    MacroUnrecoverableRead = 3,

    /// A blank-check before programming failed.
    MacroBlankCheckFailed = 4,

    /// An access to a locked partition was attempted.
    LockedAccess = 5,

    /// A background integrity or consistency check failed.
    BackgroundCheckFailed = 6,

    /// A hardware FSM reached a bad state.
    FsmBadState = 7,
}

impl OtpCause {
    /// Classify a raw cause register value. An unlisted value indicates a
    /// hardware/software contract mismatch, not a recoverable condition.
    pub(crate) fn decode(raw: u32) -> OtpResult<OtpCause> {
        match raw {
            0 => Ok(OtpCause::None),
            1 => Ok(OtpCause::MacroUnspecified),
            2 => Ok(OtpCause::MacroRecoverableRead),
            3 => Ok(OtpCause::MacroUnrecoverableRead),
            4 => Ok(OtpCause::MacroBlankCheckFailed),
            5 => Ok(OtpCause::LockedAccess),
            6 => Ok(OtpCause::BackgroundCheckFailed),
            7 => Ok(OtpCause::FsmBadState),
            _ => Err(OtpError::Fault),
        }
    }
}

impl StatusCode {
    /// Whether this condition carries a cause register.
    pub fn has_cause(self) -> bool {
        (self as usize) < NUM_ERROR_CAUSES
    }
}

/// Snapshot of the controller status register, with the hardware cause for
/// every asserted causal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpStatus {
    pub(crate) codes: u32,
    pub(crate) causes: [OtpCause; NUM_ERROR_CAUSES],
}

impl OtpStatus {
    pub(crate) fn empty() -> OtpStatus {
        OtpStatus {
            codes: 0,
            causes: [OtpCause::None; NUM_ERROR_CAUSES],
        }
    }

    /// Whether the given condition was asserted.
    pub fn is_set(&self, code: StatusCode) -> bool {
        self.codes & (1 << code as u32) != 0
    }

    /// The recorded cause for a causal condition; `None` for conditions
    /// that carry no cause register.
    pub fn cause(&self, code: StatusCode) -> Option<OtpCause> {
        if code.has_cause() {
            Some(self.causes[code as usize])
        } else {
            None
        }
    }
}

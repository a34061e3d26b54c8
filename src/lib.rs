/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    Driver for the one-time-programmable (OTP) memory controller.

--*/

#![cfg_attr(not(test), no_std)]

mod error;
mod otp_ctrl;
mod partition;
pub mod reg;
mod status;
mod variant;

pub use error::{OtpError, OtpResult};
pub use otp_ctrl::{CheckConfig, OtpCtrl};
pub use partition::{OtpPartition, DIGEST_SIZE};
pub use status::{OtpCause, OtpStatus, StatusCode};

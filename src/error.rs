/*++

Licensed under the Apache-2.0 license.

File Name:

    error.rs

Abstract:

    File contains the error taxonomy for the OTP controller API

--*/

/// Failure classes reported by every fallible OTP controller operation.
///
/// No operation retries internally; each failure is returned synchronously
/// and the caller decides whether to retry or abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpError {
    /// Structurally invalid input: a raw partition value outside the
    /// configured set, a capability the partition does not have, or a digest
    /// value of the wrong polarity.
    InvalidArgument,

    /// The operation is forbidden by a one-way hardware latch. Not retryable
    /// until the next hardware reset.
    Locked,

    /// The address violates the partition's access granule.
    Unaligned,

    /// The address or length falls outside the partition bounds.
    OutOfRange,

    /// Programmer misuse or a hardware contract violation: wrong access width
    /// for the partition, writing the lifecycle partition, digest operations
    /// on a digestless partition, an unrecognized hardware cause encoding, or
    /// a digest register pair that reads back as zero.
    Fault,
}

pub type OtpResult<T> = Result<T, OtpError>;

/*++

Licensed under the Apache-2.0 license.

File Name:

    earlgrey.rs

Abstract:

    File contains the Earlgrey OTP partition map and status condition set

--*/

use crate::partition::PartitionInfo;

/// OTP partitions exposed by the Earlgrey controller, in OTP address order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum OtpPartition {
    /// Vendor test region
    VendorTest = 0,

    /// Software configuration written by the silicon creator
    CreatorSwCfg = 1,

    /// Software configuration written by the silicon owner
    OwnerSwCfg = 2,

    /// Code-signing key slots for the creator boot stages
    RotCreatorAuthCodesign = 3,

    /// Key revocation state for the creator boot stages
    RotCreatorAuthState = 4,

    /// Hardware configuration, group 0
    HwCfg0 = 5,

    /// Hardware configuration, group 1
    HwCfg1 = 6,

    /// Secret partition, test unlock tokens
    Secret0 = 7,

    /// Secret partition, obfuscation keys
    Secret1 = 8,

    /// Secret partition, creator root keys
    Secret2 = 9,

    /// Lifecycle state; never directly writable
    LifeCycle = 10,
}

impl OtpPartition {
    pub const ALL: [OtpPartition; 11] = [
        OtpPartition::VendorTest,
        OtpPartition::CreatorSwCfg,
        OtpPartition::OwnerSwCfg,
        OtpPartition::RotCreatorAuthCodesign,
        OtpPartition::RotCreatorAuthState,
        OtpPartition::HwCfg0,
        OtpPartition::HwCfg1,
        OtpPartition::Secret0,
        OtpPartition::Secret1,
        OtpPartition::Secret2,
        OtpPartition::LifeCycle,
    ];
}

pub(crate) const PARTITIONS: [PartitionInfo; 11] = [
    // VendorTest
    PartitionInfo {
        start_addr: 0,
        len: 64,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // CreatorSwCfg
    PartitionInfo {
        start_addr: 64,
        len: 712,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // OwnerSwCfg
    PartitionInfo {
        start_addr: 776,
        len: 632,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // RotCreatorAuthCodesign
    PartitionInfo {
        start_addr: 1408,
        len: 136,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // RotCreatorAuthState
    PartitionInfo {
        start_addr: 1544,
        len: 40,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // HwCfg0
    PartitionInfo {
        start_addr: 1584,
        len: 80,
        align_mask: 0x3,
        is_software: false,
        has_digest: true,
        is_lifecycle: false,
    },
    // HwCfg1
    PartitionInfo {
        start_addr: 1664,
        len: 40,
        align_mask: 0x3,
        is_software: false,
        has_digest: true,
        is_lifecycle: false,
    },
    // Secret0
    PartitionInfo {
        start_addr: 1704,
        len: 40,
        align_mask: 0x7,
        is_software: false,
        has_digest: true,
        is_lifecycle: false,
    },
    // Secret1
    PartitionInfo {
        start_addr: 1744,
        len: 88,
        align_mask: 0x7,
        is_software: false,
        has_digest: true,
        is_lifecycle: false,
    },
    // Secret2
    PartitionInfo {
        start_addr: 1832,
        len: 128,
        align_mask: 0x7,
        is_software: false,
        has_digest: true,
        is_lifecycle: false,
    },
    // LifeCycle
    PartitionInfo {
        start_addr: 1960,
        len: 88,
        align_mask: 0x3,
        is_software: false,
        has_digest: false,
        is_lifecycle: true,
    },
];

/// Index of each partition's software read-lock register, for partitions
/// that have one.
pub(crate) const READ_LOCKS: [Option<usize>; 11] = [
    Some(0), // VendorTest
    Some(1), // CreatorSwCfg
    Some(2), // OwnerSwCfg
    Some(3), // RotCreatorAuthCodesign
    Some(4), // RotCreatorAuthState
    None,    // HwCfg0
    None,    // HwCfg1
    None,    // Secret0
    None,    // Secret1
    None,    // Secret2
    None,    // LifeCycle
];

/// Index of each partition's digest register pair, for partitions that
/// have a digest.
pub(crate) const DIGESTS: [Option<usize>; 11] = [
    Some(0), // VendorTest
    Some(1), // CreatorSwCfg
    Some(2), // OwnerSwCfg
    Some(3), // RotCreatorAuthCodesign
    Some(4), // RotCreatorAuthState
    Some(5), // HwCfg0
    Some(6), // HwCfg1
    Some(7), // Secret0
    Some(8), // Secret1
    Some(9), // Secret2
    None,    // LifeCycle
];

/// Status conditions, in status register bit order. Conditions carrying a
/// hardware cause register form a contiguous prefix of the ordering; the
/// cause register address is a linear offset from the condition index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum StatusCode {
    VendorTestError = 0,
    CreatorSwCfgError = 1,
    OwnerSwCfgError = 2,
    RotCreatorAuthCodesignError = 3,
    RotCreatorAuthStateError = 4,
    HwCfg0Error = 5,
    HwCfg1Error = 6,
    Secret0Error = 7,
    Secret1Error = 8,
    Secret2Error = 9,
    LifeCycleError = 10,
    DaiError = 11,
    LciError = 12,
    TimeoutError = 13,
    LfsrFsmError = 14,
    ScramblingFsmError = 15,
    KeyDerivFsmError = 16,
    BusIntegError = 17,
    DaiIdle = 18,
    CheckPending = 19,
}

impl StatusCode {
    pub const ALL: [StatusCode; 20] = [
        StatusCode::VendorTestError,
        StatusCode::CreatorSwCfgError,
        StatusCode::OwnerSwCfgError,
        StatusCode::RotCreatorAuthCodesignError,
        StatusCode::RotCreatorAuthStateError,
        StatusCode::HwCfg0Error,
        StatusCode::HwCfg1Error,
        StatusCode::Secret0Error,
        StatusCode::Secret1Error,
        StatusCode::Secret2Error,
        StatusCode::LifeCycleError,
        StatusCode::DaiError,
        StatusCode::LciError,
        StatusCode::TimeoutError,
        StatusCode::LfsrFsmError,
        StatusCode::ScramblingFsmError,
        StatusCode::KeyDerivFsmError,
        StatusCode::BusIntegError,
        StatusCode::DaiIdle,
        StatusCode::CheckPending,
    ];
}

/// Number of conditions with an associated cause register: one per
/// partition, plus the DAI and LCI errors.
pub(crate) const NUM_ERROR_CAUSES: usize = 13;

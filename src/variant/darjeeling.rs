/*++

Licensed under the Apache-2.0 license.

File Name:

    darjeeling.rs

Abstract:

    File contains the Darjeeling OTP partition map and status condition set

--*/

use crate::partition::PartitionInfo;

/// OTP partitions exposed by the Darjeeling controller, in OTP address order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum OtpPartition {
    /// Vendor test region
    VendorTest = 0,

    /// Software configuration written by the silicon creator
    CreatorSwCfg = 1,

    /// Software configuration written by the silicon owner
    OwnerSwCfg = 2,

    /// Ownership transfer slot state; not integrity protected
    OwnershipSlotState = 3,

    /// Creator authentication keys
    RotCreatorAuth = 4,

    /// Owner authentication key slot 0
    RotOwnerAuthSlot0 = 5,

    /// Owner authentication key slot 1
    RotOwnerAuthSlot1 = 6,

    /// Platform integrator authentication key slot 0
    PlatIntegAuthSlot0 = 7,

    /// Platform integrator authentication key slot 1
    PlatIntegAuthSlot1 = 8,

    /// Platform owner authentication key slot 0
    PlatOwnerAuthSlot0 = 9,

    /// Platform owner authentication key slot 1
    PlatOwnerAuthSlot1 = 10,

    /// Platform owner authentication key slot 2
    PlatOwnerAuthSlot2 = 11,

    /// Platform owner authentication key slot 3
    PlatOwnerAuthSlot3 = 12,

    /// Raw non-volatile scratch; not integrity protected
    ExtNvm = 13,

    /// ROM patch code region
    RomPatch = 14,

    /// Hardware configuration, group 0
    HwCfg0 = 15,

    /// Hardware configuration, group 1
    HwCfg1 = 16,

    /// Secret partition, test unlock tokens
    Secret0 = 17,

    /// Secret partition, obfuscation keys
    Secret1 = 18,

    /// Secret partition, creator root keys
    Secret2 = 19,

    /// Secret partition, owner root keys
    Secret3 = 20,

    /// Lifecycle state; never directly writable
    LifeCycle = 21,
}

impl OtpPartition {
    pub const ALL: [OtpPartition; 22] = [
        OtpPartition::VendorTest,
        OtpPartition::CreatorSwCfg,
        OtpPartition::OwnerSwCfg,
        OtpPartition::OwnershipSlotState,
        OtpPartition::RotCreatorAuth,
        OtpPartition::RotOwnerAuthSlot0,
        OtpPartition::RotOwnerAuthSlot1,
        OtpPartition::PlatIntegAuthSlot0,
        OtpPartition::PlatIntegAuthSlot1,
        OtpPartition::PlatOwnerAuthSlot0,
        OtpPartition::PlatOwnerAuthSlot1,
        OtpPartition::PlatOwnerAuthSlot2,
        OtpPartition::PlatOwnerAuthSlot3,
        OtpPartition::ExtNvm,
        OtpPartition::RomPatch,
        OtpPartition::HwCfg0,
        OtpPartition::HwCfg1,
        OtpPartition::Secret0,
        OtpPartition::Secret1,
        OtpPartition::Secret2,
        OtpPartition::Secret3,
        OtpPartition::LifeCycle,
    ];
}

pub(crate) const PARTITIONS: [PartitionInfo; 22] = [
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
        len: 424,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // OwnerSwCfg
    PartitionInfo {
        start_addr: 488,
        len: 424,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // OwnershipSlotState
    PartitionInfo {
        start_addr: 912,
        len: 48,
        align_mask: 0x3,
        is_software: true,
        has_digest: false,
        is_lifecycle: false,
    },
    // RotCreatorAuth
    PartitionInfo {
        start_addr: 960,
        len: 464,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // RotOwnerAuthSlot0
    PartitionInfo {
        start_addr: 1424,
        len: 120,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // RotOwnerAuthSlot1
    PartitionInfo {
        start_addr: 1544,
        len: 120,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // PlatIntegAuthSlot0
    PartitionInfo {
        start_addr: 1664,
        len: 120,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // PlatIntegAuthSlot1
    PartitionInfo {
        start_addr: 1784,
        len: 120,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // PlatOwnerAuthSlot0
    PartitionInfo {
        start_addr: 1904,
        len: 120,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // PlatOwnerAuthSlot1
    PartitionInfo {
        start_addr: 2024,
        len: 120,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // PlatOwnerAuthSlot2
    PartitionInfo {
        start_addr: 2144,
        len: 120,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // PlatOwnerAuthSlot3
    PartitionInfo {
        start_addr: 2264,
        len: 120,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // ExtNvm
    PartitionInfo {
        start_addr: 2384,
        len: 1024,
        align_mask: 0x3,
        is_software: true,
        has_digest: false,
        is_lifecycle: false,
    },
    // RomPatch
    PartitionInfo {
        start_addr: 3408,
        len: 512,
        align_mask: 0x3,
        is_software: true,
        has_digest: true,
        is_lifecycle: false,
    },
    // HwCfg0
    PartitionInfo {
        start_addr: 3920,
        len: 80,
        align_mask: 0x3,
        is_software: false,
        has_digest: true,
        is_lifecycle: false,
    },
    // HwCfg1
    PartitionInfo {
        start_addr: 4000,
        len: 40,
        align_mask: 0x3,
        is_software: false,
        has_digest: true,
        is_lifecycle: false,
    },
    // Secret0
    PartitionInfo {
        start_addr: 4040,
        len: 40,
        align_mask: 0x7,
        is_software: false,
        has_digest: true,
        is_lifecycle: false,
    },
    // Secret1
    PartitionInfo {
        start_addr: 4080,
        len: 88,
        align_mask: 0x7,
        is_software: false,
        has_digest: true,
        is_lifecycle: false,
    },
    // Secret2
    PartitionInfo {
        start_addr: 4168,
        len: 120,
        align_mask: 0x7,
        is_software: false,
        has_digest: true,
        is_lifecycle: false,
    },
    // Secret3
    PartitionInfo {
        start_addr: 4288,
        len: 64,
        align_mask: 0x7,
        is_software: false,
        has_digest: true,
        is_lifecycle: false,
    },
    // LifeCycle
    PartitionInfo {
        start_addr: 4352,
        len: 88,
        align_mask: 0x3,
        is_software: false,
        has_digest: false,
        is_lifecycle: true,
    },
];

/// Index of each partition's software read-lock register, for partitions
/// that have one.
pub(crate) const READ_LOCKS: [Option<usize>; 22] = [
    Some(0),  // VendorTest
    Some(1),  // CreatorSwCfg
    Some(2),  // OwnerSwCfg
    Some(3),  // OwnershipSlotState
    Some(4),  // RotCreatorAuth
    Some(5),  // RotOwnerAuthSlot0
    Some(6),  // RotOwnerAuthSlot1
    Some(7),  // PlatIntegAuthSlot0
    Some(8),  // PlatIntegAuthSlot1
    Some(9),  // PlatOwnerAuthSlot0
    Some(10), // PlatOwnerAuthSlot1
    Some(11), // PlatOwnerAuthSlot2
    Some(12), // PlatOwnerAuthSlot3
    Some(13), // ExtNvm
    Some(14), // RomPatch
    None,     // HwCfg0
    None,     // HwCfg1
    None,     // Secret0
    None,     // Secret1
    None,     // Secret2
    None,     // Secret3
    None,     // LifeCycle
];

/// Index of each partition's digest register pair, for partitions that
/// have a digest.
pub(crate) const DIGESTS: [Option<usize>; 22] = [
    Some(0),  // VendorTest
    Some(1),  // CreatorSwCfg
    Some(2),  // OwnerSwCfg
    None,     // OwnershipSlotState
    Some(3),  // RotCreatorAuth
    Some(4),  // RotOwnerAuthSlot0
    Some(5),  // RotOwnerAuthSlot1
    Some(6),  // PlatIntegAuthSlot0
    Some(7),  // PlatIntegAuthSlot1
    Some(8),  // PlatOwnerAuthSlot0
    Some(9),  // PlatOwnerAuthSlot1
    Some(10), // PlatOwnerAuthSlot2
    Some(11), // PlatOwnerAuthSlot3
    None,     // ExtNvm
    Some(12), // RomPatch
    Some(13), // HwCfg0
    Some(14), // HwCfg1
    Some(15), // Secret0
    Some(16), // Secret1
    Some(17), // Secret2
    Some(18), // Secret3
    None,     // LifeCycle
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
    OwnershipSlotStateError = 3,
    RotCreatorAuthError = 4,
    RotOwnerAuthSlot0Error = 5,
    RotOwnerAuthSlot1Error = 6,
    PlatIntegAuthSlot0Error = 7,
    PlatIntegAuthSlot1Error = 8,
    PlatOwnerAuthSlot0Error = 9,
    PlatOwnerAuthSlot1Error = 10,
    PlatOwnerAuthSlot2Error = 11,
    PlatOwnerAuthSlot3Error = 12,
    ExtNvmError = 13,
    RomPatchError = 14,
    HwCfg0Error = 15,
    HwCfg1Error = 16,
    Secret0Error = 17,
    Secret1Error = 18,
    Secret2Error = 19,
    Secret3Error = 20,
    LifeCycleError = 21,
    DaiError = 22,
    LciError = 23,
    TimeoutError = 24,
    LfsrFsmError = 25,
    ScramblingFsmError = 26,
    KeyDerivFsmError = 27,
    BusIntegError = 28,
    DaiIdle = 29,
    CheckPending = 30,
}

impl StatusCode {
    pub const ALL: [StatusCode; 31] = [
        StatusCode::VendorTestError,
        StatusCode::CreatorSwCfgError,
        StatusCode::OwnerSwCfgError,
        StatusCode::OwnershipSlotStateError,
        StatusCode::RotCreatorAuthError,
        StatusCode::RotOwnerAuthSlot0Error,
        StatusCode::RotOwnerAuthSlot1Error,
        StatusCode::PlatIntegAuthSlot0Error,
        StatusCode::PlatIntegAuthSlot1Error,
        StatusCode::PlatOwnerAuthSlot0Error,
        StatusCode::PlatOwnerAuthSlot1Error,
        StatusCode::PlatOwnerAuthSlot2Error,
        StatusCode::PlatOwnerAuthSlot3Error,
        StatusCode::ExtNvmError,
        StatusCode::RomPatchError,
        StatusCode::HwCfg0Error,
        StatusCode::HwCfg1Error,
        StatusCode::Secret0Error,
        StatusCode::Secret1Error,
        StatusCode::Secret2Error,
        StatusCode::Secret3Error,
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
pub(crate) const NUM_ERROR_CAUSES: usize = 24;

/*++

Licensed under the Apache-2.0 license.

File Name:

    partition.rs

Abstract:

    File contains the OTP partition registry and address translation

--*/

use crate::error::{OtpError, OtpResult};
use crate::variant;

pub use crate::variant::OtpPartition;

/// Size in bytes of a partition digest slot.
pub const DIGEST_SIZE: u32 = 8;

/// Immutable description of one OTP partition.
pub(crate) struct PartitionInfo {
    /// The absolute OTP address at which this partition starts.
    pub start_addr: u32,

    /// The length of this partition, in bytes, including the digest.
    ///
    /// If the partition has a digest, it lives at address
    /// `start_addr + len - DIGEST_SIZE`.
    pub len: u32,

    /// The alignment mask for this partition.
    ///
    /// A valid address for this partition must be such that
    /// `addr & align_mask == 0`.
    pub align_mask: u32,

    /// Whether this is a software-managed partition with a software-managed
    /// digest.
    pub is_software: bool,

    /// Whether this partition has a digest field.
    pub has_digest: bool,

    /// Whether this partition is the lifecycle partition.
    pub is_lifecycle: bool,
}

impl OtpPartition {
    pub(crate) fn info(self) -> &'static PartitionInfo {
        &variant::PARTITIONS[self as usize]
    }

    pub(crate) fn read_lock_index(self) -> Option<usize> {
        variant::READ_LOCKS[self as usize]
    }

    pub(crate) fn digest_index(self) -> Option<usize> {
        variant::DIGESTS[self as usize]
    }

    /// Translate an absolute OTP address into an offset within this
    /// partition. Pure query; touches no registers.
    pub fn relative_address(self, abs_address: u32) -> OtpResult<u32> {
        let info = self.info();

        if abs_address & info.align_mask != 0 {
            return Err(OtpError::Unaligned);
        }

        if abs_address < info.start_addr {
            return Err(OtpError::OutOfRange);
        }

        let relative = abs_address - info.start_addr;
        if relative >= info.len {
            return Err(OtpError::OutOfRange);
        }

        Ok(relative)
    }
}

impl TryFrom<u32> for OtpPartition {
    type Error = OtpError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        OtpPartition::ALL
            .get(value as usize)
            .copied()
            .ok_or(OtpError::InvalidArgument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_map_is_flat_and_ordered() {
        for pair in OtpPartition::ALL.windows(2) {
            let prev = pair[0].info();
            let next = pair[1].info();
            assert!(
                prev.start_addr + prev.len <= next.start_addr,
                "partitions {:?} and {:?} overlap",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_partition_geometry() {
        let mut lifecycle_count = 0;
        for partition in OtpPartition::ALL {
            let info = partition.info();
            assert!(info.align_mask == 0x3 || info.align_mask == 0x7);
            assert_eq!(info.start_addr & info.align_mask, 0);
            assert_eq!(info.len & info.align_mask, 0);
            if info.has_digest {
                assert!(info.len >= DIGEST_SIZE);
            }
            if info.is_lifecycle {
                lifecycle_count += 1;
                assert!(!info.is_software);
                assert!(!info.has_digest);
            }
        }
        assert_eq!(lifecycle_count, 1);
    }

    #[test]
    fn test_capability_tables_match_partition_flags() {
        let mut next_read_lock = 0;
        let mut next_digest = 0;
        for partition in OtpPartition::ALL {
            let info = partition.info();
            // Read locks exist exactly for the software-managed partitions,
            // and their register indices are dense and in partition order.
            match partition.read_lock_index() {
                Some(index) => {
                    assert!(info.is_software);
                    assert_eq!(index, next_read_lock);
                    next_read_lock += 1;
                }
                None => assert!(!info.is_software),
            }
            match partition.digest_index() {
                Some(index) => {
                    assert!(info.has_digest);
                    assert_eq!(index, next_digest);
                    next_digest += 1;
                }
                None => assert!(!info.has_digest),
            }
        }
    }

    #[test]
    fn test_try_from_raw() {
        for (value, partition) in OtpPartition::ALL.iter().enumerate() {
            assert_eq!(OtpPartition::try_from(value as u32), Ok(*partition));
        }
        assert_eq!(
            OtpPartition::try_from(OtpPartition::ALL.len() as u32),
            Err(OtpError::InvalidArgument)
        );
        assert_eq!(
            OtpPartition::try_from(u32::MAX),
            Err(OtpError::InvalidArgument)
        );
    }

    #[test]
    fn test_relative_address_round_trip() {
        for partition in OtpPartition::ALL {
            let info = partition.info();
            let step = info.align_mask + 1;
            let mut addr = 0;
            while addr < info.len {
                assert_eq!(
                    partition.relative_address(info.start_addr + addr),
                    Ok(addr)
                );
                addr += step;
            }
        }
    }

    #[test]
    fn test_relative_address_unaligned() {
        for partition in OtpPartition::ALL {
            let info = partition.info();
            assert_eq!(
                partition.relative_address(info.start_addr + 1),
                Err(OtpError::Unaligned)
            );
        }
    }

    #[test]
    fn test_relative_address_out_of_range() {
        for partition in OtpPartition::ALL {
            let info = partition.info();
            assert_eq!(
                partition.relative_address(info.start_addr + info.len),
                Err(OtpError::OutOfRange)
            );
            if info.start_addr != 0 {
                let below = info.start_addr - (info.align_mask + 1);
                assert_eq!(
                    partition.relative_address(below),
                    Err(OtpError::OutOfRange)
                );
            }
        }
    }
}

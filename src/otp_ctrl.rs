/*++

Licensed under the Apache-2.0 license.

File Name:

    otp_ctrl.rs

Abstract:

    File contains API for the OTP controller: background check gates, the
    Direct Access Interface and the status decoder

--*/

use crate::error::{OtpError, OtpResult};
use crate::partition::{OtpPartition, DIGEST_SIZE};
use crate::reg::{
    OtpCtrlRegisters, StaticRef, CHECK_TRIGGER, DIRECT_ACCESS_CMD, OTP_CTRL_REGS, READ_LOCK, REGWEN,
};
use crate::status::{OtpCause, OtpStatus, StatusCode};
use tock_registers::interfaces::{Readable, Writeable};

/// Background check configuration written by [`OtpCtrl::configure`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckConfig {
    /// Cycle budget a single background check may consume before the
    /// controller reports a timeout.
    pub check_timeout: u32,

    /// Mask deriving the pseudo-random integrity check period.
    pub integrity_period_mask: u32,

    /// Mask deriving the pseudo-random consistency check period.
    pub consistency_period_mask: u32,
}

/// OTP controller handle.
///
/// Holds only the register block reference; all mutable state lives in the
/// peripheral. Status and lock queries are side-effect-free and may run
/// concurrently with an in-flight DAI operation, but the DAI registers form
/// a single-outstanding-operation channel: callers must observe DAI idle
/// status before issuing the next `dai_*` sequence.
pub struct OtpCtrl {
    regs: StaticRef<OtpCtrlRegisters>,
}

impl OtpCtrl {
    pub const fn new() -> OtpCtrl {
        OtpCtrl {
            regs: OTP_CTRL_REGS,
        }
    }

    /// Create a controller over an arbitrary register block.
    ///
    /// ## Safety
    ///
    /// `regs` must point to an OTP controller register block mapped for the
    /// lifetime of the returned handle.
    pub const unsafe fn with_registers(regs: StaticRef<OtpCtrlRegisters>) -> OtpCtrl {
        OtpCtrl { regs }
    }

    fn checks_are_locked(&self, check_config: bool) -> bool {
        let regwen = if check_config {
            &self.regs.check_regwen
        } else {
            &self.regs.check_trigger_regwen
        };
        !regwen.is_set(REGWEN::EN)
    }

    /// Write the background check configuration.
    ///
    /// Fails with `Locked` once [`OtpCtrl::lock_config`] has been called.
    pub fn configure(&self, config: CheckConfig) -> OtpResult<()> {
        if self.checks_are_locked(true) {
            return Err(OtpError::Locked);
        }

        self.regs.check_timeout.set(config.check_timeout);
        self.regs
            .integrity_check_period
            .set(config.integrity_period_mask);
        self.regs
            .consistency_check_period
            .set(config.consistency_period_mask);

        Ok(())
    }

    /// Trigger a one-shot integrity check.
    pub fn check_integrity(&self) -> OtpResult<()> {
        if self.checks_are_locked(false) {
            return Err(OtpError::Locked);
        }

        self.regs.check_trigger.write(CHECK_TRIGGER::INTEGRITY::SET);
        Ok(())
    }

    /// Trigger a one-shot consistency check.
    pub fn check_consistency(&self) -> OtpResult<()> {
        if self.checks_are_locked(false) {
            return Err(OtpError::Locked);
        }

        self.regs
            .check_trigger
            .write(CHECK_TRIGGER::CONSISTENCY::SET);
        Ok(())
    }

    /// Lock out [`OtpCtrl::configure`] until the next hardware reset.
    /// One-way latch; unconditional.
    pub fn lock_config(&self) {
        self.regs.check_regwen.write(REGWEN::EN::CLEAR);
    }

    pub fn config_is_locked(&self) -> bool {
        self.checks_are_locked(true)
    }

    /// Lock out the check triggers until the next hardware reset.
    pub fn lock_check_trigger(&self) {
        self.regs.check_trigger_regwen.write(REGWEN::EN::CLEAR);
    }

    pub fn check_trigger_is_locked(&self) -> bool {
        self.checks_are_locked(false)
    }

    /// Lock out software reads of `partition` until the next hardware reset.
    ///
    /// Fails with `InvalidArgument` for partitions without a software read
    /// lock.
    pub fn lock_reading(&self, partition: OtpPartition) -> OtpResult<()> {
        let index = partition
            .read_lock_index()
            .ok_or(OtpError::InvalidArgument)?;
        self.regs.read_lock[index].write(READ_LOCK::EN::CLEAR);
        Ok(())
    }

    pub fn reading_is_locked(&self, partition: OtpPartition) -> OtpResult<bool> {
        let index = partition
            .read_lock_index()
            .ok_or(OtpError::InvalidArgument)?;
        Ok(!self.regs.read_lock[index].is_set(READ_LOCK::EN))
    }

    /// Lock out all Direct Access operations until the next hardware reset.
    pub fn lock_dai(&self) {
        self.regs.direct_access_regwen.write(REGWEN::EN::CLEAR);
    }

    pub fn dai_is_locked(&self) -> bool {
        !self.regs.direct_access_regwen.is_set(REGWEN::EN)
    }

    /// Issue a read of the word at `address` within `partition`.
    ///
    /// Issuing does not signal completion; the caller must observe DAI idle
    /// status before collecting the result with [`OtpCtrl::dai_read32_end`]
    /// or [`OtpCtrl::dai_read64_end`].
    pub fn dai_read_start(&self, partition: OtpPartition, address: u32) -> OtpResult<()> {
        let info = partition.info();

        if address & info.align_mask != 0 {
            return Err(OtpError::Unaligned);
        }

        if address >= info.len {
            return Err(OtpError::OutOfRange);
        }

        // The address register must be written before the command register.
        self.regs
            .direct_access_address
            .set(info.start_addr + address);
        self.regs.direct_access_cmd.write(DIRECT_ACCESS_CMD::RD::SET);

        Ok(())
    }

    /// Collect the result of a completed 32-bit read.
    pub fn dai_read32_end(&self) -> u32 {
        self.regs.direct_access_rdata[0].get()
    }

    /// Collect the result of a completed 64-bit read.
    pub fn dai_read64_end(&self) -> u64 {
        let lo = self.regs.direct_access_rdata[0].get() as u64;
        let hi = self.regs.direct_access_rdata[1].get() as u64;
        (hi << 32) | lo
    }

    /// Issue a 32-bit program of `value` at `address` within `partition`.
    ///
    /// # Returns
    ///
    /// * `Fault` for 64-bit-granule partitions and for the lifecycle
    ///   partition, which is not writable through this interface.
    /// * `OutOfRange` for the digest slot of a digest-bearing partition; the
    ///   digest words at the tail are readable but never writable here.
    pub fn dai_program32(
        &self,
        partition: OtpPartition,
        address: u32,
        value: u32,
    ) -> OtpResult<()> {
        let info = partition.info();

        if info.align_mask != 0x3 || info.is_lifecycle {
            return Err(OtpError::Fault);
        }

        if address & info.align_mask != 0 {
            return Err(OtpError::Unaligned);
        }

        let digest_size = if info.has_digest { DIGEST_SIZE } else { 0 };
        if address >= info.len - digest_size {
            return Err(OtpError::OutOfRange);
        }

        // Address, then data, then command; the hardware latches in order.
        self.regs
            .direct_access_address
            .set(info.start_addr + address);
        self.regs.direct_access_wdata[0].set(value);
        self.regs.direct_access_cmd.write(DIRECT_ACCESS_CMD::WR::SET);

        Ok(())
    }

    /// Issue a 64-bit program of `value` at `address` within `partition`.
    ///
    /// Only valid for 64-bit-granule partitions; the digest reservation at
    /// the partition tail is excluded from the writable range.
    pub fn dai_program64(
        &self,
        partition: OtpPartition,
        address: u32,
        value: u64,
    ) -> OtpResult<()> {
        let info = partition.info();

        if info.align_mask != 0x7 {
            return Err(OtpError::Fault);
        }

        if address & info.align_mask != 0 {
            return Err(OtpError::Unaligned);
        }

        if address >= info.len - DIGEST_SIZE {
            return Err(OtpError::OutOfRange);
        }

        self.regs
            .direct_access_address
            .set(info.start_addr + address);
        self.regs.direct_access_wdata[0].set(value as u32);
        self.regs.direct_access_wdata[1].set((value >> 32) as u32);
        self.regs.direct_access_cmd.write(DIRECT_ACCESS_CMD::WR::SET);

        Ok(())
    }

    /// Seal `partition` by issuing its digest command.
    ///
    /// For software-managed partitions `digest` is the software-computed
    /// value and must be non-zero; it is programmed into the partition's
    /// digest slot with the write command. For hardware-managed partitions
    /// `digest` must be zero; the hardware computes and places its own
    /// digest, so only the dedicated digest command is issued.
    pub fn dai_digest(&self, partition: OtpPartition, digest: u64) -> OtpResult<()> {
        let info = partition.info();

        if !info.has_digest {
            return Err(OtpError::Fault);
        }

        // The digest polarity is an XOR invariant: non-zero for software
        // partitions, zero for hardware partitions.
        if info.is_software == (digest == 0) {
            return Err(OtpError::InvalidArgument);
        }

        let mut address = info.start_addr;
        if info.is_software {
            address += info.len - DIGEST_SIZE;
        }
        self.regs.direct_access_address.set(address);

        if digest != 0 {
            self.regs.direct_access_wdata[0].set(digest as u32);
            self.regs.direct_access_wdata[1].set((digest >> 32) as u32);
        }

        if info.is_software {
            self.regs.direct_access_cmd.write(DIRECT_ACCESS_CMD::WR::SET);
        } else {
            self.regs
                .direct_access_cmd
                .write(DIRECT_ACCESS_CMD::DIGEST::SET);
        }

        Ok(())
    }

    fn digest_regs(&self, partition: OtpPartition) -> OtpResult<u64> {
        let index = partition.digest_index().ok_or(OtpError::InvalidArgument)?;
        let lo = self.regs.digest[2 * index].get() as u64;
        let hi = self.regs.digest[2 * index + 1].get() as u64;
        Ok((hi << 32) | lo)
    }

    /// Whether the digest of `partition` has been computed. A zero register
    /// pair means "not yet"; the hardware guarantees a real digest is never
    /// zero.
    pub fn is_digest_computed(&self, partition: OtpPartition) -> OtpResult<bool> {
        Ok(self.digest_regs(partition)? != 0)
    }

    /// Read the digest of `partition`, failing with `Fault` while it is
    /// uncomputed so an all-zero pair can never be mistaken for a digest.
    pub fn digest(&self, partition: OtpPartition) -> OtpResult<u64> {
        let value = self.digest_regs(partition)?;
        if value == 0 {
            return Err(OtpError::Fault);
        }
        Ok(value)
    }

    /// Copy `buf.len()` words out of a software partition through the read
    /// window. This path bypasses the DAI registers entirely and needs no
    /// completion wait.
    pub fn read_blocking(
        &self,
        partition: OtpPartition,
        address: u32,
        buf: &mut [u32],
    ) -> OtpResult<()> {
        let info = partition.info();

        if !info.is_software {
            return Err(OtpError::Fault);
        }

        if address & info.align_mask != 0 {
            return Err(OtpError::Unaligned);
        }

        let end = address
            .checked_add(buf.len() as u32)
            .ok_or(OtpError::OutOfRange)?;
        if end >= info.len {
            return Err(OtpError::OutOfRange);
        }

        let base = ((info.start_addr + address) / 4) as usize;
        for (offset, word) in buf.iter_mut().enumerate() {
            *word = self.regs.sw_cfg_window[base + offset].get();
        }

        Ok(())
    }

    /// Decode the status register into an [`OtpStatus`] report, reading the
    /// cause register of every asserted causal condition.
    pub fn status(&self) -> OtpResult<OtpStatus> {
        let mut status = OtpStatus::empty();

        let bits = self.regs.status.get();
        for code in StatusCode::ALL {
            let index = code as usize;
            // A clear bit leaves the recorded cause at "no error".
            if bits & (1 << index) == 0 {
                continue;
            }

            status.codes |= 1 << index;

            if code.has_cause() {
                status.causes[index] = OtpCause::decode(self.regs.err_code[index].get())?;
            }
        }

        Ok(status)
    }
}

impl Default for OtpCtrl {
    fn default() -> OtpCtrl {
        OtpCtrl::new()
    }
}


#[cfg(all(test, feature = "darjeeling"))]
mod tests {
    use super::*;

    const OFFSET_STATUS: usize = 0x10;
    const OFFSET_ERR_CODE: usize = 0x14;
    const OFFSET_DAI_REGWEN: usize = 0x74;
    const OFFSET_DAI_CMD: usize = 0x78;
    const OFFSET_DAI_ADDRESS: usize = 0x7c;
    const OFFSET_DAI_WDATA0: usize = 0x80;
    const OFFSET_DAI_WDATA1: usize = 0x84;
    const OFFSET_CHECK_TRIGGER_REGWEN: usize = 0x90;
    const OFFSET_CHECK_REGWEN: usize = 0x98;
    const OFFSET_READ_LOCK: usize = 0xa8;
    const OFFSET_DIGEST: usize = 0xe4;
    const OFFSET_SW_CFG_WINDOW: usize = 0x800;

    const CMD_RD: u32 = 1 << 0;
    const CMD_WR: u32 = 1 << 1;
    const CMD_DIGEST: u32 = 1 << 2;

    const REG_WORDS: usize = 0x2800 / 4;
    const NUM_READ_LOCKS: usize = 15;

    /// In-memory register block standing in for the peripheral.
    struct FakeOtp {
        base: *mut u32,
    }

    impl FakeOtp {
        fn new() -> FakeOtp {
            let fake = FakeOtp {
                base: Box::into_raw(Box::new([0u32; REG_WORDS])) as *mut u32,
            };
            fake.reset();
            fake
        }

        fn controller(&self) -> OtpCtrl {
            unsafe { OtpCtrl::with_registers(StaticRef::new(self.base as *const OtpCtrlRegisters)) }
        }

        fn read(&self, byte_offset: usize) -> u32 {
            unsafe { self.base.add(byte_offset / 4).read_volatile() }
        }

        fn write(&self, byte_offset: usize, value: u32) {
            unsafe { self.base.add(byte_offset / 4).write_volatile(value) }
        }

        fn reset(&self) {
            for word in 0..REG_WORDS {
                unsafe { self.base.add(word).write_volatile(0) }
            }
            self.write(OFFSET_DAI_REGWEN, 1);
            self.write(OFFSET_CHECK_TRIGGER_REGWEN, 1);
            self.write(OFFSET_CHECK_REGWEN, 1);
            for index in 0..NUM_READ_LOCKS {
                self.write(OFFSET_READ_LOCK + 4 * index, 1);
            }
        }
    }

    #[test]
    fn test_dai_read_start() {
        let fake = FakeOtp::new();
        let otp = fake.controller();

        assert_eq!(otp.dai_read_start(OtpPartition::CreatorSwCfg, 4), Ok(()));
        assert_eq!(fake.read(OFFSET_DAI_ADDRESS), 64 + 4);
        assert_eq!(fake.read(OFFSET_DAI_CMD), CMD_RD);
    }

    #[test]
    fn test_dai_program64() {
        let fake = FakeOtp::new();
        let otp = fake.controller();

        assert_eq!(
            otp.dai_program64(OtpPartition::Secret0, 24, 0x0123_4567_89ab_cdef),
            Ok(())
        );
        assert_eq!(fake.read(OFFSET_DAI_ADDRESS), 4040 + 24);
        assert_eq!(fake.read(OFFSET_DAI_WDATA0), 0x89ab_cdef);
        assert_eq!(fake.read(OFFSET_DAI_WDATA1), 0x0123_4567);
        assert_eq!(fake.read(OFFSET_DAI_CMD), CMD_WR);
    }

    #[test]
    fn test_dai_digest_hardware_partition() {
        let fake = FakeOtp::new();
        let otp = fake.controller();

        assert_eq!(otp.dai_digest(OtpPartition::HwCfg0, 0), Ok(()));
        assert_eq!(fake.read(OFFSET_DAI_ADDRESS), 3920);
        assert_eq!(fake.read(OFFSET_DAI_CMD), CMD_DIGEST);
    }

    #[test]
    fn test_lock_reading() {
        let fake = FakeOtp::new();
        let otp = fake.controller();

        // RomPatch holds the last read-lock register.
        assert_eq!(otp.lock_reading(OtpPartition::RomPatch), Ok(()));
        assert_eq!(fake.read(OFFSET_READ_LOCK + 4 * 14), 0);
        assert_eq!(otp.reading_is_locked(OtpPartition::RomPatch), Ok(true));
        assert_eq!(otp.reading_is_locked(OtpPartition::ExtNvm), Ok(false));
        assert_eq!(
            otp.lock_reading(OtpPartition::Secret3),
            Err(OtpError::InvalidArgument)
        );
    }

    #[test]
    fn test_digest_registers() {
        let fake = FakeOtp::new();
        let otp = fake.controller();

        // Secret3 owns the last digest register pair.
        fake.write(OFFSET_DIGEST + 18 * 8, 0x5566_7788);
        fake.write(OFFSET_DIGEST + 18 * 8 + 4, 0x1122_3344);
        assert_eq!(
            otp.digest(OtpPartition::Secret3),
            Ok(0x1122_3344_5566_7788)
        );
        assert_eq!(otp.digest(OtpPartition::Secret0), Err(OtpError::Fault));
        assert_eq!(
            otp.digest(OtpPartition::ExtNvm),
            Err(OtpError::InvalidArgument)
        );
    }

    #[test]
    fn test_status_decodes_causes() {
        let fake = FakeOtp::new();
        let otp = fake.controller();

        let bits = (1 << StatusCode::VendorTestError as u32)
            | (1 << StatusCode::DaiError as u32)
            | (1 << StatusCode::DaiIdle as u32);
        fake.write(OFFSET_STATUS, bits);
        fake.write(
            OFFSET_ERR_CODE + 4 * StatusCode::VendorTestError as usize,
            4,
        );
        fake.write(OFFSET_ERR_CODE + 4 * StatusCode::DaiError as usize, 6);

        let status = otp.status().unwrap();
        assert!(status.is_set(StatusCode::VendorTestError));
        assert!(status.is_set(StatusCode::DaiError));
        assert!(status.is_set(StatusCode::DaiIdle));
        assert_eq!(
            status.cause(StatusCode::VendorTestError),
            Some(OtpCause::MacroBlankCheckFailed)
        );
        assert_eq!(
            status.cause(StatusCode::DaiError),
            Some(OtpCause::BackgroundCheckFailed)
        );
        assert_eq!(status.cause(StatusCode::DaiIdle), None);
    }

    #[test]
    fn test_read_blocking() {
        let fake = FakeOtp::new();
        let otp = fake.controller();

        // ExtNvm starts at byte 2384, so its window words start at 596.
        for offset in 0..4 {
            fake.write(OFFSET_SW_CFG_WINDOW + (596 + offset) * 4, 0x200 + offset as u32);
        }

        let mut buf = [0u32; 4];
        assert_eq!(otp.read_blocking(OtpPartition::ExtNvm, 0, &mut buf), Ok(()));
        assert_eq!(buf, [0x200, 0x201, 0x202, 0x203]);

        assert_eq!(
            otp.read_blocking(OtpPartition::ExtNvm, 0xffff_fffc, &mut buf),
            Err(OtpError::OutOfRange)
        );
    }

    #[test]
    fn test_register_layout_matches_variant_tables() {
        use crate::variant::{DIGESTS, NUM_ERROR_CAUSES, READ_LOCKS};

        let fake = FakeOtp::new();
        let otp = fake.controller();

        assert_eq!(otp.regs.err_code.len(), NUM_ERROR_CAUSES);
        assert_eq!(
            otp.regs.read_lock.len(),
            READ_LOCKS.iter().filter(|lock| lock.is_some()).count()
        );
        assert_eq!(
            otp.regs.digest.len(),
            2 * DIGESTS.iter().filter(|digest| digest.is_some()).count()
        );
    }
}

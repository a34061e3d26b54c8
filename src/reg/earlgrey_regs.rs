/*++

Licensed under the Apache-2.0 license.

File Name:

    earlgrey_regs.rs

Abstract:

    File contains register definitions for the Earlgrey OTP controller

--*/

use crate::reg::static_ref::StaticRef;
use crate::reg::{ALERT_TEST, CHECK_TRIGGER, DIRECT_ACCESS_CMD, INTR, READ_LOCK, REGWEN};
use tock_registers::register_structs;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};

register_structs! {
    /// OTP Controller Registers
    pub OtpCtrlRegisters {
        /// Interrupt State Register
        (0x0000 => pub(crate) intr_state: ReadWrite<u32, INTR::Register>),

        /// Interrupt Enable Register
        (0x0004 => pub(crate) intr_enable: ReadWrite<u32, INTR::Register>),

        /// Interrupt Test Register
        (0x0008 => pub(crate) intr_test: WriteOnly<u32, INTR::Register>),

        /// Alert Test Register
        (0x000c => pub(crate) alert_test: WriteOnly<u32, ALERT_TEST::Register>),

        /// Status Register, one bit per condition
        (0x0010 => pub(crate) status: ReadOnly<u32>),

        /// Per-condition cause registers, one per causal condition,
        /// indexed by status bit position
        (0x0014 => pub(crate) err_code: [ReadOnly<u32>; 13]),

        /// Direct Access Interface write-enable
        (0x0048 => pub(crate) direct_access_regwen: ReadWrite<u32, REGWEN::Register>),

        /// Direct Access Interface command
        (0x004c => pub(crate) direct_access_cmd: WriteOnly<u32, DIRECT_ACCESS_CMD::Register>),

        /// Direct Access Interface absolute OTP byte address
        (0x0050 => pub(crate) direct_access_address: ReadWrite<u32>),

        /// Direct Access Interface write data (low, high)
        (0x0054 => pub(crate) direct_access_wdata: [ReadWrite<u32>; 2]),

        /// Direct Access Interface read data (low, high)
        (0x005c => pub(crate) direct_access_rdata: [ReadOnly<u32>; 2]),

        /// Background check trigger write-enable
        (0x0064 => pub(crate) check_trigger_regwen: ReadWrite<u32, REGWEN::Register>),

        /// Background check trigger
        (0x0068 => pub(crate) check_trigger: WriteOnly<u32, CHECK_TRIGGER::Register>),

        /// Background check configuration write-enable
        (0x006c => pub(crate) check_regwen: ReadWrite<u32, REGWEN::Register>),

        /// Background check timeout
        (0x0070 => pub(crate) check_timeout: ReadWrite<u32>),

        /// Integrity check period mask
        (0x0074 => pub(crate) integrity_check_period: ReadWrite<u32>),

        /// Consistency check period mask
        (0x0078 => pub(crate) consistency_check_period: ReadWrite<u32>),

        /// Per-partition software read locks, ordered by partition
        (0x007c => pub(crate) read_lock: [ReadWrite<u32, READ_LOCK::Register>; 5]),

        /// Per-partition digest register pairs (low, high), ordered by
        /// digest-bearing partition
        (0x0090 => pub(crate) digest: [ReadOnly<u32>; 20]),

        (0x00e0 => _reserved0),

        /// Read window into the software config partitions
        (0x0800 => pub(crate) sw_cfg_window: [ReadOnly<u32>; 512]),

        (0x1000 => @END),
    }
}

pub const OTP_CTRL_REGS: StaticRef<OtpCtrlRegisters> =
    unsafe { StaticRef::new(0x4013_0000 as *const OtpCtrlRegisters) };

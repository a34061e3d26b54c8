/*++

Licensed under the Apache-2.0 license.

File Name:

    mod.rs

Abstract:

    File contains register definitions for the OTP controller

--*/

mod static_ref;

pub use static_ref::StaticRef;

use tock_registers::register_bitfields;

cfg_if::cfg_if! {
    if #[cfg(feature = "darjeeling")] {
        mod darjeeling_regs;
        pub use darjeeling_regs::{OtpCtrlRegisters, OTP_CTRL_REGS};
    } else if #[cfg(feature = "earlgrey")] {
        mod earlgrey_regs;
        pub use earlgrey_regs::{OtpCtrlRegisters, OTP_CTRL_REGS};
    } else {
        compile_error!("one of the `earlgrey` or `darjeeling` features must be enabled");
    }
}

register_bitfields! [
    u32,

    pub(crate) INTR [
        OTP_OPERATION_DONE OFFSET(0) NUMBITS(1) [],
        OTP_ERROR OFFSET(1) NUMBITS(1) [],
    ],

    pub(crate) ALERT_TEST [
        FATAL_MACRO_ERROR OFFSET(0) NUMBITS(1) [],
        FATAL_CHECK_ERROR OFFSET(1) NUMBITS(1) [],
        FATAL_BUS_INTEG_ERROR OFFSET(2) NUMBITS(1) [],
        FATAL_PRIM_OTP_ALERT OFFSET(3) NUMBITS(1) [],
        RECOV_PRIM_OTP_ALERT OFFSET(4) NUMBITS(1) [],
    ],

    /// Write-enable gates. Active high; cleared once to lock until the next
    /// hardware reset.
    pub(crate) REGWEN [
        EN OFFSET(0) NUMBITS(1) [],
    ],

    pub(crate) DIRECT_ACCESS_CMD [
        RD OFFSET(0) NUMBITS(1) [],
        WR OFFSET(1) NUMBITS(1) [],
        DIGEST OFFSET(2) NUMBITS(1) [],
    ],

    pub(crate) CHECK_TRIGGER [
        INTEGRITY OFFSET(0) NUMBITS(1) [],
        CONSISTENCY OFFSET(1) NUMBITS(1) [],
    ],

    pub(crate) READ_LOCK [
        EN OFFSET(0) NUMBITS(1) [],
    ],
];

/*++

Licensed under the Apache-2.0 license.

File Name:

    mod.rs

Abstract:

    File contains the build-time selection of the OTP hardware variant

--*/

cfg_if::cfg_if! {
    if #[cfg(feature = "darjeeling")] {
        mod darjeeling;
        pub use darjeeling::{OtpPartition, StatusCode};
        pub(crate) use darjeeling::{DIGESTS, NUM_ERROR_CAUSES, PARTITIONS, READ_LOCKS};
    } else if #[cfg(feature = "earlgrey")] {
        mod earlgrey;
        pub use earlgrey::{OtpPartition, StatusCode};
        pub(crate) use earlgrey::{DIGESTS, NUM_ERROR_CAUSES, PARTITIONS, READ_LOCKS};
    } else {
        compile_error!("one of the `earlgrey` or `darjeeling` features must be enabled");
    }
}

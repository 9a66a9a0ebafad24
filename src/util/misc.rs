//! Helper functions and macros

use num_traits::{PrimInt, Signed};

/// Check whether `v` fits into a signed integer of `bits` bits.
///
/// # Examples
///
/// ```
/// use gekko::util::misc::fits_signed_bits;
///
/// assert!(fits_signed_bits(0x7FFFi64, 16));
/// assert!(fits_signed_bits(-0x8000i64, 16));
/// assert!(!fits_signed_bits(0x8000i64, 16));
/// assert!(!fits_signed_bits(-0x8001i64, 16));
///
/// // 26-bit byte displacement of an unconditional branch
/// assert!(fits_signed_bits(0x1FF_FFFFi64, 26));
/// assert!(!fits_signed_bits(0x200_0000i64, 26));
/// ```
#[inline(always)]
pub fn fits_signed_bits<T: PrimInt + Signed>(v: T, bits: u32) -> bool {
    let bound = T::one() << (bits as usize - 1);
    v >= -bound && v < bound
}

#[doc(hidden)]
macro_rules! debug_from_display {
    ($type: ty, newline) => {
        const _: fn() = || {
            fn assert_impl_display<T: std::fmt::Display>() {}
            assert_impl_display::<$type>();
        };

        impl std::fmt::Debug for $type {
            #[inline(always)]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                writeln!(f)?;
                std::fmt::Display::fmt(self, f)
            }
        }
    };

    ($type: ty) => {
        const _: fn() = || {
            fn assert_impl_display<T: std::fmt::Display>() {}
            assert_impl_display::<$type>();
        };

        impl std::fmt::Debug for $type {
            #[inline(always)]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }
    };
}

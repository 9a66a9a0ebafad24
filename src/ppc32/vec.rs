//! AltiVec encodings, a small subset plus the data-stream ops.

use crate::reg::Vr;

macro_rules! vx3 {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(d: Vr, a: Vr, b: Vr) -> u32 {
                $base
                    | ((d.0 as u32) << 21) // vD
                    | ((a.0 as u32) << 16) // vA
                    | ((b.0 as u32) << 11) // vB
            }
        )+
    };
}

vx3! {
    /// Encode `vaddfp` (vector add single-precision).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Vr;
    /// use gekko::ppc32::encode_vaddfp;
    /// assert_eq!(encode_vaddfp(Vr::V1, Vr::V2, Vr::V3), 0x1022180A); // vaddfp v1, v2, v3
    /// ```
    encode_vaddfp = 0x1000000A;
    /// Encode `vsubfp` (vector subtract single-precision).
    encode_vsubfp = 0x1000004A;
    /// Encode `vand`.
    encode_vand = 0x10000404;
    /// Encode `vandc` (vD = vA & !vB).
    encode_vandc = 0x10000444;
    /// Encode `vor`.
    encode_vor = 0x10000484;
    /// Encode `vnor`.
    encode_vnor = 0x10000504;
    /// Encode `vxor`.
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Vr;
    /// use gekko::ppc32::encode_vxor;
    /// assert_eq!(encode_vxor(Vr::V0, Vr::V0, Vr::V0), 0x100004C4); // vxor v0, v0, v0 (zero v0)
    /// ```
    encode_vxor = 0x100004C4;
}

/// Encode `vperm` (permute the 32 bytes of vA:vB by the indices in vC).
///
/// # Example
/// ```
/// use gekko::reg::Vr;
/// use gekko::ppc32::encode_vperm;
/// assert_eq!(encode_vperm(Vr::V1, Vr::V2, Vr::V3, Vr::V4), 0x1022192B); // vperm v1, v2, v3, v4
/// ```
#[inline(always)]
pub const fn encode_vperm(d: Vr, a: Vr, b: Vr, c: Vr) -> u32 {
    0x1000002B
        | ((d.0 as u32) << 21) // vD
        | ((a.0 as u32) << 16) // vA
        | ((b.0 as u32) << 11) // vB
        | ((c.0 as u32) << 6)  // vC
}

/// Encode `vrefp` (vector reciprocal estimate single-precision).
#[inline(always)]
pub const fn encode_vrefp(d: Vr, b: Vr) -> u32 {
    0x1000010A
        | ((d.0 as u32) << 21) // vD
        | ((b.0 as u32) << 11) // vB
}

/// Encode `dss` (data stream stop; `stream` is 0..3).
#[inline(always)]
pub const fn encode_dss(stream: u8) -> u32 {
    0x7C00066C | (((stream & 3) as u32) << 21) // STRM
}

/// Encode `dssall` (stop all data streams).
#[inline(always)]
pub const fn encode_dssall() -> u32 {
    0x7E00066C
}

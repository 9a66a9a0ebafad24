//! Condition-register bit ops, system-register moves, cache/TLB maintenance
//! and synchronization encodings.

use crate::reg::{Gpr, Sr};

// =============================================================================
// Condition-register bit operations (XL-form; operands are CR bits 0..31)
// =============================================================================

macro_rules! cr_op {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(d: u8, a: u8, b: u8) -> u32 {
                $base
                    | ((d as u32) << 21) // crbD
                    | ((a as u32) << 16) // crbA
                    | ((b as u32) << 11) // crbB
            }
        )+
    };
}

cr_op! {
    /// Encode `crand`.
    encode_crand = 0x4C000202;
    /// Encode `crandc`.
    encode_crandc = 0x4C000102;
    /// Encode `creqv`.
    encode_creqv = 0x4C000242;
    /// Encode `crnand`.
    encode_crnand = 0x4C0001C2;
    /// Encode `crnor`.
    encode_crnor = 0x4C000042;
    /// Encode `cror`.
    encode_cror = 0x4C000382;
    /// Encode `crorc`.
    encode_crorc = 0x4C000342;
    /// Encode `crxor`.
    ///
    /// # Example
    /// ```
    /// use gekko::ppc32::encode_crxor;
    /// assert_eq!(encode_crxor(6, 6, 6), 0x4CC63182); // crclr 6
    /// ```
    encode_crxor = 0x4C000182;
}

// =============================================================================
// System-register moves
// =============================================================================

/// Encode `mtcrf` (move to condition-register fields selected by `mask`).
///
/// # Example
/// ```
/// use gekko::reg::Gpr;
/// use gekko::ppc32::encode_mtcrf;
/// assert_eq!(encode_mtcrf(0xFF, Gpr::R3), 0x7C6FF120); // mtcr r3
/// ```
#[inline(always)]
pub const fn encode_mtcrf(mask: u8, s: Gpr) -> u32 {
    0x7C000120
        | ((s.0 as u32) << 21)   // rS
        | ((mask as u32) << 12)  // CRM
}

/// Encode `mfcr` (move from condition register).
#[inline(always)]
pub const fn encode_mfcr(d: Gpr) -> u32 {
    0x7C000026 | ((d.0 as u32) << 21) // rD
}

/// Encode `mtsr` (move to segment register).
#[inline(always)]
pub const fn encode_mtsr(sr: Sr, s: Gpr) -> u32 {
    0x7C0001A4
        | ((s.0 as u32) << 21)  // rS
        | ((sr.0 as u32) << 16) // SR
}

/// Encode `mfsr` (move from segment register).
///
/// # Example
/// ```
/// use gekko::reg::{Gpr, Sr};
/// use gekko::ppc32::encode_mfsr;
/// assert_eq!(encode_mfsr(Gpr::R3, Sr::SR2), 0x7C6204A6); // mfsr r3, 2
/// ```
#[inline(always)]
pub const fn encode_mfsr(d: Gpr, sr: Sr) -> u32 {
    0x7C0004A6
        | ((d.0 as u32) << 21)  // rD
        | ((sr.0 as u32) << 16) // SR
}

/// Encode `mtsrin` (move to segment register indirect; the segment is
/// selected by the top nibble of rB).
#[inline(always)]
pub const fn encode_mtsrin(s: Gpr, b: Gpr) -> u32 {
    0x7C0001E4
        | ((s.0 as u32) << 21) // rS
        | ((b.0 as u32) << 11) // rB
}

/// Encode `mfsrin` (move from segment register indirect).
#[inline(always)]
pub const fn encode_mfsrin(d: Gpr, b: Gpr) -> u32 {
    0x7C000526
        | ((d.0 as u32) << 21) // rD
        | ((b.0 as u32) << 11) // rB
}

/// Encode `mfmsr` (move from machine state register).
#[inline(always)]
pub const fn encode_mfmsr(d: Gpr) -> u32 {
    0x7C0000A6 | ((d.0 as u32) << 21) // rD
}

/// Encode `mtmsr` (move to machine state register).
#[inline(always)]
pub const fn encode_mtmsr(s: Gpr) -> u32 {
    0x7C000124 | ((s.0 as u32) << 21) // rS
}

/// Encode `mtctr` (move to count register).
///
/// # Example
/// ```
/// use gekko::reg::Gpr;
/// use gekko::ppc32::encode_mtctr;
/// assert_eq!(encode_mtctr(Gpr::R3), 0x7C6903A6); // mtctr r3
/// ```
#[inline(always)]
pub const fn encode_mtctr(s: Gpr) -> u32 {
    0x7C0903A6 | ((s.0 as u32) << 21) // rS
}

/// Encode `mfctr` (move from count register).
#[inline(always)]
pub const fn encode_mfctr(d: Gpr) -> u32 {
    0x7C0902A6 | ((d.0 as u32) << 21) // rD
}

/// Encode `mflr` (move from link register).
///
/// # Example
/// ```
/// use gekko::reg::Gpr;
/// use gekko::ppc32::encode_mflr;
/// assert_eq!(encode_mflr(Gpr::R0), 0x7C0802A6); // mflr r0
/// ```
#[inline(always)]
pub const fn encode_mflr(d: Gpr) -> u32 {
    0x7C0802A6 | ((d.0 as u32) << 21) // rD
}

/// Encode `mtlr` (move to link register).
#[inline(always)]
pub const fn encode_mtlr(s: Gpr) -> u32 {
    0x7C0803A6 | ((s.0 as u32) << 21) // rS
}

// =============================================================================
// Cache and TLB maintenance
// =============================================================================

macro_rules! cache_op {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(a: Gpr, b: Gpr) -> u32 {
                $base
                    | ((a.0 as u32) << 16) // rA
                    | ((b.0 as u32) << 11) // rB
            }
        )+
    };
}

cache_op! {
    /// Encode `icbi` (instruction cache block invalidate).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_icbi;
    /// assert_eq!(encode_icbi(Gpr::R4, Gpr::R5), 0x7C042FAC); // icbi r4, r5
    /// ```
    encode_icbi = 0x7C0007AC;
    /// Encode `dcbf` (data cache block flush).
    encode_dcbf = 0x7C0000AC;
    /// Encode `dcbi` (data cache block invalidate).
    encode_dcbi = 0x7C0003AC;
    /// Encode `dcbst` (data cache block store).
    encode_dcbst = 0x7C00006C;
    /// Encode `dcbt` (data cache block touch).
    encode_dcbt = 0x7C00022C;
    /// Encode `dcbtst` (data cache block touch for store).
    encode_dcbtst = 0x7C0001EC;
    /// Encode `dcbz` (data cache block clear to zero).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_dcbz;
    /// assert_eq!(encode_dcbz(Gpr::R0, Gpr::R3), 0x7C001FEC); // dcbz 0, r3
    /// ```
    encode_dcbz = 0x7C0007EC;
    /// Encode `dcbz_l` (clear to zero in locked cache; Gekko/Broadway).
    encode_dcbz_l = 0x100007EC;
}

/// Encode `tlbie` (TLB invalidate entry for the EA in rB).
///
/// # Example
/// ```
/// use gekko::reg::Gpr;
/// use gekko::ppc32::encode_tlbie;
/// assert_eq!(encode_tlbie(Gpr::R3), 0x7C001A64); // tlbie r3
/// ```
#[inline(always)]
pub const fn encode_tlbie(b: Gpr) -> u32 {
    0x7C000264 | ((b.0 as u32) << 11) // rB
}

/// Encode `tlbsync`.
#[inline(always)]
pub const fn encode_tlbsync() -> u32 {
    0x7C00046C
}

/// Encode `eieio` (enforce in-order execution of I/O).
#[inline(always)]
pub const fn encode_eieio() -> u32 {
    0x7C0006AC
}

/// Encode `isync` (instruction synchronize).
#[inline(always)]
pub const fn encode_isync() -> u32 {
    0x4C00012C
}

/// Encode `sync`.
#[inline(always)]
pub const fn encode_sync() -> u32 {
    0x7C0004AC
}

/// Encode `rfi` (return from interrupt).
#[inline(always)]
pub const fn encode_rfi() -> u32 {
    0x4C000064
}

/// Encode `sc` (system call).
#[inline(always)]
pub const fn encode_sc() -> u32 {
    0x44000002
}

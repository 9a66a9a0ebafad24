//! Multi-instruction pseudo-op expansions.
//!
//! These return the expansion as host-endian bytes so the caller can append
//! them in one go; a `SmallVec` sized for the worst case (two words) keeps
//! the hot path allocation-free.

use crate::ppc32::{encode_addi, encode_addis, encode_ori};
use crate::reg::Gpr;

use core::mem;

use smallvec::SmallVec;

pub type PpcInst = SmallVec<[u8; mem::size_of::<u32>() * 2]>;

/// Expand `liw rd, imm`: load an arbitrary 32-bit value exactly.
///
/// Picks the shortest sequence: a single `li` when the value survives
/// sign-extension, a single `lis` when the low halfword is zero, and
/// `lis` + `ori` otherwise.
///
/// # Example
/// ```
/// use gekko::reg::Gpr;
/// use gekko::ppc32::pseudo::encode_liw;
///
/// let words = |b: &[u8]| -> Vec<u32> {
///     b.chunks(4).map(|c| u32::from_ne_bytes(c.try_into().unwrap())).collect()
/// };
///
/// // fits in a sign-extended 16-bit immediate
/// assert_eq!(words(&encode_liw(Gpr::R1, 0xFFFFF000)), [0x3820F000]); // li r1, -4096
///
/// // low halfword of zero
/// assert_eq!(words(&encode_liw(Gpr::R1, 0x12340000)), [0x3C201234]); // lis r1, 0x1234
///
/// // the general case
/// assert_eq!(
///     words(&encode_liw(Gpr::R1, 0x12345678)),
///     [0x3C201234, 0x60215678], // lis r1, 0x1234; ori r1, r1, 0x5678
/// );
/// ```
pub fn encode_liw(rd: Gpr, imm: u32) -> PpcInst {
    let mut bytes = PpcInst::new();

    if imm <= 0x7FFF || imm >= 0xFFFF_8000 {
        // sign-extension of the low halfword reproduces the value
        let inst = encode_addi(rd, Gpr::R0, imm as u16 as i16);
        bytes.extend_from_slice(&inst.to_ne_bytes());
        return bytes;
    }

    let hi_inst = encode_addis(rd, Gpr::R0, (imm >> 16) as u16 as i16);
    bytes.extend_from_slice(&hi_inst.to_ne_bytes());

    if imm & 0xFFFF != 0 {
        let lo_inst = encode_ori(rd, rd, imm as u16);
        bytes.extend_from_slice(&lo_inst.to_ne_bytes());
    }

    bytes
}

/// Expand `liu rd, imm`: load an unsigned 16-bit value without the
/// sign-extension `li` would apply to bit 15.
///
/// # Example
/// ```
/// use gekko::reg::Gpr;
/// use gekko::ppc32::pseudo::encode_liu;
///
/// let words = |b: &[u8]| -> Vec<u32> {
///     b.chunks(4).map(|c| u32::from_ne_bytes(c.try_into().unwrap())).collect()
/// };
///
/// assert_eq!(words(&encode_liu(Gpr::R3, 0x1234)), [0x38601234]); // li r3, 0x1234
/// assert_eq!(
///     words(&encode_liu(Gpr::R3, 0x8000)),
///     [0x38600000, 0x60638000], // li r3, 0; ori r3, r3, 0x8000
/// );
/// ```
pub fn encode_liu(rd: Gpr, imm: u16) -> PpcInst {
    let mut bytes = PpcInst::new();

    if imm < 0x8000 {
        let inst = encode_addi(rd, Gpr::R0, imm as i16);
        bytes.extend_from_slice(&inst.to_ne_bytes());
        return bytes;
    }

    bytes.extend_from_slice(&encode_addi(rd, Gpr::R0, 0).to_ne_bytes());
    bytes.extend_from_slice(&encode_ori(rd, rd, imm).to_ne_bytes());

    bytes
}

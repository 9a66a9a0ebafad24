//! Integer arithmetic, logical, shift/rotate and compare encodings.

use crate::reg::{Cr, Gpr};

// =============================================================================
// Add / subtract-from / multiply / divide (XO-form)
// =============================================================================

macro_rules! xo3 {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(d: Gpr, a: Gpr, b: Gpr, rc: bool) -> u32 {
                $base
                    | ((d.0 as u32) << 21) // rD
                    | ((a.0 as u32) << 16) // rA
                    | ((b.0 as u32) << 11) // rB
                    | rc as u32            // Rc
            }
        )+
    };
}

macro_rules! xo2 {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(d: Gpr, a: Gpr, rc: bool) -> u32 {
                $base
                    | ((d.0 as u32) << 21) // rD
                    | ((a.0 as u32) << 16) // rA
                    | rc as u32            // Rc
            }
        )+
    };
}

xo3! {
    /// Encode `add` (rD = rA + rB).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_add;
    /// assert_eq!(encode_add(Gpr::R3, Gpr::R4, Gpr::R5, false), 0x7C642A14); // add r3, r4, r5
    /// ```
    encode_add = 0x7C000214;
    /// Encode `addo` (add, overflow-enabled).
    encode_addo = 0x7C000614;
    /// Encode `addc` (add carrying).
    encode_addc = 0x7C000014;
    /// Encode `addco` (add carrying, overflow-enabled).
    encode_addco = 0x7C000414;
    /// Encode `adde` (add extended with carry-in).
    encode_adde = 0x7C000114;
    /// Encode `addeo` (add extended, overflow-enabled).
    encode_addeo = 0x7C000514;
    /// Encode `subf` (subtract from: rD = rB - rA).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_subf;
    /// assert_eq!(encode_subf(Gpr::R3, Gpr::R4, Gpr::R5, false), 0x7C642850); // subf r3, r4, r5
    /// ```
    encode_subf = 0x7C000050;
    /// Encode `subfo` (subtract from, overflow-enabled).
    encode_subfo = 0x7C000450;
    /// Encode `subfc` (subtract from carrying).
    encode_subfc = 0x7C000010;
    /// Encode `subfco` (subtract from carrying, overflow-enabled).
    encode_subfco = 0x7C000410;
    /// Encode `subfe` (subtract from extended with carry-in).
    encode_subfe = 0x7C000110;
    /// Encode `subfeo` (subtract from extended, overflow-enabled).
    encode_subfeo = 0x7C000510;
    /// Encode `mullw` (multiply low word).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_mullw;
    /// assert_eq!(encode_mullw(Gpr::R3, Gpr::R4, Gpr::R5, false), 0x7C6429D6); // mullw r3, r4, r5
    /// ```
    encode_mullw = 0x7C0001D6;
    /// Encode `mullwo` (multiply low word, overflow-enabled).
    encode_mullwo = 0x7C0005D6;
    /// Encode `mulhw` (multiply high word, signed).
    encode_mulhw = 0x7C000096;
    /// Encode `mulhwu` (multiply high word, unsigned).
    encode_mulhwu = 0x7C000016;
    /// Encode `divw` (divide word, signed: rD = rA / rB).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_divw;
    /// assert_eq!(encode_divw(Gpr::R3, Gpr::R4, Gpr::R5, false), 0x7C642BD6); // divw r3, r4, r5
    /// ```
    encode_divw = 0x7C0003D6;
    /// Encode `divwo` (divide word signed, overflow-enabled).
    encode_divwo = 0x7C0007D6;
    /// Encode `divwu` (divide word, unsigned).
    encode_divwu = 0x7C000396;
    /// Encode `divwuo` (divide word unsigned, overflow-enabled).
    encode_divwuo = 0x7C000796;
}

xo2! {
    /// Encode `addze` (add zero extended: rD = rA + CA).
    encode_addze = 0x7C000194;
    /// Encode `addzeo` (add zero extended, overflow-enabled).
    encode_addzeo = 0x7C000594;
    /// Encode `addme` (add minus one extended: rD = rA + CA - 1).
    encode_addme = 0x7C0001D4;
    /// Encode `addmeo` (add minus one extended, overflow-enabled).
    encode_addmeo = 0x7C0005D4;
    /// Encode `subfme` (subtract from minus one extended).
    encode_subfme = 0x7C0001D0;
    /// Encode `subfmeo` (subtract from minus one extended, overflow-enabled).
    encode_subfmeo = 0x7C0005D0;
    /// Encode `subfze` (subtract from zero extended).
    encode_subfze = 0x7C000190;
    /// Encode `subfzeo` (subtract from zero extended, overflow-enabled).
    encode_subfzeo = 0x7C000590;
    /// Encode `neg` (rD = -rA).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_neg;
    /// assert_eq!(encode_neg(Gpr::R3, Gpr::R4, false), 0x7C6400D0); // neg r3, r4
    /// ```
    encode_neg = 0x7C0000D0;
    /// Encode `nego` (negate, overflow-enabled).
    encode_nego = 0x7C0004D0;
}

// =============================================================================
// Immediate arithmetic (D-form)
// =============================================================================

macro_rules! d_arith {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(d: Gpr, a: Gpr, imm: i16) -> u32 {
                $base
                    | ((d.0 as u32) << 21) // rD
                    | ((a.0 as u32) << 16) // rA
                    | (imm as u16 as u32)  // simm
            }
        )+
    };
}

d_arith! {
    /// Encode `addi` (rD = rA + simm; rA = r0 reads as the literal zero).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_addi;
    /// assert_eq!(encode_addi(Gpr::R3, Gpr::R0, -1), 0x3860FFFF); // li r3, -1
    /// ```
    encode_addi = 0x38000000;
    /// Encode `addis` (rD = rA + (simm << 16)).
    encode_addis = 0x3C000000;
    /// Encode `mulli` (multiply low immediate).
    encode_mulli = 0x1C000000;
    /// Encode `subfic` (subtract from immediate carrying: rD = simm - rA).
    encode_subfic = 0x20000000;
}

/// Encode `addic` / `addic.` (add immediate carrying).
///
/// The record form is a distinct primary opcode (13 instead of 12), not an
/// Rc bit.
///
/// # Example
/// ```
/// use gekko::reg::Gpr;
/// use gekko::ppc32::encode_addic;
/// assert_eq!(encode_addic(Gpr::R4, Gpr::R4, -1, true), 0x3484FFFF); // addic. r4, r4, -1
/// ```
#[inline(always)]
pub const fn encode_addic(d: Gpr, a: Gpr, imm: i16, rc: bool) -> u32 {
    let base: u32 = if rc { 0x34000000 } else { 0x30000000 };
    base
        | ((d.0 as u32) << 21) // rD
        | ((a.0 as u32) << 16) // rA
        | (imm as u16 as u32)  // simm
}

// =============================================================================
// Logical and shift (X-form; note the source register sits in the <<21 slot)
// =============================================================================

macro_rules! x_logic {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(d: Gpr, s: Gpr, b: Gpr, rc: bool) -> u32 {
                $base
                    | ((s.0 as u32) << 21) // rS
                    | ((d.0 as u32) << 16) // rA (dest)
                    | ((b.0 as u32) << 11) // rB
                    | rc as u32            // Rc
            }
        )+
    };
}

x_logic! {
    /// Encode `and` (rD = rS & rB).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_and;
    /// assert_eq!(encode_and(Gpr::R3, Gpr::R4, Gpr::R5, false), 0x7C832838); // and r3, r4, r5
    /// ```
    encode_and = 0x7C000038;
    /// Encode `andc` (rD = rS & !rB).
    encode_andc = 0x7C000078;
    /// Encode `or` (rD = rS | rB).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_or;
    /// assert_eq!(encode_or(Gpr::R3, Gpr::R4, Gpr::R4, false), 0x7C832378); // mr r3, r4
    /// ```
    encode_or = 0x7C000378;
    /// Encode `orc` (rD = rS | !rB).
    encode_orc = 0x7C000338;
    /// Encode `xor` (rD = rS ^ rB).
    encode_xor = 0x7C000278;
    /// Encode `nand`.
    encode_nand = 0x7C0003B8;
    /// Encode `nor`.
    encode_nor = 0x7C0000F8;
    /// Encode `eqv` (rD = !(rS ^ rB)).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_eqv;
    /// assert_eq!(encode_eqv(Gpr::R3, Gpr::R4, Gpr::R5, false), 0x7C832A38); // eqv r3, r4, r5
    /// ```
    encode_eqv = 0x7C000238;
    /// Encode `slw` (shift left word by rB).
    encode_slw = 0x7C000030;
    /// Encode `srw` (shift right word logical by rB).
    encode_srw = 0x7C000430;
    /// Encode `sraw` (shift right algebraic word by rB).
    encode_sraw = 0x7C000630;
}

macro_rules! d_logic {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(d: Gpr, s: Gpr, imm: u16) -> u32 {
                $base
                    | ((s.0 as u32) << 21) // rS
                    | ((d.0 as u32) << 16) // rA (dest)
                    | imm as u32           // uimm
            }
        )+
    };
}

d_logic! {
    /// Encode `andi.`, which always records into cr0 (a distinct primary opcode,
    /// there is no non-recording form).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_andi;
    /// assert_eq!(encode_andi(Gpr::R3, Gpr::R4, 0xFF), 0x708300FF); // andi. r3, r4, 255
    /// ```
    encode_andi = 0x70000000;
    /// Encode `andis.`, which always records into cr0.
    encode_andis = 0x74000000;
    /// Encode `ori`.
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_ori;
    /// assert_eq!(encode_ori(Gpr::R3, Gpr::R3, 0x5678), 0x60635678); // ori r3, r3, 0x5678
    /// assert_eq!(encode_ori(Gpr::R0, Gpr::R0, 0), 0x60000000);      // nop
    /// ```
    encode_ori = 0x60000000;
    /// Encode `oris`.
    encode_oris = 0x64000000;
    /// Encode `xori`.
    encode_xori = 0x68000000;
    /// Encode `xoris`.
    encode_xoris = 0x6C000000;
}

/// Encode `srawi` (shift right algebraic word by immediate).
///
/// # Example
/// ```
/// use gekko::reg::Gpr;
/// use gekko::ppc32::encode_srawi;
/// assert_eq!(encode_srawi(Gpr::R3, Gpr::R3, 31, false), 0x7C63FE70); // srawi r3, r3, 31
/// ```
#[inline(always)]
pub const fn encode_srawi(d: Gpr, s: Gpr, sh: u8, rc: bool) -> u32 {
    0x7C000670
        | ((s.0 as u32) << 21)       // rS
        | ((d.0 as u32) << 16)       // rA (dest)
        | (((sh & 31) as u32) << 11) // SH
        | rc as u32                  // Rc
}

/// Encode `cntlzw` (count leading zeroes; 32 for a zero input).
///
/// # Example
/// ```
/// use gekko::reg::Gpr;
/// use gekko::ppc32::encode_cntlzw;
/// assert_eq!(encode_cntlzw(Gpr::R3, Gpr::R4, false), 0x7C830034); // cntlzw r3, r4
/// ```
#[inline(always)]
pub const fn encode_cntlzw(d: Gpr, s: Gpr, rc: bool) -> u32 {
    0x7C000034
        | ((s.0 as u32) << 21) // rS
        | ((d.0 as u32) << 16) // rA (dest)
        | rc as u32            // Rc
}

/// Encode `extsb` (sign-extend byte).
#[inline(always)]
pub const fn encode_extsb(d: Gpr, s: Gpr, rc: bool) -> u32 {
    0x7C000774
        | ((s.0 as u32) << 21) // rS
        | ((d.0 as u32) << 16) // rA (dest)
        | rc as u32            // Rc
}

/// Encode `extsh` (sign-extend halfword).
#[inline(always)]
pub const fn encode_extsh(d: Gpr, s: Gpr, rc: bool) -> u32 {
    0x7C000734
        | ((s.0 as u32) << 21) // rS
        | ((d.0 as u32) << 16) // rA (dest)
        | rc as u32            // Rc
}

// =============================================================================
// Rotate-and-mask (M-form) and its aliases
// =============================================================================

/// Encode `rlwinm` (rotate left word immediate then AND with mask).
///
/// Rotates rS left by `sh`, keeps mask bits `mb..=me` (big-endian bit
/// numbering, both 0..31). The swiss-army knife behind every immediate
/// shift/rotate/clear/extract alias below.
///
/// # Example
/// ```
/// use gekko::reg::Gpr;
/// use gekko::ppc32::encode_rlwinm;
/// assert_eq!(encode_rlwinm(Gpr::R3, Gpr::R4, 5, 0, 26, false), 0x54832834); // slwi r3, r4, 5
/// ```
#[inline(always)]
pub const fn encode_rlwinm(d: Gpr, s: Gpr, sh: u8, mb: u8, me: u8, rc: bool) -> u32 {
    0x54000000
        | ((s.0 as u32) << 21)       // rS
        | ((d.0 as u32) << 16)       // rA (dest)
        | (((sh & 31) as u32) << 11) // SH
        | ((mb as u32) << 6)         // MB
        | ((me as u32) << 1)         // ME
        | rc as u32                  // Rc
}

/// Encode `rlwimi` (rotate left word immediate then mask insert).
#[inline(always)]
pub const fn encode_rlwimi(d: Gpr, s: Gpr, sh: u8, mb: u8, me: u8, rc: bool) -> u32 {
    0x50000000
        | ((s.0 as u32) << 21)       // rS
        | ((d.0 as u32) << 16)       // rA (dest)
        | (((sh & 31) as u32) << 11) // SH
        | ((mb as u32) << 6)         // MB
        | ((me as u32) << 1)         // ME
        | rc as u32                  // Rc
}

/// Encode `rlwnm` (rotate left word by rB then AND with mask).
#[inline(always)]
pub const fn encode_rlwnm(d: Gpr, s: Gpr, b: Gpr, mb: u8, me: u8, rc: bool) -> u32 {
    0x5C000000
        | ((s.0 as u32) << 21) // rS
        | ((d.0 as u32) << 16) // rA (dest)
        | ((b.0 as u32) << 11) // rB
        | ((mb as u32) << 6)   // MB
        | ((me as u32) << 1)   // ME
        | rc as u32            // Rc
}

/// Encode `slwi` (shift left immediate), an `rlwinm` alias.
#[inline(always)]
pub const fn encode_slwi(d: Gpr, s: Gpr, n: u8, rc: bool) -> u32 {
    encode_rlwinm(d, s, n, 0, 31 - n, rc)
}

/// Encode `srwi` (shift right logical immediate), an `rlwinm` alias.
#[inline(always)]
pub const fn encode_srwi(d: Gpr, s: Gpr, n: u8, rc: bool) -> u32 {
    encode_rlwinm(d, s, 32 - n, n, 31, rc)
}

/// Encode `clrlwi` (clear the leftmost `n` bits), an `rlwinm` alias.
#[inline(always)]
pub const fn encode_clrlwi(d: Gpr, s: Gpr, n: u8, rc: bool) -> u32 {
    encode_rlwinm(d, s, 0, n, 31, rc)
}

/// Encode `clrrwi` (clear the rightmost `n` bits), an `rlwinm` alias.
#[inline(always)]
pub const fn encode_clrrwi(d: Gpr, s: Gpr, n: u8, rc: bool) -> u32 {
    encode_rlwinm(d, s, 0, 0, 31 - n, rc)
}

/// Encode `rotlwi` (rotate left immediate), an `rlwinm` alias.
#[inline(always)]
pub const fn encode_rotlwi(d: Gpr, s: Gpr, n: u8, rc: bool) -> u32 {
    encode_rlwinm(d, s, n, 0, 31, rc)
}

/// Encode `rotrwi` (rotate right immediate), an `rlwinm` alias.
#[inline(always)]
pub const fn encode_rotrwi(d: Gpr, s: Gpr, n: u8, rc: bool) -> u32 {
    encode_rlwinm(d, s, 32 - n, 0, 31, rc)
}

/// Encode `extlwi` (extract `n` bits starting at `b` and left-justify), an
/// `rlwinm` alias. `n` must be at least 1.
#[inline(always)]
pub const fn encode_extlwi(d: Gpr, s: Gpr, n: u8, b: u8, rc: bool) -> u32 {
    encode_rlwinm(d, s, b, 0, n - 1, rc)
}

/// Encode `extrwi` (extract `n` bits starting at `b` and right-justify), an
/// `rlwinm` alias. `n` must be at least 1.
#[inline(always)]
pub const fn encode_extrwi(d: Gpr, s: Gpr, n: u8, b: u8, rc: bool) -> u32 {
    encode_rlwinm(d, s, b + n, 32 - n, 31, rc)
}

// =============================================================================
// Compares
// =============================================================================

/// Encode `cmpi` (compare immediate, signed).
///
/// # Example
/// ```
/// use gekko::reg::{Cr, Gpr};
/// use gekko::ppc32::encode_cmpi;
/// assert_eq!(encode_cmpi(Cr::CR0, Gpr::R3, 100), 0x2C030064); // cmpwi r3, 100
/// ```
#[inline(always)]
pub const fn encode_cmpi(crf: Cr, a: Gpr, imm: i16) -> u32 {
    0x2C000000
        | ((crf.0 as u32) << 23) // crfD
        | ((a.0 as u32) << 16)   // rA
        | (imm as u16 as u32)    // simm
}

/// Encode `cmpli` (compare logical immediate, unsigned).
#[inline(always)]
pub const fn encode_cmpli(crf: Cr, a: Gpr, imm: u16) -> u32 {
    0x28000000
        | ((crf.0 as u32) << 23) // crfD
        | ((a.0 as u32) << 16)   // rA
        | imm as u32             // uimm
}

/// Encode `cmp` (compare, signed).
#[inline(always)]
pub const fn encode_cmp(crf: Cr, a: Gpr, b: Gpr) -> u32 {
    0x7C000000
        | ((crf.0 as u32) << 23) // crfD
        | ((a.0 as u32) << 16)   // rA
        | ((b.0 as u32) << 11)   // rB
}

/// Encode `cmpl` (compare logical, unsigned).
#[inline(always)]
pub const fn encode_cmpl(crf: Cr, a: Gpr, b: Gpr) -> u32 {
    0x7C000040
        | ((crf.0 as u32) << 23) // crfD
        | ((a.0 as u32) << 16)   // rA
        | ((b.0 as u32) << 11)   // rB
}

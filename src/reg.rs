//! PPC32 register files and condition codes.
//!
//! Each register file is its own newtype so a floating-point register can
//! never be handed to an operation expecting a general-purpose one. The
//! conventional EABI names are provided as associated constants.

macro_rules! register_file {
    (
        $(#[$meta:meta])*
        $ty:ident, $cap:expr, { $($name:ident = $idx:expr),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Eq, Hash, Copy, Clone, Debug, PartialEq)]
        pub struct $ty(pub(crate) u8);

        impl $ty {
            $(pub const $name: $ty = $ty($idx);)+

            /// Checked constructor.
            ///
            /// # Panics
            ///
            /// Panics if `n` is outside the register file.
            #[inline(always)]
            #[must_use]
            pub const fn new(n: u8) -> Self {
                assert!(n < $cap, "register index out of range");
                Self(n)
            }

            /// The register's index within its file.
            #[inline(always)]
            #[must_use]
            pub const fn index(self) -> u8 {
                self.0
            }
        }
    };
}

register_file! {
    /// General-purpose register (r0..r31).
    ///
    /// Aliases follow the PPC EABI: `SP` is r1, `TOC` is r2, `PARAM1..8`
    /// are the integer argument registers r3..r10, `EP` (r11) is used for
    /// calls through pointers. Note that many instructions treat an r0
    /// operand in the base-register slot as the literal zero.
    Gpr, 32, {
        R0 = 0, ZERO = 0,
        R1 = 1, SP = 1,
        R2 = 2, TOC = 2,
        R3 = 3, PARAM1 = 3,
        R4 = 4, PARAM2 = 4,
        R5 = 5, PARAM3 = 5,
        R6 = 6, PARAM4 = 6,
        R7 = 7, PARAM5 = 7,
        R8 = 8, PARAM6 = 8,
        R9 = 9, PARAM7 = 9,
        R10 = 10, PARAM8 = 10,
        R11 = 11, EP = 11,
        R12 = 12, R13 = 13, R14 = 14, R15 = 15,
        R16 = 16, R17 = 17, R18 = 18, R19 = 19,
        R20 = 20, R21 = 21, R22 = 22, R23 = 23,
        R24 = 24, R25 = 25, R26 = 26, R27 = 27,
        R28 = 28, R29 = 29, R30 = 30, R31 = 31,
    }
}

register_file! {
    /// Floating-point register (f0..f31).
    ///
    /// `FPARAM1..13` are the EABI float argument registers f1..f13.
    Fpr, 32, {
        F0 = 0,
        F1 = 1, FPARAM1 = 1,
        F2 = 2, FPARAM2 = 2,
        F3 = 3, FPARAM3 = 3,
        F4 = 4, FPARAM4 = 4,
        F5 = 5, FPARAM5 = 5,
        F6 = 6, FPARAM6 = 6,
        F7 = 7, FPARAM7 = 7,
        F8 = 8, FPARAM8 = 8,
        F9 = 9, FPARAM9 = 9,
        F10 = 10, FPARAM10 = 10,
        F11 = 11, FPARAM11 = 11,
        F12 = 12, FPARAM12 = 12,
        F13 = 13, FPARAM13 = 13,
        F14 = 14, F15 = 15, F16 = 16, F17 = 17,
        F18 = 18, F19 = 19, F20 = 20, F21 = 21,
        F22 = 22, F23 = 23, F24 = 24, F25 = 25,
        F26 = 26, F27 = 27, F28 = 28, F29 = 29,
        F30 = 30, F31 = 31,
    }
}

register_file! {
    /// AltiVec vector register (v0..v31).
    Vr, 32, {
        V0 = 0, V1 = 1, V2 = 2, V3 = 3, V4 = 4, V5 = 5, V6 = 6, V7 = 7,
        V8 = 8, V9 = 9, V10 = 10, V11 = 11, V12 = 12, V13 = 13, V14 = 14,
        V15 = 15, V16 = 16, V17 = 17, V18 = 18, V19 = 19, V20 = 20,
        V21 = 21, V22 = 22, V23 = 23, V24 = 24, V25 = 25, V26 = 26,
        V27 = 27, V28 = 28, V29 = 29, V30 = 30, V31 = 31,
    }
}

register_file! {
    /// Segment register (sr0..sr15).
    Sr, 16, {
        SR0 = 0, SR1 = 1, SR2 = 2, SR3 = 3,
        SR4 = 4, SR5 = 5, SR6 = 6, SR7 = 7,
        SR8 = 8, SR9 = 9, SR10 = 10, SR11 = 11,
        SR12 = 12, SR13 = 13, SR14 = 14, SR15 = 15,
    }
}

register_file! {
    /// Condition-register field (cr0..cr7).
    ///
    /// cr0 receives integer record results, cr1 float record results; cr6
    /// is written by some AltiVec compares.
    Cr, 8, {
        CR0 = 0, CR1 = 1, CR2 = 2, CR3 = 3,
        CR4 = 4, CR5 = 5, CR6 = 6, CR7 = 7,
    }
}

/// Branch condition, always tested against cr0.
///
/// The ordinal encodes both which cr0 bit is tested and the sense of the
/// test: `Lt`/`Gt`/`Eq`/`Os` (0..3) branch when the bit is set,
/// `Ge`/`Le`/`Ne`/`Oc` (4..7) when it is cleared. The bit within the field
/// is the ordinal's low two bits.
#[repr(u8)]
#[derive(Eq, Hash, Copy, Clone, Debug, PartialEq)]
pub enum Cond {
    Lt = 0,
    Gt,
    Eq,
    Os,
    Ge,
    Le,
    Ne,
    Oc,
}

impl Cond {
    /// Whether the branch fires on the CR bit being set (as opposed to
    /// cleared).
    #[inline(always)]
    #[must_use]
    pub const fn tests_set(self) -> bool {
        (self as u8) <= 3
    }

    /// The cr0 bit the condition tests (0 = LT, 1 = GT, 2 = EQ, 3 = SO).
    #[inline(always)]
    #[must_use]
    pub const fn cr_bit(self) -> u32 {
        (self as u8 & 3) as u32
    }
}

//! Scalar floating-point encodings.
//!
//! The record forms here write cr1 (not cr0) with FPSCR exception summary
//! bits. Four-operand A-form mnemonics follow the assembler operand order
//! `(frD, frA, frC, frB)` and compute `frD = frA * frC ± frB`: the addend is
//! the last argument and lands in the <<11 field, the second multiply factor
//! in the <<6 field.

use crate::reg::Fpr;

macro_rules! fp2 {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(d: Fpr, b: Fpr, rc: bool) -> u32 {
                $base
                    | ((d.0 as u32) << 21) // frD
                    | ((b.0 as u32) << 11) // frB
                    | rc as u32            // Rc
            }
        )+
    };
}

macro_rules! fp3 {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(d: Fpr, a: Fpr, b: Fpr, rc: bool) -> u32 {
                $base
                    | ((d.0 as u32) << 21) // frD
                    | ((a.0 as u32) << 16) // frA
                    | ((b.0 as u32) << 11) // frB
                    | rc as u32            // Rc
            }
        )+
    };
}

macro_rules! fp_mul {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(d: Fpr, a: Fpr, c: Fpr, rc: bool) -> u32 {
                $base
                    | ((d.0 as u32) << 21) // frD
                    | ((a.0 as u32) << 16) // frA
                    | ((c.0 as u32) << 6)  // frC
                    | rc as u32            // Rc
            }
        )+
    };
}

macro_rules! fp4 {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) -> u32 {
                $base
                    | ((d.0 as u32) << 21) // frD
                    | ((a.0 as u32) << 16) // frA
                    | ((b.0 as u32) << 11) // frB (addend)
                    | ((c.0 as u32) << 6)  // frC (second factor)
                    | rc as u32            // Rc
            }
        )+
    };
}

fp2! {
    /// Encode `fmr` (floating move register).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Fpr;
    /// use gekko::ppc32::encode_fmr;
    /// assert_eq!(encode_fmr(Fpr::F1, Fpr::F2, false), 0xFC201090); // fmr f1, f2
    /// ```
    encode_fmr = 0xFC000090;
    /// Encode `fneg` (floating negate).
    encode_fneg = 0xFC000050;
    /// Encode `fabs` (floating absolute value).
    encode_fabs = 0xFC000210;
    /// Encode `fnabs` (floating negative absolute value).
    encode_fnabs = 0xFC000110;
    /// Encode `frsp` (floating round to single).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Fpr;
    /// use gekko::ppc32::encode_frsp;
    /// assert_eq!(encode_frsp(Fpr::F1, Fpr::F2, false), 0xFC201018); // frsp f1, f2
    /// ```
    encode_frsp = 0xFC000018;
    /// Encode `fres` (floating reciprocal estimate single).
    encode_fres = 0xEC000030;
    /// Encode `frsqrte` (floating reciprocal square-root estimate).
    encode_frsqrte = 0xFC000034;
}

fp3! {
    /// Encode `fadd` (floating add double).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Fpr;
    /// use gekko::ppc32::encode_fadd;
    /// assert_eq!(encode_fadd(Fpr::F1, Fpr::F2, Fpr::F3, false), 0xFC22182A); // fadd f1, f2, f3
    /// ```
    encode_fadd = 0xFC00002A;
    /// Encode `fadds` (floating add single).
    encode_fadds = 0xEC00002A;
    /// Encode `fsub` (floating subtract double).
    encode_fsub = 0xFC000028;
    /// Encode `fsubs` (floating subtract single).
    encode_fsubs = 0xEC000028;
    /// Encode `fdiv` (floating divide double).
    encode_fdiv = 0xFC000024;
    /// Encode `fdivs` (floating divide single).
    encode_fdivs = 0xEC000024;
}

fp_mul! {
    /// Encode `fmul` (floating multiply double).
    encode_fmul = 0xFC000032;
    /// Encode `fmuls` (floating multiply single).
    encode_fmuls = 0xEC000032;
}

fp4! {
    /// Encode `fmadd` (frD = frA * frC + frB, double).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Fpr;
    /// use gekko::ppc32::encode_fmadd;
    /// assert_eq!(
    ///     encode_fmadd(Fpr::F0, Fpr::F1, Fpr::F2, Fpr::F3, false),
    ///     0xFC0118BA, // fmadd f0, f1, f2, f3
    /// );
    /// ```
    encode_fmadd = 0xFC00003A;
    /// Encode `fmadds` (multiply-add single).
    encode_fmadds = 0xEC00003A;
    /// Encode `fmsub` (frD = frA * frC - frB, double).
    encode_fmsub = 0xFC000038;
    /// Encode `fmsubs` (multiply-subtract single).
    encode_fmsubs = 0xEC000038;
    /// Encode `fnmadd` (frD = -(frA * frC + frB), double).
    encode_fnmadd = 0xFC00003E;
    /// Encode `fnmadds` (negative multiply-add single).
    encode_fnmadds = 0xEC00003E;
    /// Encode `fnmsub` (frD = -(frA * frC - frB), double).
    encode_fnmsub = 0xFC00003C;
    /// Encode `fnmsubs` (negative multiply-subtract single).
    encode_fnmsubs = 0xEC00003C;
    /// Encode `fsel` (frD = frB if frA < 0 else frC).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Fpr;
    /// use gekko::ppc32::encode_fsel;
    /// assert_eq!(
    ///     encode_fsel(Fpr::F1, Fpr::F2, Fpr::F3, Fpr::F4, false),
    ///     0xFC2220EE, // fsel f1, f2, f3, f4
    /// );
    /// ```
    encode_fsel = 0xFC00002E;
}

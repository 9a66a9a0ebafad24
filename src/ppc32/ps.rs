//! Paired-single encodings (the Gekko/Broadway SIMD extension).
//!
//! Paired singles pack two 32-bit floats into one 64-bit FPR and operate on
//! both lanes. Field layouts mirror the scalar A-form/X-form ops, under
//! primary opcode 4; the four-operand mnemonics use the same
//! `(frD, frA, frC, frB)` operand order as [`super::fp`].

use crate::reg::{Cr, Fpr};

macro_rules! ps2 {
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

macro_rules! ps3 {
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

macro_rules! ps_mul {
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

macro_rules! ps4 {
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

macro_rules! ps_cmp {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(crf: Cr, a: Fpr, b: Fpr) -> u32 {
                $base
                    | ((crf.0 as u32) << 23) // crfD
                    | ((a.0 as u32) << 16)   // frA
                    | ((b.0 as u32) << 11)   // frB
            }
        )+
    };
}

ps2! {
    /// Encode `ps_abs` (paired absolute value).
    encode_ps_abs = 0x10000210;
    /// Encode `ps_mr` (paired move register).
    encode_ps_mr = 0x10000090;
    /// Encode `ps_nabs` (paired negative absolute value).
    encode_ps_nabs = 0x10000110;
    /// Encode `ps_neg` (paired negate).
    encode_ps_neg = 0x10000050;
    /// Encode `ps_res` (paired reciprocal estimate).
    encode_ps_res = 0x10000030;
    /// Encode `ps_rsqrte` (paired reciprocal square-root estimate).
    encode_ps_rsqrte = 0x10000034;
}

ps3! {
    /// Encode `ps_add`.
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Fpr;
    /// use gekko::ppc32::encode_ps_add;
    /// assert_eq!(encode_ps_add(Fpr::F1, Fpr::F2, Fpr::F3, false), 0x1022182A); // ps_add f1, f2, f3
    /// ```
    encode_ps_add = 0x1000002A;
    /// Encode `ps_sub`.
    encode_ps_sub = 0x10000028;
    /// Encode `ps_div`.
    encode_ps_div = 0x10000024;
    /// Encode `ps_merge00` (both high lanes).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Fpr;
    /// use gekko::ppc32::encode_ps_merge00;
    /// assert_eq!(encode_ps_merge00(Fpr::F1, Fpr::F2, Fpr::F3, false), 0x10221C20);
    /// ```
    encode_ps_merge00 = 0x10000420;
    /// Encode `ps_merge01` (high lane of frA, low lane of frB).
    encode_ps_merge01 = 0x10000460;
    /// Encode `ps_merge10` (low lane of frA, high lane of frB).
    encode_ps_merge10 = 0x100004A0;
    /// Encode `ps_merge11` (both low lanes).
    encode_ps_merge11 = 0x100004E0;
}

ps_mul! {
    /// Encode `ps_mul`.
    encode_ps_mul = 0x10000032;
    /// Encode `ps_muls0` (multiply both lanes by frC's high lane).
    encode_ps_muls0 = 0x10000018;
    /// Encode `ps_muls1` (multiply both lanes by frC's low lane).
    encode_ps_muls1 = 0x1000001A;
}

ps4! {
    /// Encode `ps_madd` (frD = frA * frC + frB, both lanes).
    encode_ps_madd = 0x1000003A;
    /// Encode `ps_madds0` (multiply-add by frC's high lane).
    encode_ps_madds0 = 0x1000001C;
    /// Encode `ps_madds1` (multiply-add by frC's low lane).
    encode_ps_madds1 = 0x1000001E;
    /// Encode `ps_msub` (frD = frA * frC - frB, both lanes).
    encode_ps_msub = 0x10000038;
    /// Encode `ps_nmadd` (negated multiply-add).
    encode_ps_nmadd = 0x1000003E;
    /// Encode `ps_nmsub` (negated multiply-subtract).
    encode_ps_nmsub = 0x1000003C;
    /// Encode `ps_sel` (lane-wise select on frA's sign).
    encode_ps_sel = 0x1000002E;
    /// Encode `ps_sum0` (cross-lane sum into the high lane).
    encode_ps_sum0 = 0x10000014;
    /// Encode `ps_sum1` (cross-lane sum into the low lane).
    encode_ps_sum1 = 0x10000016;
}

ps_cmp! {
    /// Encode `ps_cmpu0` (compare unordered, high lanes).
    encode_ps_cmpu0 = 0x10000000;
    /// Encode `ps_cmpo0` (compare ordered, high lanes).
    encode_ps_cmpo0 = 0x10000040;
    /// Encode `ps_cmpu1` (compare unordered, low lanes).
    encode_ps_cmpu1 = 0x10000080;
    /// Encode `ps_cmpo1` (compare ordered, low lanes).
    encode_ps_cmpo1 = 0x100000C0;
}

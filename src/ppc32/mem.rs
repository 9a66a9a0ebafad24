//! Load/store encodings, integer and floating-point.
//!
//! D-form variants take a signed 16-bit byte offset against a base register
//! (an r0 base reads as the literal zero); X-form variants compute the
//! effective address as `(rA | 0) + rB`. Stores place the *source* register
//! in the <<21 slot, mirroring the loads.

use crate::reg::{Fpr, Gpr};

macro_rules! d_mem {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(r: Gpr, a: Gpr, offset: i16) -> u32 {
                $base
                    | ((r.0 as u32) << 21)   // rD / rS
                    | ((a.0 as u32) << 16)   // rA (base)
                    | (offset as u16 as u32) // d
            }
        )+
    };
}

macro_rules! x_mem {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(r: Gpr, a: Gpr, b: Gpr) -> u32 {
                $base
                    | ((r.0 as u32) << 21) // rD / rS
                    | ((a.0 as u32) << 16) // rA
                    | ((b.0 as u32) << 11) // rB
            }
        )+
    };
}

d_mem! {
    /// Encode `lbz` (load byte and zero).
    encode_lbz = 0x88000000;
    /// Encode `lbzu` (load byte and zero with update).
    encode_lbzu = 0x8C000000;
    /// Encode `lhz` (load halfword and zero).
    encode_lhz = 0xA0000000;
    /// Encode `lhzu` (load halfword and zero with update).
    encode_lhzu = 0xA4000000;
    /// Encode `lha` (load halfword algebraic).
    encode_lha = 0xA8000000;
    /// Encode `lhau` (load halfword algebraic with update).
    encode_lhau = 0xAC000000;
    /// Encode `lwz` (load word and zero).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_lwz;
    /// assert_eq!(encode_lwz(Gpr::R3, Gpr::SP, 8), 0x80610008); // lwz r3, 8(r1)
    /// ```
    encode_lwz = 0x80000000;
    /// Encode `lwzu` (load word and zero with update).
    encode_lwzu = 0x84000000;
    /// Encode `lmw` (load multiple words from rD through r31).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_lmw;
    /// assert_eq!(encode_lmw(Gpr::R29, Gpr::SP, -12), 0xBBA1FFF4); // lmw r29, -12(r1)
    /// ```
    encode_lmw = 0xB8000000;
    /// Encode `stb` (store byte).
    encode_stb = 0x98000000;
    /// Encode `stbu` (store byte with update).
    encode_stbu = 0x9C000000;
    /// Encode `sth` (store halfword).
    encode_sth = 0xB0000000;
    /// Encode `sthu` (store halfword with update).
    encode_sthu = 0xB4000000;
    /// Encode `stw` (store word).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_stw;
    /// assert_eq!(encode_stw(Gpr::R3, Gpr::SP, 8), 0x90610008); // stw r3, 8(r1)
    /// ```
    encode_stw = 0x90000000;
    /// Encode `stwu` (store word with update).
    encode_stwu = 0x94000000;
    /// Encode `stmw` (store multiple words from rS through r31).
    encode_stmw = 0xBC000000;
}

x_mem! {
    /// Encode `lbzx` (load byte and zero indexed).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_lbzx;
    /// assert_eq!(encode_lbzx(Gpr::R3, Gpr::R4, Gpr::R5), 0x7C6428AE); // lbzx r3, r4, r5
    /// ```
    encode_lbzx = 0x7C0000AE;
    /// Encode `lbzux` (load byte and zero with update indexed).
    encode_lbzux = 0x7C0000EE;
    /// Encode `lhzx` (load halfword and zero indexed).
    encode_lhzx = 0x7C00022E;
    /// Encode `lhzux` (load halfword and zero with update indexed).
    encode_lhzux = 0x7C00026E;
    /// Encode `lhax` (load halfword algebraic indexed).
    encode_lhax = 0x7C0002AE;
    /// Encode `lhaux` (load halfword algebraic with update indexed).
    encode_lhaux = 0x7C0002EE;
    /// Encode `lwzx` (load word and zero indexed).
    encode_lwzx = 0x7C00002E;
    /// Encode `lwzux` (load word and zero with update indexed).
    encode_lwzux = 0x7C00006E;
    /// Encode `lhbrx` (load halfword byte-reversed indexed).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_lhbrx;
    /// assert_eq!(encode_lhbrx(Gpr::R3, Gpr::R0, Gpr::R4), 0x7C60262C); // lhbrx r3, 0, r4
    /// ```
    encode_lhbrx = 0x7C00062C;
    /// Encode `lwbrx` (load word byte-reversed indexed).
    encode_lwbrx = 0x7C00042C;
    /// Encode `lwarx` (load word and reserve indexed).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_lwarx;
    /// assert_eq!(encode_lwarx(Gpr::R3, Gpr::R0, Gpr::R4), 0x7C602028); // lwarx r3, 0, r4
    /// ```
    encode_lwarx = 0x7C000028;
    /// Encode `stbx` (store byte indexed).
    encode_stbx = 0x7C0001AE;
    /// Encode `stbux` (store byte with update indexed).
    encode_stbux = 0x7C0001EE;
    /// Encode `sthx` (store halfword indexed).
    encode_sthx = 0x7C00032E;
    /// Encode `sthux` (store halfword with update indexed).
    encode_sthux = 0x7C00036E;
    /// Encode `stwx` (store word indexed).
    encode_stwx = 0x7C00012E;
    /// Encode `stwux` (store word with update indexed).
    encode_stwux = 0x7C00016E;
    /// Encode `sthbrx` (store halfword byte-reversed indexed).
    encode_sthbrx = 0x7C00072C;
    /// Encode `stwbrx` (store word byte-reversed indexed).
    encode_stwbrx = 0x7C00052C;
    /// Encode `stwcx.` (store word conditional indexed; always records into
    /// cr0, the Rc bit is part of the opcode).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::Gpr;
    /// use gekko::ppc32::encode_stwcx;
    /// assert_eq!(encode_stwcx(Gpr::R3, Gpr::R0, Gpr::R4), 0x7C60212D); // stwcx. r3, 0, r4
    /// ```
    encode_stwcx = 0x7C00012D;
}

macro_rules! d_fmem {
    ($(
        $(#[$meta:meta])*
        $name:ident = $base:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(f: Fpr, a: Gpr, offset: i16) -> u32 {
                $base
                    | ((f.0 as u32) << 21)   // frD / frS
                    | ((a.0 as u32) << 16)   // rA (base)
                    | (offset as u16 as u32) // d
            }
        )+
    };
}

d_fmem! {
    /// Encode `lfs` (load floating-point single).
    encode_lfs = 0xC0000000;
    /// Encode `lfd` (load floating-point double).
    ///
    /// # Example
    /// ```
    /// use gekko::reg::{Fpr, Gpr};
    /// use gekko::ppc32::encode_lfd;
    /// assert_eq!(encode_lfd(Fpr::F1, Gpr::R3, 0), 0xC8230000); // lfd f1, 0(r3)
    /// ```
    encode_lfd = 0xC8000000;
    /// Encode `stfs` (store floating-point single).
    encode_stfs = 0xD0000000;
    /// Encode `stfd` (store floating-point double).
    encode_stfd = 0xD8000000;
}

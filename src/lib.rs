//! Runtime 32-bit PowerPC machine-code emitter.
//!
//! Build instruction streams by calling mnemonic-named methods on
//! [`asm::Assembler`], resolve forward branches through [`asm::label::Label`]
//! tokens, and take the raw bytes for direct execution or a disk dump.
//! Encodings are byte-exact against the PPC32 ISA, including the
//! paired-single (Gekko/Broadway) extension and a small AltiVec subset.
//!
//! The emitter writes words in host byte order and never touches page
//! permissions or the instruction cache; flushing and remapping before
//! jumping into the emitted code is the host's responsibility.
//!
//! ```
//! use gekko::asm::Assembler;
//! use gekko::reg::Gpr;
//!
//! let mut asm = Assembler::default();
//! asm.li(Gpr::R3, 42);
//! asm.blr();
//!
//! let words = asm.code()
//!     .chunks(4)
//!     .map(|c| u32::from_ne_bytes(c.try_into().unwrap()))
//!     .collect::<Vec<_>>();
//! assert_eq!(words, [0x3860002A, 0x4E800020]); // li r3, 42; blr
//! ```

#[macro_use]
pub mod util;

pub mod reg;
pub mod ppc32;
pub mod asm;

//! The emitter facade: mnemonic methods, pseudo-ops, directives and branch
//! fixup over a [`CodeBuf`].

use crate::asm::buffer::{CodeBuf, GrowMode, DEFAULT_CAPACITY};
use crate::asm::errors::{DumpError, FinishError, UnplacedBranchInfo};
use crate::asm::label::{BranchKind, Label};
use crate::ppc32::{self, pseudo};
use crate::reg::{Cond, Cr, Fpr, Gpr, Sr, Vr};
use crate::util::into_bytes::IntoBytes;
use crate::util::misc::fits_signed_bits;

use std::fs;
use std::panic::Location;
use std::path::Path;

use rustc_hash::FxHashMap;

/// PPC32 machine-code emitter.
///
/// Every mnemonic is a method that encodes one instruction word and appends
/// it at the cursor. Branch methods whose target is not known yet return a
/// [`Label`] to be resolved later with [`Assembler::set_label`] /
/// [`Assembler::set_label_to`]. [`Assembler::finish`] hands the buffer over
/// once every label has been resolved.
///
/// User code extends the instruction surface by wrapping an `Assembler` and
/// building additional mnemonics out of the public [`Assembler::emit_word`]
/// / [`Assembler::emit_data`] primitives.
///
/// The emitter is single-threaded; an instance is deliberately neither
/// `Send` nor `Sync`.
pub struct Assembler {
    buf: CodeBuf,
    pub(crate) unresolved: FxHashMap<u32, UnplacedBranchInfo>,
}

impl Default for Assembler {
    #[inline(always)]
    fn default() -> Self {
        Self::new(GrowMode::FixedSize, DEFAULT_CAPACITY)
    }
}

impl Assembler {
    /// Create an emitter with `capacity` bytes reserved up front.
    ///
    /// A capacity of zero skips allocation; storage then arrives later via
    /// [`Assembler::set_buffer`] (or, in [`GrowMode::AutoGrow`], the first
    /// append).
    ///
    /// # Examples
    ///
    /// ```
    /// use gekko::asm::Assembler;
    /// use gekko::asm::buffer::GrowMode;
    /// use gekko::reg::Gpr;
    ///
    /// let mut asm = Assembler::new(GrowMode::FixedSize, 4096);
    /// asm.li(Gpr::R3, -1);
    /// asm.blr();
    /// assert_eq!(asm.code_size(), 8);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is not word-aligned.
    #[must_use]
    pub fn new(mode: GrowMode, capacity: usize) -> Self {
        Self {
            buf: CodeBuf::new(mode, capacity),
            unresolved: FxHashMap::default(),
        }
    }

    /// Emit into a caller-owned region instead of an allocated one. The
    /// region is never freed by the emitter, and the cursor resets to its
    /// start. Outstanding labels are discarded.
    ///
    /// # Safety
    ///
    /// `p` must be valid for writes of `size` bytes for as long as the
    /// emitter (or the emitted code) is in use.
    pub unsafe fn set_buffer(&mut self, p: *mut u8, size: usize) {
        self.buf.set_external(p, size);
        self.unresolved.clear();
    }

    /// Set how much an auto-growing buffer grows per reallocation.
    #[inline(always)]
    pub fn set_grow_step(&mut self, step: usize) {
        self.buf.set_grow_step(step);
    }

    /// Base of the emitted code (null until storage exists).
    #[inline(always)]
    #[must_use]
    pub fn base_ptr(&self) -> *const u8 {
        self.buf.base_ptr()
    }

    /// The cursor: byte offset where the next instruction word will land.
    /// Capture it before a loop body to resolve a backward branch.
    #[inline(always)]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.buf.len()
    }

    /// Bytes emitted so far (equal to [`Assembler::cursor`]).
    #[inline(always)]
    #[must_use]
    pub fn code_size(&self) -> usize {
        self.buf.len()
    }

    /// The emitted bytes.
    #[inline(always)]
    #[must_use]
    pub fn code(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// Append one instruction word at the cursor, in host byte order. This
    /// is the extension primitive: wrapper types build new mnemonics on it.
    #[inline(always)]
    pub fn emit_word(&mut self, word: u32) {
        debug_assert!(
            self.buf.len() & 3 == 0,
            "instruction emitted at unaligned cursor",
        );
        self.buf.write_bytes(&word.to_ne_bytes());
    }

    /// Append raw data at the cursor.
    #[inline(always)]
    pub fn emit_data<'a>(&mut self, data: impl IntoBytes<'a>) {
        self.buf.write_bytes(&data.into_bytes());
    }

    /// Write the emitted bytes to `path`, raw and headerless.
    pub fn dump(&self, path: impl AsRef<Path>) -> Result<(), DumpError> {
        let path = path.as_ref();
        fs::write(path, self.code()).map_err(|source| DumpError {
            path: path.to_path_buf(),
            bytes: self.code_size(),
            source,
        })?;

        tracing::info!(
            bytes = self.code_size(),
            path = %path.display(),
            "dumped code buffer",
        );

        Ok(())
    }

    /// Validate that every emitted branch was resolved and hand the buffer
    /// over.
    ///
    /// An unresolved forward branch still carries a zero displacement (it
    /// would branch to itself), so this is the checked hand-off to use
    /// before executing or persisting the code.
    pub fn finish(self) -> Result<CodeBuf, FinishError> {
        if self.unresolved.is_empty() {
            Ok(self.buf)
        } else {
            Err(FinishError::from_asm(self))
        }
    }

    // =========================================================================
    // Data directives
    // =========================================================================

    /// Append a byte. Arrays of any scalar go through
    /// [`Assembler::emit_data`].
    #[inline(always)]
    pub fn db(&mut self, v: u8) {
        self.emit_data(v);
    }

    /// Append a halfword.
    #[inline(always)]
    pub fn dh(&mut self, v: u16) {
        self.emit_data(v);
    }

    /// Append a word.
    #[inline(always)]
    pub fn dw(&mut self, v: u32) {
        self.emit_data(v);
    }

    /// Append a doubleword.
    #[inline(always)]
    pub fn dd(&mut self, v: u64) {
        self.emit_data(v);
    }

    /// Append a single-precision float.
    #[inline(always)]
    pub fn df32(&mut self, v: f32) {
        self.emit_data(v);
    }

    /// Append a double-precision float.
    #[inline(always)]
    pub fn df64(&mut self, v: f64) {
        self.emit_data(v);
    }

    /// Append a string's bytes followed by a NUL terminator.
    pub fn ds(&mut self, s: &str) {
        self.emit_data(s.as_bytes());
        self.db(0);
    }

    /// Append zero bytes until the cursor is a multiple of `n`. `n == 1` is
    /// a no-op. Alignment is computed on the cursor offset, so emitted bytes
    /// do not depend on where the buffer was allocated; owned buffers are
    /// 64-byte aligned, making offset and address alignment agree up to a
    /// cache line.
    ///
    /// # Panics
    ///
    /// Panics on `n == 0`.
    pub fn align(&mut self, n: usize) {
        if n == 0 {
            panic!("tried to align to a zero-byte boundary");
        }
        if n == 1 {
            return;
        }

        let rem = self.cursor() % n;
        if rem != 0 {
            self.emit_data(vec![0u8; n - rem]);
        }
    }

    /// Invoke `f` exactly `n` times with the iteration index, appending `n`
    /// copies of whatever `f` emits.
    pub fn repeat(&mut self, n: usize, mut f: impl FnMut(&mut Self, usize)) {
        for i in 0..n {
            f(self, i);
        }
    }

    /// Emit a counted loop: load `iterations` into `counter`, run `body`,
    /// decrement with `addic.` and branch back while non-zero. Zero
    /// iterations emit nothing.
    pub fn loop_(&mut self, counter: Gpr, iterations: u32, body: impl FnOnce(&mut Self)) {
        if iterations == 0 {
            return;
        }

        self.liw(counter, iterations);
        let anchor = self.cursor();
        body(self);
        self.addic(counter, counter, -1, true); // addi does not touch cr0
        let slot = self.bne();
        self.set_label_to(slot, anchor);
    }

    /// Append the all-zero word: an illegal opcode, convenient as a trap.
    #[inline(always)]
    pub fn ud(&mut self) {
        self.emit_word(0);
    }

    // =========================================================================
    // Pseudo-ops
    // =========================================================================

    /// `li`: load a sign-extended 16-bit immediate (`addi rd, r0, imm`).
    #[inline(always)]
    pub fn li(&mut self, rd: Gpr, imm: i16) {
        self.addi(rd, Gpr::R0, imm);
    }

    /// `lis`: load an immediate into the upper halfword (`addis rd, r0, imm`).
    #[inline(always)]
    pub fn lis(&mut self, rd: Gpr, imm: u16) {
        self.addis(rd, Gpr::R0, imm as i16);
    }

    /// `liu`: load an unsigned 16-bit immediate without sign-extending
    /// bit 15.
    #[inline(always)]
    pub fn liu(&mut self, rd: Gpr, imm: u16) {
        self.emit_data(pseudo::encode_liu(rd, imm));
    }

    /// `liw`: load an arbitrary 32-bit value exactly, using the shortest
    /// `li` / `lis` / `lis`+`ori` sequence.
    #[inline(always)]
    pub fn liw(&mut self, rd: Gpr, imm: u32) {
        self.emit_data(pseudo::encode_liw(rd, imm));
    }

    /// `mr`: move register (`or rd, rs, rs`).
    #[inline(always)]
    pub fn mr(&mut self, d: Gpr, s: Gpr, rc: bool) {
        self.or(d, s, s, rc);
    }

    /// `setz`: set `d` to 1 if `s` is zero, else 0. `cntlzw` yields 32
    /// only for a zero input, and bit 5 is the only bit set in 32.
    pub fn setz(&mut self, d: Gpr, s: Gpr) {
        self.cntlzw(d, s, false);
        self.srwi(d, d, 5, false);
    }

    /// `nop` (`ori r0, r0, 0`).
    #[inline(always)]
    pub fn nop(&mut self) {
        self.ori(Gpr::R0, Gpr::R0, 0);
    }

    /// `blr`: branch to the link register.
    #[inline(always)]
    pub fn blr(&mut self) {
        self.emit_word(0x4E800020);
    }

    /// `bctr`: branch to the count register.
    #[inline(always)]
    pub fn bctr(&mut self) {
        self.emit_word(0x4E800420);
    }

    /// `bctrl`: branch to the count register and link.
    #[inline(always)]
    pub fn bctrl(&mut self) {
        self.emit_word(0x4E800421);
    }
}

// =============================================================================
// Branches and label fixup
// =============================================================================

impl Assembler {
    #[track_caller]
    fn emit_branch(&mut self, word: u32, kind: BranchKind) -> Label {
        let at = self.cursor() as u32;
        self.emit_word(word);
        self.unresolved.insert(
            at,
            UnplacedBranchInfo {
                caller_loc: Location::caller(),
            },
        );
        Label { at, kind }
    }

    /// Unconditional branch with a yet-unknown target; resolve the returned
    /// label with [`Assembler::set_label`] / [`Assembler::set_label_to`].
    #[track_caller]
    pub fn b(&mut self) -> Label {
        self.emit_branch(0x48000000, BranchKind::Branch24)
    }

    /// Unconditional branch and link, target resolved later.
    #[track_caller]
    pub fn bl(&mut self) -> Label {
        self.emit_branch(0x48000001, BranchKind::Branch24)
    }

    /// Conditional branch on `cond`, tested against cr0.
    // TODO: handle conditional branches targeting cr1-cr7
    #[track_caller]
    pub fn bc(&mut self, cond: Cond, link: bool) -> Label {
        let word = 0x40800000
            | (cond.tests_set() as u32) << 24 // BO: branch on bit set vs. cleared
            | cond.cr_bit() << 16             // BI: which cr0 bit
            | link as u32;                    // LK

        self.emit_branch(word, BranchKind::Branch14)
    }

    /// Branch if less than.
    #[track_caller]
    pub fn blt(&mut self) -> Label {
        self.bc(Cond::Lt, false)
    }

    /// Branch if greater than.
    #[track_caller]
    pub fn bgt(&mut self) -> Label {
        self.bc(Cond::Gt, false)
    }

    /// Branch if equal.
    #[track_caller]
    pub fn beq(&mut self) -> Label {
        self.bc(Cond::Eq, false)
    }

    /// Branch if summary overflow.
    #[track_caller]
    pub fn bso(&mut self) -> Label {
        self.bc(Cond::Os, false)
    }

    /// Branch if greater than or equal.
    #[track_caller]
    pub fn bge(&mut self) -> Label {
        self.bc(Cond::Ge, false)
    }

    /// Branch if less than or equal.
    #[track_caller]
    pub fn ble(&mut self) -> Label {
        self.bc(Cond::Le, false)
    }

    /// Branch if not equal.
    #[track_caller]
    pub fn bne(&mut self) -> Label {
        self.bc(Cond::Ne, false)
    }

    /// Branch if no summary overflow.
    #[track_caller]
    pub fn bns(&mut self) -> Label {
        self.bc(Cond::Oc, false)
    }

    /// Branch if less than, and link.
    #[track_caller]
    pub fn bltl(&mut self) -> Label {
        self.bc(Cond::Lt, true)
    }

    /// Branch if greater than, and link.
    #[track_caller]
    pub fn bgtl(&mut self) -> Label {
        self.bc(Cond::Gt, true)
    }

    /// Branch if equal, and link.
    #[track_caller]
    pub fn beql(&mut self) -> Label {
        self.bc(Cond::Eq, true)
    }

    /// Branch if summary overflow, and link.
    #[track_caller]
    pub fn bsol(&mut self) -> Label {
        self.bc(Cond::Os, true)
    }

    /// Branch if greater than or equal, and link.
    #[track_caller]
    pub fn bgel(&mut self) -> Label {
        self.bc(Cond::Ge, true)
    }

    /// Branch if less than or equal, and link.
    #[track_caller]
    pub fn blel(&mut self) -> Label {
        self.bc(Cond::Le, true)
    }

    /// Branch if not equal, and link.
    #[track_caller]
    pub fn bnel(&mut self) -> Label {
        self.bc(Cond::Ne, true)
    }

    /// Branch if no summary overflow, and link.
    #[track_caller]
    pub fn bnsl(&mut self) -> Label {
        self.bc(Cond::Oc, true)
    }

    /// Resolve `label` to the current cursor (a forward branch to "here").
    pub fn set_label(&mut self, label: Label) {
        let here = self.cursor();
        self.set_label_to(label, here);
    }

    /// Resolve `label` to `target`, a byte offset into the buffer (what
    /// [`Assembler::cursor`] returned). The branch word is rewritten in
    /// place; the cursor does not move. Resolving the same label to the same
    /// target twice produces the same word.
    ///
    /// # Panics
    ///
    /// Panics on an unaligned displacement, or when neither the relative
    /// displacement nor the absolute target fits the branch's field.
    pub fn set_label_to(&mut self, label: Label, target: usize) {
        let at = label.at as usize;
        let disp = target as isize - at as isize;

        if disp & 3 != 0 {
            panic!("unaligned branch displacement: {disp:#x}");
        }

        // When the relative form overflows, the absolute target may still
        // fit the field (low-memory hosts); the AA bit marks that form.
        let abs = (self.buf.base_addr() + target) as isize;
        let word = self.buf.word_at(at);

        let patched = match label.kind {
            BranchKind::Branch14 => {
                if fits_signed_bits(disp as i64, 16) {
                    (word & !0xFFFE) | (disp as u32 & 0xFFFC)
                } else if fits_signed_bits(abs as i64, 16) {
                    (word & !0xFFFE) | (abs as u32 & 0xFFFC) | 2
                } else {
                    panic!(
                        "14-bit branch displacement out of range: {:#x} words",
                        disp >> 2,
                    );
                }
            }
            BranchKind::Branch24 => {
                if fits_signed_bits(disp as i64, 26) {
                    (word & !0x3FF_FFFE) | (disp as u32 & 0x3FF_FFFC)
                } else if fits_signed_bits(abs as i64, 26) {
                    (word & !0x3FF_FFFE) | (abs as u32 & 0x3FF_FFFC) | 2
                } else {
                    panic!(
                        "24-bit branch displacement out of range: {:#x} words",
                        disp >> 2,
                    );
                }
            }
        };

        self.buf.set_word_at(at, patched);
        self.unresolved.remove(&label.at);
    }

    /// Branch to an absolute address known at emission time (e.g. a host
    /// function). The word is emitted in final form, nothing to resolve.
    ///
    /// # Panics
    ///
    /// Panics on an unaligned target, or when neither the relative
    /// displacement nor the absolute target fits 26 bits.
    pub fn b_to(&mut self, target: usize) {
        self.bx_to(target, false);
    }

    /// Branch-and-link to an absolute address known at emission time.
    pub fn bl_to(&mut self, target: usize) {
        self.bx_to(target, true);
    }

    fn bx_to(&mut self, target: usize, link: bool) {
        if target & 3 != 0 {
            panic!("unaligned branch target: {target:#x}");
        }

        let cia = self.buf.base_addr() + self.cursor();
        let disp = target as isize - cia as isize;

        if fits_signed_bits(disp as i64, 26) {
            self.emit_word(0x48000000 | (disp as u32 & 0x3FF_FFFC) | link as u32);
        } else if fits_signed_bits(target as isize as i64, 26) {
            self.emit_word(0x48000000 | (target as u32 & 0x3FF_FFFC) | 2 | link as u32);
        } else {
            panic!(
                "24-bit branch displacement out of range: {:#x} words",
                disp >> 2,
            );
        }
    }
}

// =============================================================================
// Integer arithmetic
// =============================================================================

impl Assembler {
    /// `add` rD = rA + rB.
    #[inline(always)]
    pub fn add(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_add(d, a, b, rc)) }

    /// `addo`, overflow-enabled.
    #[inline(always)]
    pub fn addo(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_addo(d, a, b, rc)) }

    /// `addc`, carrying.
    #[inline(always)]
    pub fn addc(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_addc(d, a, b, rc)) }

    #[inline(always)]
    pub fn addco(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_addco(d, a, b, rc)) }

    /// `adde`, extended with carry-in.
    #[inline(always)]
    pub fn adde(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_adde(d, a, b, rc)) }

    #[inline(always)]
    pub fn addeo(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_addeo(d, a, b, rc)) }

    /// `addze` rD = rA + CA.
    #[inline(always)]
    pub fn addze(&mut self, d: Gpr, a: Gpr, rc: bool) { self.emit_word(ppc32::encode_addze(d, a, rc)) }

    #[inline(always)]
    pub fn addzeo(&mut self, d: Gpr, a: Gpr, rc: bool) { self.emit_word(ppc32::encode_addzeo(d, a, rc)) }

    /// `addme` rD = rA + CA - 1.
    #[inline(always)]
    pub fn addme(&mut self, d: Gpr, a: Gpr, rc: bool) { self.emit_word(ppc32::encode_addme(d, a, rc)) }

    #[inline(always)]
    pub fn addmeo(&mut self, d: Gpr, a: Gpr, rc: bool) { self.emit_word(ppc32::encode_addmeo(d, a, rc)) }

    /// `addi` rD = rA + simm (an rA of r0 reads as zero).
    #[inline(always)]
    pub fn addi(&mut self, d: Gpr, a: Gpr, imm: i16) { self.emit_word(ppc32::encode_addi(d, a, imm)) }

    /// `addis` rD = rA + (simm << 16).
    #[inline(always)]
    pub fn addis(&mut self, d: Gpr, a: Gpr, imm: i16) { self.emit_word(ppc32::encode_addis(d, a, imm)) }

    /// `addic` / `addic.` add immediate carrying; the record form is its own
    /// primary opcode.
    #[inline(always)]
    pub fn addic(&mut self, d: Gpr, a: Gpr, imm: i16, rc: bool) { self.emit_word(ppc32::encode_addic(d, a, imm, rc)) }

    /// `subf` rD = rB - rA ("subtract from", the native operand order).
    #[inline(always)]
    pub fn subf(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_subf(d, a, b, rc)) }

    /// `sub` rD = rA - rB (`subf` with the operands in natural order).
    #[inline(always)]
    pub fn sub(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.subf(d, b, a, rc) }

    #[inline(always)]
    pub fn subfo(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_subfo(d, a, b, rc)) }

    /// `subfo` in natural operand order.
    #[inline(always)]
    pub fn subo(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.subfo(d, b, a, rc) }

    #[inline(always)]
    pub fn subfc(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_subfc(d, a, b, rc)) }

    /// `subfc` in natural operand order.
    #[inline(always)]
    pub fn subc(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.subfc(d, b, a, rc) }

    #[inline(always)]
    pub fn subfco(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_subfco(d, a, b, rc)) }

    /// `subfco` in natural operand order.
    #[inline(always)]
    pub fn subco(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.subfco(d, b, a, rc) }

    #[inline(always)]
    pub fn subfe(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_subfe(d, a, b, rc)) }

    /// `subfe` in natural operand order.
    #[inline(always)]
    pub fn sube(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.subfe(d, b, a, rc) }

    #[inline(always)]
    pub fn subfeo(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_subfeo(d, a, b, rc)) }

    /// `subfeo` in natural operand order.
    #[inline(always)]
    pub fn subeo(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.subfeo(d, b, a, rc) }

    /// `subfic` rD = simm - rA.
    #[inline(always)]
    pub fn subfic(&mut self, d: Gpr, a: Gpr, imm: i16) { self.emit_word(ppc32::encode_subfic(d, a, imm)) }

    #[inline(always)]
    pub fn subfme(&mut self, d: Gpr, a: Gpr, rc: bool) { self.emit_word(ppc32::encode_subfme(d, a, rc)) }

    #[inline(always)]
    pub fn subfmeo(&mut self, d: Gpr, a: Gpr, rc: bool) { self.emit_word(ppc32::encode_subfmeo(d, a, rc)) }

    #[inline(always)]
    pub fn subfze(&mut self, d: Gpr, a: Gpr, rc: bool) { self.emit_word(ppc32::encode_subfze(d, a, rc)) }

    #[inline(always)]
    pub fn subfzeo(&mut self, d: Gpr, a: Gpr, rc: bool) { self.emit_word(ppc32::encode_subfzeo(d, a, rc)) }

    /// `neg` rD = -rA.
    #[inline(always)]
    pub fn neg(&mut self, d: Gpr, a: Gpr, rc: bool) { self.emit_word(ppc32::encode_neg(d, a, rc)) }

    #[inline(always)]
    pub fn nego(&mut self, d: Gpr, a: Gpr, rc: bool) { self.emit_word(ppc32::encode_nego(d, a, rc)) }

    /// `mulli` multiply low immediate.
    #[inline(always)]
    pub fn mulli(&mut self, d: Gpr, a: Gpr, imm: i16) { self.emit_word(ppc32::encode_mulli(d, a, imm)) }

    /// `mullw` multiply low word.
    #[inline(always)]
    pub fn mullw(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_mullw(d, a, b, rc)) }

    #[inline(always)]
    pub fn mullwo(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_mullwo(d, a, b, rc)) }

    /// `mulhw` multiply high word, signed.
    #[inline(always)]
    pub fn mulhw(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_mulhw(d, a, b, rc)) }

    /// `mulhwu` multiply high word, unsigned.
    #[inline(always)]
    pub fn mulhwu(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_mulhwu(d, a, b, rc)) }

    /// `divw` rD = rA / rB, signed.
    #[inline(always)]
    pub fn divw(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_divw(d, a, b, rc)) }

    #[inline(always)]
    pub fn divwo(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_divwo(d, a, b, rc)) }

    /// `divwu` rD = rA / rB, unsigned.
    #[inline(always)]
    pub fn divwu(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_divwu(d, a, b, rc)) }

    #[inline(always)]
    pub fn divwuo(&mut self, d: Gpr, a: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_divwuo(d, a, b, rc)) }
}

// =============================================================================
// Logical, shift/rotate and compare
// =============================================================================

impl Assembler {
    /// `and` rD = rS & rB.
    #[inline(always)]
    pub fn and(&mut self, d: Gpr, s: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_and(d, s, b, rc)) }

    /// `andc` rD = rS & !rB.
    #[inline(always)]
    pub fn andc(&mut self, d: Gpr, s: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_andc(d, s, b, rc)) }

    /// `or` rD = rS | rB.
    #[inline(always)]
    pub fn or(&mut self, d: Gpr, s: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_or(d, s, b, rc)) }

    /// `orc` rD = rS | !rB.
    #[inline(always)]
    pub fn orc(&mut self, d: Gpr, s: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_orc(d, s, b, rc)) }

    /// `xor` rD = rS ^ rB.
    #[inline(always)]
    pub fn xor(&mut self, d: Gpr, s: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_xor(d, s, b, rc)) }

    #[inline(always)]
    pub fn nand(&mut self, d: Gpr, s: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_nand(d, s, b, rc)) }

    #[inline(always)]
    pub fn nor(&mut self, d: Gpr, s: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_nor(d, s, b, rc)) }

    /// `eqv` rD = !(rS ^ rB).
    #[inline(always)]
    pub fn eqv(&mut self, d: Gpr, s: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_eqv(d, s, b, rc)) }

    /// `andi.` (always records into cr0).
    #[inline(always)]
    pub fn andi(&mut self, d: Gpr, s: Gpr, imm: u16) { self.emit_word(ppc32::encode_andi(d, s, imm)) }

    /// `andis.` (always records into cr0).
    #[inline(always)]
    pub fn andis(&mut self, d: Gpr, s: Gpr, imm: u16) { self.emit_word(ppc32::encode_andis(d, s, imm)) }

    /// `ori` rD = rS | uimm.
    #[inline(always)]
    pub fn ori(&mut self, d: Gpr, s: Gpr, imm: u16) { self.emit_word(ppc32::encode_ori(d, s, imm)) }

    #[inline(always)]
    pub fn oris(&mut self, d: Gpr, s: Gpr, imm: u16) { self.emit_word(ppc32::encode_oris(d, s, imm)) }

    #[inline(always)]
    pub fn xori(&mut self, d: Gpr, s: Gpr, imm: u16) { self.emit_word(ppc32::encode_xori(d, s, imm)) }

    #[inline(always)]
    pub fn xoris(&mut self, d: Gpr, s: Gpr, imm: u16) { self.emit_word(ppc32::encode_xoris(d, s, imm)) }

    /// `extsb` sign-extend byte.
    #[inline(always)]
    pub fn extsb(&mut self, d: Gpr, s: Gpr, rc: bool) { self.emit_word(ppc32::encode_extsb(d, s, rc)) }

    /// `extsh` sign-extend halfword.
    #[inline(always)]
    pub fn extsh(&mut self, d: Gpr, s: Gpr, rc: bool) { self.emit_word(ppc32::encode_extsh(d, s, rc)) }

    /// `cntlzw` count leading zeroes (32 for a zero input).
    #[inline(always)]
    pub fn cntlzw(&mut self, d: Gpr, s: Gpr, rc: bool) { self.emit_word(ppc32::encode_cntlzw(d, s, rc)) }

    /// `slw` shift left word by rB.
    #[inline(always)]
    pub fn slw(&mut self, d: Gpr, s: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_slw(d, s, b, rc)) }

    /// `srw` shift right word logical by rB.
    #[inline(always)]
    pub fn srw(&mut self, d: Gpr, s: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_srw(d, s, b, rc)) }

    /// `sraw` shift right algebraic word by rB.
    #[inline(always)]
    pub fn sraw(&mut self, d: Gpr, s: Gpr, b: Gpr, rc: bool) { self.emit_word(ppc32::encode_sraw(d, s, b, rc)) }

    /// `srawi` shift right algebraic word by immediate.
    #[inline(always)]
    pub fn srawi(&mut self, d: Gpr, s: Gpr, sh: u8, rc: bool) { self.emit_word(ppc32::encode_srawi(d, s, sh, rc)) }

    /// `rlwinm` rotate left by `sh`, then AND with the mask `mb..=me`.
    #[inline(always)]
    pub fn rlwinm(&mut self, d: Gpr, s: Gpr, sh: u8, mb: u8, me: u8, rc: bool) { self.emit_word(ppc32::encode_rlwinm(d, s, sh, mb, me, rc)) }

    /// `rlwimi` rotate left then insert under the mask.
    #[inline(always)]
    pub fn rlwimi(&mut self, d: Gpr, s: Gpr, sh: u8, mb: u8, me: u8, rc: bool) { self.emit_word(ppc32::encode_rlwimi(d, s, sh, mb, me, rc)) }

    /// `rlwnm` rotate left by rB, then AND with the mask.
    #[inline(always)]
    pub fn rlwnm(&mut self, d: Gpr, s: Gpr, b: Gpr, mb: u8, me: u8, rc: bool) { self.emit_word(ppc32::encode_rlwnm(d, s, b, mb, me, rc)) }

    /// `slwi` shift left immediate (`rlwinm` alias).
    #[inline(always)]
    pub fn slwi(&mut self, d: Gpr, s: Gpr, n: u8, rc: bool) { self.emit_word(ppc32::encode_slwi(d, s, n, rc)) }

    /// `srwi` shift right logical immediate (`rlwinm` alias).
    #[inline(always)]
    pub fn srwi(&mut self, d: Gpr, s: Gpr, n: u8, rc: bool) { self.emit_word(ppc32::encode_srwi(d, s, n, rc)) }

    /// `clrlwi` clear the leftmost `n` bits (`rlwinm` alias).
    #[inline(always)]
    pub fn clrlwi(&mut self, d: Gpr, s: Gpr, n: u8, rc: bool) { self.emit_word(ppc32::encode_clrlwi(d, s, n, rc)) }

    /// `clrrwi` clear the rightmost `n` bits (`rlwinm` alias).
    #[inline(always)]
    pub fn clrrwi(&mut self, d: Gpr, s: Gpr, n: u8, rc: bool) { self.emit_word(ppc32::encode_clrrwi(d, s, n, rc)) }

    /// `rotlwi` rotate left immediate (`rlwinm` alias).
    #[inline(always)]
    pub fn rotlwi(&mut self, d: Gpr, s: Gpr, n: u8, rc: bool) { self.emit_word(ppc32::encode_rotlwi(d, s, n, rc)) }

    /// `rotrwi` rotate right immediate (`rlwinm` alias).
    #[inline(always)]
    pub fn rotrwi(&mut self, d: Gpr, s: Gpr, n: u8, rc: bool) { self.emit_word(ppc32::encode_rotrwi(d, s, n, rc)) }

    /// `extlwi` extract `n` bits at `b`, left-justified (`rlwinm` alias).
    #[inline(always)]
    pub fn extlwi(&mut self, d: Gpr, s: Gpr, n: u8, b: u8, rc: bool) { self.emit_word(ppc32::encode_extlwi(d, s, n, b, rc)) }

    /// `extrwi` extract `n` bits at `b`, right-justified (`rlwinm` alias).
    #[inline(always)]
    pub fn extrwi(&mut self, d: Gpr, s: Gpr, n: u8, b: u8, rc: bool) { self.emit_word(ppc32::encode_extrwi(d, s, n, b, rc)) }

    /// `cmpi` compare rA against a signed immediate.
    #[inline(always)]
    pub fn cmpi(&mut self, crf: Cr, a: Gpr, imm: i16) { self.emit_word(ppc32::encode_cmpi(crf, a, imm)) }

    /// `cmpli` compare rA against an unsigned immediate.
    #[inline(always)]
    pub fn cmpli(&mut self, crf: Cr, a: Gpr, imm: u16) { self.emit_word(ppc32::encode_cmpli(crf, a, imm)) }

    /// `cmp` compare rA with rB, signed.
    #[inline(always)]
    pub fn cmp(&mut self, crf: Cr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_cmp(crf, a, b)) }

    /// `cmpl` compare rA with rB, unsigned.
    #[inline(always)]
    pub fn cmpl(&mut self, crf: Cr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_cmpl(crf, a, b)) }
}

// =============================================================================
// Loads and stores
// =============================================================================

impl Assembler {
    /// `lbz` load byte and zero.
    #[inline(always)]
    pub fn lbz(&mut self, d: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_lbz(d, a, offset)) }

    /// `lbzu` load byte and zero, update rA.
    #[inline(always)]
    pub fn lbzu(&mut self, d: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_lbzu(d, a, offset)) }

    /// `lbzx` load byte and zero indexed.
    #[inline(always)]
    pub fn lbzx(&mut self, d: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_lbzx(d, a, b)) }

    #[inline(always)]
    pub fn lbzux(&mut self, d: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_lbzux(d, a, b)) }

    /// `lhz` load halfword and zero.
    #[inline(always)]
    pub fn lhz(&mut self, d: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_lhz(d, a, offset)) }

    #[inline(always)]
    pub fn lhzu(&mut self, d: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_lhzu(d, a, offset)) }

    #[inline(always)]
    pub fn lhzx(&mut self, d: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_lhzx(d, a, b)) }

    #[inline(always)]
    pub fn lhzux(&mut self, d: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_lhzux(d, a, b)) }

    /// `lha` load halfword algebraic (sign-extending).
    #[inline(always)]
    pub fn lha(&mut self, d: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_lha(d, a, offset)) }

    #[inline(always)]
    pub fn lhau(&mut self, d: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_lhau(d, a, offset)) }

    #[inline(always)]
    pub fn lhax(&mut self, d: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_lhax(d, a, b)) }

    #[inline(always)]
    pub fn lhaux(&mut self, d: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_lhaux(d, a, b)) }

    /// `lwz` load word and zero.
    #[inline(always)]
    pub fn lwz(&mut self, d: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_lwz(d, a, offset)) }

    #[inline(always)]
    pub fn lwzu(&mut self, d: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_lwzu(d, a, offset)) }

    #[inline(always)]
    pub fn lwzx(&mut self, d: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_lwzx(d, a, b)) }

    #[inline(always)]
    pub fn lwzux(&mut self, d: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_lwzux(d, a, b)) }

    /// `lhbrx` load halfword byte-reversed indexed.
    #[inline(always)]
    pub fn lhbrx(&mut self, d: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_lhbrx(d, a, b)) }

    /// `lwbrx` load word byte-reversed indexed.
    #[inline(always)]
    pub fn lwbrx(&mut self, d: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_lwbrx(d, a, b)) }

    /// `lwarx` load word and reserve indexed.
    #[inline(always)]
    pub fn lwarx(&mut self, d: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_lwarx(d, a, b)) }

    /// `lmw` load multiple words into rD..r31.
    #[inline(always)]
    pub fn lmw(&mut self, d: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_lmw(d, a, offset)) }

    /// `stb` store byte (source register first).
    #[inline(always)]
    pub fn stb(&mut self, s: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_stb(s, a, offset)) }

    #[inline(always)]
    pub fn stbu(&mut self, s: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_stbu(s, a, offset)) }

    #[inline(always)]
    pub fn stbx(&mut self, s: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_stbx(s, a, b)) }

    #[inline(always)]
    pub fn stbux(&mut self, s: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_stbux(s, a, b)) }

    /// `sth` store halfword.
    #[inline(always)]
    pub fn sth(&mut self, s: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_sth(s, a, offset)) }

    #[inline(always)]
    pub fn sthu(&mut self, s: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_sthu(s, a, offset)) }

    #[inline(always)]
    pub fn sthx(&mut self, s: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_sthx(s, a, b)) }

    #[inline(always)]
    pub fn sthux(&mut self, s: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_sthux(s, a, b)) }

    /// `stw` store word.
    #[inline(always)]
    pub fn stw(&mut self, s: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_stw(s, a, offset)) }

    #[inline(always)]
    pub fn stwu(&mut self, s: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_stwu(s, a, offset)) }

    #[inline(always)]
    pub fn stwx(&mut self, s: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_stwx(s, a, b)) }

    #[inline(always)]
    pub fn stwux(&mut self, s: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_stwux(s, a, b)) }

    /// `sthbrx` store halfword byte-reversed indexed.
    #[inline(always)]
    pub fn sthbrx(&mut self, s: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_sthbrx(s, a, b)) }

    /// `stwbrx` store word byte-reversed indexed.
    #[inline(always)]
    pub fn stwbrx(&mut self, s: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_stwbrx(s, a, b)) }

    /// `stwcx.` store word conditional indexed (always records).
    #[inline(always)]
    pub fn stwcx(&mut self, s: Gpr, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_stwcx(s, a, b)) }

    /// `stmw` store multiple words from rS..r31.
    #[inline(always)]
    pub fn stmw(&mut self, s: Gpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_stmw(s, a, offset)) }

    /// `lfs` load floating-point single.
    #[inline(always)]
    pub fn lfs(&mut self, d: Fpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_lfs(d, a, offset)) }

    /// `lfd` load floating-point double.
    #[inline(always)]
    pub fn lfd(&mut self, d: Fpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_lfd(d, a, offset)) }

    /// `stfs` store floating-point single.
    #[inline(always)]
    pub fn stfs(&mut self, s: Fpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_stfs(s, a, offset)) }

    /// `stfd` store floating-point double.
    #[inline(always)]
    pub fn stfd(&mut self, s: Fpr, a: Gpr, offset: i16) { self.emit_word(ppc32::encode_stfd(s, a, offset)) }
}

// =============================================================================
// Scalar floating point
// =============================================================================

impl Assembler {
    /// `fmr` floating move register.
    #[inline(always)]
    pub fn fmr(&mut self, d: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fmr(d, b, rc)) }

    /// `fneg` floating negate.
    #[inline(always)]
    pub fn fneg(&mut self, d: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fneg(d, b, rc)) }

    /// `fabs` floating absolute value.
    #[inline(always)]
    pub fn fabs(&mut self, d: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fabs(d, b, rc)) }

    /// `fnabs` floating negative absolute value.
    #[inline(always)]
    pub fn fnabs(&mut self, d: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fnabs(d, b, rc)) }

    /// `frsp` round to single.
    #[inline(always)]
    pub fn frsp(&mut self, d: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_frsp(d, b, rc)) }

    /// `fres` reciprocal estimate single.
    #[inline(always)]
    pub fn fres(&mut self, d: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fres(d, b, rc)) }

    /// `frsqrte` reciprocal square-root estimate.
    #[inline(always)]
    pub fn frsqrte(&mut self, d: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_frsqrte(d, b, rc)) }

    /// `fadd` floating add double.
    #[inline(always)]
    pub fn fadd(&mut self, d: Fpr, a: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fadd(d, a, b, rc)) }

    /// `fadds` floating add single.
    #[inline(always)]
    pub fn fadds(&mut self, d: Fpr, a: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fadds(d, a, b, rc)) }

    /// `fsub` floating subtract double.
    #[inline(always)]
    pub fn fsub(&mut self, d: Fpr, a: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fsub(d, a, b, rc)) }

    #[inline(always)]
    pub fn fsubs(&mut self, d: Fpr, a: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fsubs(d, a, b, rc)) }

    /// `fmul` floating multiply double (second factor in frC).
    #[inline(always)]
    pub fn fmul(&mut self, d: Fpr, a: Fpr, c: Fpr, rc: bool) { self.emit_word(ppc32::encode_fmul(d, a, c, rc)) }

    #[inline(always)]
    pub fn fmuls(&mut self, d: Fpr, a: Fpr, c: Fpr, rc: bool) { self.emit_word(ppc32::encode_fmuls(d, a, c, rc)) }

    /// `fdiv` floating divide double.
    #[inline(always)]
    pub fn fdiv(&mut self, d: Fpr, a: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fdiv(d, a, b, rc)) }

    #[inline(always)]
    pub fn fdivs(&mut self, d: Fpr, a: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fdivs(d, a, b, rc)) }

    /// `fmadd` frD = frA * frC + frB.
    #[inline(always)]
    pub fn fmadd(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fmadd(d, a, c, b, rc)) }

    #[inline(always)]
    pub fn fmadds(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fmadds(d, a, c, b, rc)) }

    /// `fmsub` frD = frA * frC - frB.
    #[inline(always)]
    pub fn fmsub(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fmsub(d, a, c, b, rc)) }

    #[inline(always)]
    pub fn fmsubs(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fmsubs(d, a, c, b, rc)) }

    /// `fnmadd` frD = -(frA * frC + frB).
    #[inline(always)]
    pub fn fnmadd(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fnmadd(d, a, c, b, rc)) }

    #[inline(always)]
    pub fn fnmadds(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fnmadds(d, a, c, b, rc)) }

    /// `fnmsub` frD = -(frA * frC - frB).
    #[inline(always)]
    pub fn fnmsub(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fnmsub(d, a, c, b, rc)) }

    #[inline(always)]
    pub fn fnmsubs(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fnmsubs(d, a, c, b, rc)) }

    /// `fsel` frD = frC if frA >= 0 else frB.
    #[inline(always)]
    pub fn fsel(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_fsel(d, a, c, b, rc)) }
}

// =============================================================================
// Paired singles (Gekko/Broadway)
// =============================================================================

impl Assembler {
    /// `ps_mr` paired move register.
    #[inline(always)]
    pub fn ps_mr(&mut self, d: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_mr(d, b, rc)) }

    /// `ps_abs` paired absolute value.
    #[inline(always)]
    pub fn ps_abs(&mut self, d: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_abs(d, b, rc)) }

    #[inline(always)]
    pub fn ps_nabs(&mut self, d: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_nabs(d, b, rc)) }

    #[inline(always)]
    pub fn ps_neg(&mut self, d: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_neg(d, b, rc)) }

    /// `ps_res` paired reciprocal estimate.
    #[inline(always)]
    pub fn ps_res(&mut self, d: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_res(d, b, rc)) }

    /// `ps_rsqrte` paired reciprocal square-root estimate.
    #[inline(always)]
    pub fn ps_rsqrte(&mut self, d: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_rsqrte(d, b, rc)) }

    /// `ps_add` lane-wise add.
    #[inline(always)]
    pub fn ps_add(&mut self, d: Fpr, a: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_add(d, a, b, rc)) }

    /// `ps_sub` lane-wise subtract.
    #[inline(always)]
    pub fn ps_sub(&mut self, d: Fpr, a: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_sub(d, a, b, rc)) }

    /// `ps_div` lane-wise divide.
    #[inline(always)]
    pub fn ps_div(&mut self, d: Fpr, a: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_div(d, a, b, rc)) }

    /// `ps_mul` lane-wise multiply (second factor in frC).
    #[inline(always)]
    pub fn ps_mul(&mut self, d: Fpr, a: Fpr, c: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_mul(d, a, c, rc)) }

    /// `ps_muls0` multiply both lanes by frC's high lane.
    #[inline(always)]
    pub fn ps_muls0(&mut self, d: Fpr, a: Fpr, c: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_muls0(d, a, c, rc)) }

    /// `ps_muls1` multiply both lanes by frC's low lane.
    #[inline(always)]
    pub fn ps_muls1(&mut self, d: Fpr, a: Fpr, c: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_muls1(d, a, c, rc)) }

    /// `ps_madd` frD = frA * frC + frB, both lanes.
    #[inline(always)]
    pub fn ps_madd(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_madd(d, a, c, b, rc)) }

    #[inline(always)]
    pub fn ps_madds0(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_madds0(d, a, c, b, rc)) }

    #[inline(always)]
    pub fn ps_madds1(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_madds1(d, a, c, b, rc)) }

    /// `ps_msub` frD = frA * frC - frB, both lanes.
    #[inline(always)]
    pub fn ps_msub(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_msub(d, a, c, b, rc)) }

    #[inline(always)]
    pub fn ps_nmadd(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_nmadd(d, a, c, b, rc)) }

    #[inline(always)]
    pub fn ps_nmsub(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_nmsub(d, a, c, b, rc)) }

    /// `ps_sel` lane-wise select on frA's sign.
    #[inline(always)]
    pub fn ps_sel(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_sel(d, a, c, b, rc)) }

    /// `ps_sum0` cross-lane sum into the high lane.
    #[inline(always)]
    pub fn ps_sum0(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_sum0(d, a, c, b, rc)) }

    /// `ps_sum1` cross-lane sum into the low lane.
    #[inline(always)]
    pub fn ps_sum1(&mut self, d: Fpr, a: Fpr, c: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_sum1(d, a, c, b, rc)) }

    /// `ps_merge00` both high lanes.
    #[inline(always)]
    pub fn ps_merge00(&mut self, d: Fpr, a: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_merge00(d, a, b, rc)) }

    /// `ps_merge01` high lane of frA, low lane of frB.
    #[inline(always)]
    pub fn ps_merge01(&mut self, d: Fpr, a: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_merge01(d, a, b, rc)) }

    /// `ps_merge10` low lane of frA, high lane of frB.
    #[inline(always)]
    pub fn ps_merge10(&mut self, d: Fpr, a: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_merge10(d, a, b, rc)) }

    /// `ps_merge11` both low lanes.
    #[inline(always)]
    pub fn ps_merge11(&mut self, d: Fpr, a: Fpr, b: Fpr, rc: bool) { self.emit_word(ppc32::encode_ps_merge11(d, a, b, rc)) }

    /// `ps_cmpu0` compare unordered, high lanes.
    #[inline(always)]
    pub fn ps_cmpu0(&mut self, crf: Cr, a: Fpr, b: Fpr) { self.emit_word(ppc32::encode_ps_cmpu0(crf, a, b)) }

    /// `ps_cmpo0` compare ordered, high lanes.
    #[inline(always)]
    pub fn ps_cmpo0(&mut self, crf: Cr, a: Fpr, b: Fpr) { self.emit_word(ppc32::encode_ps_cmpo0(crf, a, b)) }

    /// `ps_cmpu1` compare unordered, low lanes.
    #[inline(always)]
    pub fn ps_cmpu1(&mut self, crf: Cr, a: Fpr, b: Fpr) { self.emit_word(ppc32::encode_ps_cmpu1(crf, a, b)) }

    /// `ps_cmpo1` compare ordered, low lanes.
    #[inline(always)]
    pub fn ps_cmpo1(&mut self, crf: Cr, a: Fpr, b: Fpr) { self.emit_word(ppc32::encode_ps_cmpo1(crf, a, b)) }
}

// =============================================================================
// AltiVec subset
// =============================================================================

impl Assembler {
    /// `vaddfp` vector add single-precision.
    #[inline(always)]
    pub fn vaddfp(&mut self, d: Vr, a: Vr, b: Vr) { self.emit_word(ppc32::encode_vaddfp(d, a, b)) }

    /// `vsubfp` vector subtract single-precision.
    #[inline(always)]
    pub fn vsubfp(&mut self, d: Vr, a: Vr, b: Vr) { self.emit_word(ppc32::encode_vsubfp(d, a, b)) }

    #[inline(always)]
    pub fn vand(&mut self, d: Vr, a: Vr, b: Vr) { self.emit_word(ppc32::encode_vand(d, a, b)) }

    /// `vandc` vD = vA & !vB.
    #[inline(always)]
    pub fn vandc(&mut self, d: Vr, a: Vr, b: Vr) { self.emit_word(ppc32::encode_vandc(d, a, b)) }

    #[inline(always)]
    pub fn vor(&mut self, d: Vr, a: Vr, b: Vr) { self.emit_word(ppc32::encode_vor(d, a, b)) }

    #[inline(always)]
    pub fn vnor(&mut self, d: Vr, a: Vr, b: Vr) { self.emit_word(ppc32::encode_vnor(d, a, b)) }

    #[inline(always)]
    pub fn vxor(&mut self, d: Vr, a: Vr, b: Vr) { self.emit_word(ppc32::encode_vxor(d, a, b)) }

    /// `vperm` permute the bytes of vA:vB by the indices in vC.
    #[inline(always)]
    pub fn vperm(&mut self, d: Vr, a: Vr, b: Vr, c: Vr) { self.emit_word(ppc32::encode_vperm(d, a, b, c)) }

    /// `vrefp` vector reciprocal estimate.
    #[inline(always)]
    pub fn vrefp(&mut self, d: Vr, b: Vr) { self.emit_word(ppc32::encode_vrefp(d, b)) }

    /// `dss` stop data stream `stream` (0..3).
    #[inline(always)]
    pub fn dss(&mut self, stream: u8) { self.emit_word(ppc32::encode_dss(stream)) }

    /// `dssall` stop all data streams.
    #[inline(always)]
    pub fn dssall(&mut self) { self.emit_word(ppc32::encode_dssall()) }
}

// =============================================================================
// CR bit ops, system-register moves, cache/TLB and synchronization
// =============================================================================

impl Assembler {
    /// `crand`: operands are CR bit numbers (0..31).
    #[inline(always)]
    pub fn crand(&mut self, d: u8, a: u8, b: u8) { self.emit_word(ppc32::encode_crand(d, a, b)) }

    #[inline(always)]
    pub fn crandc(&mut self, d: u8, a: u8, b: u8) { self.emit_word(ppc32::encode_crandc(d, a, b)) }

    #[inline(always)]
    pub fn creqv(&mut self, d: u8, a: u8, b: u8) { self.emit_word(ppc32::encode_creqv(d, a, b)) }

    #[inline(always)]
    pub fn crnand(&mut self, d: u8, a: u8, b: u8) { self.emit_word(ppc32::encode_crnand(d, a, b)) }

    #[inline(always)]
    pub fn crnor(&mut self, d: u8, a: u8, b: u8) { self.emit_word(ppc32::encode_crnor(d, a, b)) }

    #[inline(always)]
    pub fn cror(&mut self, d: u8, a: u8, b: u8) { self.emit_word(ppc32::encode_cror(d, a, b)) }

    #[inline(always)]
    pub fn crorc(&mut self, d: u8, a: u8, b: u8) { self.emit_word(ppc32::encode_crorc(d, a, b)) }

    #[inline(always)]
    pub fn crxor(&mut self, d: u8, a: u8, b: u8) { self.emit_word(ppc32::encode_crxor(d, a, b)) }

    /// `mtcrf` move to the CR fields selected by `mask`.
    #[inline(always)]
    pub fn mtcrf(&mut self, mask: u8, s: Gpr) { self.emit_word(ppc32::encode_mtcrf(mask, s)) }

    /// `mtcr` move to the whole condition register (`mtcrf 0xFF`).
    #[inline(always)]
    pub fn mtcr(&mut self, s: Gpr) { self.mtcrf(0xFF, s) }

    /// `mfcr` move from the condition register.
    #[inline(always)]
    pub fn mfcr(&mut self, d: Gpr) { self.emit_word(ppc32::encode_mfcr(d)) }

    /// `mtsr` move to segment register.
    #[inline(always)]
    pub fn mtsr(&mut self, sr: Sr, s: Gpr) { self.emit_word(ppc32::encode_mtsr(sr, s)) }

    /// `mfsr` move from segment register.
    #[inline(always)]
    pub fn mfsr(&mut self, d: Gpr, sr: Sr) { self.emit_word(ppc32::encode_mfsr(d, sr)) }

    /// `mtsrin` move to segment register indirect.
    #[inline(always)]
    pub fn mtsrin(&mut self, s: Gpr, b: Gpr) { self.emit_word(ppc32::encode_mtsrin(s, b)) }

    /// `mfsrin` move from segment register indirect.
    #[inline(always)]
    pub fn mfsrin(&mut self, d: Gpr, b: Gpr) { self.emit_word(ppc32::encode_mfsrin(d, b)) }

    /// `mfmsr` move from the machine state register.
    #[inline(always)]
    pub fn mfmsr(&mut self, d: Gpr) { self.emit_word(ppc32::encode_mfmsr(d)) }

    /// `mtmsr` move to the machine state register.
    #[inline(always)]
    pub fn mtmsr(&mut self, s: Gpr) { self.emit_word(ppc32::encode_mtmsr(s)) }

    /// `mtctr` move to the count register.
    #[inline(always)]
    pub fn mtctr(&mut self, s: Gpr) { self.emit_word(ppc32::encode_mtctr(s)) }

    /// `mfctr` move from the count register.
    #[inline(always)]
    pub fn mfctr(&mut self, d: Gpr) { self.emit_word(ppc32::encode_mfctr(d)) }

    /// `mflr` move from the link register.
    #[inline(always)]
    pub fn mflr(&mut self, d: Gpr) { self.emit_word(ppc32::encode_mflr(d)) }

    /// `mtlr` move to the link register.
    #[inline(always)]
    pub fn mtlr(&mut self, s: Gpr) { self.emit_word(ppc32::encode_mtlr(s)) }

    /// `icbi` instruction cache block invalidate.
    #[inline(always)]
    pub fn icbi(&mut self, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_icbi(a, b)) }

    /// `dcbf` data cache block flush.
    #[inline(always)]
    pub fn dcbf(&mut self, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_dcbf(a, b)) }

    /// `dcbi` data cache block invalidate.
    #[inline(always)]
    pub fn dcbi(&mut self, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_dcbi(a, b)) }

    /// `dcbst` data cache block store.
    #[inline(always)]
    pub fn dcbst(&mut self, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_dcbst(a, b)) }

    /// `dcbt` data cache block touch.
    #[inline(always)]
    pub fn dcbt(&mut self, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_dcbt(a, b)) }

    /// `dcbtst` data cache block touch for store.
    #[inline(always)]
    pub fn dcbtst(&mut self, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_dcbtst(a, b)) }

    /// `dcbz` data cache block clear to zero.
    #[inline(always)]
    pub fn dcbz(&mut self, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_dcbz(a, b)) }

    /// `dcbz_l` clear to zero in locked cache (Gekko/Broadway).
    #[inline(always)]
    pub fn dcbz_l(&mut self, a: Gpr, b: Gpr) { self.emit_word(ppc32::encode_dcbz_l(a, b)) }

    /// `tlbie` invalidate the TLB entry for the EA in rB.
    #[inline(always)]
    pub fn tlbie(&mut self, b: Gpr) { self.emit_word(ppc32::encode_tlbie(b)) }

    /// `tlbsync`.
    #[inline(always)]
    pub fn tlbsync(&mut self) { self.emit_word(ppc32::encode_tlbsync()) }

    /// `eieio` enforce in-order execution of I/O.
    #[inline(always)]
    pub fn eieio(&mut self) { self.emit_word(ppc32::encode_eieio()) }

    /// `isync` instruction synchronize.
    #[inline(always)]
    pub fn isync(&mut self) { self.emit_word(ppc32::encode_isync()) }

    /// `sync`.
    #[inline(always)]
    pub fn sync(&mut self) { self.emit_word(ppc32::encode_sync()) }

    /// `rfi` return from interrupt.
    #[inline(always)]
    pub fn rfi(&mut self) { self.emit_word(ppc32::encode_rfi()) }

    /// `sc` system call.
    #[inline(always)]
    pub fn sc(&mut self) { self.emit_word(ppc32::encode_sc()) }
}

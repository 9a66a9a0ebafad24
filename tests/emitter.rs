//! End-to-end emitter tests: byte-exact expectations for instruction
//! sequences, pseudo-ops, directives and branch fixup.

use gekko::asm::buffer::GrowMode;
use gekko::asm::Assembler;
use gekko::reg::{Cond, Cr, Fpr, Gpr, Sr, Vr};

fn fixed() -> Assembler {
    Assembler::new(GrowMode::FixedSize, 64 * 1024)
}

/// Emitted words in logical order (emission is host-endian, so read them
/// back host-endian).
fn words(asm: &Assembler) -> Vec<u32> {
    asm.code()
        .chunks(4)
        .map(|c| u32::from_ne_bytes(c.try_into().unwrap()))
        .collect()
}

// ============================================================================
// Single instructions and short sequences
// ============================================================================

#[test]
fn li_then_blr() {
    let mut asm = fixed();
    asm.li(Gpr::R3, -1);
    asm.blr();

    assert_eq!(asm.code_size(), 8);
    assert_eq!(words(&asm), [0x3860FFFF, 0x4E800020]);
}

#[test]
fn lis_then_ori() {
    let mut asm = fixed();
    asm.lis(Gpr::R3, 0x1234);
    asm.ori(Gpr::R3, Gpr::R3, 0x5678);

    assert_eq!(words(&asm), [0x3C601234, 0x60635678]);
}

#[test]
fn single_word_ops() {
    let mut asm = fixed();
    asm.nop();
    assert_eq!(words(&asm), [0x60000000]);

    let mut asm = fixed();
    asm.ud();
    assert_eq!(words(&asm), [0x00000000]);

    let mut asm = fixed();
    asm.blr();
    assert_eq!(words(&asm), [0x4E800020]);

    let mut asm = fixed();
    asm.sync();
    assert_eq!(words(&asm), [0x7C0004AC]);

    let mut asm = fixed();
    asm.bctr();
    asm.bctrl();
    assert_eq!(words(&asm), [0x4E800420, 0x4E800421]);
}

#[test]
fn classic_function_frame() {
    let mut asm = fixed();
    asm.stwu(Gpr::SP, Gpr::SP, -16);
    asm.mflr(Gpr::R0);
    asm.stw(Gpr::R0, Gpr::SP, 20);
    asm.add(Gpr::R3, Gpr::R3, Gpr::R4, false);
    asm.lwz(Gpr::R0, Gpr::SP, 20);
    asm.mtlr(Gpr::R0);
    asm.addi(Gpr::SP, Gpr::SP, 16);
    asm.blr();

    assert_eq!(
        words(&asm),
        [
            0x9421FFF0, // stwu r1, -16(r1)
            0x7C0802A6, // mflr r0
            0x90010014, // stw r0, 20(r1)
            0x7C632214, // add r3, r3, r4
            0x80010014, // lwz r0, 20(r1)
            0x7C0803A6, // mtlr r0
            0x38210010, // addi r1, r1, 16
            0x4E800020, // blr
        ],
    );
}

#[test]
fn emission_is_independent_of_prior_contents() {
    let mut alone = fixed();
    alone.mullw(Gpr::R3, Gpr::R4, Gpr::R5, false);
    let expected = words(&alone);

    let mut prefixed = fixed();
    prefixed.stwu(Gpr::SP, Gpr::SP, -32);
    prefixed.nop();
    prefixed.mullw(Gpr::R3, Gpr::R4, Gpr::R5, false);
    assert_eq!(&words(&prefixed)[2..], expected.as_slice());
}

// ============================================================================
// Pseudo-ops
// ============================================================================

#[test]
fn liw_picks_the_shortest_form() {
    let mut asm = fixed();
    asm.liw(Gpr::R1, 0x12345678);
    assert_eq!(words(&asm), [0x3C201234, 0x60215678]);

    // bit 15 set: a bare li would sign-extend, so lis 0 + ori
    let mut asm = fixed();
    asm.liw(Gpr::R1, 0x8000);
    assert_eq!(words(&asm), [0x3C200000, 0x60218000]);

    // survives sign-extension: single li
    let mut asm = fixed();
    asm.liw(Gpr::R1, 0xFFFFF000);
    assert_eq!(words(&asm), [0x3820F000]);

    // low halfword zero: single lis
    let mut asm = fixed();
    asm.liw(Gpr::R1, 0xABCD0000);
    assert_eq!(words(&asm), [0x3C20ABCD]);
}

#[test]
fn liu_avoids_sign_extension() {
    let mut asm = fixed();
    asm.liu(Gpr::R3, 0x1234);
    assert_eq!(words(&asm), [0x38601234]);

    let mut asm = fixed();
    asm.liu(Gpr::R3, 0x8000);
    assert_eq!(words(&asm), [0x38600000, 0x60638000]);
}

#[test]
fn mr_is_or_with_itself() {
    let mut asm = fixed();
    asm.mr(Gpr::R31, Gpr::R3, false);
    assert_eq!(words(&asm), [0x7C7F1B78]);
}

#[test]
fn setz_expansion() {
    let mut asm = fixed();
    asm.setz(Gpr::R3, Gpr::R4);

    let mut expected = fixed();
    expected.cntlzw(Gpr::R3, Gpr::R4, false);
    expected.srwi(Gpr::R3, Gpr::R3, 5, false);

    assert_eq!(words(&asm), words(&expected));
}

// ============================================================================
// Branch fixup
// ============================================================================

#[test]
fn forward_conditional_branch() {
    let mut asm = fixed();
    let skip = asm.bne();
    asm.nop();
    asm.set_label(skip);

    assert_eq!(words(&asm), [0x40820008, 0x60000000]);
}

#[test]
fn backward_conditional_branch() {
    let mut asm = fixed();
    let top = asm.cursor();
    asm.nop();
    let back = asm.bne();
    asm.set_label_to(back, top);

    assert_eq!(words(&asm), [0x60000000, 0x4082FFFC]);
}

#[test]
fn branch_to_the_next_instruction_encodes_plus_four() {
    let mut asm = fixed();
    let l = asm.b();
    asm.set_label(l);
    asm.nop();
    assert_eq!(words(&asm)[0], 0x48000004);

    let mut asm = fixed();
    let l = asm.bne();
    asm.set_label(l);
    asm.nop();
    assert_eq!(words(&asm)[0], 0x40820004);
}

#[test]
fn conditional_branch_base_words() {
    let cases: [(fn(&mut Assembler) -> gekko::asm::label::Label, u32); 8] = [
        (|a| a.blt(), 0x41800000),
        (|a| a.bgt(), 0x41810000),
        (|a| a.beq(), 0x41820000),
        (|a| a.bso(), 0x41830000),
        (|a| a.bge(), 0x40800000),
        (|a| a.ble(), 0x40810000),
        (|a| a.bne(), 0x40820000),
        (|a| a.bns(), 0x40830000),
    ];

    for (emit, base) in cases {
        let mut asm = fixed();
        let l = emit(&mut asm);
        asm.set_label(l); // branch-to-next: displacement +4
        assert_eq!(words(&asm)[0], base | 4);
    }
}

#[test]
fn linking_branches_set_the_lk_bit() {
    let mut asm = fixed();
    let l = asm.beql();
    asm.set_label(l);
    assert_eq!(words(&asm)[0], 0x41820004 | 1);

    let mut asm = fixed();
    let l = asm.bl();
    asm.set_label(l);
    assert_eq!(words(&asm)[0], 0x48000004 | 1);

    let mut asm = fixed();
    let l = asm.bc(Cond::Ge, true);
    asm.set_label(l);
    assert_eq!(words(&asm)[0], 0x40800004 | 1);
}

#[test]
fn set_label_is_idempotent() {
    let mut asm = fixed();
    let l = asm.bne();
    asm.nop();
    asm.nop();
    asm.set_label(l);
    let first = words(&asm);
    let target = asm.cursor();
    asm.set_label_to(l, target);
    assert_eq!(words(&asm), first);
}

#[test]
fn unconditional_forward_branch() {
    let mut asm = fixed();
    let l = asm.b();
    for _ in 0..5 {
        asm.nop();
    }
    asm.set_label(l);
    assert_eq!(words(&asm)[0], 0x48000000 | 24);
}

#[test]
#[should_panic(expected = "out of range")]
fn conditional_branch_out_of_range_is_fatal() {
    let mut asm = Assembler::new(GrowMode::AutoGrow, 4096);
    let l = asm.bne();
    // 14-bit form: byte displacement must fit a signed 16-bit field
    for _ in 0..(0x8000 / 4) {
        asm.nop();
    }
    asm.set_label(l);
}

// ============================================================================
// Directives
// ============================================================================

#[test]
fn data_directives() {
    let mut asm = fixed();
    asm.db(0xDE);
    asm.db(0xAD);
    asm.dh(0xBEEF);
    asm.dw(0x11223344);
    asm.dd(0x5566778899AABBCC);
    assert_eq!(asm.code_size(), 1 + 1 + 2 + 4 + 8);

    let mut expected = vec![0xDE, 0xAD];
    expected.extend_from_slice(&0xBEEFu16.to_ne_bytes());
    expected.extend_from_slice(&0x11223344u32.to_ne_bytes());
    expected.extend_from_slice(&0x5566778899AABBCCu64.to_ne_bytes());
    assert_eq!(asm.code(), expected.as_slice());
}

#[test]
fn float_directives() {
    let mut asm = fixed();
    asm.df32(1.5);
    asm.df64(-2.25);

    let mut expected = Vec::new();
    expected.extend_from_slice(&1.5f32.to_ne_bytes());
    expected.extend_from_slice(&(-2.25f64).to_ne_bytes());
    assert_eq!(asm.code(), expected.as_slice());
}

#[test]
fn data_arrays() {
    let mut asm = fixed();
    asm.emit_data(&[0x1111u16, 0x2222][..]);
    asm.emit_data(&[0xAABBCCDDu32][..]);

    let mut expected = Vec::new();
    expected.extend_from_slice(&0x1111u16.to_ne_bytes());
    expected.extend_from_slice(&0x2222u16.to_ne_bytes());
    expected.extend_from_slice(&0xAABBCCDDu32.to_ne_bytes());
    assert_eq!(asm.code(), expected.as_slice());
}

#[test]
fn ds_appends_a_nul() {
    let mut asm = fixed();
    asm.ds("Hi");
    assert_eq!(asm.code(), b"Hi\0");
}

#[test]
fn align_reaches_the_boundary() {
    let mut asm = fixed();
    asm.db(1);
    asm.align(4);
    assert_eq!(asm.cursor(), 4);
    assert_eq!(asm.code(), [1, 0, 0, 0]);

    // already aligned: no padding
    asm.align(4);
    assert_eq!(asm.cursor(), 4);

    // n == 1 is a no-op
    asm.align(1);
    assert_eq!(asm.cursor(), 4);

    asm.db(2);
    asm.align(8);
    assert_eq!(asm.cursor(), 8);
}

#[test]
#[should_panic(expected = "zero-byte boundary")]
fn align_zero_is_fatal() {
    let mut asm = fixed();
    asm.align(0);
}

#[test]
fn repeat_appends_n_copies() {
    let mut asm = fixed();
    asm.repeat(3, |a, _| a.nop());
    assert_eq!(words(&asm), [0x60000000; 3]);

    let mut asm = fixed();
    asm.repeat(4, |a, i| a.db(i as u8));
    assert_eq!(asm.code(), [0, 1, 2, 3]);
}

#[test]
fn counted_loop_expansion() {
    let mut asm = fixed();
    asm.loop_(Gpr::R4, 3, |a| a.nop());

    assert_eq!(
        words(&asm),
        [
            0x38800003, // li r4, 3
            0x60000000, // nop (loop body)
            0x3484FFFF, // addic. r4, r4, -1
            0x4082FFF8, // bne back to the body
        ],
    );
}

#[test]
fn zero_iteration_loop_emits_nothing() {
    let mut asm = fixed();
    asm.loop_(Gpr::R4, 0, |a| a.nop());
    assert!(asm.code().is_empty());
}

// ============================================================================
// Buffer growth
// ============================================================================

#[test]
fn growth_is_byte_transparent() {
    // small initial reservation, label resolved across many grow boundaries
    let mut growing = Assembler::new(GrowMode::AutoGrow, 64);
    growing.set_grow_step(4096);
    let mut reference = Assembler::new(GrowMode::FixedSize, 256 * 1024);

    for asm in [&mut growing, &mut reference] {
        let skip = asm.b();
        for i in 0..30_000u32 {
            if i % 2 == 0 {
                asm.nop();
            } else {
                asm.addi(Gpr::R3, Gpr::R3, 1);
            }
        }
        asm.set_label(skip);
        asm.blr();
    }

    assert_eq!(growing.code_size(), reference.code_size());
    assert_eq!(growing.code(), reference.code());
}

#[test]
fn auto_grow_from_an_empty_buffer() {
    let mut asm = Assembler::new(GrowMode::AutoGrow, 0);
    asm.set_grow_step(64);
    for _ in 0..100 {
        asm.nop();
    }
    assert_eq!(asm.code_size(), 400);
    assert!(words(&asm).iter().all(|&w| w == 0x60000000));
}

#[test]
#[should_panic(expected = "overflow")]
fn fixed_size_overflow_is_fatal() {
    let mut asm = Assembler::new(GrowMode::FixedSize, 8);
    asm.nop();
    asm.nop();
    asm.nop();
}

// ============================================================================
// finish / dump
// ============================================================================

#[test]
fn finish_hands_the_buffer_over() {
    let mut asm = fixed();
    asm.li(Gpr::R3, 7);
    asm.blr();
    let expected = asm.code().to_vec();

    let buf = asm.finish().expect("no unresolved branches");
    assert_eq!(buf.as_slice(), expected.as_slice());
    assert_eq!(buf.len(), 8);
}

#[test]
fn finish_rejects_unresolved_branches() {
    let mut asm = fixed();
    let _forgotten = asm.bne();
    asm.nop();

    let err = asm.finish().expect_err("branch was never resolved");
    assert!(err.rendered.contains("never resolved"));
}

#[test]
fn dump_writes_the_raw_bytes() {
    let mut asm = fixed();
    asm.liw(Gpr::R3, 0xDEADBEEF);
    asm.blr();

    let path = std::env::temp_dir().join("ppc_emitter_dump_test.bin");
    asm.dump(&path).expect("dump should succeed");
    let on_disk = std::fs::read(&path).expect("file was written");
    assert_eq!(on_disk.as_slice(), asm.code());
    let _ = std::fs::remove_file(&path);
}

// ============================================================================
// Every instruction appends exactly one word
// ============================================================================

#[test]
fn every_mnemonic_appends_exactly_four_bytes() {
    const D: Gpr = Gpr::R3;
    const A: Gpr = Gpr::R4;
    const B: Gpr = Gpr::R5;
    const FD: Fpr = Fpr::F1;
    const FA: Fpr = Fpr::F2;
    const FC: Fpr = Fpr::F3;
    const FB: Fpr = Fpr::F4;

    let ops: Vec<fn(&mut Assembler)> = vec![
        |a| a.add(D, A, B, false),
        |a| a.addo(D, A, B, false),
        |a| a.addc(D, A, B, true),
        |a| a.addco(D, A, B, false),
        |a| a.adde(D, A, B, false),
        |a| a.addeo(D, A, B, false),
        |a| a.addze(D, A, false),
        |a| a.addzeo(D, A, false),
        |a| a.addme(D, A, false),
        |a| a.addmeo(D, A, false),
        |a| a.addi(D, A, -3),
        |a| a.addis(D, A, 9),
        |a| a.addic(D, A, -1, false),
        |a| a.addic(D, A, -1, true),
        |a| a.subf(D, A, B, false),
        |a| a.sub(D, A, B, false),
        |a| a.subfo(D, A, B, false),
        |a| a.subo(D, A, B, false),
        |a| a.subfc(D, A, B, false),
        |a| a.subc(D, A, B, false),
        |a| a.subfco(D, A, B, false),
        |a| a.subco(D, A, B, false),
        |a| a.subfe(D, A, B, false),
        |a| a.sube(D, A, B, false),
        |a| a.subfeo(D, A, B, false),
        |a| a.subeo(D, A, B, false),
        |a| a.subfic(D, A, 16),
        |a| a.subfme(D, A, false),
        |a| a.subfmeo(D, A, false),
        |a| a.subfze(D, A, false),
        |a| a.subfzeo(D, A, false),
        |a| a.neg(D, A, false),
        |a| a.nego(D, A, false),
        |a| a.mulli(D, A, 100),
        |a| a.mullw(D, A, B, false),
        |a| a.mullwo(D, A, B, false),
        |a| a.mulhw(D, A, B, false),
        |a| a.mulhwu(D, A, B, false),
        |a| a.divw(D, A, B, false),
        |a| a.divwo(D, A, B, false),
        |a| a.divwu(D, A, B, false),
        |a| a.divwuo(D, A, B, false),
        |a| a.and(D, A, B, false),
        |a| a.andc(D, A, B, false),
        |a| a.or(D, A, B, false),
        |a| a.orc(D, A, B, false),
        |a| a.xor(D, A, B, false),
        |a| a.nand(D, A, B, false),
        |a| a.nor(D, A, B, false),
        |a| a.eqv(D, A, B, false),
        |a| a.andi(D, A, 0xFF),
        |a| a.andis(D, A, 0xFF),
        |a| a.ori(D, A, 1),
        |a| a.oris(D, A, 1),
        |a| a.xori(D, A, 1),
        |a| a.xoris(D, A, 1),
        |a| a.extsb(D, A, false),
        |a| a.extsh(D, A, false),
        |a| a.cntlzw(D, A, false),
        |a| a.slw(D, A, B, false),
        |a| a.srw(D, A, B, false),
        |a| a.sraw(D, A, B, false),
        |a| a.srawi(D, A, 7, false),
        |a| a.rlwinm(D, A, 3, 0, 28, false),
        |a| a.rlwimi(D, A, 8, 16, 23, false),
        |a| a.rlwnm(D, A, B, 0, 31, false),
        |a| a.slwi(D, A, 4, false),
        |a| a.srwi(D, A, 4, false),
        |a| a.clrlwi(D, A, 8, false),
        |a| a.clrrwi(D, A, 8, false),
        |a| a.rotlwi(D, A, 13, false),
        |a| a.rotrwi(D, A, 13, false),
        |a| a.extlwi(D, A, 8, 4, false),
        |a| a.extrwi(D, A, 8, 4, false),
        |a| a.cmpi(Cr::CR0, A, -5),
        |a| a.cmpli(Cr::CR7, A, 5),
        |a| a.cmp(Cr::CR0, A, B),
        |a| a.cmpl(Cr::CR0, A, B),
        |a| a.lbz(D, A, 1),
        |a| a.lbzu(D, A, 1),
        |a| a.lbzx(D, A, B),
        |a| a.lbzux(D, A, B),
        |a| a.lhz(D, A, 2),
        |a| a.lhzu(D, A, 2),
        |a| a.lhzx(D, A, B),
        |a| a.lhzux(D, A, B),
        |a| a.lha(D, A, 2),
        |a| a.lhau(D, A, 2),
        |a| a.lhax(D, A, B),
        |a| a.lhaux(D, A, B),
        |a| a.lwz(D, A, 4),
        |a| a.lwzu(D, A, 4),
        |a| a.lwzx(D, A, B),
        |a| a.lwzux(D, A, B),
        |a| a.lhbrx(D, A, B),
        |a| a.lwbrx(D, A, B),
        |a| a.lwarx(D, A, B),
        |a| a.lmw(Gpr::R29, Gpr::SP, -12),
        |a| a.stb(D, A, 1),
        |a| a.stbu(D, A, 1),
        |a| a.stbx(D, A, B),
        |a| a.stbux(D, A, B),
        |a| a.sth(D, A, 2),
        |a| a.sthu(D, A, 2),
        |a| a.sthx(D, A, B),
        |a| a.sthux(D, A, B),
        |a| a.stw(D, A, 4),
        |a| a.stwu(D, A, 4),
        |a| a.stwx(D, A, B),
        |a| a.stwux(D, A, B),
        |a| a.sthbrx(D, A, B),
        |a| a.stwbrx(D, A, B),
        |a| a.stwcx(D, A, B),
        |a| a.stmw(Gpr::R29, Gpr::SP, -12),
        |a| a.lfs(FD, A, 0),
        |a| a.lfd(FD, A, 0),
        |a| a.stfs(FD, A, 0),
        |a| a.stfd(FD, A, 0),
        |a| a.fmr(FD, FB, false),
        |a| a.fneg(FD, FB, false),
        |a| a.fabs(FD, FB, false),
        |a| a.fnabs(FD, FB, false),
        |a| a.frsp(FD, FB, false),
        |a| a.fres(FD, FB, false),
        |a| a.frsqrte(FD, FB, false),
        |a| a.fadd(FD, FA, FB, false),
        |a| a.fadds(FD, FA, FB, false),
        |a| a.fsub(FD, FA, FB, false),
        |a| a.fsubs(FD, FA, FB, false),
        |a| a.fmul(FD, FA, FC, false),
        |a| a.fmuls(FD, FA, FC, false),
        |a| a.fdiv(FD, FA, FB, false),
        |a| a.fdivs(FD, FA, FB, false),
        |a| a.fmadd(FD, FA, FC, FB, false),
        |a| a.fmadds(FD, FA, FC, FB, false),
        |a| a.fmsub(FD, FA, FC, FB, false),
        |a| a.fmsubs(FD, FA, FC, FB, false),
        |a| a.fnmadd(FD, FA, FC, FB, false),
        |a| a.fnmadds(FD, FA, FC, FB, false),
        |a| a.fnmsub(FD, FA, FC, FB, false),
        |a| a.fnmsubs(FD, FA, FC, FB, false),
        |a| a.fsel(FD, FA, FC, FB, false),
        |a| a.ps_mr(FD, FB, false),
        |a| a.ps_abs(FD, FB, false),
        |a| a.ps_nabs(FD, FB, false),
        |a| a.ps_neg(FD, FB, false),
        |a| a.ps_res(FD, FB, false),
        |a| a.ps_rsqrte(FD, FB, false),
        |a| a.ps_add(FD, FA, FB, false),
        |a| a.ps_sub(FD, FA, FB, false),
        |a| a.ps_div(FD, FA, FB, false),
        |a| a.ps_mul(FD, FA, FC, false),
        |a| a.ps_muls0(FD, FA, FC, false),
        |a| a.ps_muls1(FD, FA, FC, false),
        |a| a.ps_madd(FD, FA, FC, FB, false),
        |a| a.ps_madds0(FD, FA, FC, FB, false),
        |a| a.ps_madds1(FD, FA, FC, FB, false),
        |a| a.ps_msub(FD, FA, FC, FB, false),
        |a| a.ps_nmadd(FD, FA, FC, FB, false),
        |a| a.ps_nmsub(FD, FA, FC, FB, false),
        |a| a.ps_sel(FD, FA, FC, FB, false),
        |a| a.ps_sum0(FD, FA, FC, FB, false),
        |a| a.ps_sum1(FD, FA, FC, FB, false),
        |a| a.ps_merge00(FD, FA, FB, false),
        |a| a.ps_merge01(FD, FA, FB, false),
        |a| a.ps_merge10(FD, FA, FB, false),
        |a| a.ps_merge11(FD, FA, FB, false),
        |a| a.ps_cmpu0(Cr::CR1, FA, FB),
        |a| a.ps_cmpo0(Cr::CR1, FA, FB),
        |a| a.ps_cmpu1(Cr::CR1, FA, FB),
        |a| a.ps_cmpo1(Cr::CR1, FA, FB),
        |a| a.vaddfp(Vr::V1, Vr::V2, Vr::V3),
        |a| a.vsubfp(Vr::V1, Vr::V2, Vr::V3),
        |a| a.vand(Vr::V1, Vr::V2, Vr::V3),
        |a| a.vandc(Vr::V1, Vr::V2, Vr::V3),
        |a| a.vor(Vr::V1, Vr::V2, Vr::V3),
        |a| a.vnor(Vr::V1, Vr::V2, Vr::V3),
        |a| a.vxor(Vr::V0, Vr::V0, Vr::V0),
        |a| a.vperm(Vr::V1, Vr::V2, Vr::V3, Vr::V4),
        |a| a.vrefp(Vr::V1, Vr::V2),
        |a| a.dss(0),
        |a| a.dssall(),
        |a| a.crand(0, 1, 2),
        |a| a.crandc(0, 1, 2),
        |a| a.creqv(0, 1, 2),
        |a| a.crnand(0, 1, 2),
        |a| a.crnor(0, 1, 2),
        |a| a.cror(0, 1, 2),
        |a| a.crorc(0, 1, 2),
        |a| a.crxor(6, 6, 6),
        |a| a.mtcrf(0xFF, A),
        |a| a.mtcr(A),
        |a| a.mfcr(D),
        |a| a.mtsr(Sr::SR2, A),
        |a| a.mfsr(D, Sr::SR2),
        |a| a.mtsrin(A, B),
        |a| a.mfsrin(D, B),
        |a| a.mfmsr(D),
        |a| a.mtmsr(A),
        |a| a.mtctr(A),
        |a| a.mfctr(D),
        |a| a.mflr(D),
        |a| a.mtlr(A),
        |a| a.icbi(A, B),
        |a| a.dcbf(A, B),
        |a| a.dcbi(A, B),
        |a| a.dcbst(A, B),
        |a| a.dcbt(A, B),
        |a| a.dcbtst(A, B),
        |a| a.dcbz(A, B),
        |a| a.dcbz_l(A, B),
        |a| a.tlbie(B),
        |a| a.tlbsync(),
        |a| a.eieio(),
        |a| a.isync(),
        |a| a.sync(),
        |a| a.rfi(),
        |a| a.sc(),
        |a| a.li(D, 1),
        |a| a.lis(D, 1),
        |a| a.nop(),
        |a| a.blr(),
        |a| a.bctr(),
        |a| a.bctrl(),
        |a| a.ud(),
    ];

    let mut asm = fixed();
    for op in &ops {
        let before = asm.cursor();
        op(&mut asm);
        assert_eq!(asm.cursor() - before, 4);
    }
    assert_eq!(asm.code_size(), ops.len() * 4);
}

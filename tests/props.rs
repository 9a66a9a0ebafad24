//! Property-based tests: emitter invariants over randomly generated
//! operands, complementing the exact-bytes tests in `emitter.rs`.

use gekko::asm::buffer::GrowMode;
use gekko::asm::Assembler;
use gekko::reg::Gpr;

use proptest::prelude::*;

fn fixed() -> Assembler {
    Assembler::new(GrowMode::FixedSize, 256 * 1024)
}

fn words(asm: &Assembler) -> Vec<u32> {
    asm.code()
        .chunks(4)
        .map(|c| u32::from_ne_bytes(c.try_into().unwrap()))
        .collect()
}

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_gpr() -> impl Strategy<Value = Gpr> {
    (0u8..32).prop_map(Gpr::new)
}

// ── liw: abstract execution ─────────────────────────────────────────────

/// Evaluate an `addi`/`addis`/`ori` load sequence the way the CPU would.
fn interpret_load(words: &[u32], reg: u8) -> u32 {
    let mut val = 0u32;
    for &w in words {
        let opcd = w >> 26;
        let d = ((w >> 21) & 31) as u8;
        let a = ((w >> 16) & 31) as u8;
        let imm = (w & 0xFFFF) as u16;
        assert_eq!(d, reg, "load sequence targets the wrong register");
        match opcd {
            14 => {
                // addi with an r0 base: load sign-extended immediate
                assert_eq!(a, 0);
                val = imm as i16 as i32 as u32;
            }
            15 => {
                // addis with an r0 base: load shifted immediate
                assert_eq!(a, 0);
                val = (imm as u32) << 16;
            }
            24 => {
                // ori onto the value built so far
                assert_eq!(a, reg);
                val |= imm as u32;
            }
            _ => panic!("unexpected primary opcode {opcd} in a load sequence"),
        }
    }
    val
}

proptest! {
    #[test]
    fn liw_loads_every_value_exactly(v: u32, r in 1u8..32) {
        let mut asm = fixed();
        asm.liw(Gpr::new(r), v);

        let ws = words(&asm);
        prop_assert!(ws.len() <= 2);
        prop_assert_eq!(interpret_load(&ws, r), v);
    }

    #[test]
    fn liu_loads_every_value_exactly(v: u16, r in 1u8..32) {
        let mut asm = fixed();
        asm.liu(Gpr::new(r), v);
        prop_assert_eq!(interpret_load(&words(&asm), r), v as u32);
    }
}

// ── rlwinm aliases ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn shift_aliases_match_raw_rlwinm(
        d in arb_gpr(),
        s in arb_gpr(),
        n in 0u8..32,
        rc: bool,
    ) {
        let cases: [(fn(&mut Assembler, Gpr, Gpr, u8, bool), (u8, u8, u8)); 6] = [
            (Assembler::slwi,   (n, 0, 31 - n)),
            (Assembler::srwi,   (32 - n, n, 31)),
            (Assembler::clrlwi, (0, n, 31)),
            (Assembler::clrrwi, (0, 0, 31 - n)),
            (Assembler::rotlwi, (n, 0, 31)),
            (Assembler::rotrwi, (32 - n, 0, 31)),
        ];

        for (alias, (sh, mb, me)) in cases {
            let mut via_alias = fixed();
            alias(&mut via_alias, d, s, n, rc);

            let mut raw = fixed();
            raw.rlwinm(d, s, sh, mb, me, rc);

            prop_assert_eq!(via_alias.code(), raw.code());
        }
    }

    #[test]
    fn extract_aliases_match_raw_rlwinm(
        d in arb_gpr(),
        s in arb_gpr(),
        n in 1u8..32,
        b in 0u8..32,
        rc: bool,
    ) {
        let mut via_alias = fixed();
        via_alias.extlwi(d, s, n, b, rc);
        let mut raw = fixed();
        raw.rlwinm(d, s, b, 0, n - 1, rc);
        prop_assert_eq!(via_alias.code(), raw.code());

        let mut via_alias = fixed();
        via_alias.extrwi(d, s, n, b, rc);
        let mut raw = fixed();
        raw.rlwinm(d, s, b + n, 32 - n, 31, rc);
        prop_assert_eq!(via_alias.code(), raw.code());
    }
}

// ── Structural invariants ───────────────────────────────────────────────

proptest! {
    #[test]
    fn instructions_append_exactly_one_word(
        d in arb_gpr(),
        a in arb_gpr(),
        b in arb_gpr(),
        imm: i16,
        rc: bool,
    ) {
        let mut asm = fixed();
        let mut expected = 0usize;

        asm.add(d, a, b, rc);
        expected += 4;
        prop_assert_eq!(asm.code_size(), expected);

        asm.subf(d, a, b, rc);
        expected += 4;
        prop_assert_eq!(asm.code_size(), expected);

        asm.addi(d, a, imm);
        expected += 4;
        prop_assert_eq!(asm.code_size(), expected);

        asm.stw(d, a, imm);
        expected += 4;
        prop_assert_eq!(asm.code_size(), expected);

        asm.lwzx(d, a, b);
        expected += 4;
        prop_assert_eq!(asm.code_size(), expected);
    }

    #[test]
    fn encoding_ignores_prior_buffer_contents(
        prefix_len in 0usize..16,
        d in arb_gpr(),
        a in arb_gpr(),
        imm: i16,
    ) {
        let mut alone = fixed();
        alone.lwz(d, a, imm);

        let mut prefixed = fixed();
        for _ in 0..prefix_len {
            prefixed.nop();
        }
        prefixed.lwz(d, a, imm);

        prop_assert_eq!(&prefixed.code()[prefix_len * 4..], alone.code());
    }

    #[test]
    fn align_lands_on_the_boundary(
        garbage in proptest::collection::vec(any::<u8>(), 0..64),
        n in 1usize..64,
    ) {
        let mut asm = fixed();
        asm.emit_data(garbage.as_slice());
        let before = asm.cursor();
        asm.align(n);

        prop_assert_eq!(asm.cursor() % n, 0);
        let appended = asm.cursor() - before;
        prop_assert!(appended < n);
        prop_assert!(asm.code()[before..].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn repeat_appends_exactly_n_copies(n in 0usize..64, v: u32) {
        let mut asm = fixed();
        asm.repeat(n, |a, _| a.dw(v));

        prop_assert_eq!(asm.code_size(), n * 4);
        prop_assert!(words(&asm).iter().all(|&w| w == v));
    }

    #[test]
    fn set_label_twice_yields_the_same_word(pad in 1usize..512) {
        let mut asm = fixed();
        let l = asm.bne();
        for _ in 0..pad {
            asm.nop();
        }
        asm.set_label(l);
        let first = asm.code().to_vec();

        let target = asm.cursor();
        asm.set_label_to(l, target);
        prop_assert_eq!(asm.code(), first.as_slice());
    }

    #[test]
    fn backward_branch_displacement(body_words in 1usize..512) {
        let mut asm = fixed();
        let top = asm.cursor();
        for _ in 0..body_words {
            asm.nop();
        }
        let back = asm.bne();
        asm.set_label_to(back, top);

        let branch_word = words(&asm)[body_words];
        let disp = (branch_word & 0xFFFC) as i16 as i32;
        prop_assert_eq!(disp, -(body_words as i32) * 4);
    }
}

//! Emit a word-granular memset: r3 = destination, r4 = fill value,
//! r5 = word count (must be non-zero). Shows the backward-branch idiom of
//! capturing the cursor before the loop body.

use gekko::asm::buffer::GrowMode;
use gekko::asm::Assembler;
use gekko::reg::Gpr;

use std::{env, error};

fn main() -> Result<(), Box<dyn error::Error>> {
    tracing_subscriber::fmt::init();

    let mut asm = Assembler::new(GrowMode::FixedSize, 4096);

    let top = asm.cursor();
    asm.stw(Gpr::R4, Gpr::R3, 0);
    asm.addi(Gpr::R3, Gpr::R3, 4);
    asm.addic(Gpr::R5, Gpr::R5, -1, true);
    let again = asm.bne();
    asm.set_label_to(again, top);
    asm.blr();

    for (i, chunk) in asm.code().chunks(4).enumerate() {
        let word = u32::from_ne_bytes(chunk.try_into().unwrap());
        println!("{offset:04x}: {word:08X}", offset = i * 4);
    }

    if let Some(output_path) = env::args().nth(1) {
        asm.dump(&output_path)?;
        println!("[wrote raw code to {output_path}]");
    }

    Ok(())
}

//! Emit a countdown loop that sums 10..=1 into r4, print the words, and
//! optionally dump the raw bytes to a file.

use gekko::asm::buffer::GrowMode;
use gekko::asm::Assembler;
use gekko::reg::Gpr;

use std::{env, error};

fn main() -> Result<(), Box<dyn error::Error>> {
    tracing_subscriber::fmt::init();

    let mut asm = Assembler::new(GrowMode::FixedSize, 4096);

    // r4 = 0; for r3 in 10..=1 { r4 += r3 }
    asm.liw(Gpr::R4, 0);
    asm.loop_(Gpr::R3, 10, |a| {
        a.add(Gpr::R4, Gpr::R4, Gpr::R3, false);
    });
    asm.mr(Gpr::R3, Gpr::R4, false); // return value
    asm.blr();

    for (i, chunk) in asm.code().chunks(4).enumerate() {
        let word = u32::from_ne_bytes(chunk.try_into().unwrap());
        println!("{offset:04x}: {word:08X}", offset = i * 4);
    }

    if let Some(output_path) = env::args().nth(1) {
        asm.dump(&output_path)?;
        println!("[wrote raw code to {output_path}]");
    }

    let code = asm.finish()?;
    println!("emitted {n} bytes", n = code.len());

    Ok(())
}

// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! gbemu-disasm: Prints a linear disassembly of a ROM image

use gbemu::{cpu::instruction::disassembler, *};
use gumdrop::*;
use owo_colors::OwoColorize;
use std::{fs::read, path::PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Options, Hash)]
struct Arguments {
    #[options(help = "Show help text")]
    help: bool,
    #[options(help = "Load a ROM to disassemble", free, required)]
    pub file: PathBuf,
    #[options(help = "Start disassembling at offset...", parse(try_from_str = "parse_hex"))]
    pub offset: u16,
    #[options(help = "Disassemble this many bytes", parse(try_from_str = "parse_hex"))]
    pub length: Option<u16>,
    #[options(help = "Disable colored output")]
    pub plain: bool,
}

fn parse_hex(value: &str) -> std::result::Result<u16, std::num::ParseIntError> {
    u16::from_str_radix(value, 16)
}

fn main() -> Result<()> {
    let options = Arguments::parse_args_default_or_exit();
    let contents = read(&options.file)?;
    // Images that fit are boot ROMs. Anything larger is a cartridge, of which only bank 0 is mapped
    let region = if contents.len() <= BootRom.capacity() {
        BootRom
    } else {
        CartRom
    };
    let image = &contents[..contents.len().min(CartRom.capacity())];
    let bus = Bus::from_regions(&[(region, image)])?;
    let dis = if options.plain {
        Dis::plain()
    } else {
        Dis::default()
    };

    let end = image
        .len()
        .min(options.offset as usize + options.length.map_or(image.len(), usize::from));
    let mut addr = options.offset as usize;
    while addr < end {
        let at = addr as u16;
        let len = (disassembler::length(&bus, at).unwrap_or(1) as usize).max(1);
        let bytes: Vec<String> = image[addr..(addr + len).min(image.len())]
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect();
        let text = dis
            .once(&bus, at)
            .unwrap_or_else(|e| e.style(dis.invalid).to_string());
        println!("{at:04x}: {:<9} {text}", bytes.join(" ").bright_black());
        addr += len;
    }
    Ok(())
}

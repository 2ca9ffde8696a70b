// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! gbemu: Runs a Game Boy boot ROM, optionally under the debugger


use gbemu::*;
use gumdrop::*;
use log::LevelFilter;
use owo_colors::OwoColorize;
use simple_logger::SimpleLogger;
use std::{fs::read, path::PathBuf, process::exit};

/// Parses a hexadecimal string into a u16
fn parse_hex(value: &str) -> std::result::Result<u16, std::num::ParseIntError> {
    u16::from_str_radix(value, 16)
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Options, Hash)]
struct Arguments {
    #[options(help = "Load a boot ROM to run.", required, free)]
    pub boot_rom: PathBuf,
    #[options(help = "Print this help message.")]
    help: bool,
    #[options(help = "Map bank 0 of a cartridge ROM.", meta = "FILE")]
    pub cartridge: Option<PathBuf>,
    #[options(help = "Stop in the debugger before the first instruction.")]
    pub debug: bool,
    #[options(help = "Print each instruction as it executes.")]
    pub trace: bool,
    #[options(help = "Skip the boot ROM, and start at the cartridge entry point.")]
    pub no_boot: bool,
    #[options(
        long = "break",
        help = "Set breakpoints for the emulator to stop at.",
        parse(try_from_str = "parse_hex"),
        meta = "BP"
    )]
    pub breakpoints: Vec<u16>,
    #[options(count, help = "Log more. Repeat for even more.")]
    pub verbose: u32,
}

impl Arguments {
    fn flags(&self) -> ControlFlags {
        ControlFlags {
            debug: self.debug,
            trace: self.trace,
            boot: !self.no_boot,
        }
    }
}

fn log_level(verbose: u32) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// The part of a cartridge image which is visible without a mapper
fn bank0(cart: &[u8]) -> &[u8] {
    let capacity = CartRom.capacity();
    if cart.len() > capacity {
        log::warn!(
            "cartridge is {} bytes, only the first {capacity} are mapped",
            cart.len()
        );
    }
    &cart[..cart.len().min(capacity)]
}

fn load(options: &Arguments) -> Result<CPU> {
    let boot = read(&options.boot_rom)?;
    let cart = options.cartridge.as_ref().map(read).transpose()?;
    CPU::new(&boot, cart.as_deref().map(bank0), options.flags())
}

fn run(options: &Arguments, cpu: &mut CPU) -> Result<()> {
    if !options.debug && options.breakpoints.is_empty() {
        return cpu.run();
    }
    let mut debugger = Debugger::stdio();
    debugger.set_step_mode(options.debug);
    for &addr in &options.breakpoints {
        debugger.add_breakpoint(addr);
    }
    cpu.run_with(&mut debugger)
}

pub fn main() -> Result<()> {
    let options = Arguments::parse_args_default_or_exit();
    if let Err(e) = SimpleLogger::new()
        .with_level(log_level(options.verbose))
        .init()
    {
        eprintln!("{}", e.bold().red());
    }
    let mut cpu = load(&options)?;
    if let Err(e) = run(&options, &mut cpu) {
        eprintln!("{}", e.bold().red());
        exit(1);
    }
    Ok(())
}

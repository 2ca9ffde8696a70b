// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE.txt for details)

//! The Bus connects the CPU to Memory
//!
//! Maps the 16-bit address space onto a handful of fixed-size [Region]s.

use crate::error::{Access, Error, Result};
use std::{
    fmt::{Display, Formatter},
    ops::Range,
};

/// Creates a new bus, loading each ROM [Region] from the provided bytes
///
/// Evaluates to a [Result], since an oversized ROM image cannot be loaded.
/// # Examples
/// ```rust
/// # use gbemu::*;
/// # fn main() -> Result<()> {
/// let bus = bus! {
///     BootRom = &[0x31, 0xfe, 0xff],
/// }?;
/// assert_eq!(0x31, bus.read_byte(0)?);
/// #    Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! bus {
    ($($name:path = $data:expr),* $(,)?) => {
        $crate::cpu::bus::Bus::from_regions(&[
            $({
                let data: &[u8] = $data;
                ($name, data)
            }),*
        ])
    };
}

/// I/O register which unmaps the boot ROM when written with a non-zero value
pub const BOOT_ROM_DISABLE: u16 = 0xff50;

/// Represents a named region in memory
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    /// Boot ROM, overlaid on the start of the cartridge while booting
    BootRom,
    /// Cartridge ROM bank 0
    CartRom,
    /// Video RAM
    VRam,
    /// Memory-mapped I/O registers
    Io,
    /// High RAM
    HRam,
    #[doc(hidden)]
    /// Total number of named regions
    Count,
}

impl Region {
    /// Every region which can be mapped
    pub const ALL: [Region; Region::Count as usize] = [
        Region::BootRom,
        Region::CartRom,
        Region::VRam,
        Region::Io,
        Region::HRam,
    ];

    /// The addresses this region answers to
    pub const fn range(self) -> Range<u32> {
        match self {
            Region::BootRom => 0x0000..0x0100,
            Region::CartRom => 0x0000..0x4000,
            Region::VRam => 0x8000..0xa000,
            Region::Io => 0xff00..0xff80,
            Region::HRam => 0xff80..0xffff,
            Region::Count => 0..0,
        }
    }

    /// Size of the region's backing memory, in bytes
    pub const fn capacity(self) -> usize {
        let range = self.range();
        (range.end - range.start) as usize
    }

    /// ROM regions reject writes
    pub const fn is_rom(self) -> bool {
        matches!(self, Region::BootRom | Region::CartRom)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Region::BootRom => "BootRom",
                Region::CartRom => "CartRom",
                Region::VRam => "VRam",
                Region::Io => "Io",
                Region::HRam => "HRam",
                _ => "",
            }
        )
    }
}

/// Stores memory in a series of named, fixed-size regions
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bus {
    region: [Option<Box<[u8]>>; Region::Count as usize],
    boot_mapped: bool,
}

impl Default for Bus {
    /// Constructs a bus with its RAM regions mapped, and no ROM
    fn default() -> Self {
        let mut bus = Bus {
            region: Default::default(),
            boot_mapped: false,
        };
        for name in [Region::VRam, Region::Io, Region::HRam] {
            bus.region[name as usize] = Some(vec![0; name.capacity()].into_boxed_slice());
        }
        bus
    }
}

impl Bus {
    /// Constructs a new bus with no ROM mapped
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// let bus = Bus::new();
    /// assert!(bus.read_byte(0x0000).is_err());
    /// assert!(bus.read_byte(0x8000).is_ok());
    /// ```
    pub fn new() -> Self {
        Bus::default()
    }

    /// Constructs a new bus and loads each ROM image into its region
    pub fn from_regions(regions: &[(Region, &[u8])]) -> Result<Self> {
        let mut bus = Bus::new();
        for &(name, data) in regions {
            bus.load_region(name, data)?;
        }
        Ok(bus)
    }

    /// Loads data into a named [Region], zero-filling whatever the data doesn't cover.
    ///
    /// Returns [Error::RomSize] if the data does not fit.
    /// Loading the boot ROM maps it over the cartridge.
    pub fn load_region(&mut self, name: Region, data: &[u8]) -> Result<&mut Self> {
        let capacity = name.capacity();
        if data.len() > capacity {
            return Err(Error::RomSize {
                region: name,
                size: data.len(),
                capacity,
            });
        }
        if let Some(slot) = self.region.get_mut(name as usize) {
            let mut memory = vec![0; capacity];
            memory[..data.len()].copy_from_slice(data);
            *slot = Some(memory.into_boxed_slice());
        }
        if name == Region::BootRom {
            self.boot_mapped = true;
        }
        Ok(self)
    }

    /// Gets a slice of a named [Region] of memory
    pub fn get_region(&self, name: Region) -> Option<&[u8]> {
        self.region.get(name as usize)?.as_deref()
    }

    /// Reports whether the boot ROM currently shadows the cartridge
    pub fn boot_mapped(&self) -> bool {
        self.boot_mapped && self.get_region(Region::BootRom).is_some()
    }

    /// Maps or unmaps the boot ROM overlay
    pub fn set_boot_mapped(&mut self, mapped: bool) -> &mut Self {
        self.boot_mapped = mapped;
        self
    }

    /// Finds the [Region] which currently answers to `addr`
    pub fn region_of(&self, addr: u16) -> Option<Region> {
        let wide = addr as u32;
        if self.boot_mapped() && Region::BootRom.range().contains(&wide) {
            return Some(Region::BootRom);
        }
        Region::ALL[1..]
            .iter()
            .copied()
            .find(|&name| name.range().contains(&wide) && self.get_region(name).is_some())
    }

    /// Reads a byte without failing
    pub fn peek(&self, addr: u16) -> Option<u8> {
        let name = self.region_of(addr)?;
        let offset = (addr as u32 - name.range().start) as usize;
        self.get_region(name)?.get(offset).copied()
    }

    /// Reads the byte at `addr`
    pub fn read_byte(&self, addr: u16) -> Result<u8> {
        self.peek(addr).ok_or(Error::UnmappedAddress {
            addr,
            access: Access::Read,
        })
    }

    /// Reads a little-endian word from `addr` and `addr + 1`
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// # fn main() -> Result<()> {
    /// let bus = bus! { BootRom = &[0x34, 0x12] }?;
    /// assert_eq!(0x1234, bus.read_word(0)?);
    /// #    Ok(())
    /// # }
    /// ```
    pub fn read_word(&self, addr: u16) -> Result<u16> {
        let lo = self.read_byte(addr)?;
        let hi = self.read_byte(next(addr, Access::Read)?)?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Writes a byte to a RAM region. ROM and unmapped addresses are rejected.
    pub fn write_byte(&mut self, addr: u16, value: u8) -> Result<()> {
        let unmapped = Error::UnmappedAddress {
            addr,
            access: Access::Write,
        };
        let name = match self.region_of(addr) {
            Some(name) if !name.is_rom() => name,
            _ => return Err(unmapped),
        };
        let offset = (addr as u32 - name.range().start) as usize;
        let cell = self
            .region
            .get_mut(name as usize)
            .and_then(|region| region.as_deref_mut())
            .and_then(|region| region.get_mut(offset))
            .ok_or(unmapped)?;
        *cell = value;
        if addr == BOOT_ROM_DISABLE && value != 0 {
            self.boot_mapped = false;
        }
        Ok(())
    }

    /// Writes a little-endian word to `addr` and `addr + 1`
    pub fn write_word(&mut self, addr: u16, value: u16) -> Result<()> {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo)?;
        self.write_byte(next(addr, Access::Write)?, hi)
    }
}

/// The address after `addr`, which must not wrap around
fn next(addr: u16, access: Access) -> Result<u16> {
    addr.checked_add(1).ok_or(Error::UnmappedAddress {
        addr: addr.wrapping_add(1),
        access,
    })
}

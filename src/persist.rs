//! Colour settings stored in non-volatile memory.
//!
//! A record is eight bytes: digit r, g, b, background r, g, b and a big-endian
//! CRC-16 over the first six. Appending the CRC makes the checksum over the
//! whole record come out as zero, which is the validity check on read.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use core::fmt;

use crate::color::{ColorSettings, Rgb};

/// Record size in bytes
pub const RECORD_LEN: usize = 8;

/// Initial CRC register value
pub const CRC_SEED: u16 = 0xFFFF;

const CRC_POLY: u16 = 0x1021;

/// Read or write attempts before giving up
pub const MAX_ATTEMPTS: usize = 3;

/// Raw record as kept in storage
pub type Record = [u8; RECORD_LEN];

/// Storage holding one colour record
///
/// Writes must have completed by the time `write_record` returns; the record
/// is read back straight away to verify it.
pub trait ColorStore {
    fn read_record(&mut self) -> Record;
    fn write_record(&mut self, record: &Record);
}

/// Error returned when the stored record cannot be trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistError {
    /// No read produced a record with a valid checksum
    CrcMismatch,
    /// No write could be read back intact
    VerifyFailed,
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CrcMismatch => f.write_str("stored colour record fails its checksum"),
            Self::VerifyFailed => f.write_str("colour record did not verify after write"),
        }
    }
}

/// CRC-16 with polynomial 0x1021, MSB first, no reflection, no final XOR
pub fn crc16(data: &[u8], seed: u16) -> u16 {
    data.iter().fold(seed, |mut crc, &byte| {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 == 0 {
                crc << 1
            } else {
                (crc << 1) ^ CRC_POLY
            };
        }
        crc
    })
}

/// Serialize `colors` with a trailing checksum
pub fn encode_record(colors: ColorSettings) -> Record {
    let ColorSettings { digit, background } = colors;
    let mut record = [
        digit.r,
        digit.g,
        digit.b,
        background.r,
        background.g,
        background.b,
        0,
        0,
    ];
    let [high, low] = crc16(&record[..6], CRC_SEED).to_be_bytes();
    record[6] = high;
    record[7] = low;
    record
}

/// Deserialize a record, or `None` if its checksum does not hold
pub fn decode_record(record: &Record) -> Option<ColorSettings> {
    if crc16(record, CRC_SEED) != 0 {
        return None;
    }
    Some(ColorSettings::new(
        Rgb::new(record[0], record[1], record[2]),
        Rgb::new(record[3], record[4], record[5]),
    ))
}

/// Load colour settings, retrying on checksum failures
pub fn read_config<S: ColorStore>(store: &mut S) -> Result<ColorSettings, PersistError> {
    for _attempt in 0..MAX_ATTEMPTS {
        if let Some(colors) = decode_record(&store.read_record()) {
            return Ok(colors);
        }
        #[cfg(feature = "esp32-log")]
        println!("[persist] colour record checksum mismatch (attempt {})", _attempt + 1);
    }
    Err(PersistError::CrcMismatch)
}

/// Store colour settings, reading each write back to verify it
pub fn write_config<S: ColorStore>(
    store: &mut S,
    colors: ColorSettings,
) -> Result<(), PersistError> {
    let record = encode_record(colors);
    for _attempt in 0..MAX_ATTEMPTS {
        store.write_record(&record);
        if store.read_record() == record {
            return Ok(());
        }
        #[cfg(feature = "esp32-log")]
        println!("[persist] colour record verify failed (attempt {})", _attempt + 1);
    }
    Err(PersistError::VerifyFailed)
}

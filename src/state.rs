//! Save-state machinery: the [`StateComponent`] trait each peripheral implements,
//! and the versioned binary stream that aggregates them into a single snapshot.

use std::io::Cursor;

use boytacean_common::{
    data::{read_bytes, read_u32, read_u8, write_bytes, write_u32, write_u8},
    error::Error,
};

/// Placeholder for a future multi-format save-state encoding (e.g. a compact
/// vs. verbose layout). Only one format exists today, so this carries no
/// variants yet; components accept `Option<StateFormat>` so the signature
/// doesn't need to change when one is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateFormat;

/// A component whose state can be serialized into and restored from a flat
/// byte buffer. Implementors write their fields in a fixed order using the
/// `read_*`/`write_*` cursor helpers so the layout is stable across builds.
pub trait StateComponent {
    fn state(&self, format: Option<StateFormat>) -> Result<Vec<u8>, Error>;
    fn set_state(&mut self, data: &[u8], format: Option<StateFormat>) -> Result<(), Error>;
}

/// Binary stream version. Bumped whenever a component's section layout or
/// the section ordering below changes.
pub const STATE_FORMAT_VERSION: u8 = 1;

/// Size, in bytes, of the cartridge header slice used for the identity
/// check at the start of every save state (ROM offset 0x100..0x150).
pub const HEADER_SIZE: usize = 0x50;

/// Writes a length-prefixed section: a u32 byte count followed by the
/// component's serialized bytes.
pub fn write_section(
    cursor: &mut Cursor<Vec<u8>>,
    component: &dyn StateComponent,
) -> Result<(), Error> {
    let data = component.state(None)?;
    write_u32(cursor, data.len() as u32)?;
    write_bytes(cursor, &data)?;
    Ok(())
}

/// Reads a length-prefixed section and restores it into `component`.
///
/// On any failure the component is left untouched: `set_state` is only
/// called once the full section has been read successfully.
pub fn read_section(
    cursor: &mut Cursor<&[u8]>,
    component: &mut dyn StateComponent,
) -> Result<(), Error> {
    let len = read_u32(cursor)? as usize;
    let data = read_bytes(cursor, len)?;
    component.set_state(&data, None)
}

pub fn write_header(cursor: &mut Cursor<Vec<u8>>, rom_header: &[u8]) -> Result<(), Error> {
    write_u8(cursor, STATE_FORMAT_VERSION)?;
    write_bytes(cursor, rom_header)?;
    Ok(())
}

/// Reads and validates the stream's version and cartridge-header slice
/// against the currently loaded cartridge's header.
pub fn read_header(cursor: &mut Cursor<&[u8]>, rom_header: &[u8]) -> Result<(), Error> {
    let _version = read_u8(cursor)?;
    let stored = read_bytes(cursor, HEADER_SIZE)?;
    if stored != rom_header {
        return Err(Error::CartridgeMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(u32);

    impl StateComponent for Counter {
        fn state(&self, _format: Option<StateFormat>) -> Result<Vec<u8>, Error> {
            let mut cursor = Cursor::new(vec![]);
            write_u32(&mut cursor, self.0)?;
            Ok(cursor.into_inner())
        }

        fn set_state(&mut self, data: &[u8], _format: Option<StateFormat>) -> Result<(), Error> {
            let mut cursor = Cursor::new(data);
            self.0 = read_u32(&mut cursor)?;
            Ok(())
        }
    }

    #[test]
    fn test_section_round_trip() {
        let counter = Counter(0x1234_5678);
        let mut cursor = Cursor::new(vec![]);
        write_section(&mut cursor, &counter).unwrap();

        let bytes = cursor.into_inner();
        let mut read_cursor = Cursor::new(bytes.as_slice());
        let mut restored = Counter(0);
        read_section(&mut read_cursor, &mut restored).unwrap();
        assert_eq!(restored.0, 0x1234_5678);
    }

    #[test]
    fn test_header_mismatch() {
        let mut cursor = Cursor::new(vec![]);
        write_header(&mut cursor, &[0xaa; HEADER_SIZE]).unwrap();
        let bytes = cursor.into_inner();
        let mut read_cursor = Cursor::new(bytes.as_slice());
        let result = read_header(&mut read_cursor, &[0xbb; HEADER_SIZE]);
        assert_eq!(result, Err(Error::CartridgeMismatch));
    }
}

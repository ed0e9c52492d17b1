//! Key/value dictionary encoding and decoding.
//!
//! Messages between the watch and the phone are packed dictionaries:
//! - COUNT (1 byte): number of tuples that follow
//! - per tuple:
//!   - KEY (4 bytes, little-endian): message key id
//!   - TYPE (1 byte): 0 byte array, 1 C string, 2 unsigned int, 3 signed int
//!   - LENGTH (2 bytes, little-endian): length of DATA
//!   - DATA (LENGTH bytes): C strings include their NUL terminator,
//!     integers are 1, 2 or 4 bytes wide

use heapless::Vec;

/// Size of the tuple count header
pub const DICT_HEADER_SIZE: usize = 1;

/// Size of a tuple header (KEY + TYPE + LENGTH)
pub const TUPLE_HEADER_SIZE: usize = 4 + 1 + 2;

/// Maximum number of tuples in a single dictionary
pub const MAX_TUPLES: usize = 8;

/// Inbound buffer capacity (phone → watch)
pub const INBOX_SIZE: usize = 64;

/// Outbound buffer capacity (watch → phone)
pub const OUTBOX_SIZE: usize = 64;

/// Width used when writing integer tuples
const INT_WIDTH: usize = 4;

/// Errors that can occur during dictionary parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictError {
    /// Input ended before the declared tuples were read
    Truncated,
    /// Unknown tuple type byte
    InvalidType,
    /// Integer tuple with a width other than 1, 2 or 4
    InvalidInteger,
    /// C string without a NUL terminator, or not UTF-8 before the first NUL
    ///
    /// Bytes after the first NUL are ignored.
    InvalidCString,
    /// More tuples than `MAX_TUPLES`
    TooManyTuples,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// Tuple type identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TupleType {
    ByteArray = 0,
    CString = 1,
    Uint = 2,
    Int = 3,
}

impl TupleType {
    /// Parse a tuple type from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(TupleType::ByteArray),
            1 => Some(TupleType::CString),
            2 => Some(TupleType::Uint),
            3 => Some(TupleType::Int),
            _ => None,
        }
    }
}

/// Decoded tuple value, borrowing from the input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleValue<'a> {
    ByteArray(&'a [u8]),
    /// C string without its terminator
    CString(&'a str),
    Uint(u32),
    Int(i32),
}

impl<'a> TupleValue<'a> {
    /// String payload, if this is a C string
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            TupleValue::CString(s) => Some(s),
            _ => None,
        }
    }

    /// Integer payload read as unsigned
    ///
    /// Signed values are reinterpreted as two's complement, so a negative
    /// index never lands inside a small table.
    pub fn as_unsigned(&self) -> Option<u32> {
        match *self {
            TupleValue::Uint(v) => Some(v),
            TupleValue::Int(v) => Some(v as u32),
            _ => None,
        }
    }

    /// Integer payload read as signed
    pub fn as_signed(&self) -> Option<i32> {
        match *self {
            TupleValue::Uint(v) => Some(v as i32),
            TupleValue::Int(v) => Some(v),
            _ => None,
        }
    }
}

/// A single key/value pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuple<'a> {
    pub key: u32,
    pub value: TupleValue<'a>,
}

/// Size in bytes of a tuple carrying `data_len` bytes of data
pub const fn tuple_size(data_len: usize) -> usize {
    TUPLE_HEADER_SIZE + data_len
}

/// Size in bytes of a dictionary holding tuples with the given data lengths
pub fn calc_buffer_size(data_lens: &[usize]) -> usize {
    data_lens
        .iter()
        .fold(DICT_HEADER_SIZE, |acc, &len| acc + tuple_size(len))
}

/// A parsed dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary<'a> {
    tuples: Vec<Tuple<'a>, MAX_TUPLES>,
}

impl<'a> Dictionary<'a> {
    /// Parse a dictionary from a received buffer
    ///
    /// Bytes after the last declared tuple are ignored.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, DictError> {
        let (&count, mut rest) = bytes.split_first().ok_or(DictError::Truncated)?;
        if count as usize > MAX_TUPLES {
            return Err(DictError::TooManyTuples);
        }

        let mut tuples = Vec::new();
        for _ in 0..count {
            if rest.len() < TUPLE_HEADER_SIZE {
                return Err(DictError::Truncated);
            }
            let key = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]);
            let tuple_type = TupleType::from_byte(rest[4]).ok_or(DictError::InvalidType)?;
            let length = u16::from_le_bytes([rest[5], rest[6]]) as usize;
            rest = &rest[TUPLE_HEADER_SIZE..];

            if rest.len() < length {
                return Err(DictError::Truncated);
            }
            let (data, tail) = rest.split_at(length);
            rest = tail;

            let value = decode_value(tuple_type, data)?;
            tuples
                .push(Tuple { key, value })
                .map_err(|_| DictError::TooManyTuples)?;
        }

        Ok(Self { tuples })
    }

    /// Look up the value stored under `key`
    ///
    /// When a key appears more than once the first occurrence wins.
    pub fn find(&self, key: u32) -> Option<&TupleValue<'a>> {
        self.tuples.iter().find(|t| t.key == key).map(|t| &t.value)
    }

    /// Number of tuples
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Returns true if the dictionary holds no tuples
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Iterate over all tuples in wire order
    pub fn iter(&self) -> impl Iterator<Item = &Tuple<'a>> {
        self.tuples.iter()
    }
}

fn decode_value(tuple_type: TupleType, data: &[u8]) -> Result<TupleValue<'_>, DictError> {
    match tuple_type {
        TupleType::ByteArray => Ok(TupleValue::ByteArray(data)),
        TupleType::CString => {
            let nul = data
                .iter()
                .position(|&b| b == 0)
                .ok_or(DictError::InvalidCString)?;
            let text =
                core::str::from_utf8(&data[..nul]).map_err(|_| DictError::InvalidCString)?;
            Ok(TupleValue::CString(text))
        }
        TupleType::Uint => match *data {
            [a] => Ok(TupleValue::Uint(a as u32)),
            [a, b] => Ok(TupleValue::Uint(u16::from_le_bytes([a, b]) as u32)),
            [a, b, c, d] => Ok(TupleValue::Uint(u32::from_le_bytes([a, b, c, d]))),
            _ => Err(DictError::InvalidInteger),
        },
        TupleType::Int => match *data {
            [a] => Ok(TupleValue::Int(a as i8 as i32)),
            [a, b] => Ok(TupleValue::Int(i16::from_le_bytes([a, b]) as i32)),
            [a, b, c, d] => Ok(TupleValue::Int(i32::from_le_bytes([a, b, c, d]))),
            _ => Err(DictError::InvalidInteger),
        },
    }
}

/// Incremental dictionary encoder over a fixed-capacity buffer
#[derive(Debug, Clone)]
pub struct DictWriter<const N: usize> {
    buffer: Vec<u8, N>,
    count: u8,
    overflow: bool,
}

impl<const N: usize> Default for DictWriter<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DictWriter<N> {
    /// Create a writer with an empty dictionary
    pub fn new() -> Self {
        let mut buffer = Vec::new();
        let overflow = buffer.push(0).is_err();
        Self {
            buffer,
            count: 0,
            overflow,
        }
    }

    /// Append a signed integer tuple (always 4 bytes wide)
    pub fn write_int(&mut self, key: u32, value: i32) -> Result<(), DictError> {
        self.write_tuple(key, TupleType::Int, &value.to_le_bytes(), INT_WIDTH)
    }

    /// Append an unsigned integer tuple (always 4 bytes wide)
    pub fn write_uint(&mut self, key: u32, value: u32) -> Result<(), DictError> {
        self.write_tuple(key, TupleType::Uint, &value.to_le_bytes(), INT_WIDTH)
    }

    /// Append a C string tuple; the terminator is added here
    pub fn write_cstring(&mut self, key: u32, value: &str) -> Result<(), DictError> {
        if value.as_bytes().contains(&0) {
            return Err(DictError::InvalidCString);
        }
        self.write_tuple(key, TupleType::CString, value.as_bytes(), value.len() + 1)?;
        self.buffer.push(0).map_err(|_| DictError::BufferTooSmall)
    }

    /// Append a byte array tuple
    pub fn write_bytes(&mut self, key: u32, value: &[u8]) -> Result<(), DictError> {
        self.write_tuple(key, TupleType::ByteArray, value, value.len())
    }

    /// Finish the dictionary and return the encoded bytes
    pub fn finish(mut self) -> Result<Vec<u8, N>, DictError> {
        if self.overflow {
            return Err(DictError::BufferTooSmall);
        }
        self.buffer[0] = self.count;
        Ok(self.buffer)
    }

    /// Bytes written so far, including the count header
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no tuple has been written
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Write header and payload; `declared_len` may exceed `data.len()`
    /// when the caller appends a terminator afterwards.
    fn write_tuple(
        &mut self,
        key: u32,
        tuple_type: TupleType,
        data: &[u8],
        declared_len: usize,
    ) -> Result<(), DictError> {
        if self.overflow {
            return Err(DictError::BufferTooSmall);
        }
        if self.count as usize >= MAX_TUPLES {
            return Err(DictError::TooManyTuples);
        }
        let length = u16::try_from(declared_len).map_err(|_| DictError::BufferTooSmall)?;
        if self.buffer.len() + tuple_size(declared_len) > N {
            return Err(DictError::BufferTooSmall);
        }

        let mut header = [0u8; TUPLE_HEADER_SIZE];
        header[..4].copy_from_slice(&key.to_le_bytes());
        header[4] = tuple_type as u8;
        header[5..].copy_from_slice(&length.to_le_bytes());

        // Capacity was checked above
        self.buffer
            .extend_from_slice(&header)
            .map_err(|_| DictError::BufferTooSmall)?;
        self.buffer
            .extend_from_slice(data)
            .map_err(|_| DictError::BufferTooSmall)?;
        self.count += 1;
        Ok(())
    }
}

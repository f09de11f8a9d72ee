/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::Result;
use crate::traits::*;

/// A wrapper over a [`BitRead`] that logs at debug level all operations
/// performed, including the reads of the unary parts.
///
/// Since the codes are implemented on top of [`BitRead`], wrapping a reader
/// shows how a layout splits a codeword.
#[derive(Debug, Clone)]
pub struct DbgBitReader<R> {
    reader: R,
}

impl<R> DbgBitReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BitRead> BitRead for DbgBitReader<R> {
    fn read_bit(&mut self) -> Result<bool> {
        let result = self.reader.read_bit();
        tracing::debug!(?result, "read_bit");
        result
    }

    fn read_bits(&mut self, n: usize) -> Result<u64> {
        let result = self.reader.read_bits(n);
        tracing::debug!(n, ?result, "read_bits");
        result
    }

    fn bits_left(&self) -> usize {
        self.reader.bits_left()
    }

    fn read_unary(&mut self) -> Result<u64> {
        let result = self.reader.read_unary();
        tracing::debug!(?result, "read_unary");
        result
    }
}

/// A wrapper over a [`BitWrite`] that logs at debug level all operations
/// performed, including the writes of the unary parts.
#[derive(Debug, Clone)]
pub struct DbgBitWriter<W> {
    writer: W,
}

impl<W> DbgBitWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: BitWrite> BitWrite for DbgBitWriter<W> {
    fn write_bit(&mut self, bit: bool) -> Result<usize> {
        tracing::debug!(bit, "write_bit");
        self.writer.write_bit(bit)
    }

    fn write_bits(&mut self, value: u64, n: usize) -> Result<usize> {
        tracing::debug!(value, n, "write_bits");
        self.writer.write_bits(value, n)
    }

    fn write_ones(&mut self, n: u64) -> Result<usize> {
        tracing::debug!(n, "write_ones");
        self.writer.write_ones(n)
    }

    fn write_unary(&mut self, value: u64) -> Result<usize> {
        tracing::debug!(value, "write_unary");
        self.writer.write_unary(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::*;
    use crate::impls::{BitString, BitStringWriter};
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_dbg_round_trip() {
        let mut writer = DbgBitWriter::new(BitStringWriter::new());
        assert_eq!(writer.write_masked(9, 2).unwrap(), 5);
        let bits = writer.into_inner().into_inner();
        assert_eq!(bits, "11001".parse::<BitString>().unwrap());
        assert!(logs_contain("write_unary value=2"));
        assert!(logs_contain("write_bits value=1 n=2"));

        let mut reader = DbgBitReader::new(bits.reader());
        assert_eq!(reader.read_masked(2).unwrap(), 9);
        assert_eq!(reader.bits_left(), 0);
        assert!(logs_contain("read_unary result=Ok(2)"));
        assert!(logs_contain("read_bits n=2 result=Ok(1)"));
    }
}

//! Writes the two output sinks: the flat binary EEPROM image and
//! the optional human-readable trace log.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io::Write;
use std::path::{Path, PathBuf};

use alu::Lut;
use base::prelude::Address;

/// An I/O failure on one of the output sinks.  This is the only
/// failure kind in the whole program; it is fatal and not retried.
#[derive(Debug)]
pub struct WriteFailed {
    pub target: PathBuf,
    pub error: std::io::Error,
}

impl Display for WriteFailed {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "failed to write {}: {}",
            self.target.display(),
            self.error
        )
    }
}

impl Error for WriteFailed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

/// Write the table verbatim, in address order, with no header or
/// metadata; address 0 of the EEPROM is byte offset 0 of the file.
pub fn write_lut<W: Write>(
    writer: &mut W,
    output_file_name: &Path,
    lut: &Lut,
) -> Result<(), WriteFailed> {
    let mut inner = || -> Result<(), std::io::Error> {
        writer.write_all(lut.as_bytes())?;
        writer.flush()
    };
    inner().map_err(|e| WriteFailed {
        target: output_file_name.to_path_buf(),
        error: e,
    })
}

/// Write one human-readable record per address, in address order.
///
/// The record layout matches the `log.txt` format earlier releases
/// of this generator emitted, so diffs against old logs stay
/// meaningful.  The trace is purely diagnostic; nothing consumes it.
pub fn write_trace<W: Write>(
    writer: &mut W,
    log_file_name: &Path,
    lut: &Lut,
) -> Result<(), WriteFailed> {
    let mut inner = || -> Result<(), std::io::Error> {
        for addr in Address::all() {
            let inputs = addr.decode();
            let stored = lut.get(addr);
            let outcome = lut.outcome(addr);
            writeln!(
                writer,
                "Addr:\t\t {:03X} --> {stored:03X}\t(c0 = {:x})",
                u16::from(addr),
                u8::from(inputs.c0)
            )?;
            writeln!(writer, "Operation:\t {:x}\n", u8::from(inputs.op))?;
            writeln!(writer, "Operand a:\t {:x}", inputs.a)?;
            writeln!(writer, "Operand b:\t {:x}", inputs.b)?;
            writeln!(writer, "Result  f:\t {:x}\n", outcome.f)?;
            writeln!(writer, "flag c4:\t {:x}", u8::from(outcome.c4))?;
            writeln!(writer, "flag z:\t\t {:x}", u8::from(outcome.z))?;
            writeln!(writer, "flag ov:\t {:x}", u8::from(outcome.ov))?;
            writeln!(writer, "flag eq:\t {:x}", u8::from(outcome.eq))?;
            writeln!(writer, "=====================================\n")?;
        }
        writer.flush()
    };
    inner().map_err(|e| WriteFailed {
        target: log_file_name.to_path_buf(),
        error: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alu::build_lut;

    #[test]
    fn test_image_is_the_table_verbatim() {
        let lut = build_lut();
        let mut image: Vec<u8> = Vec::new();
        write_lut(&mut image, Path::new("test-image"), &lut)
            .expect("writing to a Vec should not fail");
        assert_eq!(image.len(), 8192);
        assert_eq!(image.as_slice(), lut.as_bytes());
        for addr in Address::all() {
            assert_eq!(image[usize::from(addr)], lut.get(addr));
        }
    }

    #[test]
    fn test_trace_first_record() {
        let lut = build_lut();
        let mut trace: Vec<u8> = Vec::new();
        write_trace(&mut trace, Path::new("test-log"), &lut)
            .expect("writing to a Vec should not fail");
        let text = String::from_utf8(trace).expect("trace should be valid UTF-8");

        // Address 0 is PASS with a=b=0: stored byte 0xA0 (z and eq).
        let expected = concat!(
            "Addr:\t\t 000 --> 0A0\t(c0 = 0)\n",
            "Operation:\t 0\n",
            "\n",
            "Operand a:\t 0\n",
            "Operand b:\t 0\n",
            "Result  f:\t 0\n",
            "\n",
            "flag c4:\t 0\n",
            "flag z:\t\t 1\n",
            "flag ov:\t 0\n",
            "flag eq:\t 1\n",
            "=====================================\n",
            "\n",
        );
        assert!(
            text.starts_with(expected),
            "first trace record mismatch:\n{}",
            &text[..expected.len().min(text.len())]
        );
    }

    // 0x1253 decodes to a=3, b=5, c0=0, ADD; the stored byte must
    // show f=8 with the overflow flag set.
    #[test]
    fn test_trace_records_known_overflow_case() {
        let lut = build_lut();
        let mut trace: Vec<u8> = Vec::new();
        write_trace(&mut trace, Path::new("test-log"), &lut)
            .expect("writing to a Vec should not fail");
        let text = String::from_utf8(trace).expect("trace should be valid UTF-8");
        assert!(text.contains("Addr:\t\t 1253 --> 048\t(c0 = 0)"));
    }

    #[test]
    fn test_trace_has_one_record_per_address() {
        let lut = build_lut();
        let mut trace: Vec<u8> = Vec::new();
        write_trace(&mut trace, Path::new("test-log"), &lut)
            .expect("writing to a Vec should not fail");
        let text = String::from_utf8(trace).expect("trace should be valid UTF-8");
        assert_eq!(text.matches("Addr:").count(), 8192);
    }
}

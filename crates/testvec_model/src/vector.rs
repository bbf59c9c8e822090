//! Test-vector file sessions.
//!
//! A [`VectorWriter`] owns its sink for the duration of a generation session:
//! opened once, appended to one record at a time, and dropped (or flushed) at
//! session end. A [`VectorReader`] is the line-oriented inverse, yielding one
//! token vector per record and optionally loading records back into a schema.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use testvec_codec::{read_record, write_record, Token};

use crate::bfm::Bfm;
use crate::error::ModelError;
use crate::signal::Mode;

/// Conventional file name for stimulus records.
pub const INPUTS_FILE: &str = "inputs.dat";

/// Conventional file name for expected-output records.
pub const OUTPUTS_FILE: &str = "outputs.dat";

/// Writes test-vector records to an owned sink.
///
/// Records are buffered; nothing is flushed until [`flush`](Self::flush) is
/// called or the writer is dropped.
pub struct VectorWriter<W: Write> {
    out: W,
}

impl VectorWriter<BufWriter<File>> {
    /// Creates (or truncates) a vector file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Creates the conventional `inputs.dat` stimulus file in `dir`.
    pub fn create_inputs(dir: impl AsRef<Path>) -> Result<Self, ModelError> {
        Self::create(dir.as_ref().join(INPUTS_FILE))
    }

    /// Creates the conventional `outputs.dat` expected-output file in `dir`.
    pub fn create_outputs(dir: impl AsRef<Path>) -> Result<Self, ModelError> {
        Self::create(dir.as_ref().join(OUTPUTS_FILE))
    }
}

impl<W: Write> VectorWriter<W> {
    /// Wraps an already-open sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Appends one record carrying the `mode` ports of `bfm`, in declaration
    /// order.
    pub fn write_transaction(&mut self, bfm: &Bfm, mode: Mode) -> Result<(), ModelError> {
        bfm.write_vector(&mut self.out, mode)
    }

    /// Appends one record of arbitrary tokens.
    pub fn write_record(&mut self, tokens: &[Token]) -> Result<(), ModelError> {
        write_record(&mut self.out, tokens)?;
        Ok(())
    }

    /// Flushes buffered records to the underlying sink.
    pub fn flush(&mut self) -> Result<(), ModelError> {
        self.out.flush()?;
        Ok(())
    }

    /// Consumes the writer, returning the sink without flushing.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Reads test-vector records line by line.
pub struct VectorReader<R: BufRead> {
    input: R,
    line: String,
}

impl VectorReader<BufReader<File>> {
    /// Opens a vector file at `path` for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> VectorReader<R> {
    /// Wraps an already-open source.
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }

    /// Reads the next record, returning its tokens in positional order.
    ///
    /// Returns `Ok(None)` at end of file.
    pub fn next_record(&mut self) -> Result<Option<Vec<String>>, ModelError> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(
            read_record(&self.line)
                .into_iter()
                .map(str::to_string)
                .collect(),
        ))
    }

    /// Loads the next record into the `mode` ports of `bfm`, positionally.
    ///
    /// Returns `Ok(false)` at end of file. Fails with
    /// [`ModelError::FieldCountMismatch`] when the record does not carry one
    /// token per selected port, and with a codec error when a token is
    /// malformed.
    pub fn read_transaction(&mut self, bfm: &mut Bfm, mode: Mode) -> Result<bool, ModelError> {
        let Some(tokens) = self.next_record()? else {
            return Ok(false);
        };
        let names: Vec<String> = bfm
            .fields_by_mode(mode)
            .map(|(name, _)| name.to_string())
            .collect();
        if tokens.len() != names.len() {
            return Err(ModelError::FieldCountMismatch {
                found: tokens.len(),
                expected: names.len(),
            });
        }
        for (name, token) in names.iter().zip(&tokens) {
            bfm.get_mut(name)?.set_bits(token, false)?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Signal;

    fn reg() -> Bfm {
        Bfm::new("reg")
            .field("d", Signal::new(Mode::Input, 8).unwrap())
            .unwrap()
            .field("en", Signal::single(Mode::Input))
            .unwrap()
            .field("q", Signal::new(Mode::Output, 8).unwrap())
            .unwrap()
    }

    #[test]
    fn write_records_through_memory_sink() {
        let mut writer = VectorWriter::new(Vec::new());
        writer
            .write_record(&[Token::from(5i64), Token::from("101")])
            .unwrap();
        writer.write_record(&[Token::from(0i64)]).unwrap();
        let out = writer.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "101,101\n0\n");
    }

    #[test]
    fn transaction_round_trip_in_memory() {
        let mut bfm = reg();
        bfm.get_mut("d").unwrap().set_num(&0xa5.into());
        bfm.get_mut("en").unwrap().set_num(&1.into());

        let mut writer = VectorWriter::new(Vec::new());
        writer.write_transaction(&bfm, Mode::Input).unwrap();
        let bytes = writer.into_inner();
        assert_eq!(String::from_utf8(bytes.clone()).unwrap(), "10100101,1\n");

        let mut loaded = reg();
        let mut reader = VectorReader::new(bytes.as_slice());
        assert!(reader.read_transaction(&mut loaded, Mode::Input).unwrap());
        assert_eq!(loaded.get("d").unwrap().as_bits(), "10100101");
        assert_eq!(loaded.get("en").unwrap().as_bits(), "1");
        // second read hits end of file
        assert!(!reader.read_transaction(&mut loaded, Mode::Input).unwrap());
    }

    #[test]
    fn next_record_yields_tokens_until_eof() {
        let data = b"1,0\n0110\n".to_vec();
        let mut reader = VectorReader::new(data.as_slice());
        assert_eq!(reader.next_record().unwrap().unwrap(), ["1", "0"]);
        assert_eq!(reader.next_record().unwrap().unwrap(), ["0110"]);
        assert!(reader.next_record().unwrap().is_none());
    }

    #[test]
    fn field_count_mismatch_is_detected() {
        let data = b"10100101\n".to_vec();
        let mut bfm = reg();
        let mut reader = VectorReader::new(data.as_slice());
        assert!(matches!(
            reader.read_transaction(&mut bfm, Mode::Input),
            Err(ModelError::FieldCountMismatch {
                found: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn malformed_token_fails_typed() {
        let data = b"1x100101,1\n".to_vec();
        let mut bfm = reg();
        let mut reader = VectorReader::new(data.as_slice());
        assert!(matches!(
            reader.read_transaction(&mut bfm, Mode::Input),
            Err(ModelError::Codec(_))
        ));
    }

    #[test]
    fn multibyte_token_fails_typed() {
        // the over-wide second token forces the rightmost-width trim to cut
        // through a multibyte character
        let data = "00000000,0é\n".as_bytes().to_vec();
        let mut bfm = reg();
        let mut reader = VectorReader::new(data.as_slice());
        assert!(matches!(
            reader.read_transaction(&mut bfm, Mode::Input),
            Err(ModelError::Codec(_))
        ));
    }

    #[test]
    fn record_writes_never_flush() {
        struct FlushCounter {
            sink: Vec<u8>,
            flushes: usize,
        }
        impl Write for FlushCounter {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.sink.write(buf)
            }
            fn flush(&mut self) -> std::io::Result<()> {
                self.flushes += 1;
                Ok(())
            }
        }

        let mut bfm = reg();
        bfm.get_mut("d").unwrap().set_num(&1.into());
        let mut writer = VectorWriter::new(FlushCounter {
            sink: Vec::new(),
            flushes: 0,
        });
        writer.write_record(&[Token::from(5i64)]).unwrap();
        writer.write_transaction(&bfm, Mode::Input).unwrap();
        let counter = writer.into_inner();
        assert_eq!(counter.flushes, 0);
        assert_eq!(
            String::from_utf8(counter.sink).unwrap(),
            "101\n00000001,0\n"
        );
    }

    #[test]
    fn explicit_flush_reaches_the_sink_once() {
        struct FlushCounter {
            flushes: usize,
        }
        impl Write for FlushCounter {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                self.flushes += 1;
                Ok(())
            }
        }

        let mut writer = VectorWriter::new(FlushCounter { flushes: 0 });
        writer.write_record(&[Token::from(1i64)]).unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.into_inner().flushes, 1);
    }

    #[test]
    fn file_backed_session() {
        let dir = tempfile::tempdir().unwrap();

        let mut bfm = reg();
        let mut writer = VectorWriter::create_inputs(dir.path()).unwrap();
        bfm.get_mut("d").unwrap().set_num(&3.into());
        bfm.get_mut("en").unwrap().set_num(&1.into());
        writer.write_transaction(&bfm, Mode::Input).unwrap();
        bfm.get_mut("d").unwrap().set_num(&200.into());
        bfm.get_mut("en").unwrap().set_num(&0.into());
        writer.write_transaction(&bfm, Mode::Input).unwrap();
        writer.flush().unwrap();

        let contents = std::fs::read_to_string(dir.path().join(INPUTS_FILE)).unwrap();
        assert_eq!(contents, "00000011,1\n11001000,0\n");

        let mut reader = VectorReader::open(dir.path().join(INPUTS_FILE)).unwrap();
        let mut loaded = reg();
        assert!(reader.read_transaction(&mut loaded, Mode::Input).unwrap());
        assert_eq!(loaded.get("d").unwrap().as_bits(), "00000011");
    }
}

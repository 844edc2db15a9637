use crate::domain::model::PrimeHit;
use crate::domain::ports::PrimeSink;
use crate::utils::error::Result;
use std::io::{BufWriter, Write};

/// Writes the prime listing as `<prime> [<divisor checks>]` lines.
pub struct WriterSink<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            out: BufWriter::new(writer),
        }
    }

    pub fn write_summary(&mut self, summary: &str) -> Result<()> {
        self.out.write_all(summary.as_bytes())?;
        if !summary.ends_with('\n') {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Flushes buffered output and hands back the writer.
    pub fn finish(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|e| crate::utils::error::PrimesError::IoError(e.into_error()))
    }
}

impl<W: Write> PrimeSink for WriterSink<W> {
    fn prime(&mut self, hit: &PrimeHit) -> Result<()> {
        writeln!(self.out, "{} [{}]", hit.value, hit.divisor_checks)?;
        Ok(())
    }

    fn diagnostic(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }
}

/// Keeps everything in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub primes: Vec<PrimeHit>,
    pub diagnostics: Vec<String>,
}

impl PrimeSink for CollectingSink {
    fn prime(&mut self, hit: &PrimeHit) -> Result<()> {
        self.primes.push(*hit);
        Ok(())
    }

    fn diagnostic(&mut self, line: &str) -> Result<()> {
        self.diagnostics.push(line.to_string());
        Ok(())
    }
}

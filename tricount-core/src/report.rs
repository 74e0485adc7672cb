//! Plain-text report output.

use std::io::{self, BufWriter, Write};

use tricount_types::SequenceCount;

/// Writes one `<sequence> <count>` line per entry, in the given order.
pub fn write_report<W: Write>(out: W, entries: &[SequenceCount]) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for entry in entries {
        writeln!(out, "{entry}")?;
    }
    out.flush()
}

use std::io::Write;

use intel_summary::injection;

/// Write the delimited summary block in a single write, then flush.
///
/// Nothing else is ever written to `out`.
pub fn emit<W: Write>(out: &mut W, tag: &str, summary: &str) -> std::io::Result<()> {
    let block = injection::wrap_block(tag, summary);
    out.write_all(block.as_bytes())?;
    out.flush()
}

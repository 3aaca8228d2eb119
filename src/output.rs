//! Writing ordered units downstream

use crate::error::{SortContext, SortResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one unit per line to `output`, or to stdout when `None`
pub fn write_units<S: AsRef<str>>(units: &[S], output: Option<&Path>) -> SortResult<()> {
    let mut writer: Box<dyn Write> = if let Some(path) = output {
        let name = path.to_string_lossy();
        Box::new(BufWriter::new(File::create(path).with_file_context(&name)?))
    } else {
        Box::new(BufWriter::new(std::io::stdout()))
    };

    write_units_to(&mut writer, units)
}

pub fn write_units_to<W: Write + ?Sized, S: AsRef<str>>(
    writer: &mut W,
    units: &[S],
) -> SortResult<()> {
    for unit in units {
        writer.write_all(unit.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

//! Stdout rendering for command results.

use std::io::{self, Write};

use crate::commands::CommandOutput;
use crate::error::CliError;

pub fn render(output: &CommandOutput, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle, output, pretty)?;
    handle.flush()?;
    Ok(())
}

fn write_output<W: Write>(
    writer: &mut W,
    output: &CommandOutput,
    pretty: bool,
) -> Result<(), CliError> {
    match output {
        CommandOutput::Json(value) => {
            if pretty {
                serde_json::to_writer_pretty(&mut *writer, value)?;
            } else {
                serde_json::to_writer(&mut *writer, value)?;
            }
            writeln!(writer)?;
        }
        CommandOutput::Text(text) => writeln!(writer, "{text}")?,
        CommandOutput::Silent => {}
    }
    Ok(())
}

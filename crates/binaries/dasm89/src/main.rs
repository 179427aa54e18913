/*
    marty_dasm89
    https://github.com/dbalsom/marty_dasm89

    Copyright 2022-2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    ---------------------------------------------------------------------------

    dasm89::main.rs

    Command-line frontend: read a raw 8089 firmware image, disassemble it,
    and write the listing to a file or stdout.

*/

mod config;

use std::{
    fs,
    fs::File,
    io,
    io::{BufWriter, Write},
};

use anyhow::{bail, Context, Error};
use log::info;

use dasm89_core::{disassemble, ListingOptions, INSTRUCTION_SET};

fn main() -> Result<(), Error> {
    env_logger::init(); // Log to stderr (run with RUST_LOG=debug).

    let config = config::read_config()?;

    if config.dump_table {
        INSTRUCTION_SET.dump(&mut io::stdout().lock())?;
        if config.binary_file.is_none() {
            return Ok(());
        }
    }

    let Some(binary_path) = &config.binary_file else {
        bail!("No binary file specified");
    };

    let fw = fs::read(binary_path)
        .with_context(|| format!("Failed to read binary file: {}", binary_path.display()))?;
    info!("read {} bytes from {}", fw.len(), binary_path.display());

    let options = ListingOptions {
        show_object: config.listing,
    };

    match &config.output_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            disassemble(&fw, &options, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            disassemble(&fw, &options, &mut stdout.lock())?;
        }
    }

    Ok(())
}

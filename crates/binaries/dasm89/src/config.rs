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

    dasm89::config.rs

    Configuration for the dasm89 frontend: an optional TOML configuration
    file with command line arguments overlaid on top. Command line arguments
    always take priority over configuration file settings.

*/

use std::{fs, path::PathBuf};

use anyhow::{Context, Error};
use bpaf::Bpaf;
use serde_derive::Deserialize;

#[derive(Debug, Default, Bpaf)]
#[bpaf(options, version, generate(cli_args))]
pub struct CmdLineArgs {
    #[bpaf(long("config_file"), long("configfile"))]
    pub config_file: Option<PathBuf>,

    /// Generate output in listing format: address, raw bytes, label gutter.
    #[bpaf(short('l'), long("listing"), switch)]
    pub listing: bool,

    /// Dump the compiled opcode dispatch table and exit.
    #[bpaf(long("dump_table"), long("dumptable"), switch)]
    pub dump_table: bool,

    #[bpaf(positional("BINARY_FILE"))]
    pub binary_file: Option<PathBuf>,

    #[bpaf(positional("OUTPUT_FILE"))]
    pub output_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFileParams {
    #[serde(default)]
    pub listing: ListingParams,
}

/// The effective configuration after overlaying the command line on the
/// configuration file.
#[derive(Debug)]
pub struct ConfigParams {
    pub listing: bool,
    pub dump_table: bool,
    pub binary_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
}

pub fn read_config() -> Result<ConfigParams, Error> {
    let args = cli_args().run();

    let mut file_params = ConfigFileParams::default();
    if let Some(path) = &args.config_file {
        let toml_text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        file_params = toml::from_str(&toml_text)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;
    }

    Ok(ConfigParams {
        listing: args.listing || file_params.listing.enabled,
        dump_table: args.dump_table,
        binary_file: args.binary_file,
        output_file: args.output_file,
    })
}

use clap::{Args, Subcommand};

use bytestruct::{compile, ByteOrder, Layout};

use crate::exit::{library_error, CliResult};
use crate::output::OutputFormat;

pub mod layout;
pub mod pack;
pub mod unpack;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a format string and print its field table.
    Layout(LayoutArgs),
    /// Pack values into a buffer and print it.
    Pack(PackArgs),
    /// Decode a hex buffer into field values.
    Unpack(UnpackArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Layout(args) => layout::run(args, format),
        Command::Pack(args) => pack::run(args, format),
        Command::Unpack(args) => unpack::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Format string plus byte order, shared by every layout-driven command.
#[derive(Args, Debug)]
pub struct LayoutSource {
    /// Type-format string, e.g. `bI[4]f`.
    #[arg(id = "layout_format", value_name = "FORMAT")]
    pub format: String,
    /// Byte order: big, little, native or sortable.
    #[arg(long, short = 'b', value_name = "ORDER", default_value = "big")]
    pub byte_order: ByteOrder,
}

impl LayoutSource {
    pub fn compile(&self) -> CliResult<Layout> {
        compile(&self.format, self.byte_order)
            .map_err(|err| library_error(&format!("invalid format {:?}", self.format), err))
    }
}

#[derive(Args, Debug)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub source: LayoutSource,
}

#[derive(Args, Debug)]
pub struct PackArgs {
    #[command(flatten)]
    pub source: LayoutSource,
    /// One value per field. Arrays are comma-separated; `c` fields take a
    /// string of exactly `count` bytes.
    #[arg(value_name = "VALUE", required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

#[derive(Args, Debug)]
pub struct UnpackArgs {
    #[command(flatten)]
    pub source: LayoutSource,
    /// Packed buffer as hex; an optional `0x`/`0X` prefix and whitespace are ignored.
    #[arg(value_name = "HEX")]
    pub hex: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "bytestruct", version, about = "Packed binary record CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "BYTESTRUCT_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    match cmd::run(cli.command, format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::debug!(code = err.code, "command failed");
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytestruct::ByteOrder;

    #[test]
    fn parses_pack_with_negative_values() {
        let cli = Cli::try_parse_from(["bytestruct", "pack", "bh[2]", "-1", "-2,3"])
            .expect("pack args should parse");

        match cli.command {
            Command::Pack(args) => {
                assert_eq!(args.source.format, "bh[2]");
                assert_eq!(args.source.byte_order, ByteOrder::BigEndian);
                assert_eq!(args.values, vec!["-1", "-2,3"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_byte_order_names() {
        let cli = Cli::try_parse_from(["bytestruct", "layout", "d[2]", "--byte-order", "sortable"])
            .expect("layout args should parse");
        match cli.command {
            Command::Layout(args) => assert_eq!(args.source.byte_order, ByteOrder::Sortable),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn output_format_and_layout_format_stay_separate() {
        let cli = Cli::try_parse_from(["bytestruct", "--format", "json", "unpack", "bI[4]f", "00"])
            .expect("unpack args should parse");
        assert!(matches!(cli.format, Some(OutputFormat::Json)));
        match cli.command {
            Command::Unpack(args) => {
                assert_eq!(args.source.format, "bI[4]f");
                assert_eq!(args.hex, "00");
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["bytestruct", "layout", "d", "--format", "raw"])
            .expect("global flag after the subcommand should parse");
        assert!(matches!(cli.format, Some(OutputFormat::Raw)));
        assert!(matches!(cli.command, Command::Layout(ref args) if args.source.format == "d"));
    }

    #[test]
    fn rejects_unknown_byte_order() {
        let err = Cli::try_parse_from(["bytestruct", "layout", "d", "--byte-order", "middle"])
            .expect_err("unknown byte order should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn pack_requires_values() {
        let err = Cli::try_parse_from(["bytestruct", "pack", "b"]).expect_err("values are required");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}

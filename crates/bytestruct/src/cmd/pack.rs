use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use bytestruct::{pack_to_bytes, Field, FieldValues, Layout, ScalarType, Value};

use crate::cmd::PackArgs;
use crate::exit::{library_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_json, print_raw, print_table, OutputFormat};

#[derive(Serialize)]
struct PackOutput<'a> {
    format: &'a str,
    byte_order: &'static str,
    size: usize,
    hex: String,
}

pub fn run(args: PackArgs, format: OutputFormat) -> CliResult<i32> {
    let layout = args.source.compile()?;
    if args.values.len() != layout.len() {
        return Err(CliError::new(
            USAGE,
            format!(
                "format {:?} declares {} fields, got {} values",
                layout.format(),
                layout.len(),
                args.values.len()
            ),
        ));
    }

    let owned = layout
        .fields()
        .iter()
        .zip(&args.values)
        .enumerate()
        .map(|(index, (field, text))| parse_field(index, field, text))
        .collect::<CliResult<Vec<_>>>()?;
    let values: Vec<Value<'_>> = owned.iter().map(FieldValues::as_value).collect();
    let bytes = pack_to_bytes(&layout, &values).map_err(|err| library_error("pack failed", err))?;
    debug!(format = layout.format(), size = bytes.len(), "packed values");

    print_packed(&layout, &bytes, format)?;
    Ok(SUCCESS)
}

/// Parse the command-line text for field `index` into owned values.
pub(crate) fn parse_field(index: usize, field: &Field, text: &str) -> CliResult<FieldValues> {
    let values = match field.scalar() {
        ScalarType::Char => FieldValues::Chars(text.as_bytes().to_vec()),
        ScalarType::Int8 => FieldValues::Int8s(parse_list(index, text)?),
        ScalarType::UInt8 => FieldValues::UInt8s(parse_list(index, text)?),
        ScalarType::Int16 => FieldValues::Int16s(parse_list(index, text)?),
        ScalarType::UInt16 => FieldValues::UInt16s(parse_list(index, text)?),
        ScalarType::Int32 => FieldValues::Int32s(parse_list(index, text)?),
        ScalarType::UInt32 => FieldValues::UInt32s(parse_list(index, text)?),
        ScalarType::Int64 => FieldValues::Int64s(parse_list(index, text)?),
        ScalarType::UInt64 => FieldValues::UInt64s(parse_list(index, text)?),
        ScalarType::Float32 => FieldValues::Float32s(parse_list(index, text)?),
        ScalarType::Float64 => FieldValues::Float64s(parse_list(index, text)?),
        ScalarType::Pointer => FieldValues::Ptrs(parse_list(index, text)?),
    };
    Ok(values)
}

fn parse_list<T>(index: usize, text: &str) -> CliResult<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    text.split(',')
        .map(str::trim)
        .map(|item| {
            item.parse().map_err(|err| {
                CliError::new(
                    DATA_INVALID,
                    format!("field {index}: invalid value {item:?}: {err}"),
                )
            })
        })
        .collect()
}

fn print_packed(layout: &Layout, bytes: &[u8], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(&PackOutput {
            format: layout.format(),
            byte_order: layout.byte_order().name(),
            size: bytes.len(),
            hex: hex::encode(bytes),
        })?,
        OutputFormat::Table => {
            let rows = layout
                .fields()
                .iter()
                .enumerate()
                .map(|(index, field)| {
                    vec![
                        index.to_string(),
                        field.scalar().name().to_string(),
                        field.offset().to_string(),
                        hex::encode(&bytes[field.offset()..field.end()]),
                    ]
                })
                .collect();
            print_table(&["INDEX", "TYPE", "OFFSET", "BYTES"], rows);
        }
        OutputFormat::Pretty => {
            let groups: Vec<String> = layout
                .fields()
                .iter()
                .map(|field| hex::encode(&bytes[field.offset()..field.end()]))
                .collect();
            println!("{}", groups.join(" "));
        }
        OutputFormat::Raw => print_raw(bytes)?,
    }
    Ok(())
}

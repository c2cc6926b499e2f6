use std::fmt::Display;

use serde::Serialize;
use tracing::{debug, warn};

use bytestruct::{decode, FieldValues, Layout};

use crate::cmd::UnpackArgs;
use crate::exit::{library_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Serialize)]
struct FieldOutput {
    index: usize,
    #[serde(rename = "type")]
    scalar: &'static str,
    values: serde_json::Value,
    #[serde(skip)]
    text: String,
}

#[derive(Serialize)]
struct UnpackOutput<'a> {
    format: &'a str,
    byte_order: &'static str,
    fields: Vec<FieldOutput>,
}

pub fn run(args: UnpackArgs, format: OutputFormat) -> CliResult<i32> {
    let layout = args.source.compile()?;
    let buf = parse_hex(&args.hex)?;

    if buf.len() > layout.total_size() {
        warn!(
            extra = buf.len() - layout.total_size(),
            "ignoring bytes past the end of the layout"
        );
    }
    let fields = decode(&layout, &buf).map_err(|err| library_error("unpack failed", err))?;
    debug!(format = layout.format(), fields = fields.len(), "decoded buffer");

    print_unpacked(&describe(&layout, &fields), format)?;
    Ok(SUCCESS)
}

pub(crate) fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let trimmed = input.trim();
    let digits: String = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    hex::decode(&digits).map_err(|err| CliError::new(DATA_INVALID, format!("invalid hex buffer: {err}")))
}

fn describe<'a>(layout: &'a Layout, fields: &[FieldValues]) -> UnpackOutput<'a> {
    UnpackOutput {
        format: layout.format(),
        byte_order: layout.byte_order().name(),
        fields: fields
            .iter()
            .enumerate()
            .map(|(index, values)| {
                let (values_json, text) = render(values);
                FieldOutput {
                    index,
                    scalar: values.scalar().name(),
                    values: values_json,
                    text,
                }
            })
            .collect(),
    }
}

/// JSON and display forms of one field. Char runs render as a string.
fn render(values: &FieldValues) -> (serde_json::Value, String) {
    match values {
        FieldValues::Chars(bytes) => {
            let text = String::from_utf8_lossy(bytes).into_owned();
            (serde_json::Value::String(text.clone()), text)
        }
        FieldValues::Int8s(v) => list(v),
        FieldValues::UInt8s(v) => list(v),
        FieldValues::Int16s(v) => list(v),
        FieldValues::UInt16s(v) => list(v),
        FieldValues::Int32s(v) => list(v),
        FieldValues::UInt32s(v) => list(v),
        FieldValues::Int64s(v) => list(v),
        FieldValues::UInt64s(v) => list(v),
        FieldValues::Float32s(v) => list(v),
        FieldValues::Float64s(v) => list(v),
        FieldValues::Ptrs(v) => list(v),
    }
}

fn list<T: Serialize + Display>(values: &[T]) -> (serde_json::Value, String) {
    // Non-finite floats have no JSON number form and become null.
    let json = serde_json::to_value(values).unwrap_or(serde_json::Value::Null);
    let text = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    (json, text)
}

fn print_unpacked(out: &UnpackOutput<'_>, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(out)?,
        OutputFormat::Table => {
            let rows = out
                .fields
                .iter()
                .map(|f| vec![f.index.to_string(), f.scalar.to_string(), f.text.clone()])
                .collect();
            print_table(&["INDEX", "TYPE", "VALUES"], rows);
        }
        OutputFormat::Pretty => {
            for f in &out.fields {
                println!("[{}] {}: {}", f.index, f.scalar, f.text);
            }
        }
        OutputFormat::Raw => {
            for f in &out.fields {
                println!("{}", f.text);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytestruct::{compile, pack_to_bytes, ByteOrder, Value};

    #[test]
    fn hex_accepts_prefix_and_spaces() {
        assert_eq!(parse_hex("0x01 ff").unwrap(), vec![0x01, 0xff]);
        assert_eq!(parse_hex(" 0XAB cd ").unwrap(), vec![0xab, 0xcd]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
        assert_eq!(parse_hex("abc").unwrap_err().code, DATA_INVALID);
        assert_eq!(parse_hex("zz").unwrap_err().code, DATA_INVALID);
    }

    #[test]
    fn renders_fields_for_display() {
        let layout = compile("c[2]h[2]f", ByteOrder::LittleEndian).unwrap();
        let buf = pack_to_bytes(
            &layout,
            &[Value::from("hi"), Value::Int16s(&[-1, 300]), Value::Float32(f32::NAN)],
        )
        .unwrap();
        let fields = decode(&layout, &buf).unwrap();
        let out = describe(&layout, &fields);

        assert_eq!(out.fields[0].text, "hi");
        assert_eq!(out.fields[0].values, serde_json::json!("hi"));
        assert_eq!(out.fields[1].scalar, "int16");
        assert_eq!(out.fields[1].text, "-1,300");
        assert_eq!(out.fields[1].values, serde_json::json!([-1, 300]));
        assert_eq!(out.fields[2].text, "NaN");
        assert_eq!(out.fields[2].values, serde_json::json!([null]));
    }
}

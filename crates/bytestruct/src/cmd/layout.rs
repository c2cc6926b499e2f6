use serde::Serialize;

use bytestruct::Layout;

use crate::cmd::LayoutArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Serialize)]
struct FieldOutput {
    index: usize,
    offset: usize,
    count: usize,
    #[serde(rename = "type")]
    scalar: &'static str,
    tag: char,
    span: usize,
}

#[derive(Serialize)]
struct LayoutOutput<'a> {
    format: &'a str,
    byte_order: &'static str,
    total_size: usize,
    fields: Vec<FieldOutput>,
}

pub fn run(args: LayoutArgs, format: OutputFormat) -> CliResult<i32> {
    let layout = args.source.compile()?;
    print_layout(&layout, format)?;
    Ok(SUCCESS)
}

fn describe(layout: &Layout) -> LayoutOutput<'_> {
    LayoutOutput {
        format: layout.format(),
        byte_order: layout.byte_order().name(),
        total_size: layout.total_size(),
        fields: layout
            .fields()
            .iter()
            .enumerate()
            .map(|(index, field)| FieldOutput {
                index,
                offset: field.offset(),
                count: field.count(),
                scalar: field.scalar().name(),
                tag: field.scalar().tag(),
                span: field.span(),
            })
            .collect(),
    }
}

fn print_layout(layout: &Layout, format: OutputFormat) -> CliResult<()> {
    let out = describe(layout);
    match format {
        OutputFormat::Json => print_json(&out)?,
        OutputFormat::Table => {
            println!("{layout}");
            let rows = out
                .fields
                .iter()
                .map(|f| {
                    vec![
                        f.index.to_string(),
                        f.offset.to_string(),
                        f.count.to_string(),
                        f.scalar.to_string(),
                        f.span.to_string(),
                    ]
                })
                .collect();
            print_table(&["INDEX", "OFFSET", "COUNT", "TYPE", "SPAN"], rows);
        }
        OutputFormat::Pretty => {
            println!("Layout:");
            println!("  Format:     {}", out.format);
            println!("  Byte order: {}", out.byte_order);
            println!("  Total size: {} bytes", out.total_size);
            for f in &out.fields {
                println!(
                    "  [{}] {}{} @ {} ({} bytes)",
                    f.index,
                    f.scalar,
                    if f.count > 1 { format!("[{}]", f.count) } else { String::new() },
                    f.offset,
                    f.span
                );
            }
        }
        OutputFormat::Raw => println!("{}", out.total_size),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytestruct::{compile, ByteOrder};

    #[test]
    fn describes_every_field() {
        let layout = compile("bI[4]f", ByteOrder::Sortable).unwrap();
        let out = describe(&layout);
        assert_eq!(out.byte_order, "sortable");
        assert_eq!(out.total_size, 21);
        let offsets: Vec<_> = out.fields.iter().map(|f| (f.offset, f.count, f.span)).collect();
        assert_eq!(offsets, vec![(0, 1, 1), (1, 4, 16), (17, 1, 4)]);
        assert_eq!(out.fields[1].tag, 'I');
    }
}

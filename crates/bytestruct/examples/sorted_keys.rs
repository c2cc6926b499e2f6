//! Build byte-comparable index keys and sort them with a plain byte sort.
//!
//! Run with: `cargo run -p bytestruct --example sorted_keys`

use bytestruct::{compile, decode, ByteOrder, FieldValues, Packer};

fn main() -> bytestruct::Result<()> {
    // (region, temperature, reading id)
    let layout = compile("c[2]dL", ByteOrder::Sortable)?;
    let rows: [(&str, f64, u64); 5] = [
        ("eu", 12.5, 3),
        ("us", -4.0, 1),
        ("eu", -0.0, 7),
        ("eu", 12.5, 2),
        ("us", -40.25, 9),
    ];

    let mut keys = Vec::with_capacity(rows.len());
    for (region, temp, id) in rows {
        keys.push(
            Packer::new(&layout)
                .push(region)
                .push(temp)
                .push(id)
                .to_bytes()?,
        );
    }
    keys.sort();

    for key in &keys {
        let fields = decode(&layout, key)?;
        if let [FieldValues::Chars(region), FieldValues::Float64s(temp), FieldValues::UInt64s(id)] =
            fields.as_slice()
        {
            println!(
                "{} {:>7} {:>3}  {}",
                String::from_utf8_lossy(region),
                temp[0],
                id[0],
                hex::encode(key)
            );
        }
    }
    Ok(())
}

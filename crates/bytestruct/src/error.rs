use bytestruct_codec::CodecError;
use bytestruct_layout::LayoutError;
use bytestruct_scalar::ScalarError;

/// Any error produced by the bytestruct crates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Scalar(#[from] ScalarError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compile, pack_to_bytes, ByteOrder, Value};

    fn pack_one(format: &str, value: Value<'_>) -> Result<usize> {
        let layout = compile(format, ByteOrder::BigEndian)?;
        Ok(pack_to_bytes(&layout, &[value])?.len())
    }

    #[test]
    fn wraps_each_crate_error() {
        assert_eq!(pack_one("I", Value::UInt32(1)).unwrap(), 4);
        assert!(matches!(pack_one("I[", Value::UInt32(1)), Err(Error::Layout(_))));
        assert!(matches!(pack_one("I", Value::Int32(1)), Err(Error::Codec(_))));

        let err: Error = "middle".parse::<ByteOrder>().unwrap_err().into();
        assert!(matches!(err, Error::Scalar(_)));
    }

    #[test]
    fn messages_pass_through() {
        let err = pack_one("", Value::Char(b'x')).unwrap_err();
        assert_eq!(err.to_string(), "format string declares no fields");
    }
}

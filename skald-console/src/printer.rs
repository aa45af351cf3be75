use std::io::{self, Write};

use skald_value::Value;

use crate::format::format_value;

/// Write one value to the sink.
///
/// With `deep` set, an array expands one level: `[elem, elem, ...]` with
/// each element rendered quoted and shallow, so nested arrays stay as
/// their length placeholder. Everything else writes its scalar rendering.
pub fn write_value(
    out: &mut dyn Write,
    value: &Value,
    deep: bool,
    quotes: bool,
) -> io::Result<()> {
    let rendered = format_value(value, quotes);
    if !rendered.complete && deep {
        if let Some(elems) = value.as_array() {
            out.write_all(b"[")?;
            let len = elems.len();
            for i in 0..len {
                if i != 0 {
                    out.write_all(b", ")?;
                }
                let element = elems.get(i);
                write_value(out, &element, false, true)?;
            }
            return out.write_all(b"]");
        }
    }
    out.write_all(rendered.text.as_bytes())
}

/// The print dispatcher: arguments space-joined in order, each rendered
/// unquoted with deep expansion, then a trailing newline. Zero arguments
/// write just the newline.
pub fn print_args(out: &mut dyn Write, args: &[Value]) -> io::Result<()> {
    for (i, value) in args.iter().enumerate() {
        if i != 0 {
            out.write_all(b" ")?;
        }
        write_value(out, value, true, false)?;
    }
    out.write_all(b"\n")
}

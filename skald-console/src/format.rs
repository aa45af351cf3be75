use std::fmt::Write as _;

use skald_value::Value;

use crate::buffer::BoundedBuf;

/// A single rendered value never exceeds this many bytes of text, not
/// counting the surrounding quotes of a quoted string.
pub const MAX_VALUE_LEN: usize = 255;

/// One value rendered to bounded text.
///
/// `complete` is false exactly when the text is an abbreviation the caller
/// may want to expand: arrays (expandable one level by the printer) and
/// oversized strings (never expanded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub complete: bool,
}

/// Render a single value into bounded text.
///
/// Strings are wrapped in double quotes when `quotes` is set. Containers
/// are not descended into here: arrays and plain objects come back as
/// placeholders. This never fails; every value kind produces some text.
pub fn format_value(value: &Value, quotes: bool) -> Rendered {
    // Two extra slots so a string that fits still fits once quoted.
    let mut buf = BoundedBuf::new(MAX_VALUE_LEN + 2);
    let mut complete = true;
    match value {
        Value::Array(elems) => {
            let _ = write!(buf, "[Array - length {}]", elems.len());
            complete = false;
        }
        Value::Boolean(b) => buf.push_str(if *b { "true" } else { "false" }),
        Value::Function(_) => buf.push_str("[Function]"),
        Value::Number(n) => write_number(&mut buf, *n),
        Value::Null => buf.push_str("null"),
        Value::Object(_) => buf.push_str("[Object]"),
        Value::String(s) => complete = write_string(&mut buf, s, quotes),
        Value::Undefined => buf.push_str("undefined"),
        // Value kinds this subsystem has not learned about yet.
        _ => buf.push_str("UNKNOWN"),
    }
    Rendered {
        text: buf.into_string(),
        complete,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberKind {
    Fractional,
    Signed,
    Unsigned,
}

/// Integral iff truncating through a 32-bit signed conversion is lossless;
/// the sign then picks the rendering path.
fn classify_number(n: f64) -> NumberKind {
    if n - f64::from(n as i32) == 0.0 {
        if n < 0.0 {
            NumberKind::Signed
        } else {
            NumberKind::Unsigned
        }
    } else {
        NumberKind::Fractional
    }
}

fn write_number(buf: &mut BoundedBuf, n: f64) {
    match classify_number(n) {
        NumberKind::Unsigned => {
            let _ = write!(buf, "{}", n as u32);
        }
        NumberKind::Signed => {
            let _ = write!(buf, "{}", n as i32);
        }
        NumberKind::Fractional => write_fractional(buf, n),
    }
}

#[cfg(feature = "float-display")]
fn write_fractional(buf: &mut BoundedBuf, n: f64) {
    let _ = write!(buf, "{n:.6}");
}

#[cfg(not(feature = "float-display"))]
fn write_fractional(buf: &mut BoundedBuf, n: f64) {
    let _ = write!(buf, "[Float ~{}]", n as i32);
}

/// Copy the string in, quoted on request; oversized strings abbreviate to
/// a length placeholder instead. Returns whether the text is complete.
fn write_string(buf: &mut BoundedBuf, s: &str, quotes: bool) -> bool {
    if s.len() > MAX_VALUE_LEN {
        let _ = write!(buf, "[String - length {}]", s.len());
        return false;
    }
    if quotes {
        let _ = write!(buf, "\"{s}\"");
    } else {
        buf.push_str(s);
    }
    true
}

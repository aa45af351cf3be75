use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use skald_console::{Console, SystemClock};
use skald_value::{Object, Value};

#[derive(Clone, Default)]
struct SharedSink(Rc<RefCell<Vec<u8>>>);

impl SharedSink {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured_console() -> (Console, SharedSink, SharedSink) {
    let out = SharedSink::default();
    let err = SharedSink::default();
    let console = Console::with_parts(
        Box::new(out.clone()),
        Box::new(err.clone()),
        Box::new(SystemClock::new()),
    );
    (console, out, err)
}

#[test]
fn test_log_without_arguments_writes_single_newline() {
    let (console, out, _err) = captured_console();
    console.log(&[]).ok();
    assert_eq!(out.contents(), "\n");
}

#[test]
fn test_log_space_joins_arguments() {
    let (console, out, _err) = captured_console();
    let args = [Value::from(1.0), Value::from("a"), Value::from(true)];
    console.log(&args).ok();
    assert_eq!(out.contents(), "1 a true\n");
}

#[test]
fn test_log_renders_integer_extremes() {
    let (console, out, _err) = captured_console();
    let args = [
        Value::from(f64::from(i32::MIN)),
        Value::from(-1.0),
        Value::from(0.0),
        Value::from(f64::from(i32::MAX)),
    ];
    console.log(&args).ok();
    assert_eq!(out.contents(), "-2147483648 -1 0 2147483647\n");
}

#[test]
fn test_log_renders_every_scalar_kind() {
    let (console, out, _err) = captured_console();
    let func = Value::Function(skald_value::NativeFunction::new("f", |_| {
        Ok(Value::Undefined)
    }));
    let args = [
        Value::Undefined,
        Value::Null,
        Value::Object(Object::new()),
        func,
    ];
    console.log(&args).ok();
    assert_eq!(out.contents(), "undefined null [Object] [Function]\n");
}

#[test]
fn test_top_level_strings_are_unquoted() {
    let (console, out, _err) = captured_console();
    console.log(&[Value::from("plain text")]).ok();
    assert_eq!(out.contents(), "plain text\n");
}

#[test]
fn test_array_of_scalars_joins_elements() {
    let (console, out, _err) = captured_console();
    let array = Value::from(vec![
        Value::from(true),
        Value::from(2.0),
        Value::from("three"),
    ]);
    console.log(&[array]).ok();
    assert_eq!(out.contents(), "[true, 2, \"three\"]\n");
}

#[test]
fn test_nested_array_stays_abbreviated() {
    let (console, out, _err) = captured_console();
    let inner = Value::from(vec![Value::from(1.0), Value::from(2.0)]);
    let outer = Value::from(vec![inner, Value::from(9.0)]);
    console.log(&[outer]).ok();
    assert_eq!(out.contents(), "[[Array - length 2], 9]\n");
}

#[test]
fn test_oversized_string_prints_placeholder() {
    let (console, out, _err) = captured_console();
    let s = "z".repeat(512);
    console.log(&[Value::from(s)]).ok();
    assert_eq!(out.contents(), "[String - length 512]\n");
}

#[test]
fn test_error_writes_to_error_sink_only() {
    let (console, out, err) = captured_console();
    console.error(&[Value::from("bad")]).ok();
    assert_eq!(err.contents(), "bad\n");
    assert_eq!(out.contents(), "");
}

#[test]
fn test_install_registers_all_entry_points() {
    let (console, _out, _err) = captured_console();
    let global = Object::new();
    Console::install(&Rc::new(console), &global);

    let namespace = global.get("console");
    let namespace = namespace.as_object().cloned();
    assert!(namespace.is_some());

    if let Some(ns) = namespace {
        for name in ["log", "info", "error", "warn", "time", "timeEnd", "assert"] {
            assert!(ns.get(name).is_function(), "missing entry point {name}");
        }
    }
}

#[test]
fn test_installed_log_prints_through_global() {
    let (console, out, _err) = captured_console();
    let global = Object::new();
    Console::install(&Rc::new(console), &global);

    let namespace = global.get("console");
    let result = namespace
        .as_object()
        .map(|ns| ns.get("log"))
        .and_then(|entry| entry.as_function().cloned())
        .map(|log| log.call(&[Value::from("hi"), Value::from(5.0)]));

    assert_eq!(result.and_then(Result::ok), Some(Value::Undefined));
    assert_eq!(out.contents(), "hi 5\n");
}

#[test]
fn test_installed_warn_aliases_error_sink() {
    let (console, out, err) = captured_console();
    let global = Object::new();
    Console::install(&Rc::new(console), &global);

    let namespace = global.get("console");
    let called = namespace
        .as_object()
        .map(|ns| ns.get("warn"))
        .and_then(|entry| entry.as_function().cloned())
        .map(|warn| warn.call(&[Value::from("careful")]));

    assert!(matches!(called, Some(Ok(Value::Undefined))));
    assert_eq!(err.contents(), "careful\n");
    assert_eq!(out.contents(), "");
}

#[test]
fn test_installed_time_reports_type_error_value() {
    let (console, _out, _err) = captured_console();
    let global = Object::new();
    Console::install(&Rc::new(console), &global);

    let namespace = global.get("console");
    let result = namespace
        .as_object()
        .map(|ns| ns.get("time"))
        .and_then(|entry| entry.as_function().cloned())
        .map(|time| time.call(&[]));

    match result {
        Some(Err(engine_err)) => {
            assert_eq!(engine_err.name, "TypeError");
            assert_eq!(engine_err.message, "invalid argument");
        }
        other => panic!("expected a TypeError value, got {other:?}"),
    }
}

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use log::{debug, trace};
use skald_value::{Object, Value};

use crate::clock::{MonotonicClock, SystemClock};
use crate::error::ConsoleError;
use crate::format::format_value;
use crate::printer::print_args;

/// Output sink selector for the print dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Standard,
    Error,
}

const ASSERT_DEFAULT_MESSAGE: &str = "console.assert";

/// The console subsystem of one runtime instance.
///
/// Owns the timer registry, the uptime clock, and the two output sinks.
/// All operations are synchronous; the timer registry is the only state
/// that persists across calls, and it lives exactly as long as the
/// `Console`. Shared through `Rc`, so the whole subsystem is confined to
/// one thread by the type system.
pub struct Console {
    timers: Object,
    clock: Box<dyn MonotonicClock>,
    out: RefCell<Box<dyn Write>>,
    err: RefCell<Box<dyn Write>>,
}

impl Console {
    /// Console over stdout/stderr with a process-start clock.
    pub fn new() -> Self {
        Self::with_parts(
            Box::new(io::stdout()),
            Box::new(io::stderr()),
            Box::new(SystemClock::new()),
        )
    }

    /// Console with injected sinks and clock.
    pub fn with_parts(
        out: Box<dyn Write>,
        err: Box<dyn Write>,
        clock: Box<dyn MonotonicClock>,
    ) -> Self {
        Self {
            timers: Object::new(),
            clock,
            out: RefCell::new(out),
            err: RefCell::new(err),
        }
    }

    /// Print to the selected sink: arguments space-joined, each rendered
    /// unquoted with deep expansion, newline-terminated.
    pub fn print(&self, channel: Channel, args: &[Value]) -> Result<(), ConsoleError> {
        let mut sink = match channel {
            Channel::Standard => self.out.borrow_mut(),
            Channel::Error => self.err.borrow_mut(),
        };
        print_args(sink.as_mut(), args)?;
        Ok(())
    }

    /// `console.log` / `console.info`.
    pub fn log(&self, args: &[Value]) -> Result<(), ConsoleError> {
        self.print(Channel::Standard, args)
    }

    /// `console.error` / `console.warn`.
    pub fn error(&self, args: &[Value]) -> Result<(), ConsoleError> {
        self.print(Channel::Error, args)
    }

    /// `console.time`: start (or restart) the named timer.
    pub fn time(&self, args: &[Value]) -> Result<(), ConsoleError> {
        let label = require_string_label(args)?;
        let Some(key) = label.as_str() else {
            return Err(ConsoleError::InvalidArgument);
        };
        let start = self.clock.uptime_ms();
        self.timers.set(key, Value::Number(f64::from(start)));
        trace!("timer {key:?} started at {start}ms");
        Ok(())
    }

    /// `console.timeEnd`: stop the named timer, drop it from the registry,
    /// and print `<label>: <elapsed>ms` to the standard sink.
    pub fn time_end(&self, args: &[Value]) -> Result<(), ConsoleError> {
        let label = require_string_label(args)?;
        let Some(key) = label.as_str() else {
            return Err(ConsoleError::InvalidArgument);
        };

        let recorded = self.timers.get(key);
        self.timers.delete(key);

        // A missing label reads back as Undefined and fails the same
        // number check a stale entry would; there is no separate
        // "not found" path.
        let Some(start) = recorded.as_number() else {
            return Err(ConsoleError::UnexpectedValue);
        };
        let elapsed = self.clock.uptime_ms().wrapping_sub(start as u32);
        trace!("timer {key:?} stopped after {elapsed}ms");

        let text = label.as_str().unwrap_or("unknown");
        writeln!(self.out.borrow_mut(), "{text}: {elapsed}ms")?;
        Ok(())
    }

    /// `console.assert`: a false condition raises `AssertionError` with
    /// either the shallow rendering of the second argument or the default
    /// message.
    pub fn assert(&self, args: &[Value]) -> Result<(), ConsoleError> {
        let Some(condition) = args.first().and_then(Value::as_boolean) else {
            return Err(ConsoleError::InvalidArgument);
        };
        if condition {
            return Ok(());
        }
        let message = match args.get(1) {
            Some(detail) => format_value(detail, false).text,
            None => ASSERT_DEFAULT_MESSAGE.to_string(),
        };
        Err(ConsoleError::Assertion { message })
    }

    /// Install the console namespace on a global scope.
    ///
    /// Registers `log`, `info`, `error`, `warn`, `time`, `timeEnd`, and
    /// `assert` as native callables on a fresh namespace object, then sets
    /// it as the `console` property of `global`. Entry points hold the
    /// console through the shared handle.
    pub fn install(console: &Rc<Console>, global: &Object) {
        let namespace = Object::new();

        let c = Rc::clone(console);
        namespace.add_function("log", move |args| dispatch(c.log(args)));
        let c = Rc::clone(console);
        namespace.add_function("info", move |args| dispatch(c.log(args)));
        let c = Rc::clone(console);
        namespace.add_function("error", move |args| dispatch(c.error(args)));
        let c = Rc::clone(console);
        namespace.add_function("warn", move |args| dispatch(c.error(args)));
        let c = Rc::clone(console);
        namespace.add_function("time", move |args| dispatch(c.time(args)));
        let c = Rc::clone(console);
        namespace.add_function("timeEnd", move |args| dispatch(c.time_end(args)));
        let c = Rc::clone(console);
        namespace.add_function("assert", move |args| dispatch(c.assert(args)));

        global.set("console", Value::Object(namespace));
        debug!("console installed on global scope");
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        trace!("console dropped; timer registry released");
    }
}

/// Successful entry points acknowledge with Undefined; failures cross the
/// boundary as engine error values.
fn dispatch(result: Result<(), ConsoleError>) -> Result<Value, skald_value::EngineError> {
    result.map(|()| Value::Undefined).map_err(Into::into)
}

/// Timer entry points require a string label as the first argument.
fn require_string_label(args: &[Value]) -> Result<&Value, ConsoleError> {
    match args.first() {
        Some(label) if label.is_string() => Ok(label),
        _ => Err(ConsoleError::InvalidArgument),
    }
}

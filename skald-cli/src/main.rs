use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use log::info;
use skald_console::Console;
use skald_value::{Object, Value};

#[derive(Parser)]
#[command(name = "skald")]
#[command(version = "0.1.0")]
#[command(about = "Skald console subsystem harness", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the console on a fresh global scope and drive every entry point
    Demo,

    /// Start a named timer, wait, then stop it
    Timer {
        /// Timer label
        #[arg(value_name = "LABEL", default_value = "demo")]
        label: String,

        /// Milliseconds to wait between start and stop
        #[arg(short, long, value_name = "MS", default_value = "250")]
        wait: u64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => run_demo(),
        Commands::Timer { label, wait } => run_timer(&label, wait),
    }
}

/// Drive the installed entry points the way an embedding host would.
fn run_demo() -> Result<()> {
    let global = Object::new();
    Console::install(&Rc::new(Console::new()), &global);
    info!("console installed on a fresh global scope");

    let namespace = global.get("console");
    let namespace = namespace
        .as_object()
        .ok_or_else(|| anyhow!("console namespace missing from global scope"))?;

    call(namespace, "log", &[Value::from("hello from skald"), Value::from(42.0)])?;
    call(
        namespace,
        "info",
        &[Value::from(vec![
            Value::from(true),
            Value::from("quoted"),
            Value::from(vec![Value::Null]),
        ])],
    )?;
    call(namespace, "warn", &[Value::from("this goes to stderr")])?;
    call(namespace, "error", &[Value::Null, Value::Undefined])?;

    call(namespace, "time", &[Value::from("block")])?;
    thread::sleep(Duration::from_millis(20));
    call(namespace, "timeEnd", &[Value::from("block")])?;

    call(namespace, "assert", &[Value::from(true)])?;
    if let Err(err) = call(
        namespace,
        "assert",
        &[Value::from(false), Value::from("deliberate failure")],
    ) {
        println!("assert raised: {err}");
    }

    Ok(())
}

/// Real-clock timer round trip.
fn run_timer(label: &str, wait: u64) -> Result<()> {
    let console = Console::new();
    console.time(&[Value::from(label)])?;
    thread::sleep(Duration::from_millis(wait));
    console.time_end(&[Value::from(label)])?;
    Ok(())
}

fn call(namespace: &Object, name: &str, args: &[Value]) -> Result<Value> {
    let entry = namespace.get(name);
    let f = entry
        .as_function()
        .ok_or_else(|| anyhow!("entry point `{name}` is not installed"))?;
    Ok(f.call(args)?)
}

// src/bin/shellkit.rs

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use shellkit::system::settings::load_settings;
use shellkit::{ArgList, CommandResult, SessionOptions, Shell, ShellError, StdConsole};

const BANNER: &str = "shellkit demo - a small interactive shell.\n\
Type 'help' to list commands; 'submenu' enters a nested session.";

const PRINTARGS_HELP: &str = "Prints every argument it receives, one per line. \
Quote an argument to keep spaces inside it. This help string is long on \
purpose, so that the word-wrapping of the 'help' command has something to do.";

/// shellkit: a demo shell for the shellkit engine.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Prompt for the top-level session.
    #[arg(long, default_value = "demo> ")]
    prompt: String,

    /// Path to a TOML settings file; created with defaults if missing.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Do not print the banner on startup.
    #[arg(long)]
    no_banner: bool,
}

/// Sets up logging, builds the shell, and performs centralized error
/// handling around the command loop.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("\n{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    let settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => Default::default(),
    };
    log::debug!("effective settings: {settings:?}");

    let mut shell = Shell::with_settings(Box::new(StdConsole), settings);
    shell.start_session(SessionOptions {
        prompt: Some(cli.prompt),
        banner: (!cli.no_banner).then(|| BANNER.to_string()),
        ..SessionOptions::default()
    })?;

    shell.register("hello", None, Rc::new(do_hello))?;
    shell.register("printargs", Some(PRINTARGS_HELP), Rc::new(do_printargs))?;
    shell.register(
        "greet",
        Some("Greets the person named by the single argument."),
        Rc::new(do_greet),
    )?;
    shell.register(
        "submenu",
        Some("Enter a nested session with its own commands."),
        Rc::new(do_submenu),
    )?;

    shell.run()?;
    Ok(())
}

fn do_hello(shell: &mut Shell, _args: Option<&ArgList>) -> CommandResult {
    shell.write_line("Hello, world!");
    Ok(())
}

fn do_printargs(shell: &mut Shell, args: Option<&ArgList>) -> CommandResult {
    let Some(args) = args else {
        shell.write_line("No arguments provided!");
        return Ok(());
    };

    shell.write_line(&format!("Total arguments = {}", args.count()));
    for (index, arg) in args.iter().enumerate() {
        shell.write_line(&format!("Argument {index}: '{arg}'"));
    }
    Ok(())
}

fn do_greet(shell: &mut Shell, args: Option<&ArgList>) -> CommandResult {
    let name = args
        .filter(|list| list.count() == 1)
        .and_then(|list| list.get(0))
        .ok_or_else(|| {
            ShellError::ArgumentError("'greet' expects exactly one name".to_string())
        })?;
    let message = format!("Nice to meet you, {name}!");
    shell.write_line(&message);
    Ok(())
}

fn do_submenu(shell: &mut Shell, _args: Option<&ArgList>) -> CommandResult {
    shell.enter(
        SessionOptions {
            prompt: Some("demo/submenu> ".to_string()),
            banner: Some("This is a submenu! 'exit' returns to the parent shell.".to_string()),
            ..SessionOptions::default()
        },
        |sub| {
            sub.register("ping", Some("Answers with pong."), Rc::new(do_ping))?;
            sub.register("hello", None, Rc::new(do_hello))
        },
    )
}

fn do_ping(shell: &mut Shell, _args: Option<&ArgList>) -> CommandResult {
    shell.write_line("pong");
    Ok(())
}

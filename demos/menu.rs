//! Small interactive demo of the menu.
//!
//! Logs go to stderr; set `RUST_LOG=action_menu=debug` to see them.

use std::cell::Cell;
use std::rc::Rc;

use action_menu::{Action, Menu, MenuConfig, MenuError};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "menu", about = "Pick actions from an interactive menu")]
struct Cli {
    /// Disable ANSI colors.
    #[arg(long)]
    plain: bool,

    /// Select a single action and exit.
    #[arg(long)]
    once: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut menu = Menu::with_config(MenuConfig {
        ansi_enabled: !cli.plain,
        ..Default::default()
    });

    let counter = Rc::new(Cell::new(0u32));
    let inc = Rc::clone(&counter);
    let show = Rc::clone(&counter);

    menu.add("hello", "Print a greeting", || println!("Hello, world!"))?;
    menu.add("inc", "Increment the counter", move || inc.set(inc.get() + 1))?;
    menu.add("show", "Print the counter", move || println!("counter = {}", show.get()))?;
    menu.add_action(Action::noop("quit", "Leave the demo"))?;

    loop {
        let action = match menu.ask_user() {
            Ok(action) => action,
            Err(MenuError::InputClosed) => break,
            Err(err) => return Err(err).context("reading choice"),
        };
        if action.name() == "quit" {
            break;
        }
        action.execute();
        if cli.once {
            break;
        }
    }

    println!("Bye (counter = {})", counter.get());
    Ok(())
}

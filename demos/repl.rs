//! Interactive Keypad REPL
//!
//! A stdin stand-in for the calculator's button pad. Each line is a keypad
//! script: keycap tokens (`+`, `=`, `AC`, `+/-`, `%`, `÷` or `/`, `×` or
//! `*`) and number literals, separated by whitespace. The display string
//! prints after every line.
//!
//! Run with: cargo run --example repl
//! Set RUST_LOG=calcbrain=debug to watch every transition.

use std::io::{self, BufRead, Write};

use calcbrain::Session;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("calcbrain repl - type key scripts like '2 + 3 =', AC clears, Ctrl-D quits");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new();

    loop {
        print!("[{}] > ", session.output());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        match session.script(&line) {
            Ok(state) => println!("{}", state.output()),
            Err(err) => println!("? {err}"),
        }
    }

    Ok(())
}

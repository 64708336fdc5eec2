//! Keypad Walkthrough
//!
//! This example drives the evaluation core through the classic calculator
//! scenarios: chained operators, exact decimal addition, the percent and
//! sign-flip transforms, and recovery from division by zero.
//!
//! Key concepts:
//! - Pure transitions: each press replaces the state wholesale
//! - The error state is sticky until AC
//! - Display formatting trims trailing zeros and never uses binary floats
//!
//! Run with: cargo run --example keypad_walkthrough
//! Set RUST_LOG=calcbrain=debug to watch every transition.

use calcbrain::Session;
use tracing_subscriber::EnvFilter;

fn show(session: &mut Session, script: &str) {
    session.reset();
    session
        .script(script)
        .expect("walkthrough scripts are well-formed");
    println!("{script:24} => {}", session.output());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Walkthrough ===\n");

    let mut session = Session::new();

    println!("-- Chaining --");
    show(&mut session, "2 + 3 + 4 =");
    show(&mut session, "2 + 3 × 4 =");
    show(&mut session, "10 - 4 ÷ 2 =");

    println!("\n-- Exact decimals --");
    show(&mut session, "0.1 + 0.2 =");
    show(&mut session, "10 ÷ 3 =");

    println!("\n-- Transforms --");
    show(&mut session, "50 %");
    show(&mut session, "200 + 10 % =");
    show(&mut session, "5 +/-");
    show(&mut session, "5 + 3 +/- =");

    println!("\n-- Error and recovery --");
    show(&mut session, "1 ÷ 0 =");
    show(&mut session, "1 ÷ 0 = 5 + 5 =");
    show(&mut session, "1 ÷ 0 = AC 5 + 5 =");

    println!("\n=== Walkthrough Complete ===");
}

//! Keypad Session
//!
//! This example plays the role of the UI layer: it forwards text changes
//! and key presses into a calculator and renders the snapshot after each
//! event.
//!
//! Key concepts:
//! - Keystrokes that are not partial or complete numbers are discarded
//! - Operator keys pass through to the text field until the input is complete
//! - Chaining is strictly left to right
//!
//! Run with: RUST_LOG=tally=trace cargo run --example keypad_session

use tally::builder::Key;
use tally::{Calculator, KeyOutcome};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Feed one key into the calculator the way a text field would.
fn press(calc: &mut Calculator, key: Key) {
    let outcome = calc.handle_key(key);

    if let (KeyOutcome::PassThrough, Key::Char(c)) = (outcome, key) {
        let mut text = calc.input_text().to_string();
        text.push(c);
        let step = calc.update_input(&text);
        if step.is_ignored() {
            println!("  {:?} ignored: {}", c, step.rejections()[0]);
        }
    }

    let snapshot = calc.snapshot();
    println!(
        "  {:<7} -> input {:<12} state {:<8} pending {:?}",
        key.to_string(),
        format!("{:?}", snapshot.input_text),
        snapshot.state,
        snapshot
            .pending
            .map(|p| format!("{} {}", p.value, p.operator)),
    );
}

fn session(title: &str, keys: &str) {
    println!("{title}: {keys}");
    let mut calc = Calculator::new();
    for c in keys.chars() {
        let key = if c == '\n' { Key::Enter } else { Key::Char(c) };
        press(&mut calc, key);
    }
    println!("  result: {}\n", calc.input_text());
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Session Example ===\n");

    session("Left-to-right chaining", "3+4*2=");
    session("Signed operands and exponents", "-1.5e2/-3\n");
    session("Comma decimal separator", "2,5*4=");
    session("Rejected keystrokes", "5-=7.x.2=");
    session("Division by zero", "5/0=");

    println!("=== Example Complete ===");
}

//! Runway tour: walks through the basic sequence scenarios.
//!
//! Demonstrates:
//!   1. Appending to an empty sequence
//!   2. Appending after default-initialised elements
//!   3. Building a sequence from literal values
//!   4. Re-slicing into a shared view
//!   5. A jagged two-dimensional table
//!   6. Headroom: length 2, capacity 3, append in place, then double
//!
//! Reallocations are logged at TRACE level. Run with:
//!   RUST_LOG=runway_buffer=trace cargo run -p runway --example slices

use runway::prelude::*;
use tracing_subscriber::EnvFilter;

const RULE: &str = "-------------------------";

fn main() -> Result<(), SequenceError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ─── 1. Empty sequence, then append ─────────────────────────
    let mut words: GrowableSequence<String> = GrowableSequence::with_len(0);
    println!("words: {words} (len {}, cap {})", words.len(), words.capacity());
    for w in ["abacus", "charlie", "zeta"] {
        words.append(w.to_string());
    }
    println!("words: {words} (len {}, cap {})", words.len(), words.capacity());
    println!("{RULE}");

    // ─── 2. Three defaults, then append ─────────────────────────
    let mut counted: GrowableSequence<String> = GrowableSequence::with_len(3);
    println!("counted: {counted:?}");
    let before = counted.storage_id();
    counted.extend(["uno", "dos", "tres"].map(String::from));
    println!(
        "counted: {counted} (len {}, cap {}, storage {before} -> {})",
        counted.len(),
        counted.capacity(),
        counted.storage_id()
    );
    tracing::debug!(
        reallocations = counted.growth_stats().reallocations,
        copied = counted.growth_stats().copied_elements,
        "counted sequence growth"
    );
    println!("{RULE}");

    // ─── 3. Literal values ──────────────────────────────────────
    let numbers = GrowableSequence::from_values(vec![1, 2, 3, 4, 5]);
    println!("numbers: {numbers}");
    println!("{RULE}");

    // ─── 4. Re-slicing shares storage ───────────────────────────
    let mut middle = numbers.slice(1, 3)?;
    println!("numbers[1:3]: {middle} (cap {})", middle.capacity());
    middle.set(0, 20)?;
    println!(
        "after middle[0] = 20: numbers = {numbers}, same slot: {}",
        middle.address_of(0)? == numbers.address_of(1)?
    );
    println!("{RULE}");

    // ─── 5. Jagged table ────────────────────────────────────────
    let table = JaggedTable::triangular(3, |i, j| i + j);
    println!("2d: {table}");
    println!("{RULE}");

    // ─── 6. Headroom, then doubling ─────────────────────────────
    let mut cast: GrowableSequence<String> = GrowableSequence::with_len_and_capacity(2, 3)?;
    println!("cast: {cast} (len {}, growth {:?})", cast.len(), cast.growth_policy());
    cast.set(0, "rick".to_string())?;
    cast.set(1, "morty".to_string())?;
    // Slot 2 is allocated but not yet part of the sequence.
    if let Err(err) = cast.set(2, "summer".to_string()) {
        println!("cast[2] = \"summer\": {err}");
    }
    println!(
        "cast capacity: {}, len: {}, cast[0] at {}",
        cast.capacity(),
        cast.len(),
        cast.address_of(0)?
    );

    cast.append("summer".to_string());
    println!(
        "cast capacity: {}, len: {}, cast[0] at {}",
        cast.capacity(),
        cast.len(),
        cast.address_of(0)?
    );

    cast.append("new_element".to_string());
    println!(
        "cast capacity: {} (doubled), len: {}, cast[0] at {} (moved)",
        cast.capacity(),
        cast.len(),
        cast.address_of(0)?
    );

    Ok(())
}

//! Binary entry point: run the round-trip once.
//!
//! Allocation failure is reported on stdout and the process still
//! exits with the success status.

fn main() {
    if let Err(err) = skiff::round_trip() {
        println!("{err}");
    }
}

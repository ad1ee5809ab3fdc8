// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive teller.
//
// Module responsibilities:
// - `bank`: The in-memory account store — accounts, balances, the
//   deposit/withdraw rules — and the domain errors.
// - `ui`: Implements the terminal menu loop and prompt flows and
//   delegates every state change to `bank`.
//
// Keeping this separation makes it possible to script the menu loop in
// tests and would make it easy to put a different front end (for example
// a TUI) over the same store.
pub mod bank;
pub mod ui;

// Entrypoint for the teller CLI.
// - Keeps `main` small: create the account store and hand it to the UI loop.
// - Returns `anyhow::Result` so terminal failures surface as clean errors.

use teller_cli::{bank::Bank, ui};

fn main() -> anyhow::Result<()> {
    // The store lives for the whole session and is dropped on exit;
    // nothing is persisted.
    let mut bank = Bank::new();

    // Start the interactive menu. This call blocks until the user exits.
    ui::main_menu(&mut ui::Terminal, &mut bank)?;
    Ok(())
}

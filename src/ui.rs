// UI layer: provides a simple interactive menu using `dialoguer`.
// The functions are small and synchronous to make the flow easy to follow.
//
// Everything here talks to the terminal through the `Console` trait so the
// same loop can be driven from a scripted console in tests.

use crate::bank::{Account, Bank};
use anyhow::Result;
use console::style;
use dialoguer::Input;
use rust_decimal::Decimal;
use thiserror::Error;

/// The five menu entries, in the order they are numbered on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Deposit,
    Withdraw,
    List,
    Exit,
}

/// Rejected menu input: not an integer, or not one of the listed numbers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("menu choice must be one of the listed numbers")]
pub struct InvalidMenuChoice;

impl MenuChoice {
    /// Parse a raw input line into a menu choice. Surrounding whitespace
    /// is ignored; anything but an integer in 1..=5 is rejected.
    pub fn parse(entry: &str) -> Result<Self, InvalidMenuChoice> {
        match entry.trim().parse::<u8>() {
            Ok(1) => Ok(MenuChoice::Create),
            Ok(2) => Ok(MenuChoice::Deposit),
            Ok(3) => Ok(MenuChoice::Withdraw),
            Ok(4) => Ok(MenuChoice::List),
            Ok(5) => Ok(MenuChoice::Exit),
            _ => Err(InvalidMenuChoice),
        }
    }
}

/// The terminal surface the menu loop runs against. The binary uses the
/// `dialoguer`-backed [`Terminal`]; tests use a scripted console instead.
pub trait Console {
    /// Show `prompt` and block until a line of input is supplied. Empty
    /// input is allowed here; each flow decides whether to re-prompt.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Plain output line.
    fn info(&mut self, line: &str);

    /// Attention-drawing output line (rejections, lookup misses).
    fn warn(&mut self, line: &str);
}

/// Console backed by the real terminal.
pub struct Terminal;

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        // `Input::interact_text()` prompts the user and returns the line.
        let entry: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(entry)
    }

    fn info(&mut self, line: &str) {
        println!("{}", line);
    }

    fn warn(&mut self, line: &str) {
        println!("{}", style(line).red());
    }
}

const MENU: &str = "\
1. Create Account
2. Deposit Into Account
3. Withdraw From Account
4. Check Account Info
5. Exit";

/// Main interactive menu. Receives the account store and runs the menu
/// loop until the user chooses Exit. Each action returns control here;
/// bad input never ends the loop, only a failing terminal does.
pub fn main_menu<C: Console>(console: &mut C, bank: &mut Bank) -> Result<()> {
    loop {
        match read_choice(console)? {
            MenuChoice::Create => do_create(console, bank)?,
            MenuChoice::Deposit => do_deposit(console, bank)?,
            MenuChoice::Withdraw => do_withdraw(console, bank)?,
            MenuChoice::List => do_list(console, bank),
            MenuChoice::Exit => break,
        }
    }
    console.info("Done");
    Ok(())
}

/// Print the menu once, then read until the input parses as one of the
/// listed numbers.
fn read_choice<C: Console>(console: &mut C) -> Result<MenuChoice> {
    console.info(MENU);
    loop {
        let entry = console.read_line("Select an option")?;
        match MenuChoice::parse(&entry) {
            Ok(choice) => return Ok(choice),
            Err(_) => console.warn("Invalid Input, Try Again"),
        }
    }
}

/// Create flow: collects a non-empty name and a non-negative starting
/// balance, re-prompting until both are valid, then appends the account.
/// Names are not checked for uniqueness.
fn do_create<C: Console>(console: &mut C, bank: &mut Bank) -> Result<()> {
    let name = loop {
        let entry = console.read_line("Name for the new account")?;
        let entry = entry.trim();
        if !entry.is_empty() {
            break entry.to_string();
        }
    };

    let balance = loop {
        let entry = console.read_line(&format!("Starting balance for {}", name))?;
        match entry.trim().parse::<Decimal>() {
            Ok(amount) if amount >= Decimal::ZERO => break amount,
            _ => console.warn("Invalid Input. Please enter a non-negative number."),
        }
    };

    bank.add(Account::new(name, balance));
    Ok(())
}

/// Deposit flow: aborts quietly back to the menu when the account lookup
/// misses. The amount prompt only requires a parsable number; the account
/// itself rejects non-positive amounts.
fn do_deposit<C: Console>(console: &mut C, bank: &mut Bank) -> Result<()> {
    let account = match find_account(console, bank)? {
        Some(account) => account,
        None => return Ok(()),
    };

    let amount = read_amount(console, &format!("Deposit amount for {}", account.name()))?;
    if account.deposit(amount).is_err() {
        console.warn("Error: Failed to Deposit");
    }
    Ok(())
}

/// Withdraw flow: same shape as the deposit flow; overdraws and
/// non-positive amounts are rejected by the account, not the prompt.
fn do_withdraw<C: Console>(console: &mut C, bank: &mut Bank) -> Result<()> {
    let account = match find_account(console, bank)? {
        Some(account) => account,
        None => return Ok(()),
    };

    let amount = read_amount(console, &format!("Withdraw amount for {}", account.name()))?;
    if account.withdraw(amount).is_err() {
        console.warn("Error: Failed to Withdraw");
    }
    Ok(())
}

/// Print the header and every account in creation order.
fn do_list<C: Console>(console: &mut C, bank: &Bank) {
    console.info("Account Information");
    for account in bank.accounts() {
        console.info(&account.to_string());
    }
}

/// Ask for a name and look it up, reporting a miss to the user. `None`
/// means the calling flow should abort back to the menu.
fn find_account<'a, C: Console>(
    console: &mut C,
    bank: &'a mut Bank,
) -> Result<Option<&'a mut Account>> {
    let name = console.read_line("Account name")?;
    match bank.find(name.trim()) {
        Ok(account) => Ok(Some(account)),
        Err(_) => {
            console.warn("No Account Found");
            Ok(None)
        }
    }
}

/// Read until the input parses as a number. The value is not range
/// checked here.
fn read_amount<C: Console>(console: &mut C, prompt: &str) -> Result<Decimal> {
    loop {
        let entry = console.read_line(prompt)?;
        match entry.trim().parse::<Decimal>() {
            Ok(amount) => return Ok(amount),
            Err(_) => console.warn("Invalid Input. Please enter a number."),
        }
    }
}

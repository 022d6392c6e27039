//! Signup - Sample CLI for standout-prompt
//!
//! Walks through a small account-creation flow: name, age, optional email,
//! password and a final confirmation. Press Ctrl+C at any prompt to abort.
//!
//! Run with: cargo run --bin signup -- --default-age 30
//! Logs go to stderr; set RUST_LOG=debug to see the prompt lifecycle.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use standout_prompt::{CancelToken, PromptError, Prompter};
use tracing_subscriber::EnvFilter;

/// Create an account interactively.
#[derive(Parser, Debug)]
#[command(name = "signup", version)]
struct Cli {
    /// Age used when the answer is left empty
    #[arg(long, env = "SIGNUP_DEFAULT_AGE", default_value = "21")]
    default_age: String,

    /// Do not ask for an email address
    #[arg(long)]
    skip_email: bool,

    /// Minimum password length
    #[arg(long, env = "SIGNUP_MIN_PASSWORD", default_value_t = 8)]
    min_password: usize,
}

#[derive(Debug)]
struct Account {
    name: String,
    age: u32,
    email: Option<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn valid_name(name: &str) -> Result<(), String> {
    if name.trim().len() < 3 {
        return Err(format!("'{}' is too short", name));
    }
    Ok(())
}

fn valid_age(age: &str) -> Result<(), String> {
    match age.parse::<u32>() {
        Ok(n) if (1..=150).contains(&n) => Ok(()),
        _ => Err(format!("'{}' is not a valid age", age)),
    }
}

fn collect(cli: &Cli, cancel: &CancelToken) -> anyhow::Result<Option<Account>> {
    let mut prompter = Prompter::stdio();

    let name = prompter
        .validate_with(valid_name)
        .ask(cancel, "What is your name?")?;

    let age = prompter
        .with_default(cli.default_age.as_str())
        .validate_with(valid_age)
        .ask(cancel, &format!("What is your age? [{}]", cli.default_age))?;

    let email = if cli.skip_email {
        None
    } else {
        let email = prompter
            .optional(true)
            .validate(|s| s.contains('@'), "an email address needs an '@'")
            .ask(cancel, "Email (optional):")?;
        (!email.is_empty()).then_some(email)
    };

    let min = cli.min_password;
    let _password = prompter
        .validate_with(move |s: &str| {
            if s.len() < min {
                Err(format!("password must be at least {} characters", min))
            } else {
                Ok(())
            }
        })
        .password(cancel, "Choose a password:")?;

    if !prompter.confirm(cancel, "Create this account? (yes/no)")? {
        return Ok(None);
    }

    Ok(Some(Account {
        name,
        age: age.parse::<u32>().context("age was validated as a number")?,
        email,
    }))
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    tracing::debug!(?cli, "starting signup");

    let cancel = CancelToken::new();
    if let Err(e) = cancel.cancel_on_interrupt() {
        tracing::warn!(error = %e, "Ctrl+C will not cancel prompts");
    }

    match collect(&cli, &cancel) {
        Ok(Some(account)) => {
            println!("Created account for {} ({})", account.name, account.age);
            if let Some(email) = account.email {
                println!("Confirmation sent to {}", email);
            }
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("Nothing created.");
            ExitCode::SUCCESS
        }
        Err(e) => match e.downcast_ref::<PromptError>() {
            Some(PromptError::Cancelled) => {
                eprintln!("\nCancelled.");
                ExitCode::from(130)
            }
            Some(PromptError::Required) => {
                eprintln!("\nInput ended before all questions were answered.");
                ExitCode::FAILURE
            }
            _ => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}

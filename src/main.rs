use clap::{ArgGroup, Parser};
use pepperbox::auth;
use pepperbox::cli::{
    delete_account, generate_account, list_accounts, reset_account, retrieve_account,
    AccountView, LIST_SENTINEL,
};
use pepperbox::error::Result;
use pepperbox::store::PasswordStore;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pepperbox")]
#[command(author, version, about = "Creates and retrieves pepper-based passwords", long_about = None)]
#[command(group = ArgGroup::new("action").args(["generate", "retrieve", "forgot", "delete"]))]
struct Cli {
    /// The account to generate/retrieve a password for, or '*' to list accounts
    account_name: String,

    /// Generate and store a new password for the given account
    #[arg(short, long)]
    generate: bool,

    /// Retrieve the generated portion or 'pepper' of the password
    #[arg(short, long)]
    retrieve: bool,

    /// Replace a forgotten password with a freshly derived one
    #[arg(short, long)]
    forgot: bool,

    /// Delete the record for the given account
    #[arg(short, long)]
    delete: bool,

    /// With '*', list only accounts starting with the given prefix
    #[arg(long, default_value = "")]
    startswith: String,

    /// Path to the password database
    #[arg(long, default_value = "passwords.db")]
    db: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    pepperbox::env::load_dotenv()?;

    // The gate runs before any operation, list included.
    let password = prompt_master_password()?;
    let session = auth::login(password)?;

    let store = PasswordStore::open(&cli.db)?;

    if cli.account_name == LIST_SENTINEL {
        let prefix = (!cli.startswith.is_empty()).then_some(cli.startswith.as_str());
        for name in list_accounts(&store, prefix)? {
            println!("{}", name);
        }
        return Ok(());
    }

    let hints = pepperbox::env::stem_hints();
    let mut rng = rand::thread_rng();

    if cli.generate {
        let view = generate_account(&store, &session, &cli.account_name, &hints, &mut rng)?;
        print_view(&view);
    } else if cli.forgot {
        if confirm("Would you like to generate a new password? y/n")? {
            reset_account(&store, &session, &cli.account_name, &hints, &mut rng)?;
            println!("Updated. Retrieve the account to see the new password.");
        } else {
            println!("Input not 'y'. Exiting.");
        }
    } else if cli.delete {
        delete_account(&store, &cli.account_name)?;
        println!("Deleted account '{}' from database.", cli.account_name);
    } else {
        // Default action for a concrete account name is retrieve.
        let view = retrieve_account(&store, &cli.account_name)?;
        print_view(&view);
    }

    Ok(())
}

fn print_view(view: &AccountView) {
    println!(
        "{} {} {}",
        view.account_name,
        view.tail,
        view.stem_hint.as_deref().unwrap_or("")
    );
}

/// Prompt without echo on a terminal; read a plain line when stdin is piped
/// so the binary stays scriptable and testable.
fn prompt_master_password() -> Result<String> {
    if io::stdin().is_terminal() {
        Ok(rpassword::prompt_password("Enter your master password: ")?)
    } else {
        Ok(read_stdin_line()?)
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    println!("{}", prompt);
    io::stdout().flush()?;
    Ok(read_stdin_line()? == "y")
}

fn read_stdin_line() -> std::io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

use std::{num::NonZeroUsize, path::PathBuf};

mod add;
mod clear;
mod delete;
mod edit;
mod find;
mod find_mod;
mod init;
mod list;
mod terminal;

use add::Add;
use clap::ArgAction;
use clear::Clear;
use contacts::{AddressBook, Email, Field, Housing, Link, Major, Phone, Store, Year};
use delete::Delete;
use edit::Edit;
use find::Find;
use find_mod::FindMod;
use init::Init;
use list::List;

/// Parse a field value, reporting the field's constraint message on failure.
fn parse_field<F: Field>(s: &str) -> Result<F, String> {
    F::parse(s).map_err(|e| e.to_string())
}

/// Parse a 1-based record index as shown by `list`.
fn parse_index(s: &str) -> Result<NonZeroUsize, String> {
    s.trim()
        .parse()
        .map_err(|_| "Index is not a non-zero unsigned integer.".to_string())
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global=true)]
    verbose: u8,

    /// The directory holding the contact book
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or(Command::List(List {}))
            .run(self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Initialize a new contact book
    Init(Init),

    /// Add a person
    Add(Add),

    /// Edit the person at the given index
    ///
    /// Only the given fields change. Tags given here replace the existing
    /// tags.
    Edit(Edit),

    /// Delete the person at the given index
    Delete(Delete),

    /// List every person (default)
    List(List),

    /// Find persons whose name contains any of the keywords
    Find(Find),

    /// Find persons taking any of the given modules
    ///
    /// Modules are read from each person's NUSMods timetable link and matched
    /// ignoring case.
    FindMod(FindMod),

    /// Remove every person
    Clear(Clear),
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Init(command) => command.run(&root)?,
            Self::Add(command) => command.run(root)?,
            Self::Edit(command) => command.run(root)?,
            Self::Delete(command) => command.run(root)?,
            Self::List(command) => command.run(root)?,
            Self::Find(command) => command.run(root)?,
            Self::FindMod(command) => command.run(root)?,
            Self::Clear(command) => command.run(root)?,
        }
        Ok(())
    }
}

/// Optional contact details shared by `add` and `edit`.
#[derive(Debug, Default, clap::Args)]
pub struct Details {
    /// Phone number, at least 3 digits
    #[arg(long, short, value_parser = parse_field::<Phone>)]
    phone: Option<Phone>,

    /// Email address
    #[arg(long, short, value_parser = parse_field::<Email>)]
    email: Option<Email>,

    /// Year of study, from 1 to 6
    #[arg(long, short, value_parser = parse_field::<Year>)]
    year: Option<Year>,

    /// Major, e.g. "Computer Science"
    #[arg(long, short, value_parser = parse_field::<Major>)]
    major: Option<Major>,

    /// Where the person lives
    #[arg(long, value_parser = parse_field::<Housing>)]
    housing: Option<Housing>,

    /// NUSMods timetable sharing link
    #[arg(long, short, value_parser = parse_field::<Link>)]
    link: Option<Link>,
}

/// Loads the book, applies `change`, and saves the book if the change succeeds.
fn with_book<T>(
    root: PathBuf,
    change: impl FnOnce(&mut AddressBook) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    use anyhow::Context;

    let store = Store::new(root);
    let mut book = store
        .load()
        .with_context(|| format!("Failed to load {}", store.data_path().display()))?;
    let output = change(&mut book)?;
    store
        .save(&book)
        .with_context(|| format!("Failed to save {}", store.data_path().display()))?;
    Ok(output)
}

/// Loads the book for reading only.
fn load_book(root: PathBuf) -> anyhow::Result<AddressBook> {
    use anyhow::Context;

    let store = Store::new(root);
    store
        .load()
        .with_context(|| format!("Failed to load {}", store.data_path().display()))
}

/// Prints the filtered view, numbered by position in the full listing.
fn print_view(book: &AddressBook) {
    use terminal::Colorize;

    for person in book.filtered() {
        let number = book
            .persons()
            .iter()
            .position(|p| p.is_same_person(person))
            .map_or(0, |i| i + 1);
        println!("{} {person}", format!("{number}.").dim());
    }
}

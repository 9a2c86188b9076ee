use std::path::PathBuf;

use clap::Parser;
use contacts::{listed_overview, AddressBook, ModuleMatch};
use tracing::{debug, instrument};

use super::{load_book, print_view, terminal::Colorize};

/// Module codes are trimmed and must not be blank.
fn parse_module_code(s: &str) -> Result<String, String> {
    let code = s.trim();
    if code.is_empty() {
        Err("Module code must not be blank".to_string())
    } else {
        Ok(code.to_string())
    }
}

#[derive(Debug, Parser)]
pub struct FindMod {
    /// Module codes to look for, e.g. CS2103T
    #[arg(required = true, value_parser = parse_module_code)]
    module_codes: Vec<String>,
}

impl FindMod {
    #[instrument(level = "debug")]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut book = load_book(root)?;
        let message = self.apply(&mut book);
        println!("{}", message.info());
        print_view(&book);
        Ok(())
    }

    fn apply(self, book: &mut AddressBook) -> String {
        let predicate = ModuleMatch::new(self.module_codes);
        debug!("Filtering by {predicate}");
        book.set_filter(predicate);
        listed_overview(book.filtered_count())
    }
}

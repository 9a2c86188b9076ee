use std::path::PathBuf;

use clap::Parser;
use contacts::{listed_overview, AddressBook, NameMatch};
use tracing::{debug, instrument};

use super::{load_book, print_view, terminal::Colorize};

#[derive(Debug, Parser)]
pub struct Find {
    /// Words to look for in names, ignoring case
    #[arg(required = true)]
    keywords: Vec<String>,
}

impl Find {
    #[instrument(level = "debug")]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut book = load_book(root)?;
        let message = self.apply(&mut book);
        println!("{}", message.info());
        print_view(&book);
        Ok(())
    }

    fn apply(self, book: &mut AddressBook) -> String {
        let predicate = NameMatch::new(self.keywords);
        debug!("Filtering by {predicate}");
        book.set_filter(predicate);
        listed_overview(book.filtered_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::sample_book;

    #[test]
    fn finds_by_whole_name_word() {
        let mut book = sample_book();
        let command = Find::try_parse_from(["find", "meier"]).unwrap();
        assert_eq!(command.apply(&mut book), "2 persons listed!");
    }

    #[test]
    fn keyword_is_required() {
        assert!(Find::try_parse_from(["find"]).is_err());
    }
}

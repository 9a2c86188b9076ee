use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;
use contacts::AddressBook;
use tracing::instrument;

use super::{parse_index, terminal::Colorize, with_book};

#[derive(Debug, Parser)]
pub struct Delete {
    /// The index of the person, as shown by `list`
    #[arg(value_parser = parse_index)]
    index: NonZeroUsize,
}

impl Delete {
    #[instrument(level = "debug")]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let message = with_book(root, |book| self.apply(book))?;
        println!("{}", message.success());
        Ok(())
    }

    fn apply(&self, book: &mut AddressBook) -> anyhow::Result<String> {
        let removed = book.remove(self.index.get() - 1)?;
        Ok(format!("Deleted Person: {removed}"))
    }
}

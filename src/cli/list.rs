use std::path::PathBuf;

use clap::Parser;
use tracing::instrument;

use super::{load_book, print_view, terminal::Colorize};

#[derive(Debug, Parser)]
pub struct List {}

impl List {
    #[instrument(level = "debug")]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let book = load_book(root)?;
        println!("{}", "Listed all persons".info());
        print_view(&book);
        Ok(())
    }
}

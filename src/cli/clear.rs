use std::path::PathBuf;

use clap::Parser;
use tracing::instrument;

use super::{terminal::Colorize, with_book};

#[derive(Debug, Parser)]
pub struct Clear {}

impl Clear {
    #[instrument(level = "debug")]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        with_book(root, |book| {
            book.clear();
            Ok(())
        })?;
        println!("{}", "Address book has been cleared!".success());
        Ok(())
    }
}

use std::{collections::BTreeSet, num::NonZeroUsize, path::PathBuf};

use clap::Parser;
use contacts::{AddressBook, AddressBookError, Name, PersonEdit, Tag};
use tracing::instrument;

use super::{parse_field, parse_index, terminal::Colorize, with_book, Details};

#[derive(Debug, Parser)]
pub struct Edit {
    /// The index of the person, as shown by `list`
    #[arg(value_parser = parse_index)]
    index: NonZeroUsize,

    /// New name
    #[arg(long, short, value_parser = parse_field::<Name>)]
    name: Option<Name>,

    #[command(flatten)]
    details: Details,

    /// Replace the tags with these (repeatable)
    #[arg(long = "tag", short, value_parser = parse_field::<Tag>)]
    tags: Vec<Tag>,

    /// Remove every tag
    #[arg(long, conflicts_with = "tags")]
    clear_tags: bool,
}

impl Edit {
    #[instrument(level = "debug", skip(self), fields(index = %self.index))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let message = with_book(root, |book| self.apply(book))?;
        println!("{}", message.success());
        Ok(())
    }

    fn apply(self, book: &mut AddressBook) -> anyhow::Result<String> {
        let index = self.index.get() - 1;
        let Details {
            phone,
            email,
            year,
            major,
            housing,
            link,
        } = self.details;

        let tags = if self.clear_tags {
            Some(BTreeSet::new())
        } else if self.tags.is_empty() {
            None
        } else {
            Some(self.tags.into_iter().collect())
        };

        let edit = PersonEdit {
            name: self.name,
            phone,
            email,
            year,
            major,
            housing,
            link,
            tags,
        };
        if edit.is_empty() {
            anyhow::bail!("At least one field to edit must be provided.");
        }

        let edited = book
            .get(index)
            .ok_or(AddressBookError::IndexOutOfRange)?
            .edited(&edit);
        let message = format!("Edited Person: {edited}");
        book.replace(index, edited)?;
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::sample_book;

    fn parse(args: &[&str]) -> Edit {
        Edit::try_parse_from(std::iter::once("edit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn edits_only_given_fields() {
        let mut book = sample_book();
        let before = book.persons()[1].clone();

        let message = parse(&["2", "--phone", "91234567", "-t", "cca"])
            .apply(&mut book)
            .unwrap();

        let after = &book.persons()[1];
        assert_eq!(after.phone().unwrap().as_str(), "91234567");
        assert_eq!(after.link(), before.link());
        assert_eq!(after.tags().len(), 1);
        assert_eq!(message, format!("Edited Person: {after}"));
    }

    #[test]
    fn clear_tags_empties_the_tag_set() {
        let mut book = sample_book();
        parse(&["1", "-t", "friends"]).apply(&mut book).unwrap();
        parse(&["1", "--clear-tags"]).apply(&mut book).unwrap();
        assert!(book.persons()[0].tags().is_empty());
    }

    #[test]
    fn clear_tags_conflicts_with_tags() {
        assert!(Edit::try_parse_from(["edit", "1", "--clear-tags", "-t", "cca"]).is_err());
    }

    #[test]
    fn nothing_to_edit_is_an_error() {
        let error = parse(&["1"]).apply(&mut sample_book()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "At least one field to edit must be provided."
        );
    }

    #[test]
    fn index_past_end_is_an_error() {
        let error = parse(&["5", "--year", "2"])
            .apply(&mut sample_book())
            .unwrap_err();
        assert_eq!(error.to_string(), "The person index provided is invalid");
    }

    #[test]
    fn rename_onto_existing_person_is_rejected() {
        let mut book = sample_book();
        let error = parse(&["1", "--name", "Carl Kurz"])
            .apply(&mut book)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "This person already exists in the address book"
        );
        assert_eq!(book.persons()[0].name().as_str(), "Alice Pauline");
    }
}

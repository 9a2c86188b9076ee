use std::path::PathBuf;

use clap::Parser;
use contacts::{AddressBook, Name, Person, Tag};
use tracing::instrument;

use super::{parse_field, terminal::Colorize, with_book, Details};

#[derive(Debug, Parser)]
pub struct Add {
    /// The person's name
    #[arg(long, short, value_parser = parse_field::<Name>)]
    name: Name,

    #[command(flatten)]
    details: Details,

    /// A tag to attach (repeatable)
    #[arg(long = "tag", short, value_parser = parse_field::<Tag>)]
    tags: Vec<Tag>,
}

impl Add {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let message = with_book(root, |book| self.apply(book))?;
        println!("{}", message.success());
        Ok(())
    }

    fn apply(self, book: &mut AddressBook) -> anyhow::Result<String> {
        let Details {
            phone,
            email,
            year,
            major,
            housing,
            link,
        } = self.details;

        let person = Person::new(self.name)
            .with_phone(phone)
            .with_email(email)
            .with_year(year)
            .with_major(major)
            .with_housing(housing)
            .with_link(link)
            .with_tags(self.tags);

        let message = format!("New person added: {person}");
        book.add(person)?;
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::{sample_book, ALICE_LINK};

    fn parse(args: &[&str]) -> Add {
        Add::try_parse_from(std::iter::once("add").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn adds_person_with_every_field() {
        let mut book = AddressBook::default();
        let command = parse(&[
            "--name",
            "Amy Bee",
            "--phone",
            "85355255",
            "--email",
            "amy@gmail.com",
            "--year",
            "1",
            "--major",
            "Computer Science",
            "--housing",
            "PGPR",
            "--link",
            ALICE_LINK,
            "-t",
            "friends",
            "-t",
            "cca",
        ]);

        let message = command.apply(&mut book).unwrap();

        assert_eq!(book.len(), 1);
        let person = &book.persons()[0];
        assert_eq!(person.tags().len(), 2);
        assert_eq!(person.year().unwrap().value(), 1);
        assert_eq!(message, format!("New person added: {person}"));
    }

    #[test]
    fn name_alone_is_enough() {
        let mut book = AddressBook::default();
        parse(&["-n", "Amy Bee"]).apply(&mut book).unwrap();
        assert_eq!(book.persons()[0].to_string(), "Amy Bee");
    }

    #[test]
    fn name_is_required() {
        assert!(Add::try_parse_from(["add", "--phone", "85355255"]).is_err());
    }

    #[test]
    fn duplicate_is_rejected() {
        let mut book = sample_book();
        let error = parse(&["--name", "Alice Pauline"])
            .apply(&mut book)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "This person already exists in the address book"
        );
        assert_eq!(book.len(), 4);
    }

    #[test]
    fn invalid_link_is_rejected_by_parser() {
        let error = Add::try_parse_from([
            "add",
            "--name",
            "Amy Bee",
            "--link",
            "https://nusmods.com/timetable/sem-3/share?CS2101",
        ])
        .unwrap_err();
        assert!(error.to_string().contains("valid NUSMods timetable link"));
    }
}

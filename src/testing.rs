//! Shared fixtures for unit tests.

use crate::{Email, Housing, Link, Major, Person, Phone, Tag, Year};

pub const DEFAULT_NAME: &str = "Amy Bee";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "amy@gmail.com";
pub const DEFAULT_YEAR: &str = "1";
pub const DEFAULT_MAJOR: &str = "Computer Science";
pub const DEFAULT_HOUSING: &str = "123, Jurong West Ave 6, #08-111";
pub const DEFAULT_LINK: &str = "https://nusmods.com/timetable/sem-1/share?CS1010=TUT:06,LAB:E07";

/// Builds [`Person`] values from raw strings, panicking on invalid input.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: String,
    phone: Option<String>,
    email: Option<String>,
    year: Option<String>,
    major: Option<String>,
    housing: Option<String>,
    link: Option<String>,
    tags: Vec<String>,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            phone: Some(DEFAULT_PHONE.to_string()),
            email: Some(DEFAULT_EMAIL.to_string()),
            year: Some(DEFAULT_YEAR.to_string()),
            major: Some(DEFAULT_MAJOR.to_string()),
            housing: Some(DEFAULT_HOUSING.to_string()),
            link: Some(DEFAULT_LINK.to_string()),
            tags: Vec::new(),
        }
    }
}

impl PersonBuilder {
    /// A builder with only a name set.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: None,
            email: None,
            year: None,
            major: None,
            housing: None,
            link: None,
            tags: Vec::new(),
        }
    }

    pub fn phone(mut self, phone: Option<&str>) -> Self {
        self.phone = phone.map(String::from);
        self
    }

    pub fn email(mut self, email: Option<&str>) -> Self {
        self.email = email.map(String::from);
        self
    }

    pub fn year(mut self, year: Option<&str>) -> Self {
        self.year = year.map(String::from);
        self
    }

    pub fn major(mut self, major: Option<&str>) -> Self {
        self.major = major.map(String::from);
        self
    }

    pub fn housing(mut self, housing: Option<&str>) -> Self {
        self.housing = housing.map(String::from);
        self
    }

    pub fn link(mut self, link: Option<&str>) -> Self {
        self.link = link.map(String::from);
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|tag| (*tag).to_string()).collect();
        self
    }

    pub fn build(self) -> Person {
        Person::new(self.name.parse().unwrap())
            .with_phone(self.phone.map(|value| value.parse::<Phone>().unwrap()))
            .with_email(self.email.map(|value| value.parse::<Email>().unwrap()))
            .with_year(self.year.map(|value| value.parse::<Year>().unwrap()))
            .with_major(self.major.map(|value| value.parse::<Major>().unwrap()))
            .with_housing(self.housing.map(|value| value.parse::<Housing>().unwrap()))
            .with_link(self.link.map(|value| value.parse::<Link>().unwrap()))
            .with_tags(self.tags.iter().map(|tag| tag.parse::<Tag>().unwrap()))
    }
}

pub fn alice() -> Person {
    PersonBuilder::new("Alice Pauline")
        .phone(Some("94351253"))
        .email(Some("alice@example.com"))
        .year(Some("2"))
        .major(Some("Computer Science"))
        .housing(Some("123, Jurong West Ave 6, #08-111"))
        .link(Some(
            "https://nusmods.com/timetable/sem-2/share?CS2103T=LEC:G12&CS2101=&MA1521=LEC:1",
        ))
        .tags(&["friends"])
        .build()
}

pub fn benson() -> Person {
    PersonBuilder::new("Benson Meier")
        .phone(Some("98765432"))
        .email(Some("johnd@example.com"))
        .year(Some("3"))
        .major(Some("Business Analytics"))
        .housing(Some("311, Clementi Ave 2, #02-25"))
        .link(Some("https://nusmods.com/timetable/sem-2/share?BT2102=&CS2040=TUT:03"))
        .tags(&["owesMoney", "friends"])
        .build()
}

pub fn carl() -> Person {
    PersonBuilder::new("Carl Kurz")
        .phone(Some("95352563"))
        .email(Some("heinz@example.com"))
        .link(Some("https://nusmods.com/timetable/sem-2/share?cs2103t=&GEA1000="))
        .build()
}

pub fn daniel() -> Person {
    PersonBuilder::new("Daniel Meier")
        .phone(Some("87652533"))
        .email(Some("cornelia@example.com"))
        .tags(&["friends"])
        .build()
}

/// Alice, Benson, Carl and Daniel, in that order.
pub fn typical_persons() -> Vec<Person> {
    vec![alice(), benson(), carl(), daniel()]
}

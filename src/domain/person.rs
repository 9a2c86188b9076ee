use std::{collections::BTreeSet, fmt};

use crate::domain::{
    field::write_optional, Email, Housing, Link, Major, Name, Phone, Tag, Year,
};

/// A contact in the address book.
///
/// Only the name is mandatory. Every other field is independently optional,
/// and every present field has already been validated by its own type. Two
/// persons are equal if all of their fields, including tags, are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: Name,
    phone: Option<Phone>,
    email: Option<Email>,
    year: Option<Year>,
    major: Option<Major>,
    housing: Option<Housing>,
    link: Option<Link>,
    tags: BTreeSet<Tag>,
}

impl Person {
    /// Creates a person with the given name and no other details.
    #[must_use]
    pub const fn new(name: Name) -> Self {
        Self {
            name,
            phone: None,
            email: None,
            year: None,
            major: None,
            housing: None,
            link: None,
            tags: BTreeSet::new(),
        }
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<Option<Phone>>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<Option<Email>>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the year of study.
    #[must_use]
    pub fn with_year(mut self, year: impl Into<Option<Year>>) -> Self {
        self.year = year.into();
        self
    }

    /// Sets the major.
    #[must_use]
    pub fn with_major(mut self, major: impl Into<Option<Major>>) -> Self {
        self.major = major.into();
        self
    }

    /// Sets the housing.
    #[must_use]
    pub fn with_housing(mut self, housing: impl Into<Option<Housing>>) -> Self {
        self.housing = housing.into();
        self
    }

    /// Sets the timetable link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<Option<Link>>) -> Self {
        self.link = link.into();
        self
    }

    /// Sets the tags, replacing any existing tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// The contact's name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phone number, if known.
    #[must_use]
    pub const fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    /// The contact's email address, if known.
    #[must_use]
    pub const fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// The contact's year of study, if known.
    #[must_use]
    pub const fn year(&self) -> Option<Year> {
        self.year
    }

    /// The contact's major, if known.
    #[must_use]
    pub const fn major(&self) -> Option<&Major> {
        self.major.as_ref()
    }

    /// Where the contact lives, if known.
    #[must_use]
    pub const fn housing(&self) -> Option<&Housing> {
        self.housing.as_ref()
    }

    /// The contact's timetable link, if known.
    #[must_use]
    pub const fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    /// The tags on the contact.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Whether `other` refers to the same contact.
    ///
    /// This is a weaker notion than equality: two records with the same name
    /// are the same contact, whatever their other details.
    #[must_use]
    pub fn is_same_person(&self, other: &Self) -> bool {
        self.name == other.name
    }

    /// Returns a copy of this person with the edits applied.
    #[must_use]
    pub fn edited(&self, edit: &PersonEdit) -> Self {
        Self {
            name: edit.name.clone().unwrap_or_else(|| self.name.clone()),
            phone: pick(edit.phone.as_ref(), self.phone.as_ref()),
            email: pick(edit.email.as_ref(), self.email.as_ref()),
            year: pick(edit.year.as_ref(), self.year.as_ref()),
            major: pick(edit.major.as_ref(), self.major.as_ref()),
            housing: pick(edit.housing.as_ref(), self.housing.as_ref()),
            link: pick(edit.link.as_ref(), self.link.as_ref()),
            tags: edit.tags.clone().unwrap_or_else(|| self.tags.clone()),
        }
    }
}

fn pick<T: Clone>(new: Option<&T>, old: Option<&T>) -> Option<T> {
    new.or(old).cloned()
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        write_optional(f, "Phone", self.phone.as_ref())?;
        write_optional(f, "Email", self.email.as_ref())?;
        write_optional(f, "Year", self.year.as_ref())?;
        write_optional(f, "Major", self.major.as_ref())?;
        write_optional(f, "Housing", self.housing.as_ref())?;
        write_optional(f, "Link", self.link.as_ref())?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{tag}]")?;
            }
        }
        Ok(())
    }
}

/// Changes to apply to a [`Person`].
///
/// Fields left as `None` keep their current value. Tags, when given, replace
/// the existing tag set; an empty set clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonEdit {
    /// Replacement name.
    pub name: Option<Name>,
    /// Replacement phone number.
    pub phone: Option<Phone>,
    /// Replacement email address.
    pub email: Option<Email>,
    /// Replacement year of study.
    pub year: Option<Year>,
    /// Replacement major.
    pub major: Option<Major>,
    /// Replacement housing.
    pub housing: Option<Housing>,
    /// Replacement timetable link.
    pub link: Option<Link>,
    /// Replacement tag set.
    pub tags: Option<BTreeSet<Tag>>,
}

impl PersonEdit {
    /// Returns `true` if the edit would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

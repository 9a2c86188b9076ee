use std::{collections::BTreeSet, fmt};

use tracing::debug;

use crate::domain::{
    predicate::{All, Predicate},
    Person,
};

/// Errors raised when modifying an [`AddressBook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AddressBookError {
    /// Another record already has the same name.
    #[error("This person already exists in the address book")]
    Duplicate,

    /// The index does not address a record in the filtered view.
    #[error("The person index provided is invalid")]
    IndexOutOfRange,
}

type Observer = Box<dyn FnMut(&[&Person])>;

/// The collection of contacts, together with a filtered view of it.
///
/// The view holds the records accepted by the active [`Predicate`], in
/// insertion order. It is recomputed eagerly whenever the filter or the
/// records change, and registered observers are handed the new view each
/// time. Filtering never changes the records themselves.
///
/// Indices passed to [`remove`](Self::remove), [`replace`](Self::replace) and
/// [`get`](Self::get) address the filtered view.
pub struct AddressBook {
    persons: Vec<Person>,
    filter: Box<dyn Predicate>,
    visible: Vec<usize>,
    observers: Vec<Observer>,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self {
            persons: Vec::new(),
            filter: Box::new(All),
            visible: Vec::new(),
            observers: Vec::new(),
        }
    }
}

impl fmt::Debug for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressBook")
            .field("persons", &self.persons)
            .field("visible", &self.visible)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl AddressBook {
    /// Creates a book holding `persons`, showing all of them.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::Duplicate`] if two of the persons share a
    /// name.
    pub fn from_persons(
        persons: impl IntoIterator<Item = Person>,
    ) -> Result<Self, AddressBookError> {
        let mut book = Self::default();
        let mut names = BTreeSet::new();
        for person in persons {
            if !names.insert(person.name().clone()) {
                return Err(AddressBookError::Duplicate);
            }
            book.persons.push(person);
        }
        book.refresh();
        Ok(book)
    }

    /// Every record, regardless of the filter.
    #[must_use]
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// The total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Returns `true` if the book holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Returns `true` if a record with the same name as `person` exists.
    #[must_use]
    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Replaces the active filter and recomputes the view.
    pub fn set_filter<P>(&mut self, predicate: P)
    where
        P: Predicate + 'static,
    {
        self.filter = Box::new(predicate);
        self.refresh();
        debug!(visible = self.visible.len(), "filter updated");
    }

    /// Shows every record again.
    pub fn reset_filter(&mut self) {
        self.set_filter(All);
    }

    /// The number of records in the filtered view.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.visible.len()
    }

    /// A snapshot of the filtered view, in insertion order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Person> {
        self.visible.iter().map(|&i| &self.persons[i]).collect()
    }

    /// The record at `index` in the filtered view.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Person> {
        self.visible.get(index).map(|&i| &self.persons[i])
    }

    /// Registers a callback that receives the filtered view after each change.
    pub fn observe(&mut self, observer: impl FnMut(&[&Person]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::Duplicate`] if a record with the same name
    /// already exists.
    pub fn add(&mut self, person: Person) -> Result<(), AddressBookError> {
        if self.contains(&person) {
            return Err(AddressBookError::Duplicate);
        }
        debug!(name = %person.name(), "adding person");
        self.persons.push(person);
        self.refresh();
        Ok(())
    }

    /// Removes and returns the record at `index` in the filtered view.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::IndexOutOfRange`] if `index` is past the
    /// end of the view.
    pub fn remove(&mut self, index: usize) -> Result<Person, AddressBookError> {
        let position = self.position(index)?;
        let removed = self.persons.remove(position);
        debug!(name = %removed.name(), "removed person");
        self.refresh();
        Ok(removed)
    }

    /// Replaces the record at `index` in the filtered view, returning the old
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::IndexOutOfRange`] if `index` is past the
    /// end of the view, or [`AddressBookError::Duplicate`] if `person` has the
    /// same name as a different record.
    pub fn replace(&mut self, index: usize, person: Person) -> Result<Person, AddressBookError> {
        let position = self.position(index)?;
        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, other)| i != position && other.is_same_person(&person));
        if collides {
            return Err(AddressBookError::Duplicate);
        }
        let previous = std::mem::replace(&mut self.persons[position], person);
        self.refresh();
        Ok(previous)
    }

    /// Removes every record. The filter is kept.
    pub fn clear(&mut self) {
        self.persons.clear();
        self.refresh();
    }

    fn position(&self, index: usize) -> Result<usize, AddressBookError> {
        self.visible
            .get(index)
            .copied()
            .ok_or(AddressBookError::IndexOutOfRange)
    }

    fn refresh(&mut self) {
        self.visible = self
            .persons
            .iter()
            .enumerate()
            .filter(|(_, person)| self.filter.matches(person))
            .map(|(i, _)| i)
            .collect();

        if self.observers.is_empty() {
            return;
        }
        let view: Vec<&Person> = self.visible.iter().map(|&i| &self.persons[i]).collect();
        for observer in &mut self.observers {
            observer(&view);
        }
    }
}

/// The message reported after listing `count` persons.
///
/// ```
/// assert_eq!(contacts::listed_overview(1), "1 person listed!");
/// assert_eq!(contacts::listed_overview(0), "0 persons listed!");
/// ```
#[must_use]
pub fn listed_overview(count: usize) -> String {
    if count == 1 {
        "1 person listed!".to_string()
    } else {
        format!("{count} persons listed!")
    }
}

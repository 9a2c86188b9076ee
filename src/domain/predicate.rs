use std::fmt;

use crate::domain::Person;

/// A query over contact records.
///
/// Anything that can decide whether a [`Person`] matches can be installed as
/// the filter of an [`AddressBook`](crate::AddressBook), including plain
/// closures:
///
/// ```
/// use contacts::{AddressBook, Person};
///
/// let mut book = AddressBook::default();
/// book.set_filter(|person: &Person| person.link().is_some());
/// assert_eq!(book.filtered_count(), 0);
/// ```
pub trait Predicate {
    /// Returns `true` if `person` satisfies the query.
    fn matches(&self, person: &Person) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Person) -> bool,
{
    fn matches(&self, person: &Person) -> bool {
        self(person)
    }
}

/// Matches every person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct All;

impl Predicate for All {
    fn matches(&self, _person: &Person) -> bool {
        true
    }
}

impl fmt::Display for All {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("all persons")
    }
}

/// Matches persons taking any of the given modules.
///
/// Module codes come from the person's timetable link and are compared with
/// the keywords ignoring case. A person without a link never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatch {
    keywords: Vec<String>,
}

impl ModuleMatch {
    /// Creates a predicate matching any of `keywords`.
    #[must_use]
    pub fn new(keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// The module codes searched for, in the order given.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Predicate for ModuleMatch {
    fn matches(&self, person: &Person) -> bool {
        let Some(link) = person.link() else {
            return false;
        };
        let codes = link.codes();
        self.keywords
            .iter()
            .any(|keyword| codes.iter().any(|code| code.eq_ignore_ascii_case(keyword)))
    }
}

impl fmt::Display for ModuleMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "module in [{}]", self.keywords.join(", "))
    }
}

/// Matches persons with any of the given words in their name.
///
/// Whole words are compared ignoring case, so `"alex"` matches "Alex Yeoh"
/// but `"ale"` does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    keywords: Vec<String>,
}

impl NameMatch {
    /// Creates a predicate matching any of `keywords`.
    #[must_use]
    pub fn new(keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// The words searched for, in the order given.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Predicate for NameMatch {
    fn matches(&self, person: &Person) -> bool {
        self.keywords.iter().any(|keyword| {
            person
                .name()
                .words()
                .any(|word| word.to_lowercase() == keyword.to_lowercase())
        })
    }
}

impl fmt::Display for NameMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name contains any of [{}]", self.keywords.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::testing::{alice, benson, carl, daniel, PersonBuilder};

    #[test_case(&["CS2103T"], true; "exact code")]
    #[test_case(&["cs2103t"], true; "lower case keyword")]
    #[test_case(&["Cs2101"], true; "mixed case keyword")]
    #[test_case(&["CS2040", "MA1521"], true; "second keyword matches")]
    #[test_case(&["CS2040", "GEA1000"], false; "no keyword matches")]
    #[test_case(&["CS2103"], false; "prefix of a code")]
    #[test_case(&["LEC:G12"], false; "slot value is not a code")]
    #[test_case(&[], false; "no keywords")]
    fn module_match_on_alice(keywords: &[&str], expected: bool) {
        let predicate = ModuleMatch::new(keywords.iter().copied());
        assert_eq!(predicate.matches(&alice()), expected);
    }

    #[test]
    fn module_match_ignores_case_of_codes_in_link() {
        // Carl's link spells the code in lower case.
        let predicate = ModuleMatch::new(["CS2103T"]);
        assert!(predicate.matches(&carl()));
    }

    #[test]
    fn person_without_link_never_matches() {
        let person = PersonBuilder::new("No Link").build();
        assert!(!ModuleMatch::new(["CS2103T"]).matches(&person));
        assert!(!ModuleMatch::new(["CS2103T"]).matches(&daniel()));
    }

    #[test]
    fn link_without_query_never_matches() {
        let person = PersonBuilder::new("Empty Timetable")
            .link(Some("https://nusmods.com/timetable/sem-1/share?"))
            .build();
        assert!(!ModuleMatch::new(["CS2103T"]).matches(&person));
    }

    #[test]
    fn module_match_equality_is_order_sensitive() {
        let first = ModuleMatch::new(["CS2103T", "CS2101"]);
        assert_eq!(first, ModuleMatch::new(["CS2103T", "CS2101"]));
        assert_ne!(first, ModuleMatch::new(["CS2101", "CS2103T"]));
        assert_ne!(first, ModuleMatch::new(["CS2103T"]));
    }

    #[test]
    fn predicates_display_their_keywords() {
        assert_eq!(
            ModuleMatch::new(["CS2103T", "MA1521"]).to_string(),
            "module in [CS2103T, MA1521]"
        );
        assert_eq!(NameMatch::new(["alex"]).to_string(), "name contains any of [alex]");
    }

    #[test_case(&["Alice"], true; "one keyword")]
    #[test_case(&["aLIce", "bOB"], true; "mixed case keywords")]
    #[test_case(&["Carol", "Pauline"], true; "one of several keywords")]
    #[test_case(&["Ali"], false; "partial word")]
    #[test_case(&["94351253"], false; "phone number")]
    fn name_match_on_alice(keywords: &[&str], expected: bool) {
        let predicate = NameMatch::new(keywords.iter().copied());
        assert_eq!(predicate.matches(&alice()), expected);
    }

    #[test]
    fn closures_are_predicates() {
        let in_year_three = |person: &Person| person.year().is_some_and(|year| year.value() == 3);
        assert!(in_year_three.matches(&benson()));
        assert!(!in_year_three.matches(&alice()));
        assert!(All.matches(&daniel()));
    }
}

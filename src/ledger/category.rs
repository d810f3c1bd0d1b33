use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Categorises an expense. The set is closed: the file format and every
/// prompt only ever deal in these five names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Food,
    Home,
    Work,
    Fun,
    Misc,
}

impl Category {
    /// All categories, in the order they are presented to the user.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Home,
        Category::Work,
        Category::Fun,
        Category::Misc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Home => "Home",
            Category::Work => "Work",
            Category::Fun => "Fun",
            Category::Misc => "Misc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|category| category.as_str() == value)
            .copied()
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

/// Returned when a textual category name is not part of the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_parses_from_its_display_form() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().expect("fixed set parses");
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn names_outside_the_fixed_set_do_not_parse() {
        assert!("Groceries".parse::<Category>().is_err());
        assert!("food".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::field::{parse_integer, FieldError, FormField};

pub const DEFAULT_QUANTITY: i64 = 3;
pub const DEFAULT_AGE: i64 = 30;
pub const DEFAULT_PRICE_MIN: i64 = 25;
pub const DEFAULT_PRICE_MAX: i64 = 100;

/// Who the gift is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Man,
    Woman,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Man, Gender::Woman];

    /// Wire value (`"man"` / `"woman"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Man => "man",
            Gender::Woman => "woman",
        }
    }

    /// Label shown on the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Man => "Man",
            Gender::Woman => "Woman",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Gender::Man => Gender::Woman,
            Gender::Woman => Gender::Man,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| FieldError::UnknownGender(value.to_string()))
    }
}

/// Parameters describing the gift recipient and budget.
///
/// Serializes to the request body expected by `/generate-gifts`:
/// `{ quantity, priceMin, priceMax, gender, age, hobbies }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    pub quantity: i64,
    pub price_min: i64,
    pub price_max: i64,
    pub gender: Gender,
    pub age: i64,
    pub hobbies: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            quantity: DEFAULT_QUANTITY,
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
            gender: Gender::default(),
            age: DEFAULT_AGE,
            hobbies: String::new(),
        }
    }
}

impl FormInput {
    /// Coerce `raw` into the type of `field` and store it.
    ///
    /// Integer fields use base-10 parsing of the trimmed text; on failure the
    /// stored value is left untouched. Hobbies are stored verbatim.
    pub fn update_field(&mut self, field: FormField, raw: &str) -> Result<(), FieldError> {
        match field {
            FormField::Hobbies => {
                self.hobbies = raw.to_string();
                return Ok(());
            }
            FormField::Quantity => self.quantity = parse_integer(field, raw)?,
            FormField::Age => self.age = parse_integer(field, raw)?,
            FormField::PriceMin => self.price_min = parse_integer(field, raw)?,
            FormField::PriceMax => self.price_max = parse_integer(field, raw)?,
        }
        Ok(())
    }

    /// Same as [`update_field`](Self::update_field), addressing the field by
    /// its wire name.
    pub fn update_named(&mut self, name: &str, raw: &str) -> Result<(), FieldError> {
        let field: FormField = name.parse()?;
        self.update_field(field, raw)
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    /// Current value of `field` rendered as editable text.
    pub fn field_text(&self, field: FormField) -> String {
        match field {
            FormField::Quantity => self.quantity.to_string(),
            FormField::Age => self.age.to_string(),
            FormField::PriceMin => self.price_min.to_string(),
            FormField::PriceMax => self.price_max.to_string(),
            FormField::Hobbies => self.hobbies.clone(),
        }
    }
}

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::types::FormInput;

/// Errors raised while coercing user text into form values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Unknown form field '{0}'")]
    UnknownField(String),

    #[error("Unknown gender '{0}', expected 'man' or 'woman'")]
    UnknownGender(String),

    #[error("{field} must be a whole number, got '{raw}'")]
    NotANumber { field: &'static str, raw: String },
}

/// Editable text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Quantity,
    Age,
    PriceMin,
    PriceMax,
    Hobbies,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Quantity,
        FormField::Age,
        FormField::PriceMin,
        FormField::PriceMax,
        FormField::Hobbies,
    ];

    /// Name used in the request body.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Quantity => "quantity",
            FormField::Age => "age",
            FormField::PriceMin => "priceMin",
            FormField::PriceMax => "priceMax",
            FormField::Hobbies => "hobbies",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Quantity => "Quantity",
            FormField::Age => "Age",
            FormField::PriceMin => "Price from ($)",
            FormField::PriceMax => "Price to ($)",
            FormField::Hobbies => "Hobbies",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, FormField::Hobbies)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quantity" => Ok(FormField::Quantity),
            "age" => Ok(FormField::Age),
            "priceMin" | "price_min" => Ok(FormField::PriceMin),
            "priceMax" | "price_max" => Ok(FormField::PriceMax),
            "hobbies" => Ok(FormField::Hobbies),
            other => Err(FieldError::UnknownField(other.to_string())),
        }
    }
}

/// Base-10 integer coercion for numeric fields.
pub fn parse_integer(field: FormField, raw: &str) -> Result<i64, FieldError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| FieldError::NotANumber {
            field: field.label(),
            raw: raw.to_string(),
        })
}

/// Raw text typed into each field.
///
/// A draft may hold text that does not coerce (an empty box, a lone `-`);
/// [`FormInput`] keeps the last value that did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDrafts {
    quantity: String,
    age: String,
    price_min: String,
    price_max: String,
    hobbies: String,
}

impl Default for FieldDrafts {
    fn default() -> Self {
        Self::from_input(&FormInput::default())
    }
}

impl FieldDrafts {
    pub fn from_input(input: &FormInput) -> Self {
        Self {
            quantity: input.field_text(FormField::Quantity),
            age: input.field_text(FormField::Age),
            price_min: input.field_text(FormField::PriceMin),
            price_max: input.field_text(FormField::PriceMax),
            hobbies: input.field_text(FormField::Hobbies),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Quantity => &self.quantity,
            FormField::Age => &self.age,
            FormField::PriceMin => &self.price_min,
            FormField::PriceMax => &self.price_max,
            FormField::Hobbies => &self.hobbies,
        }
    }

    pub fn set(&mut self, field: FormField, raw: String) {
        let slot = match field {
            FormField::Quantity => &mut self.quantity,
            FormField::Age => &mut self.age,
            FormField::PriceMin => &mut self.price_min,
            FormField::PriceMax => &mut self.price_max,
            FormField::Hobbies => &mut self.hobbies,
        };
        *slot = raw;
    }

    pub fn is_valid(&self, field: FormField) -> bool {
        !field.is_numeric() || parse_integer(field, self.get(field)).is_ok()
    }

    /// Fields whose draft does not coerce, in form order.
    pub fn invalid_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| !self.is_valid(*field))
            .collect()
    }
}

//! Typed field bindings into the people list

use super::error::FormError;
use super::person::Person;
use std::fmt;
use std::str::FromStr;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

/// The three fields of a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    First,
    Last,
    Age,
}

impl PersonField {
    pub const ALL: [PersonField; 3] = [PersonField::First, PersonField::Last, PersonField::Age];

    /// Key used in field paths and the submitted JSON
    pub fn name(&self) -> &'static str {
        match self {
            PersonField::First => "first",
            PersonField::Last => "last",
            PersonField::Age => "age",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PersonField::First => "First Name",
            PersonField::Last => "Last Name",
            PersonField::Age => "Age",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, PersonField::Age)
    }

    /// Read this field from a person
    pub fn get(&self, person: &Person) -> FieldValue {
        match self {
            PersonField::First => FieldValue::Text(person.first.clone()),
            PersonField::Last => FieldValue::Text(person.last.clone()),
            PersonField::Age => FieldValue::Number(person.age),
        }
    }

    /// Write this field on a person
    pub fn set(&self, person: &mut Person, value: FieldValue) -> Result<(), FormError> {
        match (self, value) {
            (PersonField::First, FieldValue::Text(s)) => person.first = s,
            (PersonField::Last, FieldValue::Text(s)) => person.last = s,
            (PersonField::Age, FieldValue::Number(n)) => person.age = n,
            (field, _) => {
                return Err(FormError::TypeMismatch {
                    field: *field,
                    expected: if field.is_numeric() { "a number" } else { "text" },
                })
            }
        }
        Ok(())
    }

    /// Editable text of a name field (Age is edited through [`NumberInput`])
    pub fn text_mut<'a>(&self, person: &'a mut Person) -> Option<&'a mut String> {
        match self {
            PersonField::First => Some(&mut person.first),
            PersonField::Last => Some(&mut person.last),
            PersonField::Age => None,
        }
    }
}

/// Text buffer behind a numeric input.
///
/// Holds what the user typed so a leading `-` or an empty field survive
/// between keystrokes. Empty and bare `-` read as 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberInput {
    text: String,
}

impl NumberInput {
    pub fn from_value(value: i64) -> Self {
        Self {
            text: value.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Accept digits anywhere and `-` only as the first character.
    /// Keystrokes that would overflow are dropped.
    pub fn push_char(&mut self, c: char) {
        let accepted = c.is_ascii_digit() || (c == '-' && self.text.is_empty());
        if !accepted {
            return;
        }
        self.text.push(c);
        if Self::parse(&self.text).is_none() {
            self.text.pop();
        }
    }

    pub fn pop_char(&mut self) {
        self.text.pop();
    }

    pub fn value(&self) -> i64 {
        Self::parse(&self.text).unwrap_or(0)
    }

    fn parse(text: &str) -> Option<i64> {
        match text {
            "" | "-" => Some(0),
            _ => text.parse().ok(),
        }
    }
}

impl fmt::Display for PersonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PersonField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(PersonField::First),
            "last" => Ok(PersonField::Last),
            "age" => Ok(PersonField::Age),
            other => Err(FormError::InvalidPath(format!("unknown field `{other}`"))),
        }
    }
}

/// Location of one field in the form values, e.g. `people[0].first`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath {
    pub index: usize,
    pub field: PersonField,
}

impl FieldPath {
    pub fn new(index: usize, field: PersonField) -> Self {
        Self { index, field }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "people[{}].{}", self.index, self.field)
    }
}

impl FromStr for FieldPath {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormError::InvalidPath(s.to_string());
        let rest = s.strip_prefix("people[").ok_or_else(invalid)?;
        let (index, rest) = rest.split_once(']').ok_or_else(invalid)?;
        let canonical = !index.is_empty()
            && index.bytes().all(|b| b.is_ascii_digit())
            && (index == "0" || !index.starts_with('0'));
        if !canonical {
            return Err(invalid());
        }
        let index: usize = index.parse().map_err(|_| invalid())?;
        let field = rest.strip_prefix('.').ok_or_else(invalid)?;
        Ok(Self {
            index,
            field: field.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_path_display() {
        let path = FieldPath::new(3, PersonField::Last);
        assert_eq!(path.to_string(), "people[3].last");
    }

    #[test]
    fn test_field_path_parse() {
        let path: FieldPath = "people[12].age".parse().unwrap();
        assert_eq!(path, FieldPath::new(12, PersonField::Age));
    }

    #[test]
    fn test_field_path_parse_rejects_garbage() {
        for bad in [
            "",
            "people",
            "people[x].first",
            "people[0]first",
            "people[0].middle",
            "persons[0].first",
            "people[-1].age",
            "people[+1].age",
            "people[007].first",
            "people[].first",
        ] {
            assert!(bad.parse::<FieldPath>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_get_and_set() {
        let mut person = Person::default();
        PersonField::First
            .set(&mut person, FieldValue::Text("Grace".into()))
            .unwrap();
        PersonField::Age
            .set(&mut person, FieldValue::Number(85))
            .unwrap();
        assert_eq!(
            PersonField::First.get(&person),
            FieldValue::Text("Grace".into())
        );
        assert_eq!(PersonField::Age.get(&person), FieldValue::Number(85));
    }

    #[test]
    fn test_set_type_mismatch() {
        let mut person = Person::default();
        let err = PersonField::Age
            .set(&mut person, FieldValue::Text("old".into()))
            .unwrap_err();
        assert_eq!(
            err,
            FormError::TypeMismatch {
                field: PersonField::Age,
                expected: "a number"
            }
        );
        assert_eq!(person.age, 21);
    }

    #[test]
    fn test_text_editing() {
        let mut person = Person::default();
        if let Some(text) = PersonField::Last.text_mut(&mut person) {
            text.push_str("Al");
            text.pop();
        }
        assert_eq!(person.last, "A");
        assert!(PersonField::Age.text_mut(&mut person).is_none());
    }

    #[test]
    fn test_field_path_zero_index() {
        let path: FieldPath = "people[0].first".parse().unwrap();
        assert_eq!(path.to_string(), "people[0].first");
        let path: FieldPath = "people[10].last".parse().unwrap();
        assert_eq!(path.to_string(), "people[10].last");
    }

    #[test]
    fn test_number_input_leading_minus_after_clearing() {
        let mut input = NumberInput::from_value(21);
        input.pop_char();
        input.pop_char();
        assert_eq!(input.as_str(), "");
        assert_eq!(input.value(), 0);
        input.push_char('-');
        assert_eq!(input.as_str(), "-");
        assert_eq!(input.value(), 0);
        input.push_char('5');
        assert_eq!(input.value(), -5);
    }

    #[test]
    fn test_number_input_rejects_stray_chars() {
        let mut input = NumberInput::from_value(2);
        input.push_char('x');
        input.push_char('-');
        input.push_char('6');
        assert_eq!(input.as_str(), "26");
        assert_eq!(input.value(), 26);
    }

    #[test]
    fn test_number_input_overflow_ignored() {
        let mut input = NumberInput::from_value(i64::MAX);
        input.push_char('9');
        assert_eq!(input.value(), i64::MAX);
        let mut input = NumberInput::from_value(i64::MIN);
        input.push_char('1');
        assert_eq!(input.value(), i64::MIN);
    }
}

//! People form state: the value store and the controller driving it

use super::error::FormError;
use super::field::{FieldPath, FieldValue, NumberInput, PersonField};
use super::person::{Person, PersonEntry, PersonId};
use crate::sink::{SinkError, SubmitSink};
use serde::{Deserialize, Serialize};

/// Trait for focus cycling over a form's focus stops
pub trait Form {
    fn focus_count(&self) -> usize;
    fn focus_index(&self) -> usize;
    fn set_focus_index(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.focus_count();
        let current = self.focus_index();
        self.set_focus_index((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.focus_count();
        let current = self.focus_index();
        if current == 0 {
            self.set_focus_index(count - 1);
        } else {
            self.set_focus_index(current - 1);
        }
    }
}

/// The submitted shape: `{ "people": [ { first, last, age }, ... ] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub people: Vec<Person>,
}

/// Form values: the ordered people list with typed field bindings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    people: Vec<PersonEntry>,
}

impl FormValues {
    pub fn new(people: impl IntoIterator<Item = Person>) -> Self {
        Self {
            people: people.into_iter().map(PersonEntry::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn entries(&self) -> &[PersonEntry] {
        &self.people
    }

    pub fn person(&self, index: usize) -> Option<&Person> {
        self.people.get(index).map(|e| &e.person)
    }

    /// Current index of the entry with this id
    pub fn position(&self, id: PersonId) -> Option<usize> {
        self.people.iter().position(|e| e.id == id)
    }

    /// Append a person, returning its new id
    pub fn push(&mut self, person: Person) -> PersonId {
        let entry = PersonEntry::new(person);
        let id = entry.id;
        self.people.push(entry);
        id
    }

    /// Remove the person at `index`; later entries shift down by one
    pub fn remove(&mut self, index: usize) -> Result<Person, FormError> {
        if index >= self.people.len() {
            return Err(FormError::IndexOutOfRange {
                index,
                len: self.people.len(),
            });
        }
        Ok(self.people.remove(index).person)
    }

    pub fn get(&self, path: FieldPath) -> Result<FieldValue, FormError> {
        let person = self.person(path.index).ok_or(FormError::IndexOutOfRange {
            index: path.index,
            len: self.people.len(),
        })?;
        Ok(path.field.get(person))
    }

    #[allow(dead_code)]
    pub fn set(&mut self, path: FieldPath, value: FieldValue) -> Result<(), FormError> {
        let len = self.people.len();
        let entry = self
            .people
            .get_mut(path.index)
            .ok_or(FormError::IndexOutOfRange {
                index: path.index,
                len,
            })?;
        path.field.set(&mut entry.person, value)
    }

    fn person_by_id_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        self.people
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.person)
    }

    /// Copy of the current values in submitted shape
    pub fn snapshot(&self) -> Submission {
        Submission {
            people: self.people.iter().map(|e| e.person.clone()).collect(),
        }
    }
}

/// Where keyboard focus sits in the people form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(PersonId, PersonField),
    Remove(PersonId),
    AddPerson,
    Submit,
}

impl Focus {
    /// Entry this focus stop belongs to, if any
    pub fn person(&self) -> Option<PersonId> {
        match self {
            Focus::Field(id, _) | Focus::Remove(id) => Some(*id),
            Focus::AddPerson | Focus::Submit => None,
        }
    }
}

/// Controller for the people form
#[derive(Debug, Clone)]
pub struct PeopleForm {
    values: FormValues,
    template: Person,
    focus: Focus,
    /// Typed text of the focused Age field
    age_input: Option<(PersonId, NumberInput)>,
}

impl PeopleForm {
    /// Create the form from a template and starting people.
    ///
    /// With no starting people the form opens with one copy of the template.
    pub fn new(template: Person, starting: Vec<Person>) -> Self {
        let values = if starting.is_empty() {
            FormValues::new([template.clone()])
        } else {
            FormValues::new(starting)
        };
        let focus = match values.entries().first() {
            Some(entry) => Focus::Field(entry.id, PersonField::First),
            None => Focus::AddPerson,
        };
        Self {
            values,
            template,
            focus,
            age_input: None,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    #[allow(dead_code)]
    pub fn template(&self) -> &Person {
        &self.template
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.age_input = None;
    }

    /// Index of the entry holding focus
    pub fn focused_index(&self) -> Option<usize> {
        self.focus.person().and_then(|id| self.values.position(id))
    }

    /// Append a copy of the template and focus its first field
    pub fn add_person(&mut self) -> PersonId {
        let id = self.values.push(self.template.clone());
        self.set_focus(Focus::Field(id, PersonField::First));
        tracing::debug!(index = self.values.len() - 1, "added person");
        id
    }

    /// Remove the person at `index`
    pub fn remove_person(&mut self, index: usize) -> Result<Person, FormError> {
        let position = self.focus_index();
        let removed = self.values.remove(index)?;
        self.refocus(position);
        tracing::debug!(index, remaining = self.values.len(), "removed person");
        Ok(removed)
    }

    /// Remove the person carrying `id`, wherever it currently sits
    pub fn remove_by_id(&mut self, id: PersonId) -> Result<Person, FormError> {
        let index = self
            .values
            .position(id)
            .ok_or(FormError::UnknownPerson(id))?;
        self.remove_person(index)
    }

    /// Remove the person holding focus, if focus is on one
    pub fn remove_focused(&mut self) -> Option<Result<Person, FormError>> {
        let index = self.focused_index()?;
        Some(self.remove_person(index))
    }

    #[allow(dead_code)]
    pub fn field(&self, path: FieldPath) -> Result<FieldValue, FormError> {
        self.values.get(path)
    }

    #[allow(dead_code)]
    pub fn set_field(&mut self, path: FieldPath, value: FieldValue) -> Result<(), FormError> {
        self.values.set(path, value)?;
        self.age_input = None;
        Ok(())
    }

    /// Text shown for a field: the typed buffer while Age is being edited,
    /// the stored value otherwise
    pub fn display_text(&self, path: FieldPath) -> Result<String, FormError> {
        let value = self.values.get(path)?;
        if let (Focus::Field(id, field), Some((owner, input))) = (self.focus, &self.age_input) {
            let editing = field == path.field
                && *owner == id
                && self.values.position(id) == Some(path.index);
            if editing {
                return Ok(input.as_str().to_string());
            }
        }
        Ok(value.display_value())
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        let Focus::Field(id, field) = self.focus else {
            return;
        };
        if field.is_numeric() {
            self.edit_age(id, |input| input.push_char(c));
        } else if let Some(text) = self
            .values
            .person_by_id_mut(id)
            .and_then(|p| field.text_mut(p))
        {
            text.push(c);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        let Focus::Field(id, field) = self.focus else {
            return;
        };
        if field.is_numeric() {
            self.edit_age(id, NumberInput::pop_char);
        } else if let Some(text) = self
            .values
            .person_by_id_mut(id)
            .and_then(|p| field.text_mut(p))
        {
            text.pop();
        }
    }

    /// Apply an edit to the Age buffer of `id` and store the parsed value
    fn edit_age(&mut self, id: PersonId, edit: impl FnOnce(&mut NumberInput)) {
        let Some(person) = self.values.person_by_id_mut(id) else {
            return;
        };
        let mut input = match self.age_input.take() {
            Some((owner, input)) if owner == id => input,
            _ => NumberInput::from_value(person.age),
        };
        edit(&mut input);
        person.age = input.value();
        self.age_input = Some((id, input));
    }

    /// Hand the current values to `sink`
    pub async fn submit<S: SubmitSink + ?Sized>(&self, sink: &S) -> Result<Submission, SinkError> {
        let submission = self.values.snapshot();
        sink.submit(&submission).await?;
        tracing::info!(people = submission.people.len(), "submitted form");
        Ok(submission)
    }

    /// All focus stops in display order
    pub fn focus_stops(&self) -> Vec<Focus> {
        let mut stops = Vec::with_capacity(self.values.len() * 4 + 2);
        for entry in self.values.entries() {
            stops.extend(PersonField::ALL.iter().map(|f| Focus::Field(entry.id, *f)));
            stops.push(Focus::Remove(entry.id));
        }
        stops.push(Focus::AddPerson);
        stops.push(Focus::Submit);
        stops
    }

    /// After a removal, keep focus on its entry or fall back to the stop
    /// now sitting at the old position
    fn refocus(&mut self, position: usize) {
        let still_there = self
            .focus
            .person()
            .map_or(true, |id| self.values.position(id).is_some());
        if !still_there {
            let stops = self.focus_stops();
            self.set_focus(stops[position.min(stops.len() - 1)]);
        }
    }
}

impl Form for PeopleForm {
    fn focus_count(&self) -> usize {
        self.values.len() * 4 + 2
    }

    fn focus_index(&self) -> usize {
        self.focus_stops()
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }

    fn set_focus_index(&mut self, index: usize) {
        let stops = self.focus_stops();
        self.set_focus(stops[index.min(stops.len() - 1)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MockSubmitSink;
    use pretty_assertions::assert_eq;

    fn default_form() -> PeopleForm {
        PeopleForm::new(Person::default(), Vec::new())
    }

    fn abc() -> Vec<Person> {
        vec![
            Person::new("Ann", "Abbot", 30),
            Person::new("Ben", "Baker", 41),
            Person::new("Cat", "Cole", 52),
        ]
    }

    #[test]
    fn test_starts_with_one_default_person() {
        let form = default_form();
        assert_eq!(form.values().len(), 1);
        assert_eq!(form.values().person(0), Some(&Person::default()));
    }

    #[test]
    fn test_starting_people_are_used() {
        let form = PeopleForm::new(Person::default(), abc());
        assert_eq!(form.values().snapshot().people, abc());
    }

    #[test]
    fn test_add_person_grows_by_one_each_time() {
        let mut form = default_form();
        for n in 1..=5 {
            form.add_person();
            assert_eq!(form.values().len(), n + 1);
        }
    }

    #[test]
    fn test_add_person_appends_template_and_keeps_existing() {
        let template = Person::new("New", "Comer", 18);
        let mut form = PeopleForm::new(template.clone(), abc());
        let before: Vec<_> = form.values().entries().to_vec();
        let id = form.add_person();
        assert_eq!(form.values().position(id), Some(3));
        assert_eq!(form.values().person(3), Some(&template));
        assert_eq!(&form.values().entries()[..3], &before[..]);
        assert_eq!(form.focus(), Focus::Field(id, PersonField::First));
    }

    #[test]
    fn test_template_is_not_aliased() {
        let mut form = default_form();
        form.add_person();
        form.set_field(
            FieldPath::new(1, PersonField::First),
            FieldValue::Text("Edited".into()),
        )
        .unwrap();
        assert_eq!(form.values().person(0), Some(&Person::default()));
        assert_eq!(form.template(), &Person::default());
        form.add_person();
        assert_eq!(form.values().person(2), Some(&Person::default()));
    }

    #[test]
    fn test_remove_middle_shifts_later_entries() {
        let mut form = PeopleForm::new(Person::default(), abc());
        let c_id = form.values().entries()[2].id;
        let removed = form.remove_person(1).unwrap();
        assert_eq!(removed, abc()[1]);
        assert_eq!(
            form.values().snapshot().people,
            vec![abc()[0].clone(), abc()[2].clone()]
        );
        assert_eq!(form.values().position(c_id), Some(1));
    }

    #[test]
    fn test_remove_out_of_range_is_reported() {
        let mut form = PeopleForm::new(Person::default(), abc());
        let err = form.remove_person(3).unwrap_err();
        assert_eq!(err, FormError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(form.values().len(), 3);
    }

    #[test]
    fn test_remove_last_remaining_person() {
        let mut form = default_form();
        form.remove_person(0).unwrap();
        assert!(form.values().is_empty());
        assert_eq!(form.focus(), Focus::AddPerson);
        form.add_person();
        assert_eq!(form.values().len(), 1);
    }

    #[test]
    fn test_remove_by_id_after_shift() {
        let mut form = PeopleForm::new(Person::default(), abc());
        let c_id = form.values().entries()[2].id;
        form.remove_person(0).unwrap();
        let removed = form.remove_by_id(c_id).unwrap();
        assert_eq!(removed, abc()[2]);
        assert_eq!(form.values().snapshot().people, vec![abc()[1].clone()]);
        assert_eq!(form.remove_by_id(c_id), Err(FormError::UnknownPerson(c_id)));
    }

    #[test]
    fn test_focus_follows_entry_through_removal() {
        let mut form = PeopleForm::new(Person::default(), abc());
        let c_id = form.values().entries()[2].id;
        form.set_focus(Focus::Field(c_id, PersonField::Last));
        form.remove_person(0).unwrap();
        assert_eq!(form.focus(), Focus::Field(c_id, PersonField::Last));
        form.input_char('s');
        assert_eq!(form.values().person(1).unwrap().last, "Coles");
        assert_eq!(form.values().person(0).unwrap().last, "Baker");
    }

    #[test]
    fn test_removing_focused_entry_moves_to_next() {
        let mut form = PeopleForm::new(Person::default(), abc());
        let a_id = form.values().entries()[0].id;
        let b_id = form.values().entries()[1].id;
        form.set_focus(Focus::Remove(a_id));
        form.remove_focused().unwrap().unwrap();
        assert_eq!(form.focus(), Focus::Remove(b_id));
    }

    #[test]
    fn test_remove_focused_without_entry_focus() {
        let mut form = default_form();
        form.set_focus(Focus::Submit);
        assert!(form.remove_focused().is_none());
        assert_eq!(form.values().len(), 1);
    }

    #[test]
    fn test_focus_cycles_through_all_stops() {
        let mut form = default_form();
        let id = form.values().entries()[0].id;
        let expected = [
            Focus::Field(id, PersonField::Last),
            Focus::Field(id, PersonField::Age),
            Focus::Remove(id),
            Focus::AddPerson,
            Focus::Submit,
            Focus::Field(id, PersonField::First),
        ];
        for focus in expected {
            form.next_field();
            assert_eq!(form.focus(), focus);
        }
        form.prev_field();
        assert_eq!(form.focus(), Focus::Submit);
    }

    #[test]
    fn test_field_bindings_by_path() {
        let mut form = PeopleForm::new(Person::default(), abc());
        let path: FieldPath = "people[2].age".parse().unwrap();
        assert_eq!(form.field(path), Ok(FieldValue::Number(52)));
        form.set_field(path, FieldValue::Number(-1)).unwrap();
        assert_eq!(form.values().person(2).unwrap().age, -1);
        assert_eq!(
            form.field(FieldPath::new(9, PersonField::First)),
            Err(FormError::IndexOutOfRange { index: 9, len: 3 })
        );
    }

    #[test]
    fn test_typing_outside_fields_is_ignored() {
        let mut form = default_form();
        form.set_focus(Focus::AddPerson);
        form.input_char('x');
        form.backspace();
        assert_eq!(form.values().person(0), Some(&Person::default()));
    }

    fn focus_age(form: &mut PeopleForm, index: usize) {
        let id = form.values().entries()[index].id;
        form.set_focus(Focus::Field(id, PersonField::Age));
    }

    #[test]
    fn test_age_accepts_leading_minus_after_clearing() {
        let mut form = default_form();
        focus_age(&mut form, 0);
        form.backspace();
        form.backspace();
        assert_eq!(form.values().person(0).unwrap().age, 0);
        form.input_char('-');
        form.input_char('5');
        assert_eq!(form.values().person(0).unwrap().age, -5);
    }

    #[test]
    fn test_age_display_follows_typed_text() {
        let mut form = default_form();
        let path = FieldPath::new(0, PersonField::Age);
        assert_eq!(form.display_text(path).unwrap(), "21");
        focus_age(&mut form, 0);
        form.backspace();
        form.backspace();
        assert_eq!(form.display_text(path).unwrap(), "");
        form.input_char('-');
        assert_eq!(form.display_text(path).unwrap(), "-");

        // Leaving the field shows the stored value again
        form.next_field();
        assert_eq!(form.display_text(path).unwrap(), "0");
    }

    #[test]
    fn test_age_buffer_is_per_entry() {
        let mut form = PeopleForm::new(Person::default(), abc());
        focus_age(&mut form, 0);
        form.backspace();
        form.backspace();
        form.input_char('-');
        focus_age(&mut form, 1);
        form.input_char('7');
        assert_eq!(form.values().person(0).unwrap().age, 0);
        assert_eq!(form.values().person(1).unwrap().age, 417);
        assert_eq!(
            form.display_text(FieldPath::new(0, PersonField::Age)).unwrap(),
            "0"
        );
    }

    #[test]
    fn test_age_buffer_follows_entry_through_removal() {
        let mut form = PeopleForm::new(Person::default(), abc());
        focus_age(&mut form, 2);
        form.backspace();
        form.backspace();
        form.input_char('-');
        form.remove_person(0).unwrap();
        form.input_char('3');
        assert_eq!(form.values().person(1).unwrap().age, -3);
        assert_eq!(
            form.display_text(FieldPath::new(1, PersonField::Age)).unwrap(),
            "-3"
        );
    }

    #[tokio::test]
    async fn test_submit_hands_exact_values_to_sink() {
        let form = PeopleForm::new(Person::default(), abc());
        let expected = Submission { people: abc() };
        let mut sink = MockSubmitSink::new();
        let check = expected.clone();
        sink.expect_submit()
            .withf(move |s| *s == check)
            .times(1)
            .returning(|_| Ok(()));
        let submitted = form.submit(&sink).await.unwrap();
        assert_eq!(submitted, expected);
    }

    #[tokio::test]
    async fn test_add_remove_submit_scenario() {
        let mut form = default_form();
        form.add_person();
        assert_eq!(form.values().len(), 2);
        assert_eq!(form.values().person(1), Some(&Person::default()));
        form.remove_person(0).unwrap();
        assert_eq!(form.values().len(), 1);

        let mut sink = MockSubmitSink::new();
        sink.expect_submit().times(1).returning(|s| {
            assert_eq!(
                serde_json::to_value(s).unwrap(),
                serde_json::json!({"people": [{"first": "", "last": "", "age": 21}]})
            );
            Ok(())
        });
        form.submit(&sink).await.unwrap();
    }

    #[tokio::test]
    async fn test_submit_failure_leaves_form_untouched() {
        let form = PeopleForm::new(Person::default(), abc());
        let mut sink = MockSubmitSink::new();
        sink.expect_submit().returning(|_| {
            Err(SinkError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )))
        });
        assert!(form.submit(&sink).await.is_err());
        assert_eq!(form.values().snapshot().people, abc());
    }
}

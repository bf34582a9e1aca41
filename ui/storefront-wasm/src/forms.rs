//! Inline form validation.
//!
//! Error annotations sit directly after their field, so "is there an error"
//! is answered by the field's next sibling.

use crate::dom;
use crate::events::{Component, Listener};
use sf_behavior::validation::{self, Field, FieldError, FieldKind};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

pub struct FormValidator {
    listeners: Vec<Listener>,
}

impl FormValidator {
    pub fn bind(forms: &[HtmlFormElement]) -> FormValidator {
        let mut listeners = Vec::new();
        for form in forms {
            let submitted = form.clone();
            listeners.push(Listener::new(form, "submit", move |event| {
                if !validate_form(&submitted) {
                    event.prevent_default();
                }
            }));

            for field in dom::query_all_within(form, validation::FIELD_SELECTOR) {
                let blurred = field.clone();
                listeners.push(Listener::new(&field, "blur", move |_| {
                    validate_field(&blurred);
                }));
                let edited = field.clone();
                listeners.push(Listener::new(&field, "input", move |_| {
                    clear_field_error(&edited);
                }));
            }
        }
        FormValidator { listeners }
    }
}

/// Check every required field of `form`, annotating each failure.
/// Returns whether the form may be submitted.
pub fn validate_form(form: &HtmlFormElement) -> bool {
    let fields = dom::query_all_within(form, validation::REQUIRED_SELECTOR);
    let values: Vec<(String, FieldKind)> = fields.iter().map(|f| (field_value(f), field_kind(f))).collect();
    let report = validation::check_submission(values.iter().map(|(value, kind)| Field {
        kind: *kind,
        required: true,
        value,
    }));

    for (field, result) in fields.iter().zip(&report.results) {
        match result {
            Ok(()) => clear_field_error(field),
            Err(err) => show_field_error(field, *err),
        }
    }
    if report.blocks_submit() {
        tracing::debug!(errors = report.error_count(), "form submission blocked");
    }
    !report.blocks_submit()
}

/// Single-field check used on blur.
pub fn validate_field(field: &Element) -> bool {
    let value = field_value(field);
    let snapshot = Field {
        kind: field_kind(field),
        required: field.has_attribute("required"),
        value: &value,
    };
    match validation::check(&snapshot) {
        Ok(()) => {
            clear_field_error(field);
            true
        }
        Err(err) => {
            show_field_error(field, err);
            false
        }
    }
}

pub fn show_field_error(field: &Element, error: FieldError) {
    clear_field_error(field);
    dom::add_class(field, validation::INVALID_FIELD_CLASS);
    let Some(note) = dom::create_element("div") else {
        return;
    };
    note.set_class_name(validation::ERROR_ANNOTATION_CLASSES);
    dom::set_text(&note, &error.to_string());
    let _ = field.after_with_node_1(&note);
}

pub fn clear_field_error(field: &Element) {
    dom::remove_class(field, validation::INVALID_FIELD_CLASS);
    if let Some(note) = error_annotation(field) {
        note.remove();
    }
}

pub fn error_annotation(field: &Element) -> Option<Element> {
    field
        .next_element_sibling()
        .filter(|next| dom::has_class(next, validation::ERROR_CLASS))
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn field_kind(field: &Element) -> FieldKind {
    field
        .dyn_ref::<HtmlInputElement>()
        .map(|input| FieldKind::from_type(&input.type_()))
        .unwrap_or(FieldKind::Other)
}

impl Component for FormValidator {
    fn name(&self) -> &'static str {
        "forms"
    }

    fn listeners(&self) -> &[Listener] {
        &self.listeners
    }
}

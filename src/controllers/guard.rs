//! Scoped busy-state guards.
//!
//! Acquiring a guard puts a control into its busy state; dropping it restores
//! the control, on every exit path of the handler that holds it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::page::{CommentForm, Control};

/// Keeps a control disabled for its lifetime.
pub struct DisabledGuard<'a, C: Control + ?Sized> {
    control: &'a C,
}

impl<'a, C: Control + ?Sized> DisabledGuard<'a, C> {
    pub fn engage(control: &'a C) -> Self {
        control.set_disabled(true);
        Self { control }
    }
}

impl<C: Control + ?Sized> Drop for DisabledGuard<'_, C> {
    fn drop(&mut self) {
        self.control.set_disabled(false);
    }
}

/// Swaps a form's submit label for a busy label and disables the button.
pub struct SubmitGuard<'a, F: CommentForm + ?Sized> {
    form: &'a F,
    original_label: String,
}

impl<'a, F: CommentForm + ?Sized> SubmitGuard<'a, F> {
    pub fn engage(form: &'a F, busy_label: &str) -> Self {
        let original_label = form.submit_label();
        form.set_submit_label(busy_label);
        form.set_disabled(true);
        Self { form, original_label }
    }
}

impl<F: CommentForm + ?Sized> Drop for SubmitGuard<'_, F> {
    fn drop(&mut self) {
        self.form.set_submit_label(&self.original_label);
        self.form.set_disabled(false);
    }
}

//! Three-step signup wizard state.
//!
//! Steps are personal details, address, then credentials. Moving forward
//! requires the current step to validate; moving back is always allowed.

use crate::validation::{SignupForm, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupStep {
    Personal = 1,
    Address = 2,
    Credentials = 3,
}

impl SignupStep {
    pub const ALL: [SignupStep; 3] = [
        SignupStep::Personal,
        SignupStep::Address,
        SignupStep::Credentials,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            SignupStep::Personal => "Personal Details",
            SignupStep::Address => "Address",
            SignupStep::Credentials => "Set Password",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            SignupStep::Personal => Some(SignupStep::Address),
            SignupStep::Address => Some(SignupStep::Credentials),
            SignupStep::Credentials => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            SignupStep::Personal => None,
            SignupStep::Address => Some(SignupStep::Personal),
            SignupStep::Credentials => Some(SignupStep::Address),
        }
    }
}

/// What `next` decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The current step has errors; stay.
    Blocked,
    /// Moved on to the given step.
    Moved(SignupStep),
    /// The final step validated; the form is ready to submit.
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignupWizard {
    pub form: SignupForm,
    step: SignupStep,
    errors: ValidationErrors,
    attempted_next: bool,
}

impl Default for SignupWizard {
    fn default() -> Self {
        Self::new(SignupForm::default())
    }
}

impl SignupWizard {
    pub fn new(form: SignupForm) -> Self {
        Self {
            form,
            step: SignupStep::Personal,
            errors: ValidationErrors::default(),
            attempted_next: false,
        }
    }

    pub fn step(&self) -> SignupStep {
        self.step
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn attempted_next(&self) -> bool {
        self.attempted_next
    }

    /// Validate the current step and store its errors. Returns true if clean.
    pub fn validate_current(&mut self) -> bool {
        self.errors = match self.step {
            SignupStep::Personal => self.form.validate_personal(),
            SignupStep::Address => self.form.validate_address(),
            SignupStep::Credentials => self.form.validate_credentials(),
        };
        self.errors.is_empty()
    }

    pub fn next(&mut self) -> Advance {
        self.attempted_next = true;
        if !self.validate_current() {
            return Advance::Blocked;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                self.attempted_next = false;
                Advance::Moved(step)
            }
            None => Advance::Submit,
        }
    }

    /// Go back one step. Returns false on the first step, meaning the
    /// caller should leave the signup screen.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Jump via the step indicator: any earlier (or the same) step, or the
    /// immediate next one if the current step validates.
    pub fn go_to(&mut self, target: SignupStep) -> bool {
        if target <= self.step {
            self.step = target;
            return true;
        }
        if self.step.next() == Some(target) && self.validate_current() {
            self.step = target;
            self.attempted_next = false;
            return true;
        }
        false
    }

    /// Apply a field edit. Errors are refreshed only after a failed `next`.
    pub fn edit(&mut self, f: impl FnOnce(&mut SignupForm)) {
        f(&mut self.form);
        if self.attempted_next {
            self.validate_current();
        }
    }

    /// Progress bars between steps: (1→2 filled, 2→3 filled).
    pub fn completed_segments(&self) -> (bool, bool) {
        (
            self.step >= SignupStep::Address,
            self.step >= SignupStep::Credentials,
        )
    }
}

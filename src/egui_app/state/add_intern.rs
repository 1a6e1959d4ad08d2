use std::collections::BTreeMap;

/// Inputs collected by the add-intern form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Name,
    Email,
    Department,
    Role,
    StartDate,
}

impl DraftField {
    /// Form order.
    pub const ALL: [DraftField; 5] = [
        DraftField::Name,
        DraftField::Email,
        DraftField::Department,
        DraftField::Role,
        DraftField::StartDate,
    ];

    /// Caption above the input.
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Full Name",
            DraftField::Email => "Email Address",
            DraftField::Department => "Department",
            DraftField::Role => "Role",
            DraftField::StartDate => "Start Date",
        }
    }

    /// Placeholder shown while the input is empty.
    pub fn hint(self) -> &'static str {
        match self {
            DraftField::StartDate => "YYYY-MM-DD",
            DraftField::Email => "name@company.com",
            _ => "",
        }
    }
}

/// Uncommitted values typed into the add-intern form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InternDraft {
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub start_date: String,
}

impl InternDraft {
    /// Current text of one field.
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Department => &self.department,
            DraftField::Role => &self.role,
            DraftField::StartDate => &self.start_date,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
            DraftField::Department => &mut self.department,
            DraftField::Role => &mut self.role,
            DraftField::StartDate => &mut self.start_date,
        }
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        DraftField::ALL
            .iter()
            .all(|field| self.field(*field).is_empty())
    }
}

/// At most one message per field from the latest validation pass.
pub type FieldErrors = BTreeMap<DraftField, &'static str>;

/// Lifecycle of one add-intern submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    /// Waiting on the simulated save.
    Submitting,
    /// Save finished; the success banner is visible until reset.
    Succeeded,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddInternState {
    pub draft: InternDraft,
    pub errors: FieldErrors,
    pub phase: FormPhase,
}

impl AddInternState {
    /// Validation message for `field`, if it failed.
    pub fn error(&self, field: DraftField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }
}

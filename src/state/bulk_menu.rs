//! Open/closed state of the bulk toolbar's status menu.
//!
//! `toggle` flips the flag; choosing an action or dismissing from outside
//! always forces it closed.

#[cfg(test)]
#[path = "bulk_menu_test.rs"]
mod bulk_menu_test;

use crate::state::student::StudentStatus;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BulkMenu {
    open: bool,
}

impl BulkMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Close the menu and return the status the action assigns.
    pub fn choose(&mut self, action: BulkStatusAction) -> StudentStatus {
        self.open = false;
        action.status()
    }
}

/// Entries in the status menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkStatusAction {
    Activate,
    Deactivate,
}

impl BulkStatusAction {
    pub const VARIANTS: [Self; 2] = [Self::Activate, Self::Deactivate];

    pub fn label(self) -> &'static str {
        match self {
            Self::Activate => "Activate",
            Self::Deactivate => "Deactivate",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Activate => "check",
            Self::Deactivate => "ban",
        }
    }

    pub fn status(self) -> StudentStatus {
        match self {
            Self::Activate => StudentStatus::Active,
            Self::Deactivate => StudentStatus::Inactive,
        }
    }
}

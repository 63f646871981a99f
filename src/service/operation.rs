use std::fmt;
use std::str::FromStr;

use super::controller::IconVisibilityController;
use super::system::{PreferenceStore, ProcessControl};
use crate::error::{Error, Result};

/// The operations reachable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Show,
    Hide,
    Toggle,
}

impl Default for Operation {
    fn default() -> Self {
        Operation::Toggle
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "show" => Ok(Operation::Show),
            "hide" => Ok(Operation::Hide),
            "toggle" => Ok(Operation::Toggle),
            _ => Err(Error::UnknownOperation(s.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Show => "show",
            Operation::Hide => "hide",
            Operation::Toggle => "toggle",
        };
        f.write_str(name)
    }
}

impl Operation {
    /// Runs the operation, returning the visibility afterwards.
    pub fn apply<S, P>(self, controller: &IconVisibilityController<S, P>) -> Result<bool>
    where
        S: PreferenceStore,
        P: ProcessControl,
    {
        log::debug!("running {}", self);
        match self {
            Operation::Show => controller.show(),
            Operation::Hide => controller.hide(),
            Operation::Toggle => controller.toggle(),
        }
    }
}

//! Helpers shared by every entity aggregate

pub mod lenient;

use serde::{Deserialize, Serialize};

/// JSON body of the recipe/ingredient status toggle (`PUT /{kind}/{id}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: bool,
}

impl StatusUpdate {
    /// Body that flips `current`
    pub fn toggled(current: bool) -> Self {
        Self { status: !current }
    }
}

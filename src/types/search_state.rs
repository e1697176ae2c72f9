use serde::{Deserialize, Serialize};

use super::lookup_result::LookupResult;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success {
        result: LookupResult,
        dialog_open: bool,
    },
    Empty,
    Error {
        message: String,
    },
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    pub fn result(&self) -> Option<&LookupResult> {
        match self {
            SearchState::Success { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn is_dialog_open(&self) -> bool {
        matches!(
            self,
            SearchState::Success {
                dialog_open: true,
                ..
            }
        )
    }
}

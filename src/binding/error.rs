// Copyright 2025 Jakub Hlavnicka
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Why a control could not be wired up. Each one only disables that control.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("no panel element for parameter '{id}'")]
    MissingElement { id: &'static str },
    #[error("panel element for '{id}' has no indicator")]
    MissingIndicator { id: &'static str },
    #[error("no value readout '{id}-value'")]
    MissingReadout { id: &'static str },
    #[error("host has no slider state for '{id}'")]
    MissingSliderState { id: &'static str },
    #[error("host has no toggle state for '{id}'")]
    MissingToggleState { id: &'static str },
}

impl BindError {
    pub fn id(&self) -> &'static str {
        match self {
            BindError::MissingElement { id }
            | BindError::MissingIndicator { id }
            | BindError::MissingReadout { id }
            | BindError::MissingSliderState { id }
            | BindError::MissingToggleState { id } => id,
        }
    }
}

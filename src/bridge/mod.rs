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

//! The editor's view of the host: per-parameter state objects that read and
//! write normalized values. The host owns the values, the editor only asks.

pub mod plugin_bridge;
pub mod preview;

pub use plugin_bridge::PluginBridge;
pub use preview::PreviewBridge;

use crate::params::PARAM_DESCRIPTORS;

/// Host-owned proxy for one continuous parameter.
pub trait SliderState {
    fn normalized_value(&self) -> f32;
    fn set_normalized_value(&self, normalized: f32);

    /// Brackets a drag so the host records a single automation gesture.
    fn begin_gesture(&self) {}
    fn end_gesture(&self) {}
}

/// Host-owned proxy for one boolean parameter.
pub trait ToggleState {
    fn value(&self) -> bool;
    fn set_value(&self, value: bool);
}

pub trait HostBridge {
    fn slider_state(&self, id: &str) -> Option<Box<dyn SliderState + '_>>;
    fn toggle_state(&self, id: &str) -> Option<Box<dyn ToggleState + '_>>;
}

/// Decided once, when the editor binds its controls.
pub enum BridgeMode {
    Host,
    Preview(PreviewBridge),
}

impl BridgeMode {
    pub fn detect(host: Option<&dyn HostBridge>) -> Self {
        match host {
            Some(_) => {
                log::info!("Host bridge detected");
                BridgeMode::Host
            }
            None => {
                log::warn!("Host bridge not detected - running in preview mode");
                BridgeMode::Preview(PreviewBridge::from_descriptors(&PARAM_DESCRIPTORS))
            }
        }
    }

    /// The bridge to talk to for this frame.
    pub fn select<'a>(&'a self, host: Option<&'a dyn HostBridge>) -> Option<&'a dyn HostBridge> {
        match self {
            BridgeMode::Host => host,
            BridgeMode::Preview(preview) => Some(preview),
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, BridgeMode::Preview(_))
    }
}

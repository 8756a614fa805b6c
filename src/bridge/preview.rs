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

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{HostBridge, SliderState, ToggleState};
use crate::params::descriptor::{clamp_normalized, ParamDescriptor};

#[derive(Default)]
struct PreviewValues {
    sliders: HashMap<&'static str, f32>,
    toggles: HashMap<&'static str, bool>,
    open_gestures: usize,
}

/// In-memory parameter store standing in for an absent host.
#[derive(Default)]
pub struct PreviewBridge {
    values: Mutex<PreviewValues>,
}

impl PreviewBridge {
    pub fn from_descriptors(descriptors: &[ParamDescriptor]) -> Self {
        let mut values = PreviewValues::default();
        for descriptor in descriptors {
            match descriptor {
                ParamDescriptor::Slider(spec) => {
                    values.sliders.insert(spec.id, spec.default_normalized());
                }
                ParamDescriptor::Toggle(spec) => {
                    values.toggles.insert(spec.id, spec.default);
                }
            }
        }
        Self {
            values: Mutex::new(values),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PreviewValues> {
        // Nothing here can be left half-written, so a poisoned lock is still usable
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Simulates a change coming from the host side (automation, preset load).
    pub fn host_set_slider(&self, id: &str, normalized: f32) {
        if let Some(value) = self.lock().sliders.get_mut(id) {
            *value = clamp_normalized(normalized);
        }
    }

    pub fn host_set_toggle(&self, id: &str, value: bool) {
        if let Some(current) = self.lock().toggles.get_mut(id) {
            *current = value;
        }
    }

    pub fn slider(&self, id: &str) -> Option<f32> {
        self.lock().sliders.get(id).copied()
    }

    pub fn toggle(&self, id: &str) -> Option<bool> {
        self.lock().toggles.get(id).copied()
    }

    /// Drags that have begun but not yet ended.
    pub fn open_gestures(&self) -> usize {
        self.lock().open_gestures
    }
}

struct PreviewSlider<'a> {
    bridge: &'a PreviewBridge,
    id: &'static str,
}

impl SliderState for PreviewSlider<'_> {
    fn normalized_value(&self) -> f32 {
        self.bridge.lock().sliders.get(self.id).copied().unwrap_or(0.0)
    }

    fn set_normalized_value(&self, normalized: f32) {
        self.bridge.lock().sliders.insert(self.id, clamp_normalized(normalized));
    }

    fn begin_gesture(&self) {
        self.bridge.lock().open_gestures += 1;
    }

    fn end_gesture(&self) {
        let mut values = self.bridge.lock();
        values.open_gestures = values.open_gestures.saturating_sub(1);
    }
}

struct PreviewToggle<'a> {
    bridge: &'a PreviewBridge,
    id: &'static str,
}

impl ToggleState for PreviewToggle<'_> {
    fn value(&self) -> bool {
        self.bridge.lock().toggles.get(self.id).copied().unwrap_or(false)
    }

    fn set_value(&self, value: bool) {
        self.bridge.lock().toggles.insert(self.id, value);
    }
}

impl HostBridge for PreviewBridge {
    fn slider_state(&self, id: &str) -> Option<Box<dyn SliderState + '_>> {
        let (&key, _) = self.lock().sliders.get_key_value(id)?;
        Some(Box::new(PreviewSlider { bridge: self, id: key }))
    }

    fn toggle_state(&self, id: &str) -> Option<Box<dyn ToggleState + '_>> {
        let (&key, _) = self.lock().toggles.get_key_value(id)?;
        Some(Box::new(PreviewToggle { bridge: self, id: key }))
    }
}

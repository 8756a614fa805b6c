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

pub mod error;
pub mod slider;
pub mod toggle;

pub use error::BindError;
pub use slider::SliderBinding;
pub use toggle::ToggleBinding;

use crate::bridge::{BridgeMode, HostBridge, SliderState, ToggleState};
use crate::gui::layout::PanelLayout;
use crate::params::{ParamDescriptor, PARAM_DESCRIPTORS};

/// Every control on the panel, bound once when the editor opens.
/// Controls that fail to bind are logged and left out, the rest keep working.
pub struct ControlSet {
    mode: BridgeMode,
    sliders: Vec<SliderBinding>,
    toggles: Vec<ToggleBinding>,
    failures: Vec<BindError>,
}

impl ControlSet {
    pub fn bind(layout: &PanelLayout, host: Option<&dyn HostBridge>) -> Self {
        Self::bind_descriptors(&PARAM_DESCRIPTORS, layout, host)
    }

    pub fn bind_descriptors(
        descriptors: &[ParamDescriptor],
        layout: &PanelLayout,
        host: Option<&dyn HostBridge>,
    ) -> Self {
        log::info!("Binding {} controls", descriptors.len());

        let mode = BridgeMode::detect(host);
        let mut sliders = Vec::new();
        let mut toggles = Vec::new();
        let mut failures = Vec::new();

        if let Some(bridge) = mode.select(host) {
            for descriptor in descriptors {
                let bound = match descriptor {
                    ParamDescriptor::Slider(spec) => {
                        SliderBinding::bind(spec, layout, bridge).map(|b| sliders.push(b))
                    }
                    ParamDescriptor::Toggle(spec) => {
                        ToggleBinding::bind(spec, layout, bridge).map(|b| toggles.push(b))
                    }
                };
                if let Err(err) = bound {
                    log::error!("Control '{}' left unbound: {}", err.id(), err);
                    failures.push(err);
                }
            }
        }

        log::info!(
            "Bound {} knobs and {} switches ({} failed)",
            sliders.len(),
            toggles.len(),
            failures.len()
        );

        Self {
            mode,
            sliders,
            toggles,
            failures,
        }
    }

    pub fn is_preview(&self) -> bool {
        self.mode.is_preview()
    }

    pub fn sliders(&self) -> &[SliderBinding] {
        &self.sliders
    }

    pub fn toggles(&self) -> &[ToggleBinding] {
        &self.toggles
    }

    pub fn failures(&self) -> &[BindError] {
        &self.failures
    }

    /// Ids of knobs with a drag in progress.
    pub fn open_drags(&self) -> Vec<&'static str> {
        self.sliders
            .iter()
            .filter(|binding| binding.is_dragging())
            .map(|binding| binding.id())
            .collect()
    }

    /// Runs `f` for every bound knob with its host state for this frame.
    pub fn for_each_slider(
        &mut self,
        host: Option<&dyn HostBridge>,
        mut f: impl FnMut(&mut SliderBinding, &dyn SliderState),
    ) {
        let Some(bridge) = self.mode.select(host) else {
            return;
        };
        for binding in self.sliders.iter_mut() {
            if let Some(state) = bridge.slider_state(binding.id()) {
                f(binding, &*state);
            }
        }
    }

    pub fn for_each_toggle(
        &mut self,
        host: Option<&dyn HostBridge>,
        mut f: impl FnMut(&mut ToggleBinding, &dyn ToggleState),
    ) {
        let Some(bridge) = self.mode.select(host) else {
            return;
        };
        for binding in self.toggles.iter_mut() {
            if let Some(state) = bridge.toggle_state(binding.id()) {
                f(binding, &*state);
            }
        }
    }

    /// Reconciles every control with the host. Returns how many changed.
    pub fn sync(&mut self, host: Option<&dyn HostBridge>) -> usize {
        let mut changed = 0;
        self.for_each_slider(host, |binding, state| {
            if binding.sync(state) {
                changed += 1;
            }
        });
        self.for_each_toggle(host, |binding, state| {
            if binding.sync(state) {
                changed += 1;
            }
        });
        changed
    }
}

/// Ends host gestures left open by an editor that closed mid-drag.
/// Returns how many were ended.
pub fn end_abandoned_gestures(bridge: &dyn HostBridge, ids: &mut Vec<&'static str>) -> usize {
    let mut ended = 0;
    for id in ids.drain(..) {
        if let Some(state) = bridge.slider_state(id) {
            log::debug!("Ending gesture on '{}' left open by a closed editor", id);
            state.end_gesture();
            ended += 1;
        }
    }
    ended
}

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

use super::BindError;
use crate::bridge::{HostBridge, SliderState};
use crate::constants::{DRAG_SENSITIVITY, KNOB_MIN_ANGLE, KNOB_RANGE, SYNC_EPSILON};
use crate::gui::layout::PanelLayout;
use crate::params::descriptor::{clamp_normalized, SliderSpec};

/// Knob <-> continuous parameter. Drags are relative: the value is taken
/// from the host on press, then every pointer move nudges it by the pixels
/// travelled since the last move. Host writes may land later than the next
/// move, so the drag never reads the host back until release.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderBinding {
    spec: &'static SliderSpec,
    displayed: f32,
    // pointer y of the previous move, Some while a drag is in progress
    last_y: Option<f32>,
}

impl SliderBinding {
    pub fn bind(
        spec: &'static SliderSpec,
        layout: &PanelLayout,
        bridge: &dyn HostBridge,
    ) -> Result<Self, BindError> {
        let slot = layout
            .slot(spec.id)
            .ok_or(BindError::MissingElement { id: spec.id })?;
        if slot.indicator.is_none() {
            return Err(BindError::MissingIndicator { id: spec.id });
        }
        if slot.readout.is_none() {
            return Err(BindError::MissingReadout { id: spec.id });
        }
        let state = bridge
            .slider_state(spec.id)
            .ok_or(BindError::MissingSliderState { id: spec.id })?;

        Ok(Self {
            spec,
            displayed: clamp_normalized(state.normalized_value()),
            last_y: None,
        })
    }

    pub fn id(&self) -> &'static str {
        self.spec.id
    }

    pub fn spec(&self) -> &'static SliderSpec {
        self.spec
    }

    /// Normalized value currently drawn.
    pub fn displayed(&self) -> f32 {
        self.displayed
    }

    pub fn is_dragging(&self) -> bool {
        self.last_y.is_some()
    }

    pub fn press(&mut self, y: f32, state: &dyn SliderState) {
        if self.last_y.is_none() {
            state.begin_gesture();
            self.displayed = clamp_normalized(state.normalized_value());
        }
        self.last_y = Some(y);
    }

    /// Returns the normalized value sent to the host, None when not dragging.
    pub fn drag_to(&mut self, y: f32, state: &dyn SliderState) -> Option<f32> {
        let last_y = self.last_y.as_mut()?;
        // screen y grows downwards, dragging up raises the value
        let delta = *last_y - y;
        *last_y = y;

        let normalized = clamp_normalized(self.displayed + delta * DRAG_SENSITIVITY);
        state.set_normalized_value(normalized);
        self.displayed = normalized;
        Some(normalized)
    }

    /// Ends the drag, whatever its state. Returns whether one was in progress.
    pub fn release(&mut self, state: &dyn SliderState) -> bool {
        if self.last_y.take().is_some() {
            state.end_gesture();
            true
        } else {
            false
        }
    }

    /// Adopts the host's value if it moved. Returns true when the display changed.
    /// Skipped mid-drag, the host may still hold a value older than the display.
    pub fn sync(&mut self, state: &dyn SliderState) -> bool {
        if self.is_dragging() {
            return false;
        }
        let host = clamp_normalized(state.normalized_value());
        if (host - self.displayed).abs() <= SYNC_EPSILON {
            return false;
        }
        log::debug!(
            "{} changed by host: {} -> {}",
            self.spec.id,
            self.spec.format_normalized(self.displayed),
            self.spec.format_normalized(host)
        );
        self.displayed = host;
        true
    }

    /// Indicator rotation in degrees, 0 pointing straight up.
    pub fn indicator_angle(&self) -> f32 {
        KNOB_MIN_ANGLE + self.displayed * KNOB_RANGE
    }

    pub fn readout(&self) -> String {
        self.spec.format_normalized(self.displayed)
    }
}

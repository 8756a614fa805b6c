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
use crate::bridge::{HostBridge, ToggleState};
use crate::gui::layout::PanelLayout;
use crate::params::descriptor::ToggleSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleBinding {
    spec: &'static ToggleSpec,
    displayed: bool,
}

impl ToggleBinding {
    pub fn bind(
        spec: &'static ToggleSpec,
        layout: &PanelLayout,
        bridge: &dyn HostBridge,
    ) -> Result<Self, BindError> {
        let slot = layout
            .slot(spec.id)
            .ok_or(BindError::MissingElement { id: spec.id })?;
        if slot.indicator.is_none() {
            return Err(BindError::MissingIndicator { id: spec.id });
        }
        let state = bridge
            .toggle_state(spec.id)
            .ok_or(BindError::MissingToggleState { id: spec.id })?;

        Ok(Self {
            spec,
            displayed: state.value(),
        })
    }

    pub fn id(&self) -> &'static str {
        self.spec.id
    }

    pub fn spec(&self) -> &'static ToggleSpec {
        self.spec
    }

    pub fn is_active(&self) -> bool {
        self.displayed
    }

    /// Flips the host's current value. Returns the value sent.
    pub fn click(&mut self, state: &dyn ToggleState) -> bool {
        let value = !state.value();
        state.set_value(value);
        self.displayed = value;
        value
    }

    pub fn sync(&mut self, state: &dyn ToggleState) -> bool {
        let host = state.value();
        if host == self.displayed {
            return false;
        }
        log::debug!("{} changed by host: {}", self.spec.id, host);
        self.displayed = host;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::PreviewBridge;
    use crate::params::descriptor::{PITCH_ENABLE, SATURATION, TEMPO_SYNC};
    use crate::params::{ParamDescriptor, PARAM_DESCRIPTORS};

    fn setup() -> (PanelLayout, PreviewBridge) {
        (
            PanelLayout::reference(),
            PreviewBridge::from_descriptors(&PARAM_DESCRIPTORS),
        )
    }

    #[test]
    fn test_click_flips_host_value() {
        let (layout, bridge) = setup();
        let mut binding = ToggleBinding::bind(&PITCH_ENABLE, &layout, &bridge).expect("bind");
        let state = bridge.toggle_state("pitchEnable").expect("state");

        assert!(!binding.is_active());
        assert!(binding.click(&*state));
        assert_eq!(bridge.toggle("pitchEnable"), Some(true));
        assert!(binding.is_active());
    }

    #[test]
    fn test_double_click_restores_state() {
        let (layout, bridge) = setup();
        for initial in [false, true] {
            bridge.host_set_toggle("tempoSync", initial);
            let mut binding = ToggleBinding::bind(&TEMPO_SYNC, &layout, &bridge).expect("bind");
            let state = bridge.toggle_state("tempoSync").expect("state");

            binding.click(&*state);
            binding.click(&*state);

            assert_eq!(bridge.toggle("tempoSync"), Some(initial));
            assert_eq!(binding.is_active(), initial);
        }
    }

    #[test]
    fn test_click_reads_host_not_display() {
        let (layout, bridge) = setup();
        let mut binding = ToggleBinding::bind(&TEMPO_SYNC, &layout, &bridge).expect("bind");
        let state = bridge.toggle_state("tempoSync").expect("state");

        // host flipped it behind our back, before the next sync
        bridge.host_set_toggle("tempoSync", true);
        assert!(!binding.click(&*state));
        assert_eq!(bridge.toggle("tempoSync"), Some(false));
    }

    #[test]
    fn test_sync_follows_host() {
        let (layout, bridge) = setup();
        let mut binding = ToggleBinding::bind(&PITCH_ENABLE, &layout, &bridge).expect("bind");
        let state = bridge.toggle_state("pitchEnable").expect("state");

        assert!(!binding.sync(&*state));
        bridge.host_set_toggle("pitchEnable", true);
        assert!(binding.sync(&*state));
        assert!(binding.is_active());
    }

    #[test]
    fn test_bind_errors() {
        let (layout, bridge) = setup();
        let empty = PanelLayout::from_slots(Vec::new());
        assert_eq!(
            ToggleBinding::bind(&PITCH_ENABLE, &empty, &bridge),
            Err(BindError::MissingElement { id: "pitchEnable" })
        );

        let no_toggles = PreviewBridge::from_descriptors(&[ParamDescriptor::Slider(&SATURATION)]);
        assert_eq!(
            ToggleBinding::bind(&PITCH_ENABLE, &layout, &no_toggles),
            Err(BindError::MissingToggleState { id: "pitchEnable" })
        );
    }
}

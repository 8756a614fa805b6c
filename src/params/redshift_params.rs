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

use std::sync::Arc;
use nih_plug::prelude::*;
use nih_plug_egui::EguiState;

use crate::constants::{PANEL_HEIGHT, PANEL_WIDTH};
use super::descriptor::{self, SliderSpec, ToggleSpec};

#[derive(Params)]
pub struct RedShiftParams {
    #[persist = "editor-state"]
    pub editor_state: Arc<EguiState>,

    #[id = "saturation"]
    pub saturation: FloatParam,
    #[id = "dopplerShift"]
    pub doppler_shift: FloatParam,
    #[id = "delayTime"]
    pub delay_time: FloatParam,
    #[id = "feedback"]
    pub feedback: FloatParam,
    #[id = "distortionLevel"]
    pub distortion_level: FloatParam,
    #[id = "masterOutput"]
    pub master_output: FloatParam,

    #[id = "pitchEnable"]
    pub pitch_enable: BoolParam,
    #[id = "tempoSync"]
    pub tempo_sync: BoolParam,
}

/// Linear over the descriptor range, with the editor's readout as display text.
fn knob_param(spec: &'static SliderSpec) -> FloatParam {
    FloatParam::new(
        spec.name,
        spec.default,
        FloatRange::Linear {
            min: spec.min,
            max: spec.max,
        },
    )
    .with_step_size(0.1)
    .with_value_to_string(Arc::new(move |value| spec.format_value(value)))
    .with_string_to_value(Arc::new(move |text| spec.parse_value(text)))
}

fn switch_param(spec: &'static ToggleSpec) -> BoolParam {
    BoolParam::new(spec.name, spec.default)
}

impl Default for RedShiftParams {
    fn default() -> Self {
        Self {
            editor_state: EguiState::from_size(PANEL_WIDTH, PANEL_HEIGHT),

            saturation: knob_param(&descriptor::SATURATION),
            doppler_shift: knob_param(&descriptor::DOPPLER_SHIFT),
            delay_time: knob_param(&descriptor::DELAY_TIME),
            feedback: knob_param(&descriptor::FEEDBACK),
            distortion_level: knob_param(&descriptor::DISTORTION_LEVEL),
            master_output: knob_param(&descriptor::MASTER_OUTPUT),

            pitch_enable: switch_param(&descriptor::PITCH_ENABLE),
            tempo_sync: switch_param(&descriptor::TEMPO_SYNC),
        }
    }
}

impl RedShiftParams {
    pub fn slider(&self, id: &str) -> Option<&FloatParam> {
        match id {
            "saturation" => Some(&self.saturation),
            "dopplerShift" => Some(&self.doppler_shift),
            "delayTime" => Some(&self.delay_time),
            "feedback" => Some(&self.feedback),
            "distortionLevel" => Some(&self.distortion_level),
            "masterOutput" => Some(&self.master_output),
            _ => None,
        }
    }

    pub fn toggle(&self, id: &str) -> Option<&BoolParam> {
        match id {
            "pitchEnable" => Some(&self.pitch_enable),
            "tempoSync" => Some(&self.tempo_sync),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::descriptor::{ParamDescriptor, PARAM_DESCRIPTORS};

    #[test]
    fn test_every_descriptor_has_a_param() {
        let params = RedShiftParams::default();
        for descriptor in PARAM_DESCRIPTORS.iter() {
            match descriptor {
                ParamDescriptor::Slider(spec) => {
                    assert!(params.slider(spec.id).is_some(), "missing slider {}", spec.id);
                    assert!(params.toggle(spec.id).is_none());
                }
                ParamDescriptor::Toggle(spec) => {
                    assert!(params.toggle(spec.id).is_some(), "missing toggle {}", spec.id);
                    assert!(params.slider(spec.id).is_none());
                }
            }
        }
    }

    #[test]
    fn test_param_map_ids_match_descriptors() {
        let params = RedShiftParams::default();
        let ids: Vec<String> = params.param_map().into_iter().map(|(id, _, _)| id).collect();
        for descriptor in PARAM_DESCRIPTORS.iter() {
            assert!(ids.iter().any(|id| id == descriptor.id()), "{} not exposed", descriptor.id());
        }
        assert_eq!(ids.len(), PARAM_DESCRIPTORS.len());
    }

    #[test]
    fn test_defaults_follow_descriptors() {
        let params = RedShiftParams::default();
        assert_eq!(params.delay_time.value(), 250.0);
        assert_eq!(params.distortion_level.value(), -12.0);
        assert!(!params.pitch_enable.value());
        assert!(!params.tempo_sync.value());
        assert!((params.delay_time.unmodulated_normalized_value() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_host_display_matches_readout() {
        let params = RedShiftParams::default();
        assert_eq!(params.saturation.normalized_value_to_string(0.5, true), "6.0 dB");
        assert_eq!(params.feedback.string_to_normalized_value("95.0 %"), Some(1.0));
    }
}

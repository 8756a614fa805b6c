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

use nih_plug::prelude::*;

use super::{HostBridge, SliderState, ToggleState};
use crate::params::descriptor::clamp_normalized;
use crate::params::RedShiftParams;

/// Host bridge over the plugin wrapper's `ParamSetter`, valid for one editor frame.
pub struct PluginBridge<'a> {
    params: &'a RedShiftParams,
    setter: &'a ParamSetter<'a>,
}

impl<'a> PluginBridge<'a> {
    pub fn new(params: &'a RedShiftParams, setter: &'a ParamSetter<'a>) -> Self {
        Self { params, setter }
    }
}

struct HostSlider<'a> {
    param: &'a FloatParam,
    setter: &'a ParamSetter<'a>,
}

impl SliderState for HostSlider<'_> {
    fn normalized_value(&self) -> f32 {
        self.param.unmodulated_normalized_value()
    }

    fn set_normalized_value(&self, normalized: f32) {
        self.setter
            .set_parameter_normalized(self.param, clamp_normalized(normalized));
    }

    fn begin_gesture(&self) {
        self.setter.begin_set_parameter(self.param);
    }

    fn end_gesture(&self) {
        self.setter.end_set_parameter(self.param);
    }
}

struct HostToggle<'a> {
    param: &'a BoolParam,
    setter: &'a ParamSetter<'a>,
}

impl ToggleState for HostToggle<'_> {
    fn value(&self) -> bool {
        self.param.value()
    }

    fn set_value(&self, value: bool) {
        self.setter.begin_set_parameter(self.param);
        self.setter.set_parameter(self.param, value);
        self.setter.end_set_parameter(self.param);
    }
}

impl HostBridge for PluginBridge<'_> {
    fn slider_state(&self, id: &str) -> Option<Box<dyn SliderState + '_>> {
        let param = self.params.slider(id)?;
        Some(Box::new(HostSlider {
            param,
            setter: self.setter,
        }))
    }

    fn toggle_state(&self, id: &str) -> Option<Box<dyn ToggleState + '_>> {
        let param = self.params.toggle(id)?;
        Some(Box::new(HostToggle {
            param,
            setter: self.setter,
        }))
    }
}

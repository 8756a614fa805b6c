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

//! The fixed parameter surface shared by the host-facing parameters and the editor.

use std::collections::HashSet;

/// A continuous parameter shown as a knob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub unit: &'static str,
    pub decimals: usize,
}

/// A boolean parameter shown as a switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDescriptor {
    Slider(&'static SliderSpec),
    Toggle(&'static ToggleSpec),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DescriptorError {
    #[error("parameter id '{0}' is declared more than once")]
    DuplicateId(&'static str),
    #[error("parameter '{id}' has an empty range ({min}..{max})")]
    EmptyRange { id: &'static str, min: f32, max: f32 },
}

pub static SATURATION: SliderSpec = SliderSpec {
    id: "saturation",
    name: "Saturation",
    min: -12.0,
    max: 24.0,
    default: 0.0,
    unit: "dB",
    decimals: 1,
};

pub static DOPPLER_SHIFT: SliderSpec = SliderSpec {
    id: "dopplerShift",
    name: "Doppler Shift",
    min: -50.0,
    max: 50.0,
    default: 0.0,
    unit: "%",
    decimals: 1,
};

pub static DELAY_TIME: SliderSpec = SliderSpec {
    id: "delayTime",
    name: "Delay Time",
    min: 0.0,
    max: 2500.0,
    default: 250.0,
    unit: "ms",
    decimals: 1,
};

pub static FEEDBACK: SliderSpec = SliderSpec {
    id: "feedback",
    name: "Feedback",
    min: 0.0,
    max: 95.0,
    default: 0.0,
    unit: "%",
    decimals: 1,
};

pub static DISTORTION_LEVEL: SliderSpec = SliderSpec {
    id: "distortionLevel",
    name: "Distortion Level",
    min: -60.0,
    max: 0.0,
    default: -12.0,
    unit: "dB",
    decimals: 1,
};

pub static MASTER_OUTPUT: SliderSpec = SliderSpec {
    id: "masterOutput",
    name: "Master Output",
    min: -60.0,
    max: 12.0,
    default: 0.0,
    unit: "dB",
    decimals: 1,
};

pub static PITCH_ENABLE: ToggleSpec = ToggleSpec {
    id: "pitchEnable",
    name: "Pitch Enable",
    default: false,
};

pub static TEMPO_SYNC: ToggleSpec = ToggleSpec {
    id: "tempoSync",
    name: "Tempo Sync",
    default: false,
};

pub static PARAM_DESCRIPTORS: [ParamDescriptor; 8] = [
    ParamDescriptor::Slider(&SATURATION),
    ParamDescriptor::Slider(&DOPPLER_SHIFT),
    ParamDescriptor::Slider(&DELAY_TIME),
    ParamDescriptor::Slider(&FEEDBACK),
    ParamDescriptor::Slider(&DISTORTION_LEVEL),
    ParamDescriptor::Slider(&MASTER_OUTPUT),
    ParamDescriptor::Toggle(&PITCH_ENABLE),
    ParamDescriptor::Toggle(&TEMPO_SYNC),
];

/// Clamp into [0, 1]. NaN collapses to 0.
pub fn clamp_normalized(normalized: f32) -> f32 {
    if normalized.is_nan() {
        0.0
    } else {
        normalized.clamp(0.0, 1.0)
    }
}

impl SliderSpec {
    pub fn normalized_to_value(&self, normalized: f32) -> f32 {
        self.min + normalized * (self.max - self.min)
    }

    pub fn value_to_normalized(&self, value: f32) -> f32 {
        clamp_normalized((value - self.min) / (self.max - self.min))
    }

    pub fn default_normalized(&self) -> f32 {
        self.value_to_normalized(self.default)
    }

    /// `"6.0 dB"` style text, shared by the readout and the host's display string.
    pub fn format_value(&self, value: f32) -> String {
        format!("{:.*} {}", self.decimals, value, self.unit)
    }

    pub fn format_normalized(&self, normalized: f32) -> String {
        self.format_value(self.normalized_to_value(normalized))
    }

    /// Inverse of `format_value`, the unit suffix is optional.
    pub fn parse_value(&self, text: &str) -> Option<f32> {
        let text = text.trim();
        let number = text.strip_suffix(self.unit).unwrap_or(text).trim();
        number.parse::<f32>().ok()
    }
}

impl ParamDescriptor {
    pub fn id(&self) -> &'static str {
        match self {
            ParamDescriptor::Slider(spec) => spec.id,
            ParamDescriptor::Toggle(spec) => spec.id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ParamDescriptor::Slider(spec) => spec.name,
            ParamDescriptor::Toggle(spec) => spec.name,
        }
    }
}

pub fn find(id: &str) -> Option<ParamDescriptor> {
    PARAM_DESCRIPTORS.iter().copied().find(|d| d.id() == id)
}

pub fn validate(descriptors: &[ParamDescriptor]) -> Result<(), DescriptorError> {
    let mut seen = HashSet::new();
    for descriptor in descriptors {
        if !seen.insert(descriptor.id()) {
            return Err(DescriptorError::DuplicateId(descriptor.id()));
        }
        if let ParamDescriptor::Slider(spec) = descriptor {
            if !(spec.min < spec.max) {
                return Err(DescriptorError::EmptyRange {
                    id: spec.id,
                    min: spec.min,
                    max: spec.max,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn slider_specs() -> Vec<&'static SliderSpec> {
        PARAM_DESCRIPTORS
            .iter()
            .filter_map(|d| match d {
                ParamDescriptor::Slider(spec) => Some(*spec),
                ParamDescriptor::Toggle(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_saturation_midpoint_reads_six_db() {
        assert_eq!(SATURATION.format_normalized(0.5), "6.0 dB");
    }

    #[test]
    fn test_readout_units() {
        assert_eq!(DELAY_TIME.format_normalized(0.0), "0.0 ms");
        assert_eq!(DELAY_TIME.format_normalized(1.0), "2500.0 ms");
        assert_eq!(DOPPLER_SHIFT.format_normalized(0.25), "-25.0 %");
        assert_eq!(MASTER_OUTPUT.format_normalized(0.0), "-60.0 dB");
    }

    #[test]
    fn test_surface_is_valid() {
        assert_eq!(validate(&PARAM_DESCRIPTORS), Ok(()));
        assert_eq!(slider_specs().len(), 6);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let descriptors = [
            ParamDescriptor::Slider(&FEEDBACK),
            ParamDescriptor::Toggle(&TEMPO_SYNC),
            ParamDescriptor::Slider(&FEEDBACK),
        ];
        assert_eq!(
            validate(&descriptors),
            Err(DescriptorError::DuplicateId("feedback"))
        );
    }

    #[test]
    fn test_empty_range_rejected() {
        static FLAT: SliderSpec = SliderSpec {
            id: "flat",
            name: "Flat",
            min: 1.0,
            max: 1.0,
            default: 1.0,
            unit: "",
            decimals: 0,
        };
        assert!(matches!(
            validate(&[ParamDescriptor::Slider(&FLAT)]),
            Err(DescriptorError::EmptyRange { id: "flat", .. })
        ));
    }

    #[test]
    fn test_find() {
        assert_eq!(find("tempoSync"), Some(ParamDescriptor::Toggle(&TEMPO_SYNC)));
        assert_eq!(find("masterOutput").map(|d| d.name()), Some("Master Output"));
        assert_eq!(find("stereoWidth"), None);
    }

    #[test]
    fn test_clamp_normalized() {
        assert_eq!(clamp_normalized(-3.0), 0.0);
        assert_eq!(clamp_normalized(7.5), 1.0);
        assert_eq!(clamp_normalized(0.42), 0.42);
        assert_eq!(clamp_normalized(f32::NAN), 0.0);
    }

    #[test]
    fn test_default_normalized() {
        assert!((DELAY_TIME.default_normalized() - 0.1).abs() < 1e-6);
        assert!((DISTORTION_LEVEL.default_normalized() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(SATURATION.parse_value("6.0 dB"), Some(6.0));
        assert_eq!(SATURATION.parse_value(" -3.5 "), Some(-3.5));
        assert_eq!(FEEDBACK.parse_value("12%"), Some(12.0));
        assert_eq!(FEEDBACK.parse_value("lots"), None);
    }

    proptest! {
        #[test]
        fn round_trip_is_identity(normalized in 0.0f32..=1.0f32, idx in 0usize..6) {
            let spec = slider_specs()[idx];
            let back = spec.value_to_normalized(spec.normalized_to_value(normalized));
            prop_assert!((back - normalized).abs() < 1e-5, "{}: {} -> {}", spec.id, normalized, back);
        }

        #[test]
        fn readout_is_affine(normalized in 0.0f32..=1.0f32, idx in 0usize..6) {
            let spec = slider_specs()[idx];
            let readout = spec.format_normalized(normalized);
            prop_assert!(readout.ends_with(&format!(" {}", spec.unit)), "{}", readout);

            let shown = spec.parse_value(&readout);
            prop_assert!(shown.is_some(), "unparseable readout {}", readout);
            let shown = shown.unwrap_or_default();

            // the displayed number sits within half a display step of the affine value
            let expected = spec.min as f64 + normalized as f64 * (spec.max - spec.min) as f64;
            let half_step = 0.5 * 10f64.powi(-(spec.decimals as i32));
            prop_assert!(
                (shown as f64 - expected).abs() <= half_step + 1e-3,
                "{}: {} shown as {}", spec.id, normalized, readout
            );
            let digits = readout.split(' ').next().and_then(|n| n.split('.').nth(1)).map(str::len);
            prop_assert_eq!(digits.unwrap_or(0), spec.decimals);
        }

        #[test]
        fn value_to_normalized_stays_in_unit_range(value in -1.0e5f32..1.0e5f32, idx in 0usize..6) {
            let normalized = slider_specs()[idx].value_to_normalized(value);
            prop_assert!((0.0..=1.0).contains(&normalized));
        }
    }
}

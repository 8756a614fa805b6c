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

//! Where every control lives on the panel. A control is addressed by its
//! parameter id and owns an element rect, an indicator (knob face or switch
//! track) and, for knobs, a readout rect below it.

use nih_plug_egui::egui::{pos2, vec2, Pos2, Rect, Vec2};

use crate::constants::{PANEL_HEIGHT, PANEL_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub struct ControlSlot {
    pub id: &'static str,
    pub caption: &'static str,
    pub element: Rect,
    pub indicator: Option<Rect>,
    pub readout: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    scale: f32,
    origin: Pos2,
    slots: Vec<ControlSlot>,
}

const KNOB_SIZE: f32 = 150.0;
const READOUT_HEIGHT: f32 = 26.0;
const SWITCH_SIZE: Vec2 = vec2(90.0, 40.0);

fn knob_slot(id: &'static str, caption: &'static str, center: Pos2) -> ControlSlot {
    let element = Rect::from_center_size(center, Vec2::splat(KNOB_SIZE + 30.0));
    let indicator = Rect::from_center_size(center, Vec2::splat(KNOB_SIZE));
    let readout = Rect::from_min_size(
        pos2(element.min.x, element.max.y + 4.0),
        vec2(element.width(), READOUT_HEIGHT),
    );
    ControlSlot {
        id,
        caption,
        element,
        indicator: Some(indicator),
        readout: Some(readout),
    }
}

fn switch_slot(id: &'static str, caption: &'static str, center: Pos2) -> ControlSlot {
    let element = Rect::from_center_size(center, SWITCH_SIZE + vec2(0.0, 30.0));
    let indicator = Rect::from_center_size(center + vec2(0.0, 10.0), SWITCH_SIZE);
    ControlSlot {
        id,
        caption,
        element,
        indicator: Some(indicator),
        readout: None,
    }
}

impl PanelLayout {
    /// The panel at its native 950x700 size.
    pub fn reference() -> Self {
        let columns = [175.0, 475.0, 775.0];
        let top_row = 235.0;
        let bottom_row = 470.0;
        let switch_row = 640.0;

        Self::from_slots(vec![
            knob_slot("saturation", "saturation", pos2(columns[0], top_row)),
            knob_slot("dopplerShift", "doppler", pos2(columns[1], top_row)),
            knob_slot("delayTime", "time", pos2(columns[2], top_row)),
            knob_slot("feedback", "feedback", pos2(columns[0], bottom_row)),
            knob_slot("distortionLevel", "distortion", pos2(columns[1], bottom_row)),
            knob_slot("masterOutput", "master", pos2(columns[2], bottom_row)),
            switch_slot("pitchEnable", "pitch", pos2(360.0, switch_row)),
            switch_slot("tempoSync", "sync", pos2(590.0, switch_row)),
        ])
    }

    pub fn from_slots(slots: Vec<ControlSlot>) -> Self {
        Self {
            scale: 1.0,
            origin: Pos2::ZERO,
            slots,
        }
    }

    /// Uniformly scales the reference layout into a window, centred.
    pub fn fitted_to(window_width: f32, window_height: f32) -> Self {
        let reference = Self::reference();
        let scale = (window_width / PANEL_WIDTH as f32)
            .min(window_height / PANEL_HEIGHT as f32)
            .max(0.1);
        let origin = pos2(
            (window_width - PANEL_WIDTH as f32 * scale) * 0.5,
            (window_height - PANEL_HEIGHT as f32 * scale) * 0.5,
        );

        let map = |rect: Rect| {
            Rect::from_min_max(
                origin + rect.min.to_vec2() * scale,
                origin + rect.max.to_vec2() * scale,
            )
        };

        let slots = reference
            .slots
            .into_iter()
            .map(|slot| ControlSlot {
                element: map(slot.element),
                indicator: slot.indicator.map(map),
                readout: slot.readout.map(map),
                ..slot
            })
            .collect();

        Self {
            scale,
            origin,
            slots,
        }
    }

    pub fn slot(&self, id: &str) -> Option<&ControlSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    pub fn slots(&self) -> &[ControlSlot] {
        &self.slots
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Maps a point given in reference panel units into window space.
    pub fn to_screen(&self, reference: Pos2) -> Pos2 {
        self.origin + reference.to_vec2() * self.scale
    }

    pub fn panel_rect(&self) -> Rect {
        Rect::from_min_max(
            self.to_screen(Pos2::ZERO),
            self.to_screen(pos2(PANEL_WIDTH as f32, PANEL_HEIGHT as f32)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{ParamDescriptor, PARAM_DESCRIPTORS};

    #[test]
    fn test_reference_covers_every_parameter() {
        let layout = PanelLayout::reference();
        for descriptor in PARAM_DESCRIPTORS.iter() {
            let slot = layout.slot(descriptor.id()).expect("slot for every id");
            assert!(slot.indicator.is_some());
            match descriptor {
                ParamDescriptor::Slider(_) => assert!(slot.readout.is_some()),
                ParamDescriptor::Toggle(_) => assert!(slot.readout.is_none()),
            }
        }
    }

    #[test]
    fn test_reference_fits_panel() {
        let layout = PanelLayout::reference();
        let panel = layout.panel_rect();
        for slot in layout.slots() {
            assert!(panel.contains_rect(slot.element), "{} outside panel", slot.id);
            if let Some(readout) = slot.readout {
                assert!(panel.contains_rect(readout), "{} readout outside panel", slot.id);
            }
        }
    }

    #[test]
    fn test_controls_do_not_overlap() {
        let layout = PanelLayout::reference();
        let slots = layout.slots();
        for (i, a) in slots.iter().enumerate() {
            for b in &slots[i + 1..] {
                assert!(!a.element.intersects(b.element), "{} overlaps {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_fitted_scales_and_centres() {
        let layout = PanelLayout::fitted_to(1900.0, 1000.0);
        // height-bound: 1000 / 700
        let scale = 1000.0 / 700.0;
        assert!((layout.scale() - scale).abs() < 1e-5);

        let panel = layout.panel_rect();
        assert!((panel.center().x - 950.0).abs() < 1e-3);
        assert!((panel.height() - 1000.0).abs() < 1e-3);

        let reference = PanelLayout::reference();
        let knob = reference.slot("saturation").map(|s| s.element).expect("saturation");
        let fitted = layout.slot("saturation").map(|s| s.element).expect("saturation");
        assert!((fitted.width() - knob.width() * scale).abs() < 1e-3);
    }
}

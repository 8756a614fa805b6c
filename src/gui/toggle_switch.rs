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

use nih_plug_egui::egui::{self, Color32, CornerRadius, CursorIcon, Sense, Stroke, StrokeKind};

use crate::binding::ToggleBinding;
use crate::bridge::ToggleState;
use crate::constants::*;
use super::layout::ControlSlot;

pub fn draw_toggle(
    ui: &mut egui::Ui,
    slot: &ControlSlot,
    binding: &mut ToggleBinding,
    state: &dyn ToggleState,
    scale: f32,
) {
    let Some(track) = slot.indicator else {
        return;
    };

    let response = ui.interact(
        slot.element,
        egui::Id::new(("toggle", binding.id())),
        Sense::click(),
    );
    if response.clicked() {
        let value = binding.click(state);
        log::debug!("{} switched {}", binding.id(), if value { "on" } else { "off" });
    }
    if response.hovered() {
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
    }

    let active = binding.is_active();
    let painter = ui.painter();
    let rounding = CornerRadius::same((track.height() * 0.5).min(255.0) as u8);

    let fill = if active { REDSHIFT_RED } else { Color32::from_rgb(45, 45, 48) };
    painter.rect_filled(track, rounding, fill);
    painter.rect_stroke(
        track,
        rounding,
        Stroke::new(1.5 * scale, Color32::from_gray(60)),
        StrokeKind::Outside,
    );

    let thumb_radius = track.height() * 0.5 - 4.0 * scale;
    let thumb_x = if active {
        track.max.x - track.height() * 0.5
    } else {
        track.min.x + track.height() * 0.5
    };
    let thumb = egui::pos2(thumb_x, track.center().y);
    painter.circle_filled(thumb, thumb_radius, PANEL_LIGHT);
    painter.circle_stroke(thumb, thumb_radius, Stroke::new(1.0, Color32::from_gray(90)));

    if active {
        // lit lamp next to the switch
        let lamp = egui::pos2(track.max.x + 14.0 * scale, track.center().y);
        painter.circle_filled(lamp, 5.0 * scale, REDSHIFT_RED);
        painter.circle_filled(lamp, 9.0 * scale, Color32::from_rgba_unmultiplied(242, 26, 29, 50));
    }
}

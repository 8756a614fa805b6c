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

use nih_plug_egui::egui::{self, Align2, Color32, CornerRadius, CursorIcon, FontId, Pos2, Sense, Stroke, Vec2};

use crate::binding::SliderBinding;
use crate::bridge::SliderState;
use crate::constants::*;
use super::layout::ControlSlot;

/// Unit vector for a knob angle in degrees, 0 = up, clockwise positive.
fn angle_direction(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    egui::vec2(radians.sin(), -radians.cos())
}

fn handle_knob_drag(response: &egui::Response, binding: &mut SliderBinding, state: &dyn SliderState) {
    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            binding.press(pos.y, state);
        }
    }

    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            binding.drag_to(pos.y, state);
        }
    }

    // the drag ends on release no matter where the pointer is
    if response.drag_stopped() || (binding.is_dragging() && !response.dragged()) {
        binding.release(state);
    }
}

fn paint_knob(painter: &egui::Painter, center: Pos2, radius: f32, angle: f32, dragging: bool) {
    // Drop shadow
    painter.circle_filled(center + egui::vec2(2.0, 3.0), radius + 2.0, Color32::from_black_alpha(80));

    // Bezel, a few stacked rings fading from dark to light
    for i in 0..6 {
        let ring = radius + 6.0 - i as f32 * 1.0;
        let brightness = 70 + i as u8 * 14;
        painter.circle_stroke(center, ring, Stroke::new(1.2, Color32::from_gray(brightness)));
    }

    painter.circle_filled(center, radius, KNOB_BODY);
    painter.circle_filled(
        center - egui::vec2(radius * 0.25, radius * 0.3),
        radius * 0.45,
        Color32::from_white_alpha(8),
    );

    // Scale ticks across the sweep
    let ticks = 11;
    for i in 0..ticks {
        let t = i as f32 / (ticks - 1) as f32;
        let dir = angle_direction(KNOB_MIN_ANGLE + t * KNOB_RANGE);
        painter.line_segment(
            [center + dir * (radius + 10.0), center + dir * (radius + 16.0)],
            Stroke::new(1.5, PANEL_LIGHT),
        );
    }

    let dir = angle_direction(angle);
    let indicator_color = if dragging { REDSHIFT_RED } else { REDSHIFT_DEEP_RED };
    painter.line_segment(
        [center + dir * (radius * 0.2), center + dir * (radius * 0.85)],
        Stroke::new((radius * 0.08).max(2.0), indicator_color),
    );
}

/// Knob bound to a continuous parameter: paints it from the binding and
/// turns vertical drags into host updates.
pub fn draw_knob(
    ui: &mut egui::Ui,
    slot: &ControlSlot,
    binding: &mut SliderBinding,
    state: &dyn SliderState,
    scale: f32,
) {
    let (Some(face), Some(readout)) = (slot.indicator, slot.readout) else {
        return;
    };

    let response = ui.interact(
        slot.element,
        egui::Id::new(("knob", binding.id())),
        Sense::click_and_drag(),
    );
    handle_knob_drag(&response, binding, state);

    if binding.is_dragging() {
        ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
    } else if response.hovered() {
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
    }

    let painter = ui.painter();
    paint_knob(
        painter,
        face.center(),
        face.width().min(face.height()) * 0.5 - 8.0 * scale,
        binding.indicator_angle(),
        binding.is_dragging(),
    );

    painter.rect_filled(readout.shrink(2.0 * scale), CornerRadius::same(3), Color32::from_rgb(20, 20, 22));
    painter.text(
        readout.center(),
        Align2::CENTER_CENTER,
        binding.readout(),
        FontId::monospace(16.0 * scale),
        REDSHIFT_RED,
    );
}

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

use nih_plug_egui::egui::{self, pos2, Align2, Color32, CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind};

use crate::constants::*;
use super::layout::PanelLayout;

// Reference-space positions (950x700 panel)
const SCREWS: [Pos2; 4] = [
    pos2(26.0, 26.0),
    pos2(924.0, 26.0),
    pos2(26.0, 674.0),
    pos2(924.0, 674.0),
];
const BARRIER_ROWS: [f32; 2] = [122.0, 598.0];
const TITLE_POS: Pos2 = pos2(475.0, 62.0);

fn draw_screw(painter: &egui::Painter, center: Pos2, radius: f32, slot_angle: f32) {
    painter.circle_filled(center + egui::vec2(1.0, 1.5), radius, Color32::from_black_alpha(90));
    painter.circle_filled(center, radius, SCREW_HEAD);
    painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::from_gray(70)));

    let dir = egui::vec2(slot_angle.cos(), slot_angle.sin()) * radius * 0.75;
    painter.line_segment([center - dir, center + dir], Stroke::new(radius * 0.25, Color32::from_gray(55)));
}

/// Static panel artwork: backplate, barriers, screws, title and control captions.
pub fn draw_panel_art(ui: &mut egui::Ui, layout: &PanelLayout, window_width: f32, window_height: f32) {
    let painter = ui.painter();
    let scale = layout.scale();

    // Behind the panel when the window aspect differs from the artwork
    painter.rect_filled(
        Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(window_width, window_height)),
        0.0,
        PANEL_DARK,
    );

    let panel = layout.panel_rect();
    painter.rect_filled(panel, CornerRadius::same(6), PANEL_METAL);
    painter.rect_stroke(
        panel.shrink(6.0 * scale),
        CornerRadius::same(4),
        Stroke::new(2.0 * scale, Color32::from_gray(110)),
        StrokeKind::Inside,
    );

    // Recessed plate carrying the knobs
    let plate = Rect::from_min_max(
        layout.to_screen(pos2(50.0, BARRIER_ROWS[0] + 10.0)),
        layout.to_screen(pos2(900.0, BARRIER_ROWS[1] - 10.0)),
    );
    painter.rect_filled(plate, CornerRadius::same(8), Color32::from_rgb(112, 113, 110));

    for row in BARRIER_ROWS {
        painter.line_segment(
            [layout.to_screen(pos2(40.0, row)), layout.to_screen(pos2(910.0, row))],
            Stroke::new(4.0 * scale, REDSHIFT_DEEP_RED),
        );
    }

    for (i, screw) in SCREWS.iter().enumerate() {
        // slightly different slot angles so the screws don't look stamped
        let slot_angle = 0.6 + i as f32 * 0.45;
        draw_screw(painter, layout.to_screen(*screw), 11.0 * scale, slot_angle);
    }

    painter.text(
        layout.to_screen(TITLE_POS) + egui::vec2(2.0, 2.0) * scale,
        Align2::CENTER_CENTER,
        "RED SHIFT",
        FontId::proportional(52.0 * scale),
        REDSHIFT_DEEP_RED,
    );
    painter.text(
        layout.to_screen(TITLE_POS),
        Align2::CENTER_CENTER,
        "RED SHIFT",
        FontId::proportional(52.0 * scale),
        REDSHIFT_RED,
    );

    for slot in layout.slots() {
        painter.text(
            pos2(slot.element.center().x, slot.element.min.y - 4.0 * scale),
            Align2::CENTER_BOTTOM,
            slot.caption,
            FontId::proportional(17.0 * scale),
            PANEL_LIGHT,
        );
    }
}

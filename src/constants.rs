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

use nih_plug_egui::egui::Color32;

// Reference panel size, everything in gui::layout is expressed in these units
pub const PANEL_WIDTH: u32 = 950;
pub const PANEL_HEIGHT: u32 = 700;

// Knob sweep in degrees, 0 is straight up
pub const KNOB_MIN_ANGLE: f32 = -135.0;
pub const KNOB_MAX_ANGLE: f32 = 135.0;
pub const KNOB_RANGE: f32 = KNOB_MAX_ANGLE - KNOB_MIN_ANGLE;

/// Normalized change per pixel of vertical drag.
pub const DRAG_SENSITIVITY: f32 = 0.003;

/// Host and display values closer than this are treated as equal.
pub const SYNC_EPSILON: f32 = 1.0e-6;

pub const PANEL_METAL: Color32 = Color32::from_rgb(0x88, 0x89, 0x86);
pub const PANEL_DARK: Color32 = Color32::from_rgb(38, 38, 40);
pub const PANEL_LIGHT: Color32 = Color32::from_rgb(0xD9, 0xD9, 0xD9);
pub const REDSHIFT_RED: Color32 = Color32::from_rgb(0xF2, 0x1A, 0x1D);
pub const REDSHIFT_DEEP_RED: Color32 = Color32::from_rgb(0xBD, 0x00, 0x00);
pub const KNOB_BODY: Color32 = Color32::from_rgb(28, 28, 30);
pub const SCREW_HEAD: Color32 = Color32::from_rgb(150, 151, 148);

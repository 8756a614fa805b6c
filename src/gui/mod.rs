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

pub mod knob;
pub mod layout;
pub mod panel_art;
pub mod toggle_switch;

pub use knob::draw_knob;
pub use layout::{ControlSlot, PanelLayout};
pub use panel_art::draw_panel_art;
pub use toggle_switch::draw_toggle;

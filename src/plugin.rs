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

use std::num::NonZeroU32;
use std::sync::{Arc, Mutex, MutexGuard};
use nih_plug::prelude::*;
use nih_plug_egui::{
    create_egui_editor,
    egui::{self},
};

use crate::binding::{end_abandoned_gestures, ControlSet};
use crate::bridge::{HostBridge, PluginBridge};
use crate::constants::*;
use crate::gui::{draw_knob, draw_panel_art, draw_toggle, PanelLayout};
use crate::params::{descriptor, RedShiftParams, PARAM_DESCRIPTORS};

pub struct RedShiftDistortion {
    params: Arc<RedShiftParams>,
    // knob ids whose host gesture was still open when the editor closed
    abandoned_gestures: Arc<Mutex<Vec<&'static str>>>,
}

impl Default for RedShiftDistortion {
    fn default() -> Self {
        crate::init_logging();

        if let Err(err) = descriptor::validate(&PARAM_DESCRIPTORS) {
            log::error!("Parameter table is inconsistent: {}", err);
        }

        Self {
            params: Arc::new(RedShiftParams::default()),
            abandoned_gestures: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

fn lock_gestures(gestures: &Mutex<Vec<&'static str>>) -> MutexGuard<'_, Vec<&'static str>> {
    gestures.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Per-editor-instance state, lives as long as the window is open.
struct EditorState {
    layout: PanelLayout,
    layout_size: (u32, u32),
    // bound on the first frame, once a ParamSetter exists
    controls: Option<ControlSet>,
    abandoned_gestures: Arc<Mutex<Vec<&'static str>>>,
}

impl EditorState {
    fn new(abandoned_gestures: Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self {
            layout: PanelLayout::fitted_to(PANEL_WIDTH as f32, PANEL_HEIGHT as f32),
            layout_size: (PANEL_WIDTH, PANEL_HEIGHT),
            controls: None,
            abandoned_gestures,
        }
    }
}

// The window can close mid-drag. No ParamSetter is reachable from here, so
// the open gestures are ended by the next editor frame instead.
impl Drop for EditorState {
    fn drop(&mut self) {
        let Some(controls) = self.controls.as_ref() else {
            return;
        };
        if controls.is_preview() {
            return;
        }
        let open = controls.open_drags();
        if !open.is_empty() {
            log::warn!("Editor closed during a drag on {:?}", open);
            lock_gestures(&self.abandoned_gestures).extend(open);
        }
    }
}

impl Plugin for RedShiftDistortion {
    const NAME: &'static str = "RedShift Distortion";
    const VENDOR: &'static str = "Jakub Hlavnicka";
    const URL: &'static str = "https://donothaveany.com";
    const EMAIL: &'static str = "hlavnickajakub@gmail.com";
    const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    const AUDIO_IO_LAYOUTS: &'static [AudioIOLayout] = &[
        AudioIOLayout {
            main_input_channels: NonZeroU32::new(2),
            main_output_channels: NonZeroU32::new(2),
            ..AudioIOLayout::const_default()
        },
        AudioIOLayout {
            main_input_channels: NonZeroU32::new(1),
            main_output_channels: NonZeroU32::new(1),
            ..AudioIOLayout::const_default()
        },
    ];

    type SysExMessage = ();
    type BackgroundTask = ();

    fn params(&self) -> Arc<dyn Params> {
        self.params.clone()
    }

    fn initialize(
        &mut self,
        layout: &AudioIOLayout,
        config: &BufferConfig,
        _context: &mut impl InitContext<Self>,
    ) -> bool {
        log::info!(
            "Initialized at {} Hz, max block {}, {:?} channels",
            config.sample_rate,
            config.max_buffer_size,
            layout.main_output_channels
        );
        true
    }

    // Audio passes through untouched, the processing chain lives elsewhere
    fn process(
        &mut self,
        _buffer: &mut Buffer,
        _aux: &mut AuxiliaryBuffers,
        _context: &mut impl ProcessContext<Self>,
    ) -> ProcessStatus {
        ProcessStatus::Normal
    }

    fn editor(&mut self, _executor: AsyncExecutor<Self>) -> Option<Box<dyn Editor>> {
        let params = self.params.clone();
        create_egui_editor(
            params.editor_state.clone(),
            EditorState::new(self.abandoned_gestures.clone()),
            |_, _| {},
            move |egui_ctx, setter, state| {
                // The following params are changed when the window is resized
                let (window_width, window_height) = params.editor_state.size();
                egui_ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::Vec2::new(
                    window_width as f32,
                    window_height as f32,
                )));
                if state.layout_size != (window_width, window_height) {
                    state.layout = PanelLayout::fitted_to(window_width as f32, window_height as f32);
                    state.layout_size = (window_width, window_height);
                }

                let bridge = PluginBridge::new(&params, setter);
                let host: Option<&dyn HostBridge> = Some(&bridge);
                end_abandoned_gestures(&bridge, &mut lock_gestures(&state.abandoned_gestures));

                let layout = &state.layout;
                let controls = state
                    .controls
                    .get_or_insert_with(|| ControlSet::bind(layout, host));

                // automation and preset loads land here
                controls.sync(host);

                egui::CentralPanel::default().show(egui_ctx, |ui| {
                    draw_panel_art(ui, layout, window_width as f32, window_height as f32);

                    let scale = layout.scale();
                    controls.for_each_slider(host, |binding, slider| {
                        if let Some(slot) = layout.slot(binding.id()) {
                            draw_knob(ui, slot, binding, slider, scale);
                        }
                    });
                    controls.for_each_toggle(host, |binding, toggle| {
                        if let Some(slot) = layout.slot(binding.id()) {
                            draw_toggle(ui, slot, binding, toggle, scale);
                        }
                    });

                    if controls.is_preview() {
                        ui.colored_label(REDSHIFT_RED, "Preview mode: no host connected");
                    }
                });
            },
        )
    }
}

impl ClapPlugin for RedShiftDistortion {
    const CLAP_ID: &'static str = "com.hlavnicka.redshift-distortion";
    const CLAP_DESCRIPTION: Option<&'static str> = Some("Doppler delay with saturation");
    const CLAP_MANUAL_URL: Option<&'static str> = None;
    const CLAP_SUPPORT_URL: Option<&'static str> = None;
    const CLAP_FEATURES: &'static [ClapFeature] = &[
        ClapFeature::AudioEffect,
        ClapFeature::Stereo,
        ClapFeature::Distortion,
        ClapFeature::Delay,
    ];
}

impl Vst3Plugin for RedShiftDistortion {
    const VST3_CLASS_ID: [u8; 16] = *b"RedShiftDistort1";
    const VST3_SUBCATEGORIES: &'static [Vst3SubCategory] = &[
        Vst3SubCategory::Fx,
        Vst3SubCategory::Distortion,
        Vst3SubCategory::Delay,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::PreviewBridge;

    #[test]
    fn test_plugin_exposes_parameter_surface() {
        let plugin = RedShiftDistortion::default();
        let params = plugin.params();
        let ids: Vec<String> = params.param_map().into_iter().map(|(id, _, _)| id).collect();
        for descriptor in PARAM_DESCRIPTORS.iter() {
            assert!(ids.iter().any(|id| id == descriptor.id()));
        }
    }

    #[test]
    fn test_editor_state_starts_at_panel_size() {
        let state = EditorState::new(Arc::default());
        assert_eq!(state.layout_size, (PANEL_WIDTH, PANEL_HEIGHT));
        assert_eq!(state.layout.scale(), 1.0);
        assert!(state.controls.is_none());
    }

    #[test]
    fn test_closing_mid_drag_leaves_gesture_for_next_editor() {
        let abandoned: Arc<Mutex<Vec<&'static str>>> = Arc::default();
        let host = PreviewBridge::from_descriptors(&PARAM_DESCRIPTORS);

        let mut state = EditorState::new(abandoned.clone());
        let mut controls = ControlSet::bind(&state.layout, Some(&host));
        controls.for_each_slider(Some(&host), |binding, slider| {
            if binding.id() == "feedback" {
                binding.press(0.0, slider);
            }
        });
        state.controls = Some(controls);
        drop(state);

        assert_eq!(*lock_gestures(&abandoned), vec!["feedback"]);
        assert_eq!(host.open_gestures(), 1);
        assert_eq!(end_abandoned_gestures(&host, &mut lock_gestures(&abandoned)), 1);
        assert_eq!(host.open_gestures(), 0);
    }

    #[test]
    fn test_closing_preview_editor_records_nothing() {
        let abandoned: Arc<Mutex<Vec<&'static str>>> = Arc::default();
        let mut state = EditorState::new(abandoned.clone());
        let mut controls = ControlSet::bind(&state.layout, None);
        controls.for_each_slider(None, |binding, slider| binding.press(0.0, slider));
        state.controls = Some(controls);
        drop(state);

        assert!(lock_gestures(&abandoned).is_empty());
    }
}

use std::time::Duration;

use chrono::Utc;
use client_core::{build_payload, preview_frame, ParameterStore, PreviewFrame};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{
    domain::{
        ParamDomain, BRIGHTNESS, CAMERA_ANGLE_DEG, CONTRAST, LATENT_MORPH, SATURATION,
        STYLE_INTENSITY,
    },
    protocol::SteerPayload,
};

use crate::backend_bridge::commands::ChannelCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_channel_command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChannelStatus {
    Connecting,
    Connected,
    Offline,
}

pub struct SteerPanelApp {
    cmd_tx: Sender<ChannelCommand>,
    ui_rx: Receiver<UiEvent>,
    store: ParameterStore,
    auto_send: bool,
    status: ChannelStatus,
    status_line: String,
    payload_json: String,
    last_sent_json: Option<String>,
    last_response: Option<String>,
}

impl SteerPanelApp {
    pub fn new(cmd_tx: Sender<ChannelCommand>, ui_rx: Receiver<UiEvent>, auto_send: bool) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            store: ParameterStore::new(),
            auto_send,
            status: ChannelStatus::Connecting,
            status_line: String::new(),
            payload_json: String::new(),
            last_sent_json: None,
            last_response: None,
        };
        // Show the initial payload without sending; nothing changed yet.
        app.rebuild_payload();
        app
    }

    /// Regenerate the payload from the current snapshot with a fresh
    /// timestamp and refresh the viewer text.
    fn rebuild_payload(&mut self) -> SteerPayload {
        let payload = build_payload(&self.store.snapshot(), Utc::now().timestamp_millis());
        self.payload_json = payload.to_display();
        payload
    }

    fn on_parameters_changed(&mut self) {
        let payload = self.rebuild_payload();
        dispatch_channel_command(
            &self.cmd_tx,
            ChannelCommand::Forward { payload },
            &mut self.status_line,
        );
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ChannelOpened => {
                    self.status = ChannelStatus::Connected;
                    self.status_line = "Connected".to_string();
                }
                UiEvent::ChannelClosed => {
                    self.status = ChannelStatus::Offline;
                    self.status_line = "Offline".to_string();
                }
                UiEvent::AckReceived(ack) => self.last_response = Some(ack),
                UiEvent::PayloadSent(json) => self.last_sent_json = Some(json),
                UiEvent::Info(text) => self.status_line = text,
                UiEvent::Error(err) => {
                    tracing::warn!(context = ?err.context(), "{}", err.message());
                    self.status_line = err.message().to_string();
                }
            }
        }
    }

    fn steering_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Steering");
        ui.add_space(4.0);

        let mut draft = self.store.snapshot();
        let mut changed = false;
        changed |= param_slider(ui, "Brightness", &mut draft.brightness, &BRIGHTNESS);
        changed |= param_slider(ui, "Contrast", &mut draft.contrast, &CONTRAST);
        changed |= param_slider(ui, "Saturation", &mut draft.saturation, &SATURATION);
        changed |= angle_slider(ui, "Camera angle", &mut draft.camera_angle_deg);
        changed |=
            param_slider(ui, "Style intensity", &mut draft.style_intensity, &STYLE_INTENSITY);
        changed |= param_slider(ui, "Latent morph", &mut draft.latent_morph, &LATENT_MORPH);

        if changed {
            // Setters are the sole mutation path; each one clamps.
            self.store.set_brightness(draft.brightness);
            self.store.set_contrast(draft.contrast);
            self.store.set_saturation(draft.saturation);
            self.store.set_camera_angle_deg(draft.camera_angle_deg);
            self.store.set_style_intensity(draft.style_intensity);
            self.store.set_latent_morph(draft.latent_morph);
            self.on_parameters_changed();
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Reset").clicked() {
                self.store.reset();
                self.on_parameters_changed();
            }
            if ui.button("Randomize").clicked() {
                self.store.randomize(&mut rand::thread_rng());
                self.on_parameters_changed();
            }
        });

        ui.add_space(8.0);
        if ui
            .checkbox(&mut self.auto_send, "Auto-send on change")
            .changed()
        {
            dispatch_channel_command(
                &self.cmd_tx,
                ChannelCommand::SetAutoSend(self.auto_send),
                &mut self.status_line,
            );
        }
        if !self.auto_send && ui.button("Send now").clicked() {
            let payload = self.rebuild_payload();
            dispatch_channel_command(
                &self.cmd_tx,
                ChannelCommand::SendNow { payload },
                &mut self.status_line,
            );
        }
    }

    fn status_indicator(&self, ui: &mut egui::Ui) {
        let (color, label) = match self.status {
            ChannelStatus::Connecting => (egui::Color32::YELLOW, "Connecting..."),
            ChannelStatus::Connected => (egui::Color32::from_rgb(0x3b, 0xa5, 0x5d), "Connected"),
            ChannelStatus::Offline => (egui::Color32::from_rgb(0xd8, 0x3c, 0x3e), "Offline"),
        };
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 5.0, color);
            ui.label(label);
            if !self.status_line.is_empty() {
                ui.weak(&self.status_line);
            }
        });
    }

    fn preview_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Preview");
        let frame = preview_frame(&self.store.snapshot());
        let (rect, _) = ui.allocate_exact_size(egui::vec2(280.0, 210.0), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

        // A filtered card rotated by the camera angle stands in for the
        // steered image.
        let angle = frame.rotation_deg.to_radians() as f32;
        let (sin, cos) = angle.sin_cos();
        let center = rect.center();
        let corners: Vec<egui::Pos2> = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
            .iter()
            .map(|&(sx, sy)| {
                let local = egui::vec2(sx * 90.0, sy * 65.0);
                center
                    + egui::vec2(
                        local.x * cos - local.y * sin,
                        local.x * sin + local.y * cos,
                    )
            })
            .collect();
        painter.add(egui::Shape::convex_polygon(
            corners,
            preview_fill(&frame),
            egui::Stroke::new(1.0, ui.visuals().widgets.active.bg_stroke.color),
        ));
    }

    fn wire_viewers(&self, ui: &mut egui::Ui) {
        ui.heading("Outbound payload");
        egui::ScrollArea::vertical()
            .id_salt("payload_viewer")
            .max_height(170.0)
            .show(ui, |ui| {
                ui.code(&self.payload_json);
            });

        ui.add_space(6.0);
        ui.heading("Last sent");
        egui::ScrollArea::vertical()
            .id_salt("last_sent_viewer")
            .max_height(170.0)
            .show(ui, |ui| {
                ui.code(self.last_sent_json.as_deref().unwrap_or("(nothing sent)"));
            });

        ui.add_space(6.0);
        ui.heading("Last response");
        ui.monospace(self.last_response.as_deref().unwrap_or("(none yet)"));
    }
}

impl eframe::App for SteerPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        egui::SidePanel::left("steering_controls")
            .default_width(340.0)
            .show(ctx, |ui| {
                self.steering_controls(ui);
                ui.add_space(10.0);
                self.status_indicator(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.preview_panel(ui);
            ui.separator();
            self.wire_viewers(ui);
        });

        // Keep draining worker events while idle.
        ctx.request_repaint_after(Duration::from_millis(50));
    }
}

impl Drop for SteerPanelApp {
    fn drop(&mut self) {
        let _ = self.cmd_tx.try_send(ChannelCommand::Shutdown);
    }
}

fn param_slider(ui: &mut egui::Ui, label: &str, value: &mut f64, domain: &ParamDomain) -> bool {
    ui.add(
        egui::Slider::new(value, domain.min..=domain.max)
            .text(label)
            .fixed_decimals(2),
    )
    .changed()
}

fn angle_slider(ui: &mut egui::Ui, label: &str, value: &mut f64) -> bool {
    ui.add(
        egui::Slider::new(value, CAMERA_ANGLE_DEG.min..=CAMERA_ANGLE_DEG.max)
            .text(label)
            .suffix("\u{b0}")
            .fixed_decimals(0),
    )
    .changed()
}

fn preview_fill(frame: &PreviewFrame) -> egui::Color32 {
    // Base tint drifts with the latent morph and warms with style
    // intensity; the filter triple is applied per channel.
    let base = [
        0.55 + 0.25 * frame.morph_shift + 0.15 * frame.style_blend,
        0.45 + 0.10 * frame.style_blend,
        0.55 - 0.25 * frame.morph_shift,
    ];
    let luma = 0.2126 * base[0] + 0.7152 * base[1] + 0.0722 * base[2];
    let rgb = base.map(|c| {
        let saturated = luma + (c - luma) * frame.saturation_factor;
        let contrasted = 0.5 + (saturated - 0.5) * frame.contrast_factor;
        (contrasted * frame.brightness_factor).clamp(0.0, 1.0)
    });
    egui::Color32::from_rgb(
        (rgb[0] * 255.0) as u8,
        (rgb[1] * 255.0) as u8,
        (rgb[2] * 255.0) as u8,
    )
}

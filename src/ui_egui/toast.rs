//! Toast notifications for submit feedback.
//!
//! Toasts appear in the bottom-right corner and fade out after a few seconds.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✗",
        }
    }

    pub fn background_color(&self, is_dark_theme: bool) -> Color32 {
        match (self, is_dark_theme) {
            (ToastLevel::Success, true) => Color32::from_rgb(30, 70, 40),
            (ToastLevel::Success, false) => Color32::from_rgb(220, 255, 220),
            (ToastLevel::Error, true) => Color32::from_rgb(80, 30, 30),
            (ToastLevel::Error, false) => Color32::from_rgb(255, 220, 220),
        }
    }

    pub fn text_color(&self, is_dark_theme: bool) -> Color32 {
        match (self, is_dark_theme) {
            (ToastLevel::Success, true) => Color32::from_rgb(100, 220, 120),
            (ToastLevel::Success, false) => Color32::from_rgb(30, 120, 50),
            (ToastLevel::Error, true) => Color32::from_rgb(255, 120, 120),
            (ToastLevel::Error, false) => Color32::from_rgb(180, 40, 40),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Opacity for the last half second (fade out)
    pub fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed();
        let fade_start = self.duration.saturating_sub(Duration::from_millis(500));

        if elapsed >= self.duration {
            0.0
        } else if elapsed >= fade_start {
            ((self.duration - elapsed).as_secs_f32() / 0.5).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Success));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Error));
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn render(&mut self, ctx: &Context, is_dark_theme: bool) {
        self.toasts.retain(|t| !t.is_expired());
        if self.toasts.is_empty() {
            return;
        }

        // Keep repainting while a toast is fading
        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let toast_width = 300.0;
        let toast_height = 40.0;
        let margin = 10.0;

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity();
            let y_offset = (i as f32) * (toast_height + 5.0);
            let pos = Pos2::new(
                screen_rect.right() - toast_width - margin,
                screen_rect.bottom() - toast_height - margin - y_offset,
            );

            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    let bg = toast.level.background_color(is_dark_theme);
                    let fg = toast.level.text_color(is_dark_theme);
                    let bg = Color32::from_rgba_unmultiplied(
                        bg.r(),
                        bg.g(),
                        bg.b(),
                        (230.0 * opacity) as u8,
                    );
                    let fg = fg.gamma_multiply(opacity);

                    egui::Frame::none()
                        .fill(bg)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(fg).strong());
                                ui.label(RichText::new(&toast.message).color(fg));
                            });
                        });
                });
        }
    }
}

//! The clock window: tick, input, paint

use clockcore::clockwork::{angles, ClockAngles, Clockwork, SystemTime};
use clockcore::dial::Dial;
use clockcore::readout::Readout;
use clockcore::theme::{ClockColors, ClockTheme};
use clockcore::transform::{DragAnchor, WindowTransform};
use clockcore::{ClockConfig, Ticker};
use egui::{CentralPanel, Context, FontId, Key, Pos2, Vec2, ViewportCommand};

pub struct DeskClockApp {
    config: ClockConfig,
    theme: ClockTheme,
    clockwork: Clockwork,
    ticker: Ticker,
    transform: WindowTransform,
    /// Angles and readout from the last tick
    angles: ClockAngles,
    readout: Readout,
}

impl DeskClockApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ClockConfig) -> Self {
        let position = config.position.map(Pos2::from).unwrap_or(Pos2::ZERO);
        let transform = WindowTransform::new(position).with_anchor(config.drag_anchor);
        let clockwork = Clockwork::new(SystemTime);
        let now = clockwork.now();
        Self {
            readout: Readout::at(&now, &config.readout_format),
            angles: angles(&now),
            theme: ClockTheme::default(),
            ticker: Ticker::new(),
            clockwork,
            transform,
            config,
        }
    }

    /// Current outer position as reported by the platform, if any.
    fn outer_position(ctx: &Context) -> Option<Pos2> {
        ctx.input(|i| i.viewport().outer_rect).map(|r| r.min)
    }

    /// Pointer position in the coordinates the drag anchor expects.
    fn drag_point(&self, ctx: &Context, local: Pos2) -> Pos2 {
        match self.config.drag_anchor {
            DragAnchor::PressPoint => local,
            DragAnchor::LastEvent => {
                let origin = Self::outer_position(ctx).unwrap_or_else(|| self.transform.position());
                local + origin.to_vec2()
            }
        }
    }

    fn handle_pointer(&mut self, ctx: &Context) {
        let (pressed, down, released, moved, pos) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.delta() != Vec2::ZERO,
                i.pointer.interact_pos(),
            )
        });

        if pressed {
            if let Some(local) = pos {
                // the platform may have moved us since the last gesture
                if let Some(outer) = Self::outer_position(ctx) {
                    self.transform.x = outer.x;
                    self.transform.y = outer.y;
                }
                let p = self.drag_point(ctx, local);
                self.transform.on_pointer_down(p.x, p.y);
                log::debug!("press at {:?}", p);
            }
        } else if down && moved && self.transform.is_dragging() {
            if let Some(local) = pos {
                let p = self.drag_point(ctx, local);
                if let Some(target) = self.transform.on_pointer_drag(p.x, p.y) {
                    log::debug!("drag to {:?}", target);
                    ctx.send_viewport_cmd(ViewportCommand::OuterPosition(target));
                }
            }
        }

        if released {
            self.transform.on_pointer_up();
        }
    }

    fn handle_scroll(&mut self, ctx: &Context) {
        let delta_y = ctx.input(|i| i.raw_scroll_delta.y);
        if delta_y == 0.0 {
            return;
        }
        let size = self.transform.on_scroll(delta_y, self.config.radius);
        log::debug!(
            "scroll {} -> scale {:.2}, window {:?}",
            delta_y,
            self.transform.scale_x,
            size
        );
        ctx.send_viewport_cmd(ViewportCommand::InnerSize(size));
    }

    fn draw_clock(&self, ctx: &Context) {
        CentralPanel::default()
            .frame(ClockTheme::canvas_frame())
            .show(ctx, |ui| {
                let radius = self.config.radius;
                let dial = Dial::from_content(self.transform.content_rect(radius), radius);
                let painter = ui.painter();
                painter.extend(dial.shapes(&self.angles));

                if self.config.show_readout {
                    let galley = painter.layout_no_wrap(
                        self.readout.text.clone(),
                        FontId::proportional(self.theme.readout_font_size * dial.scale),
                        ClockColors::BLACK,
                    );
                    let top_left =
                        self.readout
                            .top_left(dial.center, dial.radius, dial.scale, galley.size());
                    // no bold face is loaded; overstrike for the weight
                    let overstrike = Vec2::new(self.theme.readout_weight * dial.scale, 0.0);
                    painter.galley(top_left, galley.clone(), ClockColors::BLACK);
                    painter.galley(top_left + overstrike, galley, ClockColors::BLACK);
                }
            });
    }
}

impl eframe::App for DeskClockApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = self.clockwork.now();
        if self.ticker.begin_frame(&now) {
            self.angles = angles(&now);
            self.readout = Readout::at(&now, &self.config.readout_format);
        }

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            log::info!("escape pressed, closing");
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        self.handle_pointer(ctx);
        self.handle_scroll(ctx);
        self.draw_clock(ctx);

        self.ticker.end_frame(ctx, &now);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        ClockTheme::clear_color()
    }
}

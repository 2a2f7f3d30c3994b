use super::color32;
use aero_app::view::{AirfoilScene, Anchor, EMPTY_MESSAGE, SceneStyle};
use aero_app::{SimStore, header_line};
use egui::{Align2, FontId, Pos2, Rect, Sense, Shape, Stroke, pos2, vec2};

pub struct AirfoilView {
    style: SceneStyle,
    show_legend: bool,
}

impl Default for AirfoilView {
    fn default() -> Self {
        Self {
            style: SceneStyle::default(),
            show_legend: true,
        }
    }
}

impl AirfoilView {
    pub fn show(&mut self, ui: &mut egui::Ui, store: &SimStore) {
        let Some(data) = store.data() else {
            ui.centered_and_justified(|ui| {
                ui.label(EMPTY_MESSAGE);
            });
            return;
        };

        ui.horizontal(|ui| {
            ui.strong(header_line(store.params(), data));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.checkbox(&mut self.show_legend, "Legend");
            });
        });
        ui.separator();

        let scene = AirfoilScene::build(data, &self.style);
        egui::ScrollArea::both().show(ui, |ui| {
            let size = vec2(self.style.width as f32, self.style.height as f32);
            let (response, painter) = ui.allocate_painter(size, Sense::hover());
            let origin = response.rect.min;
            let to_screen = |p: [f64; 2]| pos2(origin.x + p[0] as f32, origin.y + p[1] as f32);

            painter.rect_filled(response.rect, 4.0, ui.visuals().extreme_bg_color);

            let outline: Vec<Pos2> = scene.outline.iter().map(|&p| to_screen(p)).collect();
            painter.add(Shape::line(
                outline,
                Stroke::new(self.style.outline_width as f32, color32(self.style.outline)),
            ));

            let width = self.style.segment_width as f32;
            for seg in &scene.segments {
                let color = color32(seg.color);
                let (a, b) = (to_screen(seg.from), to_screen(seg.to));
                painter.line_segment([a, b], Stroke::new(width, color));
                // Round caps.
                painter.circle_filled(a, width * 0.5, color);
                painter.circle_filled(b, width * 0.5, color);
            }

            let axis = Stroke::new(1.0, color32(self.style.axis));
            for [from, to] in &scene.axes {
                painter.line_segment([to_screen(*from), to_screen(*to)], axis);
            }

            for label in &scene.labels {
                let align = match label.anchor {
                    Anchor::Start => Align2::LEFT_BOTTOM,
                    Anchor::End => Align2::RIGHT_BOTTOM,
                };
                painter.text(
                    to_screen(label.pos),
                    align,
                    &label.text,
                    FontId::proportional(12.0),
                    color32(self.style.label),
                );
            }

            if self.show_legend {
                draw_legend(&painter, &scene, response.rect);
            }
        });
    }
}

fn draw_legend(painter: &egui::Painter, scene: &AirfoilScene, canvas: Rect) {
    const STOPS: usize = 48;
    let bar = Rect::from_min_size(
        pos2(canvas.max.x - 60.0, canvas.min.y + 40.0),
        vec2(14.0, 180.0),
    );
    let stops = scene.legend(STOPS);
    let step = bar.height() / STOPS as f32;
    // Highest Cp at the top.
    for (i, (_, color)) in stops.iter().rev().enumerate() {
        let cell = Rect::from_min_size(
            pos2(bar.min.x, bar.min.y + i as f32 * step),
            vec2(bar.width(), step + 0.5),
        );
        painter.rect_filled(cell, 0.0, color32(*color));
    }

    let (cp_min, cp_max) = scene.cp_range;
    let text_color = color32(scene.style.label);
    let font = FontId::proportional(11.0);
    painter.text(
        pos2(bar.center().x, bar.min.y - 4.0),
        Align2::CENTER_BOTTOM,
        format!("Cp {cp_max:.2}"),
        font.clone(),
        text_color,
    );
    painter.text(
        pos2(bar.center().x, bar.max.y + 4.0),
        Align2::CENTER_TOP,
        format!("{cp_min:.2}"),
        font,
        text_color,
    );
}

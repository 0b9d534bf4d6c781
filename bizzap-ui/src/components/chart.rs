//! Chart Component
//!
//! Bar, area and pie charts drawn on an HTML5 canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use bizzap::lead_analytics::PALETTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Area,
    Pie,
}

/// One labelled value; `color` overrides the palette
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub color: Option<&'static str>,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }
}

/// Canvas chart that redraws whenever `data` changes
#[component]
pub fn Chart(
    kind: ChartKind,
    #[prop(into)]
    data: Signal<Vec<ChartPoint>>,
    #[prop(default = 300)]
    height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, kind, &points);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height=height.to_string()
                class="w-full rounded-lg"
            />
            {(kind == ChartKind::Pie).then(|| view! { <ChartLegend data=data /> })}
        </div>
    }
}

#[component]
fn ChartLegend(data: Signal<Vec<ChartPoint>>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                data.get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, point)| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", point_color(&point, idx))
                                />
                                <span class="text-sm text-slate-600">{point.label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn point_color(point: &ChartPoint, idx: usize) -> &'static str {
    point.color.unwrap_or(PALETTE[idx % PALETTE.len()])
}

fn draw_chart(canvas: &HtmlCanvasElement, kind: ChartKind, points: &[ChartPoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() || points.iter().all(|p| p.value <= 0.0) {
        ctx.set_fill_style(&"#94a3b8".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data available", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    match kind {
        ChartKind::Bar => draw_bars(&ctx, width, height, points),
        ChartKind::Area => draw_area(&ctx, width, height, points),
        ChartKind::Pie => draw_pie(&ctx, width, height, points),
    }
}

struct Plot {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    max: f64,
}

impl Plot {
    fn new(width: f64, height: f64, points: &[ChartPoint]) -> Self {
        let max = points.iter().map(|p| p.value).fold(0.0, f64::max);
        Self {
            left: 50.0,
            top: 20.0,
            width: width - 70.0,
            height: height - 60.0,
            max: if max > 0.0 { max * 1.1 } else { 1.0 },
        }
    }

    fn y(&self, value: f64) -> f64 {
        self.top + (1.0 - value / self.max) * self.height
    }

    fn grid(&self, ctx: &CanvasRenderingContext2d) {
        ctx.set_stroke_style(&"#e2e8f0".into());
        ctx.set_line_width(1.0);
        ctx.set_font("12px sans-serif");

        for i in 0..=4 {
            let value = self.max * (4 - i) as f64 / 4.0;
            let y = self.y(value);
            ctx.begin_path();
            ctx.move_to(self.left, y);
            ctx.line_to(self.left + self.width, y);
            ctx.stroke();

            ctx.set_fill_style(&"#64748b".into());
            let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
        }
    }

    fn x_label(&self, ctx: &CanvasRenderingContext2d, label: &str, x: f64) {
        ctx.set_fill_style(&"#64748b".into());
        ctx.set_font("11px sans-serif");
        let short: String = label.chars().take(10).collect();
        let _ = ctx.fill_text(&short, x - 20.0, self.top + self.height + 20.0);
    }
}

fn draw_bars(ctx: &CanvasRenderingContext2d, width: f64, height: f64, points: &[ChartPoint]) {
    let plot = Plot::new(width, height, points);
    plot.grid(ctx);

    let slot = plot.width / points.len() as f64;
    let bar_width = (slot * 0.6).min(60.0);

    for (idx, point) in points.iter().enumerate() {
        let x = plot.left + slot * idx as f64 + (slot - bar_width) / 2.0;
        let y = plot.y(point.value);
        ctx.set_fill_style(&point_color(point, idx).into());
        ctx.fill_rect(x, y, bar_width, plot.top + plot.height - y);
        plot.x_label(ctx, &point.label, x + bar_width / 2.0);
    }
}

fn draw_area(ctx: &CanvasRenderingContext2d, width: f64, height: f64, points: &[ChartPoint]) {
    let plot = Plot::new(width, height, points);
    plot.grid(ctx);

    let step = if points.len() > 1 {
        plot.width / (points.len() - 1) as f64
    } else {
        0.0
    };
    let x = |idx: usize| plot.left + step * idx as f64;
    let color = PALETTE[0];
    let baseline = plot.top + plot.height;

    ctx.begin_path();
    ctx.move_to(x(0), baseline);
    for (idx, point) in points.iter().enumerate() {
        ctx.line_to(x(idx), plot.y(point.value));
    }
    ctx.line_to(x(points.len() - 1), baseline);
    ctx.close_path();
    ctx.set_global_alpha(0.2);
    ctx.set_fill_style(&color.into());
    ctx.fill();
    ctx.set_global_alpha(1.0);

    ctx.begin_path();
    for (idx, point) in points.iter().enumerate() {
        if idx == 0 {
            ctx.move_to(x(idx), plot.y(point.value));
        } else {
            ctx.line_to(x(idx), plot.y(point.value));
        }
    }
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.stroke();

    for (idx, point) in points.iter().enumerate() {
        plot.x_label(ctx, &point.label, x(idx));
    }
}

fn draw_pie(ctx: &CanvasRenderingContext2d, width: f64, height: f64, points: &[ChartPoint]) {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = (height / 2.0 - 10.0).max(10.0);
    let inner = outer * 0.6;

    let mut angle = -std::f64::consts::FRAC_PI_2;
    for (idx, point) in points.iter().enumerate() {
        let sweep = point.value.max(0.0) / total * std::f64::consts::TAU;
        if sweep <= 0.0 {
            continue;
        }
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, outer, angle, angle + sweep);
        ctx.close_path();
        ctx.set_fill_style(&point_color(point, idx).into());
        ctx.fill();
        angle += sweep;
    }

    // Donut hole
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, inner, 0.0, std::f64::consts::TAU);
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill();
}

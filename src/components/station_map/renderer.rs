use super::layout::{MapVariant, RegionKind, StationLayout, TextLabel};
use web_sys::CanvasRenderingContext2d;

const SIMPLE_BACKGROUND_COLOR: &str = "#f5f5f5";
const DETAILED_BACKGROUND_COLOR: &str = "#f8f9fa";
const GRID_COLOR: &str = "#e0e0e0";
const GRID_LINE_WIDTH: f64 = 1.0;
const WALL_COLOR: &str = "#9e9e9e";
const WALL_LINE_WIDTH: f64 = 3.0;
const OUTLINE_COLOR: &str = "#343a40";
const OUTLINE_LINE_WIDTH: f64 = 2.0;
const LABEL_COLOR: &str = "#212529";
const TITLE_COLOR: &str = "#495057";
const NORTH_COLOR: &str = "#343a40";

fn region_color(kind: RegionKind) -> &'static str {
    match kind {
        RegionKind::Platform(_) => "#dee2e6",
        RegionKind::Concourse => "#e9ecef",
        RegionKind::TicketCounter(_) => "#adb5bd",
        RegionKind::WaitingArea => "#ced4da",
        RegionKind::Washroom => "#74c0fc",
        RegionKind::FoodCourt => "#ffd43b",
        RegionKind::MainEntrance => "#20c997",
        RegionKind::SideEntrance => "#12b886",
    }
}

fn draw_label(ctx: &CanvasRenderingContext2d, label: &TextLabel, color: &str) {
    ctx.set_fill_style_str(color);
    ctx.set_font(label.font);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let _ = ctx.fill_text(&label.text, label.at.0, label.at.1);
}

fn draw_grid(ctx: &CanvasRenderingContext2d, layout: &StationLayout) {
    if layout.grid.is_empty() {
        return;
    }
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(GRID_LINE_WIDTH);
    ctx.begin_path();
    for &((x1, y1), (x2, y2)) in &layout.grid {
        ctx.move_to(x1, y1);
        ctx.line_to(x2, y2);
    }
    ctx.stroke();
}

fn draw_north_indicator(ctx: &CanvasRenderingContext2d, (x, y): (f64, f64), size: f64) {
    ctx.save();
    let _ = ctx.translate(x, y);
    ctx.set_fill_style_str(NORTH_COLOR);
    ctx.begin_path();
    ctx.move_to(0.0, -size);
    ctx.line_to(-size / 2.0, 0.0);
    ctx.line_to(size / 2.0, 0.0);
    ctx.close_path();
    ctx.fill();
    ctx.restore();

    ctx.set_fill_style_str(NORTH_COLOR);
    ctx.set_font("bold 10px Arial");
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    let _ = ctx.fill_text("N", x, y + size * 0.3);
}

/// Paint the station background described by `layout`, replacing the whole surface
pub fn draw_station_map(ctx: &CanvasRenderingContext2d, layout: &StationLayout) {
    let (width, height) = (layout.width, layout.height);
    ctx.clear_rect(0.0, 0.0, width, height);

    let background = match layout.variant {
        MapVariant::Simple => SIMPLE_BACKGROUND_COLOR,
        MapVariant::Detailed => DETAILED_BACKGROUND_COLOR,
    };
    ctx.set_fill_style_str(background);
    ctx.fill_rect(0.0, 0.0, width, height);

    draw_grid(ctx, layout);

    let outline = layout.outline;
    match layout.variant {
        MapVariant::Simple => {
            ctx.set_stroke_style_str(WALL_COLOR);
            ctx.set_line_width(WALL_LINE_WIDTH);
        }
        MapVariant::Detailed => {
            ctx.set_stroke_style_str(OUTLINE_COLOR);
            ctx.set_line_width(OUTLINE_LINE_WIDTH);
        }
    }
    ctx.stroke_rect(outline.x, outline.y, outline.width, outline.height);

    for region in &layout.regions {
        let r = region.rect;
        ctx.set_fill_style_str(region_color(region.kind));
        ctx.fill_rect(r.x, r.y, r.width, r.height);
    }

    for label in &layout.labels {
        draw_label(ctx, label, LABEL_COLOR);
    }

    if let Some(title) = &layout.title {
        draw_label(ctx, title, TITLE_COLOR);
    }

    if let Some((anchor, size)) = layout.north {
        draw_north_indicator(ctx, anchor, size);
    }
}

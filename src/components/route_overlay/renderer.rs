use super::plan::{ArrowTone, MarkerRole, RoutePlan, RouteProgress};
use crate::geometry::arrowhead;
use web_sys::CanvasRenderingContext2d;

const PLAIN_PATH_COLOR: &str = "#4361ee";
const COMPLETED_PATH_COLOR: &str = "#4cc9f0";
const REMAINING_PATH_COLOR: &str = "#adb5bd";
const PATH_LINE_WIDTH: f64 = 3.0;
const REMAINING_LINE_WIDTH: f64 = 2.0;
const REMAINING_DASH: [f64; 2] = [5.0, 5.0];

const ARROW_LENGTH: f64 = 9.0;
const ARROW_HALF_WIDTH: f64 = 4.5;

const MARKER_RADIUS: f64 = 8.0;
const START_COLOR: &str = "#4cc9f0";
const END_COLOR: &str = "#f72585";
const DEFAULT_COLOR: &str = "#4361ee";
const ACTIVE_COLOR: &str = "#fa5252";
const ACTIVE_OUTLINE_COLOR: &str = "#fff";
const ACTIVE_OUTLINE_WIDTH: f64 = 2.0;
const NUMBER_COLOR: &str = "#fff";
const NUMBER_FONT: &str = "bold 12px Arial";
const LABEL_COLOR: &str = "#212529";
const LABEL_FONT: &str = "bold 10px Arial";
const LABEL_OFFSET_Y: f64 = 20.0;

fn stroke_polyline(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)]) {
    let Some((&(x0, y0), rest)) = points.split_first() else { return };
    if rest.is_empty() {
        return;
    }
    ctx.begin_path();
    ctx.move_to(x0, y0);
    for &(x, y) in rest {
        ctx.line_to(x, y);
    }
    ctx.stroke();
}

fn set_dash(ctx: &CanvasRenderingContext2d, dash: &[f64]) {
    let pattern = js_sys::Array::new();
    for &d in dash {
        pattern.push(&d.into());
    }
    let _ = ctx.set_line_dash(&pattern);
}

fn draw_paths(ctx: &CanvasRenderingContext2d, plan: &RoutePlan) {
    let solid_color = match plan.progress {
        RouteProgress::Plain => PLAIN_PATH_COLOR,
        _ => COMPLETED_PATH_COLOR,
    };
    ctx.set_stroke_style_str(solid_color);
    ctx.set_line_width(PATH_LINE_WIDTH);
    stroke_polyline(ctx, &plan.completed);

    if plan.remaining.len() > 1 {
        ctx.save();
        set_dash(ctx, &REMAINING_DASH);
        ctx.set_stroke_style_str(REMAINING_PATH_COLOR);
        ctx.set_line_width(REMAINING_LINE_WIDTH);
        stroke_polyline(ctx, &plan.remaining);
        set_dash(ctx, &[]);
        ctx.restore();
    }
}

fn draw_arrows(ctx: &CanvasRenderingContext2d, plan: &RoutePlan) {
    for arrow in &plan.arrows {
        let color = match arrow.tone {
            ArrowTone::Neutral => PLAIN_PATH_COLOR,
            ArrowTone::Behind => COMPLETED_PATH_COLOR,
            ArrowTone::Ahead => REMAINING_PATH_COLOR,
        };
        let [tip, left, right] = arrowhead(arrow.at, arrow.angle, ARROW_LENGTH, ARROW_HALF_WIDTH);
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        ctx.move_to(tip.0, tip.1);
        ctx.line_to(left.0, left.1);
        ctx.line_to(right.0, right.1);
        ctx.close_path();
        ctx.fill();
    }
}

fn draw_markers(ctx: &CanvasRenderingContext2d, plan: &RoutePlan) {
    for marker in &plan.markers {
        let (x, y) = marker.center;
        ctx.begin_path();
        let _ = ctx.arc(x, y, MARKER_RADIUS, 0.0, 2.0 * std::f64::consts::PI);

        let fill = match marker.role {
            MarkerRole::Start => START_COLOR,
            MarkerRole::End => END_COLOR,
            MarkerRole::Active => ACTIVE_COLOR,
            MarkerRole::Default => DEFAULT_COLOR,
        };
        ctx.set_fill_style_str(fill);
        ctx.fill();

        if marker.role == MarkerRole::Active {
            ctx.set_stroke_style_str(ACTIVE_OUTLINE_COLOR);
            ctx.set_line_width(ACTIVE_OUTLINE_WIDTH);
            ctx.stroke();
        }

        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(NUMBER_COLOR);
        ctx.set_font(NUMBER_FONT);
        let _ = ctx.fill_text(&marker.number().to_string(), x, y);

        ctx.set_fill_style_str(LABEL_COLOR);
        ctx.set_font(LABEL_FONT);
        let _ = ctx.fill_text(&marker.label, x, y + LABEL_OFFSET_Y);
    }
}

/// Paint `plan` over whatever is already on the surface
pub fn draw_route(ctx: &CanvasRenderingContext2d, plan: &RoutePlan) {
    draw_paths(ctx, plan);
    draw_arrows(ctx, plan);
    draw_markers(ctx, plan);
}

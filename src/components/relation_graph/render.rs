use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use web_sys::CanvasRenderingContext2d;

use super::state::SimulationState;
use crate::graph::style::{self, EdgeStyle};

const BACKGROUND: &str = "#fff";

pub fn render(state: &SimulationState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.viewport.width, state.viewport.height);
	draw_edges(state, ctx);
	draw_loops(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_edges(state: &SimulationState, ctx: &CanvasRenderingContext2d) {
	state.graph.visit_edges(|n1, n2, edge| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}
		let info = &edge.user_data;
		let style = info.variant.style();
		let (r1, r2) = (n1.data.user_data.radius, n2.data.user_data.radius);
		let arrow_len = style.end_arrow.map_or(0.0, |a| a.length);

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.set_stroke_style_str(style.color);
		ctx.set_line_width(style.line_width);
		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.line_to(x2 - ux * (r2 + arrow_len), y2 - uy * (r2 + arrow_len));
		ctx.stroke();

		if let Some(arrow) = style.end_arrow {
			let (tip_x, tip_y) = (x2 - ux * r2, y2 - uy * r2);
			let (back_x, back_y) = (tip_x - ux * arrow.length, tip_y - uy * arrow.length);
			let (px, py) = (-uy * arrow.half_width, ux * arrow.half_width);
			ctx.set_fill_style_str(arrow.fill);
			ctx.begin_path();
			ctx.move_to(tip_x, tip_y);
			ctx.line_to(back_x + px, back_y + py);
			ctx.line_to(back_x - px, back_y - py);
			ctx.close_path();
			ctx.fill();
		}

		if let Some(label) = &info.label {
			draw_edge_label(ctx, style, label, (x1 + x2) / 2.0, (y1 + y2) / 2.0, dy.atan2(dx));
		}
	});
}

/// A self-loop is a circle straddling the node's upper-right rim.
fn draw_loops(state: &SimulationState, ctx: &CanvasRenderingContext2d) {
	for (idx, info) in &state.loops {
		let Some((x, y, radius)) = state.node_geometry(*idx) else {
			continue;
		};
		let style = info.variant.style();
		let loop_radius = radius * 0.6;
		let offset = radius * FRAC_PI_4.cos();
		let (lx, ly) = (x + offset, y - offset);

		ctx.set_stroke_style_str(style.color);
		ctx.set_line_width(style.line_width);
		ctx.begin_path();
		let _ = ctx.arc(lx, ly, loop_radius, 0.0, 2.0 * PI);
		ctx.stroke();

		if let Some(arrow) = style.end_arrow {
			// Tip where the loop re-enters the node, pointing down into it.
			let (tip_x, tip_y) = (lx + loop_radius * 0.3, y - radius * 0.55);
			ctx.set_fill_style_str(arrow.fill);
			ctx.begin_path();
			ctx.move_to(tip_x, tip_y);
			ctx.line_to(tip_x - arrow.half_width, tip_y - arrow.length);
			ctx.line_to(tip_x + arrow.half_width, tip_y - arrow.length);
			ctx.close_path();
			ctx.fill();
		}

		if let Some(label) = &info.label {
			draw_edge_label(ctx, style, label, lx, ly - loop_radius, 0.0);
		}
	}
}

fn draw_edge_label(
	ctx: &CanvasRenderingContext2d,
	style: &EdgeStyle,
	label: &str,
	x: f64,
	y: f64,
	angle: f64,
) {
	let label_style = &style.label;
	// Keep text upright whichever way the edge points.
	let angle = if !label_style.auto_rotate {
		0.0
	} else if angle > FRAC_PI_2 {
		angle - PI
	} else if angle < -FRAC_PI_2 {
		angle + PI
	} else {
		angle
	};

	ctx.save();
	let _ = ctx.translate(x, y);
	let _ = ctx.rotate(angle);
	ctx.set_font(&format!("{}px sans-serif", label_style.font_size));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_stroke_style_str(label_style.halo);
	ctx.set_line_width(label_style.halo_width);
	let _ = ctx.stroke_text(label, 0.0, 0.0);
	ctx.set_fill_style_str(label_style.fill);
	let _ = ctx.fill_text(label, 0.0, 0.0);
	ctx.restore();
}

fn draw_nodes(state: &SimulationState, ctx: &CanvasRenderingContext2d) {
	let node_style = &style::NODE;
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_font(&format!("{}px sans-serif", node_style.font_size));

	state.graph.visit_nodes(|node| {
		let (x, y, radius) = (node.x() as f64, node.y() as f64, node.data.user_data.radius);

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node_style.fill);
		ctx.fill();
		ctx.set_stroke_style_str(node_style.stroke);
		ctx.set_line_width(node_style.line_width);
		ctx.stroke();

		if let Some(label) = &node.data.user_data.label {
			ctx.set_fill_style_str(node_style.label_fill);
			let _ = ctx.fill_text(label, x, y);
		}
	});
}

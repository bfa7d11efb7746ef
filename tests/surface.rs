//! Browser tests for the canvas lifecycle. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use aspen_graph_canvas::RenderSurface;
use aspen_graph_canvas::config::VIEWPORT;
use aspen_graph_canvas::graph::{GraphModel, LayoutConfig, RawGraph};
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

fn mount() -> Element {
	let document = web_sys::window().unwrap().document().unwrap();
	let mount = document.create_element("div").unwrap();
	document.body().unwrap().append_child(&mount).unwrap();
	mount
}

fn model() -> GraphModel {
	let raw: RawGraph = serde_json::from_str(
		r#"{
			"nodes": [
				{"id": "liz", "attributes": {"name": "Liz"}},
				{"id": "jack", "attributes": {"name": "Jack"}}
			],
			"edges": [{"source": "liz", "target": "jack", "reciprocal": false, "label": "knows"}]
		}"#,
	)
	.unwrap();
	GraphModel::build(&raw)
}

#[wasm_bindgen_test]
fn rerender_keeps_a_single_canvas() {
	let mut surface = RenderSurface::new(mount(), LayoutConfig::default(), VIEWPORT);
	for _ in 0..3 {
		surface.update(&model()).unwrap();
		assert_eq!(surface.canvas_count(), 1);
	}
	assert!(surface.has_session());
}

#[wasm_bindgen_test]
fn stray_canvases_are_removed() {
	let mount = mount();
	let document = web_sys::window().unwrap().document().unwrap();
	for _ in 0..2 {
		let stray = document.create_element("canvas").unwrap();
		mount.append_child(&stray).unwrap();
	}

	let mut surface = RenderSurface::new(mount, LayoutConfig::default(), VIEWPORT);
	surface.update(&GraphModel::default()).unwrap();
	assert_eq!(surface.canvas_count(), 1);
}

#[wasm_bindgen_test]
fn destroy_clears_the_mount() {
	let mut surface = RenderSurface::new(mount(), LayoutConfig::default(), VIEWPORT);
	surface.update(&model()).unwrap();
	surface.destroy();
	assert!(!surface.has_session());
	assert_eq!(surface.canvas_count(), 0);

	surface.update(&model()).unwrap();
	assert_eq!(surface.canvas_count(), 1);
}

#[wasm_bindgen_test]
fn self_loop_renders_without_panicking() {
	let raw: RawGraph = serde_json::from_str(
		r#"{
			"nodes": [{"id": "liz", "attributes": {"name": "Liz"}}],
			"edges": [{"source": "liz", "target": "liz", "reciprocal": false, "label": "likes"}]
		}"#,
	)
	.unwrap();
	let mut surface = RenderSurface::new(mount(), LayoutConfig::default(), VIEWPORT);
	surface.update(&GraphModel::build(&raw)).unwrap();
	assert_eq!(surface.canvas_count(), 1);
}

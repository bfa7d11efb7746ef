use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use web_sys::Element;

use super::surface::RenderSurface;
use crate::config::{VIEWPORT, Viewport};
use crate::graph::layout::LayoutConfig;
use crate::graph::model::GraphModel;
use crate::graph::raw::RawGraph;

/// Force-directed drawing of the latest raw graph. Every change of `data` is a full render pass.
#[component]
pub fn RelationGraph(
	#[prop(into)] data: Signal<RawGraph>,
	#[prop(default = LayoutConfig::default())] layout: LayoutConfig,
	#[prop(default = VIEWPORT)] viewport: Viewport,
) -> impl IntoView {
	let mount_ref = NodeRef::<leptos::html::Div>::new();
	let surface: Rc<RefCell<Option<RenderSurface>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let raw = data.get();
		let Some(mount) = mount_ref.get() else {
			return;
		};
		let model = GraphModel::build(&raw);
		let mut surface = surface.borrow_mut();
		let surface = surface.get_or_insert_with(|| {
			let mount: Element = mount.into();
			RenderSurface::new(mount, layout, viewport)
		});
		if let Err(err) = surface.update(&model) {
			error!("render pass failed: {err}");
		}
	});

	view! { <div node_ref=mount_ref id="graphMountNode" class="graph-mount"></div> }
}

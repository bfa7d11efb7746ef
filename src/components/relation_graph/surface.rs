//! Canvas lifecycle under a mount element.
//!
//! A [`RenderSurface`] owns at most one [`RenderSession`]: the animation loop driving the
//! force simulation. The session is created on the first update and reused afterwards; every
//! update swaps in a fresh canvas and a fresh simulation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::{FRAME_DT, SimulationState};
use crate::config::Viewport;
use crate::error::{Error, Result};
use crate::graph::layout::LayoutConfig;
use crate::graph::model::GraphModel;

pub struct RenderSurface {
	mount: Element,
	config: LayoutConfig,
	viewport: Viewport,
	session: Option<RenderSession>,
}

impl RenderSurface {
	pub fn new(mount: Element, config: LayoutConfig, viewport: Viewport) -> Self {
		Self {
			mount,
			config,
			viewport,
			session: None,
		}
	}

	/// Run one render pass for `model`, replacing whatever was drawn before.
	pub fn update(&mut self, model: &GraphModel) -> Result<()> {
		let dangling = model.dangling_endpoints();
		if !dangling.is_empty() {
			warn!("edges reference unknown nodes {:?}; they are not drawn", dangling);
		}
		info!(
			"rendering {} nodes, {} edges",
			model.nodes.len(),
			model.edges.len()
		);

		clear_canvases(&self.mount);
		let canvas = attach_canvas(&self.mount, self.viewport)?;
		let state = SimulationState::new(model, &self.config, self.viewport);
		let session = match self.session.take() {
			Some(session) => session,
			None => RenderSession::create()?,
		};
		self.session.insert(session).load(canvas, state)
	}

	pub fn has_session(&self) -> bool {
		self.session.is_some()
	}

	pub fn canvas_count(&self) -> u32 {
		self.mount.get_elements_by_tag_name("canvas").length()
	}

	/// Stop the session and remove its canvas. A later update starts a new session.
	pub fn destroy(&mut self) {
		if let Some(mut session) = self.session.take() {
			session.destroy();
		}
		clear_canvases(&self.mount);
	}
}

impl Drop for RenderSurface {
	fn drop(&mut self) {
		self.destroy();
	}
}

/// Remove every canvas below `mount` so re-renders never stack surfaces.
pub fn clear_canvases(mount: &Element) {
	let canvases = mount.get_elements_by_tag_name("canvas");
	for i in (0..canvases.length()).rev() {
		if let Some(canvas) = canvases.item(i) {
			canvas.remove();
		}
	}
}

fn attach_canvas(mount: &Element, viewport: Viewport) -> Result<HtmlCanvasElement> {
	let document = mount.owner_document().ok_or(Error::NoDocument)?;
	let canvas: HtmlCanvasElement = document
		.create_element("canvas")?
		.dyn_into()
		.map_err(|_| Error::Js("created element is not a canvas".into()))?;
	canvas.set_width(viewport.width as u32);
	canvas.set_height(viewport.height as u32);
	canvas.set_class_name("relation-graph-canvas");
	mount.append_child(&canvas)?;
	Ok(canvas)
}

struct Scene {
	state: SimulationState,
	ctx: CanvasRenderingContext2d,
}

#[derive(Clone, Copy)]
enum Gesture {
	Start,
	Move,
	End,
}

const DRAG_EVENTS: [(&str, Gesture); 4] = [
	("mousedown", Gesture::Start),
	("mousemove", Gesture::Move),
	("mouseup", Gesture::End),
	("mouseleave", Gesture::End),
];

/// Drag handlers attached to one canvas.
struct Binding {
	canvas: HtmlCanvasElement,
	listeners: Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)>,
}

impl Binding {
	fn unbind(self) {
		for (event, cb) in &self.listeners {
			let _ = self
				.canvas
				.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
		}
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The live engine: an animation-frame loop stepping and drawing the current scene.
pub struct RenderSession {
	scene: Rc<RefCell<Option<Scene>>>,
	frame: FrameCallback,
	frame_id: Rc<Cell<Option<i32>>>,
	binding: Option<Binding>,
}

impl RenderSession {
	pub fn create() -> Result<Self> {
		let window = web_sys::window().ok_or(Error::NoWindow)?;
		let scene: Rc<RefCell<Option<Scene>>> = Rc::new(RefCell::new(None));
		let frame: FrameCallback = Rc::new(RefCell::new(None));
		let frame_id = Rc::new(Cell::new(None));

		let (scene_anim, frame_inner, id_inner) = (scene.clone(), frame.clone(), frame_id.clone());
		*frame.borrow_mut() = Some(Closure::new(move || {
			if let Some(s) = scene_anim.borrow_mut().as_mut() {
				s.state.tick(FRAME_DT);
				render::render(&s.state, &s.ctx);
			}
			if let (Some(cb), Some(win)) = (frame_inner.borrow().as_ref(), web_sys::window()) {
				id_inner.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));
		if let Some(cb) = frame.borrow().as_ref() {
			frame_id.set(Some(
				window.request_animation_frame(cb.as_ref().unchecked_ref())?,
			));
		}

		Ok(Self {
			scene,
			frame,
			frame_id,
			binding: None,
		})
	}

	/// Draw `state` on `canvas` from now on and rebind the drag handlers to it.
	pub fn load(&mut self, canvas: HtmlCanvasElement, state: SimulationState) -> Result<()> {
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(Error::NoContext)?
			.dyn_into()
			.map_err(|_| Error::NoContext)?;
		if let Some(old) = self.binding.take() {
			old.unbind();
		}
		render::render(&state, &ctx);
		*self.scene.borrow_mut() = Some(Scene { state, ctx });
		self.binding = Some(self.bind(canvas)?);
		Ok(())
	}

	fn bind(&self, canvas: HtmlCanvasElement) -> Result<Binding> {
		let mut listeners = Vec::with_capacity(DRAG_EVENTS.len());
		for (event, gesture) in DRAG_EVENTS {
			let (scene, target) = (self.scene.clone(), canvas.clone());
			let cb = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
				let rect = target.get_bounding_client_rect();
				let (x, y) = (
					ev.client_x() as f64 - rect.left(),
					ev.client_y() as f64 - rect.top(),
				);
				if let Some(s) = scene.borrow_mut().as_mut() {
					match gesture {
						Gesture::Start => {
							s.state.drag_start(x, y);
						}
						Gesture::Move => s.state.drag_move(x, y),
						Gesture::End => s.state.drag_end(),
					}
				}
			});
			canvas.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
			listeners.push((event, cb));
		}
		Ok(Binding { canvas, listeners })
	}

	pub fn destroy(&mut self) {
		if let (Some(id), Some(win)) = (self.frame_id.take(), web_sys::window()) {
			let _ = win.cancel_animation_frame(id);
		}
		self.frame.borrow_mut().take();
		if let Some(binding) = self.binding.take() {
			binding.unbind();
		}
		self.scene.borrow_mut().take();
	}
}

impl Drop for RenderSession {
	fn drop(&mut self) {
		self.destroy();
	}
}

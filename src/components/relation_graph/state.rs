use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use crate::config::Viewport;
use crate::graph::layout::{Cooling, DRAG_ALPHA_TARGET, DragMachine, LayoutConfig, Pin};
use crate::graph::model::{DisplayEdge, DisplayNode, GraphModel};
use crate::graph::style::StyleVariant;

/// Repulsion is `force_charge * m1 * m2 / d²`, so node mass carries per-node strength.
const FORCE_CHARGE: f32 = 150.0;
const STRENGTH_PER_MASS: f64 = 5.0;
/// Maps the configured edge strength onto the engine's spring constant.
const SPRING_SCALE: f64 = 0.1;
pub const FRAME_DT: f32 = 0.016;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub label: Option<String>,
	pub radius: f64,
}

#[derive(Clone, Debug, Default)]
pub struct EdgeInfo {
	pub label: Option<String>,
	pub variant: StyleVariant,
}

/// The force simulation for one render pass plus the drag gesture acting on it.
pub struct SimulationState {
	pub graph: ForceGraph<NodeInfo, EdgeInfo>,
	pub drag: DragMachine<DefaultNodeIdx>,
	pub cooling: Cooling,
	pub viewport: Viewport,
	/// Self-loops stay out of the engine, which cannot pair a node with itself.
	pub loops: Vec<(DefaultNodeIdx, EdgeInfo)>,
	/// Drawn edges only; edges with a dangling endpoint are left out.
	pub edge_count: usize,
}

pub fn simulation_parameters(config: &LayoutConfig) -> SimulationParameters {
	SimulationParameters {
		force_charge: FORCE_CHARGE,
		force_spring: (config.edge_strength * SPRING_SCALE) as f32,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	}
}

pub fn node_mass(config: &LayoutConfig, node: &DisplayNode) -> f32 {
	(config.node_strength(node).abs() / STRENGTH_PER_MASS) as f32
}

impl SimulationState {
	pub fn new(model: &GraphModel, config: &LayoutConfig, viewport: Viewport) -> Self {
		let mut graph = ForceGraph::new(simulation_parameters(config));
		let mut id_to_idx = HashMap::new();
		let (cx, cy) = (viewport.width / 2.0, viewport.height / 2.0);

		for (i, node) in model.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / model.nodes.len() as f64;
			let idx = graph.add_node(NodeData {
				x: (cx + config.link_distance * angle.cos()) as f32,
				y: (cy + config.link_distance * angle.sin()) as f32,
				mass: node_mass(config, node),
				is_anchor: false,
				user_data: NodeInfo {
					label: node.label.clone(),
					radius: node.radius(),
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		let (mut loops, mut edge_count) = (Vec::new(), 0);
		for edge in &model.edges {
			let (Some(&src), Some(&tgt)) = (
				id_to_idx.get(edge.source.as_str()),
				id_to_idx.get(edge.target.as_str()),
			) else {
				continue;
			};
			if src == tgt {
				loops.push((src, edge_info(edge)));
			} else {
				graph.add_edge(src, tgt, EdgeData {
					user_data: edge_info(edge),
				});
			}
			edge_count += 1;
		}

		Self {
			graph,
			drag: DragMachine::default(),
			cooling: Cooling::default(),
			viewport,
			loops,
			edge_count,
		}
	}

	/// Current `(x, y, radius)` of a node.
	pub fn node_geometry(&self, idx: DefaultNodeIdx) -> Option<(f64, f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64, node.data.user_data.radius));
			}
		});
		found
	}

	pub fn node_at_position(&self, x: f64, y: f64) -> Option<DefaultNodeIdx> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - x, node.y() as f64 - y);
			if (dx * dx + dy * dy).sqrt() <= node.data.user_data.radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Grab the node under the pointer, re-running the layout. Returns whether a node was hit.
	pub fn drag_start(&mut self, x: f64, y: f64) -> bool {
		let Some(idx) = self.node_at_position(x, y) else {
			return false;
		};
		if let Some(previous) = self.drag.start(idx, x, y) {
			self.set_anchor(previous, false);
		}
		self.cooling.reheat();
		self.cooling.set_target(DRAG_ALPHA_TARGET);
		self.apply_pin();
		debug!("drag start on node {:?}", idx);
		true
	}

	pub fn drag_move(&mut self, x: f64, y: f64) {
		if self.drag.drag_to(x, y).is_some() {
			self.apply_pin();
		}
	}

	pub fn drag_end(&mut self) {
		if let Some(idx) = self.drag.end() {
			self.set_anchor(idx, false);
			self.cooling.set_target(0.0);
			debug!("drag end on node {:?}", idx);
		}
	}

	pub fn is_pinned(&self, idx: DefaultNodeIdx) -> bool {
		let mut pinned = false;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				pinned = node.data.is_anchor;
			}
		});
		pinned
	}

	pub fn tick(&mut self, dt: f32) {
		let Some(alpha) = self.cooling.step() else {
			return;
		};
		self.graph.update(dt * alpha as f32);
		self.apply_pin();
	}

	fn apply_pin(&mut self) {
		let Some(Pin { node: idx, x, y }) = self.drag.pin() else {
			return;
		};
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = x as f32;
				node.data.y = y as f32;
				node.data.is_anchor = true;
			}
		});
	}

	fn set_anchor(&mut self, idx: DefaultNodeIdx, anchored: bool) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = anchored;
			}
		});
	}
}

fn edge_info(edge: &DisplayEdge) -> EdgeInfo {
	EdgeInfo {
		label: edge.label.clone(),
		variant: edge.style_variant,
	}
}

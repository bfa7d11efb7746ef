//! Force-layout parameters and the drag gesture that pins nodes.

use super::model::DisplayNode;

/// Parameters handed to the force simulation.
///
/// More negative strengths repel harder: leaves are pushed apart at -50 while hubs stay
/// compact at -10.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
	pub link_distance: f64,
	pub leaf_strength: f64,
	pub hub_strength: f64,
	pub edge_strength: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			link_distance: 100.0,
			leaf_strength: -50.0,
			hub_strength: -10.0,
			edge_strength: 0.5,
		}
	}
}

impl LayoutConfig {
	pub fn node_strength(&self, node: &DisplayNode) -> f64 {
		if node.is_leaf {
			self.leaf_strength
		} else {
			self.hub_strength
		}
	}
}

pub const ALPHA_MIN: f64 = 0.001;
/// Reaches [`ALPHA_MIN`] from 1.0 in about 300 steps.
pub const ALPHA_DECAY: f64 = 0.0228;
pub const DRAG_ALPHA_TARGET: f64 = 0.3;

/// Simulation temperature. The engine only steps while this is running.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cooling {
	alpha: f64,
	target: f64,
}

impl Default for Cooling {
	fn default() -> Self {
		Self {
			alpha: 1.0,
			target: 0.0,
		}
	}
}

impl Cooling {
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	pub fn is_running(&self) -> bool {
		self.alpha >= ALPHA_MIN || self.target >= ALPHA_MIN
	}

	/// Restart the layout from full temperature.
	pub fn reheat(&mut self) {
		self.alpha = 1.0;
	}

	pub fn set_target(&mut self, target: f64) {
		self.target = target;
	}

	/// Advance one step, returning the new alpha, or `None` once cooled down.
	pub fn step(&mut self) -> Option<f64> {
		if !self.is_running() {
			return None;
		}
		self.alpha += (self.target - self.alpha) * ALPHA_DECAY;
		Some(self.alpha)
	}
}

/// A node's simulated position held fixed under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pin<N> {
	pub node: N,
	pub x: f64,
	pub y: f64,
}

/// `Idle -> Dragging -> Idle`. The pin exists exactly while dragging.
#[derive(Clone, Debug)]
pub struct DragMachine<N> {
	pin: Option<Pin<N>>,
}

impl<N> Default for DragMachine<N> {
	fn default() -> Self {
		Self { pin: None }
	}
}

impl<N: Copy + PartialEq> DragMachine<N> {
	pub fn is_dragging(&self) -> bool {
		self.pin.is_some()
	}

	pub fn pin(&self) -> Option<Pin<N>> {
		self.pin
	}

	/// Begin dragging `node` at the pointer. Returns a node left pinned by an unfinished
	/// gesture, which the caller must release.
	pub fn start(&mut self, node: N, x: f64, y: f64) -> Option<N> {
		let previous = self.pin.take().map(|p| p.node).filter(|&n| n != node);
		self.pin = Some(Pin { node, x, y });
		previous
	}

	/// Follow the pointer. Ignored while idle.
	pub fn drag_to(&mut self, x: f64, y: f64) -> Option<Pin<N>> {
		let pin = self.pin.as_mut()?;
		pin.x = x;
		pin.y = y;
		Some(*pin)
	}

	/// Drop the pin, returning the node it held.
	pub fn end(&mut self) -> Option<N> {
		self.pin.take().map(|p| p.node)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::model::GraphModel;
	use crate::graph::raw::{RawEdge, RawGraph, RawNode};

	#[test]
	fn strengths_keep_signs_and_magnitudes() {
		let raw = RawGraph {
			nodes: ["hub", "a", "b"]
				.into_iter()
				.map(|id| RawNode {
					id: id.into(),
					attributes: [("name".to_string(), id.to_string())].into_iter().collect(),
				})
				.collect(),
			edges: vec![
				RawEdge {
					source: "hub".into(),
					target: "a".into(),
					..Default::default()
				},
				RawEdge {
					source: "hub".into(),
					target: "b".into(),
					..Default::default()
				},
			],
		};
		let model = GraphModel::build(&raw);
		let config = LayoutConfig::default();

		assert_eq!(config.node_strength(model.node("hub").unwrap()), -10.0);
		assert_eq!(config.node_strength(model.node("a").unwrap()), -50.0);
		assert_eq!(config.link_distance, 100.0);
		assert_eq!(config.edge_strength, 0.5);
	}

	#[test]
	fn drag_never_leaves_a_pin_behind() {
		for moves in [0usize, 1, 7, 50] {
			let mut drag = DragMachine::default();
			assert_eq!(drag.start(3usize, 10.0, 10.0), None);
			for i in 0..moves {
				let pin = drag.drag_to(i as f64, -(i as f64)).unwrap();
				assert_eq!((pin.node, pin.x, pin.y), (3, i as f64, -(i as f64)));
			}
			assert_eq!(drag.end(), Some(3));
			assert!(!drag.is_dragging());
			assert_eq!(drag.pin(), None);
		}
	}

	#[test]
	fn idle_moves_and_ends_are_ignored() {
		let mut drag = DragMachine::<usize>::default();
		assert_eq!(drag.drag_to(1.0, 1.0), None);
		assert_eq!(drag.end(), None);
		assert!(!drag.is_dragging());
	}

	#[test]
	fn restarting_mid_gesture_releases_previous_node() {
		let mut drag = DragMachine::default();
		drag.start(1usize, 0.0, 0.0);
		assert_eq!(drag.start(2, 5.0, 5.0), Some(1));
		assert_eq!(drag.start(2, 6.0, 6.0), None);
		assert_eq!(drag.end(), Some(2));
	}

	#[test]
	fn cooling_stops_and_reheats() {
		let mut cooling = Cooling::default();
		let mut steps = 0;
		while cooling.step().is_some() {
			steps += 1;
			assert!(steps < 1000);
		}
		assert!((250..350).contains(&steps));
		assert!(!cooling.is_running());

		cooling.reheat();
		assert!(cooling.is_running());
		assert_eq!(cooling.alpha(), 1.0);
	}

	#[test]
	fn drag_target_keeps_simulation_running() {
		let mut cooling = Cooling::default();
		cooling.set_target(DRAG_ALPHA_TARGET);
		for _ in 0..2000 {
			assert!(cooling.step().is_some());
		}
		assert!((cooling.alpha() - DRAG_ALPHA_TARGET).abs() < 1e-6);

		cooling.set_target(0.0);
		assert!(cooling.is_running());
	}
}

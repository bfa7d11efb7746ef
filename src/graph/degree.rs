use std::collections::HashMap;

use super::raw::RawEdge;

/// Incident-edge counts per node id.
///
/// Every edge contributes one count to each endpoint, so a self-loop counts twice
/// for its node. Ids that appear only in edges are counted like any other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeIndex {
	counts: HashMap<String, usize>,
}

impl DegreeIndex {
	pub fn compute(edges: &[RawEdge]) -> Self {
		let mut counts = HashMap::new();
		for id in edges
			.iter()
			.flat_map(|edge| [edge.source.as_str(), edge.target.as_str()])
		{
			*counts.entry(id.to_owned()).or_insert(0) += 1;
		}
		Self { counts }
	}

	/// Degree of `id`, zero when no edge references it.
	pub fn degree(&self, id: &str) -> usize {
		self.counts.get(id).copied().unwrap_or(0)
	}

	/// Sum of all counts; always twice the number of edges.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn edge(source: &str, target: &str) -> RawEdge {
		RawEdge {
			source: source.into(),
			target: target.into(),
			..Default::default()
		}
	}

	#[test]
	fn empty_edges_give_empty_index() {
		let index = DegreeIndex::compute(&[]);
		assert_eq!(index, DegreeIndex::default());
		assert_eq!(index.total(), 0);
	}

	#[test]
	fn counts_both_endpoints() {
		let index = DegreeIndex::compute(&[edge("A", "B"), edge("A", "C")]);
		assert_eq!(index.degree("A"), 2);
		assert_eq!(index.degree("B"), 1);
		assert_eq!(index.degree("C"), 1);
		assert_eq!(index.degree("Z"), 0);
	}

	#[test]
	fn self_loop_counts_twice() {
		let index = DegreeIndex::compute(&[edge("A", "A")]);
		assert_eq!(index.degree("A"), 2);
	}

	#[test]
	fn total_is_twice_edge_count() {
		let edges = vec![
			edge("A", "B"),
			edge("B", "A"),
			edge("A", "B"),
			edge("C", "C"),
			edge("D", "ghost"),
		];
		let index = DegreeIndex::compute(&edges);
		assert_eq!(index.total(), 2 * edges.len());
		assert_eq!(index.degree("ghost"), 1);
	}

	/// Deterministic edge lists over a small id pool, so ids repeat and self-loops occur.
	fn generated_edges(len: usize, seed: usize) -> Vec<RawEdge> {
		const IDS: [&str; 5] = ["A", "B", "C", "D", "E"];
		let mut x = seed;
		let mut next = move || {
			x = (x * 9301 + 49297) % 233280;
			IDS[(x / 7) % IDS.len()]
		};
		(0..len)
			.map(|i| {
				let source = next();
				let target = if i % 7 == 3 { source } else { next() };
				edge(source, target)
			})
			.collect()
	}

	#[test]
	fn total_is_twice_edge_count_for_generated_lists() {
		let mut saw_self_loop = false;
		for len in 0..40 {
			for seed in 0..5 {
				let edges = generated_edges(len, seed);
				saw_self_loop |= edges.iter().any(|e| e.source == e.target);
				let index = DegreeIndex::compute(&edges);
				assert_eq!(index.total(), 2 * edges.len(), "len {len} seed {seed}");
				for id in ["A", "B", "C", "D", "E"] {
					let endpoints = edges
						.iter()
						.map(|e| (e.source == id) as usize + (e.target == id) as usize)
						.sum::<usize>();
					assert_eq!(index.degree(id), endpoints);
				}
			}
		}
		assert!(saw_self_loop);
	}

	#[test]
	fn order_does_not_matter() {
		let forward = vec![edge("A", "B"), edge("B", "C"), edge("C", "A"), edge("A", "D")];
		let mut reversed = forward.clone();
		reversed.reverse();
		assert_eq!(DegreeIndex::compute(&forward), DegreeIndex::compute(&reversed));
	}
}

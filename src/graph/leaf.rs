use super::degree::DegreeIndex;

/// A leaf has exactly one incident edge. Unknown ids are not leaves.
pub fn is_leaf(node_id: &str, degrees: &DegreeIndex) -> bool {
	degrees.degree(node_id) == 1
}

//! Identity-based structural diff of two shape trees.

use std::collections::HashMap;

use crate::scene::model::ShapeNode;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// A node present on one side only.
pub struct NodeSlot {
    /// Index in its sibling list.
    pub index: usize,
    /// Node id.
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// A node present on both sides, with the diff of its children.
pub struct MatchedNode {
    pub from_index: usize,
    pub to_index: usize,
    pub id: String,
    pub children: NodeDiff,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Three-way partition of two sibling lists.
///
/// Inserted and deleted entries name the top-most differing node; their descendants travel
/// with them. Matched pairs carry the recursive diff of their children, so every node of
/// either tree is accounted for exactly once.
pub struct NodeDiff {
    /// Pairs in source order.
    pub matched: Vec<MatchedNode>,
    /// Target-only nodes in target order.
    pub inserted: Vec<NodeSlot>,
    /// Source-only nodes in source order.
    pub deleted: Vec<NodeSlot>,
}

impl NodeDiff {
    /// No insertions or deletions anywhere in the tree.
    pub fn is_structurally_equal(&self) -> bool {
        self.inserted.is_empty()
            && self.deleted.is_empty()
            && self
                .matched
                .iter()
                .all(|m| m.children.is_structurally_equal())
    }

    /// `(matched, inserted, deleted)` counts over the whole tree.
    pub fn totals(&self) -> (usize, usize, usize) {
        self.matched.iter().fold(
            (self.matched.len(), self.inserted.len(), self.deleted.len()),
            |(m, i, d), pair| {
                let (cm, ci, cd) = pair.children.totals();
                (m + cm, i + ci, d + cd)
            },
        )
    }
}

/// Diff two sibling lists by id.
///
/// The k-th sibling carrying a given id in `from` matches the k-th sibling with that id in
/// `to`; no content comparison takes place. Children of matched pairs are diffed
/// recursively.
pub fn diff_nodes(from: &[ShapeNode], to: &[ShapeNode]) -> NodeDiff {
    let mut targets: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, node) in to.iter().enumerate() {
        targets.entry(node.id.as_str()).or_default().push(index);
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut taken = vec![false; to.len()];
    let mut diff = NodeDiff::default();

    for (from_index, node) in from.iter().enumerate() {
        let occurrence = seen.entry(node.id.as_str()).or_insert(0);
        let partner = targets
            .get(node.id.as_str())
            .and_then(|slots| slots.get(*occurrence))
            .copied();
        *occurrence += 1;

        match partner {
            Some(to_index) => {
                taken[to_index] = true;
                diff.matched.push(MatchedNode {
                    from_index,
                    to_index,
                    id: node.id.clone(),
                    children: diff_nodes(&node.children, &to[to_index].children),
                });
            }
            None => diff.deleted.push(NodeSlot {
                index: from_index,
                id: node.id.clone(),
            }),
        }
    }

    diff.inserted = to
        .iter()
        .enumerate()
        .filter(|(index, _)| !taken[*index])
        .map(|(index, node)| NodeSlot {
            index,
            id: node.id.clone(),
        })
        .collect();

    diff
}

#[cfg(test)]
#[path = "../../tests/unit/scene/diff.rs"]
mod tests;

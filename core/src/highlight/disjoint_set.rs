// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Union-find over span start positions, used by
//! [`crate::GroupingPolicy::Transitive`]. Nodes are numbered in the order their key was
//! first inserted, so iterating `0..len()` visits spans in discovery order.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    node_of_key: HashMap<usize, usize>,
}

impl DisjointSet {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn len(&self) -> usize { self.parent.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the node for `key`, creating a singleton set for it if needed.
    pub fn insert(&mut self, key: usize) -> usize {
        let next_node = self.parent.len();
        let node = *self.node_of_key.entry(key).or_insert(next_node);
        if node == next_node {
            self.parent.push(node);
            self.rank.push(0);
        }
        node
    }

    #[must_use]
    pub fn node_of(&self, key: usize) -> Option<usize> { self.node_of_key.get(&key).copied() }

    /// Root of the set containing `node`. Compresses the path along the way.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets containing `lhs` and `rhs` (union by rank). Returns the root of
    /// the merged set.
    pub fn union(&mut self, lhs: usize, rhs: usize) -> usize {
        let lhs_root = self.find(lhs);
        let rhs_root = self.find(rhs);
        if lhs_root == rhs_root {
            return lhs_root;
        }

        match self.rank[lhs_root].cmp(&self.rank[rhs_root]) {
            std::cmp::Ordering::Less => {
                self.parent[lhs_root] = rhs_root;
                rhs_root
            }
            std::cmp::Ordering::Greater => {
                self.parent[rhs_root] = lhs_root;
                lhs_root
            }
            std::cmp::Ordering::Equal => {
                self.parent[rhs_root] = lhs_root;
                self.rank[lhs_root] = self.rank[lhs_root].saturating_add(1);
                lhs_root
            }
        }
    }

    /// Root of the set containing `key`, if `key` was ever inserted.
    pub fn find_key(&mut self, key: usize) -> Option<usize> {
        self.node_of(key).map(|node| self.find(node))
    }

    /// Number of disjoint sets.
    pub fn set_count(&mut self) -> usize {
        (0..self.len()).filter(|&node| self.find(node) == node).count()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = DisjointSet::new();
        assert_eq!(set.insert(10), 0);
        assert_eq!(set.insert(20), 1);
        assert_eq!(set.insert(10), 0);
        assert_eq!(set.len(), 2);
        assert_eq!(set.node_of(20), Some(1));
        assert_eq!(set.node_of(30), None);
    }

    #[test]
    fn test_union_is_transitive() {
        let mut set = DisjointSet::new();
        let [a, b, c, d] = [0, 4, 8, 20].map(|key| set.insert(key));

        set.union(a, b);
        set.union(c, b);

        assert_eq!(set.find(a), set.find(c));
        assert_ne!(set.find(a), set.find(d));
        assert_eq!(set.find_key(8), set.find_key(0));
        assert_eq!(set.find_key(99), None);
        assert_eq!(set.set_count(), 2);
    }

    #[test]
    fn test_long_chain_compresses() {
        let mut set = DisjointSet::new();
        let nodes: Vec<usize> = (0..100).map(|key| set.insert(key)).collect();
        for pair in nodes.windows(2) {
            set.union(pair[1], pair[0]);
        }
        let root = set.find(nodes[99]);
        assert!(nodes.iter().all(|&node| set.find(node) == root));
        assert_eq!(set.set_count(), 1);
    }
}

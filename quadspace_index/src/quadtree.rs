// Copyright 2025 the Quadspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The quadtree: node arena, routing rules, and the public operations.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use quadspace_geometry::{AxisBox, Coord, Point, Square, contains, intersects};

/// Key capability for the quadtree: an axis-aligned box with a total
/// order, cloneable so callers can take query results by value.
pub trait BoxKey: AxisBox + Ord + Clone {}

impl<T: AxisBox + Ord + Clone> BoxKey for T {}

type KeyCoord<K: BoxKey> = <K as AxisBox>::Coord;

/// The four quadrant positions of a node, in z-order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ZOrderPos {
    LeftTop = 0,
    LeftBottom = 1,
    RightTop = 2,
    RightBottom = 3,
}

struct Node<K: BoxKey> {
    region: Square<KeyCoord<K>>,
    children: [Option<usize>; 4],
    values: BTreeSet<K>,
}

impl<K: BoxKey> Node<K> {
    fn new(region: Square<KeyCoord<K>>) -> Self {
        Self {
            region,
            children: [None; 4],
            values: BTreeSet::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.values.is_empty() && self.children.iter().all(Option::is_none)
    }
}

/// An ordered set of axis-aligned box keys supporting window queries.
///
/// The indexed region adapts to the data: the root's square region
/// doubles until it spans any newly inserted key ("grow up"), and child
/// quadrants are materialized on demand ("grow down"). A key whose
/// extent crosses a node's split lines is held at that node rather than
/// pushed deeper, so every key lives in exactly one node — the
/// shallowest one whose split lines pass through it, or a unit-sized
/// leaf.
///
/// Region sizes are powers of two and the root is anchored at the
/// origin; keys are expected to lie in the positive quadrant. Keys with
/// negative coordinates are out of contract.
///
/// Nodes live in a slot arena owned by the tree; dropping the tree
/// releases everything at once.
pub struct QuadTree<K: BoxKey> {
    nodes: Vec<Option<Node<K>>>,
    free_list: Vec<usize>,
    root: Option<usize>,
    len: usize,
}

impl<K: BoxKey> Default for QuadTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: BoxKey> fmt::Debug for QuadTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("QuadTree")
            .field("len", &self.len)
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("has_root", &self.root.is_some())
            .finish_non_exhaustive()
    }
}

impl<K: BoxKey> QuadTree<K> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// The number of stored keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every stored key and node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.root = None;
        self.len = 0;
    }

    /// Insert a key. Returns `true` iff it was not already present.
    pub fn insert(&mut self, key: K) -> bool {
        if self.root.is_none() {
            self.create_root(&key);
        }
        self.grow_up(&key);
        let target = self.grow_down(&key);
        let inserted = self.node_mut(target).values.insert(key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Whether the exact key is stored.
    pub fn contains(&self, key: &K) -> bool {
        match self.find_node(key) {
            Some(idx) => self.node(idx).values.contains(key),
            None => false,
        }
    }

    /// Remove a key. Returns `true` iff it was present.
    ///
    /// The owning node is dropped when it becomes empty; emptied
    /// ancestors are left in place.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some((idx, parent)) = self.find_node_with_parent(key) else {
            return false;
        };
        if !self.node_mut(idx).values.remove(key) {
            return false;
        }
        self.len -= 1;
        if self.node(idx).is_empty() {
            self.free(idx);
            match parent {
                Some((parent_idx, slot)) => self.node_mut(parent_idx).children[slot] = None,
                None => self.root = None,
            }
        }
        true
    }

    /// All stored keys intersecting `window`, in unspecified order.
    ///
    /// Each key lives in exactly one node, so no duplicates are
    /// possible. Subtrees whose region misses the window are pruned.
    pub fn query<'a>(&'a self, window: &K) -> impl Iterator<Item = &'a K> + use<'a, K> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push(root);
        }
        while let Some(idx) = stack.pop() {
            let node = self.node(idx);
            if !intersects(window, &node.region) {
                continue;
            }
            stack.extend(node.children.iter().flatten().copied());
            for value in &node.values {
                if intersects(window, value) {
                    out.push(value);
                }
            }
        }
        out.into_iter()
    }

    // --- internals ---

    fn node(&self, idx: usize) -> &Node<K> {
        self.nodes[idx].as_ref().expect("dangling node index")
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<K> {
        self.nodes[idx].as_mut().expect("dangling node index")
    }

    fn alloc(&mut self, node: Node<K>) -> usize {
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx] = Some(node);
            idx
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }

    fn free(&mut self, idx: usize) {
        self.nodes[idx] = None;
        self.free_list.push(idx);
    }

    /// First-insert root: the smallest origin-anchored power-of-two
    /// square strictly past the key's far corner, or a unit square when
    /// the key sits at or below the origin.
    fn create_root(&mut self, key: &K) {
        let corner = key.top_right();
        let reach = if corner.x < corner.y { corner.y } else { corner.x };
        let mut size = <KeyCoord<K>>::one();
        while size <= reach {
            size = size.double();
        }
        let origin = Point::new(<KeyCoord<K>>::zero(), <KeyCoord<K>>::zero());
        let idx = self.alloc(Node::new(Square::new(origin, size)));
        self.root = Some(idx);
    }

    /// Double the root region until it contains the key, keeping the
    /// old root as the new root's lower-left quadrant.
    fn grow_up(&mut self, key: &K) {
        loop {
            let Some(root_idx) = self.root else { return };
            let region = self.node(root_idx).region;
            if contains(&region, key) {
                return;
            }
            let mut grown = Node::new(Square::new(region.pos, region.size.double()));
            grown.children[ZOrderPos::LeftBottom as usize] = Some(root_idx);
            let idx = self.alloc(grown);
            self.root = Some(idx);
        }
    }

    /// Descend to the node that must hold the key, materializing
    /// children on the way. Stops where the key straddles the split
    /// lines or the region is unit-sized.
    fn grow_down(&mut self, key: &K) -> usize {
        let mut current = self.root.expect("root exists during insert");
        loop {
            let region = self.node(current).region;
            if straddles_split(key, &region) || region.size == <KeyCoord<K>>::one() {
                return current;
            }
            let z = z_order(&region, key);
            let slot = z as usize;
            current = match self.node(current).children[slot] {
                Some(idx) => idx,
                None => {
                    let idx = self.alloc(Node::new(child_region(&region, z)));
                    self.node_mut(current).children[slot] = Some(idx);
                    idx
                }
            };
        }
    }

    fn find_node(&self, key: &K) -> Option<usize> {
        self.find_node_with_parent(key).map(|(idx, _)| idx)
    }

    /// Descend without materializing. Returns the owning node and its
    /// parent slot, or `None` when the path is not built out.
    fn find_node_with_parent(&self, key: &K) -> Option<(usize, Option<(usize, usize)>)> {
        let mut parent = None;
        let mut current = self.root?;
        loop {
            let node = self.node(current);
            if straddles_split(key, &node.region) {
                return Some((current, parent));
            }
            let slot = z_order(&node.region, key) as usize;
            parent = Some((current, slot));
            current = node.children[slot]?;
        }
    }
}

fn middle<C: Coord>(region: &Square<C>) -> Point<C> {
    let half = region.size / C::two();
    Point::new(region.pos.x + half, region.pos.y + half)
}

/// Whether the key's extent crosses either of the region's split lines.
fn straddles_split<K: BoxKey>(key: &K, region: &Square<KeyCoord<K>>) -> bool {
    let Point { x: mid_x, y: mid_y } = middle(region);
    let pos = key.pos();
    (pos.x <= mid_x && mid_x <= pos.x + key.width())
        || (pos.y <= mid_y && mid_y <= pos.y + key.height())
}

/// Quadrant of the key's bottom-left corner relative to the region
/// center.
fn z_order<K: BoxKey>(region: &Square<KeyCoord<K>>, key: &K) -> ZOrderPos {
    let Point { x: mid_x, y: mid_y } = middle(region);
    let pos = key.pos();
    if pos.x < mid_x {
        if pos.y > mid_y {
            ZOrderPos::LeftTop
        } else {
            ZOrderPos::LeftBottom
        }
    } else if pos.y > mid_y {
        ZOrderPos::RightTop
    } else {
        ZOrderPos::RightBottom
    }
}

fn child_region<C: Coord>(region: &Square<C>, z: ZOrderPos) -> Square<C> {
    let Point { x: mid_x, y: mid_y } = middle(region);
    let size = region.size.halve();
    match z {
        ZOrderPos::LeftTop => Square::new(Point::new(region.pos.x, mid_y), size),
        ZOrderPos::LeftBottom => Square::new(region.pos, size),
        ZOrderPos::RightTop => Square::new(Point::new(mid_x, mid_y), size),
        ZOrderPos::RightBottom => Square::new(Point::new(mid_x, region.pos.y), size),
    }
}

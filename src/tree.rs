use std::collections::HashSet;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::error::Error;
use crate::scanner::{Segment, SegmentKind};
use crate::value::Value;
use crate::Result;

type NodeId = usize;

/// One arena slot. `Leaf` holds any transformed value, including containers
/// a custom transform may have produced whole; those are opaque here and
/// can never be traversed into.
#[derive(Debug)]
enum Node {
    Leaf(Value),
    Object(IndexMap<SmolStr, NodeId>),
    /// Elements as `(index, child)` pairs, in write order. Explicit
    /// indexing makes the sequence sparse and unordered; the compaction
    /// pass sorts it by index. Storing pairs keeps an entry like `a[9999]`
    /// at one slot instead of one per skipped position.
    Array(Vec<(usize, NodeId)>),
}

impl Node {
    fn empty(kind: SegmentKind) -> Self {
        match kind {
            SegmentKind::Object => Node::Object(IndexMap::new()),
            SegmentKind::Array => Node::Array(Vec::new()),
        }
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
}

/// Arena-backed output tree under construction.
///
/// Containers live in a flat `Vec` and refer to children by index, so the
/// ordered-array registry can key on arena indices instead of node
/// identity. The tree is exclusively owned for the duration of one parse
/// call and consumed by [`Tree::into_value`].
#[derive(Debug)]
pub(crate) struct Tree {
    nodes: Vec<Node>,
    /// Arrays that received at least one explicit-index write. Membership
    /// both pins the array's addressing mode and selects it for
    /// compaction.
    indexed: HashSet<NodeId>,
}

impl Tree {
    const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![Node::Object(IndexMap::new())],
            indexed: HashSet::new(),
        }
    }

    /// Writes one leaf at the position the segments describe, creating
    /// missing containers along the way. Fails on the first conflict; a
    /// segment-less path writes nothing.
    pub fn insert(&mut self, segments: &[Segment], leaf: Value) -> Result<()> {
        let Some((last, walk)) = segments.split_last() else {
            return Ok(());
        };
        let mut current = Self::ROOT;
        for segment in walk {
            current = self.descend(current, segment)?;
        }
        self.place(current, last, leaf)
    }

    /// Resolves one intermediate segment against `current`, creating the
    /// segment's default container when nothing exists there yet.
    fn descend(&mut self, current: NodeId, segment: &Segment) -> Result<NodeId> {
        match segment.kind {
            SegmentKind::Object => {
                let Node::Object(members) = &self.nodes[current] else {
                    return Err(Error::conflict(segment.path_so_far()));
                };
                match members.get(&segment.key).copied() {
                    // A leaf cannot be traversed through.
                    Some(child) if self.nodes[child].is_leaf() => {
                        Err(Error::conflict(segment.path_so_far()))
                    }
                    Some(child) => Ok(child),
                    None => {
                        let child = self.alloc(Node::empty(segment.child_kind));
                        self.attach_member(current, &segment.key, child);
                        Ok(child)
                    }
                }
            }
            SegmentKind::Array => {
                let index = self.array_index(current, segment)?;
                match self.element(current, index) {
                    Some(child) if self.nodes[child].is_leaf() => {
                        Err(Error::conflict(segment.path_so_far()))
                    }
                    Some(child) => Ok(child),
                    None => {
                        let child = self.alloc(Node::empty(segment.child_kind));
                        self.push_element(current, index, child);
                        Ok(child)
                    }
                }
            }
        }
    }

    /// Writes the leaf at the final segment. The target position must be
    /// unoccupied; first write wins.
    fn place(&mut self, current: NodeId, segment: &Segment, leaf: Value) -> Result<()> {
        match segment.kind {
            SegmentKind::Object => {
                let Node::Object(members) = &self.nodes[current] else {
                    return Err(Error::conflict(segment.path_so_far()));
                };
                if members.contains_key(&segment.key) {
                    return Err(Error::conflict(segment.path_so_far()));
                }
                let child = self.alloc(Node::Leaf(leaf));
                self.attach_member(current, &segment.key, child);
            }
            SegmentKind::Array => {
                let index = self.array_index(current, segment)?;
                if self.element(current, index).is_some() {
                    return Err(Error::conflict(segment.path_so_far()));
                }
                let child = self.alloc(Node::Leaf(leaf));
                self.push_element(current, index, child);
            }
        }
        Ok(())
    }

    /// Addressing-mode bookkeeping for one array write. Returns the logical
    /// index written: the parsed digits for explicit segments, the element
    /// count (append) for push segments.
    ///
    /// The first write establishes the array's mode: once any explicit
    /// index lands, pushes are rejected, and an explicit index into an
    /// array that already took pushes is rejected as well.
    fn array_index(&mut self, current: NodeId, segment: &Segment) -> Result<usize> {
        let Node::Array(items) = &self.nodes[current] else {
            return Err(Error::conflict(segment.path_so_far()));
        };
        let len = items.len();
        if segment.key.is_empty() {
            if self.indexed.contains(&current) {
                return Err(Error::mixed_indexing(segment.path_so_far()));
            }
            Ok(len)
        } else {
            if !self.indexed.contains(&current) {
                if len > 0 {
                    return Err(Error::mixed_indexing(segment.path_so_far()));
                }
                self.indexed.insert(current);
            }
            // The scanner only emits digits here, so the sole failure mode
            // is an index that does not fit in usize.
            segment
                .key
                .parse()
                .map_err(|_| Error::conflict(segment.path_so_far()))
        }
    }

    /// Orders every explicitly indexed array by ascending index, which is
    /// what discards the gaps sparse indexing left behind. Push arrays are
    /// already in input order and are not in the registry.
    pub fn compact(&mut self) {
        for &id in &self.indexed {
            if let Node::Array(items) = &mut self.nodes[id] {
                items.sort_unstable_by_key(|&(index, _)| index);
            }
        }
    }

    /// Consumes the arena into the public value tree rooted at the whole-
    /// result object.
    ///
    /// Children are always allocated after their parent, so one reverse
    /// walk over the arena materializes every child before the node that
    /// refers to it; nesting depth never touches the call stack.
    pub fn into_value(self) -> Value {
        let mut built: Vec<Option<Value>> = Vec::new();
        built.resize_with(self.nodes.len(), || None);
        for (id, node) in self.nodes.into_iter().enumerate().rev() {
            let value = match node {
                Node::Leaf(value) => value,
                Node::Object(members) => Value::Object(
                    members
                        .into_iter()
                        .map(|(key, child)| {
                            (key.to_string(), built[child].take().unwrap_or_default())
                        })
                        .collect(),
                ),
                Node::Array(items) => Value::Array(
                    items
                        .into_iter()
                        .map(|(_, child)| built[child].take().unwrap_or_default())
                        .collect(),
                ),
            };
            built[id] = Some(value);
        }
        built[Self::ROOT].take().unwrap_or_default()
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn attach_member(&mut self, id: NodeId, key: &SmolStr, child: NodeId) {
        if let Node::Object(members) = &mut self.nodes[id] {
            members.insert(key.clone(), child);
        }
    }

    fn push_element(&mut self, id: NodeId, index: usize, child: NodeId) {
        if let Node::Array(items) = &mut self.nodes[id] {
            items.push((index, child));
        }
    }

    fn element(&self, id: NodeId, index: usize) -> Option<NodeId> {
        match &self.nodes[id] {
            Node::Array(items) => items
                .iter()
                .find(|&&(slot, _)| slot == index)
                .map(|&(_, child)| child),
            _ => None,
        }
    }
}

use crate::domain::ports::PathwaySource;
use std::collections::{BTreeSet, HashSet};

/// One entry of the mirrored checkbox tree.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckNode {
    pub name: String,
    pub checked: bool,
    pub children: Vec<CheckNode>,
}

/// A checkbox tree mirroring a caller-supplied pathway hierarchy. Nodes are
/// addressed by display name, as the hierarchy itself keys on nothing else.
#[derive(Debug, Clone, Default)]
pub struct CheckTree {
    roots: Vec<CheckNode>,
}

impl CheckTree {
    /// Depth-first mirror of the source hierarchy. Top-level pathways with
    /// no components are skipped; they carry nothing to display.
    pub fn mirror<S: PathwaySource>(source: &S) -> Self {
        let mut roots = Vec::new();
        for node in source.roots() {
            if source.children(node).is_empty() {
                continue;
            }
            roots.push(mirror_node(source, node));
        }
        Self { roots }
    }

    pub fn roots(&self) -> &[CheckNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Apply a pre-selected name set: every node whose name appears in the
    /// set becomes checked, every other node unchecked.
    pub fn set_checks(&mut self, selected: &HashSet<String>) {
        for root in &mut self.roots {
            set_checks_recursive(root, selected);
        }
    }

    /// Check or uncheck every node carrying the given display name. Returns
    /// whether any node matched.
    pub fn set_checked(&mut self, name: &str, checked: bool) -> bool {
        let mut matched = false;
        for root in &mut self.roots {
            matched |= set_checked_recursive(root, name, checked);
        }
        matched
    }

    /// Collect checked interior and leaf names into a flat, ordered set.
    pub fn checked_names(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        for root in &self.roots {
            collect_checked(root, &mut names);
        }
        names
    }

    /// Depth-first visit of every node with its depth, for display.
    pub fn walk(&self, visit: &mut impl FnMut(&CheckNode, usize)) {
        for root in &self.roots {
            walk_recursive(root, 0, visit);
        }
    }
}

fn mirror_node<S: PathwaySource>(source: &S, node: &S::Node) -> CheckNode {
    CheckNode {
        name: source.display_name(node).to_string(),
        checked: false,
        children: source
            .children(node)
            .into_iter()
            .map(|child| mirror_node(source, child))
            .collect(),
    }
}

fn set_checks_recursive(node: &mut CheckNode, selected: &HashSet<String>) {
    node.checked = selected.contains(&node.name);
    for child in &mut node.children {
        set_checks_recursive(child, selected);
    }
}

fn set_checked_recursive(node: &mut CheckNode, name: &str, checked: bool) -> bool {
    let mut matched = false;
    if node.name == name {
        node.checked = checked;
        matched = true;
    }
    for child in &mut node.children {
        matched |= set_checked_recursive(child, name, checked);
    }
    matched
}

fn collect_checked(node: &CheckNode, names: &mut BTreeSet<String>) {
    if node.checked {
        names.insert(node.name.clone());
    }
    for child in &node.children {
        collect_checked(child, names);
    }
}

fn walk_recursive(node: &CheckNode, depth: usize, visit: &mut impl FnMut(&CheckNode, usize)) {
    visit(node, depth);
    for child in &node.children {
        walk_recursive(child, depth + 1, visit);
    }
}

/// An editing pass over a check tree. The selected list only changes when
/// the session ends with `ok`; cancellation leaves it as it was handed in.
#[derive(Debug, Clone)]
pub struct TreeSession {
    tree: CheckTree,
    selected: Vec<String>,
    cancelled: bool,
}

impl TreeSession {
    pub fn new(mut tree: CheckTree, preselected: &[String]) -> Self {
        let set: HashSet<String> = preselected.iter().cloned().collect();
        tree.set_checks(&set);
        Self {
            tree,
            selected: preselected.to_vec(),
            cancelled: true,
        }
    }

    pub fn tree(&self) -> &CheckTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut CheckTree {
        &mut self.tree
    }

    pub fn ok(&mut self) {
        self.selected = self.tree.checked_names().into_iter().collect();
        self.cancelled = false;
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }
}

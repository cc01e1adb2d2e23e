/// Stable handle of a node inside a [`SearchTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub struct Node<S, A> {
    state: S,
    parent: Option<NodeId>,
    action: Option<A>,
    path_cost: u32,
    depth: u32,
}

impl<S, A> Node<S, A> {
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The action that led here from the parent; `None` for the root.
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

/// Arena of search nodes. Children point at their parents by index, so the tree holds no
/// reference cycles and can be dropped as a whole once the path is extracted.
#[derive(Debug, Clone)]
pub struct SearchTree<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> SearchTree<S, A> {
    pub fn new(root_state: S) -> Self {
        SearchTree {
            nodes: vec![Node {
                state: root_state,
                parent: None,
                action: None,
                path_cost: 0,
                depth: 0,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn add_child(&mut self, parent: NodeId, action: A, state: S, path_cost: u32) -> NodeId {
        let depth = self[parent].depth + 1;
        self.nodes.push(Node {
            state,
            parent: Some(parent),
            action: Some(action),
            path_cost,
            depth,
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids from the root down to `id`, inclusive.
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self[current].parent {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }

    /// The actions leading from the root to `id`, in order.
    pub fn solution(&self, id: NodeId) -> Vec<A>
    where
        A: Clone,
    {
        self.path(id)
            .into_iter()
            .filter_map(|node| self[node].action.clone())
            .collect()
    }
}

impl<S, A> std::ops::Index<NodeId> for SearchTree<S, A> {
    type Output = Node<S, A>;

    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index.0]
    }
}

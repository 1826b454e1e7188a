use panedom::NodeId;

/// The children of a navigation controller, either ordered or named.
///
/// Named children keep their registration order, which is also the order
/// `next`/`previous` walk them in.
#[derive(Debug, Clone, PartialEq)]
pub enum ChildSet {
    Ordered(Vec<NodeId>),
    Named(Vec<(String, NodeId)>),
}

impl ChildSet {
    pub fn ordered() -> Self {
        Self::Ordered(Vec::new())
    }

    pub fn named() -> Self {
        Self::Named(Vec::new())
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Ordered(children) => children.len(),
            Self::Named(children) => children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        match self {
            Self::Ordered(children) => children.get(index).copied(),
            Self::Named(children) => children.get(index).map(|(_, id)| *id),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.len()).filter_map(|index| self.get(index))
    }

    pub fn contains(&self, child: NodeId) -> bool {
        self.position(child).is_some()
    }

    pub fn position(&self, child: NodeId) -> Option<usize> {
        self.iter().position(|id| id == child)
    }

    /// Position of the child registered under `name`. Always `None` for
    /// ordered children.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        match self {
            Self::Ordered(_) => None,
            Self::Named(children) => children.iter().position(|(n, _)| n == name),
        }
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        match self {
            Self::Ordered(_) => None,
            Self::Named(children) => children.get(index).map(|(name, _)| name.as_str()),
        }
    }

    pub fn name_of(&self, child: NodeId) -> Option<&str> {
        self.name_at(self.position(child)?)
    }

    /// Insert `child` at `index`. For named children, a name already in use
    /// rejects the insertion and the first registration stays.
    pub(crate) fn insert(&mut self, index: usize, child: NodeId, name: &str) -> bool {
        match self {
            Self::Ordered(children) => {
                let index = index.min(children.len());
                children.insert(index, child);
            }
            Self::Named(children) => {
                if children.iter().any(|(n, _)| n == name) {
                    return false;
                }
                let index = index.min(children.len());
                children.insert(index, (name.to_string(), child));
            }
        }
        true
    }

    /// Remove `child`, returning the position it had.
    pub(crate) fn remove(&mut self, child: NodeId) -> Option<usize> {
        let index = self.position(child)?;
        match self {
            Self::Ordered(children) => {
                children.remove(index);
            }
            Self::Named(children) => {
                children.remove(index);
            }
        }
        Some(index)
    }
}

use crate::node::Node;
use crate::tag::NodeTag;
use crate::Oid;

/// An ordered collection in one of three element disciplines.
///
/// An absent list is `Option::<List>::None` at the holder. A present list may be empty, and the
/// two are distinct on the wire.
#[derive(PartialEq, Clone, Debug)]
pub enum List {
    Nodes(Vec<Node>),
    Ints(Vec<i32>),
    Oids(Vec<Oid>),
}

impl List {
    pub fn tag(&self) -> NodeTag {
        match self {
            List::Nodes(_) => NodeTag::List,
            List::Ints(_) => NodeTag::IntList,
            List::Oids(_) => NodeTag::OidList,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            List::Nodes(v) => v.len(),
            List::Ints(v) => v.len(),
            List::Oids(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `n`th node of a node list, one-based as range-table indexes are.
    pub fn nth_node(&self, n: usize) -> Option<&Node> {
        match self {
            List::Nodes(v) if n > 0 => v.get(n - 1),
            _ => None,
        }
    }
}

impl From<Vec<Node>> for List {
    fn from(nodes: Vec<Node>) -> Self {
        List::Nodes(nodes)
    }
}
impl From<Vec<i32>> for List {
    fn from(ints: Vec<i32>) -> Self {
        List::Ints(ints)
    }
}
impl From<Vec<Oid>> for List {
    fn from(oids: Vec<Oid>) -> Self {
        List::Oids(oids)
    }
}

// node.rs

/// A single link in the chain: one value and the owned successor.
#[derive(Debug)]
pub struct Node {
    pub value: i32,
    pub next: Option<Box<Node>>,
}

impl Node {
    // Create a new node with no successor
    pub fn new(value: i32) -> Self {
        Node { value, next: None }
    }

    // Put a new node in front of the given chain and return the new chain
    pub fn prepend(list: Option<Box<Node>>, value: i32) -> Option<Box<Node>> {
        Some(Box::new(Node { value, next: list }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_has_no_successor() {
        let node = Node::new(7);
        assert_eq!(node.value, 7);
        assert!(node.next.is_none());
    }

    #[test]
    fn test_prepend_onto_empty_chain() {
        let chain = Node::prepend(None, 3).unwrap();
        assert_eq!(chain.value, 3);
        assert!(chain.next.is_none());
    }

    #[test]
    fn test_prepend_links_previous_chain() {
        let chain = Node::prepend(Some(Box::new(Node::new(2))), 1);
        let head = chain.unwrap();
        assert_eq!(head.value, 1);
        assert_eq!(head.next.as_ref().map(|n| n.value), Some(2));
        assert!(head.next.unwrap().next.is_none());
    }
}

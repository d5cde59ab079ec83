use crate::{error::NodeError, node::{Operator, Symbol, SymbolTree}, tests::util::addition_tree};

#[test]
fn test_replace_child() {
    let mut tree = addition_tree();
    let root = tree.root();
    let left = tree.child(root, 0).unwrap();
    let right = tree.child(root, 1).unwrap();

    let y = tree.build(Some(root), Symbol::Variable('y')).unwrap();
    tree.replace(right, y).unwrap();

    assert_eq!(tree.child(root, 0), Some(left));
    assert_eq!(tree.child(root, 1), Some(y));
    assert_eq!(tree.parent(y), Some(root));
    assert_eq!(tree.child_index(y), Some(1));
    assert!(!tree.contains(right));
    assert!(tree.verify().is_ok());
}

#[test]
fn test_replace_discards_subtree() {
    let mut tree = addition_tree();
    let root = tree.root();
    let right = tree.child(root, 1).unwrap();

    let inner = tree.build(Some(root), Symbol::Compound(Operator::Addition)).unwrap();
    tree.replace(right, inner).unwrap();
    let grandchild = tree.child(inner, 0).unwrap();
    assert_eq!(tree.len(), 5);

    let z = tree.build(Some(root), Symbol::Variable('z')).unwrap();
    tree.replace(inner, z).unwrap();

    assert!(!tree.contains(inner));
    assert!(!tree.contains(grandchild));
    assert_eq!(tree.len(), 3);
    assert!(tree.verify().is_ok());
}

#[test]
fn test_replace_root() {
    let mut tree = addition_tree();
    let old_root = tree.root();
    let old_child = tree.child(old_root, 0).unwrap();

    let x = tree.build(None, Symbol::Variable('x')).unwrap();
    tree.replace(old_root, x).unwrap();

    assert_eq!(tree.root(), x);
    assert_eq!(tree.parent(x), None);
    assert!(!tree.contains(old_root));
    assert!(!tree.contains(old_child));
    assert!(tree.verify().is_ok());
}

#[test]
fn test_rejected_replacement() {
    let mut tree = addition_tree();
    let root = tree.root();
    let left = tree.child(root, 0).unwrap();

    // Built for the wrong parent
    let x = tree.build(None, Symbol::Variable('x')).unwrap();
    assert_eq!(tree.replace(left, x), Err(NodeError::ParentMismatch { node: x }));

    // The tree is as it was, and the rejected node is gone
    assert!(!tree.contains(x));
    assert_eq!(tree.child(root, 0), Some(left));
    assert_eq!(tree.symbol(left), Some(Symbol::Placeholder));
    assert!(tree.verify().is_ok());

    // Target no longer exists
    let y = tree.build(Some(root), Symbol::Variable('y')).unwrap();
    tree.replace(left, y).unwrap();
    let z = tree.build(Some(root), Symbol::Variable('z')).unwrap();
    assert_eq!(tree.replace(left, z), Err(NodeError::StaleNode(left)));
    assert!(!tree.contains(z));
    assert!(tree.verify().is_ok());

    // Replacement is already in the tree
    let right = tree.child(root, 1).unwrap();
    assert_eq!(tree.replace(right, y), Err(NodeError::AlreadyAttached(y)));
    assert!(tree.contains(y));
    assert!(tree.verify().is_ok());
}

#[test]
fn test_set_child_errors() {
    let mut tree = addition_tree();
    let root = tree.root();
    let left = tree.child(root, 0).unwrap();

    let x = tree.build(Some(root), Symbol::Variable('x')).unwrap();
    assert_eq!(tree.set_child(root, 2, x), Err(NodeError::IndexOutOfRange { index: 2, arity: 2 }));

    let orphan = tree.build(None, Symbol::Variable('y')).unwrap();
    assert_eq!(tree.set_child(root, 0, orphan), Err(NodeError::ParentMismatch { node: orphan }));

    let z = tree.build(Some(root), Symbol::Variable('z')).unwrap();
    assert_eq!(tree.set_child(left, 0, z), Err(NodeError::NotCompound(left)));

    // Rejected nodes which weren't in the tree are thrown away
    assert!(!tree.contains(x));
    assert!(!tree.contains(orphan));
    assert!(!tree.contains(z));
    assert!(tree.verify().is_ok());

    // ...but nodes which were are left alone
    assert_eq!(tree.set_child(root, 1, left), Err(NodeError::AlreadyAttached(left)));
    assert!(tree.contains(left));
    assert!(tree.verify().is_ok());

    // A valid call still works after all of that
    let w = tree.build(Some(root), Symbol::Variable('w')).unwrap();
    tree.set_child(root, 0, w).unwrap();
    assert_eq!(tree.child(root, 0), Some(w));
    assert!(!tree.contains(left));
    assert!(tree.verify().is_ok());
}

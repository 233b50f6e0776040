use crate::avl_tree::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            let min_node = remove_min(&mut node.left);
            balance(tree);
            return min_node;
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            node
        }
        None => unreachable!(),
    }
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Greater => insert(&mut node.right, key),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        }
    };

    if inserted {
        balance(tree);
    }
    inserted
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let removed = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let removed = remove(&mut node.left, key);
                *tree = Some(node);
                removed
            }
            Ordering::Greater => {
                let removed = remove(&mut node.right, key);
                *tree = Some(node);
                removed
            }
            Ordering::Equal => {
                match (node.left.take(), node.right.take()) {
                    (None, right) => *tree = right,
                    (left, None) => *tree = left,
                    (left, mut right) => {
                        let successor = remove_min(&mut right);
                        node.key = successor.key;
                        node.left = left;
                        node.right = right;
                        *tree = Some(node);
                    }
                }
                true
            }
        },
        None => return false,
    };

    if removed {
        balance(tree);
    }
    removed
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    tree.as_ref().map_or(false, |node| match key.cmp(&node.key) {
        Ordering::Less => contains(&node.left, key),
        Ordering::Greater => contains(&node.right, key),
        Ordering::Equal => true,
    })
}

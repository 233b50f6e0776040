use crate::red_black_tree::node::{Color, Node, NIL};
use std::cmp;
use std::cmp::Ordering;
use std::mem;
use std::ops::{Index, IndexMut};

enum Slot<T> {
    Occupied(Node<T>),
    Vacant(usize),
}

/// A red black tree over a slab of nodes linked by indices.
///
/// The slab owns every node; freed slots are chained into an intrusive free list and reused
/// before the backing vector grows. All upward traversal during fix-up goes through the
/// non-owning `parent` indices.
pub struct Tree<T> {
    slots: Vec<Slot<T>>,
    free: usize,
    root: usize,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree {
            slots: Vec::new(),
            free: NIL,
            root: NIL,
        }
    }

    fn allocate(&mut self, key: T) -> usize {
        if self.free == NIL {
            self.slots.push(Slot::Occupied(Node::new(key)));
            return self.slots.len() - 1;
        }

        let id = self.free;
        match mem::replace(&mut self.slots[id], Slot::Occupied(Node::new(key))) {
            Slot::Vacant(next) => self.free = next,
            Slot::Occupied(_) => panic!("Expected a vacant slot."),
        }
        id
    }

    fn release(&mut self, id: usize) -> Node<T> {
        match mem::replace(&mut self.slots[id], Slot::Vacant(self.free)) {
            Slot::Occupied(node) => {
                self.free = id;
                node
            }
            Slot::Vacant(_) => panic!("Expected an occupied slot."),
        }
    }

    fn is_red(&self, id: usize) -> bool {
        id != NIL && self[id].color == Color::Red
    }

    fn minimum(&self, mut id: usize) -> usize {
        while self[id].left != NIL {
            id = self[id].left;
        }
        id
    }

    fn rotate_left(&mut self, id: usize) {
        let child = self[id].right;
        let grandchild = self[child].left;

        self[id].right = grandchild;
        if grandchild != NIL {
            self[grandchild].parent = id;
        }

        let parent = self[id].parent;
        self[child].parent = parent;
        if parent == NIL {
            self.root = child;
        } else if id == self[parent].left {
            self[parent].left = child;
        } else {
            self[parent].right = child;
        }

        self[child].left = id;
        self[id].parent = child;
    }

    fn rotate_right(&mut self, id: usize) {
        let child = self[id].left;
        let grandchild = self[child].right;

        self[id].left = grandchild;
        if grandchild != NIL {
            self[grandchild].parent = id;
        }

        let parent = self[id].parent;
        self[child].parent = parent;
        if parent == NIL {
            self.root = child;
        } else if id == self[parent].right {
            self[parent].right = child;
        } else {
            self[parent].left = child;
        }

        self[child].right = id;
        self[id].parent = child;
    }

    // replaces the subtree rooted at `id` with the subtree rooted at `other` in `id`'s parent
    fn transplant(&mut self, id: usize, other: usize) {
        let parent = self[id].parent;
        if parent == NIL {
            self.root = other;
        } else if id == self[parent].left {
            self[parent].left = other;
        } else {
            self[parent].right = other;
        }
        if other != NIL {
            self[other].parent = parent;
        }
    }

    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let mut parent = NIL;
        let mut curr = self.root;
        let mut went_left = false;

        while curr != NIL {
            parent = curr;
            match key.cmp(&self[curr].key) {
                Ordering::Less => {
                    curr = self[curr].left;
                    went_left = true;
                }
                Ordering::Greater => {
                    curr = self[curr].right;
                    went_left = false;
                }
                Ordering::Equal => return false,
            }
        }

        let id = self.allocate(key);
        self[id].parent = parent;
        if parent == NIL {
            self.root = id;
        } else if went_left {
            self[parent].left = id;
        } else {
            self[parent].right = id;
        }

        self.insert_fixup(id);
        true
    }

    fn insert_fixup(&mut self, mut id: usize) {
        while self.is_red(self[id].parent) {
            let parent = self[id].parent;
            // a red parent is never the root, so the grandparent exists
            let grandparent = self[parent].parent;

            if parent == self[grandparent].left {
                let uncle = self[grandparent].right;
                if self.is_red(uncle) {
                    self[parent].color = Color::Black;
                    self[uncle].color = Color::Black;
                    self[grandparent].color = Color::Red;
                    id = grandparent;
                } else {
                    if id == self[parent].right {
                        id = parent;
                        self.rotate_left(id);
                    }
                    let parent = self[id].parent;
                    let grandparent = self[parent].parent;
                    self[parent].color = Color::Black;
                    self[grandparent].color = Color::Red;
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self[grandparent].left;
                if self.is_red(uncle) {
                    self[parent].color = Color::Black;
                    self[uncle].color = Color::Black;
                    self[grandparent].color = Color::Red;
                    id = grandparent;
                } else {
                    if id == self[parent].left {
                        id = parent;
                        self.rotate_right(id);
                    }
                    let parent = self[id].parent;
                    let grandparent = self[parent].parent;
                    self[parent].color = Color::Black;
                    self[grandparent].color = Color::Red;
                    self.rotate_left(grandparent);
                }
            }
        }

        let root = self.root;
        self[root].color = Color::Black;
    }

    pub fn remove(&mut self, key: &T) -> bool
    where
        T: Ord,
    {
        let mut curr = self.root;
        while curr != NIL {
            match key.cmp(&self[curr].key) {
                Ordering::Less => curr = self[curr].left,
                Ordering::Greater => curr = self[curr].right,
                Ordering::Equal => {
                    self.remove_node(curr);
                    return true;
                }
            }
        }
        false
    }

    fn remove_node(&mut self, id: usize) -> T {
        // the color removed from the structure: the node's own color, or the successor's
        // original color when the successor is relocated into the node's position
        let mut removed_color = self[id].color;
        let replacement;
        let mut replacement_parent = self[id].parent;

        if self[id].left == NIL {
            replacement = self[id].right;
            self.transplant(id, replacement);
        } else if self[id].right == NIL {
            replacement = self[id].left;
            self.transplant(id, replacement);
        } else {
            let successor = self.minimum(self[id].right);
            removed_color = self[successor].color;
            replacement = self[successor].right;
            replacement_parent = successor;

            if self[successor].parent != id {
                replacement_parent = self[successor].parent;
                self.transplant(successor, replacement);
                let right = self[id].right;
                self[successor].right = right;
                self[right].parent = successor;
            }

            self.transplant(id, successor);
            let left = self[id].left;
            self[successor].left = left;
            self[left].parent = successor;
            self[successor].color = self[id].color;
        }

        let node = self.release(id);
        if removed_color == Color::Black {
            self.remove_fixup(replacement, replacement_parent);
        }
        node.key
    }

    // resolves the double black deficiency at `id`, which may be NIL for a phantom leaf
    // position; `parent` tracks the position's parent since NIL carries no links
    fn remove_fixup(&mut self, mut id: usize, mut parent: usize) {
        while id != self.root && !self.is_red(id) {
            if id == self[parent].left {
                // the deficient side is one black short, so the sibling subtree has a
                // positive black height and the sibling itself always exists
                let mut sibling = self[parent].right;

                if self.is_red(sibling) {
                    self[sibling].color = Color::Black;
                    self[parent].color = Color::Red;
                    self.rotate_left(parent);
                    sibling = self[parent].right;
                }

                if !self.is_red(self[sibling].left) && !self.is_red(self[sibling].right) {
                    self[sibling].color = Color::Red;
                    id = parent;
                    parent = self[id].parent;
                } else {
                    if !self.is_red(self[sibling].right) {
                        let near = self[sibling].left;
                        self[near].color = Color::Black;
                        self[sibling].color = Color::Red;
                        self.rotate_right(sibling);
                        sibling = self[parent].right;
                    }
                    self[sibling].color = self[parent].color;
                    self[parent].color = Color::Black;
                    let far = self[sibling].right;
                    self[far].color = Color::Black;
                    self.rotate_left(parent);
                    id = self.root;
                }
            } else {
                let mut sibling = self[parent].left;

                if self.is_red(sibling) {
                    self[sibling].color = Color::Black;
                    self[parent].color = Color::Red;
                    self.rotate_right(parent);
                    sibling = self[parent].left;
                }

                if !self.is_red(self[sibling].left) && !self.is_red(self[sibling].right) {
                    self[sibling].color = Color::Red;
                    id = parent;
                    parent = self[id].parent;
                } else {
                    if !self.is_red(self[sibling].left) {
                        let near = self[sibling].right;
                        self[near].color = Color::Black;
                        self[sibling].color = Color::Red;
                        self.rotate_left(sibling);
                        sibling = self[parent].left;
                    }
                    self[sibling].color = self[parent].color;
                    self[parent].color = Color::Black;
                    let far = self[sibling].left;
                    self[far].color = Color::Black;
                    self.rotate_right(parent);
                    id = self.root;
                }
            }
        }

        if id != NIL {
            self[id].color = Color::Black;
        }
    }

    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        let mut curr = self.root;
        while curr != NIL {
            curr = match key.cmp(&self[curr].key) {
                Ordering::Less => self[curr].left,
                Ordering::Greater => self[curr].right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    // heights are not cached on the nodes, so the whole tree is walked on every query
    pub fn height(&self) -> usize {
        self.height_below(self.root)
    }

    fn height_below(&self, id: usize) -> usize {
        if id == NIL {
            return 0;
        }
        cmp::max(
            self.height_below(self[id].left),
            self.height_below(self[id].right),
        ) + 1
    }
}

impl<T> Index<usize> for Tree<T> {
    type Output = Node<T>;

    fn index(&self, id: usize) -> &Self::Output {
        match self.slots[id] {
            Slot::Occupied(ref node) => node,
            Slot::Vacant(_) => panic!("Expected an occupied slot."),
        }
    }
}

impl<T> IndexMut<usize> for Tree<T> {
    fn index_mut(&mut self, id: usize) -> &mut Self::Output {
        match self.slots[id] {
            Slot::Occupied(ref mut node) => node,
            Slot::Vacant(_) => panic!("Expected an occupied slot."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Tree, NIL};
    use rand::{Rng, SeedableRng, XorShiftRng};

    // asserts the red black invariants below `id` and returns the black height of the subtree
    fn check_subtree<T: Ord>(tree: &Tree<T>, id: usize) -> usize {
        if id == NIL {
            return 0;
        }

        let node = &tree[id];
        if node.color == Color::Red {
            assert!(!tree.is_red(node.left));
            assert!(!tree.is_red(node.right));
        }
        if node.left != NIL {
            assert_eq!(tree[node.left].parent, id);
        }
        if node.right != NIL {
            assert_eq!(tree[node.right].parent, id);
        }

        let left_black_height = check_subtree(tree, node.left);
        let right_black_height = check_subtree(tree, node.right);
        assert_eq!(left_black_height, right_black_height);

        match node.color {
            Color::Black => left_black_height + 1,
            Color::Red => left_black_height,
        }
    }

    fn in_order<'a, T>(tree: &'a Tree<T>, id: usize, keys: &mut Vec<&'a T>) {
        if id == NIL {
            return;
        }
        in_order(tree, tree[id].left, keys);
        keys.push(&tree[id].key);
        in_order(tree, tree[id].right, keys);
    }

    fn check<T: Ord>(tree: &Tree<T>) {
        if tree.root != NIL {
            assert_eq!(tree[tree.root].color, Color::Black);
            assert_eq!(tree[tree.root].parent, NIL);
        }
        check_subtree(tree, tree.root);

        let mut keys = Vec::new();
        in_order(tree, tree.root, &mut keys);
        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_insert_recolors_root() {
        let mut tree = Tree::new();
        tree.insert(10);
        tree.insert(20);
        tree.insert(30);

        let root = tree.root;
        assert_eq!(tree[root].key, 20);
        assert_eq!(tree[root].color, Color::Black);
        assert_eq!(tree[tree[root].left].key, 10);
        assert_eq!(tree[tree[root].left].color, Color::Red);
        assert_eq!(tree[tree[root].right].key, 30);
        assert_eq!(tree[tree[root].right].color, Color::Red);
        assert_eq!(tree.height(), 2);
        check(&tree);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = Tree::new();
        assert!(tree.insert(1));
        assert!(!tree.insert(1));
        assert_eq!(tree.height(), 1);
        check(&tree);
    }

    #[test]
    fn test_insert_ascending() {
        let mut tree = Tree::new();
        for key in 1..8 {
            tree.insert(key);
            check(&tree);
        }
    }

    #[test]
    fn test_remove_two_children() {
        let mut tree = Tree::new();
        for key in 1..8 {
            tree.insert(key);
        }

        assert!(tree.remove(&4));
        check(&tree);

        assert!(!tree.contains(&4));
        for key in [1, 2, 3, 5, 6, 7].iter() {
            assert!(tree.contains(key));
        }
    }

    #[test]
    fn test_remove_successor_inherits_color() {
        let mut tree = Tree::new();
        for key in [5, 3, 8, 1, 4, 7, 9].iter() {
            tree.insert(*key);
        }

        assert!(tree.remove(&5));
        check(&tree);

        let mut keys = Vec::new();
        in_order(&tree, tree.root, &mut keys);
        assert_eq!(keys, [&1, &3, &4, &7, &8, &9]);
    }

    #[test]
    fn test_remove_absent() {
        let mut tree = Tree::new();
        tree.insert(1);
        assert!(!tree.remove(&0));
        assert!(tree.contains(&1));
        check(&tree);
    }

    #[test]
    fn test_slot_reuse() {
        let mut tree = Tree::new();
        tree.insert(1);
        tree.insert(2);
        tree.remove(&1);
        tree.insert(3);

        // the freed slot backs the new node instead of growing the slab
        assert_eq!(tree.slots.len(), 2);
        check(&tree);
    }

    #[test]
    fn test_randomized_mutations() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
        let mut tree = Tree::new();
        let mut keys = Vec::new();

        for _ in 0..1000 {
            let key = rng.gen::<u32>() % 500;
            if tree.insert(key) {
                keys.push(key);
            }
            check(&tree);
        }

        for key in keys {
            assert!(tree.remove(&key));
            check(&tree);
        }

        assert_eq!(tree.height(), 0);
        assert_eq!(tree.root, NIL);
    }
}

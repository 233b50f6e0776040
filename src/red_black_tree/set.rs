use crate::red_black_tree::tree::Tree;
use crate::tree::BalancedTree;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors each node red or black
/// and maintains two invariants: no red node has a red child, and every path from the root to a
/// missing child position passes through the same number of black nodes. Together they bound the
/// height of the tree to a constant factor of the optimum.
///
/// # Examples
/// ```
/// use balanced_collections::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert!(set.contains(&0));
/// assert!(!set.contains(&1));
/// assert_eq!(set.height(), 2);
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct RedBlackSet<T> {
    tree: Tree<T>,
}

impl<T> RedBlackSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackSet<T>`
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet { tree: Tree::new() }
    }

    /// Inserts a key into the set. Returns `true` if the key was not already in the set.
    /// Inserting a key that is already present leaves the set untouched.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        self.tree.insert(key)
    }

    /// Removes a key from the set. Returns `true` if the key was in the set. Removing a key
    /// that is not present leaves the set untouched.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &T) -> bool {
        self.tree.remove(key)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        self.tree.contains(key)
    }

    /// Returns the height of the set in node levels. The height of an empty set is 0 and the
    /// height of a set with one key is 1. Heights are not cached on the nodes, so each query
    /// walks the whole tree.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.height(), 0);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        self.tree.height()
    }
}

impl<T> BalancedTree<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) -> bool {
        self.insert(key)
    }

    fn remove(&mut self, key: &T) -> bool {
        self.remove(key)
    }

    fn contains(&self, key: &T) -> bool {
        self.contains(key)
    }

    fn height(&self) -> usize {
        self.height()
    }
}

impl<T> Default for RedBlackSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

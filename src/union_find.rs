/// Union-Find (Disjoint Sets) with union by size and path compression
use crate::error::{PercolationError, Result};

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton elements `0..n`
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(
                "union-find needs at least one element".to_string(),
            ));
        }
        Ok(UnionFind {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        })
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets
    pub fn count(&self) -> usize {
        self.count
    }

    /// Find the root of element x with path compression
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.validate(x)?;
        Ok(self.root(x))
    }

    /// Union the sets containing x and y; the smaller tree goes under the larger
    pub fn union(&mut self, x: usize, y: usize) -> Result<()> {
        self.validate(x)?;
        self.validate(y)?;
        self.link(x, y);
        Ok(())
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Size of the set containing x
    pub fn set_size(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    // Callers inside the crate validate indices once and use the unchecked pair below.
    pub(crate) fn root(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.root(self.parent[x]);
        }
        self.parent[x]
    }

    pub(crate) fn link(&mut self, x: usize, y: usize) {
        let root_x = self.root(x);
        let root_y = self.root(y);
        if root_x == root_y {
            return;
        }

        if self.size[root_x] < self.size[root_y] {
            self.parent[root_x] = root_y;
            self.size[root_y] += self.size[root_x];
        } else {
            self.parent[root_y] = root_x;
            self.size[root_x] += self.size[root_y];
        }
        self.count -= 1;
    }

    fn validate(&self, x: usize) -> Result<()> {
        if x >= self.parent.len() {
            return Err(PercolationError::IndexError(format!(
                "element {x} is not in [0, {})",
                self.parent.len()
            )));
        }
        Ok(())
    }
}

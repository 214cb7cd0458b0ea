/// Site grid with open/blocked state and two union-find views over it.
///
/// Sites are addressed by 1-based `(row, col)` and map to union-find element
/// `(row - 1) * n + (col - 1)`. Two extra elements act as virtual roots:
///
/// ```text
///        top (n²)                 top (n²)
///     1  2  3                  1  2  3
///     4  5  6                  4  5  6
///     7  8  9                  7  8  9
///       bottom (n² + 1)
///   percolation view           fullness view
/// ```
///
/// The fullness view never links anything to a bottom root, so an open site
/// that only touches the bottom row is not reported full (no backwash).
use crate::error::{PercolationError, Result};
use crate::union_find::UnionFind;

#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    percolation_uf: UnionFind,
    full_uf: UnionFind,
    top: usize,
    bottom: usize,
}

impl Percolation {
    /// Create an n-by-n grid with every site blocked
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid size must be greater than zero".to_string(),
            ));
        }
        let sites = n
            .checked_mul(n)
            .filter(|sites| sites.checked_add(2).is_some())
            .ok_or_else(|| {
                PercolationError::InvalidArgument(format!("grid size {n} is too large"))
            })?;

        Ok(Percolation {
            n,
            open: vec![false; sites],
            open_count: 0,
            percolation_uf: UnionFind::new(sites + 2)?,
            full_uf: UnionFind::new(sites + 1)?,
            top: sites,
            bottom: sites + 1,
        })
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.n
    }

    /// Open site (row, col) if it is not open already
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.index(row, col)?;
        if self.open[site] {
            return Ok(());
        }

        self.open[site] = true;
        self.open_count += 1;

        let n = self.n;
        let neighbors = [
            (row > 1).then(|| (row - 1, col)),
            (row < n).then(|| (row + 1, col)),
            (col > 1).then(|| (row, col - 1)),
            (col < n).then(|| (row, col + 1)),
        ];
        for (r, c) in neighbors.into_iter().flatten() {
            self.connect_if_open(site, r, c);
        }

        if row == 1 {
            self.percolation_uf.link(site, self.top);
            self.full_uf.link(site, self.top);
        }
        if row == n {
            self.percolation_uf.link(site, self.bottom);
        }

        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.index(row, col)?;
        Ok(self.open[site])
    }

    /// Is site (row, col) open and connected to the top row through open sites?
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let site = self.index(row, col)?;
        if !self.open[site] {
            return Ok(false);
        }
        Ok(self.full_uf.root(site) == self.full_uf.root(self.top))
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Does an open path join the top row to the bottom row?
    pub fn percolates(&mut self) -> bool {
        self.percolation_uf.root(self.top) == self.percolation_uf.root(self.bottom)
    }

    // Neighbor coordinates are produced in range by `open`.
    fn connect_if_open(&mut self, site: usize, row: usize, col: usize) {
        let neighbor = (row - 1) * self.n + (col - 1);
        if self.open[neighbor] {
            self.percolation_uf.link(site, neighbor);
            self.full_uf.link(site, neighbor);
        }
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row == 0 || col == 0 {
            return Err(PercolationError::IndexError(format!(
                "row and col must be at least 1, got ({row}, {col})"
            )));
        }
        if row > self.n || col > self.n {
            return Err(PercolationError::IndexError(format!(
                "row and col must be at most {}, got ({row}, {col})",
                self.n
            )));
        }
        Ok((row - 1) * self.n + (col - 1))
    }
}

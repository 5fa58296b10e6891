//! Disjoint Set Union (DSU) / Union-Find with union-by-rank and path
//! compression, plus an undo log so a backtracking search can roll unions
//! back in place instead of cloning the structure per branch.

use std::cmp::Ordering;

/// One reverted write: the slot and the value it held before.
enum Undo {
    Parent(usize, usize),
    Rank(usize, usize),
}

pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    log: Vec<Undo>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            log: Vec::new(),
        }
    }

    /// Vertices past the current capacity become their own singleton set on
    /// first reference. Growth is never undone; a rolled-back entry is a
    /// singleton again either way.
    fn ensure(&mut self, x: usize) {
        if x >= self.parent.len() {
            let from = self.parent.len();
            self.parent.extend(from..=x);
            self.rank.resize(x + 1, 0);
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        self.ensure(x);
        self.find_compress(x)
    }

    fn find_compress(&mut self, x: usize) -> usize {
        let p = self.parent[x];
        if p == x {
            return x;
        }
        let root = self.find_compress(p);
        if root != p {
            // Path compression: point directly to root
            self.log.push(Undo::Parent(x, p));
            self.parent[x] = root;
        }
        root
    }

    /// Merges the sets holding `x` and `y`. Returns `false` when they already
    /// share a root, i.e. the edge `(x, y)` would close a cycle.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        // Union by rank: attach smaller tree to larger tree
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => {
                self.log.push(Undo::Parent(root_x, root_x));
                self.parent[root_x] = root_y;
            }
            Ordering::Greater => {
                self.log.push(Undo::Parent(root_y, root_y));
                self.parent[root_y] = root_x;
            }
            Ordering::Equal => {
                self.log.push(Undo::Parent(root_y, root_y));
                self.log.push(Undo::Rank(root_x, self.rank[root_x]));
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Current undo-log position; pass it back to [`UnionFind::undo_to`] to
    /// restore the state as of this call.
    pub fn mark(&self) -> usize {
        self.log.len()
    }

    /// Rolls back every write (unions and compression alike) made since
    /// `mark` was taken, newest first.
    pub fn undo_to(&mut self, mark: usize) {
        while self.log.len() > mark {
            match self.log.pop() {
                Some(Undo::Parent(slot, previous)) => self.parent[slot] = previous,
                Some(Undo::Rank(slot, previous)) => self.rank[slot] = previous,
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_reports_cycles() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(uf.union(1, 2));
        assert!(!uf.union(0, 2));
        assert!(uf.union(2, 3));
        assert!(uf.connected(0, 3));
    }

    #[test]
    fn lazily_grown_vertices_start_as_singletons() {
        let mut uf = UnionFind::new(2);
        assert_eq!(uf.find(7), 7);
        assert!(!uf.connected(7, 1));
        assert!(uf.union(7, 1));
        assert!(uf.connected(7, 1));
    }

    #[test]
    fn undo_restores_components_and_ranks() {
        let mut uf = UnionFind::new(6);
        assert!(uf.union(0, 1));
        let mark = uf.mark();

        assert!(uf.union(2, 3));
        assert!(uf.union(1, 3));
        // Trigger compression writes inside the marked region.
        assert!(uf.connected(0, 2));

        uf.undo_to(mark);
        assert!(uf.connected(0, 1));
        assert!(!uf.connected(2, 3));
        assert!(!uf.connected(0, 2));

        // The restored state behaves like a fresh one for later unions.
        assert!(uf.union(2, 3));
        assert!(uf.union(1, 3));
        assert!(uf.connected(0, 2));
    }

    #[test]
    fn nested_marks_unwind_in_order() {
        let mut uf = UnionFind::new(5);
        let outer = uf.mark();
        assert!(uf.union(0, 1));
        let inner = uf.mark();
        assert!(uf.union(1, 2));
        uf.undo_to(inner);
        assert!(uf.connected(0, 1));
        assert!(!uf.connected(1, 2));
        uf.undo_to(outer);
        assert!(!uf.connected(0, 1));
    }
}

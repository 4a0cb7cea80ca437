//! Enumeration of every maximal common subsequence from a filled grid.

use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::grid::LcsGrid;

type Sequences<'a> = BTreeSet<Vec<&'a str>>;

/// Result of walking the grid back from its final cell.
pub(super) struct Enumeration<'a> {
    pub sequences: Sequences<'a>,
    pub truncated: bool,
}

enum Frame {
    /// Visit a cell: schedule its predecessors, then itself.
    Enter((usize, usize)),
    /// All predecessors are memoized; combine them.
    Exit((usize, usize)),
}

/// Collect every distinct maximal common subsequence, as lines of `file1`.
///
/// Walks from `(len(file1), len(file2))` towards the origin following every
/// recorded direction. Row 0 and column 0 yield the single empty sequence, so
/// inputs with nothing in common produce `{[]}`. A diagonal step that
/// shortens the length appends `file1[x - 1]` to copies of each sequence
/// found at the predecessor.
///
/// Uses an explicit work stack so depth does not grow with input size, and
/// memoizes each cell's result by `(x, y)` since tied paths revisit cells.
/// With `limit`, a cell keeps at most that many sequences (the smallest in
/// lexicographic order); kept sequences are still maximal.
pub(super) fn enumerate<'a, S>(
    grid: &LcsGrid,
    file1: &'a [S],
    limit: Option<usize>,
) -> Enumeration<'a>
where
    S: AsRef<str>,
{
    let root = (grid.cols() - 1, grid.rows() - 1);
    let mut memo: HashMap<(usize, usize), Rc<Sequences<'a>>> = HashMap::new();
    let mut truncated = false;
    let mut stack = vec![Frame::Enter(root)];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(at) => {
                if memo.contains_key(&at) {
                    continue;
                }
                let (x, y) = at;
                if x == 0 || y == 0 {
                    memo.insert(at, Rc::new(BTreeSet::from([Vec::new()])));
                    continue;
                }

                stack.push(Frame::Exit(at));
                for direction in grid.cell(y, x).directions.iter() {
                    let prev = direction.step(at);
                    if !memo.contains_key(&prev) {
                        stack.push(Frame::Enter(prev));
                    }
                }
            }
            Frame::Exit(at) => {
                let (x, y) = at;
                let here = grid.cell(y, x);
                let mut merged = Sequences::new();

                for direction in here.directions.iter() {
                    let prev = direction.step(at);
                    let Some(found) = memo.get(&prev) else {
                        continue;
                    };

                    if grid.cell(prev.1, prev.0).length < here.length {
                        let line = file1[x - 1].as_ref();
                        merged.extend(found.iter().map(|seq| {
                            let mut extended = Vec::with_capacity(seq.len() + 1);
                            extended.extend_from_slice(seq);
                            extended.push(line);
                            extended
                        }));
                    } else {
                        merged.extend(found.iter().cloned());
                    }
                }

                if let Some(max) = limit
                    && merged.len() > max
                {
                    merged = merged.into_iter().take(max).collect();
                    truncated = true;
                }
                memo.insert(at, Rc::new(merged));
            }
        }
    }

    let sequences = memo
        .remove(&root)
        .map(|found| Rc::try_unwrap(found).unwrap_or_else(|shared| (*shared).clone()))
        .unwrap_or_default();

    Enumeration {
        sequences,
        truncated,
    }
}

//! Property tests driving the public tree API against a sorted `Vec` model.

use quickcheck::{Arbitrary, Gen};

mod linked;

/// Something to do to both the tree and the model.
#[derive(Copy, Clone, Debug)]
enum Op {
    Insert(i8),
    Remove(i8),
    Replace(i8),
    Rebalance,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 3]).copied().unwrap_or(0) {
            0 => Op::Insert(i8::arbitrary(g)),
            1 => Op::Remove(i8::arbitrary(g)),
            2 => Op::Replace(i8::arbitrary(g)),
            _ => Op::Rebalance,
        }
    }
}

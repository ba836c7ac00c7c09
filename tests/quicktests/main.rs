use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// a linked list in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Append the T to the list
    Add(T),
    /// Insert the T at the position
    Insert(T, u8),
    /// Look up the position of the T
    Index(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Add(T::arbitrary(g)),
            1 => Op::Insert(T::arbitrary(g), u8::arbitrary(g)),
            2 => Op::Index(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

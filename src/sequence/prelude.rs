pub use {
    crate::sequence::SequenceError,
    crate::sequence::SparseSeq,
    crate::sequence::traits::HigherOrder,
};

#[macro_use]
extern crate quickcheck_macros;

mod op;
mod sort;
mod tree;

pub(crate) use op::Op;

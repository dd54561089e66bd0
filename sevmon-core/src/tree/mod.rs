mod aggregate;
mod range_tree;


pub use aggregate::*;
pub use range_tree::*;

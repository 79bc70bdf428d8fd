mod common;

mod explain;
mod factors;

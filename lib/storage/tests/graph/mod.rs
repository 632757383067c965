mod mutation;
mod set_algebra;
mod traversal;

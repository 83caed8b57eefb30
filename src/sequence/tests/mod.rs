mod filter;
mod map;
mod reduce;
mod sparse;

pub mod impl_random;
pub mod interface;

pub mod impl_svm;
pub mod interface;
pub mod kernel;

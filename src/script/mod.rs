pub(crate) mod dsl;
pub(crate) mod model;
pub mod timing;

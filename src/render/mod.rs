pub(crate) mod document;
pub(crate) mod lines;
pub(crate) mod scroll;
pub(crate) mod snapshot;

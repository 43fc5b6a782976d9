pub(crate) mod interp;
pub(crate) mod reveal;
pub(crate) mod spring;
pub(crate) mod timeline;

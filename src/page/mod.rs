pub(crate) mod config;
pub(crate) mod controller;
pub(crate) mod copy;
pub(crate) mod document;
pub(crate) mod event;
pub(crate) mod konami;
pub(crate) mod nav;
pub(crate) mod reveal;
pub(crate) mod scroll;
pub(crate) mod tabs;

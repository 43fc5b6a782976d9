pub(crate) mod composition;
pub(crate) mod config;
pub(crate) mod logo;
pub(crate) mod master;
pub(crate) mod model;
pub(crate) mod promo;
pub(crate) mod terminal;

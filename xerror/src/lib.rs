pub mod api;
pub mod cli;
pub mod lnurl;
pub mod logging;

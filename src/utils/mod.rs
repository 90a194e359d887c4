pub(crate) mod date;
pub(crate) mod debug;

pub(crate) use date::parse_date;
pub(crate) use debug::{debug_enabled, debug_log, set_debug};

pub(crate) mod git;
pub(crate) mod logging;

pub(crate) use git::current_branch;
pub(crate) use logging::init_logging;

pub mod launch_query;
pub mod response_common;

use super::http_response::launch_query;

pub mod launch_query_post;
pub mod request_common;

pub mod html_container;
pub mod route_block;
pub mod route_client;
pub mod route_query;
pub mod route_request_handler;
pub mod route_response;
pub mod surface;

#[cfg(test)]
pub(crate) mod test_utils;

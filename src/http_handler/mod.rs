pub mod http_client;
pub mod http_handler_common;
pub mod http_request;
pub mod http_response;

#[cfg(test)]
mod tests;

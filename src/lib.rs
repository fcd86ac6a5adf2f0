pub mod cli_arguments;
pub mod environment;
pub mod handler;
pub mod http_client;
pub mod poller;

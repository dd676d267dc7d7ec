pub mod clients;
pub mod extract;
pub mod handlers;
pub mod protocol;
pub mod request_id;
pub mod routes;
pub mod state;

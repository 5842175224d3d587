/// HTTP middleware
pub mod cors;
pub mod panic;

pub use cors::{allow_headers_header, allow_methods_header, cors_layer};
pub use panic::handle_panic;

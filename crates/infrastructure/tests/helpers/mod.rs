mod api_server_double;

pub use api_server_double::ApiServerDouble;

pub mod api_handler;

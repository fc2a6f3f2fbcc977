mod callback;

pub use callback::async_callback;

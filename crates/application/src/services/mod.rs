pub mod method_dispatcher;

pub use method_dispatcher::MethodDispatcher;

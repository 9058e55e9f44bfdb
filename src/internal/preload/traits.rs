pub mod preload_hook;
pub mod resource;

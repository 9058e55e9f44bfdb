pub mod entrance;
pub mod preload;
pub mod states;

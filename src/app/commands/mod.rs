pub mod collect;
pub mod install;
pub mod stack;

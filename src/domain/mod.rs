pub mod merchant;
pub mod pool;
pub mod rule;
pub mod solution;
pub mod transaction;

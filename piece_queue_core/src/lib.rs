pub mod consts;
pub mod generator;
pub mod menu;
pub mod piece;
pub mod queue;
pub mod session;

pub mod navigation;
pub mod session;
pub mod state;
pub mod upload;
pub mod validation;

pub mod loading;
pub mod session;

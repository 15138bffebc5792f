pub mod arith;
pub mod calibration;
pub mod debayer;
pub mod display;
pub mod enums;
pub mod error;
pub mod jp4;
pub mod loader;
pub mod logger;
pub mod plane;
pub mod prelude;
pub mod session;

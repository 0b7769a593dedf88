pub mod enums;
pub mod report;
pub mod session;

pub use enums::*;
pub use report::*;
pub use session::*;

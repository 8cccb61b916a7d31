mod dual;
mod interface;
mod single;

pub use dual::*;
pub use interface::*;
pub use single::*;

pub mod age;
pub mod period;
pub mod policy;
pub mod region;
pub mod user;

pub use age::*;
pub use period::*;
pub use policy::*;
pub use region::*;
pub use user::*;

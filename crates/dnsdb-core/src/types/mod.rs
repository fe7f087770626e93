mod lookup;
mod rate;
mod rdata;
mod rrset;
mod timestamp;

pub use lookup::*;
pub use rate::*;
pub use rdata::*;
pub use rrset::*;
pub use timestamp::*;

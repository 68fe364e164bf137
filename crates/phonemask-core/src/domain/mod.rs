pub mod calling_code;
pub mod region;

pub use calling_code::CallingCode;
pub use region::{builtin_regions, RegionCode, RegionTable};

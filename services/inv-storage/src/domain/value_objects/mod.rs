pub mod dimensions;
pub mod ids;
pub mod layout;
pub mod zone;

pub use dimensions::*;
pub use ids::*;
pub use layout::*;
pub use zone::*;

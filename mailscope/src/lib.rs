pub mod analyze;
pub mod shared;

pub mod prelude {
    pub use crate::analyze::prelude::*;
    pub use crate::shared::prelude::*;
}

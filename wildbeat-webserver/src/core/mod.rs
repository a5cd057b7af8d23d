pub use wildbeat_core::{gateways, repositories, usecases};

pub mod entities {
    pub use wildbeat_core::entities::*;
}

pub mod prelude {
    use std::result;

    pub use wildbeat_application::error::*;

    pub use super::entities::*;

    pub type Result<T> = result::Result<T, wildbeat_application::error::AppError>;
}

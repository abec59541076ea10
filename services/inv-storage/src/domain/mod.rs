//! 领域层
//!
//! 包含业务实体、值对象、视图、枚举、领域服务和仓储接口

pub mod entities;
pub mod enums;
pub mod repositories;
pub mod services;
pub mod value_objects;
pub mod views;

pub use entities::*;
pub use enums::*;
pub use repositories::*;
pub use value_objects::*;
pub use views::*;

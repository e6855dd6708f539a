pub mod arc;
pub mod continents;
pub mod interpolate;
pub mod labels;
pub mod render;
pub mod route;
pub mod snapshot;
pub mod stop;

pub use arc::*;
pub use continents::*;
pub use interpolate::*;
pub use labels::*;
pub use render::*;
pub use route::*;
pub use snapshot::*;
pub use stop::*;

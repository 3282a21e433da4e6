pub mod map;
pub mod path;
pub mod resolver;
pub mod source;
pub mod value;

pub use map::Properties;
pub use source::PropertySource;
pub use value::Value;

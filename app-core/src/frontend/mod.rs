mod registry;

pub use self::registry::{Dispose, WidgetRegistry};

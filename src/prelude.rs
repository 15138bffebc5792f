pub use crate::calibration::Calibration;
pub use crate::enums::Component;
pub use crate::error::{Jp4Error, Result};
pub use crate::jp4::{bayer_to_components, to_bayer, to_bayer_in_place, Components, Jp4Splitter};
pub use crate::plane::Plane;
pub use crate::session::{DebugSession, View};

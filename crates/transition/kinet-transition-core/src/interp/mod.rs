//! The interpolation seam.
//!
//! An `Interpolation` builds one `Interpolator` per track when the track first
//! becomes active, capturing begin and end values. The default `Numeric`
//! implementation lerps component-wise per Value kind; hosts substitute their
//! own (e.g. path or string interpolation) per group via the node factory.

pub mod functions;

use kinet_api_core::Value;

/// A started track's interpolating closure: eased progress in, value out.
pub type Interpolator = Box<dyn Fn(f32) -> Value + Send + Sync>;

pub trait Interpolation: Send + Sync {
    /// Build an interpolator for one attribute. `attr` lets implementations
    /// pick different curves per attribute name; `Numeric` ignores it.
    fn interpolator(&self, begin: &Value, end: &Value, attr: &str) -> Interpolator;
}

/// Component-wise linear interpolation; Bool/Text step at the end.
#[derive(Debug, Default, Clone, Copy)]
pub struct Numeric;

impl Interpolation for Numeric {
    fn interpolator(&self, begin: &Value, end: &Value, _attr: &str) -> Interpolator {
        let begin = begin.clone();
        let end = end.clone();
        Box::new(move |t| functions::linear_value(&begin, &end, t))
    }
}

use crate::*;

/// Plan documents store coordinates in decimetres, drawings are written in millimetres.
pub const SCALE_TO_MM: f64 = 10.0;

/// Height of room labels, in output units.
pub const ROOM_TEXT_HEIGHT: f64 = 150.0;

/// Conversion settings.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Options {
    /// Factor taking plan units to output units.
    pub scale: f64,
    /// Room label text height, in output units.
    pub text_height: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            scale: SCALE_TO_MM,
            text_height: ROOM_TEXT_HEIGHT,
        }
    }
}

impl Options {
    /// Take a plan point into output units.
    pub fn scale_point(&self, p: Point2) -> Point2 {
        p.scale(self.scale)
    }

    /// Take a plan length into output units.
    pub fn scale_len(&self, len: f64) -> f64 {
        len * self.scale
    }
}

/// Take a plan point into millimetres using [`SCALE_TO_MM`].
pub fn scale_point(p: Point2) -> Point2 {
    p.scale(SCALE_TO_MM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[quickcheck]
    fn scaling_is_exact(x: f64, y: f64) -> bool {
        let [sx, sy] = scale_point([x, y]);
        // bitwise compare so NaN inputs still agree with themselves
        sx.to_bits() == (x * 10.0).to_bits() && sy.to_bits() == (y * 10.0).to_bits()
    }

    #[test]
    fn options_override_scale() {
        let opts = Options {
            scale: 1000.0,
            ..Options::default()
        };
        assert_eq!(opts.scale_point([1.5, -2.0]), [1500.0, -2000.0]);
        assert_eq!(opts.scale_len(0.25), 250.0);
        assert_eq!(opts.text_height, ROOM_TEXT_HEIGHT);
    }

    #[test]
    fn options_partial_deserialize() {
        let opts: Options = serde_json::from_str(r#"{ "text_height": 200 }"#).unwrap();
        assert_eq!(opts.scale, SCALE_TO_MM);
        assert_eq!(opts.text_height, 200.0);
    }
}

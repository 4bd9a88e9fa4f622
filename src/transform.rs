//! 2D affine transforms applied to drawn content at draw time.

/// An affine transformation matrix.
///
/// The matrix is represented as [a, b, c, d, e, f] corresponding to:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
/// which maps a point as `x' = a·x + c·y + e` and `y' = b·x + d·y + f`. This is the
/// same layout PDF content streams and tiny-skia use, so a transform can be handed to
/// either without reordering.
///
/// # Composing transforms
///
/// Operations are applied in the order they're chained: the rotated warning label is
/// drawn with
///
/// ```
/// use ticket_pdf::Transform;
///
/// // rotate a quarter turn counter-clockwise, then push it down the strip
/// let transform = Transform::rotate_degrees(-90.0).with_translate(0.0, 200.0);
/// assert_eq!(transform.apply(0.0, 0.0), (0.0, 200.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity transform (no transformation)
    pub fn identity() -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create a translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Transform {
            e: x,
            f: y,
            ..Self::identity()
        }
    }

    /// Create a scaling transform
    pub fn scale(sx: f32, sy: f32) -> Self {
        Transform {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }

    /// Create a rotation transform (angle in radians)
    pub fn rotate(angle: f32) -> Self {
        // snap so quarter turns stay exact; stripe edges must land on whole pixels
        let snap = |v: f32| if v.abs() < 1e-6 { 0.0 } else { v };
        let cos = snap(angle.cos());
        let sin = snap(angle.sin());
        Transform {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create a rotation transform (angle in degrees)
    pub fn rotate_degrees(degrees: f32) -> Self {
        Self::rotate(degrees.to_radians())
    }

    /// Combine this transform with another: `self` is applied first, then `other`
    pub fn then(self, other: Transform) -> Self {
        Transform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Add a translation to this transform
    pub fn with_translate(self, x: f32, y: f32) -> Self {
        self.then(Transform::translate(x, y))
    }

    /// Add a scale to this transform
    pub fn with_scale(self, sx: f32, sy: f32) -> Self {
        self.then(Transform::scale(sx, sy))
    }

    /// Map a point through the transform
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// The transform as the six operands of a PDF `cm` operator
    pub fn to_array(&self) -> [f32; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, Sub, Sum};

/// A dimension measured in whole display pixels.
///
/// E-paper panels address discrete pixels, so every width, height, and
/// coordinate in the crate is an integer [Px]; fractional intermediate values
/// (font scaling, safety margins) are truncated or rounded at the edges of
/// the arithmetic, never carried.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Add,
    AddAssign,
    Sub,
    Mul,
    Div,
    Sum,
    Display,
    From,
    Into,
)]
pub struct Px(pub i32);

impl Px {
    pub const ZERO: Px = Px(0);

    /// Scale by a fractional factor, truncating toward zero.
    pub fn scaled(self, factor: f32) -> Px {
        Px((self.0 as f32 * factor) as i32)
    }
}

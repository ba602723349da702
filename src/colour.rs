/// A colour a tri-colour e-paper panel can draw text in. The panel background
/// is white; text renders in one of the two pigments.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Colour {
    #[default]
    Black,
    Red,
}

impl Colour {
    /// The 8-bit RGB triple a renderer should use for this colour.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Colour::Black => (0, 0, 0),
            Colour::Red => (255, 0, 0),
        }
    }
}

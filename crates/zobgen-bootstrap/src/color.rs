#[derive(Eq, Hash, Debug, Clone, Copy, PartialEq)]
/// Represents the color of a piece or player. White sorts before black:
/// `Color::ALL[color.index()] == color`, and every per-square pair in the
/// generated tables stores the white key first. That ordinal is part of the
/// output contract, since it decides which drawn value lands in which slot.
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The number of colors.
    pub const COUNT: usize = 2;

    /// Both colors, in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [Self::White, Self::Black];

    /// The table index of this color.
    pub const fn index(self) -> usize {
        self as usize
    }
}

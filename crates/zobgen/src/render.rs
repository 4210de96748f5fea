use std::fmt::{self, Display};

use zobgen_bootstrap::{PieceKind, ZobristMap};

/// Renders a [`ZobristMap`] as three Rust constant declarations, ready to be
/// redirected into a source file of the consuming move generator. Rendering
/// is a pure function of the table data: ascending index order throughout,
/// decimal literals, stable formatting, no environment-dependent content.
///
/// Further target syntaxes would be further adapters next to this one; the
/// construction side never needs to change for that.
pub struct RustSyntax<'a>(pub &'a ZobristMap);

impl Display for RustSyntax<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ZobristMap {
            pieces,
            castling_rights,
            en_passant,
        } = self.0;

        writeln!(f, "#[rustfmt::skip]")?;
        writeln!(
            f,
            "pub const ZOBRIST_PIECES_TABLE: [[[u64; 2]; 64]; 6] = ["
        )?;

        for kind in PieceKind::ALL {
            writeln!(f, "    [  // {kind}")?;

            for (square, [white, black]) in pieces.0[kind.index()].iter().enumerate() {
                writeln!(f, "        [{white}, {black}],  // Square {square}")?;
            }

            writeln!(f, "    ],")?;
        }

        writeln!(f, "];")?;

        writeln!(f)?;
        writeln!(f, "#[rustfmt::skip]")?;
        writeln!(f, "pub const ZOBRIST_CASTLING_RIGHTS_TABLE: [u64; 16] = [")?;

        for key in castling_rights.0 {
            writeln!(f, "    {key},")?;
        }

        writeln!(f, "];")?;

        writeln!(f)?;
        writeln!(f, "#[rustfmt::skip]")?;
        writeln!(f, "pub const ZOBRIST_EN_PASSANT_TABLE: [u64; 64] = [")?;

        for key in en_passant.0 {
            writeln!(f, "    {key},")?;
        }

        writeln!(f, "];")
    }
}

pub fn render(map: &ZobristMap) -> String {
    RustSyntax(map).to_string()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rand::{Rng, SeedableRng};
    use test_case::test_case;
    use zobgen_bootstrap::{PieceKind, SplitMix64, ZobristMap};

    use super::render;

    fn rendered(seed: u64) -> (ZobristMap, String) {
        let map: ZobristMap = SplitMix64::seed_from_u64(seed).gen();
        let text = render(&map);

        (map, text)
    }

    /// The trivial reader from the consumer's side of the contract: take the
    /// value literals in emission order, ignoring declaration headers and
    /// comments (whose square numbers are not values).
    fn extract_literals(text: &str) -> Vec<u64> {
        text.lines()
            .filter_map(|line| {
                let body = line.split("//").next().unwrap_or("").trim();

                body.starts_with(|c: char| c.is_ascii_digit())
                    .then_some(body)
                    .or_else(|| {
                        (body.starts_with('[')
                            && body[1..].trim_start().starts_with(|c: char| c.is_ascii_digit()))
                        .then_some(body)
                    })
            })
            .flat_map(|body| {
                body.split(|c: char| !c.is_ascii_digit())
                    .filter(|run| !run.is_empty())
                    .map(|run| run.parse::<u64>().unwrap())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    #[test_case(0)]
    #[test_case(1337)]
    #[test_case(0xB2D07A5419C683E1)]
    fn rendering_is_deterministic(seed: u64) {
        assert_eq!(rendered(seed).1, rendered(seed).1);
    }

    #[test]
    fn declarations_have_the_expected_shape() {
        let (_, text) = rendered(1337);

        assert_eq!(
            text.matches("pub const ZOBRIST_PIECES_TABLE: [[[u64; 2]; 64]; 6] = [")
                .count(),
            1
        );
        assert_eq!(
            text.matches("pub const ZOBRIST_CASTLING_RIGHTS_TABLE: [u64; 16] = [")
                .count(),
            1
        );
        assert_eq!(
            text.matches("pub const ZOBRIST_EN_PASSANT_TABLE: [u64; 64] = [")
                .count(),
            1
        );
        assert_eq!(text.matches("#[rustfmt::skip]").count(), 3);
        assert_eq!(text.matches("],  // Square ").count(), 384);
        assert_eq!(text.matches("    [  // ").count(), 6);
    }

    #[test]
    fn piece_blocks_are_labeled_in_order() {
        let (_, text) = rendered(1337);

        let labels: Vec<PieceKind> = text
            .lines()
            .filter_map(|line| line.strip_prefix("    [  // "))
            .map(|name| PieceKind::from_str(name).unwrap())
            .collect();

        assert_eq!(labels, PieceKind::ALL);
    }

    #[test]
    fn square_comments_ascend_within_each_block() {
        let (_, text) = rendered(1337);

        let squares: Vec<usize> = text
            .lines()
            .filter_map(|line| line.split("],  // Square ").nth(1))
            .map(|index| index.parse().unwrap())
            .collect();

        // One run of 0..64 per piece block.
        assert_eq!(squares.len(), 384);

        for (position, square) in squares.iter().enumerate() {
            assert_eq!(*square, position % 64);
        }
    }

    #[test_case(1337)]
    #[test_case(0xB2D07A5419C683E1)]
    fn literals_round_trip(seed: u64) {
        let (map, text) = rendered(seed);
        let literals = extract_literals(&text);

        assert_eq!(literals.len(), 848);
        assert_eq!(literals, map.keys().collect::<Vec<_>>());
    }
}

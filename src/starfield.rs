use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Stars scattered behind the board on each new game.
pub const STAR_COUNT: usize = 50;

/// One background star; `shade` indexes the theme's star colors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Star {
    pub position: Position,
    pub shade: usize,
}

/// Decorative background stars. Purely cosmetic: the game rules never see them.
#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Scatters [`STAR_COUNT`] stars uniformly over the board. Stars may share a cell.
    #[must_use]
    pub fn scatter<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, shades: usize) -> Self {
        let shades = shades.max(1);
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                position: Position {
                    x: rng.gen_range(0..i32::from(bounds.width)),
                    y: rng.gen_range(0..i32::from(bounds.height)),
                },
                shade: rng.gen_range(0..shades),
            })
            .collect();

        Self { stars }
    }

    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{STAR_COUNT, Starfield};
    use crate::config::GridSize;

    #[test]
    fn scatter_places_every_star_on_the_board() {
        let bounds = GridSize {
            width: 12,
            height: 9,
        };
        let field = Starfield::scatter(&mut StdRng::seed_from_u64(5), bounds, 3);

        assert_eq!(field.stars().count(), STAR_COUNT);
        for star in field.stars() {
            assert!(star.position.is_within_bounds(bounds));
            assert!(star.shade < 3);
        }
    }

    #[test]
    fn same_seed_gives_same_sky() {
        let bounds = GridSize {
            width: 40,
            height: 30,
        };
        let a = Starfield::scatter(&mut StdRng::seed_from_u64(8), bounds, 3);
        let b = Starfield::scatter(&mut StdRng::seed_from_u64(8), bounds, 3);

        assert!(a.stars().eq(b.stars()));
    }
}

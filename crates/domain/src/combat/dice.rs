//! Injected randomness for combat resolution
//!
//! The domain never constructs a random generator. Callers hand in something
//! implementing [`Dice`] (usually a closure over a per-call seeded RNG), and
//! every draw in an attack or battle goes through it.

/// Source of uniform integer draws.
pub trait Dice {
    /// Draw an integer in `[0, upper)`. Only called with `upper > 0`.
    fn below(&mut self, upper: i32) -> i32;
}

impl<F> Dice for F
where
    F: FnMut(i32) -> i32,
{
    fn below(&mut self, upper: i32) -> i32 {
        self(upper)
    }
}

/// Uniform draw in `[0, upper)`; an empty range yields 0 without drawing.
pub fn uniform(dice: &mut impl Dice, upper: i32) -> i32 {
    if upper <= 0 {
        0
    } else {
        dice.below(upper).clamp(0, upper - 1)
    }
}

/// Pick one element uniformly, or `None` for an empty slice.
pub fn pick<'a, T>(dice: &mut impl Dice, items: &'a [T]) -> Option<&'a T> {
    match items.len() {
        0 => None,
        len => {
            let upper = i32::try_from(len).unwrap_or(i32::MAX);
            let index = uniform(dice, upper) as usize;
            items.get(index)
        }
    }
}

/// Fair coin flip.
pub fn coin(dice: &mut impl Dice) -> bool {
    uniform(dice, 2) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range_never_draws() {
        let mut dice = |_: i32| -> i32 { panic!("must not draw for an empty range") };
        assert_eq!(uniform(&mut dice, 0), 0);
        assert_eq!(uniform(&mut dice, -5), 0);
    }

    #[test]
    fn draws_are_clamped_into_range() {
        let mut dice = |upper: i32| upper + 10;
        assert_eq!(uniform(&mut dice, 4), 3);

        let mut low = |_: i32| -3;
        assert_eq!(uniform(&mut low, 4), 0);
    }

    #[test]
    fn pick_from_empty_slice_is_none() {
        let mut dice = |_: i32| 0;
        let empty: [u8; 0] = [];
        assert!(pick(&mut dice, &empty).is_none());
    }

    #[test]
    fn pick_uses_drawn_index() {
        let mut dice = |_: i32| 2;
        assert_eq!(pick(&mut dice, &["a", "b", "c"]), Some(&"c"));
    }

    #[test]
    fn coin_is_heads_on_zero() {
        let mut heads = |_: i32| 0;
        let mut tails = |_: i32| 1;
        assert!(coin(&mut heads));
        assert!(!coin(&mut tails));
    }
}

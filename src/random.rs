use crate::error::{Result, SnippetError};
use rand::Rng;
use rand::seq::SliceRandom;

/// Uniformly picks one element of `items`
pub fn pick<T>(items: &[T]) -> Result<&T> {
    pick_with(items, &mut rand::thread_rng())
}

pub fn pick_with<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Result<&'a T> {
    items.choose(rng).ok_or(SnippetError::EmptySelection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn empty_sequence_is_an_error() {
        let empty: [u8; 0] = [];
        assert!(matches!(pick(&empty), Err(SnippetError::EmptySelection)));
    }

    #[test]
    fn single_element_is_always_picked() {
        let only = ["python"];
        for _ in 0..50 {
            assert_eq!(*pick(&only).unwrap(), "python");
        }
    }

    #[test]
    fn picks_cover_the_whole_sequence() {
        let items = ["a", "b", "c", "d", "e", "f"];
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0usize; 6];

        for _ in 0..6000 {
            let picked = pick_with(&items, &mut rng).unwrap();
            let index = items.iter().position(|item| item == picked).unwrap();
            counts[index] += 1;
        }

        for count in counts {
            assert!((700..1300).contains(&count), "skewed distribution: {counts:?}");
        }
    }

    #[test]
    fn picks_are_members() {
        let items: Vec<u32> = (10..20).collect();
        let seen: HashSet<u32> = (0..500).map(|_| *pick(&items).unwrap()).collect();
        assert!(seen.iter().all(|n| items.contains(n)));
        assert_eq!(seen.len(), items.len());
    }
}

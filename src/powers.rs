use std::iter::FusedIterator;

/*
 * The powers base^1 .. base^limit, computed on demand and never stored.
 */
#[derive(Clone, Debug)]
pub struct Powers {
    base: u64,
    limit: u32,
    exponent: u32,
    current: Option<u64>,
}

impl Powers {
    pub fn new(base: u64, limit: u32) -> Self {
        Powers {
            base,
            limit,
            exponent: 0,
            current: Some(1),
        }
    }
}

impl Iterator for Powers {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exponent >= self.limit {
            return None;
        }
        // Overflow ends the sequence
        let value = self.current?.checked_mul(self.base);
        self.current = value;
        self.exponent += 1;
        value
    }
}

impl FusedIterator for Powers {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers() {
        let powers = Powers::new(2, 4);
        assert_eq!(powers.collect::<Vec<_>>(), vec![2, 4, 8, 16]);
    }

    #[test]
    fn consecutive_pairs() {
        let values: Vec<_> = Powers::new(2, 4).collect();
        let pairs: Vec<_> = values.windows(2).map(|w| (w[0], w[1])).collect();
        assert_eq!(pairs, vec![(2, 4), (4, 8), (8, 16)]);

        let zipped: Vec<_> = Powers::new(2, 4).zip(Powers::new(2, 4).skip(1)).collect();
        assert_eq!(zipped, pairs);
    }

    #[test]
    fn zero_limit() {
        assert_eq!(Powers::new(3, 0).next(), None);
    }

    #[test]
    fn overflow_stops() {
        let values: Vec<_> = Powers::new(10, 100).collect();
        assert_eq!(values.len(), 19);
        assert_eq!(values.last(), Some(&10_000_000_000_000_000_000));

        let mut powers = Powers::new(u64::MAX, 3);
        assert_eq!(powers.next(), Some(u64::MAX));
        assert_eq!(powers.next(), None);
        assert_eq!(powers.next(), None);
    }
}

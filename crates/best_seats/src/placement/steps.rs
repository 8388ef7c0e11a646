/// Signed outward moves `+1, -1, +2, -2, ...` from an origin, at most
/// `budget` of them. The positive side always comes first at each distance.
#[derive(Debug, Clone)]
pub struct OutwardSteps {
    taken: u32,
    budget: u32,
}

impl OutwardSteps {
    pub fn new(budget: u32) -> Self {
        Self { taken: 0, budget }
    }
}

impl Iterator for OutwardSteps {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.taken >= self.budget {
            return None;
        }
        self.taken += 1;
        let magnitude = i32::try_from(self.taken.div_ceil(2)).unwrap_or(i32::MAX);
        Some(if self.taken % 2 == 1 {
            magnitude
        } else {
            -magnitude
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.budget - self.taken) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for OutwardSteps {}

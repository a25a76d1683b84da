use recycle_types::BlockHeight;
use serde::{Deserialize, Serialize};

/// Monotonic block height supplied to the contracts as an opaque timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockClock {
    height: BlockHeight,
}

impl BlockClock {
    pub fn starting_at(height: BlockHeight) -> Self {
        Self { height }
    }

    pub fn height(&self) -> BlockHeight {
        self.height
    }

    /// Move to the next block and return it.
    pub fn advance(&mut self) -> BlockHeight {
        self.height = self.height.next();
        self.height
    }

    /// Jump forward to `height`. Earlier heights are ignored.
    pub fn advance_to(&mut self, height: BlockHeight) -> BlockHeight {
        if height > self.height {
            self.height = height;
        }
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_never_goes_backwards() {
        let mut clock = BlockClock::starting_at(BlockHeight(100));
        assert_eq!(clock.advance(), BlockHeight(101));
        assert_eq!(clock.advance_to(BlockHeight(50)), BlockHeight(101));
        assert_eq!(clock.advance_to(BlockHeight(200)), BlockHeight(200));
        assert_eq!(clock.height(), BlockHeight(200));
    }
}

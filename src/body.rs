/// Counter of body bytes still expected, set from `Content-Length`
///
/// Once headers end the parser stops scanning for lines and just drains
/// this counter, across however many input chunks it takes.
pub struct BodyState {
    left: u64,
}

impl BodyState {
    pub fn new() -> BodyState {
        BodyState { left: 0 }
    }

    /// Install the expected body size from a `Content-Length` header.
    pub fn expect(&mut self, length: u64) {
        self.left = length;
    }

    /// Bytes still expected.
    pub fn pending(&self) -> u64 {
        self.left
    }

    /// How much of an `available`-byte slice counts as body.
    ///
    /// Anything beyond the expected length is not ours; pipelined
    /// requests are not supported.
    pub fn accept(&self, available: usize) -> usize {
        if (available as u64) < self.left {
            available
        } else {
            self.left as usize
        }
    }

    /// Record `n` delivered body bytes, returning the remainder.
    pub fn advance(&mut self, n: usize) -> u64 {
        assert!(n as u64 <= self.left);
        self.left -= n as u64;
        self.left
    }

    pub fn is_drained(&self) -> bool {
        self.left == 0
    }

    pub fn reset(&mut self) {
        self.left = 0;
    }
}

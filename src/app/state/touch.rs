/// Press-and-hold tracking for touch input.
///
/// A press arms a timer identified by a token; a release disarms it. Only the
/// timer whose token is still armed may open the card.
#[derive(Debug, Default)]
pub struct TapState {
    pub(in crate::app) next_token: u64,
    pub(in crate::app) pending: Option<PendingTap>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTap {
    pub(in crate::app) token: u64,
    pub(in crate::app) book_idx: usize,
}

impl TapState {
    pub(in crate::app) fn begin(&mut self, book_idx: usize) -> u64 {
        self.next_token = self.next_token.wrapping_add(1);
        let token = self.next_token;
        self.pending = Some(PendingTap { token, book_idx });
        token
    }

    pub(in crate::app) fn cancel(&mut self) -> Option<usize> {
        self.pending.take().map(|tap| tap.book_idx)
    }

    /// Consume the pending tap if `token` is the one currently armed.
    pub(in crate::app) fn fire(&mut self, token: u64) -> Option<usize> {
        match self.pending {
            Some(tap) if tap.token == token => {
                self.pending = None;
                Some(tap.book_idx)
            }
            _ => None,
        }
    }
}

/// Tickets for overlapping fetches of the same resource.
///
/// Each fetch takes a ticket before it starts; when it completes it may only
/// publish its result if no newer fetch has started since. Responses landing
/// out of order are dropped instead of overwriting fresher data.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

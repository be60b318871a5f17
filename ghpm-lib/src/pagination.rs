pub const PAGE_SIZE: usize = 100;

/// Tracks which page of the remaining public repositories to ask for.
///
/// Repositories made private drop out of the remote listing, so the
/// cursor only moves past repositories that stay public (skipped or
/// failed). If a full page brings nothing new, it moves one page further
/// so that the loop cannot spin on the same page.
#[derive(Debug, Default)]
pub struct PageCursor {
    retained: usize,
    stalls: u32,
}

impl PageCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> u32 {
        (self.retained / PAGE_SIZE) as u32 + 1 + self.stalls
    }

    // `fresh`: first seen on this page. `retained`: of those, still public.
    pub fn advance(&mut self, fresh: usize, retained: usize) {
        self.retained += retained;
        if fresh == 0 {
            self.stalls += 1;
        }
    }

    pub fn is_last(page_len: usize) -> bool {
        page_len < PAGE_SIZE
    }
}

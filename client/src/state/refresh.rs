//! Cross-component refresh signal for the craftsmen page.
//!
//! Approving or rejecting a verification bumps the counter; every component
//! that reads it (pending list, stats, charts, table) refetches in response.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshTrigger {
    pub generation: u64,
}

impl RefreshTrigger {
    pub fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

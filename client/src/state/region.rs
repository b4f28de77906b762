//! Per-region load state and request sequencing.
//!
//! DESIGN
//! ======
//! Loads are never cancelled, so a slow response can arrive after a newer one.
//! Every DOM region issues a ticket per request and only applies the response
//! whose ticket is still the latest.

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;

/// Monotonic request counter for one DOM region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Issue a ticket for a new request, superseding all earlier ones.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Render state of a region fed by a single fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum Region<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Region<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Region<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// A region plus its request sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Tracked<T> {
    pub region: Region<T>,
    pub seq: RequestSeq,
}

impl<T> Default for Tracked<T> {
    fn default() -> Self {
        Self { region: Region::Idle, seq: RequestSeq::default() }
    }
}

impl<T> Tracked<T> {
    /// Issue the ticket for a new request. Content already on screen stays
    /// until the response replaces it; anything else shows as loading.
    pub fn begin(&mut self) -> u64 {
        if !matches!(self.region, Region::Ready(_)) {
            self.region = Region::Loading;
        }
        self.seq.issue()
    }

    /// Apply a response if `ticket` is still current. Returns whether it was applied.
    pub fn settle(&mut self, ticket: u64, region: Region<T>) -> bool {
        if !self.seq.is_current(ticket) {
            log::debug!("discarding stale response (ticket {ticket})");
            return false;
        }
        self.region = region;
        true
    }

    /// Record a failed request if `ticket` is still current. Content already
    /// on screen stays; anything else shows `message`. Returns whether the
    /// ticket was current.
    pub fn fail(&mut self, ticket: u64, message: &str) -> bool {
        if !self.seq.is_current(ticket) {
            log::debug!("discarding stale failure (ticket {ticket})");
            return false;
        }
        if !matches!(self.region, Region::Ready(_)) {
            self.region = Region::Failed(message.to_owned());
        }
        true
    }
}

//! Recorded trajectories, one track per body
//!
//! `TrajectoryHistory` is the hand-off from the simulation to the viewer:
//! an append-only, time-ordered sequence of position snapshots per body,
//! index-parallel with `System::bodies`. Snapshots are recorded by value
//! (`NVec2` is `Copy`), so later mutation of the live body state never
//! touches what was already recorded.

use bevy::prelude::Resource;

use crate::simulation::states::{System, NVec2};

#[derive(Resource, Debug, Clone)]
pub struct TrajectoryHistory {
    tracks: Vec<Vec<NVec2>>, // tracks[i] belongs to System::bodies[i]
}

impl TrajectoryHistory {
    /// Empty history for `body_count` bodies, with room for `steps` samples
    pub fn new(body_count: usize, steps: usize) -> Self {
        Self {
            tracks: vec![Vec::with_capacity(steps); body_count],
        }
    }

    /// Append a snapshot of every body's current position
    pub fn record(&mut self, sys: &System) {
        for (track, b) in self.tracks.iter_mut().zip(sys.bodies.iter()) {
            track.push(b.x);
        }
    }

    /// Number of bodies tracked
    pub fn body_count(&self) -> usize {
        self.tracks.len()
    }

    /// Number of recorded steps (identical for every track)
    pub fn steps(&self) -> usize {
        self.tracks.first().map_or(0, Vec::len)
    }

    /// Full track for body `i`, in chronological order
    pub fn track(&self, i: usize) -> &[NVec2] {
        &self.tracks[i]
    }

    /// Track prefix for body `i` up to and including frame `frame`.
    /// The last element of the prefix is the body's drawable position
    /// at that frame.
    pub fn prefix(&self, i: usize, frame: usize) -> &[NVec2] {
        let end = (frame + 1).min(self.tracks[i].len());
        &self.tracks[i][..end]
    }
}

use std::collections::HashMap;

/// Pass and fail counts of a single top-level group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GroupStats {
    pub passed: usize,
    pub failed: usize,
}

impl GroupStats {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

/// Everything the explain formatter remembers while a run is in progress.
///
/// Examples are attributed to the most recently started top-level group.
/// Groups nested deeper than that never become the current group, so their
/// examples roll up into their top-level ancestor.
#[derive(Debug, Default, Clone)]
pub struct RunState {
    current_group: Option<String>,
    fails_count: usize,
    group_stats: HashMap<String, GroupStats>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the running failure count for a new run.
    ///
    /// Group stats and the current group survive, they are only ever added to.
    pub fn start(&mut self) {
        self.fails_count = 0;
    }

    /// Make `description` the current group if the group is top-level.
    ///
    /// Returns whether the group was accepted.
    pub fn enter_group(&mut self, description: &str, depth: usize) -> bool {
        if !is_top_level(depth) {
            return false;
        }

        self.current_group = Some(description.to_string());
        true
    }

    pub fn record_pass(&mut self) {
        self.current_stats_mut().passed += 1;
    }

    /// Count a failure and return its 1-based number in this run.
    pub fn record_failure(&mut self) -> usize {
        self.fails_count += 1;
        self.current_stats_mut().failed += 1;
        self.fails_count
    }

    /// The number the next failure will be displayed with.
    pub fn next_failure_number(&self) -> usize {
        self.fails_count + 1
    }

    pub fn fails_count(&self) -> usize {
        self.fails_count
    }

    pub fn current_group(&self) -> Option<&str> {
        self.current_group.as_deref()
    }

    /// Stats for `group`, zero if the group never saw an example.
    pub fn group_stats(&self, group: &str) -> GroupStats {
        self.group_stats.get(group).copied().unwrap_or_default()
    }

    pub fn groups(&self) -> impl ExactSizeIterator<Item = (&str, &GroupStats)> {
        self.group_stats
            .iter()
            .map(|(group, stats)| (group.as_str(), stats))
    }

    // Examples reported before any top-level group count towards "".
    fn current_stats_mut(&mut self) -> &mut GroupStats {
        let key = self.current_group.clone().unwrap_or_default();
        self.group_stats.entry(key).or_default()
    }
}

pub fn is_top_level(depth: usize) -> bool {
    depth == 1
}

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Catalog;
use crate::store::DataStore;
use serde::Serialize;

/// Books read against a yearly target. The target is supplied per call and
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    pub read: usize,
    pub goal: u32,
    pub year: i32,
}

impl GoalProgress {
    pub fn remaining(&self) -> usize {
        (self.goal as usize).saturating_sub(self.read)
    }

    pub fn is_met(&self) -> bool {
        self.read >= self.goal as usize
    }
}

/// `(books read, goal)`.
pub fn goal_progress(catalog: &Catalog, goal: u32) -> (usize, u32) {
    let read = catalog.iter().filter(|book| book.is_read()).count();
    (read, goal)
}

pub fn run<S: DataStore>(store: &S, goal: u32, year: i32) -> Result<CmdResult> {
    let catalog = store.load()?;
    let (read, goal) = goal_progress(&catalog, goal);
    Ok(CmdResult::default().with_goal(GoalProgress { read, goal, year }))
}

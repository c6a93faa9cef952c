//! Pacing for the carver: how much work happens between two frames.

use crate::carver::MazeCarver;
use crate::random::RandomSource;
use crate::units::{StepsCount, VisitedCount};

use log::{debug, info};
use std::time::{Duration, Instant};

/// Default wall clock budget of one tick.
pub const DEFAULT_TICK: Duration = Duration::from_millis(10);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum StepBudget {
    /// At most this many steps per tick. Zero still takes one step.
    Steps(usize),
    /// Keep stepping until this much time has passed since the tick started.
    Time(Duration),
}

impl Default for StepBudget {
    fn default() -> StepBudget {
        StepBudget::Time(DEFAULT_TICK)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct TickReport {
    pub tick: usize,
    pub steps: StepsCount,
    pub carved: usize,
    pub visited: VisitedCount,
    pub complete: bool,
}

#[derive(Debug, Clone)]
pub struct Driver {
    budget: StepBudget,
    ticks: usize,
}

impl Driver {
    pub fn new(budget: StepBudget) -> Driver {
        Driver { budget, ticks: 0 }
    }

    #[inline]
    pub fn budget(&self) -> StepBudget {
        self.budget
    }

    /// Ticks run so far.
    #[inline]
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Runs one burst of steps under the budget. Stops early once the maze is complete.
    /// A tick on a completed maze takes no steps.
    pub fn tick<R: RandomSource>(&mut self, carver: &mut MazeCarver<R>) -> TickReport {
        self.ticks += 1;
        let started = Instant::now();
        let mut steps = 0;
        let mut carved = 0;

        while !carver.is_complete() {
            if carver.step().carved() {
                carved += 1;
            }
            steps += 1;

            let exhausted = match self.budget {
                StepBudget::Steps(max_steps) => steps >= max_steps,
                StepBudget::Time(duration) => started.elapsed() >= duration,
            };
            if exhausted {
                break;
            }
        }

        let report = TickReport {
            tick: self.ticks,
            steps: StepsCount(steps),
            carved,
            visited: carver.visited_count(),
            complete: carver.is_complete(),
        };
        debug!("tick {}: {} steps, {} carved, {:.1}% complete",
               report.tick,
               steps,
               carved,
               100.0 * carver.progress());
        report
    }

    /// Ticks until the maze is complete, handing the carver to `on_tick` after each tick.
    /// Returns the number of ticks this took.
    pub fn run<R, F>(&mut self, carver: &mut MazeCarver<R>, mut on_tick: F) -> usize
        where R: RandomSource,
              F: FnMut(&MazeCarver<R>, &TickReport)
    {
        let first_tick = self.ticks;
        while !carver.is_complete() {
            let report = self.tick(carver);
            on_tick(carver, &report);
        }
        let ticks = self.ticks - first_tick;
        info!("carving finished in {} ticks, {} steps", ticks, carver.steps_taken().0);
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{seeded_rng, ScriptedRandom};
    use crate::units::GridSize;
    use crate::verify;

    #[test]
    fn step_budget_limits_each_tick() {
        let mut carver = MazeCarver::new(GridSize(8), seeded_rng(4)).expect("valid grid size");
        let mut driver = Driver::new(StepBudget::Steps(5));
        let report = driver.tick(&mut carver);
        assert_eq!(report.steps, StepsCount(5));
        assert_eq!(report.tick, 1);
        assert!(!report.complete);
        assert_eq!(carver.steps_taken(), StepsCount(5));
        assert_eq!(report.visited.0, 1 + report.carved);
    }

    #[test]
    fn zero_step_budget_still_progresses() {
        let mut carver = MazeCarver::new(GridSize(3), seeded_rng(4)).expect("valid grid size");
        let mut driver = Driver::new(StepBudget::Steps(0));
        assert_eq!(driver.tick(&mut carver).steps, StepsCount(1));
    }

    #[test]
    fn tick_stops_at_completion() {
        // Right then down then left completes a 2x2 maze from the top left corner.
        let script = vec![0, 0, 3, 2, 1];
        let mut carver = MazeCarver::new(GridSize(2), ScriptedRandom::new(script))
            .expect("valid grid size");
        let mut driver = Driver::new(StepBudget::Steps(100));
        let report = driver.tick(&mut carver);
        assert_eq!(report.steps, StepsCount(3));
        assert_eq!(report.carved, 3);
        assert!(report.complete);

        let idle = driver.tick(&mut carver);
        assert_eq!(idle.steps, StepsCount(0));
        assert!(idle.complete);
    }

    #[test]
    fn run_reports_every_tick() {
        let mut carver = MazeCarver::new(GridSize(10), seeded_rng(8)).expect("valid grid size");
        let mut driver = Driver::new(StepBudget::Steps(50));
        let mut reports = vec![];
        let ticks = driver.run(&mut carver, |_, report| reports.push(*report));

        assert_eq!(ticks, reports.len());
        assert_eq!(driver.ticks(), ticks);
        assert!(reports.last().map_or(false, |r| r.complete));
        assert!(reports.iter().rev().skip(1).all(|r| !r.complete && r.steps == StepsCount(50)));
        let total_steps: usize = reports.iter().map(|r| r.steps.0).sum();
        assert_eq!(total_steps, carver.steps_taken().0);
        let total_carved: usize = reports.iter().map(|r| r.carved).sum();
        assert_eq!(total_carved, 99);
        assert!(verify::is_spanning_tree(carver.grid()));
    }

    #[test]
    fn time_budget_completes() {
        let mut carver = MazeCarver::new(GridSize(6), seeded_rng(15)).expect("valid grid size");
        let mut driver = Driver::new(StepBudget::Time(Duration::from_millis(1)));
        let mut seen_partial_forest = true;
        let ticks = driver.run(&mut carver, |c, _| {
            seen_partial_forest &= verify::is_forest(c.grid());
        });
        assert!(ticks >= 1);
        assert!(seen_partial_forest);
        assert!(carver.is_complete());
    }

    #[test]
    fn default_budget_is_ten_milliseconds() {
        assert_eq!(StepBudget::default(), StepBudget::Time(Duration::from_millis(10)));
    }
}

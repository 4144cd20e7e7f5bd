//! The simulator, which puts everything together.

use crate::{
    cells::Age,
    config::Config,
    error::Error,
    grid::SparseGrid,
    history::HistoryStore,
    patterns::PatternCatalog,
    rules::RuleSet,
};
use log::{debug, trace};
use std::fmt::Write;

/// A Life-like cellular automaton on the unbounded lattice,
/// with undo and redo.
///
/// This is the only interface a front-end needs. All operations are
/// synchronous and mutate the simulator in place; sharing it between threads
/// requires external synchronization.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// The living cells.
    grid: SparseGrid,

    /// The rule of the cellular automaton.
    rule: RuleSet,

    /// The rule string, as it was given.
    rule_string: String,

    /// Number of steps since the last clear.
    generation: u64,

    /// Snapshots for undo and redo.
    history: HistoryStore,

    /// Patterns that can be placed with [`add_pattern`](Self::add_pattern).
    catalog: &'static PatternCatalog,
}

impl Simulator {
    /// A simulator for Conway's Game of Life, with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// A simulator with the given configuration.
    ///
    /// A `max_history` of 0 is treated as 1; use [`Config::simulator`]
    /// to reject it instead.
    pub fn with_config(config: &Config) -> Self {
        Simulator {
            grid: SparseGrid::new(),
            rule: RuleSet::parse(&config.rule_string),
            rule_string: config.rule_string.clone(),
            generation: 0,
            history: HistoryStore::new(config.max_history),
            catalog: PatternCatalog::builtin(),
        }
    }

    /// Advances one generation.
    ///
    /// The current grid is recorded in the history first, discarding
    /// anything that could have been redone.
    pub fn step(&mut self) {
        self.history.record(&self.grid);
        self.grid = self.grid.step(&self.rule);
        self.generation += 1;
        trace!(
            "Generation {}: {} living cells",
            self.generation,
            self.grid.len()
        );
    }

    /// Advances `n` generations.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Goes back one entry in the history.
    ///
    /// Returns true if the undo was successful, or false if there was nothing
    /// to undo, in which case nothing changes.
    pub fn undo(&mut self) -> bool {
        if let Some(grid) = self.history.undo() {
            self.grid = grid;
            self.generation = self.generation.saturating_sub(1);
            true
        } else {
            false
        }
    }

    /// Goes forward one entry in the history.
    ///
    /// Returns true if the redo was successful, or false if there was nothing
    /// to redo, in which case nothing changes.
    pub fn redo(&mut self) -> bool {
        if let Some(grid) = self.history.redo() {
            self.grid = grid;
            self.generation += 1;
            true
        } else {
            false
        }
    }

    /// Sets a cell alive as a newborn. Not recorded in the history.
    pub fn add_cell(&mut self, x: i64, y: i64) {
        self.grid.add_cell((x, y));
    }

    /// Kills a cell, if it is alive. Not recorded in the history.
    pub fn remove_cell(&mut self, x: i64, y: i64) {
        self.grid.remove_cell((x, y));
    }

    /// Kills all cells and resets the generation counter.
    ///
    /// The empty grid is recorded in the history like a step would record
    /// it, so the grid before the clear can not be restored by undo.
    /// Clearing after an undo discards the undone generations, so redo
    /// has nothing left to restore.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.history.record(&self.grid);
    }

    /// Places a pattern from the catalog, centered at `(cx, cy)`.
    ///
    /// The pattern is added to the existing cells as newborn cells.
    /// Returns an error, and changes nothing, if there is no such pattern.
    pub fn add_pattern(&mut self, name: &str, cx: i64, cy: i64) -> Result<(), Error> {
        let cells = self.catalog.place(name, cx, cy)?;
        debug!("Placing {:?} ({} cells) at ({}, {})", name, cells.len(), cx, cy);
        self.grid.extend(cells);
        Ok(())
    }

    /// Replaces the rule.
    ///
    /// Never fails: a malformed rule string gives a rule under which
    /// every cell dies.
    pub fn set_rules(&mut self, rule_string: &str) {
        self.rule = RuleSet::parse(rule_string);
        if self.rule.is_frozen() {
            debug!("Rule string {:?} has no birth or survival", rule_string);
        }
        self.rule_string = rule_string.to_string();
    }

    /// Number of generations since the start or the last clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The living cells and their ages.
    pub fn cells(&self) -> &SparseGrid {
        &self.grid
    }

    /// The age of the cell at `(x, y)`, or `None` if it is dead.
    pub fn cell(&self, x: i64, y: i64) -> Option<Age> {
        self.grid.get((x, y))
    }

    /// Number of living cells.
    pub fn cell_count(&self) -> usize {
        self.grid.len()
    }

    /// The current rule.
    pub fn rule(&self) -> &RuleSet {
        &self.rule
    }

    /// The current rule string, as it was given.
    pub fn rule_string(&self) -> &str {
        &self.rule_string
    }

    /// The pattern catalog.
    pub fn catalog(&self) -> &'static PatternCatalog {
        self.catalog
    }

    /// Whether [`undo`](Self::undo) would do anything.
    pub fn can_undo(&self) -> bool {
        self.history.has_undo()
    }

    /// Whether [`redo`](Self::redo) would do anything.
    pub fn can_redo(&self) -> bool {
        self.history.has_redo()
    }

    /// Number of snapshots in the history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Maximal number of snapshots in the history.
    pub fn max_history(&self) -> usize {
        self.history.capacity()
    }

    /// Displays the living cells in a mix of
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) and
    /// [RLE](https://conwaylife.com/wiki/Rle) format,
    /// within the bounding box.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`;
    /// * Each line is ended with `$`;
    /// * The whole pattern is ended with `!`.
    pub fn display(&self) -> String {
        let mut str = String::new();
        let (width, height) = self
            .grid
            .bounding_box()
            .map_or((0, 0), |bbox| (bbox.width(), bbox.height()));
        writeln!(
            str,
            "x = {}, y = {}, rule = {}",
            width, height, self.rule_string
        )
        .unwrap();
        let plaintext = self.grid.plaintext();
        let mut lines = plaintext.lines().peekable();
        if lines.peek().is_none() {
            str.push_str("!\n");
        }
        while let Some(line) = lines.next() {
            str.push_str(line);
            str.push(if lines.peek().is_some() { '$' } else { '!' });
            str.push('\n');
        }
        str
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

//! Display regions, markup escaping, and the change-diffing renderer.
//!
//! RULE: a region is written only when its text actually changed.
//! Identical re-renders issue zero writes, so a sink backed by markup
//! elements is never disturbed by redundant redraws.

use crate::clock::Clock;
use crate::snapshot::StateCell;
use crate::timer::countdown_text;
use std::collections::HashMap;
use std::sync::Arc;

/// The four display regions the controller owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Word,
    Points,
    Timer,
    Status,
}

impl Region {
    pub const ALL: [Self; 4] = [Self::Word, Self::Points, Self::Timer, Self::Status];

    /// Stable name of the target region, as a sink would address it.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Points => "points",
            Self::Timer => "timer",
            Self::Status => "status",
        }
    }
}

/// Where rendered text lands. A sink with no target for a region must
/// treat the write as a no-op, never as an error.
pub trait RenderSink {
    fn set_text(&mut self, region: Region, text: &str);
}

/// Escape markup-significant characters, so operator-controlled content
/// (the current word above all) cannot inject into a markup-based sink.
pub fn escape_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders the current snapshot into a sink on every tick.
///
/// Reads the cell, never writes it. A tick before the first successful
/// poll does nothing at all.
pub struct Renderer<C: Clock, S: RenderSink> {
    cell:  Arc<StateCell>,
    clock: C,
    sink:  S,
    shown: HashMap<Region, String>,
}

impl<C: Clock, S: RenderSink> Renderer<C, S> {
    pub fn new(cell: Arc<StateCell>, clock: C, sink: S) -> Self {
        Self {
            cell,
            clock,
            sink,
            shown: HashMap::new(),
        }
    }

    /// One render tick. Pure computation plus sink writes — never suspends.
    pub fn tick(&mut self) {
        let Some(snapshot) = self.cell.get() else {
            return;
        };
        let now = self.clock.now();

        self.update(Region::Word, &snapshot.word);
        self.update(Region::Points, &snapshot.points.to_string());
        self.update(Region::Timer, &countdown_text(&snapshot, now));
        self.update(Region::Status, &snapshot.status);
    }

    fn update(&mut self, region: Region, raw: &str) {
        let text = escape_markup(raw);
        if self.shown.get(&region) == Some(&text) {
            return;
        }
        self.sink.set_text(region, &text);
        self.shown.insert(region, text);
    }
}

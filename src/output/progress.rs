use std::io::{self, Write};

/// Live "Crawled: N URLs" counter rewritten in place with a carriage return
#[derive(Debug, Default)]
pub struct ProgressLine {
    last: usize,
}

impl ProgressLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Redraws the counter on stdout
    pub fn update(&mut self, visited: usize) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        // Write errors on stdout are ignored
        let _ = self.render(visited, &mut handle);
    }

    /// Writes the counter to `out` without a trailing newline
    pub fn render<W: Write>(&mut self, visited: usize, out: &mut W) -> io::Result<()> {
        self.last = visited;
        write!(out, "Crawled: {} URLs\r", visited)?;
        out.flush()
    }

    /// Returns the most recently rendered count
    pub fn last(&self) -> usize {
        self.last
    }
}

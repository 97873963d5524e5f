use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process;

use serde::{Deserialize, Serialize};

use bilang_engine::{render_number, Input};

use super::die;

/// A single snapshot entry (one per input line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub input: String,
    pub output: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },
}

/// Read one input per line, skipping blank lines and `#` comments.
pub fn read_inputs(path: &Path) -> io::Result<Vec<String>> {
    let file = fs::File::open(path)?;
    let mut inputs = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('#') {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}

pub fn snapshot_entry(raw: &str) -> SnapshotEntry {
    SnapshotEntry {
        input: raw.to_string(),
        output: render_number(Input::from_text(raw)),
    }
}

pub fn write_snapshot(path: &Path, entries: &[SnapshotEntry]) -> Result<(), SnapshotError> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    for (i, entry) in entries.iter().enumerate() {
        let line = serde_json::to_string(entry).map_err(|source| SnapshotError::Json {
            line: i + 1,
            source,
        })?;
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<HashMap<String, SnapshotEntry>, SnapshotError> {
    let content = fs::read_to_string(path)?;
    let mut baseline = HashMap::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry: SnapshotEntry =
            serde_json::from_str(line).map_err(|source| SnapshotError::Json {
                line: i + 1,
                source,
            })?;
        baseline.insert(entry.input.clone(), entry);
    }
    Ok(baseline)
}

/// Differences between current output and a baseline snapshot.
#[derive(Debug, Default)]
pub struct SnapshotDiff {
    pub same: usize,
    /// (input, baseline output, current output)
    pub changed: Vec<(String, String, String)>,
    pub new: Vec<SnapshotEntry>,
    pub removed: Vec<String>,
}

impl SnapshotDiff {
    pub fn is_clean(&self) -> bool {
        self.changed.is_empty() && self.removed.is_empty()
    }
}

pub fn diff_snapshot(inputs: &[String], baseline: &HashMap<String, SnapshotEntry>) -> SnapshotDiff {
    let mut diff = SnapshotDiff::default();
    for raw in inputs {
        let current = snapshot_entry(raw);
        match baseline.get(raw) {
            Some(base) if base.output == current.output => diff.same += 1,
            Some(base) => diff
                .changed
                .push((raw.clone(), base.output.clone(), current.output)),
            None => diff.new.push(current),
        }
    }

    let input_set: HashSet<&str> = inputs.iter().map(|s| s.as_str()).collect();
    let mut removed: Vec<String> = baseline
        .keys()
        .filter(|k| !input_set.contains(k.as_str()))
        .cloned()
        .collect();
    removed.sort();
    diff.removed = removed;
    diff
}

pub fn snapshot_cmd(input_file: &str, output_file: &str) {
    let inputs = die!(
        read_inputs(Path::new(input_file)),
        "Failed to read input file {input_file}: {}"
    );
    let entries: Vec<SnapshotEntry> = inputs.iter().map(|raw| snapshot_entry(raw)).collect();
    die!(
        write_snapshot(Path::new(output_file), &entries),
        "Failed to write snapshot {output_file}: {}"
    );
    eprintln!(
        "Snapshot written: {} inputs -> {}",
        entries.len(),
        output_file
    );
}

pub fn diff_snapshot_cmd(input_file: &str, baseline_file: &str) {
    let inputs = die!(
        read_inputs(Path::new(input_file)),
        "Failed to read input file {input_file}: {}"
    );
    let baseline = die!(
        load_snapshot(Path::new(baseline_file)),
        "Failed to read baseline {baseline_file}: {}"
    );

    let diff = diff_snapshot(&inputs, &baseline);
    for (input, was, now) in &diff.changed {
        println!("  CHANGED: {input} -> {now} (was: {was})");
    }
    for entry in &diff.new {
        println!("  NEW:     {} -> {}", entry.input, entry.output);
    }
    for input in &diff.removed {
        println!("  REMOVED: {input}");
    }

    println!();
    println!("=== Summary ===");
    println!("  Total:    {}", inputs.len());
    println!("  Same:     {}", diff.same);
    println!("  Changed:  {}", diff.changed.len());
    println!("  New:      {}", diff.new.len());
    println!("  Removed:  {}", diff.removed.len());

    if !diff.is_clean() {
        process::exit(1);
    }
}

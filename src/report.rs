use std::io::{self, Write};
use crate::stats::Summary;

/// Renders `arr` as `[a, b, c]`, truncated to `limit` elements with a total
/// count when longer.
pub fn format_list_preview(arr: &[i64], limit: usize) -> String {
    if arr.len() <= limit {
        return format!("{:?}", arr);
    }
    format!("{:?} ... (total {} items)", &arr[..limit], arr.len())
}

pub struct Report<'a> {
    pub original: &'a [i64],
    pub reference: &'a [i64],
    pub results: Vec<(&'static str, Summary)>,
    pub trials: usize,
    pub preview_limit: usize,
}

impl Report<'_> {
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Original (preview): {}", format_list_preview(self.original, self.preview_limit))?;
        writeln!(out, "Sorted (reference, preview): {}", format_list_preview(self.reference, self.preview_limit))?;
        writeln!(out)?;
        for (name, summary) in &self.results {
            let label = format!("{}:", name);
            writeln!(
                out,
                "{:<16}mean={:.6}s  stdev={:.6}s  (over {} runs)",
                label, summary.mean, summary.std_dev, self.trials
            )?;
        }
        Ok(())
    }
}

use super::RoundSnapshot;
use anyhow::Result;
use csv::Writer;
use std::fs::File;
use std::path::Path;

// Round history as CSV, one row per resolved round. Rows are buffered until
// finish().
pub struct RoundLog {
    writer: Writer<File>,
    rows: usize,
}

impl RoundLog {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn append(&mut self, snapshot: &RoundSnapshot) -> Result<()> {
        self.writer.serialize(snapshot)?;
        self.rows += 1;
        Ok(())
    }

    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::Choice;

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.csv");

        let mut log = RoundLog::create(&path).unwrap();
        let snapshots = [
            RoundSnapshot {
                round: 1,
                elapsed_s: 0.0,
                count_a: 2,
                count_b: 1,
                minority: Some(Choice::B),
                winners: 1,
            },
            RoundSnapshot {
                round: 2,
                elapsed_s: 0.0,
                count_a: 1,
                count_b: 1,
                minority: None,
                winners: 0,
            },
        ];
        for snapshot in &snapshots {
            log.append(snapshot).unwrap();
        }
        assert_eq!(log.finish().unwrap(), 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "round,elapsed_s,count_a,count_b,minority,winners");
        assert_eq!(lines[1], "1,0.0,2,1,B,1");
        assert_eq!(lines[2], "2,0.0,1,1,,0");
    }
}

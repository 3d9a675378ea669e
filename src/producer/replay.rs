//! Replays recorded hand frames from a newline-delimited JSON file
//!
//! Each non-empty line holds one detected hand:
//!
//! ```json
//! {"label": "Left", "landmarks": [{"x": 0.5, "y": 0.5, "z": 0.0, "visibility": 1.0, "presence": 1.0}]}
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{debug, warn};

use super::source::{DetectedHand, FrameSource};
use crate::error::{HandsError, Result};
use crate::hands::{HandFrame, HandLabel, Landmark};

#[derive(Debug, Deserialize)]
struct ReplayRecord {
    label: HandLabel,
    landmarks: Vec<Landmark>,
}

/// Parse one recorded line
pub fn parse_record(line: &str, line_number: usize) -> Result<DetectedHand> {
    let record: ReplayRecord =
        serde_json::from_str(line).map_err(|e| HandsError::MalformedRecord {
            line: line_number,
            reason: e.to_string(),
        })?;

    Ok(DetectedHand::new(record.label, HandFrame::new(record.landmarks)))
}

/// Frame source backed by a recording
pub struct ReplaySource {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_number: usize,
    records_this_pass: usize,
    looping: bool,
    ticker: Interval,
}

impl ReplaySource {
    /// Open `path` for replay, emitting one record per `frame_interval`
    pub async fn open(path: impl AsRef<Path>, frame_interval: Duration, looping: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let lines = Self::open_lines(&path).await?;
        let mut ticker = interval(frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Ok(Self {
            path,
            lines,
            line_number: 0,
            records_this_pass: 0,
            looping,
            ticker,
        })
    }

    async fn open_lines(path: &Path) -> Result<Lines<BufReader<File>>> {
        let file = File::open(path).await?;
        Ok(BufReader::new(file).lines())
    }

    /// Next valid record, rewinding at end of file when looping
    async fn next_record(&mut self) -> Result<Option<DetectedHand>> {
        loop {
            let Some(line) = self.lines.next_line().await? else {
                if self.records_this_pass == 0 {
                    return Err(HandsError::Source(format!(
                        "no valid records in {}",
                        self.path.display()
                    )));
                }
                if !self.looping {
                    return Ok(None);
                }
                debug!("Rewinding replay file {}", self.path.display());
                self.lines = Self::open_lines(&self.path).await?;
                self.line_number = 0;
                self.records_this_pass = 0;
                continue;
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }

            match parse_record(&line, self.line_number) {
                Ok(hand) => {
                    self.records_this_pass += 1;
                    return Ok(Some(hand));
                }
                Err(e) => warn!("Skipping record in {}: {}", self.path.display(), e),
            }
        }
    }
}

#[async_trait]
impl FrameSource for ReplaySource {
    fn name(&self) -> &'static str {
        "replay"
    }

    async fn next_batch(&mut self) -> Result<Option<Vec<DetectedHand>>> {
        self.ticker.tick().await;
        Ok(self.next_record().await?.map(|hand| vec![hand]))
    }
}

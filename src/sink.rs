use std::io::Write;

use tracing::warn;

use crate::model::SerializedTrial;

/// The external system that durably stores transmitted trial snapshots.
///
/// Saving is fire-and-forget: the model stays responsive and visually
/// correct even when the sink is entirely unavailable, so implementations
/// swallow their own failures rather than surfacing them.
pub trait TrialSink {
    fn save(&mut self, trial: &SerializedTrial);
}

/// Sink that discards every snapshot.
#[derive(Debug, Default)]
pub struct NullSink;

impl TrialSink for NullSink {
    fn save(&mut self, _trial: &SerializedTrial) {}
}

/// Sink that writes each snapshot as one JSON object per line.
///
/// Serialization or write failures are logged and dropped; the simulation
/// must not stall because the receiving end went away.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TrialSink for JsonLinesSink<W> {
    fn save(&mut self, trial: &SerializedTrial) {
        let json = match serde_json::to_string(trial) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize trial snapshot: {e}");
                return;
            }
        };
        if let Err(e) = writeln!(self.writer, "{json}") {
            warn!("failed to write trial snapshot: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DataPoint;

    fn snapshot() -> SerializedTrial {
        SerializedTrial {
            cup_series: vec![DataPoint { time: 0, temp: 60.0 }],
            counter_series: vec![DataPoint { time: 0, temp: 20.0 }],
        }
    }

    #[test]
    fn test_json_lines_sink_writes_one_line_per_save() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.save(&snapshot());
        sink.save(&snapshot());

        let written = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let parsed: SerializedTrial = serde_json::from_str(line).unwrap();
            assert_eq!(parsed, snapshot());
        }
    }

    /// A writer that always fails. The sink must swallow the error.
    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("pipe closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut sink = JsonLinesSink::new(BrokenWriter);
        sink.save(&snapshot());
    }
}

use crate::application::session::FieldState;
use crate::error::Result;
use std::io::Write;

/// Writes field snapshots as CSV with the header `step,event,display,value,caret`.
pub struct StateWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StateWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_states(&mut self, states: impl IntoIterator<Item = FieldState>) -> Result<()> {
        for state in states {
            self.write_state(&state)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_state(&mut self, state: &FieldState) -> Result<()> {
        self.writer.serialize(state)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::caret::EditKind;

    #[test]
    fn test_writes_header_and_quotes_commas() {
        let mut buffer = Vec::new();
        {
            let mut writer = StateWriter::new(&mut buffer);
            writer
                .write_states(vec![FieldState {
                    step: 1,
                    event: EditKind::Input,
                    display: "R$ 1,23".to_string(),
                    value: "123".to_string(),
                    caret: 3,
                }])
                .unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "step,event,display,value,caret\n1,input,\"R$ 1,23\",123,3\n"
        );
    }
}

//! Destination for successfully validated submissions

use formwork_validation::ValueSet;
use tracing::info;

/// Receives the value-set of a form that passed validation on submit
pub trait FormSubmitter: Send {
    fn on_submit(&mut self, values: &ValueSet);
}

impl<F> FormSubmitter for F
where
    F: FnMut(&ValueSet) + Send,
{
    fn on_submit(&mut self, values: &ValueSet) {
        self(values)
    }
}

/// Default submitter: records the submission in the log and nothing else
#[derive(Debug, Clone)]
pub struct LogSubmitter {
    /// Log field keys only, never values
    pub redact: bool,
}

impl LogSubmitter {
    pub fn new(redact: bool) -> Self {
        Self { redact }
    }

    /// Line written to the log for a submission
    pub fn log_line(&self, values: &ValueSet) -> String {
        if self.redact {
            let mut keys: Vec<&str> = values.keys().collect();
            keys.sort_unstable();
            format!("Form submitted successfully: fields [{}]", keys.join(", "))
        } else {
            format!("Form submitted successfully: {}", values.to_json())
        }
    }
}

impl Default for LogSubmitter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FormSubmitter for LogSubmitter {
    fn on_submit(&mut self, values: &ValueSet) {
        info!("{}", self.log_line(values));
    }
}

use dot_query_domain::{AnswerSet, CipherSuiteRegistry, DomainError};

pub const NO_RESULTS_LINE: &str = "No results found.";

/// Turns query outcomes into the lines printed for the user.
pub struct ResultRenderer;

impl ResultRenderer {
    /// One line per record in wire order, or the no-results line.
    pub fn render(answers: &AnswerSet) -> Vec<String> {
        if answers.is_empty() {
            return vec![NO_RESULTS_LINE.to_string()];
        }

        answers.iter().map(|record| record.to_string()).collect()
    }

    pub fn render_error(error: &DomainError) -> Vec<String> {
        match error {
            DomainError::MissingDomain => vec!["Please provide a domain to query.".to_string()],
            DomainError::NoServerAvailable => vec!["Failed to find a DNS server.".to_string()],
            DomainError::InvalidCipherSuite(_) => {
                let mut lines =
                    vec!["Invalid cipher suites. please choose one of the list:".to_string()];
                lines.extend(CipherSuiteRegistry::names().map(|name| format!("\t- {}", name)));
                lines
            }
            DomainError::ConnectionError(cause) => {
                vec![format!("Error connecting to DNS server: {}", cause)]
            }
            DomainError::QueryError(cause) => {
                vec![format!("Error querying DNS server: {}", cause)]
            }
        }
    }

    pub fn render_outcome(outcome: &Result<AnswerSet, DomainError>) -> Vec<String> {
        match outcome {
            Ok(answers) => Self::render(answers),
            Err(e) => Self::render_error(e),
        }
    }
}

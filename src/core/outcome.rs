use crate::models::MatchResponse;
use crate::services::MatchError;

/// What a finished lookup means for the person holding the phone
#[derive(Debug)]
pub enum MatchOutcome {
    /// At least one photo matched; ids in backend order
    Found(Vec<String>),
    NoMatches,
    Failed(MatchError),
}

impl MatchOutcome {
    pub fn from_result(result: Result<MatchResponse, MatchError>) -> Self {
        match result {
            Ok(resp) if resp.matches.is_empty() => MatchOutcome::NoMatches,
            Ok(resp) => MatchOutcome::Found(resp.matches),
            Err(e) => MatchOutcome::Failed(e),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MatchOutcome::Found(_) => "Found You!",
            MatchOutcome::NoMatches => "No Matches",
            MatchOutcome::Failed(_) => "Error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            MatchOutcome::Found(ids) => {
                format!("We found {} photos matching your face.", ids.len())
            }
            MatchOutcome::NoMatches => {
                "Could not find any photos matching your face.".to_string()
            }
            MatchOutcome::Failed(MatchError::Timeout(_)) => {
                "The recognition service took too long to respond.".to_string()
            }
            MatchOutcome::Failed(MatchError::ServerError { .. }) => {
                "The recognition server returned an error.".to_string()
            }
            MatchOutcome::Failed(MatchError::NetworkError(_)) => {
                "Face recognition server is offline or unreachable.".to_string()
            }
        }
    }

    /// Ids to filter the gallery by
    ///
    /// `NoMatches` and `Failed` both leave the gallery unfiltered.
    pub fn filter(&self) -> Option<&[String]> {
        match self {
            MatchOutcome::Found(ids) => Some(ids.as_slice()),
            MatchOutcome::NoMatches | MatchOutcome::Failed(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, MatchOutcome::Failed(_))
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a pull request as shown in list views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestState {
    #[default]
    Open,
    Closed,
    Merged,
    Draft,
}

impl PullRequestState {
    /// `true` while the pull request can still receive changes.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Open | Self::Draft)
    }
}

/// Short description of a pull request, one row of a list view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestSummary {
    /// Remote identifier, unique per server.
    pub id: u64,
    /// Repository-local number (`#123`).
    #[serde(default)]
    pub number: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub state: PullRequestState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PullRequestSummary {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            number: 0,
            title: title.into(),
            author: None,
            state: PullRequestState::default(),
            url: None,
        }
    }

    #[must_use]
    pub const fn with_number(mut self, number: u64) -> Self {
        self.number = number;
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub const fn with_state(mut self, state: PullRequestState) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl fmt::Display for PullRequestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.number, self.title)
    }
}

/// Location of a repository on a code-hosting server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryCoordinates {
    pub server: String,
    pub owner: String,
    pub name: String,
}

impl RepositoryCoordinates {
    pub fn new(server: impl Into<String>, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self { server: server.into(), owner: owner.into(), name: name.into() }
    }

    /// `owner/name`, the form used in titles and URLs.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Everything an action handler needs to know about the current pull-request view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDataContext {
    pub repository: RepositoryCoordinates,
    /// Login of the authenticated account, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Pull request currently opened in the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<PullRequestSummary>,
}

impl ActionDataContext {
    pub const fn new(repository: RepositoryCoordinates) -> Self {
        Self { repository, account: None, current: None }
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_current(mut self, current: PullRequestSummary) -> Self {
        self.current = Some(current);
        self
    }

    pub const fn is_authenticated(&self) -> bool {
        self.account.is_some()
    }
}

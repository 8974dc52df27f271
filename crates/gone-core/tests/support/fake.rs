use std::collections::{HashMap, VecDeque};
use std::io;

use gone_core::error::VcsError;
use gone_core::prompt::Confirm;
use gone_core::vcs::{BranchRef, UpstreamStatus, VersionControl};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch,
    CurrentBranch,
    List,
    Detach,
    Delete(String),
}

/// In-memory working copy.
#[derive(Debug, Default)]
pub struct FakeVcs {
    pub branches: Vec<BranchRef>,
    pub current: Option<String>,
    pub calls: Vec<Call>,
    pub fetch_status: Option<i32>,
    pub detach_status: Option<i32>,
    pub delete_status: HashMap<String, i32>,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn branch(mut self, name: &str, upstream: UpstreamStatus) -> Self {
        self.branches.push(BranchRef::new(name, upstream));
        self
    }

    pub fn checked_out(mut self, name: &str) -> Self {
        self.current = Some(name.to_string());
        self
    }

    pub fn failing_delete(mut self, name: &str, code: i32) -> Self {
        self.delete_status.insert(name.to_string(), code);
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.branches.iter().map(|b| b.name.as_str()).collect()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn deletes(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Delete(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    fn failure(command: &str, code: i32) -> VcsError {
        VcsError::Failed {
            command: command.to_string(),
            code: Some(code),
            stderr: String::new(),
        }
    }
}

impl VersionControl for FakeVcs {
    fn fetch_and_prune(&mut self) -> Result<(), VcsError> {
        self.calls.push(Call::Fetch);
        match self.fetch_status {
            Some(code) => Err(Self::failure("git fetch --all --prune", code)),
            None => Ok(()),
        }
    }

    fn current_branch(&mut self) -> Option<String> {
        self.calls.push(Call::CurrentBranch);
        self.current.clone()
    }

    fn list_branches_with_tracking(&mut self) -> Result<Vec<BranchRef>, VcsError> {
        self.calls.push(Call::List);
        Ok(self.branches.clone())
    }

    fn detach_head(&mut self) -> Result<(), VcsError> {
        self.calls.push(Call::Detach);
        if let Some(code) = self.detach_status {
            return Err(Self::failure("git checkout --detach HEAD", code));
        }
        self.current = None;
        Ok(())
    }

    fn delete_branch(&mut self, name: &str) -> Result<(), VcsError> {
        self.calls.push(Call::Delete(name.to_string()));
        if let Some(code) = self.delete_status.get(name) {
            return Err(Self::failure(&format!("git branch -D {name}"), *code));
        }
        if self.current.as_deref() == Some(name) {
            return Err(Self::failure(&format!("git branch -D {name}"), 1));
        }
        self.branches.retain(|b| b.name != name);
        Ok(())
    }
}

/// Answers confirmations from a fixed script.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    pub answers: VecDeque<bool>,
    pub asked: Vec<String>,
}

impl ScriptedConfirm {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            asked: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm_delete_checked_out(&mut self, branch: &str) -> io::Result<bool> {
        self.asked.push(branch.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

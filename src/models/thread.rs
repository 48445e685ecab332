use serde_json::{Map, Value};
use std::fmt;

use crate::projection::{Projectable, Projection, ToProjected};

/// Which way a thread's messages travel relative to the local user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    From,
    To,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::From => "from",
            Direction::To => "to",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mailbox folders, numbered the way the site's message endpoint
/// expects them. Folder 3 is skipped upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folder {
    Inbox,
    Outbox,
    Drafts,
}

impl Folder {
    pub fn number(&self) -> u8 {
        match self {
            Folder::Inbox => 1,
            Folder::Outbox => 2,
            Folder::Drafts => 4,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Folder::Inbox => Direction::From,
            Folder::Outbox | Folder::Drafts => Direction::To,
        }
    }
}

/// A conversation between the local user and one other person.
///
/// `messages` starts empty; application code appends bodies as it
/// fetches them. The direction tag is fixed at construction and stays
/// out of the serialized form.
pub struct MessageThread {
    pub sender: String,
    pub threadid: String,
    pub unread: bool,
    pub messages: Vec<String>,
    direction: Direction,
}

impl MessageThread {
    pub fn new(sender: String, threadid: String, unread: bool, direction: Direction) -> Self {
        Self {
            sender,
            threadid,
            unread,
            messages: Vec::new(),
            direction,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn push_message(&mut self, body: String) {
        self.messages.push(body);
    }
}

impl fmt::Display for MessageThread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unread = if self.unread { "Unread" } else { "Read" };
        write!(f, "<{} message {} {}>", unread, self.direction, self.sender)
    }
}

impl Projectable for MessageThread {
    fn project(&self) -> Map<String, Value> {
        Projection::new()
            .field("sender", &self.sender)
            .field("threadid", &self.threadid)
            .field("unread", &self.unread)
            .field("messages", &self.messages)
            .finish()
    }
}

impl ToProjected for MessageThread {
    fn to_projected(&self) -> Option<Value> {
        Some(Value::Object(self.project()))
    }
}

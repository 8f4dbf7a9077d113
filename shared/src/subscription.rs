// Fixed subscription documents understood by the chat server

use std::fmt;

use clap::ValueEnum;

/// Chatroom-scoped subscription, selecting only the message text
pub const CHATROOM_DOCUMENT: &str = r#"
    subscription subs {
      onNewChatMessage(chatroom: "lovely") {
        text
      }
    }
  "#;

/// Channel-scoped subscription with the nested message selection
pub const CHANNEL_DOCUMENT: &str = r#"
    subscription subs {
      onNewChatMessage(channelIdentifier: "lovely") {
        channelIdentifier
        message {
          id
          message
          createAt
          owner {
            username
          }
        }
      }
    }
  "#;

/// Which subscription document the tester sends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Variant {
    #[default]
    Chatroom,
    Channel,
}

impl Variant {
    pub fn document(self) -> &'static str {
        match self {
            Variant::Chatroom => CHATROOM_DOCUMENT,
            Variant::Channel => CHANNEL_DOCUMENT,
        }
    }
}

// Same names the CLI accepts
impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

//! Caremate — conversation core for a senior-care companion app.
//!
//! Owns the durable chat history for a user session and exchanges turns
//! with a hosted chat-completion service. Screens stay thin: they start a
//! [`session::ChatSession`], forward user input, and render the messages.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use caremate::prelude::*;
//!
//! # async fn example() -> caremate::error::Result<()> {
//! let store = ConversationStore::new(Arc::new(FileKeyValueStore::new_default()));
//! let client = HttpCompletionClient::new(CompanionConfig::from_env());
//! let mut session = ChatSession::new(store, Arc::new(client));
//! session.start()?;
//! let reply = session.send("How did I sleep last night?").await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod completion;
pub mod config;
pub mod error;
pub mod prelude;
pub mod session;
pub mod store;
pub mod types;

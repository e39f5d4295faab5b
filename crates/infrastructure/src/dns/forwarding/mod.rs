pub mod message_builder;
pub mod passthrough;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use passthrough::{PassthroughConfig, PassthroughHandle, PassthroughService};
pub use response_parser::ResponseParser;

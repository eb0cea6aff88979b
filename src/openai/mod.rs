mod core;
mod transport;

pub use self::core::{ChatCompletionRequest, Message, Role, parse_completion};
pub use transport::{
    BoxedTransport, CONNECT_TIMEOUT, HttpTransport, READ_TIMEOUT, Transport, completions_url,
};

//! Session authentication helpers
//!
//! - ID token claim decoding
//! - Local token persistence

mod token;
mod token_store;

pub use token::{TokenError, decode_user_info, id_token_from_fragment, user_info_from_fragment};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};

#[cfg(test)]
pub(crate) use token::encode_test_token;

/*!
Message authentication code implementations.
*/

mod hmac_auth;

pub use hmac_auth::Hmac;

use crate::core::crypto::traits::MessageAuthenticationCode;

/// Create an HMAC over the named hash, if that hash is supported
pub fn create_hmac(hash_name: &str) -> Option<Box<dyn MessageAuthenticationCode>> {
    Hmac::new(hash_name).map(|mac| Box::new(mac) as Box<dyn MessageAuthenticationCode>)
}

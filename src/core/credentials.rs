//! Credentials used to authenticate against the chat completion
//! endpoint.
use std::env;
use std::fmt;

/// An opaque API secret. The value is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: &str) -> Self {
        Self(secret.to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Source of the credential for a new session. Returning `None`
/// means no credential is available.
pub trait CredentialProvider: Send + Sync {
    /// Short description of where the credential comes from, used in
    /// error messages.
    fn source(&self) -> String;

    fn credential(&self) -> Option<Credential>;
}

/// Looks the credential up in an environment variable.
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub const DEFAULT_VAR: &'static str = "DEEPSEEK";

    pub fn new(var: &str) -> Self {
        Self {
            var: var.to_string(),
        }
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VAR)
    }
}

impl CredentialProvider for EnvCredential {
    fn source(&self) -> String {
        format!("environment variable {}", self.var)
    }

    fn credential(&self) -> Option<Credential> {
        env::var(&self.var).ok().map(Credential)
    }
}

/// A credential that is already known, e.g. read from a secret store by
/// the caller.
pub struct StaticCredential(Option<String>);

impl StaticCredential {
    pub fn new(secret: &str) -> Self {
        Self(Some(secret.to_string()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredential {
    fn source(&self) -> String {
        String::from("static credential")
    }

    fn credential(&self) -> Option<Credential> {
        self.0.as_deref().map(Credential::new)
    }
}

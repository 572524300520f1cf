// Session State
// Keys and ciphertexts held between shell invocations, owned by the shell

use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rsa::{
    decrypt_bytes, decrypt_text, encrypt_bytes, encrypt_text, rsa_keygen_with, Ciphertext, KeygenConfig, RsaError,
    RsaKeyPair,
};
use crate::util::{read_json, write_json, FileError, FileResult};

/// Default location of the session file
pub const DEFAULT_SESSION_FILE: &str = ".rsa_session.json";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no keys in session, please generate keys first")]
    MissingKeys,

    #[error("no encrypted message in session, please encrypt a message first")]
    MissingCiphertext,

    #[error("no encrypted file in session, please encrypt a file first")]
    MissingFileCiphertext,

    #[error(transparent)]
    Rsa(#[from] RsaError),

    #[error(transparent)]
    File(#[from] FileError),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Everything the shell remembers between commands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub keys: Option<RsaKeyPair>,
    pub text_ciphertext: Option<Ciphertext>,
    pub file_ciphertext: Option<Ciphertext>,
}

impl Session {
    /// Load a session, starting fresh when the file does not exist yet
    ///
    /// Stored keys must agree on n = p*q with n > 1, otherwise loading fails.
    pub fn load(path: &Path) -> SessionResult<Self> {
        if !path.exists() {
            warn!("no session at {}, starting a new one", path.display());
            return Ok(Self::default());
        }

        let session: Self = read_json(path)?;
        if let Some(keys) = &session.keys {
            keys.validate()?;
        }
        Ok(session)
    }

    pub fn save(&self, path: &Path) -> FileResult<()> {
        write_json(path, self)
    }

    fn keys(&self) -> SessionResult<&RsaKeyPair> {
        self.keys.as_ref().ok_or(SessionError::MissingKeys)
    }

    /// Replace the session keys with a freshly generated pair
    ///
    /// Ciphertexts from the previous keys can no longer be decrypted, so
    /// they are dropped as well.
    pub fn generate_keys(&mut self, config: &KeygenConfig) -> SessionResult<&RsaKeyPair> {
        let keypair = rsa_keygen_with(config, &mut rand::thread_rng())?;
        info!("session keys replaced");
        self.text_ciphertext = None;
        self.file_ciphertext = None;
        Ok(&*self.keys.insert(keypair))
    }

    pub fn encrypt_message(&mut self, message: &str) -> SessionResult<&Ciphertext> {
        let ciphertext = encrypt_text(message, &self.keys()?.public_key)?;
        info!("encrypted message of {} characters", ciphertext.len());
        Ok(&*self.text_ciphertext.insert(ciphertext))
    }

    pub fn decrypt_message(&self) -> SessionResult<String> {
        let keys = self.keys()?;
        let ciphertext = self.text_ciphertext.as_ref().ok_or(SessionError::MissingCiphertext)?;
        Ok(decrypt_text(ciphertext, &keys.private_key)?)
    }

    pub fn encrypt_file(&mut self, content: &[u8]) -> SessionResult<&Ciphertext> {
        let ciphertext = encrypt_bytes(content, &self.keys()?.public_key)?;
        info!("encrypted file of {} bytes", ciphertext.len());
        Ok(&*self.file_ciphertext.insert(ciphertext))
    }

    pub fn decrypt_file(&self) -> SessionResult<Vec<u8>> {
        let keys = self.keys()?;
        let ciphertext = self.file_ciphertext.as_ref().ok_or(SessionError::MissingFileCiphertext)?;
        Ok(decrypt_bytes(ciphertext, &keys.private_key)?)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

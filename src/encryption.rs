//! Password-based encryption of configuration text.
//!
//! The scheme is AES-256-CBC with PKCS7 padding. Both the key and the IV
//! are carved out of a single SHA-256 digest of the password: the first
//! 32 bytes of the digest become the key and the first 16 bytes become
//! the IV. There is no salt and no random IV, so the same password and
//! plaintext always produce the same ciphertext.
//!
//! This determinism is load-bearing: files written earlier with a given
//! password must keep decrypting, so the derivation cannot be changed
//! without breaking every existing config file. The cost is that the
//! scheme is not semantically secure under password reuse. Treat it as
//! at-rest obfuscation keyed by a password, not as a substitute for a
//! real secret store.
//!
//! Ciphertext is stored as standard base64 so the config file stays a
//! plain UTF-8 text file either way.

use aes::Aes256;
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{Engine as _, engine::general_purpose};
use sha2::{Digest, Sha256};
use thiserror::Error;
use zeroize::Zeroizing;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES-256 key length in bytes.
pub const KEY_LEN: usize = 32;

/// AES block length in bytes. The IV is exactly one block long.
pub const BLOCK_LEN: usize = 16;

/// Errors produced by the encryption component.
#[derive(Debug, Error)]
pub enum EncryptionError {
    #[error("decoding from Base64 failed: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// The derived key or IV had the wrong length for the cipher.
    /// Unreachable with the fixed [`KEY_LEN`] / [`BLOCK_LEN`] derivations.
    #[error("invalid key or IV length")]
    KeyLength,

    /// Padding validation failed. Covers corrupted or truncated
    /// ciphertext as well as the common wrong-password case.
    #[error("ciphertext is invalid or the password is wrong")]
    InvalidCiphertext,

    #[error("decrypted data is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Derives `length` bytes of key material from a password.
///
/// Returns the first `length` bytes of `SHA-256(password)`. Called once
/// with [`KEY_LEN`] and once with [`BLOCK_LEN`] per operation, which ties
/// the key and IV to each other deterministically. `length` must not
/// exceed the digest size (32 bytes).
pub(crate) fn derive_key_material(password: &str, length: usize) -> Zeroizing<Vec<u8>> {
    let digest = Sha256::digest(password.as_bytes());
    Zeroizing::new(digest[..length].to_vec())
}

/// Encrypts `plaintext` with a password, returning base64 ciphertext.
pub fn encrypt(plaintext: &str, password: &str) -> Result<String, EncryptionError> {
    let key = derive_key_material(password, KEY_LEN);
    let iv = derive_key_material(password, BLOCK_LEN);

    let ciphertext = Aes256CbcEnc::new_from_slices(&key, &iv)
        .map_err(|_| EncryptionError::KeyLength)?
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Ok(general_purpose::STANDARD.encode(ciphertext))
}

/// Decrypts base64 ciphertext produced by [`encrypt`] with the same password.
///
/// # Errors
///
/// Returns [`EncryptionError::Base64Decode`] for malformed base64 and
/// [`EncryptionError::InvalidCiphertext`] when padding validation fails,
/// which is how a wrong password usually (but not provably) manifests.
pub fn decrypt(ciphertext_b64: &str, password: &str) -> Result<String, EncryptionError> {
    let key = derive_key_material(password, KEY_LEN);
    let iv = derive_key_material(password, BLOCK_LEN);

    let ciphertext = general_purpose::STANDARD.decode(ciphertext_b64)?;

    let plaintext = Aes256CbcDec::new_from_slices(&key, &iv)
        .map_err(|_| EncryptionError::KeyLength)?
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| EncryptionError::InvalidCiphertext)?;

    Ok(String::from_utf8(plaintext)?)
}

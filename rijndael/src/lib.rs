//! # Rijndael / AES
//!
//! A from-scratch implementation of the Rijndael block cipher (AES) for
//! 128-, 192- and 256-bit keys, with ECB and CBC block-chaining modes.
//!
//! The cipher works on fixed 16-byte blocks. A [`Session`] owns the expanded
//! key schedule (built once per session) and, for CBC, the chaining state;
//! the caller feeds it blocks strictly in stream order.
//!
//! ## Usage
//!
//! ```rust
//! use rijndael::{CipherKey, Construction, Mode, Session};
//!
//! let key = CipherKey::from_hex("000102030405060708090a0b0c0d0e0f")?;
//! let mut session = Session::new(key, Construction::Ecb, None)?;
//!
//! let ciphertext = session.transform_block(&[0u8; 16], Mode::Encrypt)?;
//! assert_eq!(ciphertext.len(), 16);
//! # Ok::<(), rijndael::CipherError>(())
//! ```
//!
//! No padding scheme is implemented: a trailing partial block is an error
//! the caller must handle before the data reaches the cipher. GCM is a
//! recognized construction tag but has no implementation and is rejected at
//! session creation.

pub mod cipher;
pub mod error;
pub mod gf;
pub mod key;
pub mod modes;
pub mod rcon;
pub mod sbox;
pub mod schedule;
pub mod session;
pub mod state;

pub use cipher::{BlockCipher, RijndaelCipher};
pub use error::{CipherError, Result};
pub use key::CipherKey;
pub use modes::ChainingContext;
pub use schedule::KeySchedule;
pub use session::{parse_iv_hex, Construction, Mode, Session};
pub use state::{State, BLOCK_SIZE};
